use crate::board::domain::{Posting, PostingId};

struct SeedPosting {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: &'static str,
    experience: &'static str,
    work_type: &'static str,
    salary_value: u32,
    posted_time: &'static str,
}

const DESCRIPTION: [&str; 2] = [
    "A user-friendly interface lets you browse stunning photos and videos",
    "Filter destinations based on interests and travel style, and create personalized",
];

const SEED: [SeedPosting; 8] = [
    SeedPosting {
        id: "1",
        title: "Full Stack Developer",
        company: "Amazon",
        location: "Bangalore",
        job_type: "Full Time",
        experience: "1-3 yr Exp",
        work_type: "Onsite",
        salary_value: 12,
        posted_time: "24h Ago",
    },
    SeedPosting {
        id: "2",
        title: "Node Js Developer",
        company: "Tesla",
        location: "Mumbai",
        job_type: "Part Time",
        experience: "1-3 yr Exp",
        work_type: "Onsite",
        salary_value: 25,
        posted_time: "24h Ago",
    },
    SeedPosting {
        id: "3",
        title: "UX/UI Designer",
        company: "Swiggy",
        location: "Delhi",
        job_type: "Contract",
        experience: "1-3 yr Exp",
        work_type: "Onsite",
        salary_value: 35,
        posted_time: "24h Ago",
    },
    SeedPosting {
        id: "4",
        title: "Full Stack Developer",
        company: "Amazon",
        location: "Hyderabad",
        job_type: "Full Time",
        experience: "3-5 yr Exp",
        work_type: "Remote",
        salary_value: 60,
        posted_time: "2d Ago",
    },
    SeedPosting {
        id: "5",
        title: "Backend Engineer",
        company: "Tesla",
        location: "Pune",
        job_type: "Full Time",
        experience: "2-4 yr Exp",
        work_type: "Hybrid",
        salary_value: 45,
        posted_time: "3d Ago",
    },
    SeedPosting {
        id: "6",
        title: "Product Designer",
        company: "Swiggy",
        location: "Chennai",
        job_type: "Freelance",
        experience: "1-2 yr Exp",
        work_type: "Remote",
        salary_value: 20,
        posted_time: "5h Ago",
    },
    SeedPosting {
        id: "7",
        title: "Data Analyst Intern",
        company: "Amazon",
        location: "Noida",
        job_type: "Internship",
        experience: "0-1 yr Exp",
        work_type: "Onsite",
        salary_value: 10,
        posted_time: "1w Ago",
    },
    SeedPosting {
        id: "8",
        title: "Engineering Manager",
        company: "Tesla",
        location: "Gurgaon",
        job_type: "Full Time",
        experience: "8-12 yr Exp",
        work_type: "Hybrid",
        salary_value: 95,
        posted_time: "4d Ago",
    },
];

pub(super) fn standard_postings() -> Vec<Posting> {
    SEED.iter()
        .map(|seed| Posting {
            id: PostingId(seed.id.to_string()),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            job_type: seed.job_type.to_string(),
            experience: seed.experience.to_string(),
            work_type: seed.work_type.to_string(),
            salary_display: format!("₹{}k/month", seed.salary_value),
            salary_value: seed.salary_value,
            description: DESCRIPTION.iter().map(|line| line.to_string()).collect(),
            posted_time: seed.posted_time.to_string(),
        })
        .collect()
}
