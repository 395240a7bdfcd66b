use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::Catalog;
use crate::board::domain::{Posting, PostingId};

const DESCRIPTION_SEPARATOR: char = '|';

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownFormat(String),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid catalog JSON data: {}", err),
            CatalogImportError::UnknownFormat(path) => write!(
                f,
                "cannot infer catalog format for '{}' (expected .json or .csv)",
                path
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::UnknownFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Loads catalog files exported by the catalog collaborator.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogImportError::UnknownFormat(path.display().to_string()))?;
        let file = File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: CatalogFormat,
    ) -> Result<Catalog, CatalogImportError> {
        let postings = match format {
            CatalogFormat::Json => serde_json::from_reader::<_, Vec<Posting>>(reader)?,
            CatalogFormat::Csv => parse_csv(reader)?,
        };
        Ok(Catalog::new(postings))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    company: String,
    location: String,
    job_type: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    work_type: String,
    #[serde(default)]
    salary_display: String,
    salary_value: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    posted_time: String,
}

impl From<CatalogRow> for Posting {
    fn from(row: CatalogRow) -> Self {
        let description = row
            .description
            .split(DESCRIPTION_SEPARATOR)
            .map(str::trim)
            .filter(|bullet| !bullet.is_empty())
            .map(str::to_string)
            .collect();

        Posting {
            id: PostingId(row.id),
            title: row.title,
            company: row.company,
            location: row.location,
            job_type: row.job_type,
            experience: row.experience,
            work_type: row.work_type,
            salary_display: row.salary_display,
            salary_value: row.salary_value,
            description,
            posted_time: row.posted_time,
        }
    }
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<Posting>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut postings = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        postings.push(Posting::from(record?));
    }

    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::catalog::DataIntegrityWarning;
    use std::io::Cursor;

    const CSV: &str = "id,title,company,location,job_type,experience,work_type,salary_display,salary_value,description,posted_time\n\
1,Full Stack Developer,Amazon,Bangalore,Full Time,1-3 yr Exp,Onsite,12LPA,12,Ship features | Review code |,24h Ago\n\
2,Node Js Developer,Tesla,Mumbai,Part Time,1-3 yr Exp,Onsite,25LPA,25,,2d Ago\n";

    #[test]
    fn csv_rows_become_postings_in_order() {
        let catalog = CatalogImporter::from_reader(Cursor::new(CSV), CatalogFormat::Csv)
            .expect("csv imports");

        assert_eq!(catalog.len(), 2);
        let first = &catalog.postings()[0];
        assert_eq!(first.id, PostingId("1".to_string()));
        assert_eq!(first.job_type, "Full Time");
        assert_eq!(first.salary_value, 12);
        assert_eq!(first.description, vec!["Ship features", "Review code"]);
        assert!(catalog.postings()[1].description.is_empty());
    }

    #[test]
    fn json_array_imports() {
        let json = r#"[{
            "id": "9",
            "title": "QA Engineer",
            "company": "Swiggy",
            "location": "Pune",
            "job_type": "Contract",
            "experience": "2 yr Exp",
            "work_type": "Remote",
            "salary_display": "30LPA",
            "salary_value": 30,
            "description": ["Automate tests"],
            "posted_time": "1h Ago"
        }]"#;

        let catalog = CatalogImporter::from_reader(Cursor::new(json), CatalogFormat::Json)
            .expect("json imports");
        assert_eq!(catalog.postings()[0].company, "Swiggy");
    }

    #[test]
    fn unspaced_job_type_row_is_imported_with_a_warning() {
        let csv = "id,title,company,location,job_type,salary_value\n7,Dev,Acme,Pune,FullTime,30\n";
        let catalog = CatalogImporter::from_reader(Cursor::new(csv), CatalogFormat::Csv)
            .expect("csv imports");

        assert_eq!(catalog.len(), 1);
        assert!(matches!(
            catalog.integrity_warnings(),
            [DataIntegrityWarning::UnknownJobType { job_type, .. }] if job_type == "FullTime"
        ));
    }

    #[test]
    fn malformed_salary_is_a_csv_error() {
        let csv = "id,title,company,location,job_type,salary_value\n1,Dev,Acme,Pune,Contract,lots\n";
        let error = CatalogImporter::from_reader(Cursor::new(csv), CatalogFormat::Csv)
            .expect_err("salary must be numeric");
        assert!(matches!(error, CatalogImportError::Csv(_)));
    }

    #[test]
    fn unknown_extension_is_rejected_before_io() {
        let error = CatalogImporter::from_path("./catalog.xml").expect_err("xml unsupported");
        match error {
            CatalogImportError::UnknownFormat(path) => assert!(path.ends_with("catalog.xml")),
            other => panic!("expected unknown format, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let error = CatalogImporter::from_path("./does-not-exist.json").expect_err("io error");
        assert!(matches!(error, CatalogImportError::Io(_)));
    }
}
