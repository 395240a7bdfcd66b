use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use job_board::board::catalog::{Catalog, CatalogImporter};
use job_board::board::filter::{evaluate, FilterOptions, SalaryRange};
use job_board::board::posting::{InMemoryPostingStore, JobDraft, PostingForm};
use job_board::config::{AppConfig, CatalogConfig};
use job_board::error::AppError;
use job_board::http::{board_router, form_from_input, BoardState, JobSearchQuery};
use job_board::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Search the job catalog and author new postings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query and audit the job catalog
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Validate, publish, or save a posting draft
    Posting {
        #[command(subcommand)]
        command: PostingCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// List postings matching the given filters, in catalog order
    Search(SearchArgs),
    /// Report postings that violate catalog invariants
    Audit(CatalogArgs),
    /// Print the location and job type filter choices
    Options,
}

#[derive(Args, Debug, Default)]
struct CatalogArgs {
    /// JSON or CSV catalog file (defaults to JOB_BOARD_CATALOG, then the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[command(flatten)]
    source: CatalogArgs,
    /// Case-insensitive text matched against title and company
    #[arg(long, default_value = "")]
    search: String,
    /// Exact location, or "all"
    #[arg(long, default_value = "")]
    location: String,
    /// Exact job type, or "all"
    #[arg(long, default_value = "")]
    job_type: String,
    /// Lower salary bound in thousands per month
    #[arg(long, default_value_t = SalaryRange::FLOOR)]
    salary_min: u32,
    /// Upper salary bound in thousands per month
    #[arg(long, default_value_t = SalaryRange::CEILING)]
    salary_max: u32,
    /// Emit JSON instead of a text listing
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum PostingCommand {
    /// Show field errors for a draft
    Validate(DraftArgs),
    /// Validate and publish a draft
    Publish(DraftArgs),
    /// Save a draft without validation
    Draft(DraftArgs),
}

#[derive(Args, Debug)]
struct DraftArgs {
    /// JSON file holding the draft fields
    #[arg(long)]
    draft: PathBuf,
    /// Evaluation date for the deadline picker (defaults to now)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Jobs { command } => {
            let config = AppConfig::load()?;
            telemetry::init(&config.telemetry)?;
            match command {
                JobsCommand::Search(args) => run_search(&config, args),
                JobsCommand::Audit(args) => run_audit(&config, args),
                JobsCommand::Options => print_json(&FilterOptions::standard()),
            }
        }
        Command::Posting { command } => {
            let config = AppConfig::load()?;
            telemetry::init(&config.telemetry)?;
            run_posting(&config, command)
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_catalog(config: &CatalogConfig, override_path: Option<PathBuf>) -> Result<Catalog, AppError> {
    match override_path.or_else(|| config.path.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading catalog file");
            Ok(CatalogImporter::from_path(path)?)
        }
        None => Ok(Catalog::standard()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(&config.catalog, None)?);
    let board = BoardState::new(
        catalog,
        Arc::new(InMemoryPostingStore::new()),
        config.posting.currency.clone(),
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(board_router(board))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_search(config: &AppConfig, args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        source,
        search,
        location,
        job_type,
        salary_min,
        salary_max,
        json,
    } = args;

    let catalog = load_catalog(&config.catalog, source.catalog)?;
    let criteria = JobSearchQuery {
        search: Some(search),
        location: Some(location),
        job_type: Some(job_type),
        salary_min: Some(salary_min),
        salary_max: Some(salary_max),
    }
    .into_criteria()?;

    let results = evaluate(&criteria, &catalog);
    if json {
        return print_json(&results);
    }

    let range = criteria.salary_range();
    println!(
        "Salary per month: {currency}{}k - {currency}{}k",
        range.min(),
        range.max(),
        currency = config.posting.currency
    );

    if results.is_empty() {
        println!("No jobs found matching your criteria.");
        println!("Try adjusting your filters to see more results.");
        return Ok(());
    }

    println!("{} of {} jobs", results.len(), catalog.len());
    for posting in results {
        println!(
            "- [{}] {} at {} | {} | {} | {} | {} | {}",
            posting.id,
            posting.title,
            posting.company,
            posting.location,
            posting.job_type,
            posting.experience,
            posting.salary_display,
            posting.posted_time
        );
        for bullet in &posting.description {
            println!("    • {bullet}");
        }
    }

    Ok(())
}

fn run_audit(config: &AppConfig, args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(&config.catalog, args.catalog)?;
    let warnings = catalog.integrity_warnings();

    if warnings.is_empty() {
        println!("Catalog of {} postings: no data integrity warnings", catalog.len());
    } else {
        println!(
            "Catalog of {} postings: {} data integrity warning(s)",
            catalog.len(),
            warnings.len()
        );
        for warning in warnings {
            println!("- {warning}");
        }
    }

    Ok(())
}

fn run_posting(config: &AppConfig, command: PostingCommand) -> Result<(), AppError> {
    let (args, action) = match command {
        PostingCommand::Validate(args) => (args, "validate"),
        PostingCommand::Publish(args) => (args, "publish"),
        PostingCommand::Draft(args) => (args, "draft"),
    };

    let raw = std::fs::read_to_string(&args.draft)?;
    let draft: JobDraft = serde_json::from_str(&raw)?;
    let now = match args.today {
        Some(day) => day.and_time(chrono::NaiveTime::MIN),
        None => Local::now().naive_local(),
    };
    let store = InMemoryPostingStore::new();
    if action == "draft" {
        let form = PostingForm::from_draft(draft, config.posting.currency.as_str());
        return print_json(&form.save_draft(&store, Utc::now())?);
    }

    let mut form: PostingForm = form_from_input(draft, &config.posting.currency, now)?;
    match action {
        "publish" => print_json(&form.publish(&store, Utc::now())?),
        _ => print_json(&json!({
            "state": form.state(),
            "submittable": form.is_submittable(),
            "errors": form.validate_all(),
        })),
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
