use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use seoreport::controller::AuditController;
use seoreport::domain::models::AuditRequest;
use seoreport::lifecycle;
use seoreport::render;
use seoreport::service::{ApiClient, ExportFormat};
use seoreport::session::Tab;

const MAX_PAGES_CHOICES: [i64; 6] = [1, 5, 10, 20, 50, 100];
const MAX_DEPTH_CHOICES: [i64; 4] = [0, 1, 2, 3];

fn parse_max_pages(s: &str) -> Result<i64, String> {
    let value: i64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if MAX_PAGES_CHOICES.contains(&value) {
        Ok(value)
    } else {
        Err(format!("max pages must be one of {:?}", MAX_PAGES_CHOICES))
    }
}

fn parse_max_depth(s: &str) -> Result<i64, String> {
    let value: i64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if MAX_DEPTH_CHOICES.contains(&value) {
        Ok(value)
    } else {
        Err(format!("max depth must be one of {:?}", MAX_DEPTH_CHOICES))
    }
}

fn parse_view(s: &str) -> Result<Tab, String> {
    s.parse()
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
}

/// Run an SEO audit against the remote service and render the report.
#[derive(Debug, Parser)]
#[command(name = "seoreport", version, about)]
struct Cli {
    /// Target website URL (e.g. https://example.com)
    url: String,

    /// Maximum number of pages to crawl
    #[arg(long, default_value_t = 5, value_parser = parse_max_pages)]
    max_pages: i64,

    /// Maximum crawl depth (0 = home page only)
    #[arg(long, default_value_t = 2, value_parser = parse_max_depth)]
    max_depth: i64,

    /// Report view to render: overview, positive, technical, content, pages, ai
    #[arg(long, default_value = "overview", value_parser = parse_view)]
    view: Tab,

    /// Expand this common-issue index in the overview to list affected pages
    #[arg(long)]
    expand: Option<usize>,

    /// Export the report in this format (pdf, csv or json); repeatable
    #[arg(long = "export", value_parser = parse_format)]
    export: Vec<ExportFormat>,

    /// Base URL of the audit service API
    #[arg(long, env = "SEOREPORT_API_BASE", default_value = "http://127.0.0.1:5000/api")]
    api_base: String,

    /// Directory for exported report artifacts
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    lifecycle::init_logging();
    let cli = Cli::parse();

    let mut controller = AuditController::new(ApiClient::new(cli.api_base), cli.out_dir);

    let request = AuditRequest {
        url: cli.url,
        max_pages: cli.max_pages,
        max_depth: cli.max_depth,
    };

    if controller.run_audit(request).await.is_err() {
        eprint!("{}", render::render(controller.session()));
        return ExitCode::FAILURE;
    }

    controller.select_tab(cli.view);
    if let Some(index) = cli.expand {
        controller.toggle_issue(index);
    }

    print!("{}", render::render(controller.session()));

    let mut failed_exports = false;
    for format in cli.export {
        match controller.export_report(format).await {
            Ok(Some(path)) => println!("Exported {} report to {}", format, path.display()),
            Ok(None) => {}
            Err(_) => {
                failed_exports = true;
                if let Some(notice) = controller.take_export_notice() {
                    eprintln!("{}", notice);
                }
            }
        }
    }

    if failed_exports {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
