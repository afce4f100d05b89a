use anyhow::Result;
use clap::{Parser, Subcommand};
use kksource::dispatch::{self, Responder};
use kksource::{KuaiKanSource, SourceConfig};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "kksource")]
#[command(about = "KuaiKan Manhua content source adapter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML), defaults apply when absent
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the browse-filter options
    Filters,
    /// List manga by category filters or keyword
    List {
        /// Page number (string, as the host would pass it)
        #[arg(default_value = "1")]
        page: String,
        /// Page size
        #[arg(default_value = "20")]
        page_size: String,
        /// Search keyword; takes precedence over filters when non-empty
        #[arg(short, long)]
        keyword: Option<String>,
        /// Filter options as a JSON object, e.g. '{"tag_id": "46"}'
        #[arg(short, long)]
        filters: Option<String>,
    },
    /// Fetch detail data for a detail-page address
    Detail {
        /// Address like https://www.kuaikanmanhua.com/web/topic/544
        url: String,
    },
    /// List the page images of a chapter-page address
    Images {
        /// Address like https://www.kuaikanmanhua.com/web/comic/462578
        url: String,
    },
    /// Resolve an image address before download
    Resolve { url: String },
}

/// Responder standing in for the host: result JSON to stdout, failure
/// message kept for the exit status.
#[derive(Default)]
struct StdoutResponder {
    failure: Mutex<Option<String>>,
}

impl Responder for StdoutResponder {
    fn result(&self, value: Value) {
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(_) => println!("{}", value),
        }
    }

    fn exception(&self, message: String) {
        *self.failure.lock().unwrap() = Some(message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => SourceConfig::load(path)?,
        None => SourceConfig::default(),
    };

    let source = KuaiKanSource::new(config);
    let responder = StdoutResponder::default();

    match cli.command {
        Commands::Filters => {
            dispatch::set_manga_list_filter_options(&source, &responder).await;
        }
        Commands::List {
            page,
            page_size,
            keyword,
            filters,
        } => {
            dispatch::get_manga_list(
                &source,
                &responder,
                &page,
                &page_size,
                keyword.as_deref(),
                filters.as_deref(),
            )
            .await;
        }
        Commands::Detail { url } => {
            dispatch::get_manga_data(&source, &responder, &url).await;
        }
        Commands::Images { url } => {
            dispatch::get_chapter_image_list(&source, &responder, &url).await;
        }
        Commands::Resolve { url } => {
            dispatch::get_image_url(&source, &responder, &url).await;
        }
    }

    if let Some(message) = responder.failure.lock().unwrap().take() {
        anyhow::bail!(message);
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("kksource={}", level))
        .with_target(false)
        .init();

    Ok(())
}
