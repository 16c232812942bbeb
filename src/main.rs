use clap::Parser;
use lemon::core::config::{self, CliOverrides};
use lemon::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lemon", about = "Little Lemon menu viewer")]
struct Args {
    /// Menu category to show
    #[arg(short, long)]
    category: Option<String>,

    /// URL of the menu document
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lemon.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lemon.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::LemonConfig::default()
    });
    let cli = CliOverrides {
        url: args.url,
        category: args.category,
    };
    let resolved = config::resolve(&file_config, &cli)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Lemon starting up: category={} url={}",
        resolved.category,
        resolved.url
    );

    tui::run(resolved)
}
