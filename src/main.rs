use clap::Parser;
use pepscrape::config::{cli::Args, Config};
use pepscrape::error::Result;
use pepscrape::PersonHandler;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level.parse::<Level>().unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args)?;
    let handler = PersonHandler::from_config(&config)?;
    let record = handler.handle(&config.args.person_id).await?;

    let output = if config.args.compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{output}");

    info!("Scraping completed successfully!");
    Ok(())
}
