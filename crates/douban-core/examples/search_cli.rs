//! Run one Douban search from the command line and print the records as JSON
//!
//! ```text
//! RUST_LOG=douban_core=debug cargo run -p douban-core --example search_cli -- 三体
//! ```

use douban_core::DoubanScraper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("usage: search_cli <query>");
        std::process::exit(2);
    }

    let scraper = DoubanScraper::new()?;

    match scraper.search(&query).await {
        Ok(records) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
