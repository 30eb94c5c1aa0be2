use chrono::Local;
use creator_scrape::{info_time, process::process_directory, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    process_directory().await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
