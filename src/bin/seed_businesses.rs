use clap::Parser;
use lead_tracker::api_client::BusinessClient;
use lead_tracker::config::ClientConfig;
use lead_tracker::obs;
use lead_tracker::seed::{load_seed_file, seed_businesses, DEFAULT_SEED_FILE};
use std::path::PathBuf;

/// Seed sample businesses into the backend API.
#[derive(Parser, Debug)]
#[command(name = "seed-businesses", version, about)]
struct Cli {
    /// JSON file holding an array of business payloads.
    #[arg(short, long, default_value = DEFAULT_SEED_FILE)]
    file: PathBuf,

    /// Backend base URL (overrides API_URL).
    #[arg(long = "api-url")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    obs::init_tracing(obs::CLIENT_FILTER);
    let cli = Cli::parse();

    let config = ClientConfig::from_env_or(cli.api_url)?;
    let client = BusinessClient::new(&config)?;

    let payloads = load_seed_file(&cli.file)?;
    println!(
        "Seeding {} businesses from {} into {}",
        payloads.len(),
        cli.file.display(),
        client.base_url()
    );

    let report = seed_businesses(&client, &payloads).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(id) => println!("  ✓ Created: {} -> id {}", outcome.name, id),
            Err(e) => println!("  ✗ {}: {}", outcome.name, e),
        }
    }
    println!(
        "\nDone: {} created, {} failed",
        report.created(),
        report.failed()
    );

    Ok(())
}
