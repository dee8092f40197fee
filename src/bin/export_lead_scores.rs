use clap::Parser;
use lead_tracker::api_client::BusinessClient;
use lead_tracker::config::ClientConfig;
use lead_tracker::export::{export_to_path, ExportFormat, DEFAULT_EXPORT_PATH};
use lead_tracker::models::BusinessQueryParams;
use lead_tracker::obs;
use std::path::PathBuf;

/// Export businesses and lead scores from the backend API.
///
/// A failed fetch is reported and an empty export is still written.
#[derive(Parser, Debug)]
#[command(name = "export-lead-scores", version, about)]
struct Cli {
    /// Output path.
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    out: PathBuf,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

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

    let businesses = match client.list(&BusinessQueryParams::default()).await {
        Ok(businesses) => businesses,
        Err(e) => {
            tracing::error!("Error fetching businesses: {}", e);
            Vec::new()
        }
    };

    let count = export_to_path(&businesses, &cli.out, cli.format)?;
    println!("Exported {} businesses to {}", count, cli.out.display());

    Ok(())
}
