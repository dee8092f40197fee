use clap::{Args, Parser, Subcommand};
use lead_tracker::api_client::{load_payload_from_file, BusinessClient};
use lead_tracker::config::ClientConfig;
use lead_tracker::errors::ClientError;
use lead_tracker::export::{export_to_path, ExportFormat, DEFAULT_EXPORT_PATH};
use lead_tracker::models::BusinessQueryParams;
use lead_tracker::obs;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

/// Manage businesses via the lead tracker backend API.
#[derive(Parser, Debug)]
#[command(name = "business-cli", version, about)]
struct Cli {
    /// Backend base URL (overrides API_URL).
    #[arg(long = "api-url", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List businesses.
    List(FilterArgs),
    /// Get a business by id.
    Get { id: u64 },
    /// Create a business from a JSON file or string.
    Create(PayloadArgs),
    /// Update a business by id with a JSON payload.
    Update {
        id: u64,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Delete a business by id.
    Delete { id: u64 },
    /// Export businesses to CSV.
    Export {
        /// Output path.
        #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Check that the backend is reachable.
    Health,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    neighborhood: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long = "min-lead-score")]
    min_lead_score: Option<f64>,
}

impl From<FilterArgs> for BusinessQueryParams {
    fn from(args: FilterArgs) -> Self {
        Self {
            neighborhood: args.neighborhood,
            category: args.category,
            min_lead_score: args.min_lead_score,
        }
    }
}

#[derive(Args, Debug)]
struct PayloadArgs {
    /// Path to a JSON file with the payload.
    #[arg(long, conflicts_with = "json")]
    file: Option<PathBuf>,
    /// JSON string payload.
    #[arg(long)]
    json: Option<String>,
}

impl PayloadArgs {
    fn load(&self) -> Result<Value, ClientError> {
        match (&self.file, &self.json) {
            (Some(path), _) => load_payload_from_file(path),
            (None, Some(raw)) => Ok(serde_json::from_str(raw)?),
            (None, None) => Err(ClientError::InvalidPayload(
                "provide --file or --json".to_string(),
            )),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to render response: {}", e),
    }
}

async fn run(client: &BusinessClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List(filters) => {
            let businesses = client.list(&filters.into()).await?;
            print_json(&businesses);
        }
        Command::Get { id } => {
            let business = client.get(id).await?;
            print_json(&business);
        }
        Command::Create(payload) => {
            let business = client.create(&payload.load()?).await?;
            println!("Created:");
            print_json(&business);
        }
        Command::Update { id, payload } => {
            let business = client.update(id, &payload.load()?).await?;
            println!("Updated:");
            print_json(&business);
        }
        Command::Delete { id } => {
            client.delete(id).await?;
            println!("Deleted");
        }
        Command::Export {
            out,
            format,
            filters,
        } => {
            let businesses = client.list(&filters.into()).await?;
            let count = export_to_path(&businesses, &out, format)?;
            println!("Exported {} businesses to {}", count, out.display());
        }
        Command::Health => {
            let status = client.health().await?;
            print_json(&status);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    obs::init_tracing(obs::CLIENT_FILTER);
    let cli = Cli::parse();

    let config = match ClientConfig::from_env_or(cli.api_url) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match BusinessClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<ClientError>()
                .is_some_and(ClientError::is_not_found) =>
        {
            eprintln!("Not found.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
