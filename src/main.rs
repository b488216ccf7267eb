use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuner_lineup::{
    collection::ApiCollection,
    config::Config,
    database::Database,
    discovery::DiscoveryDescriptor,
    models::LineupCreateRequest,
};

#[derive(Parser)]
#[command(name = "tuner-lineup")]
#[command(version)]
#[command(about = "Manage virtual tuner lineups and their discovery documents")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL")]
    database_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Print lineups as JSON
    List {
        /// Only lineups advertised over SSDP
        #[arg(long)]
        enabled: bool,
        /// Include each lineup's active channels (implies --enabled)
        #[arg(long)]
        with_channels: bool,
    },
    /// Print the discovery document for a lineup
    Discover {
        id: i32,
        #[arg(long, value_enum, default_value_t = DiscoverFormat::Xml)]
        format: DiscoverFormat,
    },
    /// Create a lineup from the configured device defaults
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        discovery_address: String,
        /// Defaults to a freshly generated UUID
        #[arg(long)]
        device_uuid: Option<String>,
        #[arg(long)]
        no_ssdp: bool,
    },
    /// Delete a lineup
    Delete { id: i32 },
}

#[derive(Clone, Copy, ValueEnum)]
enum DiscoverFormat {
    /// UPnP device.xml
    Xml,
    /// HDHomeRun discover.json
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("tuner_lineup={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load_from_file(&cli.config)?;
    if let Some(database_url) = cli.database_url {
        config.database.url = database_url;
    }
    info!("Using database: {}", config.database.url);

    let database = Database::new(&config.database).await?;
    database.migrate().await?;

    let collection = ApiCollection::from_database(&database);
    let lineups = collection.lineups();

    match cli.command {
        Command::Migrate => {}
        Command::List {
            enabled,
            with_channels,
        } => {
            let result = if enabled || with_channels {
                lineups.get_enabled(with_channels).await
            } else {
                lineups.list_all().await
            };
            let result = result.context("Failed to list lineups")?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Discover { id, format } => {
            let lineup = lineups
                .get_by_id(id, false)
                .await
                .with_context(|| format!("Failed to load lineup {id}"))?;
            let descriptor = DiscoveryDescriptor::from_lineup(&lineup);
            let body = match format {
                DiscoverFormat::Xml => descriptor.to_document().to_xml()?,
                DiscoverFormat::Json => descriptor.to_discover_json()?,
            };
            println!("{body}");
        }
        Command::Create {
            name,
            discovery_address,
            device_uuid,
            no_ssdp,
        } => {
            let device_uuid = device_uuid.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            if let Some(existing) = lineups.find_by_device_uuid(&device_uuid).await? {
                anyhow::bail!(
                    "Device UUID {} is already used by lineup {} '{}'",
                    device_uuid,
                    existing.id,
                    existing.name
                );
            }

            let mut request = LineupCreateRequest::from_defaults(
                name,
                discovery_address,
                device_uuid,
                &config.lineup_defaults,
            );
            request.ssdp = !no_ssdp;

            let lineup = lineups
                .insert(request)
                .await
                .context("Failed to create lineup")?;
            println!("{}", serde_json::to_string_pretty(&lineup)?);
        }
        Command::Delete { id } => {
            let lineup = lineups
                .delete(id)
                .await
                .with_context(|| format!("Failed to delete lineup {id}"))?;
            info!("Removed lineup {} ({})", lineup.id, lineup.device_uuid);
        }
    }

    Ok(())
}
