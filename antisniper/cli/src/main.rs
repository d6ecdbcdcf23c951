//! Antisniper CLI - query the Antisniper API from the command line

use std::process::ExitCode;

use antisniper::{AntisniperClient, AntisniperConfig, AntisniperError, Collection, PingOptions};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "antisniper")]
#[command(about = "Query the Antisniper Minecraft player API", long_about = None)]
struct Cli {
    /// API key sent in the Apikey header
    #[arg(long, env = "ANTISNIPER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "ANTISNIPER_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a UUID to an IGN or back
    Convert {
        /// Player name or UUID
        player: String,

        /// Database to look the player up in
        #[arg(short, long, default_value = "mojang")]
        collection: Collection,
    },

    /// Convert up to 100 players at once
    BulkConvert {
        /// Player names or UUIDs
        #[arg(required = true)]
        players: Vec<String>,

        /// Database to look the players up in
        #[arg(short, long, default_value = "mojang")]
        collection: Collection,
    },

    /// Show Mojang account data for a UUID
    Mojang {
        /// Player UUID
        uuid: String,
    },

    /// List every previous owner of a name
    NameOwners {
        /// Minecraft name
        name: String,
    },

    /// Check whether up to 100 players are online
    Online {
        /// Short description of why you need this data
        #[arg(short, long)]
        reason: String,

        /// Player names or UUIDs
        #[arg(required = true)]
        players: Vec<String>,
    },

    /// Show texture URLs for each cape type
    Capes,

    /// Show blacklist data for a player
    Blacklist {
        /// Player name or UUID
        player: String,

        /// Optional blacklist token
        #[arg(long)]
        token: Option<String>,
    },

    /// Show ping history for a player
    Ping {
        /// Player name or UUID
        player: String,

        /// Use the legacy data source
        #[arg(long)]
        legacy: bool,

        /// Days of history to include
        #[arg(long)]
        lookback: Option<u32>,
    },

    /// Show QuickShop data for a player
    Quickshop {
        /// Player name or UUID
        player: String,
    },

    /// Show chat history for a player
    Chat {
        /// Player name or UUID
        player: String,

        /// Number of messages (negative returns newest first)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,
    },

    /// Show account information for the API key
    User {
        /// Which account view to show
        #[arg(long, value_enum, default_value_t = UserView::Info)]
        view: UserView,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UserView {
    Info,
    Requests,
    OldRequests,
    Products,
    Usage,
    Paths,
}

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,antisniper=info".to_string(),
            2 => "info,antisniper=debug".to_string(),
            _ => "debug,antisniper=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<AntisniperConfig, AntisniperError> {
    let config = match &cli.api_key {
        Some(key) => AntisniperConfig::new(key.clone()),
        None => AntisniperConfig::from_env()?,
    };
    Ok(match &cli.base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    })
}

async fn run(api: &AntisniperClient, command: Commands) -> Result<Value, AntisniperError> {
    match command {
        Commands::Convert { player, collection } => api.convert_with(&player, collection).await,
        Commands::BulkConvert {
            players,
            collection,
        } => api.bulk_convert_with(&players, collection).await,
        Commands::Mojang { uuid } => api.mojang_data(&uuid).await,
        Commands::NameOwners { name } => api.name_owners(&name).await,
        Commands::Online { reason, players } => api.online_check(&players, &reason).await,
        Commands::Capes => api.get_capes().await,
        Commands::Blacklist { player, token } => {
            api.get_blacklist(&player, token.as_deref()).await
        }
        Commands::Ping {
            player,
            legacy,
            lookback,
        } => {
            let options = PingOptions { legacy, lookback };
            api.player().get_ping(&player, options).await
        }
        Commands::Quickshop { player } => api.player().quickshop(&player).await,
        Commands::Chat { player, limit } => api.player().chat_history(&player, limit).await,
        Commands::User { view } => {
            let user = api.user();
            match view {
                UserView::Info => user.get().await,
                UserView::Requests => user.get_requests().await,
                UserView::OldRequests => user.get_old_requests().await,
                UserView::Products => user.get_products().await,
                UserView::Usage => user.get_usage().await,
                UserView::Paths => user.get_endpoint_usage().await,
            }
        }
    }
}

fn report(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = match load_config(&cli).and_then(|config| AntisniperClient::from_config(&config)) {
        Ok(client) => client,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(base_url = client.base_url(), "Running command");

    let command = cli.command;
    let result = client
        .scoped(async move |api: &AntisniperClient| run(api, command).await)
        .await;

    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => {
                println!("{pretty}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                report(&e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
