/// Roster - staff directory from the command line
use clap::{Parser, Subcommand};
use roster_cli::{commands, CliError, RosterConfig};
use roster_core::ListItem;
use roster_client::HttpApiClient;
use roster_controllers::{AuthController, StaffListController};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Log in to and browse a staff directory", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the session token
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password (6-10 characters)
        #[arg(short, long, env = "ROSTER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// List staff members
    Staff {
        /// Stop after this many pages (default: all)
        #[arg(short, long)]
        pages: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster=info,roster_cli=info,roster_client=info,roster_controllers=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let api = Arc::new(HttpApiClient::new(config.client_config())?);
    let generic_error = config.messages.generic_error.clone();

    match cli.command {
        Commands::Login { email, password } => {
            let controller = AuthController::new(api, generic_error);
            let token = commands::login(&controller, &email, &password).await?;
            println!("{token}");
        }
        Commands::Staff { pages } => {
            let controller = StaffListController::new(api, generic_error);
            match commands::load_staff(&controller, pages).await {
                Ok(items) => print_items(&items),
                Err(e) => {
                    if let CliError::Listing { loaded, .. } = &e {
                        print_items(loaded);
                    }
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

fn print_items(items: &[ListItem]) {
    for item in items {
        println!("{}", commands::render_item(item));
    }
}
