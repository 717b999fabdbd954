use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_admin::{api, config::AdminConfig};

#[derive(Parser)]
#[command(name = "storefront-admin")]
#[command(about = "Server-rendered admin pages for the storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the admin server
    Serve {
        /// Interface to bind (overrides STOREFRONT_ADMIN_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides STOREFRONT_ADMIN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "storefront_admin=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: AdminConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    if config.admin_token.is_none() {
        tracing::warn!("STOREFRONT_ADMIN_TOKEN is not set; admin pages are unauthenticated");
    }

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Storefront admin listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AdminConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        None => serve(config).await?,
    }

    Ok(())
}
