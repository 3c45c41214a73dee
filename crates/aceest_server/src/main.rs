use aceest_core::WorkoutStore;
use aceest_server::{ServerConfig, build_router, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aceest-server")]
#[command(about = "HTTP API for the ACEest workout log")]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    let store = WorkoutStore::shared();
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutting down");
    Ok(())
}
