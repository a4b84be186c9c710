use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{shutdown_signal, Config, ServerError, SqliteTodoStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "todo_server=debug,todo_core=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let store = SqliteTodoStore::connect(&config.database_url).await?;
    info!(database_url = %config.database_url, "database ready");

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");
    todo_server::serve(listener, store, shutdown_signal()).await?;
    Ok(())
}
