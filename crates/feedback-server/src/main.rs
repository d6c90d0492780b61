use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use feedback_server::config::{Runtime, ServerConfig};
use feedback_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    // Structured JSON logging for CloudWatch; readable lines locally.
    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.runtime {
        Runtime::Lambda => subscriber.json().init(),
        Runtime::Http { .. } => subscriber.init(),
    }

    let store = feedback_storage::open(&config.store).await?;
    let report = config.report_options()?;
    let app = feedback_server::app(AppState::new(store, report));

    match config.runtime {
        Runtime::Lambda => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
        Runtime::Http { port } => {
            let listener = TcpListener::bind(("0.0.0.0", port)).await?;
            tracing::info!(port, "feedback server listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
