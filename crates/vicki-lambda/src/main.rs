use tracing_subscriber::EnvFilter;

use vicki_lambda::build_router;
use vicki_lambda::config::{LogFormat, ServiceConfig};
use vicki_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServiceConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let roster = config.load_roster()?;
    let app = build_router(AppState::new(roster));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
