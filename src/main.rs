use effluent_logic::config::AppConfig;
use effluent_logic::server::{build_app, init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        return Err(err.into());
    }

    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, environment = ?config.server.environment, "Effluent Logic listening");
    axum::serve(listener, app).await?;

    Ok(())
}
