use anyhow::Result;
use log::info;

use portal_server::config::ServerConfig;
use portal_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr;
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("portal-server listening on http://{}", addr);

    axum::serve(listener, portal_server::app(state)).await?;

    Ok(())
}
