use anyhow::Result;
use tracing::{error, info};

use travel_planner_backend::{init_tracing, routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (config, loaded_path) = Config::discover()?;
    match &loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("Using default configuration"),
    }

    // A missing API key stops startup before anything is served
    let app_state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("⚠️ {}", e);
            return Err(e);
        }
    };

    let app = routes::build_app(app_state);

    let addr = format!("{}:{}", config.system_config.host, config.system_config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
