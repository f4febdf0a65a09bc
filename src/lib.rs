pub mod config;
pub mod config_manager;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod planner;
pub mod routes;
pub mod state;
pub mod translate;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use state::AppState;

/// Default log filter, overridable with `RUST_LOG`
pub const DEFAULT_LOG_FILTER: &str = "travel_planner_backend=debug,tower_http=debug";

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
