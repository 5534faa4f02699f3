pub mod api;
pub mod catalog;
pub mod fetch;
pub mod model;
pub mod page;
pub mod selection;
pub mod state;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use crate::{catalog::MemoryCatalog, state::AppState};

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("POSTVIEW_LOG"))
        .init();

    let app = AppState::new(MemoryCatalog::seeded());

    api::run_server(app).await
}
