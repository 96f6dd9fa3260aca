pub mod handlers;
mod page;
pub mod types;

use crate::{
    Result,
    config::Config,
    endpoint::HttpEndpoint,
    panel::{PanelController, QueryPanel},
};
use axum::{
    Router,
    routing::{get, post, put},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use page::render_page;

/// Routes for the page and its JSON API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .route("/api/panel", get(handlers::get_panel))
        .route("/api/panel/input", put(handlers::update_input))
        .route("/api/panel/submit", post(handlers::submit))
        .route("/api/panel/cancel", post(handlers::cancel))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize endpoint and panel
    let endpoint = Arc::new(HttpEndpoint::new(config.endpoint.clone()));
    let panel = QueryPanel::new(&config.panel);
    let controller = PanelController::new(panel, endpoint, &config.endpoint);

    let app_state = AppState {
        controller,
        page: Arc::new(config.panel.clone()),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);
    info!("Forwarding prompts to {}", config.endpoint.base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
