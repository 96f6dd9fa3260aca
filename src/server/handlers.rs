use super::{
    page::render_page,
    types::{ErrorResponse, InputUpdate, SubmitRequest},
};
use crate::{
    Error,
    config::PanelConfig,
    panel::{PanelController, PanelView},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub controller: PanelController,
    pub page: Arc<PanelConfig>,
}

type ApiResult = Result<Json<PanelView>, (StatusCode, Json<ErrorResponse>)>;

pub async fn page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let view = state.controller.view().map_err(error_response)?;
    Ok(Html(render_page(&state.page, &view)))
}

pub async fn get_panel(State(state): State<AppState>) -> ApiResult {
    state.controller.view().map(Json).map_err(error_response)
}

pub async fn update_input(
    State(state): State<AppState>,
    Json(update): Json<InputUpdate>,
) -> ApiResult {
    state
        .controller
        .set_input(update.text)
        .map(Json)
        .map_err(error_response)
}

pub async fn submit(
    State(state): State<AppState>,
    request: Option<Json<SubmitRequest>>,
) -> ApiResult {
    info!("Received submit request");
    let result = match request {
        Some(Json(request)) => state.controller.submit_input(request.text).await,
        None => state.controller.submit().await,
    };
    result.map(Json).map_err(error_response)
}

pub async fn cancel(State(state): State<AppState>) -> ApiResult {
    state.controller.cancel().map(Json).map_err(error_response)
}

fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        Error::InvalidTransition { .. } => {
            warn!("Rejected request: {}", e);
            StatusCode::CONFLICT
        }
        _ => {
            error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
