use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use pricewise_core::{
    costs::{self, CostCategory},
    settings::{Settings, SettingsUpdate},
};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let s = state.settings_service.get_settings()?;
    Ok(Json(s))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> ApiResult<Json<Settings>> {
    let Json(payload) = payload?;
    let updated = state.settings_service.update_settings(&payload)?;
    tracing::info!("Settings updated: {:?}", updated);
    Ok(Json(updated))
}

async fn get_cost_categories() -> Json<&'static [CostCategory]> {
    Json(costs::categories())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/cost-categories", get(get_cost_categories))
}
