use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{PricePreview, SummaryResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use pricewise_core::NewLineItem;

/// Prices an item with the current settings without storing it.
async fn preview_price(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewLineItem>, JsonRejection>,
) -> ApiResult<Json<PricePreview>> {
    let Json(payload) = payload?;
    let breakdown = state.pricing_service.preview(&payload)?;
    Ok(Json(PricePreview::from(breakdown)))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<SummaryResponse>> {
    let summary = state.pricing_service.summary()?;
    Ok(Json(SummaryResponse::from(summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pricing/preview", post(preview_price))
        .route("/summary", get(get_summary))
}
