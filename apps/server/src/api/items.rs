use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pricewise_core::{
    tabular::{export_file_name, ImportReport},
    LineItem, NewLineItem,
};

async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<LineItem>>> {
    let items = state.pricing_service.items()?;
    Ok(Json(items))
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewLineItem>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LineItem>)> {
    let Json(payload) = payload?;
    let item = state.pricing_service.commit(payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn clear_items(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.pricing_service.clear()?;
    tracing::info!("Line items cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// Imports a CSV table sent as the raw request body.
async fn import_items(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImportReport>> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("Request body is empty".to_string()));
    }
    let report = state.pricing_service.import(&body)?;
    Ok(Json(report))
}

async fn export_items(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let Some(csv) = state.pricing_service.export()? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let file_name = export_file_name(chrono::Local::now().naive_local());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
        .map_err(|e| ApiError::Internal(format!("Invalid export file name: {}", e)))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/items",
            get(list_items).post(create_item).delete(clear_items),
        )
        .route("/items/import", post(import_items))
        .route("/items/export", get(export_items))
}
