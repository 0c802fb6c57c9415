//! Month CRUD endpoints.

use super::{ApiResult, AppState};
use crate::api::schemas::MonthCreate;
use crate::core::month;
use crate::entities::month::Model as MonthModel;
use crate::errors::Error;
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

/// GET /api/months - all months in creation order.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<MonthModel>>> {
    Ok(Json(month::get_all_months(&state.db).await?))
}

/// POST /api/months - create a month.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MonthCreate>,
) -> ApiResult<Json<MonthModel>> {
    let created = month::create_month(&state.db, payload.name).await?;
    Ok(Json(created))
}

/// GET /api/months/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MonthModel>> {
    let found = month::get_month_by_id(&state.db, id)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Month",
            name: id.to_string(),
        })?;
    Ok(Json(found))
}

/// DELETE /api/months/:id - rejected while contributions exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    month::delete_month(&state.db, id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
