//! Member CRUD endpoints.

use super::{ApiResult, AppState};
use crate::api::schemas::{MemberCreate, MemberUpdate};
use crate::core::member;
use crate::entities::member::Model as MemberModel;
use crate::errors::Error;
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

/// GET /api/members - all members, ordered by category then name.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberModel>>> {
    Ok(Json(member::get_all_members(&state.db).await?))
}

/// POST /api/members - create a member.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MemberCreate>,
) -> ApiResult<Json<MemberModel>> {
    let created = member::create_member(
        &state.db,
        payload.name,
        payload.category,
        payload.default_amount,
    )
    .await?;
    Ok(Json(created))
}

/// GET /api/members/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MemberModel>> {
    let found = member::get_member_by_id(&state.db, id)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: id.to_string(),
        })?;
    Ok(Json(found))
}

/// PUT /api/members/:id - partial edit.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberUpdate>,
) -> ApiResult<Json<MemberModel>> {
    let updated = member::update_member(
        &state.db,
        id,
        member::MemberChanges {
            name: payload.name,
            category: payload.category,
            default_amount: payload.default_amount,
        },
    )
    .await?;
    Ok(Json(updated))
}

/// DELETE /api/members/:id - rejected while contributions exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    member::delete_member(&state.db, id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
