//! Contribution endpoints - list with filters, pair-keyed upsert, delete.

use super::{ApiResult, AppState};
use crate::api::schemas::{ContributionFilter, ContributionUpsert};
use crate::core::contribution;
use crate::entities::contribution::Model as ContributionModel;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::{Value, json};

/// GET /api/contributions - optionally filtered by member and/or month.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ContributionFilter>,
) -> ApiResult<Json<Vec<ContributionModel>>> {
    let mut rows = match (filter.member_id, filter.month_id) {
        (Some(member_id), _) => {
            contribution::get_contributions_for_member(&state.db, member_id).await?
        }
        (None, Some(month_id)) => {
            contribution::get_contributions_for_month(&state.db, month_id).await?
        }
        (None, None) => contribution::get_all_contributions(&state.db).await?,
    };
    if let (Some(_), Some(month_id)) = (filter.member_id, filter.month_id) {
        rows.retain(|row| row.month_id == month_id);
    }
    Ok(Json(rows))
}

/// POST /api/contributions - upsert keyed by the (member, month) pair.
pub async fn upsert(
    State(state): State<AppState>,
    Json(payload): Json<ContributionUpsert>,
) -> ApiResult<Json<ContributionModel>> {
    let saved = contribution::upsert_contribution(
        &state.db,
        payload.member_id,
        payload.month_id,
        payload.amount,
        payload.paid,
    )
    .await?;
    Ok(Json(saved))
}

/// DELETE /api/contributions/:id - administrative delete.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    contribution::delete_contribution(&state.db, id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::test_support::test_app_state;
    use crate::errors::Result;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_upsert_converges_to_one_row() -> Result<()> {
        let state = test_app_state().await?;
        let member = create_test_member(&state.db, "Pauline Nthenya").await?;
        let month = create_test_month(&state.db, "August").await?;

        let Json(first) = upsert(
            State(state.clone()),
            Json(ContributionUpsert {
                member_id: member.id,
                month_id: month.id,
                amount: Some(700),
                paid: true,
            }),
        )
        .await
        .map_err(|e| e.0)?;

        let Json(second) = upsert(
            State(state.clone()),
            Json(ContributionUpsert {
                member_id: member.id,
                month_id: month.id,
                amount: Some(900),
                paid: true,
            }),
        )
        .await
        .map_err(|e| e.0)?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.amount, 900);

        let Json(rows) = list(State(state), Query(ContributionFilter::default()))
            .await
            .map_err(|e| e.0)?;
        assert_eq!(rows.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_filters() -> Result<()> {
        let state = test_app_state().await?;
        let pauline = create_test_member(&state.db, "Pauline Nthenya").await?;
        let agnes = create_test_member(&state.db, "Agnes Mwende").await?;
        let august = create_test_month(&state.db, "August").await?;
        let september = create_test_month(&state.db, "September").await?;

        crate::core::contribution::mark_paid(&state.db, "Pauline Nthenya", "August", None).await?;
        crate::core::contribution::mark_paid(&state.db, "Agnes Mwende", "August", None).await?;
        crate::core::contribution::mark_paid(&state.db, "Pauline Nthenya", "September", None)
            .await?;

        let Json(by_member) = list(
            State(state.clone()),
            Query(ContributionFilter {
                member_id: Some(pauline.id),
                month_id: None,
            }),
        )
        .await
        .map_err(|e| e.0)?;
        assert_eq!(by_member.len(), 2);

        let Json(by_month) = list(
            State(state.clone()),
            Query(ContributionFilter {
                member_id: None,
                month_id: Some(august.id),
            }),
        )
        .await
        .map_err(|e| e.0)?;
        assert_eq!(by_month.len(), 2);

        let Json(by_pair) = list(
            State(state.clone()),
            Query(ContributionFilter {
                member_id: Some(agnes.id),
                month_id: Some(september.id),
            }),
        )
        .await
        .map_err(|e| e.0)?;
        assert!(by_pair.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_contribution() -> Result<()> {
        let state = test_app_state().await?;

        let result = remove(State(state), Path(999)).await;
        assert!(result.is_err());

        Ok(())
    }
}
