//! Report, dashboard, and statistics endpoints.

use super::{ApiResult, AppState};
use crate::core::{report, stats};
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/reports/:month - the same formatted text as the chat command.
pub async fn by_month(
    State(state): State<AppState>,
    Path(month_name): Path<String>,
) -> ApiResult<String> {
    let text =
        report::generate_report(&state.db, &month_name, &state.config.report_title).await?;
    Ok(text)
}

/// GET /api/dashboard - overall totals.
pub async fn dashboard(
    State(state): State<AppState>,
) -> ApiResult<Json<stats::DashboardSummary>> {
    Ok(Json(stats::dashboard_summary(&state.db).await?))
}

/// GET /api/statistics - per-category and per-month breakdowns.
pub async fn statistics(
    State(state): State<AppState>,
) -> ApiResult<Json<stats::StatisticsSummary>> {
    Ok(Json(stats::statistics_summary(&state.db).await?))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::test_support::test_app_state;
    use crate::core::contribution::mark_paid;
    use crate::errors::Result;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_report_matches_command_output() -> Result<()> {
        let state = test_app_state().await?;
        create_custom_member(&state.db, "Alice", "Parents", 500).await?;
        create_test_month(&state.db, "August").await?;
        mark_paid(&state.db, "Alice", "August", None).await?;

        let text = by_month(State(state.clone()), Path("August".to_string()))
            .await
            .map_err(|e| e.0)?;
        assert!(text.contains("1. Alice - 500/= ✅"));
        assert!(text.ends_with("*TOTAL: KES 500*"));

        let expected = crate::core::report::generate_report(
            &state.db,
            "August",
            &state.config.report_title,
        )
        .await?;
        assert_eq!(text, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_report_unknown_month_is_an_error() -> Result<()> {
        let state = test_app_state().await?;

        let result = by_month(State(state), Path("Nowhere".to_string())).await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_serializes_timestamps_and_totals() -> Result<()> {
        let state = test_app_state().await?;
        create_test_member(&state.db, "Pauline Nthenya").await?;
        create_test_month(&state.db, "August").await?;
        mark_paid(&state.db, "Pauline Nthenya", "August", None).await?;

        let Json(summary) = dashboard(State(state)).await.map_err(|e| e.0)?;
        assert_eq!(summary.members, 1);
        assert_eq!(summary.total_collected, 500);

        Ok(())
    }
}
