//! Dashboard route handler.

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use tiffin_backend::OrderFilter;
use tiffin_core::{RevenueReport, daily_growth_percent, revenue_report};

use crate::error::AppError;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Dashboard payload: the report plus the derived growth figure.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Aggregated revenue and count figures.
    #[serde(flatten)]
    pub report: RevenueReport,
    /// Today's revenue against the weekly daily average, in percent.
    pub daily_growth_percent: Decimal,
}

/// Compute the dashboard figures from a fresh order snapshot.
#[instrument(skip_all)]
pub async fn show(
    _: RequireStaff,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.backend().orders().list(&OrderFilter::all());
    let report = revenue_report(&orders, Utc::now());
    let growth = daily_growth_percent(&report);

    Ok(Json(DashboardResponse {
        report,
        daily_growth_percent: growth,
    }))
}
