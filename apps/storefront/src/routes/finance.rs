//! # Finance Routes
//!
//! Backend for the finance report screen: windowed summary cards, the
//! expense distribution chart, and the daily revenue series.
//!
//! Aggregation itself is pure (kedai-core); this handler only fetches the
//! raw records and formats amounts for display.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use kedai_core::finance::{self, CategoryTotal, FinanceSummary, Period, RevenuePoint};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FinanceQuery {
    /// `week` | `month` | `year`; the screen defaults to the month view.
    pub period: Option<Period>,
}

/// Rupiah-formatted figures for the summary cards.
#[derive(Debug, Serialize)]
pub struct FinanceDisplay {
    pub total_revenue: String,
    pub total_expenses: String,
    pub profit: String,
}

#[derive(Debug, Serialize)]
pub struct FinanceReport {
    pub period: Period,
    pub summary: FinanceSummary,
    pub display: FinanceDisplay,
    /// Grouped over ALL expenses, not just the window (see DESIGN.md).
    pub expense_breakdown: Vec<CategoryTotal>,
    pub revenue_series: Vec<RevenuePoint>,
}

/// `GET /finance/summary?period=week|month|year`.
pub async fn finance_summary(
    State(state): State<AppState>,
    Query(query): Query<FinanceQuery>,
) -> Result<Json<FinanceReport>, ApiError> {
    let period = query.period.unwrap_or(Period::Month);
    let now = Utc::now();

    let orders = state.db.orders().list().await?;
    let expenses = state.db.expenses().list().await?;

    let summary = finance::summarize(&orders, &expenses, period, now);
    let display = FinanceDisplay {
        total_revenue: summary.total_revenue().format_rupiah(),
        total_expenses: summary.total_expenses().format_rupiah(),
        profit: summary.profit().format_rupiah(),
    };

    let expense_breakdown = finance::expense_breakdown(&expenses);
    let revenue_series = finance::revenue_series(&orders, period, now);

    Ok(Json(FinanceReport {
        period,
        summary,
        display,
        expense_breakdown,
        revenue_series,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kedai_core::Money;

    #[test]
    fn test_display_formatting() {
        let summary = FinanceSummary {
            total_revenue_rupiah: 100_000,
            total_expenses_rupiah: 40_000,
            profit_rupiah: 60_000,
            order_count: 1,
        };

        let display = FinanceDisplay {
            total_revenue: summary.total_revenue().format_rupiah(),
            total_expenses: summary.total_expenses().format_rupiah(),
            profit: summary.profit().format_rupiah(),
        };

        assert_eq!(display.total_revenue, "Rp100.000");
        assert_eq!(display.total_expenses, "Rp40.000");
        assert_eq!(display.profit, "Rp60.000");

        let loss = Money::from_rupiah(-15_000).format_rupiah();
        assert_eq!(loss, "-Rp15.000");
    }
}
