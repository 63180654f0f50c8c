//! # Finance Aggregator
//!
//! Date-windowed aggregation for the back-office finance report: revenue,
//! expense and profit totals, the expense-by-category breakdown, and the
//! daily revenue series behind the line chart.
//!
//! All functions are pure: the clock is always a parameter, records arrive
//! as already-materialized slices, and nothing here touches the database.
//!
//! Window math is UTC throughout (timestamps are stored in UTC and the
//! original report compared ISO date strings, which are UTC dates).

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{ExpenseCategory, ExpenseRecord, OrderRecord};

// =============================================================================
// Period
// =============================================================================

/// The reporting window selected on the finance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Rolling window: the last 7 × 24 hours.
    Week,
    /// Calendar window: since the first day of the current month.
    Month,
    /// Calendar window: since January 1st of the current year.
    Year,
}

impl Period {
    /// Number of daily buckets in the revenue series.
    ///
    /// Fixed counts (not true calendar month/year lengths) keep the chart
    /// width stable across periods.
    pub const fn day_count(&self) -> i64 {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::Year => 365,
        }
    }

    /// Start instant of the window. The end is implicitly `now`: every
    /// record at or after the start is included.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        match self {
            Period::Week => now - Duration::days(7),
            Period::Month => {
                // Day 1 exists in every month.
                let first = today.with_day(1).unwrap_or(today);
                first.and_time(NaiveTime::MIN).and_utc()
            }
            Period::Year => {
                // January 1st exists in every year.
                let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                first.and_time(NaiveTime::MIN).and_utc()
            }
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Windowed totals for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinanceSummary {
    /// Σ order totals inside the window.
    pub total_revenue_rupiah: i64,
    /// Σ expense amounts inside the window.
    pub total_expenses_rupiah: i64,
    /// Revenue − expenses. Signed: a loss is negative, never floored.
    pub profit_rupiah: i64,
    /// Number of orders inside the window.
    pub order_count: usize,
}

impl FinanceSummary {
    pub fn total_revenue(&self) -> Money {
        Money::from_rupiah(self.total_revenue_rupiah)
    }

    pub fn total_expenses(&self) -> Money {
        Money::from_rupiah(self.total_expenses_rupiah)
    }

    pub fn profit(&self) -> Money {
        Money::from_rupiah(self.profit_rupiah)
    }
}

/// Computes the windowed summary over raw order and expense records.
///
/// An expense's `date` is widened to UTC midnight before comparing against
/// the window start, so for `week` (whose start carries a time of day) an
/// expense dated exactly seven days ago falls outside the window.
pub fn summarize(
    orders: &[OrderRecord],
    expenses: &[ExpenseRecord],
    period: Period,
    now: DateTime<Utc>,
) -> FinanceSummary {
    let start = period.window_start(now);

    let mut total_revenue_rupiah = 0;
    let mut order_count = 0;
    for order in orders.iter().filter(|o| o.created_at >= start) {
        total_revenue_rupiah += order.total_rupiah;
        order_count += 1;
    }

    let total_expenses_rupiah = expenses
        .iter()
        .filter(|e| e.date.and_time(NaiveTime::MIN).and_utc() >= start)
        .map(|e| e.amount_rupiah)
        .sum();

    FinanceSummary {
        total_revenue_rupiah,
        total_expenses_rupiah,
        profit_rupiah: total_revenue_rupiah - total_expenses_rupiah,
        order_count,
    }
}

// =============================================================================
// Expense Breakdown
// =============================================================================

/// One slice of the expense distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount_rupiah: i64,
}

/// Groups expenses by category, summing amounts, in first-seen order.
///
/// Takes the FULL expense list, not the windowed subset: the distribution
/// chart deliberately ignores the period selector (kept as observed in the
/// original report — see DESIGN.md).
pub fn expense_breakdown(expenses: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => total.amount_rupiah += expense.amount_rupiah,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount_rupiah: expense.amount_rupiah,
            }),
        }
    }

    totals
}

// =============================================================================
// Daily Revenue Series
// =============================================================================

/// One day's bucket of the revenue line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RevenuePoint {
    /// The bucket's calendar day (UTC).
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Axis label in id-ID short form, e.g. `"6 Agu"`.
    pub label: String,
    /// Σ order totals whose creation date equals the bucket day.
    pub revenue_rupiah: i64,
}

/// Builds the daily revenue series: `period.day_count()` buckets ending
/// today, chronological, zero-filled for days with no orders.
///
/// An order belongs to the bucket whose calendar day equals its
/// `created_at` UTC date — exact day match, no interpolation.
pub fn revenue_series(
    orders: &[OrderRecord],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<RevenuePoint> {
    let today = now.date_naive();
    let days = period.day_count();

    let mut series = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let date = today - Duration::days(offset);
        let revenue_rupiah = orders
            .iter()
            .filter(|o| o.created_at.date_naive() == date)
            .map(|o| o.total_rupiah)
            .sum();

        series.push(RevenuePoint {
            date,
            label: format_short_date_id(date),
            revenue_rupiah,
        });
    }

    series
}

/// id-ID short month names, as `toLocaleDateString('id-ID', { month: 'short' })`
/// renders them.
const MONTHS_SHORT_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Formats a date as the id-ID chart label, e.g. `"6 Agu"`.
pub fn format_short_date_id(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_SHORT_ID[date.month0() as usize])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FulfillmentType, LineItem, OrderStatus};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn order(total: i64, created_at: DateTime<Utc>) -> OrderRecord {
        OrderRecord {
            id: format!("o-{}", created_at.timestamp()),
            user_id: "u-1".to_string(),
            items: vec![LineItem::new("A", "Wonton", total, 1)],
            total_rupiah: total,
            status: OrderStatus::Pending,
            fulfillment_type: FulfillmentType::DineIn,
            table_no: Some("5".to_string()),
            address: None,
            pickup_time: None,
            shipping_fee_rupiah: None,
            created_at,
            updated_at: created_at,
        }
    }

    fn expense(amount: i64, date: NaiveDate, category: ExpenseCategory) -> ExpenseRecord {
        ExpenseRecord {
            id: format!("e-{}-{}", date, amount),
            date,
            amount_rupiah: amount,
            description: "test".to_string(),
            category,
            created_at: date.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    #[test]
    fn test_summary_example_week() {
        let now = at(2026, 8, 6, 12);
        let orders = vec![order(100_000, now)];
        let expenses = vec![expense(40_000, now.date_naive(), ExpenseCategory::BahanBaku)];

        let summary = summarize(&orders, &expenses, Period::Week, now);

        assert_eq!(summary.total_revenue_rupiah, 100_000);
        assert_eq!(summary.total_expenses_rupiah, 40_000);
        assert_eq!(summary.profit_rupiah, 60_000);
        assert_eq!(summary.order_count, 1);
    }

    #[test]
    fn test_week_window_excludes_old_orders() {
        let now = at(2026, 8, 6, 12);
        let orders = vec![
            order(100_000, now - Duration::days(8)),
            order(50_000, now - Duration::days(2)),
        ];

        let summary = summarize(&orders, &[], Period::Week, now);

        assert_eq!(summary.total_revenue_rupiah, 50_000);
        assert_eq!(summary.order_count, 1);
    }

    #[test]
    fn test_week_boundary_expense_excluded() {
        // Start is now − 7 days at 12:00; the expense date widens to that
        // day's midnight, which falls before the start instant.
        let now = at(2026, 8, 6, 12);
        let boundary = (now - Duration::days(7)).date_naive();
        let expenses = vec![expense(10_000, boundary, ExpenseCategory::Operasional)];

        let summary = summarize(&[], &expenses, Period::Week, now);

        assert_eq!(summary.total_expenses_rupiah, 0);
    }

    #[test]
    fn test_month_window_starts_first_of_month() {
        let now = at(2026, 8, 6, 12);
        assert_eq!(Period::Month.window_start(now), at(2026, 8, 1, 0));

        let orders = vec![
            order(10_000, at(2026, 7, 31, 23)),
            order(20_000, at(2026, 8, 1, 0)),
        ];
        let summary = summarize(&orders, &[], Period::Month, now);

        assert_eq!(summary.total_revenue_rupiah, 20_000);
    }

    #[test]
    fn test_year_window_starts_january_first() {
        let now = at(2026, 8, 6, 12);
        assert_eq!(Period::Year.window_start(now), at(2026, 1, 1, 0));
    }

    #[test]
    fn test_profit_may_be_negative() {
        let now = at(2026, 8, 6, 12);
        let expenses = vec![expense(40_000, now.date_naive(), ExpenseCategory::Gaji)];

        let summary = summarize(&[], &expenses, Period::Week, now);

        assert_eq!(summary.profit_rupiah, -40_000);
        assert!(summary.profit().is_negative());
    }

    #[test]
    fn test_breakdown_ignores_window_while_totals_honor_it() {
        let now = at(2026, 8, 6, 12);
        let expenses = vec![
            expense(40_000, now.date_naive(), ExpenseCategory::BahanBaku),
            expense(25_000, at(2025, 1, 1, 0).date_naive(), ExpenseCategory::BahanBaku),
            expense(10_000, now.date_naive(), ExpenseCategory::Gaji),
        ];

        let summary = summarize(&[], &expenses, Period::Week, now);
        assert_eq!(summary.total_expenses_rupiah, 50_000);

        let breakdown = expense_breakdown(&expenses);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, ExpenseCategory::BahanBaku);
        assert_eq!(breakdown[0].amount_rupiah, 65_000);
        assert_eq!(breakdown[1].category, ExpenseCategory::Gaji);
        assert_eq!(breakdown[1].amount_rupiah, 10_000);
    }

    #[test]
    fn test_revenue_series_week_shape() {
        let now = at(2026, 8, 6, 12);
        let orders = vec![
            order(30_000, at(2026, 8, 6, 9)),
            order(20_000, at(2026, 8, 6, 11)),
            order(15_000, at(2026, 8, 4, 19)),
            // Outside the 7-bucket range entirely.
            order(99_000, at(2026, 7, 1, 10)),
        ];

        let series = revenue_series(&orders, Period::Week, now);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, at(2026, 7, 31, 0).date_naive());
        assert_eq!(series[6].date, now.date_naive());

        // Chronological and zero-filled.
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(series[6].revenue_rupiah, 50_000);
        assert_eq!(series[4].revenue_rupiah, 15_000);
        assert_eq!(series[5].revenue_rupiah, 0);
    }

    #[test]
    fn test_revenue_series_bucket_counts() {
        let now = at(2026, 8, 6, 12);
        assert_eq!(revenue_series(&[], Period::Month, now).len(), 30);
        assert_eq!(revenue_series(&[], Period::Year, now).len(), 365);
    }

    #[test]
    fn test_short_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_short_date_id(date), "6 Agu");

        let date = NaiveDate::from_ymd_opt(2026, 5, 17).unwrap();
        assert_eq!(format_short_date_id(date), "17 Mei");
    }
}
