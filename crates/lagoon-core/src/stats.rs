//! # Aggregation Engine
//!
//! One pass over the transaction history produces everything the dashboard
//! shows for a reference day.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   compute_dashboard(history, ...)                       │
//! │                                                                         │
//! │  history ──► partition by calendar date ──► today / yesterday           │
//! │                     │                                                   │
//! │                     ├──► revenue + day-over-day comparison              │
//! │                     ├──► hourly buckets (fixed 17-slot array)           │
//! │                     ├──► top products (stable sort by revenue)          │
//! │                     └──► average ticket                                 │
//! │                                                                         │
//! │  catalog ──► stock alerts (out < critical < low)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hour Buckets Are an Array
//! The operating window is statically known (06:00-22:00), so hourly sales
//! use a fixed 17-slot array indexed by `hour - 6` instead of a sparse map.
//! There is no "missing key" case to reason about; a quiet hour is a zero
//! bucket.
//!
//! Day bucketing compares calendar dates in UTC, matching the stored
//! timestamps. See DESIGN.md for the timezone policy.

use chrono::{Days, NaiveDate, Timelike};

use crate::types::{
    DashboardStats, HourlySales, Product, ProductSales, StockAlert, StockStatus, Transaction,
};
use crate::{OPEN_HOUR, OPERATING_HOURS};

/// Number of top products reported on the dashboard.
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Computes the dashboard statistics for `reference` (usually today).
///
/// `history` is the full ordered transaction list; `products` is the live
/// catalog (used only for stock alerts). The pass is a pure function of its
/// inputs: re-running it over a reloaded history produces identical output.
pub fn compute_dashboard(
    history: &[Transaction],
    products: &[Product],
    reference: NaiveDate,
) -> DashboardStats {
    let yesterday = reference - Days::new(1);

    let today_txs: Vec<&Transaction> = history
        .iter()
        .filter(|t| t.created_at.date_naive() == reference)
        .collect();

    let yesterday_revenue: i64 = history
        .iter()
        .filter(|t| t.created_at.date_naive() == yesterday)
        .map(|t| t.total_cents)
        .sum();

    let today_revenue: i64 = today_txs.iter().map(|t| t.total_cents).sum();
    let today_count = today_txs.len() as u32;

    // Zero baseline yields 0, not infinity. A store that was closed
    // yesterday shows "0%" rather than an unusable number.
    let comparison_yesterday = if yesterday_revenue > 0 {
        (today_revenue - yesterday_revenue) as f64 / yesterday_revenue as f64 * 100.0
    } else {
        0.0
    };

    let average_ticket_cents = if today_count > 0 {
        today_revenue / today_count as i64
    } else {
        0
    };

    DashboardStats {
        today_revenue_cents: today_revenue,
        today_transactions: today_count,
        average_ticket_cents,
        comparison_yesterday,
        top_products: top_products(&today_txs),
        stock_alerts: stock_alerts(products),
        hourly_data: hourly_sales(&today_txs),
    }
}

/// Folds transactions into the fixed per-hour buckets of the operating
/// window. Transactions outside 06:00-22:00 are ignored.
fn hourly_sales(transactions: &[&Transaction]) -> Vec<HourlySales> {
    let mut buckets: [HourlySales; OPERATING_HOURS] =
        std::array::from_fn(|i| HourlySales::empty(OPEN_HOUR + i as u32));

    for t in transactions {
        let hour = t.created_at.hour();
        if let Some(bucket) = buckets.get_mut(hour.wrapping_sub(OPEN_HOUR) as usize) {
            bucket.revenue_cents += t.total_cents;
            bucket.transaction_count += 1;
            // One customer per transaction
            bucket.customer_count += 1;
        }
    }

    buckets.to_vec()
}

/// Accumulates per-product quantity and revenue across all lines, then
/// keeps the top 10 by revenue.
///
/// The sort is stable and the accumulator preserves first-encounter order,
/// so revenue ties keep their accumulation order.
fn top_products(transactions: &[&Transaction]) -> Vec<ProductSales> {
    let mut sales: Vec<ProductSales> = Vec::new();

    for t in transactions {
        for line in &t.lines {
            match sales.iter_mut().find(|s| s.product_id == line.product_id) {
                Some(entry) => {
                    entry.quantity_sold += line.quantity;
                    entry.revenue_cents += line.subtotal_cents;
                }
                None => sales.push(ProductSales {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    quantity_sold: line.quantity,
                    revenue_cents: line.subtotal_cents,
                }),
            }
        }
    }

    sales.sort_by(|a, b| b.revenue_cents.cmp(&a.revenue_cents));
    sales.truncate(TOP_PRODUCTS_LIMIT);
    sales
}

/// Classifies catalog stock levels. Only products tracking both a stock
/// count and a minimum threshold participate.
fn stock_alerts(products: &[Product]) -> Vec<StockAlert> {
    let mut alerts: Vec<StockAlert> = products
        .iter()
        .filter_map(|p| {
            let (stock, min_stock) = match (p.stock, p.min_stock) {
                (Some(s), Some(m)) => (s, m),
                _ => return None,
            };

            let status = if stock == 0 {
                StockStatus::Out
            } else if stock <= min_stock / 2 {
                StockStatus::Critical
            } else if stock <= min_stock {
                StockStatus::Low
            } else {
                return None;
            };

            Some(StockAlert {
                product_id: p.id.clone(),
                name: p.name.clone(),
                current_stock: stock,
                min_stock,
                status,
            })
        })
        .collect();

    // StockStatus variant order is the severity order: Out first
    alerts.sort_by_key(|a| a.status);
    alerts
}

// =============================================================================
// Unit Tests
// =============================================================================
