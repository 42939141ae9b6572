//! # Domain Types
//!
//! Core domain types used throughout Lagoon POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  Transaction    │   │ TransactionLine │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  product_id     │       │
//! │  │  price_cents    │   │  receipt_number │   │  quantity       │       │
//! │  │  tax_rate       │   │  total_cents    │   │  subtotal_cents │       │
//! │  │  stock          │   │  lines          │   │  tax_cents      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Analytics outputs: DashboardStats, TrafficAnalysis and friends        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `TransactionLine` freezes product data (name, price, rate) at the time
//! of sale. The transaction history stays meaningful even if the product is
//! renamed, repriced or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// The two VAT rates applicable in Réunion (DOM).
///
/// ## Why an Enum?
/// The rate set is fixed by law, so the closed enum makes invalid rates
/// unrepresentable. No runtime validation needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxRate {
    /// 2.1%, the reduced DOM rate (restauration, food).
    Reduced,
    /// 8.5%, the standard DOM rate (alcoholic drinks).
    Standard,
}

impl TaxRate {
    /// Returns the rate in basis points (210 = 2.1%).
    #[inline]
    pub const fn bps(&self) -> u32 {
        match self {
            TaxRate::Reduced => 210,
            TaxRate::Standard => 850,
        }
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.bps() as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::Reduced
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product categories of the snack-bar catalog.
///
/// Category metadata (display name, color, icon) lives in the frontend;
/// the core only carries the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meals,
    Drinks,
    AlcoholicDrinks,
    Desserts,
    Sandwiches,
    IceCream,
    Combos,
    Snacks,
    Other,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Tax-inclusive price in cents. Invariant: never negative.
    pub price_cents: i64,

    /// Category tag.
    pub category: Category,

    /// Applicable VAT rate.
    pub tax_rate: TaxRate,

    /// Current stock level, if inventory is tracked for this product.
    /// Invariant: never negative (mutations clamp at zero).
    pub stock: Option<i64>,

    /// Minimum stock threshold for alerting, if inventory is tracked.
    pub min_stock: Option<i64>,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Adjusts the tracked stock by `delta`, clamping at zero.
    ///
    /// Selling more than the counted stock is a counting error, not a
    /// reason to go negative. No-op for untracked products.
    pub fn adjust_stock(&mut self, delta: i64, now: DateTime<Utc>) {
        if let Some(stock) = self.stock {
            self.stock = Some((stock + delta).max(0));
            self.updated_at = now;
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash. The only method where tendered/change apply.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Cheque.
    Cheque,
    /// Titre-restaurant / meal voucher.
    MealVoucher,
}

// =============================================================================
// Transaction
// =============================================================================

/// A line item within a finalized transaction.
///
/// Uses the snapshot pattern: product data is frozen at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionLine {
    /// Product this line refers to.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Category at time of sale (frozen).
    pub category: Category,
    /// Tax-inclusive unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// VAT rate at time of sale (frozen).
    pub tax_rate: TaxRate,
    /// Quantity sold.
    pub quantity: i64,
    /// Tax-inclusive line total (unit price × quantity).
    pub subtotal_cents: i64,
    /// VAT portion backed out of the line total.
    pub tax_cents: i64,
}

/// A completed sale. Immutable once created; the history is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-sortable receipt number: `YYYYMMDD-HHMMSS-XXXX`.
    pub receipt_number: String,

    /// Frozen line items.
    pub lines: Vec<TransactionLine>,

    /// Total excluding VAT (HT).
    pub total_ex_tax_cents: i64,

    /// Total VAT.
    pub tax_cents: i64,

    /// Total including VAT (TTC). This is what the customer paid.
    pub total_cents: i64,

    /// How the sale was paid.
    pub payment_method: PaymentMethod,

    /// Cash handed over by the customer. Only set for cash payments
    /// where a tendered amount was recorded.
    pub cash_given_cents: Option<i64>,

    /// Change returned. Set together with `cash_given_cents`, never alone.
    pub change_cents: Option<i64>,

    /// When the sale was finalized.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Dashboard Analytics
// =============================================================================

/// Accumulated sales for one hour of the operating window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourlySales {
    /// Hour of day (6..=22).
    pub hour: u32,
    /// Revenue (TTC) accumulated in this hour.
    pub revenue_cents: i64,
    /// Number of transactions in this hour.
    pub transaction_count: u32,
    /// Number of customers. One customer per transaction.
    pub customer_count: u32,
}

impl HourlySales {
    /// An empty bucket for the given hour.
    pub const fn empty(hour: u32) -> Self {
        HourlySales {
            hour,
            revenue_cents: 0,
            transaction_count: 0,
            customer_count: 0,
        }
    }
}

/// Per-product sales accumulator for the top-products list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSales {
    pub product_id: String,
    /// Name snapshot from the first line encountered.
    pub name: String,
    pub quantity_sold: i64,
    /// Revenue (TTC) attributed to this product.
    pub revenue_cents: i64,
}

/// Stock alert severity. Variant order IS the sort order: the worst
/// condition sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock is exactly zero.
    Out,
    /// Stock at or below half the minimum threshold.
    Critical,
    /// Stock at or below the minimum threshold.
    Low,
}

/// A product whose stock needs attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockAlert {
    pub product_id: String,
    pub name: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub status: StockStatus,
}

/// Everything the dashboard shows for one reference day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    /// Revenue (TTC) for the reference day.
    pub today_revenue_cents: i64,
    /// Transaction count for the reference day.
    pub today_transactions: u32,
    /// Average ticket. Zero when there are no transactions.
    pub average_ticket_cents: i64,
    /// Day-over-day revenue change in percent. Zero when yesterday had
    /// no revenue (deliberate floor, not a "no data" sentinel).
    pub comparison_yesterday: f64,
    /// Top 10 products by revenue, descending.
    pub top_products: Vec<ProductSales>,
    /// Stock alerts, worst first.
    pub stock_alerts: Vec<StockAlert>,
    /// One bucket per operating hour, ascending.
    pub hourly_data: Vec<HourlySales>,
}

// =============================================================================
// Traffic Analytics
// =============================================================================

/// Relative customer volume of an hour versus the busiest hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    /// Staff headcount recommended for this traffic level.
    pub const fn recommended_staff(&self) -> u32 {
        match self {
            TrafficLevel::High => 3,
            TrafficLevel::Medium => 2,
            TrafficLevel::Low => 1,
        }
    }

    /// Canned justification shown next to the recommendation.
    pub const fn reason(&self) -> &'static str {
        match self {
            TrafficLevel::High => "High traffic - fast service required",
            TrafficLevel::Medium => "Moderate traffic - balanced coverage",
            TrafficLevel::Low => "Quiet period - reduced staff possible",
        }
    }
}

/// Averaged customer traffic for one hour of the operating window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeakHour {
    /// Hour of day (6..=22).
    pub hour: u32,
    /// Average customers over the days that had traffic in this hour.
    pub average_customers: f64,
    /// Average revenue (TTC cents) over the same days.
    pub average_revenue_cents: f64,
    /// Classification against the busiest hour.
    pub level: TrafficLevel,
}

/// A contiguous run of hours sharing one traffic level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffRecommendation {
    /// Human-readable slot, e.g. `"12:00 - 15:00"`.
    pub time_slot: String,
    /// First hour of the run (inclusive).
    pub start_hour: u32,
    /// Hour after the last hour of the run (exclusive).
    pub end_hour: u32,
    pub recommended_staff: u32,
    pub traffic_level: TrafficLevel,
    pub reason: String,
}

/// Output of the traffic analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrafficAnalysis {
    /// One entry per operating hour, ascending.
    pub peak_hours: Vec<PeakHour>,
    /// Contiguous same-level runs, in hour order.
    pub recommendations: Vec<StaffRecommendation>,
    /// Unweighted mean of the per-hour averages.
    pub average_customers_per_hour: f64,
    /// Weekday with the most transactions in the window, `"N/A"` if empty.
    pub busiest_day: String,
    /// Weekday with the fewest transactions in the window, `"N/A"` if empty.
    pub quietest_day: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_bps() {
        assert_eq!(TaxRate::Reduced.bps(), 210);
        assert_eq!(TaxRate::Standard.bps(), 850);
        assert!((TaxRate::Reduced.percentage() - 2.1).abs() < 1e-9);
        assert!((TaxRate::Standard.percentage() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_stock_status_severity_order() {
        // Worst condition sorts first
        assert!(StockStatus::Out < StockStatus::Critical);
        assert!(StockStatus::Critical < StockStatus::Low);
    }

    #[test]
    fn test_traffic_level_staffing() {
        assert_eq!(TrafficLevel::High.recommended_staff(), 3);
        assert_eq!(TrafficLevel::Medium.recommended_staff(), 2);
        assert_eq!(TrafficLevel::Low.recommended_staff(), 1);
    }

    #[test]
    fn test_adjust_stock_clamps_at_zero() {
        let now = Utc::now();
        let mut product = Product {
            id: "p1".to_string(),
            name: "Samoussa".to_string(),
            price_cents: 150,
            category: Category::Snacks,
            tax_rate: TaxRate::Reduced,
            stock: Some(3),
            min_stock: Some(10),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        product.adjust_stock(-5, now);
        assert_eq!(product.stock, Some(0));

        product.adjust_stock(7, now);
        assert_eq!(product.stock, Some(7));
    }

    #[test]
    fn test_enum_wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::MealVoucher).unwrap(),
            "\"meal_voucher\""
        );
        assert_eq!(
            serde_json::to_string(&Category::AlcoholicDrinks).unwrap(),
            "\"alcoholic_drinks\""
        );
        assert_eq!(serde_json::to_string(&TaxRate::Reduced).unwrap(), "\"reduced\"");

        let status: StockStatus = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(status, StockStatus::Critical);
    }

    #[test]
    fn test_adjust_stock_untracked_is_noop() {
        let now = Utc::now();
        let mut product = Product {
            id: "p1".to_string(),
            name: "Dodo".to_string(),
            price_cents: 350,
            category: Category::AlcoholicDrinks,
            tax_rate: TaxRate::Standard,
            stock: None,
            min_stock: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        product.adjust_stock(-2, now);
        assert_eq!(product.stock, None);
    }
}
