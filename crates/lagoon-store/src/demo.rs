//! # Demo Data Generator
//!
//! Produces a synthetic transaction history shaped like a real snack bar
//! week, so the dashboard and the traffic analyzer have something to chew
//! on before any real sales exist.
//!
//! ## Shape Of A Generated Day
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Transactions per hour (weighted)                     │
//! │                                                                         │
//! │   80 ┤                    ██                                            │
//! │   70 ┤                    ██ ██                                         │
//! │   60 ┤                    ██ ██                ██                       │
//! │   50 ┤                    ██ ██             ██ ██                       │
//! │   40 ┤                 ██ ██ ██             ██ ██ ██                    │
//! │   20 ┤        ██    ██ ██ ██ ██ ██    ██ ██ ██ ██ ██ ██                │
//! │    5 ┤  ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██ ██                │
//! │      └──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──┬──               │
//! │         7  8  9 10 11 12 13 14 15 16 17 18 19 20 21                    │
//! │              lunch rush ▲▲            dinner rush ▲▲                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Weekends get a higher base volume than weekdays, so the traffic
//! analyzer's busiest/quietest day output is meaningful on demo data.
//!
//! Determinism: the generator takes an injected `Rng`, so seeded runs
//! reproduce the same history byte for byte.

use chrono::{Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};
use rand::Rng;
use tracing::info;

use lagoon_core::{
    Category, Money, PaymentMethod, Product, TaxRate, Transaction, TransactionLine,
};

/// Default history depth for the seed binary.
pub const DEFAULT_DEMO_DAYS: u64 = 14;

/// Relative transaction volume per opening hour. Hours absent from the
/// table (06:00, 22:00) get no demo sales.
const HOUR_WEIGHTS: &[(u32, u32)] = &[
    (7, 5),
    (8, 10),
    (9, 15),
    (10, 20),
    (11, 40),
    (12, 80),
    (13, 70),
    (14, 30),
    (15, 15),
    (16, 20),
    (17, 25),
    (18, 50),
    (19, 60),
    (20, 40),
    (21, 20),
];

/// Picks an hour from [`HOUR_WEIGHTS`] proportionally to its weight.
fn weighted_hour(rng: &mut impl Rng) -> u32 {
    let total: u32 = HOUR_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for &(hour, weight) in HOUR_WEIGHTS {
        if roll < weight {
            return hour;
        }
        roll -= weight;
    }
    // Unreachable while the table is non-empty; lunch hour as a safe default.
    12
}

/// Generates `days` days of synthetic history ending at `reference`
/// (inclusive), oldest transaction first.
///
/// An empty catalog yields an empty history.
pub fn generate_history(
    products: &[Product],
    days: u64,
    reference: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<Transaction> {
    if products.is_empty() {
        return Vec::new();
    }

    let mut history = Vec::new();

    for offset in (0..days).rev() {
        let date = match reference.checked_sub_days(Days::new(offset)) {
            Some(d) => d,
            None => continue,
        };

        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let base = if weekend { 80 } else { 60 };
        let count = base + rng.gen_range(0..30);

        for t in 0..count {
            let hour = weighted_hour(rng);
            let minute = rng.gen_range(0..60);
            let created_at = match Utc
                .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, minute, 0)
                .single()
            {
                Some(dt) => dt,
                None => continue,
            };

            let mut lines = Vec::new();
            let line_count = rng.gen_range(1..=5);
            for _ in 0..line_count {
                let product = &products[rng.gen_range(0..products.len())];
                let quantity = rng.gen_range(1..=2);
                let subtotal = Money::from_cents(product.price_cents * quantity);
                lines.push(TransactionLine {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    category: product.category,
                    unit_price_cents: product.price_cents,
                    tax_rate: product.tax_rate,
                    quantity,
                    subtotal_cents: subtotal.cents(),
                    tax_cents: subtotal.included_tax(product.tax_rate).cents(),
                });
            }

            let total_cents: i64 = lines.iter().map(|l| l.subtotal_cents).sum();
            let tax_cents: i64 = lines.iter().map(|l| l.tax_cents).sum();

            let (payment_method, cash_given_cents, change_cents) = if rng.gen_bool(0.7) {
                (PaymentMethod::Card, None, None)
            } else {
                // Round the tendered cash up to the next 5 € note/coin step.
                let given = ((total_cents + 499) / 500) * 500;
                (PaymentMethod::Cash, Some(given), Some(given - total_cents))
            };

            history.push(Transaction {
                id: format!("demo-{}-{}", date.format("%Y%m%d"), t),
                receipt_number: format!("DEMO-{}-{:04}", date.format("%Y%m%d"), t),
                lines,
                total_ex_tax_cents: total_cents - tax_cents,
                tax_cents,
                total_cents,
                payment_method,
                cash_given_cents,
                change_cents,
                created_at,
            });
        }
    }

    history.sort_by_key(|tx| tx.created_at);

    info!(
        days,
        transactions = history.len(),
        "Generated demo history"
    );

    history
}

/// The built-in demo catalog: a La Réunion snack bar menu.
///
/// Ids are fixed UUIDs so repeated seeding is stable. A few items carry
/// stock levels tuned to trip each stock alert tier.
pub fn demo_catalog() -> Vec<Product> {
    let now = Utc::now();

    let entry = |id: &str,
                 name: &str,
                 price_cents: i64,
                 category: Category,
                 tax_rate: TaxRate,
                 stock: Option<i64>,
                 min_stock: Option<i64>| Product {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        category,
        tax_rate,
        stock,
        min_stock,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    vec![
        entry("0d4f2b6e-8a31-4c5d-9e72-1f83a6b4c051", "Americain", 650, Category::Sandwiches, TaxRate::Reduced, None, None),
        entry("1a7c9e3d-5b42-4f68-8d19-2e74b5c6a302", "Sandwich bouchons", 600, Category::Sandwiches, TaxRate::Reduced, None, None),
        entry("2b8d1f4e-6c53-4a79-9e21-3f85c6d7b413", "Poulet rôti", 550, Category::Sandwiches, TaxRate::Reduced, None, None),
        entry("3c9e2a5f-7d64-4b81-8f32-4a96d7e8c524", "Cari poulet", 900, Category::Meals, TaxRate::Reduced, None, None),
        entry("4d1f3b6a-8e75-4c92-9a43-5b17e8f9d635", "Rougail saucisse", 850, Category::Meals, TaxRate::Reduced, None, None),
        entry("5e2a4c7b-9f86-4d13-8b54-6c28f9a1e746", "Riz chauffé", 500, Category::Meals, TaxRate::Reduced, None, None),
        entry("6f3b5d8c-1a97-4e24-9c65-7d39a1b2f857", "Samoussas (x3)", 300, Category::Snacks, TaxRate::Reduced, Some(12), Some(20)),
        entry("7a4c6e9d-2b18-4f35-8d76-8e41b2c3a968", "Bonbons piment (x4)", 250, Category::Snacks, TaxRate::Reduced, Some(4), Some(15)),
        entry("8b5d7f1e-3c29-4a46-9e87-9f52c3d4b179", "Coca-Cola 33cl", 250, Category::Drinks, TaxRate::Reduced, Some(48), Some(24)),
        entry("9c6e8a2f-4d31-4b57-8f98-1a63d4e5c281", "Eau 50cl", 150, Category::Drinks, TaxRate::Reduced, Some(0), Some(24)),
        entry("1d7f9b3a-5e42-4c68-9a19-2b74e5f6d392", "Limonade Cot", 230, Category::Drinks, TaxRate::Reduced, Some(30), Some(12)),
        entry("2e8a1c4b-6f53-4d79-8b21-3c85f6a7e413", "Bière Dodo 33cl", 350, Category::AlcoholicDrinks, TaxRate::Standard, Some(36), Some(24)),
        entry("3f9b2d5c-7a64-4e81-9c32-4d96a7b8f524", "Rhum arrangé (dose)", 400, Category::AlcoholicDrinks, TaxRate::Standard, None, None),
        entry("4a1c3e6d-8b75-4f92-8d43-5e17b8c9a635", "Gâteau patate", 350, Category::Desserts, TaxRate::Reduced, None, None),
        entry("5b2d4f7e-9c86-4a13-9e54-6f28c9d1b746", "Glace coco", 300, Category::IceCream, TaxRate::Reduced, None, None),
        entry("6c3e5a8f-1d97-4b24-8f65-7a39d1e2c857", "Menu cari + boisson", 1100, Category::Combos, TaxRate::Reduced, None, None),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> NaiveDate {
        // A Saturday, so the window always contains both weekend days.
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    #[test]
    fn test_empty_catalog_yields_empty_history() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = generate_history(&[], 7, reference(), &mut rng);
        assert!(history.is_empty());
    }

    #[test]
    fn test_hours_stay_within_weight_table() {
        let mut rng = StdRng::seed_from_u64(2);
        let history = generate_history(&demo_catalog(), 7, reference(), &mut rng);

        assert!(!history.is_empty());
        for tx in &history {
            let hour = tx.created_at.hour();
            assert!((7..=21).contains(&hour), "unexpected hour {}", hour);
        }
    }

    #[test]
    fn test_history_sorted_ascending() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = generate_history(&demo_catalog(), 7, reference(), &mut rng);

        for pair in history.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[test]
    fn test_weekends_busier_than_weekdays() {
        let mut rng = StdRng::seed_from_u64(4);
        let history = generate_history(&demo_catalog(), 14, reference(), &mut rng);

        let mut weekend = 0usize;
        let mut weekday = 0usize;
        let mut weekend_days = std::collections::HashSet::new();
        let mut weekday_days = std::collections::HashSet::new();
        for tx in &history {
            let date = tx.created_at.date_naive();
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                weekend += 1;
                weekend_days.insert(date);
            } else {
                weekday += 1;
                weekday_days.insert(date);
            }
        }

        let weekend_avg = weekend as f64 / weekend_days.len() as f64;
        let weekday_avg = weekday as f64 / weekday_days.len() as f64;
        // Base volumes are 80 vs 60 with at most +29 jitter; averaged over
        // two weeks the gap holds.
        assert!(weekend_avg > weekday_avg);
    }

    #[test]
    fn test_lines_reconcile_tax() {
        let mut rng = StdRng::seed_from_u64(5);
        let history = generate_history(&demo_catalog(), 3, reference(), &mut rng);

        for tx in &history {
            let subtotal: i64 = tx.lines.iter().map(|l| l.subtotal_cents).sum();
            let tax: i64 = tx.lines.iter().map(|l| l.tax_cents).sum();
            assert_eq!(tx.total_cents, subtotal);
            assert_eq!(tx.tax_cents, tax);
            assert_eq!(tx.total_ex_tax_cents, tx.total_cents - tx.tax_cents);
            for line in &tx.lines {
                assert_eq!(line.subtotal_cents, line.unit_price_cents * line.quantity);
            }
        }
    }

    #[test]
    fn test_cash_payments_round_up_to_five_euros() {
        let mut rng = StdRng::seed_from_u64(6);
        let history = generate_history(&demo_catalog(), 3, reference(), &mut rng);

        let mut saw_cash = false;
        for tx in &history {
            match tx.payment_method {
                PaymentMethod::Cash => {
                    saw_cash = true;
                    let given = tx.cash_given_cents.unwrap();
                    assert_eq!(given % 500, 0);
                    assert!(given >= tx.total_cents);
                    assert_eq!(tx.change_cents, Some(given - tx.total_cents));
                }
                _ => {
                    assert_eq!(tx.cash_given_cents, None);
                    assert_eq!(tx.change_cents, None);
                }
            }
        }
        assert!(saw_cash);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let catalog = demo_catalog();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = generate_history(&catalog, 5, reference(), &mut rng_a);
        let b = generate_history(&catalog, 5, reference(), &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_catalog_passes_validation() {
        // The seed binary persists this catalog through the validating
        // replace_products path; every entry must be accepted.
        let catalog = demo_catalog();
        assert!(!catalog.is_empty());
        for product in &catalog {
            lagoon_core::validation::validate_product(product).unwrap();
        }
    }

    #[test]
    fn test_receipt_numbers_carry_demo_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = generate_history(&demo_catalog(), 2, reference(), &mut rng);

        for tx in &history {
            assert!(tx.receipt_number.starts_with("DEMO-"));
            assert!(tx.id.starts_with("demo-"));
        }
    }
}
