//! # Demo Seed Generator
//!
//! Populates a store file with the demo catalog and a synthetic sales
//! history for development.
//!
//! ## Usage
//! ```bash
//! # Generate 14 days of history (default)
//! cargo run -p lagoon-store --bin seed
//!
//! # Generate a custom window
//! cargo run -p lagoon-store --bin seed -- --days 30
//!
//! # Specify the store file and a fixed RNG seed
//! cargo run -p lagoon-store --bin seed -- --out ./data/lagoon.json --seed 42
//! ```
//!
//! After writing the store, the aggregation passes run once over the fresh
//! history and print a summary, so a bad generation is visible immediately.

use std::env;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lagoon_core::{analyze_traffic, compute_dashboard};
use lagoon_store::demo::{demo_catalog, generate_history, DEFAULT_DEMO_DAYS};
use lagoon_store::json::JsonStore;
use lagoon_store::repository::{ProductStore, TransactionStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut days: u64 = DEFAULT_DEMO_DAYS;
    let mut out_path = String::from("./lagoon_demo.json");
    let mut rng_seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" | "-n" => {
                if i + 1 < args.len() {
                    days = args[i + 1].parse().unwrap_or(DEFAULT_DEMO_DAYS);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    rng_seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Lagoon POS Demo Seed Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -n, --days <N>     Days of history to generate (default: 14)");
                println!("  -o, --out <PATH>   Store file path (default: ./lagoon_demo.json)");
                println!("  -s, --seed <N>     Fixed RNG seed for reproducible output");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lagoon POS Demo Seed Generator");
    println!("=================================");
    println!("Store file: {}", out_path);
    println!("Days:       {}", days);
    println!();

    let mut store = JsonStore::open(&out_path)?;
    if store.transaction_count() > 0 {
        println!("⚠ Store already has {} transactions", store.transaction_count());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the store file to regenerate.");
        return Ok(());
    }

    let mut rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = demo_catalog();
    let today = Utc::now().date_naive();

    let start = std::time::Instant::now();
    let history = generate_history(&catalog, days, today, &mut rng);
    let elapsed = start.elapsed();

    store.replace_products(catalog)?;
    store.import_history(history)?;

    println!("✓ Wrote {} products", store.load_products()?.len());
    println!(
        "✓ Generated {} transactions in {:?}",
        store.transaction_count(),
        elapsed
    );

    // Run the aggregation passes once as a sanity check on the fresh data.
    let history = store.load_transactions()?;
    let products = store.load_products()?;

    println!();
    println!("Dashboard (today):");
    let dashboard = compute_dashboard(&history, &products, today);
    println!(
        "  Revenue: {} cents over {} transactions (avg ticket {} cents)",
        dashboard.today_revenue_cents,
        dashboard.today_transactions,
        dashboard.average_ticket_cents
    );
    println!("  Top products:  {}", dashboard.top_products.len());
    println!("  Stock alerts:  {}", dashboard.stock_alerts.len());

    println!();
    println!("Traffic ({} day window):", days);
    let traffic = analyze_traffic(&history, days, today);
    println!(
        "  Avg customers/hour: {:.1}",
        traffic.average_customers_per_hour
    );
    println!("  Peak hours:         {}", traffic.peak_hours.len());
    println!("  Staff slots:        {}", traffic.recommendations.len());
    println!(
        "  Busiest: {} / Quietest: {}",
        traffic.busiest_day, traffic.quietest_day
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
