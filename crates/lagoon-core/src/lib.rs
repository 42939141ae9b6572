//! # lagoon-core: Pure Business Logic for Lagoon POS
//!
//! This crate is the **heart** of Lagoon POS. It contains the sales
//! computation and traffic analytics engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lagoon POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (dashboard UI)                     │   │
//! │  │    Catalog ──► Cart UI ──► Tender UI ──► Dashboards            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lagoon-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │   stats   │  │  traffic  │  │   │
//! │  │   │ VAT split │  │  ledger   │  │ dashboard │  │ staffing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 lagoon-store (Storage Layer)                    │   │
//! │  │         Repository traits, JSON store, register, demo data     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, analytics outputs)
//! - [`money`] - Money type with integer arithmetic and the VAT split
//! - [`cart`] - The cart ledger with derived totals
//! - [`checkout`] - Cart → immutable Transaction snapshot
//! - [`stats`] - Aggregation engine (dashboard pass)
//! - [`traffic`] - Traffic analyzer (staffing pass)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every analytics pass is deterministic over its
//!    inputs; callers pass in the clock, ids and reference dates
//! 2. **No I/O**: file system, network and database access are FORBIDDEN
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lagoon_core::money::Money;
//! use lagoon_core::types::TaxRate;
//!
//! // Prices are tax-inclusive; the VAT portion is backed out
//! let price = Money::from_cents(1000); // 10.00 TTC
//! let tax = price.included_tax(TaxRate::Reduced); // 2.1%
//! assert_eq!(tax.cents(), 21);
//!
//! // The net is always derived by subtraction
//! assert_eq!(price.excluding_tax(TaxRate::Reduced).cents(), 979);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod stats;
pub mod traffic;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lagoon_core::Money` instead of
// `use lagoon_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stats::compute_dashboard;
pub use traffic::analyze_traffic;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First hour of the operating window (inclusive).
pub const OPEN_HOUR: u32 = 6;

/// Last hour of the operating window (inclusive). A transaction at 22:45
/// still lands in the 22:00 bucket.
pub const CLOSE_HOUR: u32 = 22;

/// Number of hour buckets in the operating window (06:00-22:00 inclusive).
pub const OPERATING_HOURS: usize = (CLOSE_HOUR - OPEN_HOUR + 1) as usize;

/// Maximum lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transaction records a sane size.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
