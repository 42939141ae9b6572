//! # Checkout
//!
//! The pure half of the transaction factory: converts a cart into an
//! immutable [`Transaction`] snapshot.
//!
//! Identity (UUID, receipt number) and the clock are inputs: this module
//! performs no I/O and draws no randomness, so a given cart always produces
//! the same transaction. The stateful half (append to history, clear the
//! cart) lives in `lagoon-store::register`.

use chrono::{DateTime, Utc};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentMethod, Transaction, TransactionLine};

/// Builds a transaction from the current cart state.
///
/// ## Errors
/// Fails with [`CoreError::EmptyCart`] when the cart has no lines. The cart
/// is borrowed immutably, so a failed checkout cannot have touched it.
///
/// ## Cash Handling
/// `change = cash_given − total` is computed only when the method is
/// [`PaymentMethod::Cash`] and a tendered amount was recorded. For every
/// other combination both fields are `None` (a card payment with a stray
/// tendered amount does not get change).
pub fn finalize(
    cart: &Cart,
    method: PaymentMethod,
    cash_given: Option<Money>,
    now: DateTime<Utc>,
    id: String,
    receipt_number: String,
) -> CoreResult<Transaction> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let totals = cart.totals();

    let lines: Vec<TransactionLine> = cart
        .lines()
        .iter()
        .map(|line| TransactionLine {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            category: line.product.category,
            unit_price_cents: line.product.price_cents,
            tax_rate: line.product.tax_rate,
            quantity: line.quantity,
            subtotal_cents: line.subtotal_cents,
            tax_cents: line.tax_cents,
        })
        .collect();

    let (cash_given_cents, change_cents) = match (method, cash_given) {
        (PaymentMethod::Cash, Some(given)) => {
            let change = given - Money::from_cents(totals.total_cents);
            (Some(given.cents()), Some(change.cents()))
        }
        _ => (None, None),
    };

    Ok(Transaction {
        id,
        receipt_number,
        lines,
        total_ex_tax_cents: totals.total_ex_tax_cents,
        tax_cents: totals.tax_cents,
        total_cents: totals.total_cents,
        payment_method: method,
        cash_given_cents,
        change_cents,
        created_at: now,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
