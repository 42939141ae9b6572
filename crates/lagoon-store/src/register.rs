//! # Register
//!
//! The stateful half of the transaction factory: one live cart wired to an
//! injected transaction store.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_payment(method, cash)                        │
//! │                                                                         │
//! │  cart ──► checkout::finalize ──► Transaction                            │
//! │                 │ (EmptyCart? → error, cart untouched)                  │
//! │                 ▼                                                       │
//! │  store.append_transaction ──► (store failure? → error, cart KEPT)       │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  cart.clear() ──► return Transaction                                    │
//! │                                                                         │
//! │  The cart is only cleared after a successful append, so a failed       │
//! │  persist never loses the sale in progress.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One register instance per cashier session. There is no concurrent-writer
//! scenario to arbitrate.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use lagoon_core::checkout;
use lagoon_core::{Cart, Money, PaymentMethod, Transaction};

use crate::error::StoreResult;
use crate::repository::TransactionStore;

/// A cashier session: the live cart plus the history it appends to.
#[derive(Debug)]
pub struct Register<S: TransactionStore> {
    cart: Cart,
    store: S,
}

impl<S: TransactionStore> Register<S> {
    /// Creates a register with an empty cart over the given store.
    pub fn new(store: S) -> Self {
        Register {
            cart: Cart::new(),
            store,
        }
    }

    /// Read access to the live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the live cart for the ledger operations
    /// (add/remove/set-quantity/delete).
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the register, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Finalizes the cart into a transaction, appends it to the history
    /// and clears the cart.
    ///
    /// ## Errors
    /// - `EmptyCart` when the cart has no lines; nothing is appended and
    ///   the cart is unchanged
    /// - store errors propagate as-is; the cart is kept so the sale can be
    ///   retried
    pub fn process_payment(
        &mut self,
        method: PaymentMethod,
        cash_given: Option<Money>,
    ) -> StoreResult<Transaction> {
        debug!(?method, lines = self.cart.lines().len(), "process_payment");

        let now = Utc::now();
        let transaction = checkout::finalize(
            &self.cart,
            method,
            cash_given,
            now,
            Uuid::new_v4().to_string(),
            generate_receipt_number(now),
        )?;

        self.store.append_transaction(&transaction)?;
        self.cart.clear();

        info!(
            id = %transaction.id,
            receipt = %transaction.receipt_number,
            total = transaction.total_cents,
            "Payment processed"
        );

        Ok(transaction)
    }
}

/// Generates a receipt number: `YYYYMMDD-HHMMSS-XXXX`.
///
/// Date and time components keep receipts human-sortable; the 4-character
/// random suffix keeps two sales within the same second distinct.
fn generate_receipt_number(now: DateTime<Utc>) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..4)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}-{}", now.format("%Y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================
