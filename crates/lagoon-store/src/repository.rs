//! # Repository Traits
//!
//! The storage seam between the core and whatever actually persists data.
//!
//! ## Why Traits?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Injection                                    │
//! │                                                                         │
//! │  Register ──────► dyn TransactionStore ──┬──► MemoryStore (tests)      │
//! │  Dashboard UI ──► dyn ProductStore ──────┴──► JsonStore   (disk)       │
//! │                                                                         │
//! │  The aggregation passes never see a store at all: they take plain      │
//! │  slices, so the caller decides when to snapshot the history.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transaction history is append-only: there is deliberately no update
//! or delete operation on transactions.

use lagoon_core::{Product, Transaction};

use crate::error::StoreResult;

/// Read access to the product catalog.
pub trait ProductStore {
    /// Loads the full catalog.
    fn load_products(&self) -> StoreResult<Vec<Product>>;
}

/// Access to the append-only transaction history.
pub trait TransactionStore {
    /// Loads the full history, oldest first.
    fn load_transactions(&self) -> StoreResult<Vec<Transaction>>;

    /// Appends one finalized transaction to the history.
    fn append_transaction(&mut self, transaction: &Transaction) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory store: the test fake, also used to hold demo data before it
/// is written out.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store seeded with a catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryStore {
            products,
            transactions: Vec::new(),
        }
    }

    /// Replaces the whole history (demo import path).
    pub fn import_history(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Number of stored transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

impl ProductStore for MemoryStore {
    fn load_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}

impl TransactionStore for MemoryStore {
    fn load_transactions(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn append_transaction(&mut self, transaction: &Transaction) -> StoreResult<()> {
        self.transactions.push(transaction.clone());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
