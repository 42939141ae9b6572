//! # JSON Document Store
//!
//! A single-file JSON store for the catalog and the transaction history.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    lagoon_store.json                                    │
//! │                                                                         │
//! │  { "products": [...], "transactions": [...] }                          │
//! │                                                                         │
//! │  • Read fully on open (the history is one linear list)                 │
//! │  • Rewritten on every append: write temp file, then rename             │
//! │    so a crash mid-write never leaves a truncated store                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! serde round-trips field names and numeric types losslessly, so running
//! the aggregation passes over a reloaded history produces output identical
//! to running them over the original in-memory list.
//!
//! This is a single-cashier store: one writer, mutate-then-persist. If
//! concurrent sessions are ever introduced the append must become a
//! compare-and-append on a version counter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lagoon_core::validation::validate_product;
use lagoon_core::{CoreError, Product, Transaction};

use crate::error::StoreResult;
use crate::repository::{ProductStore, TransactionStore};

/// The on-disk document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    products: Vec<Product>,
    transactions: Vec<Transaction>,
}

/// File-backed store holding the catalog and the append-only history.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonStore {
    /// Opens a store file, creating an empty document if the file does not
    /// exist yet. A corrupted or incompatible file surfaces as
    /// `StoreError::Serde`, never as silent data loss.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let document = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            debug!(path = %path.display(), "Store file not found, starting empty");
            StoreDocument::default()
        };

        info!(
            path = %path.display(),
            products = document.products.len(),
            transactions = document.transactions.len(),
            "Opened JSON store"
        );

        Ok(JsonStore { path, document })
    }

    /// Replaces the catalog and persists.
    ///
    /// Every entry is validated first; a single invalid product rejects the
    /// whole replacement and leaves the stored catalog unchanged.
    pub fn replace_products(&mut self, products: Vec<Product>) -> StoreResult<()> {
        for product in &products {
            validate_product(product).map_err(CoreError::from)?;
        }
        self.document.products = products;
        self.persist()
    }

    /// Replaces the whole history and persists (demo import path).
    pub fn import_history(&mut self, transactions: Vec<Transaction>) -> StoreResult<()> {
        self.document.transactions = transactions;
        self.persist()
    }

    /// Number of stored transactions.
    pub fn transaction_count(&self) -> usize {
        self.document.transactions.len()
    }

    /// Writes the document to a temp file, then renames it into place.
    fn persist(&self) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(&self.document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Persisted store");
        Ok(())
    }
}

impl ProductStore for JsonStore {
    fn load_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.document.products.clone())
    }
}

impl TransactionStore for JsonStore {
    fn load_transactions(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.document.transactions.clone())
    }

    fn append_transaction(&mut self, transaction: &Transaction) -> StoreResult<()> {
        debug!(
            id = %transaction.id,
            receipt = %transaction.receipt_number,
            total = transaction.total_cents,
            "Appending transaction"
        );
        self.document.transactions.push(transaction.clone());
        self.persist()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
