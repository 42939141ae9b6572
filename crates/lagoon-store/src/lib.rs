//! # lagoon-store: Storage Layer for Lagoon POS
//!
//! This crate provides persistence and the effectful edges of the system:
//! the file system, the clock, and randomness. Everything lagoon-core
//! deliberately refuses to own lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lagoon POS Data Flow                             │
//! │                                                                         │
//! │  UI layer (cart screen, dashboard, traffic view)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    lagoon-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Register    │    │  Repositories │    │     Demo     │  │   │
//! │  │   │ (register.rs) │    │(repository.rs)│    │  (demo.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ live cart +   │◄───│ ProductStore  │    │ catalog +    │  │   │
//! │  │   │ payments      │    │ TxStore trait │    │ history gen  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                  ┌─────────────┴─────────────┐                │   │
//! │  │                  ▼                           ▼                │   │
//! │  │           MemoryStore (tests)         JsonStore (json.rs)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                    lagoon_store.json                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - Storage traits plus the in-memory implementation
//! - [`json`] - Single-file JSON document store
//! - [`register`] - Live cart wired to a transaction store
//! - [`demo`] - Demo catalog and synthetic history generation
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lagoon_store::{JsonStore, Register};
//! use lagoon_core::PaymentMethod;
//!
//! let store = JsonStore::open("./lagoon_store.json")?;
//! let mut register = Register::new(store);
//!
//! register.cart_mut().add_item(&product)?;
//! let receipt = register.process_payment(PaymentMethod::Card, None)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod demo;
pub mod error;
pub mod json;
pub mod register;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use json::JsonStore;
pub use register::Register;
pub use repository::{MemoryStore, ProductStore, TransactionStore};
