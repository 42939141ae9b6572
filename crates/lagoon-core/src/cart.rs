//! # Cart Ledger
//!
//! The running cart: line items with derived tax amounts, and totals
//! recomputed as a pure view.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Ledger Operations                              │
//! │                                                                         │
//! │  Cashier Action           Operation              Line Change            │
//! │  ──────────────           ─────────              ───────────            │
//! │  Tap product ───────────► add_item() ──────────► qty += 1 (or new line) │
//! │  Tap minus ─────────────► remove_item() ───────► qty -= 1 (or drop)     │
//! │  Tap trash ─────────────► delete_item() ───────► drop line              │
//! │  Type quantity ─────────► set_quantity() ──────► qty = n (n<=0 drops)   │
//! │  Payment succeeds ──────► clear() ─────────────► all lines dropped      │
//! │                                                                         │
//! │  EVERY quantity change recomputes subtotal AND tax together.            │
//! │  A reader never observes a line whose derived fields disagree           │
//! │  with its quantity.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals Are a View
//! `totals()` recomputes from current lines on every read instead of
//! maintaining cached fields incrementally. Incremental totals drift when a
//! mutation path forgets one of the two derived fields; a derived view
//! cannot.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart.
///
/// ## Price Freezing
/// The full product is snapshotted when the line is created. If the product
/// is repriced in the catalog afterwards, this line keeps the price the
/// customer saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot at the time the line was created.
    pub product: Product,

    /// Quantity in cart. Invariant: always > 0.
    pub quantity: i64,

    /// Tax-inclusive line total: unit price × quantity.
    pub subtotal_cents: i64,

    /// VAT portion backed out of the subtotal.
    pub tax_cents: i64,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        let mut line = CartLine {
            product: product.clone(),
            quantity: 1,
            subtotal_cents: 0,
            tax_cents: 0,
        };
        line.recompute();
        line
    }

    /// Recomputes both derived fields from the current quantity.
    ///
    /// This is the only place the derived fields are written, so they can
    /// never disagree with each other.
    fn recompute(&mut self) {
        let subtotal = self.product.price().multiply_quantity(self.quantity);
        self.subtotal_cents = subtotal.cents();
        self.tax_cents = subtotal.included_tax(self.product.tax_rate).cents();
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.recompute();
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals over the current lines. Produced by [`Cart::totals`],
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Total excluding VAT (HT) = Σ subtotal − Σ tax.
    pub total_ex_tax_cents: i64,
    /// Total VAT = Σ tax.
    pub tax_cents: i64,
    /// Total including VAT (TTC) = Σ subtotal.
    pub total_cents: i64,
    /// Total quantity across all lines.
    pub item_count: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The cart ledger.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increments
///   quantity)
/// - Line order is insertion order and is never changed by quantity updates
/// - Every line quantity is > 0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Read access to the current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of a product.
    ///
    /// If the product already has a line its quantity is incremented and
    /// the line's derived fields recomputed; otherwise a new line with
    /// quantity 1 is appended.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_qty = line.quantity + 1;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.set_quantity(new_qty);
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::new(product));
        Ok(())
    }

    /// Removes one unit of a product.
    ///
    /// Decrements the quantity and recomputes, or drops the line entirely
    /// when the quantity would reach zero. No-op if the product has no line.
    pub fn remove_item(&mut self, product_id: &str) {
        if let Some(pos) = self.lines.iter().position(|l| l.product.id == product_id) {
            if self.lines[pos].quantity > 1 {
                let qty = self.lines[pos].quantity - 1;
                self.lines[pos].set_quantity(qty);
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Removes a product's line regardless of quantity.
    /// No-op if the product has no line.
    pub fn delete_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of a product's line.
    ///
    /// A non-positive quantity deletes the line; by policy this is a
    /// deletion, not an error. No-op if the product has no line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.delete_item(product_id);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.set_quantity(quantity);
        }
        Ok(())
    }

    /// Empties all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derived totals, recomputed from current lines on every call.
    pub fn totals(&self) -> CartTotals {
        let mut subtotal = Money::zero();
        let mut tax = Money::zero();
        let mut item_count = 0;

        for line in &self.lines {
            subtotal += Money::from_cents(line.subtotal_cents);
            tax += Money::from_cents(line.tax_cents);
            item_count += line.quantity;
        }

        CartTotals {
            total_ex_tax_cents: (subtotal - tax).cents(),
            tax_cents: tax.cents(),
            total_cents: subtotal.cents(),
            item_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, TaxRate};
    use chrono::Utc;

    fn test_product(id: &str, price_cents: i64, rate: TaxRate) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            category: Category::Meals,
            tax_rate: rate,
            stock: None,
            min_stock: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Σ subtotal − Σ tax == total_ex_tax and Σ subtotal == total must hold
    /// at every point of any mutation sequence.
    fn assert_reconciled(cart: &Cart) {
        let totals = cart.totals();
        let sum_subtotal: i64 = cart.lines().iter().map(|l| l.subtotal_cents).sum();
        let sum_tax: i64 = cart.lines().iter().map(|l| l.tax_cents).sum();

        assert_eq!(totals.total_cents, sum_subtotal);
        assert_eq!(totals.tax_cents, sum_tax);
        assert_eq!(totals.total_ex_tax_cents, sum_subtotal - sum_tax);
    }

    #[test]
    fn test_add_item_new_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, TaxRate::Reduced);

        cart.add_item(&product).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].subtotal_cents, 1000);
        assert_eq!(cart.lines()[0].tax_cents, 21);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_add_item_increments_existing() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, TaxRate::Reduced);

        cart.add_item(&product).unwrap();
        cart.add_item(&product).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].subtotal_cents, 2000);
        // Tax recomputed from the new subtotal, not doubled line tax
        assert_eq!(cart.lines()[0].tax_cents, 41);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_remove_item_decrements_then_drops() {
        let mut cart = Cart::new();
        let product = test_product("1", 500, TaxRate::Standard);

        cart.add_item(&product).unwrap();
        cart.add_item(&product).unwrap();

        cart.remove_item("1");
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_reconciled(&cart);

        cart.remove_item("1");
        assert!(cart.is_empty());
    }

    /// remove_item applied `quantity` times converges to delete_item.
    #[test]
    fn test_repeated_remove_equals_delete() {
        let product = test_product("1", 350, TaxRate::Reduced);

        let mut removed = Cart::new();
        for _ in 0..5 {
            removed.add_item(&product).unwrap();
        }
        for _ in 0..5 {
            removed.remove_item("1");
        }

        let mut deleted = Cart::new();
        for _ in 0..5 {
            deleted.add_item(&product).unwrap();
        }
        deleted.delete_item("1");

        assert!(removed.is_empty());
        assert!(deleted.is_empty());
        assert_eq!(removed.totals(), deleted.totals());
    }

    #[test]
    fn test_set_quantity_recomputes() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, TaxRate::Reduced);

        cart.add_item(&product).unwrap();
        cart.set_quantity("1", 7).unwrap();

        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.lines()[0].subtotal_cents, 7000);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_set_quantity_nonpositive_deletes() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, TaxRate::Reduced);

        cart.add_item(&product).unwrap();
        cart.set_quantity("1", 0).unwrap();
        assert!(cart.is_empty());

        cart.add_item(&product).unwrap();
        cart.set_quantity("1", -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_change_preserves_line_order() {
        let mut cart = Cart::new();
        let a = test_product("a", 100, TaxRate::Reduced);
        let b = test_product("b", 200, TaxRate::Reduced);
        let c = test_product("c", 300, TaxRate::Standard);

        cart.add_item(&a).unwrap();
        cart.add_item(&b).unwrap();
        cart.add_item(&c).unwrap();
        cart.set_quantity("a", 9).unwrap();
        cart.add_item(&b).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_totals_mixed_rates() {
        let mut cart = Cart::new();
        let food = test_product("1", 1000, TaxRate::Reduced);
        let beer = test_product("2", 400, TaxRate::Standard);

        cart.add_item(&food).unwrap();
        cart.add_item(&beer).unwrap();
        cart.add_item(&beer).unwrap();

        let totals = cart.totals();
        // food: subtotal 1000, tax 21; beer: subtotal 800, tax 63
        assert_eq!(totals.total_cents, 1800);
        assert_eq!(totals.tax_cents, 21 + 63);
        assert_eq!(totals.total_ex_tax_cents, 1800 - 84);
        assert_eq!(totals.item_count, 3);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, TaxRate::Reduced);

        cart.add_item(&product).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.totals().total_cents, 0);
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new();
        let product = test_product("1", 100, TaxRate::Reduced);

        cart.add_item(&product).unwrap();
        let err = cart.set_quantity("1", MAX_LINE_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        // Failed mutation leaves the line untouched
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_line_count_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_item(&test_product(&format!("p{}", i), 100, TaxRate::Reduced))
                .unwrap();
        }
        assert_eq!(cart.lines().len(), MAX_CART_LINES);

        let err = cart
            .add_item(&test_product("one-too-many", 100, TaxRate::Reduced))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.lines().len(), MAX_CART_LINES);

        // An existing line can still be incremented at the limit
        cart.add_item(&test_product("p0", 100, TaxRate::Reduced)).unwrap();
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_reconciled(&cart);
    }

    #[test]
    fn test_mutation_sequence_stays_reconciled() {
        let mut cart = Cart::new();
        let a = test_product("a", 999, TaxRate::Reduced);
        let b = test_product("b", 250, TaxRate::Standard);

        for _ in 0..4 {
            cart.add_item(&a).unwrap();
            assert_reconciled(&cart);
        }
        cart.add_item(&b).unwrap();
        assert_reconciled(&cart);
        cart.remove_item("a");
        assert_reconciled(&cart);
        cart.set_quantity("b", 12).unwrap();
        assert_reconciled(&cart);
        cart.delete_item("a");
        assert_reconciled(&cart);
    }
}
