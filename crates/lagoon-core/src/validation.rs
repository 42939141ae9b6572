//! # Validation Module
//!
//! Input validation for catalog data.
//!
//! These run at the edge, before business logic: the frontend performs its
//! own format checks for immediate feedback, and the JSON store calls
//! [`validate_product`] on every catalog entry before persisting it.
//!
//! Cart limits (line count, line quantity) are NOT validated here; the cart
//! enforces them itself and reports them as dedicated `CoreError` variants.

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validation
// =============================================================================

/// Validates a catalog entry before persistence.
///
/// ## Rules
/// - id must be a valid UUID
/// - name must be non-empty and at most 200 characters
/// - price must be non-negative
/// - stock and min_stock, where tracked, must be non-negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_uuid(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;

    if let Some(stock) = product.stock {
        validate_stock(stock)?;
    }
    if let Some(min_stock) = product.min_stock {
        validate_stock(min_stock)?;
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ```rust
/// use lagoon_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Cari poulet").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock count or minimum-stock threshold.
///
/// ## Rules
/// - Must be non-negative. Stock never goes negative; mutations clamp.
pub fn validate_stock(count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ```rust
/// use lagoon_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, TaxRate};
    use chrono::Utc;

    fn valid_product() -> Product {
        let now = Utc::now();
        Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Cari poulet".to_string(),
            price_cents: 900,
            category: Category::Meals,
            tax_rate: TaxRate::Reduced,
            stock: Some(10),
            min_stock: Some(5),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_validate_product_accepts_valid() {
        assert!(validate_product(&valid_product()).is_ok());

        let mut untracked = valid_product();
        untracked.stock = None;
        untracked.min_stock = None;
        assert!(validate_product(&untracked).is_ok());
    }

    #[test]
    fn test_validate_product_rejects_each_bad_field() {
        let mut bad_id = valid_product();
        bad_id.id = "not-a-uuid".to_string();
        assert!(validate_product(&bad_id).is_err());

        let mut bad_name = valid_product();
        bad_name.name = "   ".to_string();
        assert!(validate_product(&bad_name).is_err());

        let mut bad_price = valid_product();
        bad_price.price_cents = -1;
        assert!(validate_product(&bad_price).is_err());

        let mut bad_stock = valid_product();
        bad_stock.min_stock = Some(-5);
        assert!(validate_product(&bad_stock).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bouchon gratiné").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(42).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
