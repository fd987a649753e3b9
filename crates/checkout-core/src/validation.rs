//! # Validation Module
//!
//! Product field validation, run once at construction time so that every
//! [`Product`](crate::Product) in a catalog is known-good. Pricing code
//! never re-validates.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CODE_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_CODE_LEN`] characters
/// - Must contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_code;
///
/// assert!(validate_product_code("R01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates a product price.
///
/// Zero is a legal price (free items exist); negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_product_code() {
        assert!(validate_product_code("R01").is_ok());
        assert!(validate_product_code("BLUE-WIDGET_2").is_ok());
        assert!(validate_product_code("  R01  ").is_ok()); // trimmed first

        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code(&"A".repeat(51)).is_err());
        assert!(validate_product_code("R 01").is_err());
        assert!(validate_product_code("R01!").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Red Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::new(dec!(32.95))).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::new(dec!(-0.01))).is_err());
    }
}
