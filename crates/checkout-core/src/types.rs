//! # Domain Types
//!
//! Core domain values for the pricing pipeline.
//!
//! ## Identity Pattern
//! A [`Product`]'s identity is its business code, nothing else. Two products
//! with the same code are the same product for equality and hashing, even if
//! name or price differ. That is what makes last-write-wins catalog
//! registration and code-based offer matching work.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_code, validate_product_name};

/// Normalizes a product code for lookup and identity: trimmed, uppercased.
///
/// Applied everywhere a code enters the system - product construction,
/// catalog lookup, offer targets - so "r01", " R01 " and "R01" all mean
/// the same product.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

// =============================================================================
// Product
// =============================================================================

/// An immutable priced catalog item.
///
/// Created once at catalog-build time via the checked [`Product::new`]
/// constructor; never mutated afterwards.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Product};
/// use rust_decimal_macros::dec;
///
/// let product = Product::new("r01", "Red Widget", Money::new(dec!(32.95))).unwrap();
/// assert_eq!(product.code(), "R01"); // normalized to uppercase
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductConfig")]
pub struct Product {
    /// Business identifier, normalized to trimmed uppercase.
    code: String,

    /// Display name shown to the customer.
    name: String,

    /// Unit price. Non-negative, exact decimal.
    price: Money,
}

/// Raw deserialization shape for [`Product`].
///
/// Deserialization funnels through [`Product::new`] so serde input cannot
/// bypass code normalization or price validation.
#[derive(Deserialize)]
struct ProductConfig {
    code: String,
    name: String,
    price: Money,
}

impl TryFrom<ProductConfig> for Product {
    type Error = ValidationError;

    fn try_from(raw: ProductConfig) -> Result<Self, Self::Error> {
        Product::new(raw.code, raw.name, raw.price)
    }
}

impl Product {
    /// Creates a new product, normalizing the code and validating all fields.
    ///
    /// ## Errors
    /// Returns a [`ValidationError`] if the code is empty/over-long/contains
    /// disallowed characters, the name is empty/over-long, or the price is
    /// negative.
    pub fn new(
        code: impl AsRef<str>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let code = normalize_code(code.as_ref());
        validate_product_code(&code)?;

        let name = name.into();
        validate_product_name(&name)?;

        validate_price(price)?;

        Ok(Product { code, name, price })
    }

    /// The normalized product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

/// Equality over the product code only.
///
/// Explicit impl rather than a derive: name and price deliberately do not
/// participate in identity.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

/// Hashing over the product code only, consistent with [`PartialEq`].
impl std::hash::Hash for Product {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Basket Line
// =============================================================================

/// One entry in a basket: a borrowed product and a quantity.
///
/// The basket is an ordered sequence of individual entries, not a
/// quantity-aggregated map: each `add` appends its own line with quantity 1,
/// and insertion order is what "every second matching item" offers key off.
#[derive(Debug, Clone, Copy)]
pub struct BasketLine<'a> {
    /// The catalog product this line refers to (shared, not owned).
    pub product: &'a Product,

    /// Units on this line. Always 1 for lines appended by `Basket::add`.
    pub quantity: u32,
}

impl<'a> BasketLine<'a> {
    /// Line total before discounts (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
