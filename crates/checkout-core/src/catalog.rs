//! # Product Catalog
//!
//! O(1) product lookup by normalized code. Built once, read-only
//! thereafter, and safe to share across any number of baskets.

use std::collections::HashMap;

use crate::types::{normalize_code, Product};

/// Lookup table from normalized product code to [`Product`].
///
/// Codes are case-insensitive; duplicate codes are last-write-wins, so a
/// later registration silently replaces an earlier one.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Product, ProductCatalog};
/// use rust_decimal_macros::dec;
///
/// let catalog = ProductCatalog::new(vec![
///     Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap(),
///     Product::new("G01", "Green Widget", Money::new(dec!(24.95))).unwrap(),
/// ]);
///
/// assert!(catalog.find("r01").is_some()); // case-insensitive
/// assert!(catalog.find("ZZ99").is_none()); // absence is not an error
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Builds a catalog from a list of products.
    ///
    /// Later entries with duplicate codes replace earlier ones.
    pub fn new(products: Vec<Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.code().to_string(), product))
            .collect();

        ProductCatalog { products }
    }

    /// Finds a product by code, case-insensitively.
    ///
    /// Accepts any string-like input (`&str`, `String`, `&String`).
    /// An absent code yields `None`, never a default product.
    pub fn find(&self, code: impl AsRef<str>) -> Option<&Product> {
        self.products.get(&normalize_code(code.as_ref()))
    }

    /// Iterates over every registered product, in unspecified order.
    pub fn all(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of distinct products registered.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal_macros::dec;

    fn sample_catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap(),
            Product::new("G01", "Green Widget", Money::new(dec!(24.95))).unwrap(),
            Product::new("B01", "Blue Widget", Money::new(dec!(7.95))).unwrap(),
        ])
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProductCatalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.all().count(), 0);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = sample_catalog();

        let upper = catalog.find("R01").unwrap();
        let lower = catalog.find("r01").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.name(), "Red Widget");

        // Mixed case and surrounding whitespace also resolve
        assert!(catalog.find("b01").is_some());
        assert!(catalog.find(" G01 ").is_some());
    }

    #[test]
    fn test_find_accepts_string_like_inputs() {
        let catalog = sample_catalog();
        let owned = String::from("r01");

        assert!(catalog.find("r01").is_some());
        assert!(catalog.find(&owned).is_some());
        assert!(catalog.find(owned).is_some());
    }

    #[test]
    fn test_find_absent_code_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.find("ZZ99").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_duplicate_codes_last_write_wins() {
        let catalog = ProductCatalog::new(vec![
            Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap(),
            Product::new("R01", "Another Red", Money::new(dec!(50.00))).unwrap(),
        ]);

        assert_eq!(catalog.len(), 1);
        let found = catalog.find("R01").unwrap();
        assert_eq!(found.name(), "Another Red");
        assert_eq!(found.price(), Money::new(dec!(50.00)));
    }

    #[test]
    fn test_all_returns_every_product() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.all().count(), 3);
    }
}
