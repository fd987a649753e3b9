//! # Special Offers
//!
//! Pluggable discount strategies evaluated against the full ordered basket
//! contents. An offer is a pure function of the current line snapshot: it
//! returns a discount amount and never mutates the basket.
//!
//! Adding a new promotion means adding a new type that implements [`Offer`].
//! There is no "abstract base" to forget to override - a value of an offer
//! type cannot exist without a concrete `apply`.

use crate::money::Money;
use crate::types::{normalize_code, BasketLine};

// =============================================================================
// Offer Strategy
// =============================================================================

/// A discount strategy.
///
/// `apply` receives the full ordered basket line sequence (pre-discount -
/// offers never see each other's effect) and returns a non-negative discount
/// amount. The `Debug` bound keeps baskets holding boxed offers debuggable.
pub trait Offer: std::fmt::Debug {
    /// Computes this offer's discount for the given basket lines.
    fn apply(&self, items: &[BasketLine<'_>]) -> Money;

    /// Counts lines whose product code equals `code`.
    ///
    /// Shared helper for implementations; `code` must already be normalized.
    fn count_matching(&self, items: &[BasketLine<'_>], code: &str) -> usize {
        items
            .iter()
            .filter(|line| line.product.code() == code)
            .count()
    }
}

// =============================================================================
// Buy One Get Second Half Price
// =============================================================================

/// "Buy one, get the second half price" for a single product code.
///
/// Every second matching item - the 2nd, 4th, 6th, ... in basket order,
/// counting only lines for the target product - is discounted by half its
/// unit price. Zero or one matching item earns no discount.
///
/// ## Example
/// ```rust
/// use checkout_core::{BasketLine, BuyOneGetSecondHalfPrice, Money, Offer, Product};
/// use rust_decimal_macros::dec;
///
/// let red = Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap();
/// let offer = BuyOneGetSecondHalfPrice::new("R01");
///
/// let items = [
///     BasketLine { product: &red, quantity: 1 },
///     BasketLine { product: &red, quantity: 1 },
/// ];
/// assert_eq!(offer.apply(&items), Money::new(dec!(16.475))); // half of 32.95
/// ```
#[derive(Debug, Clone)]
pub struct BuyOneGetSecondHalfPrice {
    /// Target code, normalized at construction.
    product_code: String,
}

impl BuyOneGetSecondHalfPrice {
    /// Creates the offer for a product code (case-insensitive).
    pub fn new(product_code: impl AsRef<str>) -> Self {
        BuyOneGetSecondHalfPrice {
            product_code: normalize_code(product_code.as_ref()),
        }
    }

    /// The normalized target product code.
    #[inline]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }
}

impl Offer for BuyOneGetSecondHalfPrice {
    fn apply(&self, items: &[BasketLine<'_>]) -> Money {
        items
            .iter()
            .filter(|line| line.product.code() == self.product_code)
            .enumerate()
            // Even 1-based positions within the filtered sequence
            .filter(|(index, _)| (index + 1) % 2 == 0)
            .map(|(_, line)| line.product.price().half())
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use rust_decimal_macros::dec;

    fn red_widget() -> Product {
        Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap()
    }

    fn green_widget() -> Product {
        Product::new("G01", "Green Widget", Money::new(dec!(24.95))).unwrap()
    }

    fn lines<'a>(products: &'a [&'a Product]) -> Vec<BasketLine<'a>> {
        products
            .iter()
            .copied()
            .map(|product| BasketLine {
                product,
                quantity: 1,
            })
            .collect()
    }

    #[test]
    fn test_no_discount_for_empty_items() {
        let offer = BuyOneGetSecondHalfPrice::new("R01");
        assert_eq!(offer.apply(&[]), Money::zero());
    }

    #[test]
    fn test_no_discount_for_single_matching_item() {
        let red = red_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");
        assert_eq!(offer.apply(&lines(&[&red])), Money::zero());
    }

    #[test]
    fn test_discounts_second_matching_item() {
        let red = red_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        let discount = offer.apply(&lines(&[&red, &red]));
        assert_eq!(discount, Money::new(dec!(16.475)));
    }

    #[test]
    fn test_discounts_second_and_fourth_items() {
        let red = red_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        let discount = offer.apply(&lines(&[&red, &red, &red, &red]));
        assert_eq!(discount, Money::new(dec!(32.95)));
    }

    #[test]
    fn test_floor_of_n_over_two_pairs() {
        let red = red_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        // 5 matching items: positions 2 and 4 discounted, the 5th is not
        let discount = offer.apply(&lines(&[&red, &red, &red, &red, &red]));
        assert_eq!(discount, Money::new(dec!(32.95)));
    }

    #[test]
    fn test_ignores_non_matching_products() {
        let red = red_widget();
        let green = green_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        // Reds sit at filtered positions 1 and 2; greens are invisible
        let discount = offer.apply(&lines(&[&green, &red, &green, &red]));
        assert_eq!(discount, Money::new(dec!(16.475)));
    }

    #[test]
    fn test_interleaved_products_count_by_filtered_position() {
        let red = red_widget();
        let green = green_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        // Three reds among the lines: only the 2nd red is discounted
        let discount = offer.apply(&lines(&[&red, &green, &red, &red]));
        assert_eq!(discount, Money::new(dec!(16.475)));
    }

    #[test]
    fn test_target_code_is_case_insensitive() {
        let red = red_widget();
        let offer = BuyOneGetSecondHalfPrice::new("r01");
        assert_eq!(offer.product_code(), "R01");

        let discount = offer.apply(&lines(&[&red, &red]));
        assert_eq!(discount, Money::new(dec!(16.475)));
    }

    #[test]
    fn test_count_matching_helper() {
        let red = red_widget();
        let green = green_widget();
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        let line_refs = [&red, &green, &red];
        let items = lines(&line_refs);
        assert_eq!(offer.count_matching(&items, "R01"), 2);
        assert_eq!(offer.count_matching(&items, "G01"), 1);
        assert_eq!(offer.count_matching(&items, "B01"), 0);
    }
}
