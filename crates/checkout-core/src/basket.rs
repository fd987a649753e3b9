//! # Shopping Basket
//!
//! The orchestrator of the pricing pipeline. A basket borrows its
//! collaborators - catalog, delivery calculator, offers - which are built
//! once and shared read-only across any number of baskets, and owns only
//! its ordered line sequence.
//!
//! ## Pricing Pipeline
//! ```text
//! subtotal ──► discount (Σ offers) ──► delivery(subtotal − discount)
//!                                              │
//!                                              ▼
//!              total = subtotal − discount + delivery, truncated to cents
//! ```

use crate::catalog::ProductCatalog;
use crate::delivery::DeliveryChargeCalculator;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offers::Offer;
use crate::types::BasketLine;

/// A single checkout transaction.
///
/// Mutated only by [`add`](Basket::add); [`total`](Basket::total) recomputes
/// from scratch on every call, so it is idempotent and side-effect-free.
///
/// ## Example
/// ```rust
/// use checkout_core::{
///     Basket, BuyOneGetSecondHalfPrice, DeliveryChargeCalculator,
///     DeliveryChargeRules, Money, Offer, Product, ProductCatalog,
/// };
/// use rust_decimal_macros::dec;
///
/// let catalog = ProductCatalog::new(vec![
///     Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap(),
/// ]);
/// let calculator = DeliveryChargeCalculator::new(DeliveryChargeRules::default());
/// let offers: Vec<Box<dyn Offer>> = vec![Box::new(BuyOneGetSecondHalfPrice::new("R01"))];
///
/// let mut basket = Basket::new(&catalog, &calculator, &offers);
/// basket.add("R01").unwrap();
/// basket.add("R01").unwrap();
/// assert_eq!(basket.total(), Money::new(dec!(54.37)));
/// ```
#[derive(Debug)]
pub struct Basket<'a> {
    catalog: &'a ProductCatalog,
    delivery_calculator: &'a DeliveryChargeCalculator,
    offers: &'a [Box<dyn Offer>],
    lines: Vec<BasketLine<'a>>,
}

impl<'a> Basket<'a> {
    /// Creates an empty basket bound to its collaborators.
    pub fn new(
        catalog: &'a ProductCatalog,
        delivery_calculator: &'a DeliveryChargeCalculator,
        offers: &'a [Box<dyn Offer>],
    ) -> Self {
        Basket {
            catalog,
            delivery_calculator,
            offers,
            lines: Vec::new(),
        }
    }

    /// Adds one unit of a product by code (case-insensitive).
    ///
    /// Each call appends its own line; quantities are never merged, because
    /// positional offers depend on discrete entries in insertion order.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] if the code (including an empty one)
    /// is not in the catalog. A failed add leaves the basket unchanged.
    pub fn add(&mut self, product_code: impl AsRef<str>) -> CoreResult<()> {
        let product_code = product_code.as_ref();
        let product = self
            .catalog
            .find(product_code)
            .ok_or_else(|| CoreError::ProductNotFound(product_code.to_string()))?;

        self.lines.push(BasketLine {
            product,
            quantity: 1,
        });

        Ok(())
    }

    /// The basket lines, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[BasketLine<'a>] {
        &self.lines
    }

    /// Number of lines in the basket.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the basket has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals before discounts and delivery.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(BasketLine::line_total).sum()
    }

    /// Total discount across all registered offers.
    ///
    /// Every offer sees the same pre-discount line list; discounts sum
    /// additively with no clamping, preserving the observed behavior even
    /// though an aggressive offer set could exceed the subtotal.
    pub fn discount(&self) -> Money {
        self.offers.iter().map(|offer| offer.apply(&self.lines)).sum()
    }

    /// The final charged amount.
    ///
    /// Computed in fixed order: subtotal, then discount, then delivery on
    /// the discounted amount, then truncation of the sum to whole cents.
    /// Truncation (toward zero, never rounding) guarantees the charge never
    /// exceeds the exact computed value.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        let discount = self.discount();
        let delivery = self.delivery_calculator.calculate(subtotal - discount);

        (subtotal - discount + delivery).truncate_to_cents()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
