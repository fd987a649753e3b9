//! # checkout-core: Pure Pricing Logic for Acme Checkout
//!
//! This crate is the **heart** of Acme Checkout. It computes the full
//! checkout total for a shopping basket — item subtotal, promotional
//! discounts, and tiered delivery charges — as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Acme Checkout Architecture                     │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Caller (CLI runner, service, ...)             │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ checkout-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ ┌────────┐  │  │
//! │  │  │  money  │ │ catalog │ │ delivery │ │ offers │ │ basket │  │  │
//! │  │  │  Money  │ │ Product │ │  Rules   │ │ Offer  │ │ Basket │  │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────┘ └────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact-decimal [`Money`] type (no floating point!)
//! - [`types`] - Domain values ([`Product`], [`BasketLine`])
//! - [`catalog`] - Case-insensitive [`ProductCatalog`]
//! - [`delivery`] - Threshold-tiered delivery charges
//! - [`offers`] - Pluggable discount strategies
//! - [`basket`] - The [`Basket`] orchestrator
//! - [`error`] - Domain error types
//! - [`validation`] - Product field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every total is recomputed from basket state -
//!    same input = same output, nothing cached
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are exact decimals; binary
//!    floats never touch a price
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{
//!     Basket, BuyOneGetSecondHalfPrice, DeliveryChargeCalculator,
//!     DeliveryChargeRules, Money, Offer, Product, ProductCatalog,
//! };
//! use rust_decimal_macros::dec;
//!
//! let catalog = ProductCatalog::new(vec![
//!     Product::new("R01", "Red Widget", Money::new(dec!(32.95))).unwrap(),
//!     Product::new("G01", "Green Widget", Money::new(dec!(24.95))).unwrap(),
//! ]);
//! let calculator = DeliveryChargeCalculator::new(DeliveryChargeRules::default());
//! let offers: Vec<Box<dyn Offer>> = vec![Box::new(BuyOneGetSecondHalfPrice::new("R01"))];
//!
//! let mut basket = Basket::new(&catalog, &calculator, &offers);
//! basket.add("R01").unwrap();
//! basket.add("G01").unwrap();
//!
//! assert_eq!(basket.total(), Money::new(dec!(60.85)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offers;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Basket` instead of
// `use checkout_core::basket::Basket`

pub use basket::Basket;
pub use catalog::ProductCatalog;
pub use delivery::{DeliveryChargeCalculator, DeliveryChargeRules, DeliveryRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offers::{BuyOneGetSecondHalfPrice, Offer};
pub use types::{BasketLine, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product code.
///
/// ## Business Reason
/// Codes are short business identifiers ("R01", "G01"); a length cap keeps
/// catalog keys sane and catches obviously malformed input early.
pub const MAX_CODE_LEN: usize = 50;

/// Maximum length of a product display name.
pub const MAX_NAME_LEN: usize = 200;
