//! # Delivery Charges
//!
//! Threshold-tiered delivery pricing: the more the order is worth, the less
//! delivery costs. Rules are configuration ([`DeliveryChargeRules`]); the
//! evaluation lives in [`DeliveryChargeCalculator`].

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Rules
// =============================================================================

/// A single threshold rule: orders of at least `threshold` pay `charge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRule {
    /// Minimum order amount (after discount) for this rule to apply.
    pub threshold: Money,

    /// Delivery charge at this tier.
    pub charge: Money,
}

impl DeliveryRule {
    /// Creates a rule.
    #[inline]
    pub const fn new(threshold: Money, charge: Money) -> Self {
        DeliveryRule { threshold, charge }
    }
}

/// Ordered delivery charge configuration.
///
/// Rules are normalized at construction: sorted descending by threshold with
/// a stable sort, so among duplicate thresholds the first-registered rule
/// wins. Read-only afterwards.
///
/// ## Example
/// ```rust
/// use checkout_core::{DeliveryChargeRules, DeliveryRule, Money};
/// use rust_decimal_macros::dec;
///
/// let rules = DeliveryChargeRules::new(vec![
///     DeliveryRule::new(Money::zero(), Money::new(dec!(5.95))),
///     DeliveryRule::new(Money::new(dec!(100)), Money::zero()),
/// ]);
///
/// // Highest threshold first, regardless of input order
/// assert_eq!(rules.rules()[0].threshold, Money::new(dec!(100)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DeliveryRule>", into = "Vec<DeliveryRule>")]
pub struct DeliveryChargeRules {
    rules: Vec<DeliveryRule>,
}

impl DeliveryChargeRules {
    /// Creates a rule set, sorting descending by threshold.
    pub fn new(mut rules: Vec<DeliveryRule>) -> Self {
        // Stable sort: ties keep registration order
        rules.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        DeliveryChargeRules { rules }
    }

    /// The rules, sorted descending by threshold.
    #[inline]
    pub fn rules(&self) -> &[DeliveryRule] {
        &self.rules
    }
}

/// The documented Acme Widget Co default tiers.
///
/// - Orders under $50: $4.95 delivery
/// - Orders $50-$89.99: $2.95 delivery
/// - Orders $90+: free delivery
impl Default for DeliveryChargeRules {
    fn default() -> Self {
        DeliveryChargeRules::new(vec![
            DeliveryRule::new(Money::new(dec!(90)), Money::zero()),
            DeliveryRule::new(Money::new(dec!(50)), Money::new(dec!(2.95))),
            DeliveryRule::new(Money::zero(), Money::new(dec!(4.95))),
        ])
    }
}

// Deserialization funnels through `new` so the sorted invariant holds for
// rules loaded from config.
impl From<Vec<DeliveryRule>> for DeliveryChargeRules {
    fn from(rules: Vec<DeliveryRule>) -> Self {
        DeliveryChargeRules::new(rules)
    }
}

impl From<DeliveryChargeRules> for Vec<DeliveryRule> {
    fn from(rules: DeliveryChargeRules) -> Self {
        rules.rules
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Evaluates [`DeliveryChargeRules`] against an order amount.
///
/// ## Example
/// ```rust
/// use checkout_core::{DeliveryChargeCalculator, DeliveryChargeRules, Money};
/// use rust_decimal_macros::dec;
///
/// let calculator = DeliveryChargeCalculator::new(DeliveryChargeRules::default());
///
/// assert_eq!(calculator.calculate(Money::new(dec!(45.00))), Money::new(dec!(4.95)));
/// assert_eq!(calculator.calculate(Money::new(dec!(75.00))), Money::new(dec!(2.95)));
/// assert_eq!(calculator.calculate(Money::new(dec!(95.00))), Money::zero());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeliveryChargeCalculator {
    rules: DeliveryChargeRules,
}

impl DeliveryChargeCalculator {
    /// Creates a calculator over the given rules.
    pub fn new(rules: DeliveryChargeRules) -> Self {
        DeliveryChargeCalculator { rules }
    }

    /// Returns the delivery charge for a post-discount order amount.
    ///
    /// Scans the descending-sorted rules for the first whose threshold is
    /// `<=` the amount (inclusive boundary: an order of exactly 50.00 pays
    /// the 50-tier charge). If no rule matches - possible when the lowest
    /// threshold is above zero and the amount falls below it - the last
    /// (lowest-threshold) rule's charge applies as a fallback. An empty
    /// rule set charges nothing.
    pub fn calculate(&self, amount: Money) -> Money {
        self.rules
            .rules()
            .iter()
            .find(|rule| amount >= rule.threshold)
            .or_else(|| self.rules.rules().last())
            .map(|rule| rule.charge)
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
