//! # Checkout Demo
//!
//! Runs the worked Acme Widget Co basket examples against checkout-core.
//!
//! ## Usage
//! ```bash
//! cargo run -p checkout-demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p checkout-demo
//! ```
//!
//! ## Catalog
//! - R01 Red Widget   $32.95 (buy one, get the second half price)
//! - G01 Green Widget $24.95
//! - B01 Blue Widget  $7.95

use checkout_core::{
    Basket, BuyOneGetSecondHalfPrice, DeliveryChargeCalculator, DeliveryChargeRules, Offer,
    Product, ProductCatalog,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The Acme Widget Co product range. Prices as strings so serde parses
/// them into exact decimals, never through a float.
const CATALOG_JSON: &str = r#"[
    { "code": "R01", "name": "Red Widget",   "price": "32.95" },
    { "code": "G01", "name": "Green Widget", "price": "24.95" },
    { "code": "B01", "name": "Blue Widget",  "price": "7.95" }
]"#;

/// Default delivery tiers: free over $90, $2.95 over $50, $4.95 otherwise.
const DELIVERY_RULES_JSON: &str = r#"[
    { "threshold": "90", "charge": "0" },
    { "threshold": "50", "charge": "2.95" },
    { "threshold": "0",  "charge": "4.95" }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing, RUST_LOG aware
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let products: Vec<Product> = serde_json::from_str(CATALOG_JSON)?;
    let catalog = ProductCatalog::new(products);
    info!(products = catalog.len(), "Catalog loaded");

    let rules: DeliveryChargeRules = serde_json::from_str(DELIVERY_RULES_JSON)?;
    let delivery_calculator = DeliveryChargeCalculator::new(rules);

    let offers: Vec<Box<dyn Offer>> = vec![Box::new(BuyOneGetSecondHalfPrice::new("R01"))];
    info!(offers = offers.len(), "Offers registered");

    println!("Acme Widget Co - Shopping Basket Examples\n");

    let examples: &[&[&str]] = &[
        &["B01", "G01"],
        &["R01", "R01"],
        &["R01", "G01"],
        &["B01", "B01", "R01", "R01", "R01"],
    ];

    for codes in examples {
        let mut basket = Basket::new(&catalog, &delivery_calculator, &offers);
        for code in *codes {
            basket.add(code)?;
        }

        debug!(
            subtotal = %basket.subtotal(),
            discount = %basket.discount(),
            "Basket priced"
        );
        println!("{}: {}", codes.join(", "), basket.total());
    }

    Ok(())
}
