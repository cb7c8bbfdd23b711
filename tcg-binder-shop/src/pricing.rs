//! Product pricing for the shop and the wishlist.
//!
//! Wishlist items are paid through a donation platform: the price carries a
//! 5% platform fee, an optional PayPal fee, and the total is rounded up to an
//! even number of euros. Shop items sell at their (sale) price plus shipping.

use crate::types::Product;

const PLATFORM_FEE_RATE: f64 = 0.05;
const PAYPAL_FEE_RATE: f64 = 0.05;
const PAYPAL_FEE_FIXED: f64 = 0.35;
/// Prices at or above this cannot be donated in one payment.
const DONATION_CEILING: f64 = 952_380.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingMode {
    #[default]
    Wishlist,
    Shop,
}

/// Every number shown on a product page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub base_tax: f64,
    pub paypal_tax: f64,
    pub total: f64,
    /// Fees plus rounding: `total - subtotal`.
    pub taxes: f64,
}

impl Product {
    /// Shipping is included unless it is optional.
    pub fn includes_shipping_by_default(&self) -> bool {
        !self.shipping_optional
    }

    /// The sale price, or the regular price when there is no sale.
    pub fn effective_sale_price(&self) -> f64 {
        if self.sale_price != 0.0 {
            self.sale_price
        } else {
            self.price
        }
    }

    pub fn is_on_sale(&self) -> bool {
        self.effective_sale_price() < self.price
    }

    /// Price plus shipping. Optional shipping only counts when opted in.
    pub fn subtotal(&self, mode: PricingMode, include_shipping: bool) -> f64 {
        let base = match mode {
            PricingMode::Wishlist => self.price,
            PricingMode::Shop => self.effective_sale_price(),
        };
        let with_shipping = !self.shipping_optional || include_shipping;
        base + if with_shipping { self.shipping } else { 0.0 }
    }

    pub fn breakdown(&self, mode: PricingMode, include_shipping: bool) -> PriceBreakdown {
        let subtotal = self.subtotal(mode, include_shipping);
        match mode {
            PricingMode::Shop => PriceBreakdown {
                subtotal,
                total: subtotal,
                ..PriceBreakdown::default()
            },
            PricingMode::Wishlist => {
                let base_tax = round_cents(subtotal * PLATFORM_FEE_RATE);
                let paypal_tax = if self.paypal_tax {
                    round_cents(subtotal * PAYPAL_FEE_RATE + PAYPAL_FEE_FIXED)
                } else {
                    0.0
                };
                let total = round_up_to_even(subtotal + base_tax + paypal_tax);
                PriceBreakdown {
                    subtotal,
                    base_tax,
                    paypal_tax,
                    total,
                    taxes: round_cents(total - subtotal),
                }
            }
        }
    }

    /// Whether a donation button makes sense for this price.
    pub fn accepts_donations(&self) -> bool {
        self.price > 0.0 && self.price < DONATION_CEILING && !self.no_donate_button
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round_up_to_even(v: f64) -> f64 {
    if v % 2.0 == 0.0 {
        v
    } else {
        (v / 2.0).ceil() * 2.0
    }
}
