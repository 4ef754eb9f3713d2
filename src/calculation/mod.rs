//! Calculation logic for the sales VAT service.
//!
//! This module resolves a country code to its fixed VAT strategy and applies
//! that strategy to a base amount, rounding the presented results.

mod price_calculator;
mod rate_resolver;

pub use price_calculator::{
    PRESENTATION_DECIMAL_PLACES, PriceBreakdown, apply_vat, round_money,
};
pub use rate_resolver::{Country, VatStrategy, default_price, resolve};
