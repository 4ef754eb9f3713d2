//! VAT application and presentation rounding.
//!
//! All arithmetic runs at full `Decimal` precision. Rounding to two decimal
//! places happens once, on the values handed back for presentation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::rate_resolver::{Country, VatStrategy};

/// Number of decimal places used for presented monetary values and rates.
pub const PRESENTATION_DECIMAL_PLACES: u32 = 2;

/// The result of pricing a base amount for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// The country whose VAT was applied.
    pub country: Country,
    /// The amount before VAT, unrounded.
    pub base_amount: Decimal,
    /// The VAT added on top of the base amount, unrounded.
    pub vat_amount: Decimal,
    /// The effective VAT rate, rounded half-up to 2 places.
    pub vat_rate: Decimal,
    /// The VAT-inclusive amount, rounded half-up to 2 places.
    pub final_amount: Decimal,
}

/// Rounds a value to 2 decimal places, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use sales_vat::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_money(Decimal::from_str("59.5").unwrap()).to_string(), "59.50");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        PRESENTATION_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(PRESENTATION_DECIMAL_PLACES);
    rounded
}

/// Applies a country's VAT strategy to a base amount.
///
/// `final_amount` is `base_amount * multiplier`. `vat_rate` is
/// `(final_amount - base_amount) / base_amount`, which reduces to
/// `multiplier - 1`; it is taken in that reduced form so tiny base amounts
/// do not lose the rate to precision limits. The two presented values are
/// rounded independently of each other.
///
/// The caller guarantees `base_amount > 0` and that the product fits in a
/// `Decimal`; [`crate::models::SaleRequest`] enforces both.
///
/// # Examples
///
/// ```
/// use sales_vat::calculation::{apply_vat, resolve};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let strategy = resolve("CL").unwrap();
/// let price = apply_vat(&strategy, Decimal::from_str("50.0").unwrap());
/// assert_eq!(price.final_amount, Decimal::from_str("59.50").unwrap());
/// assert_eq!(price.vat_rate, Decimal::from_str("0.19").unwrap());
/// ```
pub fn apply_vat(strategy: &VatStrategy, base_amount: Decimal) -> PriceBreakdown {
    let final_amount = strategy.price_with_vat(base_amount);
    let vat_amount = final_amount - base_amount;
    let vat_rate = strategy.multiplier - Decimal::ONE;

    PriceBreakdown {
        country: strategy.country,
        base_amount,
        vat_amount,
        vat_rate: round_money(vat_rate),
        final_amount: round_money(final_amount),
    }
}
