//! Sale request and response models.
//!
//! A [`SaleRequest`] can only be built through validation, so the rest of the
//! pipeline can rely on a non-blank country and a positive amount.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::calculation::{Country, PriceBreakdown};
use crate::error::{EngineError, EngineResult, FieldViolation};

/// A validated request to price a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRequest {
    country: String,
    amount: Decimal,
}

impl SaleRequest {
    /// Validates raw input and builds a request.
    ///
    /// Every violated constraint is reported, not just the first one found.
    /// The amount arrives as a JSON number and must be representable as a
    /// positive `Decimal` that still fits once VAT is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_vat::models::SaleRequest;
    /// use serde_json::Number;
    ///
    /// let request = SaleRequest::new(Some("BR".to_string()), Some(Number::from(100))).unwrap();
    /// assert_eq!(request.country(), "BR");
    ///
    /// assert!(SaleRequest::new(Some(" ".to_string()), Some(Number::from(0))).is_err());
    /// ```
    pub fn new(country: Option<String>, amount: Option<Number>) -> EngineResult<Self> {
        let mut violations = Vec::new();

        let country = match country {
            Some(c) if !c.trim().is_empty() => Some(c),
            Some(_) => {
                violations.push(FieldViolation::new("country", "must not be blank"));
                None
            }
            None => {
                violations.push(FieldViolation::new("country", "is required"));
                None
            }
        };

        let amount = match amount.as_ref().map(decimal_amount) {
            Some(Ok(a)) => Some(a),
            Some(Err(message)) => {
                violations.push(FieldViolation::new("amount", message));
                None
            }
            None => {
                violations.push(FieldViolation::new("amount", "is required"));
                None
            }
        };

        match (country, amount) {
            (Some(country), Some(amount)) => Ok(Self { country, amount }),
            _ => Err(EngineError::Validation { violations }),
        }
    }

    /// The country code as submitted.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The base amount before VAT.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

const NOT_POSITIVE: &str = "must be greater than zero";
const TOO_LARGE: &str = "is too large to price";
const BELOW_SMALLEST: &str = "is below the smallest supported amount";

/// Converts a JSON amount to a `Decimal` that can be priced.
fn decimal_amount(number: &Number) -> Result<Decimal, &'static str> {
    let amount = if let Some(units) = number.as_i64() {
        Decimal::from(units)
    } else if let Some(units) = number.as_u64() {
        Decimal::from(units)
    } else {
        let value = number.as_f64().ok_or(TOO_LARGE)?;
        if value <= 0.0 {
            return Err(NOT_POSITIVE);
        }
        // `f64` display never uses exponent notation. Digits past the 28th
        // decimal place are rounded away.
        match Decimal::from_str(&value.to_string()) {
            Ok(amount) if amount.is_zero() => return Err(BELOW_SMALLEST),
            Ok(amount) => amount,
            Err(_) if value < 1.0 => return Err(BELOW_SMALLEST),
            Err(_) => return Err(TOO_LARGE),
        }
    };

    if amount <= Decimal::ZERO {
        return Err(NOT_POSITIVE);
    }
    if !fits_every_multiplier(amount) {
        return Err(TOO_LARGE);
    }
    Ok(amount)
}

fn fits_every_multiplier(amount: Decimal) -> bool {
    Country::ALL
        .iter()
        .all(|c| amount.checked_mul(c.multiplier()).is_some())
}

/// The priced sale returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    /// The country code as submitted.
    pub country: String,
    /// The amount before VAT.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_amount: Decimal,
    /// The VAT rate, rounded to 2 places.
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    /// The VAT-inclusive amount, rounded to 2 places.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
}

impl SaleResponse {
    /// Shapes a price breakdown for presentation.
    pub fn new(request: &SaleRequest, price: &PriceBreakdown) -> Self {
        Self {
            country: request.country().to_string(),
            base_amount: request.amount(),
            vat_rate: price.vat_rate,
            final_amount: price.final_amount,
        }
    }
}
