//! Country to VAT strategy resolution.
//!
//! The supported countries form a closed set, so each one is a variant of
//! [`Country`] and its multiplier comes from a fixed table rather than from
//! configuration.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// A country with a known VAT multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Brazil, 12% VAT.
    Br,
    /// Chile, 19% VAT.
    Cl,
    /// Mexico, 16% VAT.
    Mx,
}

impl Country {
    /// Every supported country, in code order.
    pub const ALL: [Country; 3] = [Country::Br, Country::Cl, Country::Mx];

    /// Returns the two-letter uppercase country code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Br => "BR",
            Country::Cl => "CL",
            Country::Mx => "MX",
        }
    }

    /// Returns the human-readable country name.
    pub fn name(self) -> &'static str {
        match self {
            Country::Br => "Brazil",
            Country::Cl => "Chile",
            Country::Mx => "Mexico",
        }
    }

    /// Returns the VAT-inclusive multiplier for this country.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_vat::calculation::Country;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Country::Cl.multiplier(), Decimal::from_str("1.19").unwrap());
    /// ```
    pub fn multiplier(self) -> Decimal {
        match self {
            Country::Br => Decimal::new(112, 2),
            Country::Cl => Decimal::new(119, 2),
            Country::Mx => Decimal::new(116, 2),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" => Ok(Country::Br),
            "CL" => Ok(Country::Cl),
            "MX" => Ok(Country::Mx),
            _ => Err(EngineError::UnsupportedCountry {
                country: s.to_string(),
            }),
        }
    }
}

/// The pricing rule for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatStrategy {
    /// The country this strategy prices for.
    pub country: Country,
    /// The factor that turns a base amount into a VAT-inclusive amount.
    pub multiplier: Decimal,
}

impl VatStrategy {
    /// Builds the strategy for a supported country.
    pub fn for_country(country: Country) -> Self {
        Self {
            country,
            multiplier: country.multiplier(),
        }
    }

    /// Returns `base_amount` with VAT added, at full precision.
    pub fn price_with_vat(&self, base_amount: Decimal) -> Decimal {
        base_amount * self.multiplier
    }
}

/// Resolves a country code to its VAT strategy.
///
/// Matching ignores case only, so padded codes such as `" br "` are rejected.
/// Unknown or empty codes fail with [`EngineError::UnsupportedCountry`]
/// carrying the code exactly as it was passed in.
///
/// # Examples
///
/// ```
/// use sales_vat::calculation::{resolve, Country};
///
/// let strategy = resolve("br").unwrap();
/// assert_eq!(strategy.country, Country::Br);
///
/// let err = resolve("US").unwrap_err();
/// assert_eq!(err.to_string(), "Country not supported: US");
/// ```
pub fn resolve(country_code: &str) -> EngineResult<VatStrategy> {
    country_code.parse::<Country>().map(VatStrategy::for_country)
}

/// Returns the base amount unchanged.
///
/// Every pricing rule historically exposed this pass-through alongside its
/// VAT calculation. It applies no tax and is not used by the HTTP pipeline.
pub fn default_price(base_amount: Decimal) -> Decimal {
    base_amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_resolve_br_returns_brazil_strategy() {
        let strategy = resolve("BR").unwrap();
        assert_eq!(strategy.country, Country::Br);
        assert_eq!(strategy.multiplier, dec("1.12"));
    }

    #[test]
    fn test_resolve_cl_returns_chile_strategy() {
        let strategy = resolve("CL").unwrap();
        assert_eq!(strategy.country, Country::Cl);
        assert_eq!(strategy.multiplier, dec("1.19"));
    }

    #[test]
    fn test_resolve_mx_returns_mexico_strategy() {
        let strategy = resolve("MX").unwrap();
        assert_eq!(strategy.country, Country::Mx);
        assert_eq!(strategy.multiplier, dec("1.16"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        for code in ["br", "Br", "bR", "BR"] {
            assert_eq!(resolve(code).unwrap().country, Country::Br, "code {code}");
        }
    }

    #[test]
    fn test_resolve_rejects_surrounding_whitespace() {
        for code in ["  mx ", " br ", "CL\n"] {
            match resolve(code) {
                Err(EngineError::UnsupportedCountry { country }) => assert_eq!(country, code),
                other => panic!("expected UnsupportedCountry for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_unsupported_codes_fail() {
        for code in ["US", "AR", "INVALID"] {
            let err = resolve(code).unwrap_err();
            match err {
                EngineError::UnsupportedCountry { country } => assert_eq!(country, code),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unsupported_error_keeps_original_input() {
        let err = resolve(" us ").unwrap_err();
        assert_eq!(err.to_string(), "Country not supported:  us ");
    }

    #[test]
    fn test_resolve_empty_code_fails() {
        assert!(matches!(
            resolve(""),
            Err(EngineError::UnsupportedCountry { .. })
        ));
        assert!(matches!(
            resolve("   "),
            Err(EngineError::UnsupportedCountry { .. })
        ));
    }

    #[test]
    fn test_price_with_vat_uses_multiplier() {
        let strategy = VatStrategy::for_country(Country::Br);
        assert_eq!(strategy.price_with_vat(dec("100")), dec("112.00"));
    }

    #[test]
    fn test_default_price_returns_base_amount() {
        assert_eq!(default_price(dec("100.0")), dec("100.0"));
        for country in Country::ALL {
            let strategy = VatStrategy::for_country(country);
            assert_eq!(default_price(dec("50.0")), dec("50.0"));
            assert_ne!(strategy.price_with_vat(dec("50.0")), dec("50.0"));
        }
    }

    #[test]
    fn test_country_display_and_name() {
        assert_eq!(Country::Cl.to_string(), "CL");
        assert_eq!(Country::Mx.name(), "Mexico");
    }
}
