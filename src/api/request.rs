//! Request types for the sales VAT API.
//!
//! This module defines the JSON request body for `POST /api/sales/price`.
//! Both fields are optional on the wire so that missing values surface as
//! validation errors rather than as body decoding failures. The amount stays a
//! raw JSON number until validation, so out-of-range values are reported per
//! field instead of as malformed JSON.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::EngineError;
use crate::models::SaleRequest;

/// Request body for the `/api/sales/price` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalePriceRequest {
    /// The country code, e.g. `"BR"`.
    #[serde(default)]
    pub country: Option<String>,
    /// The base amount before VAT.
    #[serde(default)]
    pub amount: Option<Number>,
}

impl TryFrom<SalePriceRequest> for SaleRequest {
    type Error = EngineError;

    fn try_from(req: SalePriceRequest) -> Result<Self, Self::Error> {
        SaleRequest::new(req.country, req.amount)
    }
}
