//! HTTP request handlers for the sales VAT API.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PriceBreakdown, apply_vat, resolve};
use crate::error::EngineResult;
use crate::models::{SaleRequest, SaleResponse};

use super::request::SalePriceRequest;
use super::response::{ApiError, ApiErrorResponse};

/// Path of the pricing endpoint.
pub const PRICE_PATH: &str = "/api/sales/price";

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route(PRICE_PATH, post(price_handler))
}

/// Validates and resolves a request, returning the full price breakdown.
pub fn quote_sale(request: SalePriceRequest) -> EngineResult<(SaleRequest, PriceBreakdown)> {
    let sale = SaleRequest::try_from(request)?;
    let strategy = resolve(sale.country())?;
    let price = apply_vat(&strategy, sale.amount());
    Ok((sale, price))
}

/// Validates, resolves and prices a single request.
///
/// This is the whole pipeline behind the endpoint, without any HTTP concerns.
///
/// # Examples
///
/// ```
/// use sales_vat::api::{SalePriceRequest, price_sale};
/// use serde_json::Number;
///
/// let response = price_sale(SalePriceRequest {
///     country: Some("BR".to_string()),
///     amount: Some(Number::from(100)),
/// })
/// .unwrap();
/// assert_eq!(response.final_amount.to_string(), "112.00");
/// ```
pub fn price_sale(request: SalePriceRequest) -> EngineResult<SaleResponse> {
    let (sale, price) = quote_sale(request)?;
    Ok(SaleResponse::new(&sale, &price))
}

/// Handler for POST /api/sales/price.
async fn price_handler(payload: Result<Json<SalePriceRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    match quote_sale(request) {
        Ok((sale, price)) => {
            info!(
                correlation_id = %correlation_id,
                country = %sale.country(),
                base_amount = %sale.amount(),
                vat_amount = %price.vat_amount,
                final_amount = %price.final_amount,
                "Priced sale"
            );
            (StatusCode::OK, Json(SaleResponse::new(&sale, &price))).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Pricing request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => ApiError::malformed_json(err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
