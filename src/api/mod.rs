//! HTTP API module for the sales VAT service.
//!
//! This module provides the single REST endpoint, `POST /api/sales/price`,
//! that prices a sale including VAT.

mod handlers;
mod request;
mod response;

pub use handlers::{PRICE_PATH, create_router, price_sale, quote_sale};
pub use request::SalePriceRequest;
pub use response::{ApiError, ApiErrorResponse};
