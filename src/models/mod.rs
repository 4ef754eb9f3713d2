//! Core data models for the sales VAT service.

mod sale;

pub use sale::{SaleRequest, SaleResponse};
