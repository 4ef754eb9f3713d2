//! Sales price service with fixed per-country VAT.
//!
//! This crate resolves a country code to its VAT multiplier, applies it to a
//! base amount and serves the result over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
