//! Per-domain service modules.
//!
//! Each function is one accessor call: a synthetic endpoint path plus a
//! fixture closure. UI code depends on these signatures only and never
//! learns which data source answered.

pub mod business;
pub mod categories;
pub mod forecast;
pub mod product_health;
pub mod products;
pub mod reviews;
pub mod sales;
