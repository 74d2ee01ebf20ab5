//! Statically bundled fixture data standing in for the real backend.
//!
//! Lookups here are pure; derived fields (availability, summaries) are
//! computed on every read and never stored.

pub mod business;
pub mod categories;
pub mod forecast;
pub mod products;
pub mod reviews;
pub mod sales;
