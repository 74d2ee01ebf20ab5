//! Service layer for the storefront and admin panel.
//!
//! Every domain call goes through the source-switchable [`ApiClient`]: in
//! mock mode it serves bundled fixture data after a simulated network delay,
//! otherwise it speaks the envelope contract to the real backend over HTTP.
//! UI code is written once against the service modules and repointed by
//! configuration alone.

pub mod accessor;
pub mod config;
pub mod fixtures;
pub mod services;

pub use accessor::ApiClient;
pub use config::ApiConfig;
