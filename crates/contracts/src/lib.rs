pub mod domain;
pub mod envelope;
pub mod system;

/// Version stamped into every response envelope's `meta` block.
/// This is the version of the API contract itself, not of a deployment.
pub const API_VERSION: &str = "1.0.0";
