pub mod business;
pub mod categories;
pub mod forecast;
pub mod product_health;
pub mod products;
pub mod reviews;
pub mod sales;

use contracts::envelope::{Envelope, ErrorCode};

/// Fold a service result into the wire envelope. Failures are logged here
/// and leave the process only as envelopes.
pub(crate) fn envelope_from<T>(result: anyhow::Result<T>) -> Envelope<T> {
    match result {
        Ok(data) => Envelope::success(data),
        Err(e) => {
            tracing::error!("request failed: {}", e);
            Envelope::error(e.to_string(), ErrorCode::Error)
        }
    }
}
