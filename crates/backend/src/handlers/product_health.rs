use axum::Json;
use contracts::domain::sale::ProductHealth;
use contracts::envelope::Envelope;

use super::envelope_from;
use crate::dashboards::product_health;

/// GET /api/admin/product-health
pub async fn summary() -> Json<Envelope<Vec<ProductHealth>>> {
    Json(envelope_from(product_health::service::summary()))
}
