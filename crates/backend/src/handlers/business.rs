use axum::Json;
use contracts::domain::business::{BusinessInfo, BusinessStats, ContactDetails, Feature};
use contracts::envelope::Envelope;

use crate::domain::business;

/// GET /api/business
pub async fn info() -> Json<Envelope<BusinessInfo>> {
    Json(Envelope::success(business::service::info()))
}

/// GET /api/business/contact
pub async fn contact() -> Json<Envelope<ContactDetails>> {
    Json(Envelope::success(business::service::contact()))
}

/// GET /api/business/stats
pub async fn stats() -> Json<Envelope<BusinessStats>> {
    Json(Envelope::success(business::service::stats()))
}

/// GET /api/business/features
pub async fn features() -> Json<Envelope<Vec<Feature>>> {
    Json(Envelope::success(business::service::features()))
}
