use axum::extract::Query;
use axum::Json;
use contracts::domain::sale::{DashboardStats, NewSale, Sale};
use contracts::envelope::{Envelope, ErrorCode};
use serde::Deserialize;

use super::envelope_from;
use crate::domain::sales;

/// POST /api/sales
pub async fn record(Json(new_sale): Json<NewSale>) -> Json<Envelope<Sale>> {
    let envelope = match sales::service::record(new_sale) {
        Ok(sale) => Envelope::success_with_message(sale, "Sale recorded"),
        Err(e) if e.to_string() == "Product not found" => Envelope::not_found("Product not found"),
        Err(e) => Envelope::error(e.to_string(), ErrorCode::Validation),
    };
    Json(envelope)
}

#[derive(Debug, Deserialize)]
pub struct RecentSalesQuery {
    pub limit: Option<usize>,
}

/// GET /api/sales/recent
pub async fn recent(Query(query): Query<RecentSalesQuery>) -> Json<Envelope<Vec<Sale>>> {
    let limit = query.limit.unwrap_or(10);
    Json(envelope_from(sales::service::list_recent(limit)))
}

/// GET /api/sales/stats
pub async fn stats() -> Json<Envelope<DashboardStats>> {
    Json(envelope_from(sales::service::dashboard_stats()))
}
