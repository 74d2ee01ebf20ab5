use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::product::ProductWithAvailability;
use contracts::envelope::Envelope;
use serde::Deserialize;

use super::envelope_from;
use crate::domain::products;

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    #[serde(rename = "lowStock")]
    pub low_stock: Option<bool>,
    #[serde(rename = "outOfStock")]
    pub out_of_stock: Option<bool>,
}

/// GET /api/products
pub async fn list(
    Query(query): Query<ListProductsQuery>,
) -> Json<Envelope<Vec<ProductWithAvailability>>> {
    let result = if query.featured.unwrap_or(false) {
        products::service::list_featured()
    } else if query.low_stock.unwrap_or(false) {
        products::service::list_low_stock()
    } else if query.out_of_stock.unwrap_or(false) {
        products::service::list_out_of_stock()
    } else if let Some(category) = query.category.as_deref() {
        products::service::list_by_category(category)
    } else {
        products::service::list_all()
    };
    Json(envelope_from(result))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/products/search
pub async fn search(
    Query(query): Query<SearchQuery>,
) -> Json<Envelope<Vec<ProductWithAvailability>>> {
    let q = query.q.unwrap_or_default();
    Json(envelope_from(products::service::search(&q)))
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<Envelope<ProductWithAvailability>> {
    let envelope = match products::service::get_by_id(&id) {
        Ok(Some(product)) => Envelope::success(product),
        Ok(None) => Envelope::not_found("Product not found"),
        Err(e) => {
            tracing::error!("Failed to load product {}: {}", id, e);
            Envelope::error(e.to_string(), contracts::envelope::ErrorCode::Error)
        }
    };
    Json(envelope)
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: u32,
}

/// PUT /api/products/:id/stock
pub async fn update_stock(
    Path(id): Path<String>,
    Json(request): Json<UpdateStockRequest>,
) -> Json<Envelope<ProductWithAvailability>> {
    let envelope = match products::service::set_stock(&id, request.stock) {
        Ok(Some(product)) => Envelope::success_with_message(product, "Stock updated"),
        Ok(None) => Envelope::not_found("Product not found"),
        Err(e) => {
            tracing::error!("Failed to update stock for {}: {}", id, e);
            Envelope::error(e.to_string(), contracts::envelope::ErrorCode::Error)
        }
    };
    Json(envelope)
}
