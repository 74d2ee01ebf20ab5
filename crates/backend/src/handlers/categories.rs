use axum::extract::Path;
use axum::Json;
use contracts::domain::category::Category;
use contracts::envelope::Envelope;

use crate::domain::categories;

/// GET /api/categories
pub async fn list() -> Json<Envelope<Vec<Category>>> {
    Json(Envelope::success(categories::service::list_all()))
}

/// GET /api/categories/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<Envelope<Category>> {
    let envelope = match categories::service::get_by_id(&id) {
        Some(category) => Envelope::success(category),
        None => Envelope::not_found("Category not found"),
    };
    Json(envelope)
}
