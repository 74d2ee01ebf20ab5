use axum::extract::Path;
use axum::Json;
use contracts::domain::review::{NewReview, Review, ReviewSummary};
use contracts::envelope::{Envelope, ErrorCode};

use super::envelope_from;
use crate::domain::reviews;

/// GET /api/reviews
pub async fn list() -> Json<Envelope<Vec<Review>>> {
    Json(envelope_from(reviews::service::list_all()))
}

/// GET /api/reviews/summary
pub async fn summary() -> Json<Envelope<ReviewSummary>> {
    Json(envelope_from(reviews::service::summary()))
}

/// POST /api/reviews
pub async fn create(Json(new_review): Json<NewReview>) -> Json<Envelope<Review>> {
    // Validation problems come back as envelopes so the form can show the
    // message; they are not transport failures.
    if let Err(message) = new_review.validate() {
        return Json(Envelope::error(message, ErrorCode::Validation));
    }
    let envelope = match reviews::service::create(new_review) {
        Ok(review) => Envelope::success_with_message(review, "Review submitted"),
        Err(e) => {
            tracing::error!("Failed to store review: {}", e);
            Envelope::error(e.to_string(), ErrorCode::Error)
        }
    };
    Json(envelope)
}

/// POST /api/reviews/:id/helpful
pub async fn mark_helpful(Path(id): Path<String>) -> Json<Envelope<Review>> {
    let envelope = match reviews::service::mark_helpful(&id) {
        Ok(Some(review)) => Envelope::success(review),
        Ok(None) => Envelope::not_found("Review not found"),
        Err(e) => {
            tracing::error!("Failed to mark review {} helpful: {}", id, e);
            Envelope::error(e.to_string(), ErrorCode::Error)
        }
    };
    Json(envelope)
}
