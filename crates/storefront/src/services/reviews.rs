use chrono::Utc;
use contracts::domain::review::{NewReview, Review, ReviewSummary};
use contracts::envelope::{Envelope, ErrorCode};
use reqwest::Method;
use uuid::Uuid;

use crate::accessor::ApiClient;
use crate::fixtures::reviews;

/// Get all reviews
pub async fn get_reviews(client: &ApiClient) -> Envelope<Vec<Review>> {
    client
        .fetch_data("/reviews", || Envelope::success(reviews::all()))
        .await
}

/// Get the aggregate rating summary
pub async fn get_review_summary(client: &ApiClient) -> Envelope<ReviewSummary> {
    client
        .fetch_data("/reviews/summary", || {
            Envelope::success(ReviewSummary::from_reviews(&reviews::all()))
        })
        .await
}

/// Submit a new review. The mock branch validates and echoes the created
/// review; submissions are not persisted on this side.
pub async fn submit_review(client: &ApiClient, new_review: &NewReview) -> Envelope<Review> {
    client
        .post_data("/reviews", new_review, Method::POST, |body| {
            if let Err(message) = body.validate() {
                return Envelope::error(message, ErrorCode::Validation);
            }
            Envelope::success_with_message(
                Review {
                    id: format!("rev-{}", Uuid::new_v4()),
                    user_name: body.user_name.clone(),
                    rating: body.rating,
                    is_verified: false,
                    date: Utc::now().format("%Y-%m-%d").to_string(),
                    review_text: body.review_text.clone(),
                    images: body.images.clone(),
                    helpful_count: 0,
                },
                "Review submitted",
            )
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        })
    }

    #[tokio::test]
    async fn summary_totals_match_fixture_count() {
        let client = client();
        let reviews = get_reviews(&client).await.data.unwrap();
        let summary = get_review_summary(&client).await.data.unwrap();
        assert_eq!(summary.total_reviews as usize, reviews.len());
    }

    #[tokio::test]
    async fn invalid_submission_is_a_validation_error_envelope() {
        let env = submit_review(
            &client(),
            &NewReview {
                user_name: "A".into(),
                rating: 5,
                review_text: "too short".into(),
                images: vec![],
            },
        )
        .await;
        assert!(!env.success);
        assert_eq!(env.error.map(|e| e.code), Some(ErrorCode::Validation));
    }

    #[tokio::test]
    async fn valid_submission_echoes_the_review() {
        let env = submit_review(
            &client(),
            &NewReview {
                user_name: "Kavitha R".into(),
                rating: 4,
                review_text: "Sturdy chair, comfortable for long office hours.".into(),
                images: vec![],
            },
        )
        .await;
        let review = env.data.unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.helpful_count, 0);
        assert!(!review.is_verified);
    }
}
