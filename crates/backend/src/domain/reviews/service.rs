use chrono::Utc;
use contracts::domain::review::{NewReview, Review, ReviewSummary};
use uuid::Uuid;

use super::repository;

pub fn list_all() -> anyhow::Result<Vec<Review>> {
    repository::list_all()
}

pub fn summary() -> anyhow::Result<ReviewSummary> {
    Ok(ReviewSummary::from_reviews(&repository::list_all()?))
}

/// Validate and store a submitted review. New reviews start unverified with
/// a zero helpful count.
pub fn create(new_review: NewReview) -> anyhow::Result<Review> {
    new_review
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(Review {
        id: format!("rev-{}", Uuid::new_v4()),
        user_name: new_review.user_name,
        rating: new_review.rating,
        is_verified: false,
        date: Utc::now().format("%Y-%m-%d").to_string(),
        review_text: new_review.review_text,
        images: new_review.images,
        helpful_count: 0,
    })
}

pub fn mark_helpful(id: &str) -> anyhow::Result<Option<Review>> {
    repository::mark_helpful(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_review_is_listed_and_can_be_marked_helpful() {
        let before = list_all().unwrap().len();
        let review = create(NewReview {
            user_name: "Suresh B".into(),
            rating: 5,
            review_text: "The folding bed arrived well packed and is easy to set up.".into(),
            images: vec![],
        })
        .unwrap();
        assert_eq!(list_all().unwrap().len(), before + 1);

        let updated = mark_helpful(&review.id).unwrap().unwrap();
        assert_eq!(updated.helpful_count, 1);
    }

    #[test]
    fn invalid_rating_is_rejected() {
        let result = create(NewReview {
            user_name: "X".into(),
            rating: 6,
            review_text: "Long enough review text to pass the length check.".into(),
            images: vec![],
        });
        assert!(result.is_err());
    }
}
