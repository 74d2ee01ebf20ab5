use serde::{Deserialize, Serialize};

pub const REVIEW_TEXT_MIN: usize = 20;
pub const REVIEW_TEXT_MAX: usize = 1000;
pub const REVIEW_IMAGES_MAX: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub rating: u8,
    pub is_verified: bool,
    pub date: String,
    pub review_text: String,
    pub images: Vec<String>,
    pub helpful_count: u32,
}

/// Submission payload for a new review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_name: String,
    pub rating: u8,
    pub review_text: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err("Please select a rating".into());
        }
        let len = self.review_text.trim().chars().count();
        if len < REVIEW_TEXT_MIN {
            return Err(format!(
                "Review must be at least {} characters",
                REVIEW_TEXT_MIN
            ));
        }
        if len > REVIEW_TEXT_MAX {
            return Err(format!(
                "Review must be at most {} characters",
                REVIEW_TEXT_MAX
            ));
        }
        if self.images.len() > REVIEW_IMAGES_MAX {
            return Err(format!("Maximum {} images allowed", REVIEW_IMAGES_MAX));
        }
        Ok(())
    }
}

/// Aggregate rating figures for a review set. `distribution[i]` counts
/// reviews with rating `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub total_reviews: u32,
    pub distribution: [u32; 5],
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut distribution = [0u32; 5];
        let mut sum = 0u32;
        for review in reviews {
            let rating = review.rating.clamp(1, 5);
            distribution[(rating - 1) as usize] += 1;
            sum += rating as u32;
        }
        let total = reviews.len() as u32;
        let average = if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        };
        Self {
            average_rating: average,
            total_reviews: total,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: "rev-1".into(),
            user_name: "A".into(),
            rating,
            is_verified: true,
            date: "2024-01-01".into(),
            review_text: String::new(),
            images: vec![],
            helpful_count: 0,
        }
    }

    #[test]
    fn summary_counts_per_star() {
        let reviews = vec![review(5), review(5), review(4), review(1)];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total_reviews, 4);
        assert_eq!(summary.distribution, [1, 0, 0, 1, 2]);
        assert!((summary.average_rating - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn validation_rejects_short_text_and_bad_rating() {
        let mut new = NewReview {
            user_name: "A".into(),
            rating: 0,
            review_text: "long enough text for the minimum bound".into(),
            images: vec![],
        };
        assert!(new.validate().is_err());
        new.rating = 5;
        assert!(new.validate().is_ok());
        new.review_text = "too short".into();
        assert!(new.validate().is_err());
    }
}
