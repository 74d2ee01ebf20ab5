use contracts::domain::review::Review;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    user_name: &str,
    rating: u8,
    date: &str,
    review_text: &str,
    images: &[&str],
    helpful_count: u32,
) -> Review {
    Review {
        id: id.to_string(),
        user_name: user_name.to_string(),
        rating,
        is_verified: true,
        date: date.to_string(),
        review_text: review_text.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
        helpful_count,
    }
}

pub static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        review(
            "rev-001",
            "Rajesh Kumar",
            5,
            "2024-01-15",
            "Excellent quality industrial desk! We purchased 10 units for our factory office. \
The steel construction is very robust and can handle heavy loads. Assembly was straightforward \
with clear instructions. After 3 months of daily use, there are no signs of wear. Highly \
recommended for industrial environments.",
            &[
                "https://images.unsplash.com/photo-1518455027359-f3f8164ba6bd?w=400",
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=400",
            ],
            24,
        ),
        review(
            "rev-002",
            "Priya Sharma",
            4,
            "2024-01-10",
            "Good value for money. The desk is sturdy and spacious. Installation took about \
45 minutes with 2 people. The powder coating finish looks professional. Only minor issue is \
that some bolt holes required slight adjustment, but overall very satisfied with the purchase.",
            &["https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=400"],
            18,
        ),
        review(
            "rev-003",
            "Mohammed Ali",
            5,
            "2024-01-05",
            "Perfect for our workshop! This desk handles all our heavy equipment and tools \
without any issues. The surface is easy to clean and resistant to oil stains. We have been \
using it for 2 months now and it still looks brand new. Great investment!",
            &[
                "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=400",
                "https://images.unsplash.com/photo-1497215728101-856f4ea42174?w=400",
                "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=400",
            ],
            31,
        ),
        review(
            "rev-004",
            "Anita Desai",
            5,
            "2023-12-28",
            "Outstanding product! We ordered 5 desks for our manufacturing unit. The quality \
exceeded our expectations. Very heavy-duty construction that can withstand industrial use. \
Delivery was on time and the team was professional.",
            &[],
            15,
        ),
    ]
});

pub fn all() -> Vec<Review> {
    REVIEWS.clone()
}
