use contracts::domain::business::{
    BusinessInfo, BusinessStats, ContactInfo, Feature, SocialMedia, Timings,
};
use once_cell::sync::Lazy;

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub static BUSINESS: Lazy<BusinessInfo> = Lazy::new(|| BusinessInfo {
    name: "Sekar Industries".to_string(),
    tagline: "Quality Products, Trusted Service Since 1995".to_string(),
    established: 1995,
    about: "Sekar Industries has been a trusted name in retail and wholesale trade for over 25 years. \
We specialize in providing high-quality industrial supplies, hardware, and electrical components \
to businesses and individuals across the region. Our commitment to quality, fair pricing, and \
exceptional customer service has made us the preferred choice for thousands of satisfied customers."
        .to_string(),
    mission: "To provide reliable, quality products with honest service and fair prices.".to_string(),
    vision: "To be the most trusted industrial supply partner in the region.".to_string(),
    owner: "Mr. Sekar Kumar".to_string(),
    contact: ContactInfo {
        address: "123 Industrial Avenue, Commerce District, Chennai - 600001".to_string(),
        phone: "+91 98765 43210".to_string(),
        alternate_phone: "+91 44 2345 6789".to_string(),
        email: "info@sekarindustries.com".to_string(),
        website: "www.sekarindustries.com".to_string(),
    },
    timings: Timings {
        weekdays: "9:00 AM - 8:00 PM".to_string(),
        saturday: "9:00 AM - 6:00 PM".to_string(),
        sunday: "10:00 AM - 2:00 PM".to_string(),
    },
    social_media: SocialMedia {
        facebook: "https://facebook.com/sekarindustries".to_string(),
        instagram: "https://instagram.com/sekarindustries".to_string(),
        whatsapp: "+919876543210".to_string(),
    },
    stats: BusinessStats {
        years_in_business: 29,
        products_available: 500,
        happy_customers: 10_000,
        categories: 8,
    },
    features: vec![
        feature(
            "Trophy",
            "Quality Assured",
            "Every product is quality checked before delivery",
        ),
        feature("Sales", "Best Prices", "Competitive wholesale and retail pricing"),
        feature("Truck", "Fast Delivery", "Same-day delivery within city limits"),
        feature("Users", "Trusted Partner", "25+ years of reliable service"),
    ],
});

pub fn info() -> BusinessInfo {
    BUSINESS.clone()
}
