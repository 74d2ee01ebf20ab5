use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub alternate_phone: String,
    pub email: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStats {
    pub years_in_business: u32,
    pub products_available: u32,
    pub happy_customers: u32,
    pub categories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Shop profile served to the public site (about page, contact page, footer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    pub established: u32,
    pub about: String,
    pub mission: String,
    pub vision: String,
    pub owner: String,
    pub contact: ContactInfo,
    pub timings: Timings,
    pub social_media: SocialMedia,
    pub stats: BusinessStats,
    pub features: Vec<Feature>,
}

/// Contact-page slice of the business profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub contact: ContactInfo,
    pub timings: Timings,
    pub social_media: SocialMedia,
}
