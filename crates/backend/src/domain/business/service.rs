use contracts::domain::business::{BusinessInfo, BusinessStats, ContactDetails, Feature};

pub fn info() -> BusinessInfo {
    storefront::fixtures::business::info()
}

pub fn contact() -> ContactDetails {
    let info = info();
    ContactDetails {
        contact: info.contact,
        timings: info.timings,
        social_media: info.social_media,
    }
}

pub fn stats() -> BusinessStats {
    info().stats
}

pub fn features() -> Vec<Feature> {
    info().features
}
