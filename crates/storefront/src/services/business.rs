use contracts::domain::business::{BusinessInfo, BusinessStats, ContactDetails, Feature};
use contracts::envelope::Envelope;

use crate::accessor::ApiClient;
use crate::fixtures::business;

/// Get the complete business profile
pub async fn get_business_info(client: &ApiClient) -> Envelope<BusinessInfo> {
    client
        .fetch_data("/business", || Envelope::success(business::info()))
        .await
}

/// Get contact information only
pub async fn get_contact_info(client: &ApiClient) -> Envelope<ContactDetails> {
    client
        .fetch_data("/business/contact", || {
            let info = business::info();
            Envelope::success(ContactDetails {
                contact: info.contact,
                timings: info.timings,
                social_media: info.social_media,
            })
        })
        .await
}

/// Get business stats
pub async fn get_business_stats(client: &ApiClient) -> Envelope<BusinessStats> {
    client
        .fetch_data("/business/stats", || {
            Envelope::success(business::info().stats)
        })
        .await
}

/// Get business features/highlights
pub async fn get_business_features(client: &ApiClient) -> Envelope<Vec<Feature>> {
    client
        .fetch_data("/business/features", || {
            Envelope::success(business::info().features)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn contact_slice_matches_full_profile() {
        let client = ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        });
        let full = get_business_info(&client).await.data.unwrap();
        let slice = get_contact_info(&client).await.data.unwrap();
        assert_eq!(slice.contact, full.contact);
        assert_eq!(slice.timings, full.timings);
        assert_eq!(slice.social_media, full.social_media);
    }
}
