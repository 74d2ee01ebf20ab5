use contracts::domain::category::Category;
use contracts::envelope::Envelope;

use crate::accessor::ApiClient;
use crate::fixtures::categories;

/// Get all categories
pub async fn get_categories(client: &ApiClient) -> Envelope<Vec<Category>> {
    client
        .fetch_data("/categories", || Envelope::success(categories::all()))
        .await
}

/// Get category by id
pub async fn get_category_by_id(client: &ApiClient, id: &str) -> Envelope<Category> {
    let endpoint = format!("/categories/{}", id);
    client
        .fetch_data(&endpoint, || match categories::by_id(id) {
            Some(category) => Envelope::success(category),
            None => Envelope::not_found("Category not found"),
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
    async fn fixture_set_has_four_categories() {
        let env = get_categories(&client()).await;
        assert_eq!(env.data.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn missing_category_is_success_with_null_data() {
        let env = get_category_by_id(&client(), "cat-999").await;
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "Category not found");
    }
}
