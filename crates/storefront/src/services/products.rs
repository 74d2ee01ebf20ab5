use contracts::domain::product::ProductWithAvailability;
use contracts::envelope::Envelope;

use crate::accessor::ApiClient;
use crate::fixtures::products;

/// Get all products
pub async fn get_all_products(client: &ApiClient) -> Envelope<Vec<ProductWithAvailability>> {
    client
        .fetch_data("/products", || Envelope::success(products::all()))
        .await
}

/// Get products by category name, `"All"` for everything
pub async fn get_products_by_category(
    client: &ApiClient,
    category: &str,
) -> Envelope<Vec<ProductWithAvailability>> {
    let endpoint = format!("/products?category={}", urlencoding::encode(category));
    client
        .fetch_data(&endpoint, || {
            Envelope::success(products::by_category(category))
        })
        .await
}

/// Get featured products for the homepage
pub async fn get_featured_products(client: &ApiClient) -> Envelope<Vec<ProductWithAvailability>> {
    client
        .fetch_data("/products?featured=true", || {
            Envelope::success(products::featured())
        })
        .await
}

/// Get low stock products (for admin alerts)
pub async fn get_low_stock_products(client: &ApiClient) -> Envelope<Vec<ProductWithAvailability>> {
    client
        .fetch_data("/products?lowStock=true", || {
            Envelope::success(products::low_stock())
        })
        .await
}

/// Get out of stock products
pub async fn get_out_of_stock_products(
    client: &ApiClient,
) -> Envelope<Vec<ProductWithAvailability>> {
    client
        .fetch_data("/products?outOfStock=true", || {
            Envelope::success(products::out_of_stock())
        })
        .await
}

/// Get product by id. A miss is a success envelope with no data and a
/// "Product not found" message, not an error.
pub async fn get_product_by_id(
    client: &ApiClient,
    id: &str,
) -> Envelope<ProductWithAvailability> {
    let endpoint = format!("/products/{}", id);
    client
        .fetch_data(&endpoint, || match products::by_id(id) {
            Some(product) => Envelope::success(product),
            None => Envelope::not_found("Product not found"),
        })
        .await
}

/// Search products by name or description
pub async fn search_products(
    client: &ApiClient,
    query: &str,
) -> Envelope<Vec<ProductWithAvailability>> {
    let endpoint = format!("/products/search?q={}", urlencoding::encode(query));
    client
        .fetch_data(&endpoint, || Envelope::success(products::search(query)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use contracts::domain::product::AvailabilityStatus;
    use contracts::envelope::Outcome;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        })
    }

    #[tokio::test]
    async fn known_id_comes_back_with_matching_id() {
        let env = get_product_by_id(&client(), "prod-001").await;
        assert!(env.success);
        let product = env.data.expect("prod-001 is in the fixture set");
        assert_eq!(product.product.id, "prod-001");
    }

    #[tokio::test]
    async fn unknown_id_is_success_with_null_data() {
        let env = get_product_by_id(&client(), "nonexistent").await;
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "Product not found");
        assert_eq!(env.into_outcome(), Outcome::NotFound);
    }

    #[tokio::test]
    async fn category_all_returns_the_full_set() {
        let client = client();
        let all = get_all_products(&client).await.data.unwrap();
        let via_all = get_products_by_category(&client, "All").await.data.unwrap();
        assert_eq!(all.len(), via_all.len());
    }

    #[tokio::test]
    async fn category_match_is_case_insensitive() {
        let env = get_products_by_category(&client(), "steel furniture").await;
        let items = env.data.unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|p| p.product.category == "Steel Furniture"));
    }

    #[tokio::test]
    async fn low_stock_and_out_of_stock_are_disjoint() {
        let client = client();
        let low = get_low_stock_products(&client).await.data.unwrap();
        let out = get_out_of_stock_products(&client).await.data.unwrap();
        for item in &low {
            assert!(
                !out.iter().any(|o| o.product.id == item.product.id),
                "{} is in both lists",
                item.product.id
            );
        }
    }

    #[tokio::test]
    async fn featured_matches_fixture_flags_and_carries_availability() {
        let env = get_featured_products(&client()).await;
        let featured = env.data.unwrap();
        let expected = crate::fixtures::products::PRODUCTS
            .iter()
            .filter(|p| p.is_featured)
            .count();
        assert_eq!(featured.len(), expected);
        for item in &featured {
            assert!(matches!(
                item.availability.status,
                AvailabilityStatus::InStock
                    | AvailabilityStatus::LowStock
                    | AvailabilityStatus::OutOfStock
            ));
        }
    }

    #[tokio::test]
    async fn search_matches_name_and_description() {
        let env = search_products(&client(), "teak").await;
        let items = env.data.unwrap();
        assert!(!items.is_empty());
        for item in &items {
            let haystack = format!(
                "{} {}",
                item.product.name.to_lowercase(),
                item.product.description.to_lowercase()
            );
            assert!(haystack.contains("teak"));
        }
    }
}
