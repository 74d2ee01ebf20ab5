use chrono::{Duration, Utc};
use contracts::domain::sale::Sale;
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::products::PRODUCTS;

fn sale(product_id: &str, quantity: u32, days_ago: i64) -> Sale {
    let (name, price) = PRODUCTS
        .iter()
        .find(|p| p.id == product_id)
        .map(|p| (p.name.clone(), p.price))
        .unwrap_or_else(|| (product_id.to_string(), 0));
    Sale {
        id: Uuid::new_v4(),
        product_id: product_id.to_string(),
        product_name: name,
        quantity,
        amount: price * quantity as i64,
        sold_at: Utc::now() - Duration::days(days_ago),
    }
}

/// Thirty-day sales sample used by the admin product-health view and the
/// sales-entry page's "recent sales" list.
pub static SALES_LAST_30_DAYS: Lazy<Vec<Sale>> = Lazy::new(|| {
    vec![
        sale("prod-001", 3, 1),
        sale("prod-005", 4, 1),
        sale("prod-001", 2, 3),
        sale("prod-007", 5, 4),
        sale("prod-011", 1, 5),
        sale("prod-005", 3, 6),
        sale("prod-003", 2, 8),
        sale("prod-008", 2, 9),
        sale("prod-013", 1, 11),
        sale("prod-005", 2, 12),
        sale("prod-007", 3, 14),
        sale("prod-001", 4, 16),
        sale("prod-012", 1, 18),
        sale("prod-016", 1, 20),
        sale("prod-008", 3, 22),
        sale("prod-023", 2, 24),
        sale("prod-005", 1, 26),
        sale("prod-007", 2, 28),
    ]
});

pub fn last_30_days() -> Vec<Sale> {
    SALES_LAST_30_DAYS.clone()
}

/// Most recent first.
pub fn recent(limit: usize) -> Vec<Sale> {
    let mut sales = last_30_days();
    sales.sort_by(|a, b| b.sold_at.cmp(&a.sold_at));
    sales.truncate(limit);
    sales
}
