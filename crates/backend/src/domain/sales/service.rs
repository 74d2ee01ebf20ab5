use chrono::Utc;
use contracts::domain::sale::{DashboardStats, NewSale, Sale};
use uuid::Uuid;

use super::repository;
use crate::domain::products;

/// Record an offline shop sale and take the sold quantity out of stock.
/// Selling more than is on hand is refused, so this is the one place stock
/// and sales move together.
pub fn record(new_sale: NewSale) -> anyhow::Result<Sale> {
    new_sale
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let product = products::repository::decrement_stock(&new_sale.product_id, new_sale.quantity)?
        .ok_or_else(|| anyhow::anyhow!("Product not found"))?;

    let amount = new_sale
        .amount
        .unwrap_or(product.price * new_sale.quantity as i64);

    repository::insert(Sale {
        id: Uuid::new_v4(),
        product_id: product.id,
        product_name: product.name,
        quantity: new_sale.quantity,
        amount,
        sold_at: Utc::now(),
    })
}

pub fn list_recent(limit: usize) -> anyhow::Result<Vec<Sale>> {
    repository::list_recent(limit)
}

/// Headline numbers for the admin dashboard: today's revenue and unit count
/// plus the current low-stock alert count.
pub fn dashboard_stats() -> anyhow::Result<DashboardStats> {
    let midnight = Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);
    let today = repository::list_since(midnight)?;

    Ok(DashboardStats {
        today_sales: today.iter().map(|s| s.amount).sum(),
        products_sold: today.iter().map(|s| s.quantity).sum(),
        low_stock_count: products::repository::count_low_stock()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_a_sale_decrements_stock_and_derives_amount() {
        let before = products::repository::get_by_id("prod-002")
            .unwrap()
            .unwrap()
            .stock;
        let sale = record(NewSale {
            product_id: "prod-002".into(),
            quantity: 3,
            amount: None,
        })
        .unwrap();
        assert_eq!(sale.amount, 2500 * 3);

        let after = products::repository::get_by_id("prod-002")
            .unwrap()
            .unwrap()
            .stock;
        assert_eq!(after, before - 3);
    }

    #[test]
    fn overselling_is_refused_and_records_nothing() {
        // prod-014 has no seeded sales, so any entry for it would have come
        // from this refused attempt.
        let result = record(NewSale {
            product_id: "prod-014".into(),
            quantity: 10_000,
            amount: None,
        });
        assert!(result.is_err());
        let recent = list_recent(1000).unwrap();
        assert!(!recent.iter().any(|s| s.product_id == "prod-014"));
    }
}
