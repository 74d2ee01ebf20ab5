use contracts::domain::forecast::{ForecastPoint, ForecastResponse, HistoryPoint};

use super::products;

const HISTORY_MONTHS: &[&str] = &[
    "2024-07-01",
    "2024-08-01",
    "2024-09-01",
    "2024-10-01",
    "2024-11-01",
    "2024-12-01",
    "2025-01-01",
    "2025-02-01",
    "2025-03-01",
    "2025-04-01",
    "2025-05-01",
    "2025-06-01",
];

const PREDICTION_MONTH: &str = "2025-07-01";

fn seed_for(product_id: &str) -> u32 {
    product_id.bytes().fold(0u32, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as u32)
    })
}

/// Deterministic stand-in for the external forecast service. The same
/// product id always yields the same history and projection, so mock-mode
/// charts are stable across reloads.
pub fn for_product(product_id: &str) -> Option<ForecastResponse> {
    let product = products::by_id(product_id)?;
    let seed = seed_for(product_id);
    let base = 8 + (seed % 20) as i64;

    let history: Vec<HistoryPoint> = HISTORY_MONTHS
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let wobble = ((seed.wrapping_add(i as u32 * 7)) % 11) as i64 - 5;
            HistoryPoint {
                date: date.to_string(),
                sales: (base + wobble).max(0),
            }
        })
        .collect();

    let last_three: i64 = history.iter().rev().take(3).map(|p| p.sales).sum();
    let predicted_quantity = (last_three / 3).max(1);
    let current_price = product.product.price as f64;

    Some(ForecastResponse {
        product_id: product_id.to_string(),
        current_price,
        current_stock: Some(product.product.stock),
        history_graph: history,
        prediction: ForecastPoint {
            date: PREDICTION_MONTH.to_string(),
            predicted_quantity,
            predicted_revenue: predicted_quantity as f64 * current_price,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_product_always_gets_the_same_forecast() {
        let a = for_product("prod-001").unwrap();
        let b = for_product("prod-001").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.history_graph.len(), 12);
        assert!(a.prediction.predicted_quantity >= 1);
    }

    #[test]
    fn unknown_product_has_no_forecast() {
        assert!(for_product("nonexistent").is_none());
    }
}
