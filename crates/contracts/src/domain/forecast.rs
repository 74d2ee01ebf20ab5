use serde::{Deserialize, Serialize};

/// One month of historical sales for the forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub sales: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub predicted_quantity: i64,
    pub predicted_revenue: f64,
}

/// Response shape of the external sales-forecast service. The proxy relays
/// bodies verbatim, so every field here mirrors that service's contract;
/// `current_stock` is optional because the service may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub product_id: String,
    pub current_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<u32>,
    pub history_graph: Vec<HistoryPoint>,
    pub prediction: ForecastPoint,
}
