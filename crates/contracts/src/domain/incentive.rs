use serde::{Deserialize, Serialize};

/// A product that earns incentive points when sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product: String,
    pub category: Option<String>,
    pub points: f64,
    pub supplier: Option<String>,
    pub is_active: bool,
}
