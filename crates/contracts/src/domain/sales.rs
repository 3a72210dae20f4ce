use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the detailed sales register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLine {
    #[serde(rename = "_id")]
    pub id: String,
    pub pharmacy: String,
    pub branch: Option<String>,
    pub product: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub amount: f64,
    pub sale_date: NaiveDate,
    /// Reporting month in "YYYY-MM" form.
    pub month: Option<String>,
}

/// Aggregates for the home page stat cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_amount: f64,
    pub total_quantity: f64,
    pub pharmacy_count: u64,
    pub top_pharmacy: Option<String>,
}
