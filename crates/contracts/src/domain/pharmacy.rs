use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Branch code, e.g. "BR-014".
    pub branch: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub supervisor: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}
