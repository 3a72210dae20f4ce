use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Reporting month in "YYYY-MM" form.
    pub month: Option<String>,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub prize: Option<String>,
    pub participant_count: Option<u64>,
}
