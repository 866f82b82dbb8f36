use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales prediction as served by `/api/predictions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "Product ID")]
    pub product_id: i64,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Predicted Popularity Score")]
    pub popularity_score: u32,
    #[serde(rename = "Predicted Start Sales Window")]
    pub window_start: NaiveDate,
    #[serde(rename = "Predicted End Sales Window")]
    pub window_end: NaiveDate,
}

/// One bar of the home-page popularity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularityPoint {
    pub label: String,
    pub score: u32,
}

impl From<&Prediction> for PopularityPoint {
    fn from(p: &Prediction) -> Self {
        Self {
            label: p.product_name.clone(),
            score: p.popularity_score,
        }
    }
}
