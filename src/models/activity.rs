use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Free,
    Low,
    Medium,
    High,
}

impl PriceRange {
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Free => "free",
            PriceRange::Low => "low",
            PriceRange::Medium => "medium",
            PriceRange::High => "high",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub destination_id: ObjectId,
    pub name: String,
    pub category: String,
    pub price_range: PriceRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
