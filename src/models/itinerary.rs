use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Daily time blocks in the order the generator emits them. `FullDay` never
/// comes out of the rules engine but exists in persisted documents written by
/// earlier schema versions, so reads and enrichment must accept it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    FullDay,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Period {
    pub time_of_day: TimeOfDay,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub periods: Vec<Period>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryData {
    pub days: Vec<ItineraryDay>,
}

/// One itinerary per trip. Generation upserts the document for the trip;
/// enrichment rewrites `data` in place and stamps the model tag and score.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub trip_id: ObjectId,
    pub generated_at: Option<DateTime<Utc>>,
    pub data: ItineraryData,
    pub ai_model_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
