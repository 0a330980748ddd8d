use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String, // Always hashed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // Security related fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_signin: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_signins: Option<i32>,
    // We always want these fields, but have them optional so we can set them in the code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Sanitized projection returned by `/auth/session`. Never carries the hash.
#[derive(Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}
