use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Binary};
use serde::{Deserialize, Serialize};

/// Stored upload document. The decoded bytes live inline as a BSON binary;
/// handlers re-encode them as base64 when serving, never serialize this
/// struct straight to JSON.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Upload {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub object_key: String,
    pub data: Binary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client payload for an upload: base64 data (optionally a `data:` URL)
/// plus file metadata.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadPayload {
    pub data: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
}
