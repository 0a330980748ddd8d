use base64::{engine::general_purpose, Engine as _};
use uuid::Uuid;

use crate::models::upload::UploadPayload;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug)]
pub enum UploadError {
    Base64DecodeError(String),
    InvalidFileType(String),
    FileTooLarge(usize),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Base64DecodeError(err) => write!(f, "Base64 decode error: {}", err),
            UploadError::InvalidFileType(err) => write!(f, "Invalid file type: {}", err),
            UploadError::FileTooLarge(size) => {
                write!(f, "File of {} bytes exceeds the {} byte limit", size, MAX_UPLOAD_BYTES)
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Decode and validate an upload payload, returning the raw bytes.
/// Accepts both bare base64 and `data:` URLs.
pub fn decode_payload(payload: &UploadPayload) -> Result<Vec<u8>, UploadError> {
    file_extension(&payload.file_type)?;

    let base64_data = if payload.data.starts_with("data:") {
        payload.data.split(',').nth(1).ok_or_else(|| {
            UploadError::Base64DecodeError("Invalid data URL format".to_string())
        })?
    } else {
        &payload.data
    };

    let bytes = general_purpose::STANDARD
        .decode(base64_data.trim())
        .map_err(|e| UploadError::Base64DecodeError(e.to_string()))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge(bytes.len()));
    }

    Ok(bytes)
}

/// Storage key for an upload, namespaced by owner.
pub fn object_key(user_id: &str, file_type: &str) -> Result<String, UploadError> {
    let extension = file_extension(file_type)?;
    let timestamp = chrono::Utc::now().timestamp();
    Ok(format!("{}/{}-{}.{}", user_id, timestamp, Uuid::new_v4(), extension))
}

fn file_extension(file_type: &str) -> Result<&'static str, UploadError> {
    match file_type {
        "image/jpeg" | "image/jpg" => Ok("jpg"),
        "image/png" => Ok("png"),
        "image/gif" => Ok("gif"),
        "image/webp" => Ok("webp"),
        _ => Err(UploadError::InvalidFileType(format!(
            "Unsupported file type: {}",
            file_type
        ))),
    }
}
