use actix_web::{web, HttpResponse, Responder};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use log::error;
use bson::{doc, spec::BinarySubtype, Binary};
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::upload::{Upload, UploadPayload};
use crate::services::upload_service::{self, UploadError};

pub async fn create(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    input: web::Json<UploadPayload>,
) -> impl Responder {
    let client = data.into_inner();
    let payload = input.into_inner();

    let bytes = match upload_service::decode_payload(&payload) {
        Ok(bytes) => bytes,
        Err(err @ UploadError::Base64DecodeError(_)) => {
            return HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err @ UploadError::InvalidFileType(_)) => {
            return HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err @ UploadError::FileTooLarge(_)) => {
            return HttpResponse::PayloadTooLarge().body(err.to_string())
        }
    };

    let object_key = match upload_service::object_key(&user.user_id.to_hex(), &payload.file_type) {
        Ok(key) => key,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    let curr_time = Utc::now();
    let document = Upload {
        id: None,
        user_id: user.user_id,
        file_name: payload.file_name,
        content_type: payload.file_type,
        size: bytes.len() as u64,
        object_key,
        data: Binary {
            subtype: BinarySubtype::Generic,
            bytes,
        },
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };

    let collection = mongo::collection::<Upload>(&client, mongo::UPLOADS);
    match collection.insert_one(&document).await {
        Ok(result) => HttpResponse::Ok().json(json!({
            "_id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
            "file_name": document.file_name,
            "content_type": document.content_type,
            "size": document.size,
            "object_key": document.object_key,
        })),
        Err(err) => {
            error!("Failed to insert upload: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to store upload")
        }
    }
}

pub async fn get_by_id(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Upload>(&client, mongo::UPLOADS);

    let id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid upload ID"),
    };

    match collection
        .find_one(doc! { "_id": id, "user_id": user.user_id })
        .await
    {
        Ok(Some(upload)) => HttpResponse::Ok().json(json!({
            "_id": upload.id.map(|id| id.to_hex()),
            "file_name": upload.file_name,
            "content_type": upload.content_type,
            "size": upload.size,
            "object_key": upload.object_key,
            "data": general_purpose::STANDARD.encode(&upload.data.bytes),
        })),
        Ok(None) => HttpResponse::NotFound().body("Upload not found"),
        Err(err) => {
            error!("Failed to retrieve upload: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve upload")
        }
    }
}
