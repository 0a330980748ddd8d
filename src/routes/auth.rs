use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;
use mongodb::bson::doc;
use mongodb::error::WriteError;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo;
use crate::middleware::auth::create_token;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{User, UserSession};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    auth_token: String,
}

pub async fn signup(data: web::Data<Arc<Client>>, input: web::Json<User>) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<User>(&client, mongo::USERS);

    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }
    if input.password.is_empty() {
        return HttpResponse::BadRequest().body("Password must not be empty");
    }

    let curr_time = Utc::now();
    let mut doc = input.into_inner();

    doc.password = match bcrypt::hash(&doc.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            error!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    };
    doc.failed_signins = Some(0);
    doc.created_at = Some(curr_time);
    doc.updated_at = Some(curr_time);

    match collection.insert_one(&doc).await {
        Ok(result) => match result.inserted_id.as_object_id() {
            Some(user_id) => match create_token(&doc.email, &user_id) {
                Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
                Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
            },
            None => HttpResponse::InternalServerError().body("Failed to create user"),
        },
        Err(err) => match *err.kind {
            mongodb::error::ErrorKind::Write(error_info) => match error_info {
                mongodb::error::WriteFailure::WriteError(WriteError { code, .. }) => {
                    if code == 11000 {
                        HttpResponse::Conflict().body("User already exists")
                    } else {
                        error!("Unexpected write error code: {}", code);
                        HttpResponse::InternalServerError().body("Failed to create user")
                    }
                }
                _ => HttpResponse::InternalServerError().body("Failed to create user"),
            },
            _ => HttpResponse::InternalServerError().body("Failed to create user"),
        },
    }
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

pub async fn signin(
    data: web::Data<Arc<Client>>,
    input: web::Json<SigninRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<User>(&client, mongo::USERS);

    let credentials = input.into_inner();
    let filter = doc! { "email": &credentials.email };

    match collection.find_one(filter.clone()).await {
        Ok(Some(user)) => {
            if bcrypt::verify(&credentials.password, &user.password).unwrap_or(false) {
                let update = doc! {
                    "$set": {
                        "last_signin": Utc::now().to_rfc3339(),
                        "failed_signins": 0
                    }
                };

                if let Err(err) = collection.update_one(filter, update).await {
                    error!("Failed to record signin: {:?}", err);
                    return HttpResponse::InternalServerError().body("Failed to sign in");
                }

                let user_id = match user.id {
                    Some(id) => id,
                    None => {
                        error!("User document for {} has no id", credentials.email);
                        return HttpResponse::InternalServerError().body("Failed to sign in");
                    }
                };

                match create_token(&credentials.email, &user_id) {
                    Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
                    Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
                }
            } else {
                let failed_signins = user.failed_signins.unwrap_or(0) + 1;
                let update = doc! { "$set": { "failed_signins": failed_signins } };

                match collection.update_one(filter, update).await {
                    Ok(_) => HttpResponse::Unauthorized().body("Invalid credentials"),
                    Err(err) => {
                        error!("Failed to update failed signins: {:?}", err);
                        HttpResponse::InternalServerError().body("Failed to process signin")
                    }
                }
            }
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            error!("Database error: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to process signin")
        }
    }
}

pub async fn user_session(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<User>(&client, mongo::USERS);

    match collection.find_one(doc! { "_id": user.user_id }).await {
        Ok(Some(user)) => {
            let session = UserSession {
                id: user.id.unwrap_or_default(),
                email: user.email,
                name: user.name,
                created_at: user.created_at.unwrap_or_default(),
            };
            HttpResponse::Ok().json(session)
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            error!("Failed to fetch user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch user")
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.map(|re| re.is_match(email)).unwrap_or(false)
}
