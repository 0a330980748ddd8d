use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use log::error;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::FindOptions, Client};
use std::sync::Arc;

use crate::db::mongo;
use crate::models::destination::Destination;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

pub async fn get_destinations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Destination>(&client, mongo::DESTINATIONS);

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }
    let filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => {
            doc! {
                "name": {
                    "$regex": format!("^{}", regex::escape(search_text)),
                    "$options": "i"
                }
            }
        }
        _ => doc! {},
    };

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Destination>>().await {
            Ok(destinations) => HttpResponse::Ok().json(destinations),
            Err(err) => {
                error!("Failed to collect destinations: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect destinations")
            }
        },
        Err(err) => {
            error!("Failed to find destinations: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find destinations")
        }
    }
}

pub async fn get_by_id(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Destination>(&client, mongo::DESTINATIONS);

    let id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid destination ID"),
    };

    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(destination)) => HttpResponse::Ok().json(destination),
        Ok(None) => HttpResponse::NotFound().body("Destination not found"),
        Err(err) => {
            error!("Failed to retrieve destination: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve destination")
        }
    }
}
