use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use log::error;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo;
use crate::models::activity::Activity;

/// Activities for one destination, sorted by `_id` ascending. The stable
/// order matters: the generator's round-robin assignment is keyed off list
/// position, so two identical requests must see the same sequence.
pub async fn get_for_destination(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Activity>(&client, mongo::ACTIVITIES);

    let destination_id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid destination ID"),
    };

    let cursor = collection
        .find(doc! { "destination_id": destination_id })
        .sort(doc! { "_id": 1 })
        .await;

    match cursor {
        Ok(cursor) => match cursor.try_collect::<Vec<Activity>>().await {
            Ok(activities) => HttpResponse::Ok().json(activities),
            Err(err) => {
                error!("Failed to collect activities: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect activities")
            }
        },
        Err(err) => {
            error!("Failed to find activities: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find activities")
        }
    }
}
