use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use log::error;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::itinerary::Itinerary;
use crate::models::trip::Trip;

/// Trips are owner-scoped throughout: every filter pairs `_id` with the
/// caller's `user_id`, so foreign trips look like 404s rather than 403s.
pub async fn list(user: AuthenticatedUser, data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Trip>(&client, mongo::TRIPS);

    let cursor = collection
        .find(doc! { "user_id": user.user_id })
        .sort(doc! { "created_at": -1 })
        .await;

    match cursor {
        Ok(cursor) => match cursor.try_collect::<Vec<Trip>>().await {
            Ok(trips) => HttpResponse::Ok().json(trips),
            Err(err) => {
                error!("Failed to collect trips: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect trips")
            }
        },
        Err(err) => {
            error!("Failed to find trips: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find trips")
        }
    }
}

pub async fn create(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    input: web::Json<Trip>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Trip>(&client, mongo::TRIPS);

    let curr_time = Utc::now();
    let mut trip = input.into_inner();
    trip.id = None;
    trip.user_id = Some(user.user_id);
    trip.created_at = Some(curr_time);
    trip.updated_at = Some(curr_time);

    if trip.title.trim().is_empty() {
        return HttpResponse::BadRequest().body("Trip title must not be empty");
    }
    if trip.budget.is_some_and(|b| b < 0.0) {
        return HttpResponse::BadRequest().body("Budget must not be negative");
    }

    match collection.insert_one(&trip).await {
        Ok(result) => {
            trip.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(trip)
        }
        Err(err) => {
            error!("Failed to insert trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create trip")
        }
    }
}

pub async fn get_by_id(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Trip>(&client, mongo::TRIPS);

    let trip_id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid trip ID"),
    };

    match collection
        .find_one(doc! { "_id": trip_id, "user_id": user.user_id })
        .await
    {
        Ok(Some(trip)) => HttpResponse::Ok().json(trip),
        Ok(None) => HttpResponse::NotFound().body("Trip not found"),
        Err(err) => {
            error!("Failed to retrieve trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve trip")
        }
    }
}

pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    input: web::Json<Trip>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Trip>(&client, mongo::TRIPS);

    let trip_id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid trip ID"),
    };

    let filter = doc! { "_id": trip_id, "user_id": user.user_id };
    let existing = match collection.find_one(filter.clone()).await {
        Ok(Some(trip)) => trip,
        Ok(None) => return HttpResponse::NotFound().body("Trip not found"),
        Err(err) => {
            error!("Failed to retrieve trip: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve trip");
        }
    };

    let incoming = input.into_inner();
    if incoming.title.trim().is_empty() {
        return HttpResponse::BadRequest().body("Trip title must not be empty");
    }
    if incoming.budget.is_some_and(|b| b < 0.0) {
        return HttpResponse::BadRequest().body("Budget must not be negative");
    }

    // Identity and creation metadata survive the update untouched
    let replacement = Trip {
        id: existing.id,
        user_id: existing.user_id,
        title: incoming.title,
        destination_id: incoming.destination_id,
        start_date: incoming.start_date,
        end_date: incoming.end_date,
        budget: incoming.budget,
        interests: incoming.interests,
        status: incoming.status,
        created_at: existing.created_at,
        updated_at: Some(Utc::now()),
    };

    match collection.replace_one(filter, &replacement).await {
        Ok(_) => HttpResponse::Ok().json(replacement),
        Err(err) => {
            error!("Failed to update trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update trip")
        }
    }
}

pub async fn delete(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = mongo::collection::<Trip>(&client, mongo::TRIPS);

    let trip_id = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid trip ID"),
    };

    match collection
        .delete_one(doc! { "_id": trip_id, "user_id": user.user_id })
        .await
    {
        Ok(result) if result.deleted_count > 0 => {
            // Cascade to the trip's itinerary; a stale failure here is not fatal
            let itineraries = mongo::collection::<Itinerary>(&client, mongo::ITINERARIES);
            if let Err(err) = itineraries.delete_many(doc! { "trip_id": trip_id }).await {
                error!("Failed to delete itineraries for trip {}: {:?}", trip_id, err);
            }
            HttpResponse::Ok().body("Trip deleted")
        }
        Ok(_) => HttpResponse::NotFound().body("Trip not found"),
        Err(err) => {
            error!("Failed to delete trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete trip")
        }
    }
}
