use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use log::{error, info};
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::mongo;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::activity::Activity;
use crate::models::itinerary::Itinerary;
use crate::models::trip::Trip;
use crate::models::user::User;
use crate::services::itinerary_enricher::{enrich, EnrichOptions};
use crate::services::itinerary_generator::generate;

pub const RULES_MODEL_TAG: &str = "rules";

enum TripLookup {
    Found(Trip),
    Response(HttpResponse),
}

async fn load_owned_trip(client: &Client, user: &AuthenticatedUser, raw_id: &str) -> TripLookup {
    let trip_id = match ObjectId::parse_str(raw_id) {
        Ok(id) => id,
        Err(_) => return TripLookup::Response(HttpResponse::BadRequest().body("Invalid trip ID")),
    };

    let collection = mongo::collection::<Trip>(client, mongo::TRIPS);
    match collection
        .find_one(doc! { "_id": trip_id, "user_id": user.user_id })
        .await
    {
        Ok(Some(trip)) => TripLookup::Found(trip),
        Ok(None) => TripLookup::Response(HttpResponse::NotFound().body("Trip not found")),
        Err(err) => {
            error!("Failed to retrieve trip: {:?}", err);
            TripLookup::Response(
                HttpResponse::InternalServerError().body("Failed to retrieve trip"),
            )
        }
    }
}

/// Candidate activities for the trip's destination, in the same stable order
/// the activities endpoint serves. A trip without a destination gets an
/// empty list, which the generator treats as all-free-exploration days.
async fn load_candidate_activities(
    client: &Client,
    trip: &Trip,
) -> Result<Vec<Activity>, mongodb::error::Error> {
    let destination_id = match trip.destination_id {
        Some(id) => id,
        None => return Ok(Vec::new()),
    };

    let collection = mongo::collection::<Activity>(client, mongo::ACTIVITIES);
    let cursor = collection
        .find(doc! { "destination_id": destination_id })
        .sort(doc! { "_id": 1 })
        .await?;
    cursor.try_collect().await
}

/*
    POST /api/trips/{id}/itinerary/generate
*/
pub async fn generate_for_trip(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let client = data.into_inner();

    let trip = match load_owned_trip(&client, &user, path.into_inner().as_str()).await {
        TripLookup::Found(trip) => trip,
        TripLookup::Response(resp) => return resp,
    };
    let trip_id = match trip.id {
        Some(id) => id,
        None => return HttpResponse::InternalServerError().body("Trip document has no id"),
    };

    let activities = match load_candidate_activities(&client, &trip).await {
        Ok(activities) => activities,
        Err(err) => {
            error!("Failed to load activities: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load activities");
        }
    };

    let itinerary_data = generate(&trip, &activities, &config.generator);
    info!(
        "Generated {}-day itinerary for trip {} from {} candidate activities",
        itinerary_data.days.len(),
        trip_id,
        activities.len()
    );

    let curr_time = Utc::now();
    let document = Itinerary {
        id: None,
        trip_id,
        generated_at: Some(curr_time),
        data: itinerary_data,
        ai_model_used: RULES_MODEL_TAG.to_string(),
        score: None,
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };

    let collection = mongo::collection::<Itinerary>(&client, mongo::ITINERARIES);
    let filter = doc! { "trip_id": trip_id };
    match collection.replace_one(filter.clone(), &document).upsert(true).await {
        Ok(_) => match collection.find_one(filter).await {
            Ok(Some(stored)) => HttpResponse::Ok().json(stored),
            Ok(None) => HttpResponse::Ok().json(document),
            Err(err) => {
                error!("Failed to re-read itinerary: {:?}", err);
                HttpResponse::Ok().json(document)
            }
        },
        Err(err) => {
            error!("Failed to store itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to store itinerary")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    pub model_hint: Option<String>,
}

/*
    POST /api/trips/{id}/itinerary/enrich

    The body is optional; a bare POST enriches with the default model tag.
*/
pub async fn enrich_for_trip(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    input: Option<web::Json<EnrichRequest>>,
) -> impl Responder {
    let client = data.into_inner();

    let trip = match load_owned_trip(&client, &user, path.into_inner().as_str()).await {
        TripLookup::Found(trip) => trip,
        TripLookup::Response(resp) => return resp,
    };
    let trip_id = match trip.id {
        Some(id) => id,
        None => return HttpResponse::InternalServerError().body("Trip document has no id"),
    };

    let collection = mongo::collection::<Itinerary>(&client, mongo::ITINERARIES);
    let filter = doc! { "trip_id": trip_id };
    let itinerary = match collection.find_one(filter.clone()).await {
        Ok(Some(itinerary)) => itinerary,
        Ok(None) => return HttpResponse::NotFound().body("No itinerary to enrich"),
        Err(err) => {
            error!("Failed to retrieve itinerary: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve itinerary");
        }
    };

    // Traveler name is a nicety; enrichment proceeds without it
    let users = mongo::collection::<User>(&client, mongo::USERS);
    let traveler_name = match users.find_one(doc! { "_id": user.user_id }).await {
        Ok(Some(user)) => user.name,
        Ok(None) => None,
        Err(err) => {
            error!("Failed to load user profile: {:?}", err);
            None
        }
    };

    let options = EnrichOptions {
        model_hint: input.and_then(|body| body.into_inner().model_hint),
        default_model_tag: config.enrich_model_tag.clone(),
        phrases: config.enrich_phrases.clone(),
    };
    let outcome = enrich(&itinerary.data, &trip, traveler_name.as_deref(), &options);
    info!("Enriched itinerary for trip {} with model tag {}", trip_id, outcome.model_tag);

    let data_bson = match bson::to_bson(&outcome.data) {
        Ok(bson) => bson,
        Err(err) => {
            error!("Failed to serialize enriched itinerary: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to store itinerary");
        }
    };
    let update = doc! {
        "$set": {
            "data": data_bson,
            "ai_model_used": &outcome.model_tag,
            "score": outcome.score,
            "updated_at": Utc::now().to_rfc3339(),
        }
    };

    match collection.update_one(filter.clone(), update).await {
        Ok(_) => match collection.find_one(filter).await {
            Ok(Some(stored)) => HttpResponse::Ok().json(stored),
            Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
            Err(err) => {
                error!("Failed to re-read itinerary: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to retrieve itinerary")
            }
        },
        Err(err) => {
            error!("Failed to update itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to store itinerary")
        }
    }
}

/*
    GET /api/trips/{id}/itinerary
*/
pub async fn get_for_trip(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();

    let trip = match load_owned_trip(&client, &user, path.into_inner().as_str()).await {
        TripLookup::Found(trip) => trip,
        TripLookup::Response(resp) => return resp,
    };
    let trip_id = match trip.id {
        Some(id) => id,
        None => return HttpResponse::InternalServerError().body("Trip document has no id"),
    };

    let collection = mongo::collection::<Itinerary>(&client, mongo::ITINERARIES);
    match collection.find_one(doc! { "trip_id": trip_id }).await {
        Ok(Some(itinerary)) => HttpResponse::Ok().json(itinerary),
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            error!("Failed to retrieve itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve itinerary")
        }
    }
}
