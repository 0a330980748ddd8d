#![allow(dead_code)]

use mongodb::bson::oid::ObjectId;

use wanderplan_api::models::activity::{Activity, PriceRange};
use wanderplan_api::models::trip::{Trip, TripStatus};

pub fn sample_trip(title: &str, start_date: &str, end_date: &str) -> Trip {
    Trip {
        id: Some(ObjectId::new()),
        user_id: Some(ObjectId::new()),
        title: title.to_string(),
        destination_id: Some(ObjectId::new()),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        budget: None,
        interests: Vec::new(),
        status: TripStatus::Planned,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_activity(name: &str, category: &str, price_range: PriceRange) -> Activity {
    Activity {
        id: Some(ObjectId::new()),
        destination_id: ObjectId::new(),
        name: name.to_string(),
        category: category.to_string(),
        price_range,
        opening_hours: None,
        coords: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_activities(count: usize) -> Vec<Activity> {
    (0..count)
        .map(|i| sample_activity(&format!("Activity {}", i), "outdoors", PriceRange::Low))
        .collect()
}
