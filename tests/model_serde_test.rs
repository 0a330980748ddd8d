use serde_json::json;

use wanderplan_api::models::activity::PriceRange;
use wanderplan_api::models::itinerary::{ItineraryData, Period, TimeOfDay};
use wanderplan_api::models::trip::{Trip, TripStatus};

#[test]
fn test_period_omits_absent_optional_fields() {
    let period = Period {
        time_of_day: TimeOfDay::Morning,
        title: "Explore Bariloche".to_string(),
        description: "A quiet start.".to_string(),
        activity_id: None,
        estimated_cost: None,
    };

    let value = serde_json::to_value(&period).unwrap();
    assert_eq!(value["time_of_day"], "morning");
    assert!(value.get("activity_id").is_none());
    assert!(value.get("estimated_cost").is_none());
}

#[test]
fn test_time_of_day_wire_names() {
    for (variant, name) in [
        (TimeOfDay::Morning, "morning"),
        (TimeOfDay::Afternoon, "afternoon"),
        (TimeOfDay::Evening, "evening"),
        (TimeOfDay::FullDay, "full_day"),
    ] {
        assert_eq!(serde_json::to_value(variant).unwrap(), name);
        assert_eq!(serde_json::from_value::<TimeOfDay>(json!(name)).unwrap(), variant);
    }
}

// Documents written by the legacy schema carry full_day periods; reads must
// keep accepting them.
#[test]
fn test_legacy_full_day_document_deserializes() {
    let raw = json!({
        "days": [{
            "day": 1,
            "periods": [{
                "time_of_day": "full_day",
                "title": "Open day",
                "description": "Whatever comes up.",
                "estimated_cost": 40.0
            }]
        }]
    });

    let data: ItineraryData = serde_json::from_value(raw).unwrap();
    assert_eq!(data.days[0].periods[0].time_of_day, TimeOfDay::FullDay);
    assert_eq!(data.days[0].periods[0].estimated_cost, Some(40.0));
    assert!(data.days[0].date.is_none());
}

#[test]
fn test_trip_status_wire_names_and_default() {
    assert_eq!(serde_json::to_value(TripStatus::InProgress).unwrap(), "in_progress");
    assert_eq!(serde_json::to_value(TripStatus::Draft).unwrap(), "draft");

    // Status and interests are optional on the wire
    let raw = json!({
        "title": "Trip to Bariloche",
        "start_date": "2025-07-15",
        "end_date": "2025-07-17"
    });
    let trip: Trip = serde_json::from_value(raw).unwrap();
    assert_eq!(trip.status, TripStatus::Draft);
    assert!(trip.interests.is_empty());
    assert!(trip.budget.is_none());
}

#[test]
fn test_price_range_wire_names() {
    assert_eq!(serde_json::to_value(PriceRange::Free).unwrap(), "free");
    assert_eq!(
        serde_json::from_value::<PriceRange>(json!("medium")).unwrap(),
        PriceRange::Medium
    );
}
