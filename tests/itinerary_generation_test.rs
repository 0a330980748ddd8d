mod common;

use common::{sample_activities, sample_activity, sample_trip};
use wanderplan_api::models::activity::PriceRange;
use wanderplan_api::models::itinerary::TimeOfDay;
use wanderplan_api::services::itinerary_generator::{generate, GeneratorConfig, PhraseSet};

#[test]
fn test_day_count_matches_date_range() {
    let trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-18");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    assert_eq!(data.days.len(), 4);
    let dates: Vec<&str> = data.days.iter().filter_map(|d| d.date.as_deref()).collect();
    assert_eq!(dates, vec!["2025-07-15", "2025-07-16", "2025-07-17", "2025-07-18"]);
}

#[test]
fn test_single_day_trip() {
    let trip = sample_trip("Trip to Salta", "2025-07-15", "2025-07-15");
    let data = generate(&trip, &[], &GeneratorConfig::default());
    assert_eq!(data.days.len(), 1);
}

#[test]
fn test_day_count_clamped_to_thirty() {
    let trip = sample_trip("Trip to Patagonia", "2025-01-01", "2027-12-31");
    let data = generate(&trip, &[], &GeneratorConfig::default());
    assert_eq!(data.days.len(), 30);
}

#[test]
fn test_day_numbers_are_sequential_from_one() {
    let trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-19");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    let numbers: Vec<u32> = data.days.iter().map(|d| d.day).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_every_day_has_slots_in_fixed_order() {
    let trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-18");
    let data = generate(&trip, &sample_activities(5), &GeneratorConfig::default());

    for day in &data.days {
        let slots: Vec<TimeOfDay> = day.periods.iter().map(|p| p.time_of_day).collect();
        assert_eq!(
            slots,
            vec![TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening]
        );
    }
}

#[test]
fn test_round_robin_activity_assignment() {
    let activities = sample_activities(5);
    let trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-18");
    let data = generate(&trip, &activities, &GeneratorConfig::default());

    for (i, day) in data.days.iter().enumerate() {
        for (s, period) in day.periods.iter().enumerate() {
            let expected = &activities[(i * 3 + s) % activities.len()];
            assert_eq!(period.activity_id, expected.id.map(|id| id.to_hex()));
            assert_eq!(period.title, expected.name);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let activities = sample_activities(4);
    let mut trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-18");
    trip.budget = Some(1200.0);
    trip.interests = vec!["wine".to_string(), "hiking".to_string()];

    let first = generate(&trip, &activities, &GeneratorConfig::default());
    let second = generate(&trip, &activities, &GeneratorConfig::default());
    assert_eq!(first, second);
}

#[test]
fn test_unparsable_dates_degrade_to_default() {
    let trip = sample_trip("Trip to Nowhere", "not-a-date", "2025-07-18");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    assert_eq!(data.days.len(), 3);
    assert!(data.days.iter().all(|d| d.date.is_none()));
}

#[test]
fn test_reversed_dates_degrade_to_default() {
    let trip = sample_trip("Trip to Nowhere", "2025-07-18", "2025-07-15");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    assert_eq!(data.days.len(), 3);
    assert!(data.days.iter().all(|d| d.date.is_none()));
}

#[test]
fn test_budget_propagates_to_every_period() {
    let mut trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-17");
    trip.budget = Some(900.0);
    let data = generate(&trip, &[], &GeneratorConfig::default());

    for day in &data.days {
        for period in &day.periods {
            assert_eq!(period.estimated_cost, Some(100.0));
            assert!(period.description.contains("100"));
        }
    }
}

#[test]
fn test_absent_budget_omits_cost() {
    let trip = sample_trip("Trip to Mendoza", "2025-07-15", "2025-07-17");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    for day in &data.days {
        for period in &day.periods {
            assert_eq!(period.estimated_cost, None);
        }
    }
}

#[test]
fn test_empty_activity_list_yields_exploration_blocks() {
    let trip = sample_trip("Trip to Bariloche", "2025-07-15", "2025-07-17");
    let data = generate(&trip, &[], &GeneratorConfig::default());

    for day in &data.days {
        for period in &day.periods {
            assert_eq!(period.title, "Explore Bariloche");
            assert!(period.activity_id.is_none());
            assert!(period.description.contains("Bariloche"));
        }
    }
}

#[test]
fn test_interest_clause_uses_first_two_interests() {
    let mut trip = sample_trip("Trip to Bariloche", "2025-07-15", "2025-07-17");
    trip.interests = vec!["snow".to_string(), "food".to_string(), "museums".to_string()];
    let data = generate(&trip, &[], &GeneratorConfig::default());

    let description = &data.days[0].periods[0].description;
    assert!(description.contains("snow and food"));
    assert!(!description.contains("museums"));
}

#[test]
fn test_custom_default_day_count() {
    let config = GeneratorConfig {
        default_day_count: 5,
        ..GeneratorConfig::default()
    };
    let trip = sample_trip("Trip to Nowhere", "", "");
    let data = generate(&trip, &[], &config);
    assert_eq!(data.days.len(), 5);
}

#[test]
fn test_spanish_phrase_set() {
    let config = GeneratorConfig {
        phrases: PhraseSet::spanish(),
        ..GeneratorConfig::default()
    };
    let trip = sample_trip("Viaje a Bariloche", "2025-07-15", "2025-07-17");
    let data = generate(&trip, &[], &config);

    assert_eq!(data.days[0].periods[0].title, "Explora Bariloche");
    assert!(data.days[0].periods[0].description.contains("con calma"));
}

// Full scenario: 3 days, 9 periods, a single activity assigned everywhere,
// 600 / 3 days / 3 slots rounded to 67 per block.
#[test]
fn test_bariloche_scenario() {
    let mut trip = sample_trip("Trip to Bariloche", "2025-07-15", "2025-07-17");
    trip.budget = Some(600.0);
    trip.interests = vec!["snow".to_string(), "food".to_string()];

    let activity = sample_activity("City tour", "sightseeing", PriceRange::Low);
    let activity_id = activity.id.map(|id| id.to_hex());

    let data = generate(&trip, &[activity], &GeneratorConfig::default());

    assert_eq!(data.days.len(), 3);
    let total_periods: usize = data.days.iter().map(|d| d.periods.len()).sum();
    assert_eq!(total_periods, 9);

    for day in &data.days {
        for period in &day.periods {
            assert_eq!(period.activity_id, activity_id);
            assert_eq!(period.title, "City tour");
            assert_eq!(period.estimated_cost, Some(67.0));
            assert!(period.description.contains("City tour"));
            assert!(period.description.contains("sightseeing"));
            assert!(period.description.contains("low"));
            assert!(period.description.contains("snow and food"));
        }
    }
}
