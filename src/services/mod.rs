pub mod itinerary_enricher;
pub mod itinerary_generator;
pub mod upload_service;
