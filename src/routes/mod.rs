pub mod activity;
pub mod auth;
pub mod destination;
pub mod health;
pub mod itinerary;
pub mod trip;
pub mod upload;
