// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_places_client;
pub mod renderer;
pub mod result_filter;
pub mod search_request;
pub mod search_service;
pub mod weekday;

pub use google_places_client::*;
pub use search_service::*;
pub use weekday::{WeekdayLabels, JAPANESE_WEEKDAYS};
