// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod search;

pub use health::config as health_config;
pub use search::config as search_config;
