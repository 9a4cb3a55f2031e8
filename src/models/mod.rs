// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod place;
pub mod query;

pub use place::*;
pub use query::*;
