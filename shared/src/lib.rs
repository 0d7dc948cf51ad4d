//! Shared types and models for the Agri Advisory Platform
//!
//! This crate contains the domain model and the pure scoring rules shared
//! between the backend service and its tests.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
