//! HTTP handlers for the Agri Advisory Platform

pub mod advisory;
pub mod disease;
pub mod health;
pub mod recommendation;

pub use advisory::*;
pub use disease::*;
pub use health::*;
pub use recommendation::*;
