//! Domain models for the Agri Advisory Platform

mod calendar;
mod crop;
mod disease;
mod soil;

pub use calendar::*;
pub use crop::*;
pub use disease::*;
pub use soil::*;
