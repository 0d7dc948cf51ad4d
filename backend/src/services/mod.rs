//! Business logic services for the Agri Advisory Platform

pub mod advisory;
pub mod disease;
pub mod recommendation;

pub use advisory::AdvisoryService;
pub use disease::DiseaseDetectionService;
pub use recommendation::RecommendationService;
