//! Model inference seams

pub mod disease_model;

pub use disease_model::{Classification, DiseaseModel, StubDiseaseModel, MODEL_INPUT_SIZE};
