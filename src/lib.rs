//! # medpredict
//!
//! Terminal front-end for binary disease classification.
//!
//! A user picks one of three domains (diabetes, heart disease, Parkinson's),
//! fills the domain's clinical measurements, and gets a fixed verdict from a
//! pre-trained model loaded at startup.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Disease profiles, form state, verdicts
//! - `ports`: The `Classifier` trait
//! - `adapters`: Linear model loading, log sanitization
//! - `application`: Predict-and-report flow, model registry, session
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{run_domain, ModelRegistry, PredictError, Session};
pub use domain::{Disease, FieldSet, FormError, Verdict};

/// Result type for medpredict operations
pub type Result<T> = std::result::Result<T, MedpredictError>;

/// Main error type for medpredict
#[derive(Debug, thiserror::Error)]
pub enum MedpredictError {
    #[error("Model loading failed: {0}")]
    Model(#[from] adapters::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
