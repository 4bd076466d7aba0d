//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: JSON-exported linear classifiers and their integrity manifest
//! - `sanitize`: redaction of clinical values in log output

pub mod linear;
pub mod sanitize;

pub use linear::ModelError;
