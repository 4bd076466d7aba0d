//! Application layer: Use cases and services.
//!
//! Orchestrates the domain types with the `Classifier` port to implement
//! the single predict-and-report flow and the interactive session around it.

mod predictor;
mod session;

pub use predictor::{run_domain, ModelRegistry, PredictError};
pub use session::{Banner, Session};

#[cfg(test)]
pub(crate) use predictor::testing;
