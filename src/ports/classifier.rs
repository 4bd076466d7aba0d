//! Classifier port: Trait for pre-trained binary models.
//!
//! This trait hides the model format from the application logic. The
//! application only ever submits one row and reads one label back.

use crate::domain::ClassifierError;

/// Opaque binary decision function over fixed-width numeric rows.
///
/// Implementations are loaded once and shared read-only, hence `Send + Sync`.
pub trait Classifier: Send + Sync {
    /// Number of features each row must carry.
    fn n_features(&self) -> usize;

    /// Predict a label in `{0, 1}` for each row.
    ///
    /// # Errors
    /// Returns `ClassifierError::FeatureCount` if any row has the wrong width,
    /// `ClassifierError::EmptyBatch` if `rows` is empty.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for std::sync::Arc<C> {
    fn n_features(&self) -> usize {
        (**self).n_features()
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        (**self).predict(rows)
    }
}
