//! Predict-and-report: the one flow shared by every domain.
//!
//! Validation, numeric coercion, a single classifier call, and mapping the
//! label to a fixed message. No retries, no caching, no prediction logging.

use std::sync::Arc;

use crate::domain::{ClassifierError, Disease, FieldSet, FormError, Verdict};
use crate::ports::Classifier;

/// Error surfaced to the user when a submission does not produce a verdict.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Prediction failed: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Run the full flow for one filled form against one classifier.
///
/// The classifier is invoked exactly once, and only when every field is
/// present and numeric.
///
/// # Errors
/// Returns `PredictError::Form` for incomplete or non-numeric input and
/// `PredictError::Classifier` if the model rejects the row.
pub fn run_domain<C>(fields: &FieldSet, classifier: &C) -> Result<Verdict, PredictError>
where
    C: Classifier + ?Sized,
{
    let row = fields.to_feature_vector()?;

    let labels = classifier.predict(std::slice::from_ref(&row))?;
    let label = *labels.first().ok_or(ClassifierError::NoLabel)?;

    tracing::debug!(
        "Prediction complete for {:?} ({} features)",
        fields.disease(),
        row.len()
    );

    Ok(Verdict::from_label(fields.disease(), label))
}

/// The three classifiers, loaded once at startup and shared read-only.
#[derive(Clone)]
pub struct ModelRegistry {
    diabetes: Arc<dyn Classifier>,
    heart_disease: Arc<dyn Classifier>,
    parkinsons: Arc<dyn Classifier>,
}

impl ModelRegistry {
    /// Assemble a registry, checking each model's width against its form.
    ///
    /// # Errors
    /// Returns `ClassifierError::FeatureCount` for the first model whose
    /// input width differs from its domain's field count.
    pub fn new(
        diabetes: Arc<dyn Classifier>,
        heart_disease: Arc<dyn Classifier>,
        parkinsons: Arc<dyn Classifier>,
    ) -> Result<Self, ClassifierError> {
        let registry = Self {
            diabetes,
            heart_disease,
            parkinsons,
        };

        for disease in Disease::ALL {
            let expected = disease.profile().field_count();
            let got = registry.get(disease).n_features();
            if got != expected {
                return Err(ClassifierError::FeatureCount { expected, got });
            }
        }

        Ok(registry)
    }

    /// Classifier for a domain.
    #[must_use]
    pub fn get(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Diabetes => self.diabetes.as_ref(),
            Disease::HeartDisease => self.heart_disease.as_ref(),
            Disease::Parkinsons => self.parkinsons.as_ref(),
        }
    }

    /// Run the flow for `fields` against its domain's classifier.
    ///
    /// # Errors
    /// See [`run_domain`].
    pub fn predict(&self, fields: &FieldSet) -> Result<Verdict, PredictError> {
        run_domain(fields, self.get(fields.disease()))
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("diabetes_features", &self.diabetes.n_features())
            .field("heart_disease_features", &self.heart_disease.n_features())
            .field("parkinsons_features", &self.parkinsons.n_features())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Classifier double that records every row and returns a fixed label.
    pub struct RecordingClassifier {
        pub n: usize,
        pub label: u8,
        pub calls: Mutex<Vec<Vec<f64>>>,
    }

    impl RecordingClassifier {
        pub fn new(n: usize, label: u8) -> Arc<Self> {
            Arc::new(Self {
                n,
                label,
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> Vec<Vec<f64>> {
            self.calls.lock().expect("lock").clone()
        }
    }

    impl Classifier for RecordingClassifier {
        fn n_features(&self) -> usize {
            self.n
        }

        fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
            self.calls.lock().expect("lock").extend(rows.iter().cloned());
            Ok(vec![self.label; rows.len()])
        }
    }

    /// Registry of recording doubles, all returning `label`.
    pub fn registry(label: u8) -> (ModelRegistry, [Arc<RecordingClassifier>; 3]) {
        let doubles = Disease::ALL.map(|d| RecordingClassifier::new(d.profile().field_count(), label));
        let registry = ModelRegistry::new(
            doubles[0].clone(),
            doubles[1].clone(),
            doubles[2].clone(),
        )
        .expect("widths match");
        (registry, doubles)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{registry, RecordingClassifier};
    use super::*;

    #[test]
    fn test_example_scenario() {
        let (registry, doubles) = registry(0);
        let mut fields = FieldSet::empty(Disease::Diabetes);
        fields.fill(&["1", "85", "66", "29", "0", "26.6", "0.351", "31"]);

        let verdict = registry.predict(&fields).expect("prediction");
        assert_eq!(verdict.message, "The person is not diabetic");
        assert_eq!(
            doubles[0].calls(),
            vec![vec![1.0, 85.0, 66.0, 29.0, 0.0, 26.6, 0.351, 31.0]]
        );
    }

    #[test]
    fn test_invoked_once_with_declared_width() {
        for label in [0, 1] {
            let (registry, doubles) = registry(label);
            for disease in Disease::ALL {
                let mut fields = FieldSet::empty(disease);
                fields.load_sample();

                let verdict = registry.predict(&fields).expect("prediction");
                assert_eq!(verdict.message, disease.profile().message_for(label));

                let calls = doubles[disease.index()].calls();
                assert_eq!(calls.len(), 1);
                assert_eq!(calls[0].len(), disease.profile().field_count());
            }
        }
    }

    #[test]
    fn test_incomplete_input_skips_classifier() {
        let (registry, doubles) = registry(1);
        for disease in Disease::ALL {
            let mut fields = FieldSet::empty(disease);
            fields.load_sample();
            fields.field_mut(0).expect("field").value.clear();

            assert!(matches!(
                registry.predict(&fields),
                Err(PredictError::Form(FormError::IncompleteInput { .. }))
            ));
            assert!(doubles[disease.index()].calls().is_empty());
        }
    }

    #[test]
    fn test_non_numeric_input_skips_classifier() {
        let (registry, doubles) = registry(1);
        let mut fields = FieldSet::empty(Disease::HeartDisease);
        fields.load_sample();
        fields.set("Age", "sixty");

        assert!(matches!(
            registry.predict(&fields),
            Err(PredictError::Form(FormError::NumericConversion { field: "Age", .. }))
        ));
        assert!(doubles[1].calls().is_empty());
    }

    #[test]
    fn test_non_one_label_is_negative() {
        let clf = RecordingClassifier::new(8, 2);
        let mut fields = FieldSet::empty(Disease::Diabetes);
        fields.load_sample();
        let verdict = run_domain(&fields, clf.as_ref()).expect("prediction");
        assert_eq!(verdict.message, "The person is not diabetic");
    }

    #[test]
    fn test_registry_rejects_width_mismatch() {
        let wrong = RecordingClassifier::new(12, 0);
        let err = ModelRegistry::new(
            RecordingClassifier::new(8, 0),
            wrong,
            RecordingClassifier::new(22, 0),
        )
        .unwrap_err();
        assert_eq!(err, ClassifierError::FeatureCount { expected: 13, got: 12 });
    }
}
