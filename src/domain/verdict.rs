//! Prediction outcome types.

use serde::{Deserialize, Serialize};

use super::disease::Disease;

/// Error raised by a classifier at prediction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Feature count mismatch: got {got}, expected {expected}")]
    FeatureCount { expected: usize, got: usize },

    #[error("Empty prediction batch")]
    EmptyBatch,

    #[error("Classifier returned no label")]
    NoLabel,
}

/// Binary classification for one submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub disease: Disease,
    /// Raw label returned by the classifier
    pub label: u8,
    /// Fixed human-readable message for the label
    pub message: String,
}

impl Verdict {
    /// Map a classifier label to the domain's message.
    #[must_use]
    pub fn from_label(disease: Disease, label: u8) -> Self {
        Self {
            disease,
            label,
            message: disease.profile().message_for(label).to_string(),
        }
    }

    /// Whether the classifier reported the condition.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.label == 1
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_branches_per_domain() {
        for disease in Disease::ALL {
            let profile = disease.profile();

            let positive = Verdict::from_label(disease, 1);
            assert!(positive.is_positive());
            assert_eq!(positive.message, profile.positive_message);

            let negative = Verdict::from_label(disease, 0);
            assert!(!negative.is_positive());
            assert_eq!(negative.message, profile.negative_message);
        }
    }

    #[test]
    fn test_heart_messages() {
        assert_eq!(
            Verdict::from_label(Disease::HeartDisease, 1).to_string(),
            "The person has heart disease"
        );
        assert_eq!(
            Verdict::from_label(Disease::HeartDisease, 0).to_string(),
            "The person does not have heart disease"
        );
    }
}
