//! Form state for one domain: ordered labeled text inputs.

use zeroize::Zeroize;

use super::disease::{Disease, DomainProfile};

/// Reference notes rendered beside the form (key, explanation).
pub type DescriptionTable = &'static [(&'static str, &'static str)];

/// Error raised while turning form input into a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("All input fields must be filled! Missing: {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },

    #[error("{field}: '{value}' is not a finite number")]
    NumericConversion { field: &'static str, value: String },
}

/// A single labeled text input.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// Ordered field values for one domain.
///
/// Values are zeroized when cleared or dropped.
#[derive(Debug, Clone)]
pub struct FieldSet {
    disease: Disease,
    fields: Vec<FormField>,
}

impl FieldSet {
    /// Create an empty field set for a domain.
    #[must_use]
    pub fn empty(disease: Disease) -> Self {
        let fields = disease
            .profile()
            .fields
            .iter()
            .map(|&label| FormField {
                label,
                value: String::new(),
            })
            .collect();
        Self { disease, fields }
    }

    #[must_use]
    pub fn disease(&self) -> Disease {
        self.disease
    }

    #[must_use]
    pub fn profile(&self) -> &'static DomainProfile {
        self.disease.profile()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Mutable access to the field at `index`.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Set a value by label. Returns `false` if the label is unknown.
    #[cfg(test)]
    pub(crate) fn set(&mut self, label: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.label == label) {
            Some(field) => {
                field.value.zeroize();
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Fill every field in declaration order.
    ///
    /// Extra values are ignored; missing values leave fields untouched.
    pub fn fill<S: AsRef<str>>(&mut self, values: &[S]) {
        for (field, value) in self.fields.iter_mut().zip(values) {
            field.value.zeroize();
            field.value = value.as_ref().to_string();
        }
    }

    /// Load the domain's demonstration row.
    pub fn load_sample(&mut self) {
        let sample = self.profile().sample;
        self.fill(sample);
    }

    /// Labels whose trimmed value is empty, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.value.trim().is_empty())
            .map(|f| f.label)
            .collect()
    }

    /// Completeness check, performed before any numeric conversion.
    ///
    /// # Errors
    /// Returns `FormError::IncompleteInput` if any field is blank.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::IncompleteInput { missing })
        }
    }

    /// Validate and convert to a feature vector in declaration order.
    ///
    /// # Errors
    /// Returns `IncompleteInput` for blank fields, or `NumericConversion` for
    /// the first value that does not parse to a finite number.
    pub fn to_feature_vector(&self) -> Result<Vec<f64>, FormError> {
        self.validate()?;

        let mut values = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let raw = field.value.trim();
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FormError::NumericConversion {
                    field: field.label,
                    value: raw.to_string(),
                })?;
            values.push(value);
        }

        Ok(values)
    }

    /// Wipe every value.
    pub fn clear(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
    }
}

impl Drop for FieldSet {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(disease: Disease) -> FieldSet {
        let mut set = FieldSet::empty(disease);
        set.load_sample();
        set
    }

    #[test]
    fn test_empty_field_set() {
        let set = FieldSet::empty(Disease::HeartDisease);
        assert_eq!(set.len(), 13);
        assert!(set.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(set.missing().len(), 13);
    }

    #[test]
    fn test_any_blank_field_is_incomplete() {
        for disease in Disease::ALL {
            for blank in 0..disease.profile().field_count() {
                let mut set = filled(disease);
                set.field_mut(blank).expect("field exists").value = "   ".into();

                let err = set.to_feature_vector().unwrap_err();
                assert_eq!(
                    err,
                    FormError::IncompleteInput {
                        missing: vec![disease.profile().fields[blank]]
                    }
                );
            }
        }
    }

    #[test]
    fn test_completeness_checked_before_conversion() {
        let mut set = FieldSet::empty(Disease::Diabetes);
        set.fill(&["abc", "", "", "", "", "", "", ""]);
        assert!(matches!(
            set.to_feature_vector(),
            Err(FormError::IncompleteInput { .. })
        ));
    }

    #[test]
    fn test_feature_vector_order() {
        let mut set = FieldSet::empty(Disease::Diabetes);
        set.fill(&["1", "85", "66", "29", "0", "26.6", "0.351", "31"]);
        let v = set.to_feature_vector().expect("valid input");
        assert_eq!(v, vec![1.0, 85.0, 66.0, 29.0, 0.0, 26.6, 0.351, 31.0]);
    }

    #[test]
    fn test_whitespace_trimmed_before_parse() {
        let mut set = filled(Disease::Diabetes);
        assert!(set.set("Age", " 42 "));
        let v = set.to_feature_vector().expect("valid input");
        assert!((v[7] - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_numeric_conversion_error() {
        let mut set = filled(Disease::Diabetes);
        set.set("BMI", "twenty");
        assert_eq!(
            set.to_feature_vector().unwrap_err(),
            FormError::NumericConversion {
                field: "BMI",
                value: "twenty".into()
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut set = filled(Disease::Parkinsons);
        set.set("HNR", "NaN");
        assert!(matches!(
            set.to_feature_vector(),
            Err(FormError::NumericConversion { field: "HNR", .. })
        ));

        set.set("HNR", "inf");
        assert!(set.to_feature_vector().is_err());
    }

    #[test]
    fn test_overflow_message_names_finiteness() {
        let mut set = filled(Disease::Diabetes);
        set.set("Insulin Level", "1e400");
        let err = set.to_feature_vector().unwrap_err();
        assert_eq!(err.to_string(), "Insulin Level: '1e400' is not a finite number");
    }

    #[test]
    fn test_unknown_label() {
        let mut set = FieldSet::empty(Disease::Diabetes);
        assert!(!set.set("Cholesterol", "200"));
    }

    #[test]
    fn test_clear() {
        let mut set = filled(Disease::Parkinsons);
        set.clear();
        assert_eq!(set.missing().len(), 22);
    }
}
