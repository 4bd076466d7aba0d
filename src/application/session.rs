//! Interactive session state: selected domain, its form, and the banner.

use crate::domain::{Disease, FieldSet, Verdict};

use super::predictor::{ModelRegistry, PredictError};

/// Inline message shown under the form after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// One user's form session.
#[derive(Debug)]
pub struct Session {
    fields: FieldSet,
    focused: usize,
    banner: Option<Banner>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Disease::Diabetes)
    }
}

impl Session {
    #[must_use]
    pub fn new(disease: Disease) -> Self {
        Self {
            fields: FieldSet::empty(disease),
            focused: 0,
            banner: None,
        }
    }

    #[must_use]
    pub fn disease(&self) -> Disease {
        self.fields.disease()
    }

    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Switch domain. Values of the previous domain are wiped.
    ///
    /// Selecting the current domain keeps the form as is.
    pub fn select(&mut self, disease: Disease) {
        if disease == self.disease() {
            return;
        }
        tracing::debug!("Switching domain to {:?}", disease);
        // The old FieldSet zeroizes itself on drop.
        self.fields = FieldSet::empty(disease);
        self.focused = 0;
        self.banner = None;
    }

    pub fn select_next(&mut self) {
        self.select(self.disease().next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.disease().prev());
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = self.fields.len() - 1;
        } else {
            self.focused -= 1;
        }
    }

    /// Append a character to the focused field.
    ///
    /// Only characters that can appear in a decimal number are accepted.
    pub fn input_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        if let Some(field) = self.fields.field_mut(self.focused) {
            field.value.push(c);
            self.touch();
        }
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.field_mut(self.focused) {
            field.value.pop();
            self.touch();
        }
    }

    /// Clear the focused field.
    pub fn clear_field(&mut self) {
        if let Some(field) = self.fields.field_mut(self.focused) {
            zeroize::Zeroize::zeroize(&mut field.value);
            self.touch();
        }
    }

    /// Fill the form with the domain's demonstration row.
    pub fn load_sample(&mut self) {
        self.fields.load_sample();
        self.touch();
    }

    #[cfg(test)]
    fn set_field(&mut self, label: &str, value: impl Into<String>) -> bool {
        let found = self.fields.set(label, value);
        if found {
            self.touch();
        }
        found
    }

    /// Validate, predict, and set the banner from the outcome.
    ///
    /// # Errors
    /// Returns the `PredictError` that was also rendered as an error banner.
    pub fn submit(&mut self, models: &ModelRegistry) -> Result<Verdict, PredictError> {
        let outcome = models.predict(&self.fields);
        self.banner = Some(match &outcome {
            Ok(verdict) => Banner::Success(verdict.message.clone()),
            Err(PredictError::Form(e)) => Banner::Error(format!("Error: {e}")),
            Err(e) => Banner::Error(e.to_string()),
        });

        if let Err(e) = &outcome {
            // Labels only; values never reach the log.
            tracing::info!("Submission for {:?} rejected: {}", self.disease(), error_kind(e));
        }
        outcome
    }

    // Any edit invalidates the last verdict.
    fn touch(&mut self) {
        self.banner = None;
    }
}

fn error_kind(e: &PredictError) -> &'static str {
    use crate::domain::FormError;
    match e {
        PredictError::Form(FormError::IncompleteInput { .. }) => "incomplete input",
        PredictError::Form(FormError::NumericConversion { .. }) => "non-numeric input",
        PredictError::Classifier(_) => "classifier error",
    }
}

#[cfg(test)]
mod tests {
    use super::super::predictor::testing::registry;
    use super::*;

    #[test]
    fn test_switching_clears_values() {
        let mut session = Session::new(Disease::Diabetes);
        session.load_sample();
        session.focus_next();

        session.select(Disease::HeartDisease);
        assert_eq!(session.disease(), Disease::HeartDisease);
        assert_eq!(session.focused(), 0);
        assert_eq!(session.fields().missing().len(), 13);

        // Coming back does not restore the old values either.
        session.select(Disease::Diabetes);
        assert_eq!(session.fields().missing().len(), 8);
    }

    #[test]
    fn test_reselect_keeps_values() {
        let mut session = Session::new(Disease::Parkinsons);
        session.load_sample();
        session.select(Disease::Parkinsons);
        assert!(session.fields().missing().is_empty());
    }

    #[test]
    fn test_input_filters_characters() {
        let mut session = Session::default();
        for c in "4a2.5x".chars() {
            session.input_char(c);
        }
        assert_eq!(session.fields().fields()[0].value, "42.5");

        session.delete_char();
        assert_eq!(session.fields().fields()[0].value, "42.");

        session.clear_field();
        assert!(session.fields().fields()[0].value.is_empty());
    }

    #[test]
    fn test_focus_wraps() {
        let mut session = Session::default();
        session.focus_prev();
        assert_eq!(session.focused(), 7);
        session.focus_next();
        assert_eq!(session.focused(), 0);
    }

    #[test]
    fn test_submit_sets_banners() {
        let (models, _) = registry(1);
        let mut session = Session::default();

        assert!(session.submit(&models).is_err());
        assert!(matches!(
            session.banner(),
            Some(Banner::Error(msg)) if msg.starts_with("Error: All input fields must be filled!")
        ));

        session.load_sample();
        assert!(session.banner().is_none());

        let verdict = session.submit(&models).expect("prediction");
        assert!(verdict.is_positive());
        assert_eq!(
            session.banner(),
            Some(&Banner::Success("The person is diabetic".into()))
        );
    }

    #[test]
    fn test_non_numeric_banner() {
        let (models, _) = registry(0);
        let mut session = Session::new(Disease::HeartDisease);
        session.load_sample();
        assert!(session.set_field("Age", "old"));

        assert!(session.submit(&models).is_err());
        assert!(matches!(
            session.banner(),
            Some(Banner::Error(msg)) if msg.contains("Age")
        ));
    }

    #[test]
    fn test_select_clears_banner() {
        let (models, _) = registry(0);
        let mut session = Session::default();
        let _ = session.submit(&models);
        assert!(session.banner().is_some());

        session.select_next();
        assert!(session.banner().is_none());
        assert_eq!(session.disease(), Disease::HeartDisease);
        session.select_prev();
        assert_eq!(session.disease(), Disease::Diabetes);
    }
}
