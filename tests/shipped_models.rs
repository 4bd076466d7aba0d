//! End-to-end checks against the model artifacts shipped in `Models/`.

use std::path::PathBuf;
use std::sync::Arc;

use medpredict::adapters::linear::load_models;
use medpredict::application::Banner;
use medpredict::{Disease, FieldSet, ModelRegistry, Session};

fn shipped() -> ModelRegistry {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Models");
    let loaded = load_models(&dir, true).expect("shipped models load and match manifest");
    ModelRegistry::new(
        Arc::new(loaded.diabetes),
        Arc::new(loaded.heart_disease),
        Arc::new(loaded.parkinsons),
    )
    .expect("widths match forms")
}

#[test]
fn test_registry_widths_match_forms() {
    let models = shipped();
    for disease in Disease::ALL {
        assert_eq!(
            models.get(disease).n_features(),
            disease.profile().field_count()
        );
    }
}

#[test]
fn test_diabetes_example_is_negative() {
    let models = shipped();
    let mut fields = FieldSet::empty(Disease::Diabetes);
    fields.fill(&["1", "85", "66", "29", "0", "26.6", "0.351", "31"]);

    let verdict = models.predict(&fields).expect("prediction");
    assert_eq!(verdict.label, 0);
    assert_eq!(verdict.message, "The person is not diabetic");
}

#[test]
fn test_diabetes_high_glucose_is_positive() {
    let models = shipped();
    let mut fields = FieldSet::empty(Disease::Diabetes);
    fields.fill(&["6", "148", "72", "35", "0", "33.6", "0.627", "50"]);

    let verdict = models.predict(&fields).expect("prediction");
    assert_eq!(verdict.message, "The person is diabetic");
}

#[test]
fn test_sample_rows_through_session() {
    let models = shipped();
    let mut session = Session::new(Disease::HeartDisease);
    session.load_sample();
    session.submit(&models).expect("prediction");
    assert_eq!(
        session.banner(),
        Some(&Banner::Success("The person has heart disease".into()))
    );

    session.select(Disease::Parkinsons);
    assert!(session.banner().is_none());
    session.load_sample();
    session.submit(&models).expect("prediction");
    assert_eq!(
        session.banner(),
        Some(&Banner::Success("The person has Parkinson's Disease".into()))
    );
}
