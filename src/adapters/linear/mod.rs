//! Linear model adapter: Implementation of `Classifier` over exported weights.
//!
//! Models are fitted upstream (scikit-learn `LogisticRegression` or `LinearSVC`,
//! optionally behind a `StandardScaler`) and exported as JSON. Both kinds share
//! the same decision rule: label 1 iff `intercept + coef . x' > 0`.
//!
//! # Integrity
//!
//! If the model directory carries a `manifest.json`, every loaded file must be
//! listed there and its SHA-256 digest must match. Without a manifest, files
//! are loaded with a warning unless a manifest is required by configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{ClassifierError, Disease};
use crate::ports::Classifier;

/// Manifest file name inside the model directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Only manifest version understood by this build.
const MANIFEST_VERSION: u32 = 1;

/// Error type for model loading.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model shape: {0}")]
    Shape(String),

    #[error("Model integrity check failed: {0}")]
    Integrity(String),
}

/// Decision function family of an exported model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LogisticRegression,
    LinearSvc,
}

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    pub kind: ModelKind,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler_mean: Option<Vec<f64>>,
    #[serde(default)]
    pub scaler_scale: Option<Vec<f64>>,
}

/// Validated linear classifier.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    model: ExportedLinearModel,
}

impl LinearClassifier {
    /// Validate exported parameters.
    ///
    /// # Errors
    /// Returns `ModelError::Shape` if lengths disagree, the scaler is
    /// half-specified, a scale entry is zero, or any number is non-finite.
    pub fn from_model(model: ExportedLinearModel) -> Result<Self, ModelError> {
        let n = model.feature_names.len();
        if n == 0 {
            return Err(ModelError::Shape("model has no features".into()));
        }
        if model.coefficients.len() != n {
            return Err(ModelError::Shape(format!(
                "{} coefficients for {} features",
                model.coefficients.len(),
                n
            )));
        }
        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Shape("non-finite coefficient".into()));
        }

        match (&model.scaler_mean, &model.scaler_scale) {
            (None, None) => {}
            (Some(mean), Some(scale)) => {
                if mean.len() != n || scale.len() != n {
                    return Err(ModelError::Shape(
                        "scaler lengths do not match feature_names length".into(),
                    ));
                }
                if mean.iter().any(|m| !m.is_finite()) {
                    return Err(ModelError::Shape("non-finite scaler mean".into()));
                }
                if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                    return Err(ModelError::Shape(
                        "scaler scale entries must be finite and non-zero".into(),
                    ));
                }
            }
            _ => {
                return Err(ModelError::Shape(
                    "scaler_mean and scaler_scale must be given together".into(),
                ))
            }
        }

        Ok(Self { model })
    }

    /// Parse and validate a JSON export.
    ///
    /// # Errors
    /// Returns `ModelError::Format` on malformed JSON, `ModelError::Shape` on
    /// inconsistent parameters.
    pub fn from_json(path: &Path, content: &[u8]) -> Result<Self, ModelError> {
        let model: ExportedLinearModel =
            serde_json::from_slice(content).map_err(|source| ModelError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_model(model)
    }

    #[must_use]
    pub fn kind(&self) -> ModelKind {
        self.model.kind
    }

    /// Signed distance to the separating hyperplane.
    ///
    /// The caller guarantees `row.len() == n_features()`.
    #[must_use]
    pub fn decision_function(&self, row: &[f64]) -> f64 {
        let m = &self.model;
        let mut z = m.intercept;
        for (i, (&x, &w)) in row.iter().zip(&m.coefficients).enumerate() {
            let x = match (&m.scaler_mean, &m.scaler_scale) {
                (Some(mean), Some(scale)) => (x - mean[i]) / scale[i],
                _ => x,
            };
            z += w * x;
        }
        z
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.model.feature_names.len()
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        if rows.is_empty() {
            return Err(ClassifierError::EmptyBatch);
        }
        let n = self.n_features();
        rows.iter()
            .map(|row| {
                if row.len() != n {
                    return Err(ClassifierError::FeatureCount {
                        expected: n,
                        got: row.len(),
                    });
                }
                Ok(u8::from(self.decision_function(row) > 0.0))
            })
            .collect()
    }
}

/// SHA-256 digests of the model files, keyed by file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub version: u32,
    pub files: BTreeMap<String, String>,
}

impl ModelManifest {
    /// Hash the named files inside `dir`.
    ///
    /// # Errors
    /// Returns `ModelError::Io` if a file cannot be read.
    pub fn for_files(dir: &Path, names: &[&str]) -> Result<Self, ModelError> {
        let mut files = BTreeMap::new();
        for name in names {
            let path = dir.join(name);
            let bytes = fs::read(&path).map_err(|source| ModelError::Io { path, source })?;
            files.insert((*name).to_string(), sha256_hex(&bytes));
        }
        Ok(Self {
            version: MANIFEST_VERSION,
            files,
        })
    }

    /// Read `manifest.json` from `dir`, if present.
    ///
    /// # Errors
    /// Returns an error if the file exists but is unreadable, malformed, or of
    /// an unsupported version.
    pub fn load(dir: &Path) -> Result<Option<Self>, ModelError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read(&path).map_err(|source| ModelError::Io {
            path: path.clone(),
            source,
        })?;
        let manifest: Self = serde_json::from_slice(&content)
            .map_err(|source| ModelError::Format { path, source })?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ModelError::Integrity(format!(
                "unsupported manifest version {}",
                manifest.version
            )));
        }
        Ok(Some(manifest))
    }

    /// Check a file's bytes against its recorded digest.
    ///
    /// # Errors
    /// Returns `ModelError::Integrity` if the file is unlisted or its digest differs.
    pub fn verify(&self, name: &str, bytes: &[u8]) -> Result<(), ModelError> {
        let expected = self
            .files
            .get(name)
            .ok_or_else(|| ModelError::Integrity(format!("{name} is not listed in {MANIFEST_FILE}")))?;
        let actual = sha256_hex(bytes);
        if !constant_time_eq_str(&expected.to_ascii_lowercase(), &actual) {
            return Err(ModelError::Integrity(format!("{name} digest mismatch")));
        }
        Ok(())
    }
}

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{b:02x}")).collect()
}

// Constant-time compare for ASCII strings (hex digests).
fn constant_time_eq_str(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes().iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Load one domain's model from `dir`, verified against `manifest` if given.
///
/// # Errors
/// Returns `ModelError` on I/O, format, integrity, or width mismatch with the
/// domain's form.
pub fn load_model(
    dir: &Path,
    disease: Disease,
    manifest: Option<&ModelManifest>,
) -> Result<LinearClassifier, ModelError> {
    let profile = disease.profile();
    let path = dir.join(profile.model_file);
    let bytes = fs::read(&path).map_err(|source| ModelError::Io {
        path: path.clone(),
        source,
    })?;

    if let Some(manifest) = manifest {
        manifest.verify(profile.model_file, &bytes)?;
    }

    let classifier = LinearClassifier::from_json(&path, &bytes)?;
    if classifier.n_features() != profile.field_count() {
        return Err(ModelError::Shape(format!(
            "{} expects {} features but the {} form has {}",
            profile.model_file,
            classifier.n_features(),
            disease,
            profile.field_count()
        )));
    }

    tracing::info!(
        "Loaded {:?} model from {:?} (kind={:?}, n_features={})",
        disease,
        path,
        classifier.kind(),
        classifier.n_features()
    );

    Ok(classifier)
}

/// The three domain models, in selector order.
#[derive(Debug, Clone)]
pub struct LoadedModels {
    pub diabetes: LinearClassifier,
    pub heart_disease: LinearClassifier,
    pub parkinsons: LinearClassifier,
}

/// Load all three domain models from `dir`.
///
/// # Errors
/// Fails if any model fails to load, or if `require_manifest` is set and the
/// directory has no manifest.
pub fn load_models(dir: &Path, require_manifest: bool) -> Result<LoadedModels, ModelError> {
    let manifest = ModelManifest::load(dir)?;
    match &manifest {
        Some(m) => tracing::info!("Verifying models against {} ({} entries)", MANIFEST_FILE, m.files.len()),
        None if require_manifest => {
            return Err(ModelError::Integrity(format!(
                "{MANIFEST_FILE} required but not found in {dir:?}"
            )))
        }
        None => tracing::warn!("No {} in {:?}; loading models unverified", MANIFEST_FILE, dir),
    }

    Ok(LoadedModels {
        diabetes: load_model(dir, Disease::Diabetes, manifest.as_ref())?,
        heart_disease: load_model(dir, Disease::HeartDisease, manifest.as_ref())?,
        parkinsons: load_model(dir, Disease::Parkinsons, manifest.as_ref())?,
    })
}
