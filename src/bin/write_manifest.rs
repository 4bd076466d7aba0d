//! Integrity manifest writer for the model directory.
//!
//! Hashes the three model artifacts and writes `manifest.json` next to them.
//! When a manifest is present, the application refuses to load any model
//! file whose SHA-256 digest differs from the recorded one.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin write_manifest -- [<model_dir>] [--check]
//! ```
//!
//! With `--check`, the existing manifest is verified instead of rewritten.

use std::env;
use std::fs;
use std::path::PathBuf;

use medpredict::adapters::linear::{load_models, ModelManifest, MANIFEST_FILE};
use medpredict::ports::Classifier;
use medpredict::{Disease, MedpredictError};

fn usage() -> String {
    "Usage: write_manifest [<model_dir>] [--check]".to_string()
}

fn parse_args() -> Result<(PathBuf, bool), String> {
    let mut model_dir: Option<PathBuf> = None;
    let mut check = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            "-h" | "--help" => return Err(usage()),
            _ if model_dir.is_none() => model_dir = Some(PathBuf::from(arg)),
            _ => return Err(usage()),
        }
    }

    Ok((model_dir.unwrap_or_else(|| PathBuf::from("Models")), check))
}

fn run(model_dir: PathBuf, check: bool) -> medpredict::Result<()> {
    if check {
        // Fails unless every model is listed and matches.
        let models = load_models(&model_dir, true)?;
        println!(
            "Verified {model_dir:?}: diabetes={} heart_disease={} parkinsons={} features",
            models.diabetes.n_features(),
            models.heart_disease.n_features(),
            models.parkinsons.n_features()
        );
        return Ok(());
    }

    let names: Vec<&str> = Disease::ALL
        .iter()
        .map(|d| d.profile().model_file)
        .collect();
    let manifest = ModelManifest::for_files(&model_dir, &names)?;

    let manifest_path = model_dir.join(MANIFEST_FILE);
    let mut bytes = serde_json::to_vec_pretty(&manifest)?;
    bytes.push(b'\n');
    fs::write(&manifest_path, bytes)?;

    for (name, digest) in &manifest.files {
        println!("{digest}  {name}");
    }
    println!("Wrote {manifest_path:?}");
    Ok(())
}

fn main() -> Result<(), String> {
    let (model_dir, check) = parse_args()?;
    run(model_dir, check).map_err(|e: MedpredictError| e.to_string())
}
