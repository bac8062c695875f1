#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use medscreen::{schema_for, ArtifactStore, DiseaseCategory, Model};

/// Creates a fresh per-test directory under the system temp dir.
pub fn unique_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("medscreen-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A deterministic test model: positive exactly when the category's first
/// schema field exceeds 100.
pub fn threshold_model(category: DiseaseCategory) -> Model {
    let mut weights = vec![0.0; schema_for(category).len()];
    weights[0] = 1.0;
    Model {
        name: format!("{category}_test_model"),
        weights,
        bias: -100.0,
    }
}

pub fn write_artifact(dir: &Path, category: DiseaseCategory, model: &Model) {
    let path = ArtifactStore::artifact_path(dir, category);
    fs::write(path, serde_json::to_vec(model).unwrap()).unwrap();
}

pub fn write_all_artifacts(dir: &Path) {
    for category in DiseaseCategory::ALL {
        write_artifact(dir, category, &threshold_model(category));
    }
}

/// A complete value map for `category`: the first schema field set to
/// `first`, every other field set to 1.0.
pub fn complete_values(category: DiseaseCategory, first: f64) -> HashMap<String, f64> {
    schema_for(category)
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let value = if i == 0 { first } else { 1.0 };
            (spec.name.to_string(), value)
        })
        .collect()
}
