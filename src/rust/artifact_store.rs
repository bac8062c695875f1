//! Loads and holds the five trained classifiers for the process lifetime.
//!
//! Loading happens exactly once, at startup, via [`ArtifactStore::load_all`].
//! Any failure is fatal: a partial registry must never serve requests, since a
//! silently absent disease category would go unnoticed by callers.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::model::Model;
use crate::registry::{schema_for, DiseaseCategory};

/// Startup-time artifact failures. All variants abort the load.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {category} artifact at {path:?}: {source}")]
    Io {
        category: DiseaseCategory,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{category} artifact at {path:?} is not a usable classifier: {source}")]
    Malformed {
        category: DiseaseCategory,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{category} artifact has no weights and cannot predict")]
    EmptyModel { category: DiseaseCategory },
    #[error(
        "{category} model expects {model_features} features but its schema declares {schema_fields}"
    )]
    DimensionMismatch {
        category: DiseaseCategory,
        model_features: usize,
        schema_fields: usize,
    },
    #[error("hash mismatch for {category} artifact: expected {expected}, got {actual}")]
    HashMismatch {
        category: DiseaseCategory,
        expected: String,
        actual: String,
    },
}

/// The loaded, immutable model-binding set: one classifier per category.
///
/// Constructed once per process via [`ArtifactStore::load_all`] and shared
/// read-only afterwards; there is no reload or swap path.
#[derive(Debug)]
pub struct ArtifactStore {
    models: HashMap<DiseaseCategory, Model>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<ArtifactStore>();
    }
};

impl ArtifactStore {
    /// Loads all five classifiers from the default artifact directory.
    pub fn load_default() -> Result<Self, ArtifactError> {
        Self::load_all(Self::default_models_dir())
    }

    /// Returns the default artifact directory path.
    pub fn default_models_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("MEDSCREEN_MODELS") {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific data directory
        if let Some(data_dir) = dirs::data_dir() {
            return data_dir.join("medscreen").join("models");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".local").join("share").join("medscreen").join("models");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("medscreen").join("models")
    }

    /// File name of a category's artifact within the models directory.
    pub fn artifact_file_name(category: DiseaseCategory) -> &'static str {
        match category {
            DiseaseCategory::Diabetes => "diabetes_model.json",
            DiseaseCategory::Heart => "heart_disease_model.json",
            DiseaseCategory::Parkinsons => "parkinsons_model.json",
            DiseaseCategory::Lungs => "lungs_disease_model.json",
            DiseaseCategory::Thyroid => "thyroid_model.json",
        }
    }

    /// Full path of a category's artifact under `models_dir`.
    pub fn artifact_path(models_dir: &Path, category: DiseaseCategory) -> PathBuf {
        models_dir.join(Self::artifact_file_name(category))
    }

    /// Reads, verifies and deserializes every category's artifact.
    ///
    /// Fails on the first missing, corrupt or schema-inconsistent artifact;
    /// no partially populated store is ever returned.
    pub fn load_all<P: AsRef<Path>>(models_dir: P) -> Result<Self, ArtifactError> {
        let models_dir = models_dir.as_ref();
        log::info!("Loading model artifacts from {models_dir:?}");

        let mut models = HashMap::with_capacity(DiseaseCategory::ALL.len());
        for category in DiseaseCategory::ALL {
            let model = Self::load_one(models_dir, category)?;
            log::info!(
                "Loaded {category} model '{}' ({} features)",
                model.name,
                model.num_features()
            );
            models.insert(category, model);
        }

        log::info!("All {} model artifacts loaded", models.len());
        Ok(Self { models })
    }

    fn load_one(models_dir: &Path, category: DiseaseCategory) -> Result<Model, ArtifactError> {
        let path = Self::artifact_path(models_dir, category);
        let bytes = fs::read(&path).map_err(|source| {
            log::error!("Failed to read {category} artifact at {path:?}: {source}");
            ArtifactError::Io {
                category,
                path: path.clone(),
                source,
            }
        })?;

        Self::verify_sidecar(&path, category, &bytes)?;

        let model: Model =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Malformed {
                category,
                path: path.clone(),
                source,
            })?;

        if model.weights.is_empty() {
            return Err(ArtifactError::EmptyModel { category });
        }

        // Catch registry/model drift at startup instead of at predict time.
        let schema_fields = schema_for(category).len();
        if model.num_features() != schema_fields {
            return Err(ArtifactError::DimensionMismatch {
                category,
                model_features: model.num_features(),
                schema_fields,
            });
        }

        Ok(model)
    }

    /// Checks artifact bytes against an optional `<artifact>.sha256` sidecar.
    ///
    /// No sidecar means no integrity check; a present but unreadable or
    /// mismatching sidecar fails the load.
    fn verify_sidecar(
        path: &Path,
        category: DiseaseCategory,
        bytes: &[u8],
    ) -> Result<(), ArtifactError> {
        let sidecar = path.with_extension("json.sha256");
        if !sidecar.exists() {
            return Ok(());
        }

        let expected = fs::read_to_string(&sidecar).map_err(|source| ArtifactError::Io {
            category,
            path: sidecar.clone(),
            source,
        })?;
        let expected = expected.trim().to_ascii_lowercase();

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let actual = format!("{:x}", hasher.finalize());

        if actual != expected {
            log::error!("{category} artifact hash mismatch: expected {expected}, got {actual}");
            return Err(ArtifactError::HashMismatch {
                category,
                expected,
                actual,
            });
        }

        log::info!("Verified {category} artifact against sidecar hash");
        Ok(())
    }

    /// Read-only access to the model bound to `category`.
    ///
    /// By construction every category is present once `load_all` has
    /// succeeded; a `None` here means the binding set has diverged from the
    /// category set and the caller reports an internal fault.
    pub fn model_for(&self, category: DiseaseCategory) -> Option<&Model> {
        self.models.get(&category)
    }

    /// Number of loaded model bindings.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
