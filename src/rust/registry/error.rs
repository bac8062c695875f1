use super::category::DiseaseCategory;

/// Errors a prediction request can fail with.
///
/// `UnknownCategory`, `MissingField` and `InvalidValue` are caller errors and
/// recoverable by re-prompting; `InternalRegistry` indicates the schema and
/// model-binding sets have diverged and the process should not keep serving.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("unknown disease category '{0}' (expected one of: diabetes, heart, parkinsons, lungs, thyroid)")]
    UnknownCategory(String),

    #[error("missing required field(s) for {}: {}", .category, .fields.join(", "))]
    MissingField {
        category: DiseaseCategory,
        fields: Vec<String>,
    },

    #[error("invalid value for {category} field '{field}': {value} is not a finite number")]
    InvalidValue {
        category: DiseaseCategory,
        field: String,
        value: f64,
    },

    #[error("registry inconsistency for {category}: {detail}")]
    InternalRegistry {
        category: DiseaseCategory,
        detail: String,
    },

    #[error("model '{model}' rejected the feature vector: expected {expected} features, got {received}")]
    Inference {
        model: String,
        expected: usize,
        received: usize,
    },
}
