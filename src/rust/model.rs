//! The deserialized classifier artifact and its prediction capability.

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::registry::PredictError;

/// A pre-trained logistic binary classifier, deserialized from a JSON
/// artifact file.
///
/// Artifacts are immutable once loaded and hold no interior state, so a
/// `Model` is freely shared read-only across threads. The decision rule is
/// `sigmoid(weights . x + bias) >= 0.5`, mapped to the raw labels 1 and 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Name recorded at training time, used in error reporting.
    pub name: String,
    /// One weight per input feature, in training-time feature order.
    pub weights: Vec<f64>,
    pub bias: f64,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Model>();
    }
};

impl Model {
    /// Number of input features this model was trained on.
    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    /// Predicts the binary label for a single feature vector.
    ///
    /// Fails with [`PredictError::Inference`] if the vector's length does not
    /// match the trained feature count.
    pub fn predict(&self, features: &Array1<f64>) -> Result<u8, PredictError> {
        if features.len() != self.weights.len() {
            return Err(PredictError::Inference {
                model: self.name.clone(),
                expected: self.weights.len(),
                received: features.len(),
            });
        }
        let score = ArrayView1::from(self.weights.as_slice()).dot(features) + self.bias;
        let probability = 1.0 / (1.0 + (-score).exp());
        Ok(u8::from(probability >= 0.5))
    }

    /// Predicts labels for a batch of feature vectors, one label per row.
    pub fn predict_batch(&self, rows: &[Array1<f64>]) -> Result<Vec<u8>, PredictError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}
