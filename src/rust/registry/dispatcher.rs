use std::collections::HashMap;
use std::sync::Arc;

use crate::artifact_store::ArtifactStore;

use super::assembler::assemble;
use super::category::DiseaseCategory;
use super::error::PredictError;
use super::schema::verdict_labels;
use super::Verdict;

/// The single entry point a caller uses to obtain a verdict.
///
/// Wraps the immutable, fully loaded [`ArtifactStore`] and coordinates
/// schema resolution, input assembly and inference. Inference is a pure,
/// synchronous function of the feature vector and the loaded model, so
/// nothing is retried and no locking is needed; the dispatcher can be cloned
/// and shared freely across threads.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use medscreen::{ArtifactStore, Dispatcher};
///
/// let store = Arc::new(ArtifactStore::load_default()?);
/// let dispatcher = Dispatcher::new(store);
///
/// let mut values = HashMap::new();
/// for (name, value) in [
///     ("Pregnancies", 2.0), ("Glucose", 120.0), ("BloodPressure", 70.0),
///     ("SkinThickness", 20.0), ("Insulin", 80.0), ("BMI", 25.0),
///     ("DiabetesPedigreeFunction", 0.5), ("Age", 33.0),
/// ] {
///     values.insert(name.to_string(), value);
/// }
///
/// let verdict = dispatcher.predict("diabetes", &values)?;
/// println!("{}", verdict.display_text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<ArtifactStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self { store }
    }

    /// Resolves a caller-supplied category identifier and predicts.
    ///
    /// An unknown identifier fails before the artifact store is ever
    /// consulted.
    pub fn predict(
        &self,
        category_id: &str,
        values: &HashMap<String, f64>,
    ) -> Result<Verdict, PredictError> {
        let category: DiseaseCategory = category_id.parse()?;
        self.predict_category(category, values)
    }

    /// Typed entry point: assembles the feature vector, runs the bound model
    /// on a one-row batch and maps the raw label to the category's display
    /// pair.
    pub fn predict_category(
        &self,
        category: DiseaseCategory,
        values: &HashMap<String, f64>,
    ) -> Result<Verdict, PredictError> {
        let vector = assemble(category, values)?;

        // Invariant: every category has a binding once the store loaded.
        let model =
            self.store
                .model_for(category)
                .ok_or_else(|| PredictError::InternalRegistry {
                    category,
                    detail: "no model bound for category".to_string(),
                })?;

        let labels = model.predict_batch(std::slice::from_ref(&vector))?;
        let raw_label = labels
            .first()
            .copied()
            .ok_or_else(|| PredictError::InternalRegistry {
                category,
                detail: "model returned no label for a one-row batch".to_string(),
            })?;

        let (negative, positive) = verdict_labels(category);
        let display_text = if raw_label == 1 { positive } else { negative };

        log::debug!("{category}: raw label {raw_label} -> '{display_text}'");
        Ok(Verdict {
            category,
            raw_label,
            display_text,
        })
    }
}
