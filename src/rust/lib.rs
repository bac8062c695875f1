//! A thread-safe model registry and inference-dispatch layer for multi-disease
//! risk screening.
//!
//! Five independently trained binary classifiers (diabetes, heart disease,
//! Parkinson's, lung cancer, hypothyroidism) are loaded once at startup and
//! dispatched through a single entry point that validates input against each
//! category's ordered field schema.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use medscreen::{ArtifactStore, Dispatcher, schema_for, DiseaseCategory};
//!
//! let store = Arc::new(ArtifactStore::load_default()?);
//! let dispatcher = Dispatcher::new(store);
//!
//! // The schema registry tells the caller which fields to collect, in order.
//! let mut values = HashMap::new();
//! for spec in schema_for(DiseaseCategory::Thyroid) {
//!     values.insert(spec.name.to_string(), 1.0);
//! }
//!
//! let verdict = dispatcher.predict("thyroid", &values)?;
//! println!("{} ({})", verdict.display_text, verdict.raw_label);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The artifact store is immutable after [`ArtifactStore::load_all`] and is
//! shared read-only through an `Arc`, so concurrent predictions need no
//! locking:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use std::thread;
//! use medscreen::{ArtifactStore, Dispatcher, schema_for, DiseaseCategory};
//!
//! let dispatcher = Dispatcher::new(Arc::new(ArtifactStore::load_default()?));
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let dispatcher = dispatcher.clone();
//!     handles.push(thread::spawn(move || {
//!         let values: HashMap<String, f64> = schema_for(DiseaseCategory::Heart)
//!             .iter()
//!             .map(|spec| (spec.name.to_string(), 1.0))
//!             .collect();
//!         dispatcher.predict("heart", &values).unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact_store;
pub mod model;
pub mod registry;

pub use artifact_store::{ArtifactError, ArtifactStore};
pub use model::Model;
pub use registry::{
    assemble, schema_for, verdict_labels, DiseaseCategory, Dispatcher, FieldSpec, PredictError,
    Verdict,
};

pub fn init_logger() {
    env_logger::init();
}
