mod assembler;
mod category;
mod dispatcher;
mod error;
pub mod schema;

pub use assembler::assemble;
pub use category::DiseaseCategory;
pub use dispatcher::Dispatcher;
pub use error::PredictError;
pub use schema::{schema_for, verdict_labels, FieldSpec};

/// The outcome of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Category the verdict belongs to.
    pub category: DiseaseCategory,
    /// Raw binary label returned by the model (0 or 1).
    pub raw_label: u8,
    /// The category-specific human-readable framing of the label.
    pub display_text: &'static str,
}
