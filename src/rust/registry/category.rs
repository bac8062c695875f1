use std::fmt;
use std::str::FromStr;

use super::error::PredictError;

/// The closed set of disease categories the engine can screen for.
///
/// The set is fixed at build time: every category has exactly one field
/// schema and exactly one bound model, and nothing is runtime-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiseaseCategory {
    Diabetes,
    Heart,
    Parkinsons,
    Lungs,
    Thyroid,
}

impl DiseaseCategory {
    /// All categories, in registry order.
    pub const ALL: [DiseaseCategory; 5] = [
        DiseaseCategory::Diabetes,
        DiseaseCategory::Heart,
        DiseaseCategory::Parkinsons,
        DiseaseCategory::Lungs,
        DiseaseCategory::Thyroid,
    ];

    /// The stable identifier callers use to select this category.
    pub fn id(&self) -> &'static str {
        match self {
            DiseaseCategory::Diabetes => "diabetes",
            DiseaseCategory::Heart => "heart",
            DiseaseCategory::Parkinsons => "parkinsons",
            DiseaseCategory::Lungs => "lungs",
            DiseaseCategory::Thyroid => "thyroid",
        }
    }

    /// Human-readable title for the category's screening.
    pub fn title(&self) -> &'static str {
        match self {
            DiseaseCategory::Diabetes => "Diabetes Prediction",
            DiseaseCategory::Heart => "Heart Disease Prediction",
            DiseaseCategory::Parkinsons => "Parkinson's Disease Prediction",
            DiseaseCategory::Lungs => "Lung Cancer Prediction",
            DiseaseCategory::Thyroid => "Hypo-Thyroid Prediction",
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DiseaseCategory {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diabetes" => Ok(DiseaseCategory::Diabetes),
            "heart" => Ok(DiseaseCategory::Heart),
            "parkinsons" => Ok(DiseaseCategory::Parkinsons),
            "lungs" => Ok(DiseaseCategory::Lungs),
            "thyroid" => Ok(DiseaseCategory::Thyroid),
            other => Err(PredictError::UnknownCategory(other.to_string())),
        }
    }
}
