//! Static schema registry: the ordered field list and verdict label pair for
//! every disease category.
//!
//! Field order is the order each bound model was trained on. The artifacts
//! carry no embedded schema, so this registry is the single source of truth;
//! reordering a slice here without retraining the matching model silently
//! corrupts predictions. `ArtifactStore::load_all` cross-checks the declared
//! field count against each model's weight count at startup.

use super::category::DiseaseCategory;

/// A named numeric input a category's model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name, used as the lookup key when assembling input.
    pub name: &'static str,
    /// Short operator-facing description of the measurement.
    pub help: &'static str,
}

const fn field(name: &'static str, help: &'static str) -> FieldSpec {
    FieldSpec { name, help }
}

static DIABETES_FIELDS: [FieldSpec; 8] = [
    field("Pregnancies", "Number of pregnancies"),
    field("Glucose", "Plasma glucose concentration"),
    field("BloodPressure", "Diastolic blood pressure (mm Hg)"),
    field("SkinThickness", "Triceps skinfold thickness (mm)"),
    field("Insulin", "Serum insulin (mu U/ml)"),
    field("BMI", "Body mass index"),
    field("DiabetesPedigreeFunction", "Genetic likelihood score"),
    field("Age", "Age of patient (years)"),
];

static HEART_FIELDS: [FieldSpec; 13] = [
    field("age", "Age (years)"),
    field("sex", "Sex (1=male, 0=female)"),
    field("cp", "Chest pain type (0-3)"),
    field("trestbps", "Resting blood pressure (mm Hg)"),
    field("chol", "Serum cholesterol (mg/dl)"),
    field("fbs", "Fasting blood sugar >120 mg/dl (1=yes, 0=no)"),
    field("restecg", "Resting ECG result (0-2)"),
    field("thalach", "Maximum heart rate achieved"),
    field("exang", "Exercise-induced angina (1=yes, 0=no)"),
    field("oldpeak", "ST depression induced by exercise"),
    field("slope", "Slope of peak exercise ST segment (0-2)"),
    field("ca", "Major vessels colored by fluoroscopy (0-3)"),
    field("thal", "Thalassemia (0-2)"),
];

// UCI Parkinsons voice-measure set, in dataset column order.
static PARKINSONS_FIELDS: [FieldSpec; 22] = [
    field("MDVP:Fo(Hz)", "Average vocal fundamental frequency"),
    field("MDVP:Fhi(Hz)", "Maximum vocal fundamental frequency"),
    field("MDVP:Flo(Hz)", "Minimum vocal fundamental frequency"),
    field("MDVP:Jitter(%)", "Frequency variation, percent"),
    field("MDVP:Jitter(Abs)", "Frequency variation, absolute"),
    field("MDVP:RAP", "Relative amplitude perturbation"),
    field("MDVP:PPQ", "Five-point period perturbation quotient"),
    field("Jitter:DDP", "Average difference of differences between cycles"),
    field("MDVP:Shimmer", "Amplitude variation"),
    field("MDVP:Shimmer(dB)", "Amplitude variation (dB)"),
    field("Shimmer:APQ3", "Three-point amplitude perturbation quotient"),
    field("Shimmer:APQ5", "Five-point amplitude perturbation quotient"),
    field("MDVP:APQ", "Amplitude perturbation quotient"),
    field("Shimmer:DDA", "Average difference between consecutive amplitudes"),
    field("NHR", "Noise-to-harmonics ratio"),
    field("HNR", "Harmonics-to-noise ratio"),
    field("RPDE", "Recurrence period density entropy"),
    field("DFA", "Signal fractal scaling exponent"),
    field("spread1", "Nonlinear fundamental frequency spread"),
    field("spread2", "Nonlinear fundamental frequency spread"),
    field("D2", "Correlation dimension"),
    field("PPE", "Pitch period entropy"),
];

static LUNGS_FIELDS: [FieldSpec; 15] = [
    field("GENDER", "Sex (1=male, 0=female)"),
    field("AGE", "Age (years)"),
    field("SMOKING", "Smoker (2=yes, 1=no)"),
    field("YELLOW_FINGERS", "Yellowed fingers (2=yes, 1=no)"),
    field("ANXIETY", "Anxiety (2=yes, 1=no)"),
    field("PEER_PRESSURE", "Peer pressure (2=yes, 1=no)"),
    field("CHRONIC_DISEASE", "Chronic disease (2=yes, 1=no)"),
    field("FATIGUE", "Fatigue (2=yes, 1=no)"),
    field("ALLERGY", "Allergy (2=yes, 1=no)"),
    field("WHEEZING", "Wheezing (2=yes, 1=no)"),
    field("ALCOHOL_CONSUMING", "Alcohol consumption (2=yes, 1=no)"),
    field("COUGHING", "Coughing (2=yes, 1=no)"),
    field("SHORTNESS_OF_BREATH", "Shortness of breath (2=yes, 1=no)"),
    field("SWALLOWING_DIFFICULTY", "Swallowing difficulty (2=yes, 1=no)"),
    field("CHEST_PAIN", "Chest pain (2=yes, 1=no)"),
];

static THYROID_FIELDS: [FieldSpec; 7] = [
    field("age", "Age (years)"),
    field("sex", "Sex (1=male, 0=female)"),
    field("on_thyroxine", "On thyroxine medication (1=yes, 0=no)"),
    field("tsh", "TSH hormone level"),
    field("t3_measured", "T3 was measured (1=yes, 0=no)"),
    field("t3", "T3 hormone level"),
    field("tt4", "Total thyroxine level"),
];

/// Returns the ordered field list the given category's model expects.
pub fn schema_for(category: DiseaseCategory) -> &'static [FieldSpec] {
    match category {
        DiseaseCategory::Diabetes => &DIABETES_FIELDS,
        DiseaseCategory::Heart => &HEART_FIELDS,
        DiseaseCategory::Parkinsons => &PARKINSONS_FIELDS,
        DiseaseCategory::Lungs => &LUNGS_FIELDS,
        DiseaseCategory::Thyroid => &THYROID_FIELDS,
    }
}

/// Returns the `(negative, positive)` display label pair for a category.
///
/// The pair is declared here, next to the schema it belongs to, rather than
/// inferred from model output.
pub fn verdict_labels(category: DiseaseCategory) -> (&'static str, &'static str) {
    match category {
        DiseaseCategory::Diabetes => ("Not Diabetic", "Diabetic"),
        DiseaseCategory::Heart => ("No Heart Disease", "Heart Disease Detected"),
        DiseaseCategory::Parkinsons => ("No Parkinson's", "Parkinson's Detected"),
        DiseaseCategory::Lungs => ("No Lung Cancer", "Lung Cancer Detected"),
        DiseaseCategory::Thyroid => ("Normal Thyroid", "Hypo-Thyroid Detected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_counts_match_trained_models() {
        assert_eq!(schema_for(DiseaseCategory::Diabetes).len(), 8);
        assert_eq!(schema_for(DiseaseCategory::Heart).len(), 13);
        assert_eq!(schema_for(DiseaseCategory::Parkinsons).len(), 22);
        assert_eq!(schema_for(DiseaseCategory::Lungs).len(), 15);
        assert_eq!(schema_for(DiseaseCategory::Thyroid).len(), 7);
    }

    #[test]
    fn test_field_names_are_unique_within_category() {
        for category in DiseaseCategory::ALL {
            let schema = schema_for(category);
            let names: HashSet<&str> = schema.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), schema.len(), "duplicate field in {category}");
        }
    }

    #[test]
    fn test_every_category_has_distinct_verdict_labels() {
        for category in DiseaseCategory::ALL {
            let (negative, positive) = verdict_labels(category);
            assert_ne!(negative, positive);
            assert!(!negative.is_empty() && !positive.is_empty());
        }
    }

    #[test]
    fn test_diabetes_field_order_is_training_order() {
        let names: Vec<&str> = schema_for(DiseaseCategory::Diabetes)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            [
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age",
            ]
        );
    }
}
