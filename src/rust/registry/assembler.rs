use std::collections::HashMap;

use ndarray::Array1;

use super::category::DiseaseCategory;
use super::error::PredictError;
use super::schema::schema_for;

/// Builds the ordered feature vector for `category` from a name → value map.
///
/// The output order is exactly the schema's declared order regardless of how
/// the map iterates. Every declared field must be present (all absent fields
/// are reported together) and every value must be finite; nothing is ever
/// defaulted or zero-filled.
pub fn assemble(
    category: DiseaseCategory,
    values: &HashMap<String, f64>,
) -> Result<Array1<f64>, PredictError> {
    let schema = schema_for(category);

    let missing: Vec<String> = schema
        .iter()
        .filter(|spec| !values.contains_key(spec.name))
        .map(|spec| spec.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PredictError::MissingField {
            category,
            fields: missing,
        });
    }

    let mut features = Vec::with_capacity(schema.len());
    for spec in schema {
        let value = values[spec.name];
        if !value.is_finite() {
            return Err(PredictError::InvalidValue {
                category,
                field: spec.name.to_string(),
                value,
            });
        }
        features.push(value);
    }

    Ok(Array1::from(features))
}
