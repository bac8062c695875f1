mod common;

use std::collections::HashMap;
use std::sync::Arc;

use medscreen::{verdict_labels, ArtifactStore, DiseaseCategory, Dispatcher, PredictError};

use common::{complete_values, unique_dir, write_all_artifacts};

fn setup_dispatcher(name: &str) -> Dispatcher {
    let dir = unique_dir(name);
    write_all_artifacts(&dir);
    let store = ArtifactStore::load_all(&dir).unwrap();
    Dispatcher::new(Arc::new(store))
}

#[test]
fn test_diabetes_verdict_label_mapping() {
    let dispatcher = setup_dispatcher("dispatch-diabetes");

    // Test models are positive exactly when the first field exceeds 100.
    let positive = dispatcher
        .predict("diabetes", &complete_values(DiseaseCategory::Diabetes, 150.0))
        .unwrap();
    assert_eq!(positive.raw_label, 1);
    assert_eq!(positive.display_text, "Diabetic");

    let negative = dispatcher
        .predict("diabetes", &complete_values(DiseaseCategory::Diabetes, 50.0))
        .unwrap();
    assert_eq!(negative.raw_label, 0);
    assert_eq!(negative.display_text, "Not Diabetic");
}

#[test]
fn test_every_category_maps_labels_to_its_declared_pair() {
    let dispatcher = setup_dispatcher("dispatch-all");

    for category in DiseaseCategory::ALL {
        let (negative_text, positive_text) = verdict_labels(category);

        let positive = dispatcher
            .predict_category(category, &complete_values(category, 150.0))
            .unwrap();
        assert_eq!(positive.raw_label, 1, "{category}");
        assert_eq!(positive.display_text, positive_text, "{category}");

        let negative = dispatcher
            .predict_category(category, &complete_values(category, 50.0))
            .unwrap();
        assert_eq!(negative.raw_label, 0, "{category}");
        assert_eq!(negative.display_text, negative_text, "{category}");
    }
}

#[test]
fn test_unknown_category_fails_before_assembly() {
    let dispatcher = setup_dispatcher("dispatch-unknown");

    // With empty values a resolved category would fail with MissingField,
    // so seeing UnknownCategory proves the request short-circuited.
    let err = dispatcher
        .predict("unknown_category", &HashMap::new())
        .unwrap_err();
    assert!(matches!(err, PredictError::UnknownCategory(_)));
}

#[test]
fn test_missing_field_propagates_unchanged() {
    let dispatcher = setup_dispatcher("dispatch-missing");

    let mut values = complete_values(DiseaseCategory::Heart, 120.0);
    values.remove("thalach");
    let err = dispatcher.predict("heart", &values).unwrap_err();
    match err {
        PredictError::MissingField { category, fields } => {
            assert_eq!(category, DiseaseCategory::Heart);
            assert_eq!(fields, vec!["thalach".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_finite_value_propagates_unchanged() {
    let dispatcher = setup_dispatcher("dispatch-invalid");

    let mut values = complete_values(DiseaseCategory::Lungs, 120.0);
    values.insert("AGE".to_string(), f64::NAN);
    let err = dispatcher.predict("lungs", &values).unwrap_err();
    assert!(matches!(err, PredictError::InvalidValue { ref field, .. } if field == "AGE"));
}

#[test]
fn test_identical_requests_yield_identical_verdicts() {
    let dispatcher = setup_dispatcher("dispatch-idempotent");

    let values = complete_values(DiseaseCategory::Parkinsons, 150.0);
    let first = dispatcher.predict("parkinsons", &values).unwrap();
    let second = dispatcher.predict("parkinsons", &values).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dispatcher_is_shareable_across_threads() {
    let dispatcher = setup_dispatcher("dispatch-threads");

    let mut handles = vec![];
    for _ in 0..3 {
        let dispatcher = dispatcher.clone();
        handles.push(std::thread::spawn(move || {
            let values = complete_values(DiseaseCategory::Thyroid, 150.0);
            dispatcher.predict("thyroid", &values).unwrap()
        }));
    }
    for handle in handles {
        let verdict = handle.join().unwrap();
        assert_eq!(verdict.display_text, "Hypo-Thyroid Detected");
    }
}
