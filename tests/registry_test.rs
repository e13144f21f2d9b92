use std::fs;

use tempfile::TempDir;

use symptom_analyzer::error::AnalyzerError;
use symptom_analyzer::model::MlpClassifier;
use symptom_analyzer::registry::{LabelRegistry, MedicineRegistry, SymptomVocabulary};

#[test]
fn test_vocabulary_orders_and_indexes_tokens() {
    let vocab = SymptomVocabulary::new(vec![
        "cough".to_string(),
        "fever".to_string(),
        "headache".to_string(),
    ])
    .unwrap();

    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.index_of("fever"), Some(1));
    assert_eq!(vocab.index_of("rash"), None);
    assert_eq!(vocab.token_at(2), Some("headache"));
}

#[test]
fn test_empty_vocabulary_is_rejected() {
    assert!(matches!(
        SymptomVocabulary::new(vec![]),
        Err(AnalyzerError::Artifact(_))
    ));
}

#[test]
fn test_duplicate_vocabulary_tokens_are_rejected() {
    let result = SymptomVocabulary::new(vec!["fever".to_string(), "fever".to_string()]);
    assert!(matches!(result, Err(AnalyzerError::Artifact(_))));
}

#[test]
fn test_vocabulary_loads_from_json_artifact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symptom_vocab.json");
    fs::write(&path, r#"["cough", "fever"]"#).unwrap();

    let vocab = SymptomVocabulary::load(&path).unwrap();
    assert_eq!(vocab.index_of("cough"), Some(0));
}

#[test]
fn test_missing_vocabulary_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = SymptomVocabulary::load(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(AnalyzerError::Read { .. })));
}

#[test]
fn test_malformed_vocabulary_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symptom_vocab.json");
    fs::write(&path, r#"{"not": "a list"}"#).unwrap();

    let result = SymptomVocabulary::load(&path);
    assert!(matches!(result, Err(AnalyzerError::Json { .. })));
}

#[test]
fn test_labels_align_with_output_indexes() {
    let labels = LabelRegistry::new(vec!["flu".to_string(), "cold".to_string()]).unwrap();
    assert_eq!(labels.name_at(0), Some("flu"));
    assert_eq!(labels.name_at(1), Some("cold"));
    assert_eq!(labels.name_at(2), None);
    assert_eq!(labels.len(), 2);
}

#[test]
fn test_duplicate_labels_are_rejected() {
    let result = LabelRegistry::new(vec!["flu".to_string(), "flu".to_string()]);
    assert!(matches!(result, Err(AnalyzerError::Artifact(_))));
}

#[test]
fn test_medicine_table_loads_and_indexes_by_disease() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("medicines.csv");
    fs::write(
        &path,
        "disease,name_english,name_french,image_url,price\n\
         flu,Paracetamol,Doliprane,https://example.com/p.png,2.50\n\
         flu,Ibuprofen,,https://example.com/i.png,3.00\n\
         cold,Lozenge,,,1.00\n",
    )
    .unwrap();

    let registry = MedicineRegistry::load(&path).unwrap();
    assert_eq!(registry.len(), 3);

    let flu = registry.for_disease("Flu");
    assert_eq!(flu.len(), 2);
    assert_eq!(flu[0].localized("name", "french"), Some("Doliprane"));
    // Empty french cell falls back to english.
    assert_eq!(flu[1].localized("name", "french"), Some("Ibuprofen"));
    assert_eq!(flu[0].field("price"), Some("2.50"));

    assert!(registry.for_disease("malaria").is_empty());
}

#[test]
fn test_medicine_table_without_disease_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("medicines.csv");
    fs::write(&path, "illness,name_english\nflu,Paracetamol\n").unwrap();

    let result = MedicineRegistry::load(&path);
    assert!(matches!(result, Err(AnalyzerError::Artifact(_))));
}

#[test]
fn test_missing_medicine_table_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = MedicineRegistry::load(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(AnalyzerError::Csv { .. })));
}

#[test]
fn test_model_artifact_loads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symptom_model.json");
    fs::write(
        &path,
        r#"{
            "input_len": 2,
            "output_len": 2,
            "layers": [
                {
                    "weights": [[1.0, 0.0], [0.0, 1.0]],
                    "biases": [0.0, 0.0],
                    "activation": "softmax"
                }
            ]
        }"#,
    )
    .unwrap();

    let model = MlpClassifier::load(&path).unwrap();
    use symptom_analyzer::model::Classifier;
    assert_eq!(model.input_len(), 2);
    assert_eq!(model.output_len(), 2);

    let probs = model.predict(&[1.0, 0.0]).unwrap();
    assert_eq!(probs.len(), 2);
    assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    assert!(probs[0] > probs[1]);
}

#[test]
fn test_model_artifact_with_inconsistent_shape_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symptom_model.json");
    // Declares 3 inputs but the layer rows have 2 columns.
    fs::write(
        &path,
        r#"{
            "input_len": 3,
            "output_len": 2,
            "layers": [
                {
                    "weights": [[1.0, 0.0], [0.0, 1.0]],
                    "biases": [0.0, 0.0],
                    "activation": "softmax"
                }
            ]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        MlpClassifier::load(&path),
        Err(AnalyzerError::Artifact(_))
    ));
}
