use symptom_analyzer::interpret::{DEFAULT_THRESHOLD, interpret};
use symptom_analyzer::registry::LabelRegistry;

fn labels() -> LabelRegistry {
    LabelRegistry::new(vec![
        "flu".to_string(),
        "cold".to_string(),
        "migraine".to_string(),
    ])
    .unwrap()
}

#[test]
fn test_threshold_filters_and_keeps_label_order() {
    let candidates = interpret(&[0.05, 0.3, 0.12], &labels(), DEFAULT_THRESHOLD);
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["cold", "migraine"]);
    assert_eq!(candidates[0].confidence, 0.3);
    assert_eq!(candidates[1].confidence, 0.12);
}

#[test]
fn test_probability_equal_to_threshold_is_excluded() {
    let candidates = interpret(&[0.1, 0.1001, 0.1], &labels(), 0.1);
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["cold"]);
}

#[test]
fn test_raising_threshold_never_adds_candidates() {
    let probabilities = [0.05, 0.3, 0.12];
    let registry = labels();
    let mut previous = interpret(&probabilities, &registry, 0.0).len();
    for threshold in [0.05, 0.1, 0.2, 0.5, 1.0] {
        let count = interpret(&probabilities, &registry, threshold).len();
        assert!(count <= previous, "threshold {threshold} grew the candidate set");
        previous = count;
    }
}

#[test]
fn test_no_label_clearing_threshold_is_empty_not_error() {
    let candidates = interpret(&[0.02, 0.03, 0.05], &labels(), DEFAULT_THRESHOLD);
    assert!(candidates.is_empty());
}

#[test]
fn test_confidence_is_raw_probability_not_renormalized() {
    let candidates = interpret(&[0.6, 0.3, 0.05], &labels(), DEFAULT_THRESHOLD);
    let total: f32 = candidates.iter().map(|c| c.confidence).sum();
    assert!((total - 0.9).abs() < 1e-6);
}
