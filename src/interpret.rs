//! Multi-label interpretation of the classifier output.

use serde::Serialize;

use crate::registry::LabelRegistry;

/// Probability a label must strictly exceed to be reported
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// A disease whose predicted probability cleared the reporting threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseCandidate {
    /// Disease name from the label registry
    pub name: String,
    /// Raw classifier probability, not renormalized after filtering
    pub confidence: f32,
}

/// Threshold the distribution into candidates, preserving label order.
///
/// The comparison is strictly greater: a probability equal to the threshold
/// is excluded. Several labels can qualify at once, and none qualifying is
/// a valid, empty result. Candidates are never re-sorted by confidence.
#[must_use]
pub fn interpret(
    probabilities: &[f32],
    labels: &LabelRegistry,
    threshold: f32,
) -> Vec<DiseaseCandidate> {
    labels
        .names()
        .iter()
        .zip(probabilities)
        .filter(|&(_, &p)| p > threshold)
        .map(|(name, &p)| DiseaseCandidate {
            name: name.clone(),
            confidence: p,
        })
        .collect()
}
