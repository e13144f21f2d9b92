//! Classifier abstraction and the bundled feed-forward implementation.
//!
//! The pipeline only ever sees the [`Classifier`] trait: a feature vector
//! goes in, a probability distribution over the label registry comes out.
//! Swapping the model technology touches nothing outside this module.

pub mod mlp;

pub use mlp::MlpClassifier;

use crate::error::Result;

/// Opaque disease classifier.
///
/// Implementations must be deterministic, side-effect-free and safe to call
/// concurrently through a shared reference.
pub trait Classifier: Send + Sync {
    /// Feature vector length the classifier was trained on
    fn input_len(&self) -> usize;

    /// Number of output labels
    fn output_len(&self) -> usize;

    /// Run inference on one feature vector.
    ///
    /// Returns one probability per label, in label-registry order, exactly
    /// as the model produced it (no re-normalization). A vector of the
    /// wrong length is a shape mismatch error, never truncated or padded.
    fn predict(&self, features: &[f32]) -> Result<Vec<f32>>;
}
