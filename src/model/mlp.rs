//! Dense feed-forward classifier loaded from a JSON artifact.
//!
//! The training pipeline exports the network as plain JSON: per layer a
//! row-major weight matrix, a bias vector and an activation name, plus the
//! declared input and output lengths. The declared lengths let startup
//! validation catch vocabulary or label drift before the first request.
//! The network is small (a few hundred units), so a hand-rolled
//! matrix-vector product keeps the service free of an inference runtime.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AnalyzerError, Result};
use crate::model::Classifier;

/// Activation applied after a dense layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// max(0, x)
    Relu,
    /// Normalized exponentials over the layer output
    Softmax,
    /// Identity
    Linear,
}

/// One dense layer: `output = activation(weights * input + biases)`
#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    /// Row-major weight matrix, one row per output unit
    pub weights: Vec<Vec<f32>>,
    /// One bias per output unit
    pub biases: Vec<f32>,
    /// Activation applied to the layer output
    pub activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut output: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + bias
            })
            .collect();
        match self.activation {
            Activation::Relu => {
                for value in &mut output {
                    if *value < 0.0 {
                        *value = 0.0;
                    }
                }
            }
            Activation::Softmax => softmax_in_place(&mut output),
            Activation::Linear => {}
        }
        output
    }
}

/// Feed-forward classifier with shape metadata validated at load time
#[derive(Debug, Clone, Deserialize)]
pub struct MlpClassifier {
    input_len: usize,
    output_len: usize,
    layers: Vec<DenseLayer>,
}

impl MlpClassifier {
    /// Build a classifier from its parts, validating the shape chain
    pub fn new(input_len: usize, output_len: usize, layers: Vec<DenseLayer>) -> Result<Self> {
        let model = Self {
            input_len,
            output_len,
            layers,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load and validate the model artifact
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| AnalyzerError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Check that layer dimensions chain correctly and match the declared
    /// input and output lengths. Any inconsistency is startup-fatal.
    fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(AnalyzerError::artifact("model has no layers"));
        }
        let mut width = self.input_len;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.weights.is_empty() {
                return Err(AnalyzerError::artifact(format!("layer {i} has no units")));
            }
            if layer.weights.len() != layer.biases.len() {
                return Err(AnalyzerError::artifact(format!(
                    "layer {i} has {} weight rows but {} biases",
                    layer.weights.len(),
                    layer.biases.len()
                )));
            }
            for row in &layer.weights {
                if row.len() != width {
                    return Err(AnalyzerError::artifact(format!(
                        "layer {i} expects rows of length {width}, found {}",
                        row.len()
                    )));
                }
            }
            width = layer.weights.len();
        }
        if width != self.output_len {
            return Err(AnalyzerError::artifact(format!(
                "model declares {} outputs but the final layer has {width} units",
                self.output_len
            )));
        }
        Ok(())
    }
}

impl Classifier for MlpClassifier {
    fn input_len(&self) -> usize {
        self.input_len
    }

    fn output_len(&self) -> usize {
        self.output_len
    }

    fn predict(&self, features: &[f32]) -> Result<Vec<f32>> {
        if features.len() != self.input_len {
            return Err(AnalyzerError::ShapeMismatch {
                expected: self.input_len,
                got: features.len(),
            });
        }
        let mut current = features.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        Ok(current)
    }
}

/// Numerically stable softmax: shift by the max before exponentiating
fn softmax_in_place(values: &mut [f32]) {
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut sum = 0.0;
    for value in values.iter_mut() {
        *value = (*value - max).exp();
        sum += *value;
    }
    for value in values.iter_mut() {
        *value /= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_layer(width: usize, activation: Activation) -> DenseLayer {
        let weights = (0..width)
            .map(|i| {
                let mut row = vec![0.0; width];
                row[i] = 1.0;
                row
            })
            .collect();
        DenseLayer {
            weights,
            biases: vec![0.0; width],
            activation,
        }
    }

    #[test]
    fn softmax_sums_to_one() {
        let mut values = vec![1.0, 2.0, 3.0];
        softmax_in_place(&mut values);
        let sum: f32 = values.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(values[2] > values[1] && values[1] > values[0]);
    }

    #[test]
    fn relu_clamps_negatives() {
        let layer = identity_layer(3, Activation::Relu);
        let output = layer.forward(&[-1.0, 0.0, 2.0]);
        assert_eq!(output, vec![0.0, 0.0, 2.0]);
    }

    #[test]
    fn predict_rejects_wrong_length() {
        let model = MlpClassifier::new(3, 3, vec![identity_layer(3, Activation::Softmax)]).unwrap();
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn validate_rejects_broken_shape_chain() {
        let bad = DenseLayer {
            weights: vec![vec![1.0, 2.0]],
            biases: vec![0.0],
            activation: Activation::Linear,
        };
        // Declared input length is 3 but the row has 2 columns.
        assert!(MlpClassifier::new(3, 1, vec![bad]).is_err());
    }

    #[test]
    fn validate_rejects_output_len_drift() {
        let layer = identity_layer(2, Activation::Softmax);
        assert!(MlpClassifier::new(2, 5, vec![layer]).is_err());
    }
}
