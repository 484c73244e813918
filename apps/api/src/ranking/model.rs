//! Multinomial logistic regression over declared experience values.
//!
//! Each distinct `experience_years` value in the batch becomes a class label.
//! Training is full-batch gradient descent from zero-initialized weights with
//! a fixed schedule — no RNG anywhere, so fitting is fully deterministic.

use crate::errors::AppError;

const EPOCHS: usize = 300;
const LEARNING_RATE: f64 = 0.5;

/// A fitted softmax classifier. Dropped as soon as the ranking call that
/// created it returns; nothing is cached across requests.
#[derive(Debug)]
pub struct SoftmaxRegression {
    /// Distinct target labels, ascending. One weight row per class.
    classes: Vec<u32>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl SoftmaxRegression {
    /// Fits the classifier on `features` (one row per sample) against the
    /// per-sample target labels in `targets`.
    ///
    /// Fails with `InsufficientData` when the targets hold fewer than two
    /// distinct values: a single-class fit is degenerate and the original
    /// classifier this mirrors refuses it as well.
    pub fn fit(features: &[Vec<f64>], targets: &[u32]) -> Result<Self, AppError> {
        debug_assert_eq!(features.len(), targets.len());

        let mut classes: Vec<u32> = targets.to_vec();
        classes.sort_unstable();
        classes.dedup();

        if classes.len() < 2 {
            return Err(AppError::InsufficientData(format!(
                "the classifier needs at least 2 distinct experience values to fit, got {}",
                classes.len()
            )));
        }

        let n_classes = classes.len();
        let n_features = features.first().map(Vec::len).unwrap_or(0);
        let n_samples = features.len() as f64;

        // Index of each sample's class in `classes` (targets are members by
        // construction).
        let target_idx: Vec<usize> = targets
            .iter()
            .map(|t| classes.binary_search(t).unwrap_or(0))
            .collect();

        let mut model = SoftmaxRegression {
            classes,
            weights: vec![vec![0.0; n_features]; n_classes],
            bias: vec![0.0; n_classes],
        };

        for _ in 0..EPOCHS {
            let mut grad_w = vec![vec![0.0; n_features]; n_classes];
            let mut grad_b = vec![0.0; n_classes];

            for (sample, &label) in features.iter().zip(&target_idx) {
                let probs = model.softmax(sample);
                for k in 0..n_classes {
                    let error = probs[k] - if k == label { 1.0 } else { 0.0 };
                    for (g, x) in grad_w[k].iter_mut().zip(sample) {
                        *g += error * x;
                    }
                    grad_b[k] += error;
                }
            }

            for k in 0..n_classes {
                for (w, g) in model.weights[k].iter_mut().zip(&grad_w[k]) {
                    *w -= LEARNING_RATE * g / n_samples;
                }
                model.bias[k] -= LEARNING_RATE * grad_b[k] / n_samples;
            }
        }

        Ok(model)
    }

    /// Predicted experience value: the class label with the maximal logit.
    /// Logit ties resolve to the lowest label.
    pub fn predict(&self, features: &[f64]) -> u32 {
        let logits = self.logits(features);
        let mut best = 0;
        for (k, logit) in logits.iter().enumerate() {
            if *logit > logits[best] {
                best = k;
            }
        }
        self.classes[best]
    }

    fn logits(&self, features: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }

    fn softmax(&self, features: &[f64]) -> Vec<f64> {
        let logits = self.logits(features);
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }
}
