//! Classification algorithms.
//!
//! This module implements binary classification via logistic
//! regression: sigmoid hypothesis, batch gradient training with a
//! fixed epoch count, thresholded prediction, and decision-boundary
//! extraction for two-feature models.
//!
//! # Example
//!
//! ```
//! use frontera::classification::{LogisticRegression, WeightInit};
//! use frontera::prelude::*;
//!
//! // Binary classification data
//! let x = Matrix::from_vec(4, 2, vec![
//!     0.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 0.0,
//!     1.0, 1.0,
//! ]).expect("Matrix dimensions match data length");
//! let y = Vector::from_slice(&[0.0, 0.0, 1.0, 1.0]);
//!
//! let mut model = LogisticRegression::new()
//!     .with_learning_rate(0.5)
//!     .with_n_epochs(1000)
//!     .with_weight_init(WeightInit::Zeros);
//! model.fit(&x, &y).expect("Training data is valid with 4 samples");
//! let predictions = model.predict(&x);
//!
//! assert_eq!(predictions.len(), 4);
//! for &pred in predictions.iter() {
//!     assert!(pred == 0.0 || pred == 1.0);
//! }
//! ```

use crate::error::{FronteraError, Result};
use crate::loss::{binary_cross_entropy, binary_cross_entropy_gradient};
use crate::metrics;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Sigmoid activation function: σ(z) = 1 / (1 + e^(-z)).
///
/// Maps any real input into (0, 1). Extreme negative inputs saturate
/// to 0.0 in f32; inputs in this crate stay bounded and the loss
/// clamps confidences before taking logs.
///
/// # Examples
///
/// ```
/// use frontera::classification::sigmoid;
///
/// assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
/// assert!(sigmoid(10.0) > 0.99);
/// assert!(sigmoid(-10.0) < 0.01);
/// ```
#[must_use]
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Predicted probability that `x` belongs to the positive class:
/// sigmoid(dot(x, w) + b).
///
/// # Errors
///
/// Returns `DimensionMismatch` if the feature vector and weight
/// vector lengths disagree.
pub fn hypothesis(x: &Vector<f32>, w: &Vector<f32>, b: f32) -> Result<f32> {
    if x.len() != w.len() {
        return Err(FronteraError::DimensionMismatch {
            expected: w.len(),
            actual: x.len(),
        });
    }
    Ok(sigmoid(x.dot(w) + b))
}

/// One batch gradient update over the full dataset.
///
/// Returns `(loss_before_update, new_w, new_b)` where the loss is
/// evaluated at the INCOMING parameters, then
///
/// ```text
/// new_w = w + learning_rate * grad_w
/// new_b = b + learning_rate * grad_b
/// ```
///
/// The gradient is added, not subtracted: it points up the
/// log-likelihood (see [`binary_cross_entropy_gradient`]), so the
/// additive update descends the cross-entropy loss. Caller-owned
/// parameters are never mutated; adopting the returned values is the
/// caller's responsibility.
///
/// The learning rate is deliberately not validated here: a zero rate
/// makes the step an identity, which callers may rely on. Positivity
/// is enforced where training runs are configured, in
/// [`LogisticRegression::fit`].
///
/// # Errors
///
/// Propagates the shape preconditions of the loss and gradient
/// evaluators.
pub fn gradient_step(
    x: &Matrix<f32>,
    y: &Vector<f32>,
    w: &Vector<f32>,
    b: f32,
    learning_rate: f32,
) -> Result<(f32, Vector<f32>, f32)> {
    let loss = binary_cross_entropy(y, x, w, b)?;
    let (grad_w, grad_b) = binary_cross_entropy_gradient(y, x, w, b)?;

    let new_w: Vec<f32> = w
        .iter()
        .zip(grad_w.iter())
        .map(|(wj, gj)| wj + learning_rate * gj)
        .collect();
    let new_b = b + learning_rate * grad_b;

    Ok((loss, Vector::from_vec(new_w), new_b))
}

/// Parameter initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightInit {
    /// Draw each weight and the bias uniformly from [0, 1).
    #[default]
    Uniform,
    /// Start from all-zero weights and bias.
    Zeros,
}

/// Per-epoch training record.
///
/// `loss[k]` is the cross-entropy measured immediately BEFORE epoch
/// k's parameter update; `accuracy[k]` is the held-out accuracy
/// measured with the parameters adopted by that update. Both grow by
/// exactly one entry per completed epoch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Cross-entropy loss per epoch (pre-update)
    pub loss: Vec<f32>,
    /// Held-out accuracy per epoch (post-update)
    pub accuracy: Vec<f32>,
}

impl TrainingHistory {
    /// Number of completed epochs.
    #[must_use]
    pub fn n_epochs(&self) -> usize {
        self.loss.len()
    }

    /// Loss recorded for the last epoch, if any.
    #[must_use]
    pub fn final_loss(&self) -> Option<f32> {
        self.loss.last().copied()
    }

    /// Held-out accuracy recorded for the last epoch, if any.
    #[must_use]
    pub fn final_accuracy(&self) -> Option<f32> {
        self.accuracy.last().copied()
    }
}

/// The line in feature space where the predicted probability is
/// exactly 0.5, expressed as `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionBoundary {
    /// Slope of the boundary line
    pub slope: f32,
    /// Intercept of the boundary line
    pub intercept: f32,
}

impl DecisionBoundary {
    /// Second coordinate of the boundary at the given first coordinate.
    #[must_use]
    pub fn y_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }
}

/// Logistic Regression classifier for binary classification.
///
/// Uses sigmoid activation and binary cross-entropy loss with batch
/// gradient optimization. Training runs for a fixed number of epochs;
/// there is no convergence check and no early stopping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Model coefficients (weights)
    weights: Option<Vector<f32>>,
    /// Intercept (bias) term
    bias: f32,
    /// Learning rate for gradient updates
    learning_rate: f32,
    /// Number of training epochs
    n_epochs: usize,
    /// Parameter initialization scheme
    weight_init: WeightInit,
    /// Random seed for reproducible initialization
    random_state: Option<u64>,
}

impl LogisticRegression {
    /// Creates a new logistic regression classifier with default
    /// parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use frontera::classification::LogisticRegression;
    ///
    /// let model = LogisticRegression::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
            learning_rate: 0.1,
            n_epochs: 1000,
            weight_init: WeightInit::default(),
            random_state: None,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the number of training epochs.
    #[must_use]
    pub fn with_n_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }

    /// Sets the parameter initialization scheme.
    #[must_use]
    pub fn with_weight_init(mut self, weight_init: WeightInit) -> Self {
        self.weight_init = weight_init;
        self
    }

    /// Sets the random seed for reproducible initialization.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    fn validate_fit_inputs(&self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(FronteraError::InvalidLearningRate {
                value: self.learning_rate,
            });
        }

        let (n_samples, _) = x.shape();
        if n_samples != y.len() {
            return Err(FronteraError::ShapeMismatch {
                rows: n_samples,
                labels: y.len(),
            });
        }
        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }

        for &label in y.iter() {
            if label != 0.0 && label != 1.0 {
                return Err("Labels must be 0 or 1 for binary classification".into());
            }
        }

        Ok(())
    }

    fn init_parameters(&mut self, n_features: usize) {
        match self.weight_init {
            WeightInit::Zeros => {
                self.weights = Some(Vector::zeros(n_features));
                self.bias = 0.0;
            }
            WeightInit::Uniform => {
                let mut rng = match self.random_state {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let w: Vec<f32> = (0..n_features).map(|_| rng.gen_range(0.0..1.0)).collect();
                self.weights = Some(Vector::from_vec(w));
                self.bias = rng.gen_range(0.0..1.0);
            }
        }
    }

    fn fit_impl(
        &mut self,
        x: &Matrix<f32>,
        y: &Vector<f32>,
        validation: Option<(&Matrix<f32>, &Vector<f32>)>,
    ) -> Result<TrainingHistory> {
        self.validate_fit_inputs(x, y)?;
        if let Some((x_val, y_val)) = validation {
            if x_val.n_rows() != y_val.len() {
                return Err(FronteraError::ShapeMismatch {
                    rows: x_val.n_rows(),
                    labels: y_val.len(),
                });
            }
            if x_val.n_cols() != x.n_cols() {
                return Err(FronteraError::DimensionMismatch {
                    expected: x.n_cols(),
                    actual: x_val.n_cols(),
                });
            }
        }

        self.init_parameters(x.n_cols());
        let mut history = TrainingHistory::default();

        for _ in 0..self.n_epochs {
            let w = self.weights.as_ref().expect("parameters initialized above");
            let (loss_before, new_w, new_b) =
                gradient_step(x, y, w, self.bias, self.learning_rate)?;

            self.weights = Some(new_w);
            self.bias = new_b;

            history.loss.push(loss_before);
            if let Some((x_val, y_val)) = validation {
                history.accuracy.push(self.evaluate(x_val, y_val)?);
            }
        }

        Ok(history)
    }

    /// Trains while tracking per-epoch loss and held-out accuracy.
    ///
    /// Each epoch performs one full-batch [`gradient_step`], adopts
    /// the returned parameters, scores the validation set with the
    /// newly adopted parameters, and appends both readings to the
    /// history. Exactly `n_epochs` epochs run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLearningRate` for a non-positive rate,
    /// `ShapeMismatch` if either split's row count disagrees with its
    /// label count, and an error for empty or non-binary training
    /// labels.
    pub fn fit_with_validation(
        &mut self,
        x_train: &Matrix<f32>,
        y_train: &Vector<f32>,
        x_val: &Matrix<f32>,
        y_val: &Vector<f32>,
    ) -> Result<TrainingHistory> {
        self.fit_impl(x_train, y_train, Some((x_val, y_val)))
    }

    /// Predicts probabilities for samples.
    ///
    /// Returns probability of class 1 for each sample.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted, or if the feature count
    /// disagrees with the fitted weights.
    #[must_use]
    pub fn predict_proba(&self, x: &Matrix<f32>) -> Vector<f32> {
        let coef = self.weights.as_ref().expect("Model not fitted yet");
        assert_eq!(
            x.n_cols(),
            coef.len(),
            "Feature count must match fitted weights"
        );

        let (n_samples, _) = x.shape();
        let mut probas = Vec::with_capacity(n_samples);
        for row in 0..n_samples {
            let mut z = self.bias;
            for col in 0..coef.len() {
                z += coef[col] * x.get(row, col);
            }
            probas.push(sigmoid(z));
        }

        Vector::from_vec(probas)
    }

    /// Computes accuracy on a labeled dataset.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the row count disagrees with the
    /// label count, and an error for an empty dataset.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    pub fn evaluate(&self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<f32> {
        if x.n_rows() != y.len() {
            return Err(FronteraError::ShapeMismatch {
                rows: x.n_rows(),
                labels: y.len(),
            });
        }
        if y.is_empty() {
            return Err("Cannot evaluate accuracy on an empty dataset".into());
        }

        let predictions = self.predict(x);
        Ok(metrics::accuracy(&predictions, y))
    }

    /// Boundary line of a fitted two-feature model, where
    /// `w[0] * x + w[1] * y + b = 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted,
    /// `DimensionMismatch` if the model does not have exactly two
    /// features, and `DegenerateWeight` if `w[1]` is zero (the line
    /// would be vertical and its slope undefined).
    pub fn decision_boundary(&self) -> Result<DecisionBoundary> {
        let coef = self.weights.as_ref().ok_or("Model not fitted yet")?;

        if coef.len() != 2 {
            return Err(FronteraError::DimensionMismatch {
                expected: 2,
                actual: coef.len(),
            });
        }
        if coef[1] == 0.0 {
            return Err(FronteraError::DegenerateWeight {
                index: 1,
                value: coef[1],
            });
        }

        Ok(DecisionBoundary {
            slope: -coef[0] / coef[1],
            intercept: -self.bias / coef[1],
        })
    }

    /// Get model coefficients (weights).
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f32> {
        self.weights.as_ref().expect("Model not fitted")
    }

    /// Get intercept (bias) term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.bias
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for LogisticRegression {
    /// Fits the model for the configured number of epochs.
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        self.fit_impl(x, y, None).map(|_| ())
    }

    /// Predicts class labels (0.0 or 1.0) for samples.
    ///
    /// A probability of exactly 0.5 maps to the positive class.
    fn predict(&self, x: &Matrix<f32>) -> Vector<f32> {
        let probas = self.predict_proba(x);
        let labels: Vec<f32> = probas
            .iter()
            .map(|&p| if p >= 0.5 { 1.0 } else { 0.0 })
            .collect();
        Vector::from_vec(labels)
    }

    /// Computes accuracy score on test data.
    fn score(&self, x: &Matrix<f32>, y: &Vector<f32>) -> f32 {
        let predictions = self.predict(x);
        metrics::accuracy(&predictions, y)
    }
}

#[cfg(test)]
mod tests;
