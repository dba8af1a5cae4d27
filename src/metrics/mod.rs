//! Evaluation metrics for ML models.

use crate::primitives::Vector;

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
///
/// # Returns
///
/// Accuracy score between 0.0 and 1.0
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use frontera::metrics::accuracy;
/// use frontera::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[0.0, 1.0, 1.0, 0.0]);
/// let y_pred = Vector::from_slice(&[0.0, 1.0, 0.0, 0.0]);
/// let acc = accuracy(&y_pred, &y_true);
/// assert!((acc - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_pred: &Vector<f32>, y_true: &Vector<f32>) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f32 / y_true.len() as f32
}
