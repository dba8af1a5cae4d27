//! Loss functions for training machine learning models.
//!
//! # Usage
//!
//! ```
//! use frontera::loss::{binary_cross_entropy, binary_cross_entropy_gradient};
//! use frontera::primitives::{Matrix, Vector};
//!
//! let x = Matrix::from_vec(2, 2, vec![0.0, 0.0, 1.0, 1.0]).unwrap();
//! let y = Vector::from_slice(&[0.0, 1.0]);
//! let w = Vector::from_slice(&[0.0, 0.0]);
//!
//! let loss = binary_cross_entropy(&y, &x, &w, 0.0).unwrap();
//! let (grad_w, grad_b) = binary_cross_entropy_gradient(&y, &x, &w, 0.0).unwrap();
//! assert!((loss - 1.0).abs() < 1e-6);
//! assert!(grad_b.abs() < 1e-6);
//! assert_eq!(grad_w.len(), 2);
//! ```

use crate::classification::sigmoid;
use crate::error::{FronteraError, Result};
use crate::primitives::{Matrix, Vector};

/// Confidences are clamped into (EPS, 1 - EPS) before taking logs.
const EPS: f32 = 1e-7;

fn check_shapes(y_true: &Vector<f32>, x: &Matrix<f32>, w: &Vector<f32>) -> Result<()> {
    let (n_samples, n_features) = x.shape();

    if n_samples != y_true.len() {
        return Err(FronteraError::ShapeMismatch {
            rows: n_samples,
            labels: y_true.len(),
        });
    }
    if n_features != w.len() {
        return Err(FronteraError::DimensionMismatch {
            expected: w.len(),
            actual: n_features,
        });
    }
    if n_samples == 0 {
        return Err("Cannot evaluate loss on an empty dataset".into());
    }

    Ok(())
}

/// Mean binary cross-entropy of the dataset under parameters (w, b).
///
/// ```text
/// BCE = -(1/m) * Σ [y_i * log2(h_i) + (1 - y_i) * log2(1 - h_i)]
/// ```
///
/// where `h_i = sigmoid(dot(x_i, w) + b)`. Uses the base-2 logarithm;
/// confidences are clamped into an open interval strictly inside
/// (0, 1) so the logs stay finite.
///
/// # Arguments
///
/// * `y_true` - Binary labels (0 or 1), one per sample
/// * `x` - Feature matrix (`n_samples` × `n_features`)
/// * `w` - Weight vector (`n_features`)
/// * `b` - Bias term
///
/// # Errors
///
/// Returns `ShapeMismatch` if the row count disagrees with the label
/// count, `DimensionMismatch` if the column count disagrees with the
/// weight length, and an error for an empty dataset.
pub fn binary_cross_entropy(
    y_true: &Vector<f32>,
    x: &Matrix<f32>,
    w: &Vector<f32>,
    b: f32,
) -> Result<f32> {
    check_shapes(y_true, x, w)?;

    let (n_samples, n_features) = x.shape();
    let mut err = 0.0;

    for i in 0..n_samples {
        let mut z = b;
        for j in 0..n_features {
            z += w[j] * x.get(i, j);
        }
        let h = sigmoid(z).clamp(EPS, 1.0 - EPS);
        err += y_true[i] * h.log2() + (1.0 - y_true[i]) * (1.0 - h).log2();
    }

    Ok(-err / n_samples as f32)
}

/// Mean gradient of the log-likelihood with respect to (w, b).
///
/// ```text
/// grad_w = (1/m) * Σ (y_i - h_i) * x_i
/// grad_b = (1/m) * Σ (y_i - h_i)
/// ```
///
/// Note the (y - h) sign: this is the ascent direction on the
/// log-likelihood, so callers apply it ADDITIVELY to the parameters.
/// Adding this gradient is equivalent to descending the cross-entropy
/// loss; do not negate it again.
///
/// # Errors
///
/// Same shape preconditions as [`binary_cross_entropy`].
pub fn binary_cross_entropy_gradient(
    y_true: &Vector<f32>,
    x: &Matrix<f32>,
    w: &Vector<f32>,
    b: f32,
) -> Result<(Vector<f32>, f32)> {
    check_shapes(y_true, x, w)?;

    let (n_samples, n_features) = x.shape();
    let mut grad_w = vec![0.0; n_features];
    let mut grad_b = 0.0;

    for i in 0..n_samples {
        let mut z = b;
        for j in 0..n_features {
            z += w[j] * x.get(i, j);
        }
        let residual = y_true[i] - sigmoid(z);
        grad_b += residual;
        for (j, grad) in grad_w.iter_mut().enumerate() {
            *grad += residual * x.get(i, j);
        }
    }

    let m = n_samples as f32;
    grad_b /= m;
    for grad in &mut grad_w {
        *grad /= m;
    }

    Ok((Vector::from_vec(grad_w), grad_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_dataset() -> (Matrix<f32>, Vector<f32>) {
        let x = Matrix::from_vec(2, 2, vec![0.0, 0.0, 1.0, 1.0]).expect("2x2 matrix");
        let y = Vector::from_slice(&[0.0, 1.0]);
        (x, y)
    }

    #[test]
    fn test_bce_zero_parameters() {
        // With w = 0, b = 0 every confidence is 0.5, so each sample
        // contributes log2(0.5) = -1 and the mean loss is exactly 1.
        let (x, y) = two_point_dataset();
        let w = Vector::zeros(2);

        let loss = binary_cross_entropy(&y, &x, &w, 0.0).expect("shapes match");
        assert!((loss - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bce_non_negative() {
        let (x, y) = two_point_dataset();
        let w = Vector::from_slice(&[1.5, -0.3]);

        let loss = binary_cross_entropy(&y, &x, &w, 0.2).expect("shapes match");
        assert!(loss >= 0.0);
    }

    #[test]
    fn test_bce_finite_under_extreme_parameters() {
        // Saturated confidences hit the clamp instead of log2(0).
        let (x, y) = two_point_dataset();
        let w = Vector::from_slice(&[1e4, 1e4]);

        let loss = binary_cross_entropy(&y, &x, &w, -1e4).expect("shapes match");
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }

    #[test]
    fn test_bce_shape_mismatch() {
        let x = Matrix::from_vec(5, 2, vec![0.0; 10]).expect("5x2 matrix");
        let y = Vector::from_slice(&[0.0, 1.0, 0.0, 1.0]);
        let w = Vector::zeros(2);

        let result = binary_cross_entropy(&y, &x, &w, 0.0);
        assert!(matches!(
            result,
            Err(crate::error::FronteraError::ShapeMismatch { rows: 5, labels: 4 })
        ));
    }

    #[test]
    fn test_bce_dimension_mismatch() {
        let (x, y) = two_point_dataset();
        let w = Vector::zeros(3);

        let result = binary_cross_entropy(&y, &x, &w, 0.0);
        assert!(matches!(
            result,
            Err(crate::error::FronteraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_gradient_pinned_arithmetic() {
        // From zero parameters both confidences are 0.5:
        //   grad_w = ((0 - 0.5)*(0,0) + (1 - 0.5)*(1,1)) / 2 = (0.25, 0.25)
        //   grad_b = ((0 - 0.5) + (1 - 0.5)) / 2 = 0
        let (x, y) = two_point_dataset();
        let w = Vector::zeros(2);

        let (grad_w, grad_b) =
            binary_cross_entropy_gradient(&y, &x, &w, 0.0).expect("shapes match");
        assert!((grad_w[0] - 0.25).abs() < 1e-6);
        assert!((grad_w[1] - 0.25).abs() < 1e-6);
        assert!(grad_b.abs() < 1e-6);
    }

    #[test]
    fn test_gradient_shape_mismatch() {
        let x = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("3x2 matrix");
        let y = Vector::from_slice(&[0.0, 1.0]);
        let w = Vector::zeros(2);

        let result = binary_cross_entropy_gradient(&y, &x, &w, 0.0);
        assert!(matches!(
            result,
            Err(crate::error::FronteraError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let x = Matrix::from_vec(0, 2, vec![]).expect("0x2 matrix");
        let y = Vector::from_vec(vec![]);
        let w = Vector::zeros(2);

        assert!(binary_cross_entropy(&y, &x, &w, 0.0).is_err());
        assert!(binary_cross_entropy_gradient(&y, &x, &w, 0.0).is_err());
    }
}
