//! Synthetic dataset generation.
//!
//! Produces labeled point clouds for classifier demos and tests:
//! each cluster is a multivariate Gaussian described by a mean vector
//! and a covariance matrix, sampled through the covariance's Cholesky
//! factor.

use crate::error::{FronteraError, Result};
use crate::primitives::{Matrix, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A Gaussian cluster specification: mean vector and covariance matrix.
///
/// # Examples
///
/// ```
/// use frontera::primitives::{Matrix, Vector};
/// use frontera::synthetic::GaussianBlob;
///
/// let blob = GaussianBlob::new(
///     Vector::from_slice(&[1.0, 0.5]),
///     Matrix::from_vec(2, 2, vec![1.0, 0.1, 0.1, 1.2]).unwrap(),
/// );
/// let spherical = GaussianBlob::isotropic(Vector::from_slice(&[4.0, 5.0]), 0.5);
/// # let _ = (blob, spherical);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianBlob {
    mean: Vector<f32>,
    cov: Matrix<f32>,
}

impl GaussianBlob {
    /// Creates a blob from a mean vector and a full covariance matrix.
    #[must_use]
    pub fn new(mean: Vector<f32>, cov: Matrix<f32>) -> Self {
        Self { mean, cov }
    }

    /// Creates a blob with covariance `variance * I`.
    #[must_use]
    pub fn isotropic(mean: Vector<f32>, variance: f32) -> Self {
        let d = mean.len();
        let mut cov = Matrix::zeros(d, d);
        for i in 0..d {
            cov.set(i, i, variance);
        }
        Self { mean, cov }
    }
}

/// Box-Muller transform for a standard normal draw.
fn standard_normal(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen_range(0.0001_f32..1.0_f32);
    let u2: f32 = rng.gen_range(0.0_f32..1.0_f32);
    (-2.0_f32 * u1.ln()).sqrt() * (2.0_f32 * std::f32::consts::PI * u2).cos()
}

/// Samples `n_samples` points from each blob and labels them with the
/// blob's index (as f32).
///
/// Points are emitted in blob order, unshuffled; randomizing the
/// order is the splitter's job
/// ([`crate::model_selection::train_test_split`]). Each point is
/// `mean + L * z` where `L` is the lower Cholesky factor of the
/// blob's covariance and `z` is a vector of iid standard normals.
///
/// # Returns
///
/// Tuple of (features, labels) with `blobs.len() * n_samples` rows.
///
/// # Errors
///
/// Returns an error if no blobs are given, `n_samples` is zero, a
/// blob's mean or covariance dimensions disagree, or a covariance is
/// not positive definite.
///
/// # Examples
///
/// ```
/// use frontera::primitives::Vector;
/// use frontera::synthetic::{make_blobs, GaussianBlob};
///
/// let blobs = [
///     GaussianBlob::isotropic(Vector::from_slice(&[0.0, 0.0]), 1.0),
///     GaussianBlob::isotropic(Vector::from_slice(&[10.0, 10.0]), 1.0),
/// ];
/// let (x, y) = make_blobs(&blobs, 100, Some(42)).unwrap();
/// assert_eq!(x.shape(), (200, 2));
/// assert_eq!(y.len(), 200);
/// ```
pub fn make_blobs(
    blobs: &[GaussianBlob],
    n_samples: usize,
    random_state: Option<u64>,
) -> Result<(Matrix<f32>, Vector<f32>)> {
    if blobs.is_empty() {
        return Err("make_blobs requires at least one blob".into());
    }
    if n_samples == 0 {
        return Err("n_samples must be positive".into());
    }

    let n_features = blobs[0].mean.len();
    if n_features == 0 {
        return Err("Blob mean must have at least one dimension".into());
    }
    for blob in blobs {
        if blob.mean.len() != n_features {
            return Err(FronteraError::DimensionMismatch {
                expected: n_features,
                actual: blob.mean.len(),
            });
        }
        if blob.cov.shape() != (n_features, n_features) {
            return Err(FronteraError::DimensionMismatch {
                expected: n_features,
                actual: blob.cov.n_rows(),
            });
        }
    }

    let mut rng = match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n_total = blobs.len() * n_samples;
    let mut data = Vec::with_capacity(n_total * n_features);
    let mut labels = Vec::with_capacity(n_total);

    for (label, blob) in blobs.iter().enumerate() {
        let l = blob.cov.cholesky()?;

        for _ in 0..n_samples {
            let z: Vec<f32> = (0..n_features).map(|_| standard_normal(&mut rng)).collect();
            for j in 0..n_features {
                let mut value = blob.mean[j];
                for (k, &z_k) in z.iter().enumerate().take(j + 1) {
                    value += l.get(j, k) * z_k;
                }
                data.push(value);
            }
            labels.push(label as f32);
        }
    }

    let x = Matrix::from_vec(n_total, n_features, data)?;
    Ok((x, Vector::from_vec(labels)))
}
