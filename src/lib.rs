//! Frontera: binary logistic regression in pure Rust.
//!
//! Frontera trains a two-class logistic regression model with batch
//! gradient updates on synthetically generated Gaussian data,
//! tracking per-epoch loss and held-out accuracy and exposing the
//! learned decision boundary.
//!
//! # Quick Start
//!
//! ```
//! use frontera::prelude::*;
//!
//! // Linearly separable binary data
//! let x = Matrix::from_vec(4, 2, vec![
//!     0.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 0.0,
//!     1.0, 1.0,
//! ]).unwrap();
//! let y = Vector::from_slice(&[0.0, 0.0, 1.0, 1.0]);
//!
//! // Train logistic regression
//! let mut model = LogisticRegression::new()
//!     .with_learning_rate(0.5)
//!     .with_n_epochs(1000)
//!     .with_weight_init(WeightInit::Zeros);
//! model.fit(&x, &y).unwrap();
//!
//! // Make predictions
//! let predictions = model.predict(&x);
//! let acc = model.score(&x, &y);
//! assert_eq!(predictions.len(), 4);
//! assert!(acc > 0.99);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`classification`]: Logistic regression, gradient updates, decision boundary
//! - [`loss`]: Binary cross-entropy and its gradient
//! - [`metrics`]: Evaluation metrics
//! - [`model_selection`]: Train/test splitting
//! - [`synthetic`]: Gaussian cluster generation
//! - [`error`]: Error types
//! - [`traits`]: Estimator API contract

pub mod classification;
pub mod error;
pub mod loss;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod synthetic;
pub mod traits;
