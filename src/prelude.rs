//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use frontera::prelude::*;
//! ```

pub use crate::classification::{
    DecisionBoundary, LogisticRegression, TrainingHistory, WeightInit,
};
pub use crate::metrics::accuracy;
pub use crate::model_selection::train_test_split;
pub use crate::primitives::{Matrix, Vector};
pub use crate::synthetic::{make_blobs, GaussianBlob};
pub use crate::traits::Estimator;
