//! Tests for classification module.

use super::*;

fn separable_dataset() -> (Matrix<f32>, Vector<f32>) {
    let x = Matrix::from_vec(
        4,
        2,
        vec![
            0.0, 0.0, // class 0
            0.0, 1.0, // class 0
            1.0, 0.0, // class 1
            1.0, 1.0, // class 1
        ],
    )
    .expect("4x2 matrix with 8 values");
    let y = Vector::from_slice(&[0.0, 0.0, 1.0, 1.0]);
    (x, y)
}

#[test]
fn test_sigmoid() {
    assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
    assert!(sigmoid(10.0) > 0.99);
    assert!(sigmoid(-10.0) < 0.01);
}

#[test]
fn test_sigmoid_open_interval() {
    for &z in &[-20.0_f32, -5.0, -1.0, 0.0, 1.0, 5.0, 20.0] {
        let s = sigmoid(z);
        assert!(s > 0.0 && s < 1.0, "sigmoid({z}) = {s} left (0, 1)");
    }
}

#[test]
fn test_sigmoid_monotone() {
    assert!(sigmoid(-1.0) < sigmoid(0.0));
    assert!(sigmoid(0.0) < sigmoid(1.0));
}

#[test]
fn test_hypothesis_range() {
    let x = Vector::from_slice(&[2.0, -3.0]);
    let w = Vector::from_slice(&[0.5, 0.25]);
    let h = hypothesis(&x, &w, 0.1).expect("lengths match");
    assert!(h > 0.0 && h < 1.0);
}

#[test]
fn test_hypothesis_dimension_mismatch() {
    let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let w = Vector::from_slice(&[0.5, 0.25]);
    let result = hypothesis(&x, &w, 0.0);
    assert!(matches!(
        result,
        Err(FronteraError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn test_gradient_step_pinned_arithmetic() {
    // Two points, one per class, from zero parameters: both
    // confidences are 0.5, so loss = 1 (base-2), grad_w = (0.25, 0.25),
    // grad_b = 0, and one step at rate 0.1 lands on (0.025, 0.025).
    let x = Matrix::from_vec(2, 2, vec![0.0, 0.0, 1.0, 1.0]).expect("2x2 matrix");
    let y = Vector::from_slice(&[0.0, 1.0]);
    let w = Vector::zeros(2);

    let (loss, new_w, new_b) = gradient_step(&x, &y, &w, 0.0, 0.1).expect("shapes match");

    assert!((loss - 1.0).abs() < 1e-6);
    assert!((new_w[0] - 0.025).abs() < 1e-6);
    assert!((new_w[1] - 0.025).abs() < 1e-6);
    assert!(new_b.abs() < 1e-6);
}

#[test]
fn test_gradient_step_zero_rate_is_identity() {
    let (x, y) = separable_dataset();
    let w = Vector::from_slice(&[0.3, -0.7]);
    let b = 0.2;

    let (loss, new_w, new_b) = gradient_step(&x, &y, &w, b, 0.0).expect("shapes match");

    assert_eq!(new_w, w);
    assert!((new_b - b).abs() < 1e-9);

    let independent = binary_cross_entropy(&y, &x, &w, b).expect("shapes match");
    assert!((loss - independent).abs() < 1e-9);
}

#[test]
fn test_gradient_step_does_not_mutate_inputs() {
    let (x, y) = separable_dataset();
    let w = Vector::from_slice(&[0.1, 0.2]);

    let (_, new_w, _) = gradient_step(&x, &y, &w, 0.0, 0.5).expect("shapes match");

    assert!((w[0] - 0.1).abs() < 1e-9);
    assert!((w[1] - 0.2).abs() < 1e-9);
    assert!(new_w != w);
}

#[test]
fn test_logistic_regression_new() {
    let model = LogisticRegression::new();
    assert!(model.weights.is_none());
    assert_eq!(model.bias, 0.0);
    assert_eq!(model.n_epochs, 1000);
    assert!((model.learning_rate - 0.1).abs() < 1e-9);
}

#[test]
fn test_logistic_regression_builder() {
    let model = LogisticRegression::new()
        .with_learning_rate(0.5)
        .with_n_epochs(500)
        .with_weight_init(WeightInit::Zeros)
        .with_random_state(42);

    assert_eq!(model.learning_rate, 0.5);
    assert_eq!(model.n_epochs, 500);
    assert_eq!(model.weight_init, WeightInit::Zeros);
    assert_eq!(model.random_state, Some(42));
}

#[test]
fn test_fit_rejects_zero_learning_rate() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new().with_learning_rate(0.0);

    let result = model.fit(&x, &y);
    assert!(matches!(
        result,
        Err(FronteraError::InvalidLearningRate { .. })
    ));
}

#[test]
fn test_fit_rejects_negative_learning_rate() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new().with_learning_rate(-0.1);

    assert!(model.fit(&x, &y).is_err());
}

#[test]
fn test_fit_rejects_shape_mismatch() {
    let x = Matrix::from_vec(5, 2, vec![0.0; 10]).expect("5x2 matrix");
    let y = Vector::from_slice(&[0.0, 1.0, 0.0, 1.0]);
    let mut model = LogisticRegression::new();

    let result = model.fit(&x, &y);
    assert!(matches!(
        result,
        Err(FronteraError::ShapeMismatch { rows: 5, labels: 4 })
    ));
}

#[test]
fn test_fit_rejects_empty_data() {
    let x = Matrix::from_vec(0, 2, vec![]).expect("0x2 matrix");
    let y = Vector::from_vec(vec![]);
    let mut model = LogisticRegression::new();

    assert!(model.fit(&x, &y).is_err());
}

#[test]
fn test_fit_rejects_non_binary_labels() {
    let (x, _) = separable_dataset();
    let y = Vector::from_slice(&[0.0, 1.0, 2.0, 1.0]);
    let mut model = LogisticRegression::new();

    assert!(model.fit(&x, &y).is_err());
}

#[test]
fn test_fit_separable_data() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new()
        .with_learning_rate(0.5)
        .with_n_epochs(1000)
        .with_weight_init(WeightInit::Zeros);

    model.fit(&x, &y).expect("valid training data");
    let predictions = model.predict(&x);

    for i in 0..y.len() {
        assert!(
            (predictions[i] - y[i]).abs() < 1e-6,
            "sample {i} misclassified"
        );
    }
    assert!((model.score(&x, &y) - 1.0).abs() < 1e-6);
}

#[test]
fn test_fit_is_reproducible_with_seed() {
    let (x, y) = separable_dataset();

    let mut a = LogisticRegression::new()
        .with_n_epochs(50)
        .with_random_state(42);
    let mut b = LogisticRegression::new()
        .with_n_epochs(50)
        .with_random_state(42);

    a.fit(&x, &y).expect("valid training data");
    b.fit(&x, &y).expect("valid training data");

    assert_eq!(a.coefficients(), b.coefficients());
    assert!((a.intercept() - b.intercept()).abs() < 1e-9);
}

#[test]
fn test_predict_tie_break_is_positive() {
    // Zero parameters leave every confidence at exactly 0.5, which
    // must map to the positive class.
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new()
        .with_n_epochs(0)
        .with_weight_init(WeightInit::Zeros);
    model.fit(&x, &y).expect("valid training data");

    let predictions = model.predict(&x);
    for &pred in predictions.iter() {
        assert!((pred - 1.0).abs() < 1e-6);
    }
}

#[test]
#[should_panic(expected = "not fitted")]
fn test_predict_unfitted_panics() {
    let (x, _) = separable_dataset();
    let model = LogisticRegression::new();
    let _ = model.predict_proba(&x);
}

#[test]
fn test_fit_with_validation_history() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new()
        .with_learning_rate(0.5)
        .with_n_epochs(100)
        .with_weight_init(WeightInit::Zeros);

    let history = model
        .fit_with_validation(&x, &y, &x, &y)
        .expect("valid training data");

    assert_eq!(history.n_epochs(), 100);
    assert_eq!(history.loss.len(), history.accuracy.len());

    // From zero parameters every confidence is 0.5, so the loss
    // recorded before the first update is exactly 1 bit.
    assert!((history.loss[0] - 1.0).abs() < 1e-6);

    for &acc in &history.accuracy {
        assert!((0.0..=1.0).contains(&acc));
    }
    for &loss in &history.loss {
        assert!(loss.is_finite() && loss >= 0.0);
    }

    // Loss should have improved over the run on separable data.
    assert!(history.final_loss().expect("non-empty history") < history.loss[0]);
}

#[test]
fn test_fit_with_validation_rejects_mismatched_holdout() {
    let (x, y) = separable_dataset();
    let x_val = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("3x2 matrix");
    let y_val = Vector::from_slice(&[0.0, 1.0]);
    let mut model = LogisticRegression::new();

    let result = model.fit_with_validation(&x, &y, &x_val, &y_val);
    assert!(matches!(
        result,
        Err(FronteraError::ShapeMismatch { rows: 3, labels: 2 })
    ));
}

#[test]
fn test_evaluate_shape_mismatch() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new().with_n_epochs(10);
    model.fit(&x, &y).expect("valid training data");

    let x_test = Matrix::from_vec(5, 2, vec![0.0; 10]).expect("5x2 matrix");
    let y_test = Vector::from_slice(&[0.0, 1.0, 0.0, 1.0]);

    let result = model.evaluate(&x_test, &y_test);
    assert!(matches!(
        result,
        Err(FronteraError::ShapeMismatch { rows: 5, labels: 4 })
    ));
}

#[test]
fn test_evaluate_in_unit_interval() {
    let (x, y) = separable_dataset();
    let mut model = LogisticRegression::new().with_n_epochs(10);
    model.fit(&x, &y).expect("valid training data");

    let acc = model.evaluate(&x, &y).expect("shapes match");
    assert!((0.0..=1.0).contains(&acc));
}

#[test]
fn test_decision_boundary_closed_form() {
    // w = (1, 1), b = 0 gives the line y = -x.
    let mut model = LogisticRegression::new();
    model.weights = Some(Vector::from_slice(&[1.0, 1.0]));
    model.bias = 0.0;

    let boundary = model.decision_boundary().expect("w[1] is nonzero");
    assert!((boundary.slope - (-1.0)).abs() < 1e-6);
    assert!(boundary.intercept.abs() < 1e-6);
    assert!((boundary.y_at(2.0) - (-2.0)).abs() < 1e-6);
}

#[test]
fn test_decision_boundary_degenerate_weight() {
    let mut model = LogisticRegression::new();
    model.weights = Some(Vector::from_slice(&[1.0, 0.0]));
    model.bias = 0.5;

    let result = model.decision_boundary();
    assert!(matches!(
        result,
        Err(FronteraError::DegenerateWeight { index: 1, .. })
    ));
}

#[test]
fn test_decision_boundary_requires_two_features() {
    let x = Matrix::from_vec(2, 1, vec![0.0, 1.0]).expect("2x1 matrix");
    let y = Vector::from_slice(&[0.0, 1.0]);
    let mut model = LogisticRegression::new().with_n_epochs(5);
    model.fit(&x, &y).expect("valid training data");

    let result = model.decision_boundary();
    assert!(matches!(
        result,
        Err(FronteraError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn test_decision_boundary_unfitted() {
    let model = LogisticRegression::new();
    assert!(model.decision_boundary().is_err());
}
