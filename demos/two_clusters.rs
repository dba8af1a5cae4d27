//! Two-Cluster Logistic Regression Example
//!
//! Generates two overlapping 2-D Gaussian clusters, splits them
//! 80/20, trains logistic regression for 1000 epochs, and prints the
//! training curve endpoints and the learned decision boundary.
//!
//! Run with: cargo run --example two_clusters

use frontera::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Two-cluster logistic regression\n");

    let blobs = [
        GaussianBlob::new(
            Vector::from_slice(&[1.0, 0.5]),
            Matrix::from_vec(2, 2, vec![1.0, 0.1, 0.1, 1.2])?,
        ),
        GaussianBlob::new(
            Vector::from_slice(&[4.0, 5.0]),
            Matrix::from_vec(2, 2, vec![1.21, 0.1, 0.1, 1.3])?,
        ),
    ];
    let (x, y) = make_blobs(&blobs, 500, Some(42))?;
    println!(
        "   Generated {} samples with {} features",
        x.n_rows(),
        x.n_cols()
    );

    let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, Some(42))?;
    println!(
        "   Split: {} train / {} test\n",
        x_train.n_rows(),
        x_test.n_rows()
    );

    let mut model = LogisticRegression::new()
        .with_learning_rate(0.5)
        .with_n_epochs(1000)
        .with_random_state(42);

    let history = model.fit_with_validation(&x_train, &y_train, &x_test, &y_test)?;

    println!("🏋️  Training (batch gradient, 1000 epochs, lr = 0.5)");
    println!(
        "   epoch    1: loss {:.4}, held-out accuracy {:.3}",
        history.loss[0], history.accuracy[0]
    );
    println!(
        "   epoch {:4}: loss {:.4}, held-out accuracy {:.3}\n",
        history.n_epochs(),
        history.final_loss().expect("history has entries"),
        history.final_accuracy().expect("history has entries")
    );

    let w = model.coefficients();
    let b = model.intercept();
    println!("📈 Learned parameters");
    println!("   w = ({:.4}, {:.4}), b = {:.4}", w[0], w[1], b);

    let boundary = model.decision_boundary()?;
    println!(
        "   decision boundary: y = {:.3} * x + {:.3}",
        boundary.slope, boundary.intercept
    );
    for x_pos in [-4.0, 0.0, 4.0, 8.0] {
        println!("     x = {x_pos:5.1}  ->  y = {:6.2}", boundary.y_at(x_pos));
    }

    Ok(())
}
