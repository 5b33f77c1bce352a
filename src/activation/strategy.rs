use crate::math::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::f64::consts::E;
use std::fmt::Debug;

/// An element-wise nonlinearity applied after each linear layer.
///
/// The backward pass multiplies layer errors by `derivative_from_output`,
/// i.e. the derivative must be expressible in terms of the activation's own
/// *output* (sigmoid: `y·(1−y)`, tanh: `1−y²`). A strategy whose derivative
/// has no such closed form cannot be used here without changing the
/// backpropagation math.
pub trait ActivationStrategy {
    /// Applies the nonlinearity element-wise; same shape in and out.
    fn execute(&self, input: &Matrix) -> Matrix;

    /// Derivative evaluated at `output = f(x)`, not at `x`.
    fn derivative_from_output(&self, output: f64) -> f64;
}

impl Debug for dyn ActivationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActivationStrategy")
    }
}

/// Logistic sigmoid, the default strategy.
pub struct Sigmoid;

impl ActivationStrategy for Sigmoid {
    fn execute(&self, input: &Matrix) -> Matrix {
        input.map(|x| 1.0 / (1.0 + E.powf(-x)))
    }

    fn derivative_from_output(&self, output: f64) -> f64 {
        output * (1.0 - output)
    }
}

/// Hyperbolic tangent. Output range (-1, 1), so pair it with targets in
/// that range.
pub struct Tanh;

impl ActivationStrategy for Tanh {
    fn execute(&self, input: &Matrix) -> Matrix {
        input.map(|x| x.tanh())
    }

    fn derivative_from_output(&self, output: f64) -> f64 {
        1.0 - output * output
    }
}

/// Serializable selector for the built-in strategies, used by `NetworkSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    Sigmoid,
    Tanh,
}

impl ActivationKind {
    pub fn strategy(&self) -> Box<dyn ActivationStrategy> {
        match self {
            ActivationKind::Sigmoid => Box::new(Sigmoid),
            ActivationKind::Tanh => Box::new(Tanh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_preserves_shape_and_range() {
        let input = Matrix::from_data(vec![vec![-3.0, 0.0], vec![0.5, 3.0]]);
        let output = Sigmoid.execute(&input);
        assert_eq!(output.rows, 2);
        assert_eq!(output.cols, 2);
        for row in &output.data {
            for &v in row {
                assert!(v > 0.0 && v < 1.0);
            }
        }
        assert!((output.data[0][1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_derivative_matches_identity() {
        // f'(x) = f(x)·(1−f(x)); compare against a finite difference.
        let f = |x: f64| 1.0 / (1.0 + E.powf(-x));
        let x = 0.7;
        let numeric = (f(x + 1e-6) - f(x - 1e-6)) / 2e-6;
        let analytic = Sigmoid.derivative_from_output(f(x));
        assert!((numeric - analytic).abs() < 1e-6);
    }

    #[test]
    fn tanh_derivative_from_output() {
        let y = 0.3_f64.tanh();
        assert!((Tanh.derivative_from_output(y) - (1.0 - y * y)).abs() < 1e-12);
    }

    #[test]
    fn kind_builds_matching_strategy() {
        let input = Matrix::from_column(&[0.0]);
        let sigmoid = ActivationKind::Sigmoid.strategy();
        let tanh = ActivationKind::Tanh.strategy();
        assert!((sigmoid.execute(&input).data[0][0] - 0.5).abs() < 1e-12);
        assert!(tanh.execute(&input).data[0][0].abs() < 1e-12);
    }
}
