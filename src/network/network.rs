use crate::activation::strategy::{ActivationStrategy, Sigmoid};
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::sample::sampler::{RandomSampler, Sampler};

/// Learning rate used by `Network::new`.
pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// One training example: an input vector and the target output vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainItem {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl TrainItem {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> TrainItem {
        TrainItem { inputs, targets }
    }
}

/// Layer outputs of one forward pass, handed to the immediately following
/// backward pass and then dropped.
struct ForwardResult {
    hidden_outputs: Matrix,
    final_outputs: Matrix,
}

/// A three-layer (input–hidden–output) feed-forward network trained by
/// stochastic online backpropagation.
///
/// The network owns two weight matrices: `weights_ih` (hidden × input) and
/// `weights_ho` (output × hidden), both initialized to independent uniform
/// values in [-0.5, 0.5) and mutated in place by every training step. The
/// shapes are fixed at construction. No external aliasing of the weights is
/// possible: `query` returns a fresh copy and the accessors hand out shared
/// references only.
///
/// Learning rates outside (0, 1] risk divergence; this is documented, not
/// validated. Numeric pathologies (saturation, NaN from an oversized rate)
/// are not guarded and will silently corrupt subsequent training.
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
    weights_ih: Matrix,
    weights_ho: Matrix,
    activator: Box<dyn ActivationStrategy>,
    sampler: Box<dyn Sampler>,
}

impl Network {
    /// Builds a network with `DEFAULT_LEARNING_RATE`, a sigmoid activation
    /// strategy and an entropy-seeded sampler. All sizes must be positive.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Result<Network> {
        Network::with_learning_rate(input_size, hidden_size, output_size, DEFAULT_LEARNING_RATE)
    }

    pub fn with_learning_rate(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> Result<Network> {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(NetworkError::InvalidArgument(format!(
                "layer sizes must be positive, got {input_size}x{hidden_size}x{output_size}"
            )));
        }
        check_learning_rate(learning_rate)?;

        let mut rng = rand::thread_rng();
        let weights_ih = Matrix::uniform(hidden_size, input_size, &mut rng);
        let weights_ho = Matrix::uniform(output_size, hidden_size, &mut rng);

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            weights_ih,
            weights_ho,
            activator: Box::new(Sigmoid),
            sampler: Box::new(RandomSampler::new()),
        })
    }

    /// Builds a network from fixed starting weights. Layer sizes are derived
    /// from the matrix shapes; `weights_ho.cols` must equal `weights_ih.rows`.
    pub fn from_weights(
        weights_ih: Matrix,
        weights_ho: Matrix,
        learning_rate: f64,
    ) -> Result<Network> {
        if weights_ih.rows == 0 || weights_ih.cols == 0 || weights_ho.rows == 0 {
            return Err(NetworkError::InvalidArgument(
                "weight matrices must be non-empty".to_string(),
            ));
        }
        if weights_ho.cols != weights_ih.rows {
            return Err(NetworkError::DimensionMismatch {
                what: "hidden-to-output weight columns",
                expected: weights_ih.rows,
                actual: weights_ho.cols,
            });
        }
        check_learning_rate(learning_rate)?;

        Ok(Network {
            input_size: weights_ih.cols,
            hidden_size: weights_ih.rows,
            output_size: weights_ho.rows,
            learning_rate,
            weights_ih,
            weights_ho,
            activator: Box::new(Sigmoid),
            sampler: Box::new(RandomSampler::new()),
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    /// Replaces the stored activation strategy.
    pub fn set_activator(&mut self, activator: Box<dyn ActivationStrategy>) {
        self.activator = activator;
    }

    /// Replaces the index sampler used by `train`.
    pub fn set_sampler(&mut self, sampler: Box<dyn Sampler>) {
        self.sampler = sampler;
    }

    /// Runs `count` independent online training steps. Each step draws one
    /// item uniformly from `set` (with replacement; coverage of the set
    /// within a finite `count` is not guaranteed) and applies a full
    /// forward + backward pass with an immediate in-place weight update.
    ///
    /// If `activator` is given it replaces the stored strategy for this and
    /// all subsequent calls — the swap outlives the call. `count == 0` is a
    /// legal no-op; an empty `set` with `count > 0` is rejected because the
    /// sampler has no valid index range.
    pub fn train(
        &mut self,
        set: &[TrainItem],
        count: usize,
        activator: Option<Box<dyn ActivationStrategy>>,
    ) -> Result<()> {
        if let Some(strategy) = activator {
            self.activator = strategy;
        }

        if count == 0 {
            return Ok(());
        }
        if set.is_empty() {
            return Err(NetworkError::InvalidArgument(
                "training set is empty but steps were requested".to_string(),
            ));
        }

        for _ in 0..count {
            let index = self.sampler.uniform_index(0, set.len());
            self.train_step(&set[index])?;
        }

        Ok(())
    }

    /// Feeds `inputs` forward through the current weights and returns a copy
    /// of the final output vector (length `output_size`). Read-only.
    pub fn query(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.input_size {
            return Err(NetworkError::DimensionMismatch {
                what: "inputs",
                expected: self.input_size,
                actual: inputs.len(),
            });
        }

        let input = Matrix::from_column(inputs);
        let forward = self.forward(&input);
        Ok(forward.final_outputs.column(0))
    }

    /// One atomic training step: the step either completes its forward and
    /// backward pass or fails on validation before any weight is touched.
    fn train_step(&mut self, item: &TrainItem) -> Result<()> {
        if item.inputs.len() != self.input_size {
            return Err(NetworkError::DimensionMismatch {
                what: "inputs",
                expected: self.input_size,
                actual: item.inputs.len(),
            });
        }
        if item.targets.len() != self.output_size {
            return Err(NetworkError::DimensionMismatch {
                what: "targets",
                expected: self.output_size,
                actual: item.targets.len(),
            });
        }

        let input = Matrix::from_column(&item.inputs);
        let targets = Matrix::from_column(&item.targets);
        let forward = self.forward(&input);
        self.backward(&input, &targets, forward);

        Ok(())
    }

    fn forward(&self, input: &Matrix) -> ForwardResult {
        let hidden_inputs = self.weights_ih.clone() * input.clone();
        let hidden_outputs = self.activator.execute(&hidden_inputs);
        let final_inputs = self.weights_ho.clone() * hidden_outputs.clone();
        let final_outputs = self.activator.execute(&final_inputs);

        ForwardResult {
            hidden_outputs,
            final_outputs,
        }
    }

    /// Gradient descent on the squared output error. Errors are propagated
    /// back through the transpose of the forward weight matrix, and each
    /// layer delta is `lr · (errors ⊙ f'(outputs)) · inputsᵗ`.
    fn backward(&mut self, input: &Matrix, targets: &Matrix, forward: ForwardResult) {
        let output_errors = targets.clone() - forward.final_outputs.clone();
        // Hidden errors must come from the pre-update weights_ho.
        let hidden_errors = self.weights_ho.transpose() * output_errors.clone();

        let delta_ho = (self.layer_delta(&output_errors, &forward.final_outputs)
            * forward.hidden_outputs.transpose())
        .map(|g| g * self.learning_rate);
        let delta_ih = (self.layer_delta(&hidden_errors, &forward.hidden_outputs)
            * input.transpose())
        .map(|g| g * self.learning_rate);

        self.weights_ho = self.weights_ho.clone() + delta_ho;
        self.weights_ih = self.weights_ih.clone() + delta_ih;
    }

    /// `errors ⊙ f'(outputs)`, with the derivative taken from the layer's
    /// own outputs per the `ActivationStrategy` contract.
    fn layer_delta(&self, errors: &Matrix, outputs: &Matrix) -> Matrix {
        errors.hadamard(&outputs.map(|y| self.activator.derivative_from_output(y)))
    }
}

fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(NetworkError::InvalidArgument(format!(
            "learning rate must be positive and finite, got {learning_rate}"
        )));
    }
    Ok(())
}
