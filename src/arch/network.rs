use log::{debug, info};
use ndarray::{Array2, ArrayView2};
use rand::Rng;

use super::{
    ForwardTrace, GradSet, ParamSet,
    activations::Sigmoid,
    bias::{augment, strip_bias},
    loss::{BinaryCrossEntropy, EPSILON, LossFn},
};
use crate::{
    config::NetConfig,
    error::{NetErr, Result},
    optimization::{GradientDescent, Optimizer},
};

/// A fully connected feed forward network with sigmoid activations, a bias unit at every
/// non-output layer and binary cross-entropy loss.
#[derive(Clone, Debug)]
pub struct Network {
    config: NetConfig,
    params: ParamSet,
    act_fn: Sigmoid,
    loss_fn: BinaryCrossEntropy,
}

impl Network {
    /// Creates a new `Network` with every weight set to zero.
    ///
    /// # Arguments
    /// * `config` - The network's shape and learning rate.
    ///
    /// # Returns
    /// The network or `NetErr::InvalidConfig` if the config is invalid.
    pub fn new(config: NetConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            params: ParamSet::zeros(&config),
            config,
            act_fn: Sigmoid,
            loss_fn: BinaryCrossEntropy::new(),
        })
    }

    pub fn config(&self) -> &NetConfig {
        &self.config
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// Replaces the `i`-th weight matrix with one of the same shape.
    pub fn set_params(&mut self, i: usize, w: Array2<f64>) -> Result<()> {
        self.params.replace(i, w)
    }

    /// Draws every weight from the uniform distribution on [0, 1).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.params.randomize(rng);
    }

    /// Propagates a batch through the network.
    ///
    /// # Arguments
    /// * `x` - The input batch, one example per row.
    ///
    /// # Returns
    /// The activations and pre-activations of every layer, or an error if `x` is empty or
    /// doesn't have `input_size` columns.
    pub fn forward(&self, x: ArrayView2<f64>) -> Result<ForwardTrace> {
        self.check_input(x)?;

        let bias = self.config.bias();
        let nparams = self.params.len();
        let mut activations = Vec::with_capacity(nparams + 1);
        let mut preactivations = Vec::with_capacity(nparams);

        activations.push(augment(x, bias));

        for (i, w) in self.params.iter().enumerate() {
            let z = activations[i].dot(&w.t());
            let a = self.act_fn.forward(z.view());

            // the output layer's activation is the prediction, it has no bias unit and has to
            // stay strictly inside (0, 1) even where the sigmoid rounds to 0 or 1
            if i + 1 < nparams {
                activations.push(augment(a.view(), bias));
            } else {
                activations.push(a.mapv_into(|p| p.clamp(EPSILON, 1. - EPSILON)));
            }

            preactivations.push(z);
        }

        Ok(ForwardTrace::new(activations, preactivations))
    }

    /// Returns the prediction for every example of `x`.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let (mut activations, _) = self.forward(x)?.into_parts();
        activations
            .pop()
            .ok_or_else(|| NetErr::shape("activations", 0, self.params.len() + 1))
    }

    /// Computes the mean binary cross-entropy of the network's predictions for `x`.
    ///
    /// # Arguments
    /// * `x` - The input batch, one example per row.
    /// * `y` - The expected outputs, one row per example of `x`.
    ///
    /// # Returns
    /// A finite non-negative cost, or an error if the batch shapes are wrong.
    pub fn cost(&self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<f64> {
        self.check_input(x)?;
        self.check_target(x.nrows(), y)?;

        let trace = self.forward(x)?;
        Ok(self.loss_fn.loss(trace.prediction(), y))
    }

    /// Computes the batch averaged gradient of the loss with respect to every weight matrix.
    ///
    /// Walks the layers backwards pairing every hidden layer's pre-activation and input with
    /// the weight matrix that reads its output. Each delta is stripped of its bias column before
    /// it flows further back or into a gradient.
    ///
    /// # Arguments
    /// * `trace` - The result of forwarding the batch.
    /// * `y` - The expected outputs of the batch.
    ///
    /// # Returns
    /// One gradient per weight matrix, with its same shape, or an error if the trace or `y`
    /// don't match the network's shapes.
    pub fn backprop(&self, trace: &ForwardTrace, y: ArrayView2<f64>) -> Result<GradSet> {
        self.check_trace(trace)?;
        self.check_target(trace.batch_size(), y)?;

        let bias = self.config.bias();
        let hidden_layers = self.config.hidden_layers();
        let n = y.nrows() as f64;
        let a = trace.activations();
        let z = trace.preactivations();

        let mut grads = Vec::with_capacity(self.params.len());
        let mut delta = self.loss_fn.output_delta(trace.prediction(), y);
        grads.push(delta.t().dot(&a[hidden_layers]) / n);

        let layers = self
            .params
            .iter()
            .skip(1)
            .zip(&z[..hidden_layers])
            .zip(&a[..hidden_layers]);

        for ((w_next, z), a) in layers.rev() {
            let upstream = delta.dot(w_next);
            let z = augment(z.view(), bias);
            let full = upstream * self.act_fn.prime(z.view());

            delta = strip_bias(full.view(), bias).to_owned();
            grads.push(delta.t().dot(a) / n);
        }

        grads.reverse();
        Ok(GradSet::new(grads))
    }

    /// Applies one optimizer step to every weight matrix.
    ///
    /// # Returns
    /// An error if `grads` doesn't match the parameter set's arity and shapes, in which case no
    /// weight is touched.
    pub fn update<O: Optimizer>(&mut self, optimizer: &mut O, grads: &GradSet) -> Result<()> {
        self.params.check_matching(grads.iter())?;

        for (w, g) in self.params.iter_mut().zip(grads) {
            optimizer.update_weights(w, g);
        }

        Ok(())
    }

    /// Runs one full batch iteration: forward, backprop and update.
    ///
    /// # Returns
    /// The cost of the batch before the update.
    pub fn step<O: Optimizer>(
        &mut self,
        optimizer: &mut O,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
    ) -> Result<f64> {
        let trace = self.forward(x)?;
        let grads = self.backprop(&trace, y)?;
        let loss = self.loss_fn.loss(trace.prediction(), y);

        self.update(optimizer, &grads)?;
        Ok(loss)
    }

    /// Randomizes the weights and runs `n_iterations` of full batch gradient descent.
    ///
    /// Calling it again starts over from new random weights.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        n_iterations: usize,
        rng: &mut R,
    ) -> Result<()> {
        let mut optimizer = GradientDescent::new(self.config.learning_rate());
        self.fit(&mut optimizer, x, y, n_iterations, rng)?;
        Ok(())
    }

    /// Randomizes the weights and runs `n_iterations` steps of `optimizer`.
    ///
    /// # Returns
    /// The cost before every update, or an error if the batch doesn't fit the network, in
    /// which case the weights are left untouched.
    pub fn fit<O, R>(
        &mut self,
        optimizer: &mut O,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        n_iterations: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>>
    where
        O: Optimizer,
        R: Rng + ?Sized,
    {
        self.check_input(x)?;
        self.check_target(x.nrows(), y)?;
        self.randomize(rng);

        info!("training for {n_iterations} iterations over {} examples", x.nrows());

        let mut losses = Vec::with_capacity(n_iterations);
        for iteration in 0..n_iterations {
            let loss = self.step(optimizer, x, y)?;
            debug!(iteration = iteration, loss = loss; "gradient descent step");
            losses.push(loss);
        }

        Ok(losses)
    }

    fn check_input(&self, x: ArrayView2<f64>) -> Result<()> {
        if x.nrows() == 0 {
            return Err(NetErr::EmptyBatch);
        }

        let expected = self.config.input_size();
        if x.ncols() != expected {
            return Err(NetErr::shape("input columns", x.ncols(), expected));
        }

        Ok(())
    }

    fn check_target(&self, rows: usize, y: ArrayView2<f64>) -> Result<()> {
        let expected = self.config.output_size();
        if y.ncols() != expected {
            return Err(NetErr::shape("target columns", y.ncols(), expected));
        }

        if y.nrows() != rows {
            return Err(NetErr::shape("target rows", y.nrows(), rows));
        }

        Ok(())
    }

    fn check_trace(&self, trace: &ForwardTrace) -> Result<()> {
        let nparams = self.params.len();
        let a = trace.activations();
        let z = trace.preactivations();

        if a.len() != nparams + 1 {
            return Err(NetErr::shape("activations", a.len(), nparams + 1));
        }

        if z.len() != nparams {
            return Err(NetErr::shape("preactivations", z.len(), nparams));
        }

        let n = trace.batch_size();
        if n == 0 {
            return Err(NetErr::EmptyBatch);
        }

        let bias = self.config.bias();
        for (i, w) in self.params.iter().enumerate() {
            let (rows, cols) = w.dim();
            let out_cols = if i + 1 < nparams { rows + bias } else { rows };

            for (what, m, expected) in [
                ("activation columns", &a[i], cols),
                ("preactivation columns", &z[i], rows),
                ("activation columns", &a[i + 1], out_cols),
            ] {
                if m.ncols() != expected {
                    return Err(NetErr::shape(what, m.ncols(), expected));
                }

                if m.nrows() != n {
                    return Err(NetErr::shape("trace rows", m.nrows(), n));
                }
            }
        }

        Ok(())
    }
}
