use log::info;
use rand::{Rng, rngs::StdRng};

use crate::{
    arch::Network,
    config::TrainingConfig,
    dataset::Dataset,
    error::Result,
    optimization::{GradientDescent, Optimizer},
};

/// A `Network` trainer. Owns the network together with what it needs to train it.
pub struct Trainer<O, R>
where
    O: Optimizer,
    R: Rng,
{
    network: Network,
    optimizer: O,
    iterations: usize,
    rng: R,
}

impl Trainer<GradientDescent, StdRng> {
    /// Builds a zero-initialized network and a gradient descent trainer following a config.
    ///
    /// # Returns
    /// An error if the network's config is invalid.
    pub fn from_config(config: &TrainingConfig) -> Result<Self> {
        let network = Network::new(config.network)?;
        let optimizer = GradientDescent::new(config.network.learning_rate());
        Ok(Self::new(network, optimizer, config.iterations, config.rng()))
    }
}

impl<O, R> Trainer<O, R>
where
    O: Optimizer,
    R: Rng,
{
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `network` - The network that will be trained.
    /// * `optimizer` - Dictates how to update the weights on each gradient calculation.
    /// * `iterations` - The amount of full batch updates per `train` call.
    /// * `rng` - The source of the initial weights.
    pub fn new(network: Network, optimizer: O, iterations: usize, rng: R) -> Self {
        Self {
            network,
            optimizer,
            iterations,
            rng,
        }
    }

    /// Randomizes the network's weights and trains it for the configured amount of iterations.
    ///
    /// # Arguments
    /// * `dataset` - The examples to train on, all of them used in every iteration.
    ///
    /// # Returns
    /// The cost before every update followed by the cost after the last one, or an error if
    /// the dataset doesn't fit the network.
    pub fn train(&mut self, dataset: &Dataset) -> Result<Vec<f64>> {
        let (x, y) = (dataset.x(), dataset.y());
        let mut losses = self
            .network
            .fit(&mut self.optimizer, x, y, self.iterations, &mut self.rng)?;

        let loss = self.network.cost(x, y)?;
        info!("training finished with cost {loss}");
        losses.push(loss);

        Ok(losses)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }
}
