use std::{fs, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::error::{NetErr, Result};

fn default_bias() -> usize {
    1
}

/// The shape and learning rate of a fully connected network.
///
/// Immutable once a `Network` has been built from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetConfig {
    learning_rate: f64,
    input_size: usize,
    hidden_size: usize,
    hidden_layers: usize,
    output_size: usize,
    #[serde(default = "default_bias")]
    bias: usize,
}

impl NetConfig {
    /// Creates a new `NetConfig` with one bias unit per non-output layer.
    ///
    /// # Arguments
    /// * `learning_rate` - The step length of each gradient descent update.
    /// * `input_size` - The amount of features of each example.
    /// * `hidden_size` - The amount of units of every hidden layer.
    /// * `hidden_layers` - The amount of hidden layers, at least one.
    /// * `output_size` - The amount of output units.
    ///
    /// # Returns
    /// The config or `NetErr::InvalidConfig` if any value is out of its domain.
    pub fn new(
        learning_rate: f64,
        input_size: usize,
        hidden_size: usize,
        hidden_layers: usize,
        output_size: usize,
    ) -> Result<Self> {
        let config = Self {
            learning_rate,
            input_size,
            hidden_size,
            hidden_layers,
            output_size,
            bias: default_bias(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Sets the amount of bias columns prepended to every non-output layer, either 0 or 1.
    pub fn with_bias(mut self, bias: usize) -> Result<Self> {
        self.bias = bias;
        self.validate()?;
        Ok(self)
    }

    /// Checks every field is in its domain.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(NetErr::invalid_config("learning_rate", self.learning_rate));
        }

        let sizes = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("hidden_layers", self.hidden_layers),
            ("output_size", self.output_size),
        ];

        if let Some((what, got)) = sizes.into_iter().find(|&(_, size)| size == 0) {
            return Err(NetErr::invalid_config(what, got));
        }

        if self.bias > 1 {
            return Err(NetErr::invalid_config("bias", self.bias));
        }

        Ok(())
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn hidden_layers(&self) -> usize {
        self.hidden_layers
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn bias(&self) -> usize {
        self.bias
    }

    /// Returns the `(rows, cols)` of every weight matrix, in layer order.
    pub fn param_shapes(&self) -> Vec<(usize, usize)> {
        let &Self {
            input_size,
            hidden_size,
            hidden_layers,
            output_size,
            bias,
            ..
        } = self;

        let mut shapes = Vec::with_capacity(hidden_layers + 1);
        shapes.push((hidden_size, input_size + bias));
        shapes.extend((1..hidden_layers).map(|_| (hidden_size, hidden_size + bias)));
        shapes.push((output_size, hidden_size + bias));
        shapes
    }
}

/// Everything a driver needs to run a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub network: NetConfig,
    pub iterations: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainingConfig {
    /// Parses and validates a `TrainingConfig` from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.network.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a `TrainingConfig` from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Builds the random number generator for this session, seeded if a seed was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
