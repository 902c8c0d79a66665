pub mod activations;
pub mod bias;
pub mod loss;
mod network;
mod params;
mod trace;

pub use network::Network;
pub use params::ParamSet;
pub use trace::{ForwardTrace, GradSet};
