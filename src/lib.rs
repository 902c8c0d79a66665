pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod training;

pub use arch::{ForwardTrace, GradSet, Network, ParamSet};
pub use config::{NetConfig, TrainingConfig};
pub use dataset::Dataset;
pub use error::{NetErr, Result};
