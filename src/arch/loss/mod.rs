mod bce;
mod loss_fn;

pub use bce::{BinaryCrossEntropy, EPSILON};
pub use loss_fn::LossFn;
