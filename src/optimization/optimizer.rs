use ndarray::Array2;

/// Defines the strategy for updating a weight matrix based on its computed gradient.
pub trait Optimizer {
    /// Updates `weights` in place using `grad`, which has the same shape.
    ///
    /// # Arguments
    /// * `weights` - The weights to update.
    /// * `grad` - The gradient of the loss with respect to `weights`.
    fn update_weights(&mut self, weights: &mut Array2<f64>, grad: &Array2<f64>);
}
