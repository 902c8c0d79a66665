use ndarray::{Array2, ArrayView2};

pub trait LossFn {
    /// Returns the loss averaged over the examples (rows) of the batch.
    fn loss(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> f64;

    /// Returns the derivative of the loss with respect to the output layer's pre-activation,
    /// one row per example.
    fn output_delta(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> Array2<f64>;
}
