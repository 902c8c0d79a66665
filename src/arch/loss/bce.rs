use log::warn;
use ndarray::{Array2, ArrayView2, Zip};

use super::LossFn;

/// Predictions are clamped into `(EPSILON, 1 - EPSILON)` before taking logarithms.
pub const EPSILON: f64 = 1e-12;

/// Binary cross-entropy loss.
///
/// `output_delta` returns the plain residual `y_pred - y`, which is only the correct delta when
/// `y_pred` comes out of a sigmoid. Pairing this loss with any other output activation requires
/// re-deriving it.
#[derive(Default, Clone, Copy, Debug)]
pub struct BinaryCrossEntropy;

impl BinaryCrossEntropy {
    /// Returns a new `BinaryCrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for BinaryCrossEntropy {
    fn loss(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> f64 {
        let n = y_pred.nrows();
        if n == 0 {
            return 0.;
        }

        let mut clamped = 0usize;
        let mut total = 0.;

        Zip::from(&y_pred).and(&y).for_each(|&p, &t| {
            let q = p.clamp(EPSILON, 1. - EPSILON);
            if q != p {
                clamped += 1;
            }

            total += t * q.ln() + (1. - t) * (1. - q).ln();
        });

        if clamped > 0 {
            warn!("clamped {clamped} saturated predictions while computing the loss");
        }

        -total / n as f64
    }

    fn output_delta(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> Array2<f64> {
        &y_pred - &y
    }
}
