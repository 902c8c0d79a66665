use ndarray::{Array2, ArrayView2};

/// The logistic function `1 / (1 + e^-z)` and its derivative.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// Evaluates the sigmoid at `z`.
    ///
    /// Branches on the sign of `z` so `exp` is only ever taken of a non-positive number and
    /// never overflows.
    pub fn f(&self, z: f64) -> f64 {
        if z >= 0. {
            1. / (1. + (-z).exp())
        } else {
            let e = z.exp();
            e / (1. + e)
        }
    }

    /// Evaluates the sigmoid's derivative at `z` as `s * (1 - s)`, with `s = f(z)`.
    pub fn df(&self, z: f64) -> f64 {
        let s = self.f(z);
        s * (1. - s)
    }

    /// Applies `f` elementwise.
    pub fn forward(&self, z: ArrayView2<f64>) -> Array2<f64> {
        z.mapv(|z| self.f(z))
    }

    /// Applies `df` elementwise.
    pub fn prime(&self, z: ArrayView2<f64>) -> Array2<f64> {
        z.mapv(|z| self.df(z))
    }
}
