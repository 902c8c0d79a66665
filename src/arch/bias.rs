use ndarray::{Array2, ArrayView2, s};

/// Prepends `bias` columns of ones to `x`.
///
/// # Arguments
/// * `x` - A batch with one example per row.
/// * `bias` - The amount of bias columns, 0 or 1.
///
/// # Returns
/// A new matrix of shape `[x.nrows(), bias + x.ncols()]`.
pub fn augment(x: ArrayView2<f64>, bias: usize) -> Array2<f64> {
    let mut augmented = Array2::ones((x.nrows(), x.ncols() + bias));
    augmented.slice_mut(s![.., bias..]).assign(&x);
    augmented
}

/// Drops the `bias` leading columns of a delta matrix.
///
/// Bias units have no incoming weights, so their deltas must not flow into the layer behind
/// them nor into any gradient.
pub fn strip_bias(delta: ArrayView2<f64>, bias: usize) -> ArrayView2<f64> {
    delta.slice_move(s![.., bias..])
}
