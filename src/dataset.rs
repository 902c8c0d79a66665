use ndarray::{Array2, ArrayView2, s};

use crate::error::{NetErr, Result};

/// An in-memory batch of examples and their expected outputs.
#[derive(Clone, Debug)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array2<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from interleaved samples.
    ///
    /// # Arguments
    /// * `data` - Row major samples, each one `x_size` inputs followed by `y_size` outputs.
    /// * `x_size` - The amount of inputs per sample.
    /// * `y_size` - The amount of outputs per sample.
    ///
    /// # Returns
    /// An error if the sample sizes are zero or `data` doesn't hold a whole number of samples.
    pub fn new(data: Vec<f64>, x_size: usize, y_size: usize) -> Result<Self> {
        if x_size == 0 {
            return Err(NetErr::invalid_config("x_size", x_size));
        }

        if y_size == 0 {
            return Err(NetErr::invalid_config("y_size", y_size));
        }

        let sample_size = x_size + y_size;
        let rem = data.len() % sample_size;
        if rem != 0 {
            return Err(NetErr::shape("data length", data.len(), data.len() - rem));
        }

        let len = data.len() / sample_size;
        let full = Array2::from_shape_vec((len, sample_size), data)
            .map_err(|_| NetErr::shape("data length", len * sample_size, sample_size))?;

        Ok(Self {
            x: full.slice(s![.., ..x_size]).to_owned(),
            y: full.slice(s![.., x_size..]).to_owned(),
        })
    }

    /// Creates a new `Dataset` from an input matrix and a target matrix with one row per example.
    pub fn from_arrays(x: Array2<f64>, y: Array2<f64>) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(NetErr::shape("target rows", y.nrows(), x.nrows()));
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView2<'_, f64> {
        self.y.view()
    }

    /// Returns the amount of examples.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn splits_interleaved_samples() {
        let data = vec![1., 0., 1., 1., 1., 0., 0., 0., 0., 0., 1., 1.];
        let dataset = Dataset::new(data, 2, 1).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.x(), array![[1., 0.], [1., 1.], [0., 0.], [0., 1.]]);
        assert_eq!(dataset.y(), array![[1.], [0.], [0.], [1.]]);
    }

    #[test]
    fn rejects_partial_samples() {
        let data = vec![1., 0., 1., 1., 1.];
        assert!(matches!(
            Dataset::new(data, 2, 1),
            Err(NetErr::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_empty_sample_sizes() {
        assert!(Dataset::new(vec![1., 2.], 0, 2).is_err());
        assert!(Dataset::new(vec![1., 2.], 2, 0).is_err());
    }

    #[test]
    fn from_arrays_checks_rows() {
        let x = array![[1., 2.], [3., 4.]];
        assert!(Dataset::from_arrays(x.clone(), array![[1.], [0.]]).is_ok());
        assert!(Dataset::from_arrays(x, array![[1.]]).is_err());
    }
}
