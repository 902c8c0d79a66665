use std::{ops::Index, slice};

use ndarray::{Array2, ArrayView2};

/// The intermediates of one forward pass.
///
/// `activations` has `hidden_layers + 2` entries: the bias augmented input, the bias augmented
/// output of every hidden layer and the raw output of the output layer, which is the
/// prediction. `preactivations` has one entry per weight matrix, the linear combination before
/// the sigmoid and before any bias augmentation.
#[derive(Clone, Debug)]
pub struct ForwardTrace {
    activations: Vec<Array2<f64>>,
    preactivations: Vec<Array2<f64>>,
}

impl ForwardTrace {
    /// Creates a new `ForwardTrace`. Only a `Network`'s forward pass builds them, so there is
    /// always at least the input activation.
    pub(crate) fn new(activations: Vec<Array2<f64>>, preactivations: Vec<Array2<f64>>) -> Self {
        Self {
            activations,
            preactivations,
        }
    }

    pub fn activations(&self) -> &[Array2<f64>] {
        &self.activations
    }

    pub fn preactivations(&self) -> &[Array2<f64>] {
        &self.preactivations
    }

    /// Returns the output layer's activation, one row of predictions per example.
    pub fn prediction(&self) -> ArrayView2<'_, f64> {
        self.activations[self.activations.len() - 1].view()
    }

    /// Returns the amount of examples the trace was computed for.
    pub fn batch_size(&self) -> usize {
        self.activations.first().map_or(0, |a| a.nrows())
    }

    pub fn into_parts(self) -> (Vec<Array2<f64>>, Vec<Array2<f64>>) {
        (self.activations, self.preactivations)
    }
}

/// The batch averaged gradient of the loss, one matrix per weight matrix and of its same shape.
#[derive(Clone, Debug, PartialEq)]
pub struct GradSet {
    grads: Box<[Array2<f64>]>,
}

impl GradSet {
    pub(crate) fn new(grads: Vec<Array2<f64>>) -> Self {
        Self {
            grads: grads.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.grads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grads.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Array2<f64>> {
        self.grads.iter()
    }

    pub fn shapes(&self) -> Vec<(usize, usize)> {
        self.grads.iter().map(|g| g.dim()).collect()
    }
}

impl Index<usize> for GradSet {
    type Output = Array2<f64>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.grads[i]
    }
}

impl<'a> IntoIterator for &'a GradSet {
    type Item = &'a Array2<f64>;
    type IntoIter = slice::Iter<'a, Array2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn prediction_is_the_last_activation() {
        let input = array![[1., 0.5], [1., 0.25], [1., 0.]];
        let output = array![[0.3], [0.6], [0.9]];
        let z = array![[0.], [1.], [2.]];
        let trace = ForwardTrace::new(vec![input, output.clone()], vec![z]);

        assert_eq!(trace.prediction(), output);
        assert_eq!(trace.batch_size(), 3);

        let (activations, preactivations) = trace.into_parts();
        assert_eq!(activations.len(), 2);
        assert_eq!(preactivations.len(), 1);
    }
}
