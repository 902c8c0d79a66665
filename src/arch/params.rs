use std::{ops::Index, slice};

use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::{Rng, distr::StandardUniform};

use crate::{
    config::NetConfig,
    error::{NetErr, Result},
};

/// One weight matrix per layer transition, `hidden_layers + 1` of them.
///
/// Matrix `i` has one row per unit of layer `i + 1` and one column per unit of layer `i`
/// plus its bias columns. The amount of matrices and each one's shape are fixed at
/// construction, matrices are only ever replaced by others of the same shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSet {
    weights: Box<[Array2<f64>]>,
}

impl ParamSet {
    /// Allocates zeroed matrices with the shapes the configuration dictates.
    pub fn zeros(config: &NetConfig) -> Self {
        let weights = config
            .param_shapes()
            .into_iter()
            .map(|shape| Array2::zeros(shape))
            .collect();

        Self { weights }
    }

    /// Overwrites every entry with an independent draw from the uniform distribution on [0, 1).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for w in self.weights.iter_mut() {
            *w = Array2::random_using(w.dim(), StandardUniform, rng);
        }
    }

    /// Returns the amount of matrices.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`, a network has at least two weight matrices.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Array2<f64>> {
        self.weights.get(i)
    }

    pub fn iter(&self) -> slice::Iter<'_, Array2<f64>> {
        self.weights.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Array2<f64>> {
        self.weights.iter_mut()
    }

    /// Returns the `(rows, cols)` of every matrix.
    pub fn shapes(&self) -> Vec<(usize, usize)> {
        self.weights.iter().map(|w| w.dim()).collect()
    }

    /// Replaces the `i`-th matrix.
    ///
    /// # Returns
    /// `NetErr::ShapeMismatch` if `i` is out of range or `w` doesn't have the shape of the
    /// matrix it replaces.
    pub fn replace(&mut self, i: usize, w: Array2<f64>) -> Result<()> {
        let len = self.weights.len();
        let slot = self
            .weights
            .get_mut(i)
            .ok_or_else(|| NetErr::shape("weight matrix index", i, len))?;

        check_same_shape("weight matrix", slot.dim(), w.dim())?;
        *slot = w;
        Ok(())
    }

    /// Checks `others` has exactly one matrix per weight matrix, each of the same shape.
    pub(crate) fn check_matching<'a, I>(&self, others: I) -> Result<()>
    where
        I: ExactSizeIterator<Item = &'a Array2<f64>>,
    {
        if others.len() != self.weights.len() {
            return Err(NetErr::shape("gradient set", others.len(), self.weights.len()));
        }

        self.weights
            .iter()
            .zip(others)
            .try_for_each(|(w, o)| check_same_shape("gradient matrix", w.dim(), o.dim()))
    }
}

fn check_same_shape(
    what: &'static str,
    expected: (usize, usize),
    got: (usize, usize),
) -> Result<()> {
    if got.0 != expected.0 {
        return Err(NetErr::shape(what, got.0, expected.0));
    }

    if got.1 != expected.1 {
        return Err(NetErr::shape(what, got.1, expected.1));
    }

    Ok(())
}

impl Index<usize> for ParamSet {
    type Output = Array2<f64>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.weights[i]
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = &'a Array2<f64>;
    type IntoIter = slice::Iter<'a, Array2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
