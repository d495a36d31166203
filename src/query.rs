//! Query shapes accepted by the kernels.
//!
//! Every kernel is generic over [`Query`], which is how a kernel declares that
//! it is vectorized: the host may pass a single `f64` or any `ndarray` array of
//! `f64` and gets back a value of the same shape, in the same order. Callers
//! that want one-point-at-a-time evaluation pass scalars; callers holding a
//! whole q grid pass the array once.

use crate::error::{Result, SasError};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

/// A scalar or an array of momentum-transfer (or distance) values.
pub trait Query {
    /// Result of an elementwise evaluation over this query.
    type Output;

    /// Apply `f` to every element, preserving shape and order.
    fn map_query<F>(&self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;

    /// Apply `f` pairwise to the elements of `self` and `other`.
    ///
    /// Returns [`SasError::DimensionMismatch`] when the shapes differ.
    fn zip_query<F>(&self, other: &Self, f: F) -> Result<Self::Output>
    where
        F: Fn(f64, f64) -> f64;
}

impl Query for f64 {
    type Output = f64;

    fn map_query<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(*self)
    }

    fn zip_query<F>(&self, other: &Self, f: F) -> Result<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        Ok(f(*self, *other))
    }
}

impl<S, D> Query for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn map_query<F>(&self, f: F) -> Array<f64, D>
    where
        F: Fn(f64) -> f64,
    {
        self.mapv(f)
    }

    fn zip_query<F>(&self, other: &Self, f: F) -> Result<Array<f64, D>>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(SasError::DimensionMismatch(format!(
                "Expected paired queries of equal shape, got {:?} and {:?}",
                self.shape(),
                other.shape()
            )));
        }

        Ok(Zip::from(self)
            .and(other)
            .map_collect(|&a, &b| f(a, b)))
    }
}
