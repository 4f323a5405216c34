//! Folds over sequences which are known to be non-empty at compile time.
//!
//! A [`GenericArray`] whose length is a non-zero [`typenum`] number always has a first element,
//! so folding it can never hit [`crate::FoldError::EmptySequence`].
//! The result type reflects that: the only possible error is the operator's own.
use core::ops::{Add, Sub};

use generic_array::sequence::Shorten;
use generic_array::{ArrayLength, GenericArray};
use tracing::trace;
use typenum::operator_aliases::Sub1;
use typenum::{NonZero, B1};

use crate::reduction::Reduction;

/// A shorter alias for GenericArray.
pub type Array<T, N> = GenericArray<T, N>;

/// Folds the elements of `values` strictly left to right (in index order).
///
/// The first element starts the accumulator without an operator call.
/// The fold stops at the first operator failure.
pub fn fold_array<K, O, T, N>(op: &O, values: Array<T, N>) -> Result<T, K::Error>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
    N: ArrayLength + NonZero + Sub<B1>,
    Sub1<N>: ArrayLength + Add<B1, Output = N>,
{
    let (first, rest) = values.pop_front();
    rest.into_iter()
        .enumerate()
        .try_fold(first, |acc, (index, value)| {
            K::combine(op, acc, value).inspect_err(|_| {
                trace!(
                    kind = K::NAME,
                    operand = index + 2,
                    len = N::USIZE,
                    "operator failed, halting fold"
                );
            })
        })
}
