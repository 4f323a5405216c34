//! Σ and Π as types.
//!
//! Each reducer is written once, generically over the [`Kind`] of reduction it performs.
//! A kind knows which injected operation it combines two operands with:
//! [`Sum`] uses [`Addition`], [`Product`] uses [`Multiplication`].
use sealed::sealed;

use crate::ops::{Addition, Multiplication};

/// A kind of reduction. Only [`Sum`] and [`Product`] exist.
#[sealed]
pub trait Kind {
    /// Short lowercase name, used in diagnostics.
    const NAME: &'static str;
}

/// Σ: operands are combined using [`Addition`].
#[derive(Debug)]
pub enum Sum {}

/// Π: operands are combined using [`Multiplication`].
#[derive(Debug)]
pub enum Product {}

#[sealed]
impl Kind for Sum {
    const NAME: &'static str = "sum";
}

#[sealed]
impl Kind for Product {
    const NAME: &'static str = "product";
}

/// How a reduction of kind `Self` combines a `A` and a `B` using the operator `O`.
///
/// There is no need to implement this trait;
/// it is implemented for [`Sum`] whenever `O: Addition<A, B>`
/// and for [`Product`] whenever `O: Multiplication<A, B>`.
pub trait Reduction<O: ?Sized, A, B = A>: Kind {
    type Output;
    type Error;

    fn combine(op: &O, lhs: A, rhs: B) -> Result<Self::Output, Self::Error>;
}

impl<O, A, B> Reduction<O, A, B> for Sum
where
    O: ?Sized + Addition<A, B>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline(always)]
    fn combine(op: &O, lhs: A, rhs: B) -> Result<Self::Output, Self::Error> {
        op.add(lhs, rhs)
    }
}

impl<O, A, B> Reduction<O, A, B> for Product
where
    O: ?Sized + Multiplication<A, B>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline(always)]
    fn combine(op: &O, lhs: A, rhs: B) -> Result<Self::Output, Self::Error> {
        op.multiply(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Checked, Std};
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Sum: Reduction<Std, f32>, Reduction<Checked, u8>);
    assert_impl_all!(Product: Reduction<Std, i64>);
    assert_not_impl_any!(Sum: Reduction<Checked, f32>);

    #[test]
    fn kinds_pick_their_operation() {
        assert_eq!(<Sum as Reduction<Std, i32>>::combine(&Std, 6, 7), Ok(13));
        assert_eq!(<Product as Reduction<Std, i32>>::combine(&Std, 6, 7), Ok(42));
        assert_eq!(Sum::NAME, "sum");
        assert_eq!(Product::NAME, "product");
    }
}
