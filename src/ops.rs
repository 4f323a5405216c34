//! The arithmetic the reducers are driven by.
//!
//! Reducers never decide how two values are added or multiplied.
//! Instead, an operator is passed in explicitly: any value implementing [`Addition`]
//! (for sums) or [`Multiplication`] (for products).
//!
//! Operand and result types may all differ, and an operator may fail.
//! What failure means (overflow, a domain error, mismatched units, ...)
//! is entirely up to the operator; reducers only pass its errors along.
//!
//! A few operators are provided out of the box:
//! - [`Std`] forwards to [`core::ops::Add`] and [`core::ops::Mul`] and never fails.
//! - [`Checked`], [`Wrapping`] and [`Saturating`] cover the primitive integers
//!   with the respective overflow behaviour.
//! - [`adding`], [`multiplying`], [`from_fn`] and [`total`] turn closures into operators.
//!
//! # Examples
//! ```rust
//! use sigmapi::ops::{Addition, Checked, Multiplication, Std};
//!
//! assert_eq!(Std.add(2, 3), Ok(5));
//! assert_eq!(Std.multiply(2.5, 4.0), Ok(10.0));
//! assert!(Checked.add(u8::MAX, 1).is_err());
//! ```
use core::convert::Infallible;

use concat_idents::concat_idents;

use crate::error::{Operation, Overflow};

/// Addition of a `Lhs` and a `Rhs`, producing an `Output`.
pub trait Addition<Lhs, Rhs = Lhs> {
    type Output;
    type Error;

    fn add(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error>;
}

/// Multiplication of a `Lhs` and a `Rhs`, producing an `Output`.
pub trait Multiplication<Lhs, Rhs = Lhs> {
    type Output;
    type Error;

    fn multiply(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error>;
}

impl<O, Lhs, Rhs> Addition<Lhs, Rhs> for &O
where
    O: ?Sized + Addition<Lhs, Rhs>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline]
    fn add(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error> {
        O::add(self, lhs, rhs)
    }
}

impl<O, Lhs, Rhs> Multiplication<Lhs, Rhs> for &O
where
    O: ?Sized + Multiplication<Lhs, Rhs>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline]
    fn multiply(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error> {
        O::multiply(self, lhs, rhs)
    }
}

#[cfg(feature = "alloc")]
impl<O, Lhs, Rhs> Addition<Lhs, Rhs> for alloc::boxed::Box<O>
where
    O: ?Sized + Addition<Lhs, Rhs>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline]
    fn add(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error> {
        O::add(self, lhs, rhs)
    }
}

#[cfg(feature = "alloc")]
impl<O, Lhs, Rhs> Multiplication<Lhs, Rhs> for alloc::boxed::Box<O>
where
    O: ?Sized + Multiplication<Lhs, Rhs>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline]
    fn multiply(&self, lhs: Lhs, rhs: Rhs) -> Result<Self::Output, Self::Error> {
        O::multiply(self, lhs, rhs)
    }
}

/// The operator of the `+` and `*` operators themselves.
///
/// Works for any pair of types implementing [`core::ops::Add`] resp. [`core::ops::Mul`],
/// including those whose output type differs from both operands.
/// Overflow behaves exactly like `+` and `*` do (i.e. panics in debug builds).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Std;

/// Primitive integer arithmetic that fails with [`Overflow`] instead of overflowing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checked;

/// Primitive integer arithmetic that wraps around at the type's bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wrapping;

/// Primitive integer arithmetic that clamps at the type's bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Saturating;

macro_rules! impl_std_op {
    ($op_trait:ident::$op:ident => $core_trait:ident::$core_op:ident) => {
        impl<A, B> $op_trait<A, B> for Std
        where
            A: core::ops::$core_trait<B>,
        {
            type Output = <A as core::ops::$core_trait<B>>::Output;
            type Error = Infallible;

            #[inline]
            fn $op(&self, lhs: A, rhs: B) -> Result<Self::Output, Infallible> {
                Ok(core::ops::$core_trait::$core_op(lhs, rhs))
            }
        }
    };
}

impl_std_op!(Addition::add => Add::add);
impl_std_op!(Multiplication::multiply => Mul::mul);

macro_rules! impl_primitive_op {
    ($op_trait:ident::$op:ident, $method:ident, $operation:ident, $($ty:ty),*) => {
        concat_idents!(checked_op = checked_, $method {
            $(
                impl $op_trait<$ty> for Checked {
                    type Output = $ty;
                    type Error = Overflow;

                    #[inline]
                    fn $op(&self, lhs: $ty, rhs: $ty) -> Result<$ty, Overflow> {
                        lhs.checked_op(rhs)
                            .ok_or(Overflow::new(Operation::$operation, stringify!($ty)))
                    }
                }
            )*
        });

        concat_idents!(wrapping_op = wrapping_, $method {
            $(
                impl $op_trait<$ty> for Wrapping {
                    type Output = $ty;
                    type Error = Infallible;

                    #[inline]
                    fn $op(&self, lhs: $ty, rhs: $ty) -> Result<$ty, Infallible> {
                        Ok(lhs.wrapping_op(rhs))
                    }
                }
            )*
        });

        concat_idents!(saturating_op = saturating_, $method {
            $(
                impl $op_trait<$ty> for Saturating {
                    type Output = $ty;
                    type Error = Infallible;

                    #[inline]
                    fn $op(&self, lhs: $ty, rhs: $ty) -> Result<$ty, Infallible> {
                        Ok(lhs.saturating_op(rhs))
                    }
                }
            )*
        });
    };
}

impl_primitive_op!(Addition::add, add, Addition, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_primitive_op!(Multiplication::multiply, mul, Multiplication, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// An operator built from closures. See [`from_fn`].
///
/// Only the closure for the operation actually used needs to be callable;
/// the other one may be `()`.
#[derive(Debug, Clone, Copy)]
pub struct FromFn<FA, FM> {
    add: FA,
    multiply: FM,
}

/// Builds an operator from an addition closure and a multiplication closure,
/// both of which may fail.
///
/// ```rust
/// use sigmapi::ops::{from_fn, Addition, Multiplication};
///
/// let op = from_fn(
///     |a: u8, b: u8| a.checked_add(b).ok_or("too big"),
///     |a: u8, b: u8| a.checked_mul(b).ok_or("much too big"),
/// );
/// assert_eq!(op.add(200, 100), Err("too big"));
/// assert_eq!(op.multiply(3, 4), Ok(12));
/// ```
pub fn from_fn<FA, FM>(add: FA, multiply: FM) -> FromFn<FA, FM> {
    FromFn { add, multiply }
}

/// Builds an addition-only operator from a fallible closure.
pub fn adding<FA>(add: FA) -> FromFn<FA, ()> {
    from_fn(add, ())
}

/// Builds a multiplication-only operator from a fallible closure.
pub fn multiplying<FM>(multiply: FM) -> FromFn<(), FM> {
    from_fn((), multiply)
}

impl<FA, FM, A, B, C, E> Addition<A, B> for FromFn<FA, FM>
where
    FA: Fn(A, B) -> Result<C, E>,
{
    type Output = C;
    type Error = E;

    #[inline]
    fn add(&self, lhs: A, rhs: B) -> Result<C, E> {
        (self.add)(lhs, rhs)
    }
}

impl<FA, FM, A, B, C, E> Multiplication<A, B> for FromFn<FA, FM>
where
    FM: Fn(A, B) -> Result<C, E>,
{
    type Output = C;
    type Error = E;

    #[inline]
    fn multiply(&self, lhs: A, rhs: B) -> Result<C, E> {
        (self.multiply)(lhs, rhs)
    }
}

/// An operator built from closures which cannot fail. See [`total`].
#[derive(Debug, Clone, Copy)]
pub struct Total<FA, FM> {
    add: FA,
    multiply: FM,
}

/// Builds an operator from two closures which always succeed.
///
/// ```rust
/// use sigmapi::ops::{total, Addition};
///
/// let concat = total(|a: String, b: &str| a + b, ());
/// assert_eq!(concat.add("Σ".to_string(), "Π"), Ok("ΣΠ".to_string()));
/// ```
pub fn total<FA, FM>(add: FA, multiply: FM) -> Total<FA, FM> {
    Total { add, multiply }
}

impl<FA, FM, A, B, C> Addition<A, B> for Total<FA, FM>
where
    FA: Fn(A, B) -> C,
{
    type Output = C;
    type Error = Infallible;

    #[inline]
    fn add(&self, lhs: A, rhs: B) -> Result<C, Infallible> {
        Ok((self.add)(lhs, rhs))
    }
}

impl<FA, FM, A, B, C> Multiplication<A, B> for Total<FA, FM>
where
    FM: Fn(A, B) -> C,
{
    type Output = C;
    type Error = Infallible;

    #[inline]
    fn multiply(&self, lhs: A, rhs: B) -> Result<C, Infallible> {
        Ok((self.multiply)(lhs, rhs))
    }
}
