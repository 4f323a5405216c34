//! Σ and Π over injected arithmetic.
//!
//! This crate reduces a sequence of operands to their sum or product,
//! without ever deciding itself how two operands are added or multiplied.
//! That is the job of an _operator_: any value implementing [`Addition`] or [`Multiplication`],
//! passed explicitly to every call. Operand and result types may differ,
//! and operators may fail. See [`ops`] for the ready-made ones.
//!
//! All reductions combine their operands strictly left to right,
//! `op(op(op(x1, x2), x3), ...)`, which matters for operators that are not associative
//! (floating point rounding, matrix products, string building, ...).
//! There is no identity element to fall back to, so reducing nothing is an error
//! ([`FoldError::EmptySequence`]). If the operator fails, the reduction stops right there
//! and returns that failure unchanged ([`FoldError::Operator`]).
//!
//! # Call shapes
//!
//! ```rust
//! use sigmapi::ops::{Checked, Std};
//! use sigmapi::{product2, product_n, sum2, sum_iter, sum_n, sum_stream, FoldError};
//!
//! // Two operands, possibly of different types:
//! assert_eq!(sum2(&Std, 2, 3), Ok(5));
//! assert_eq!(product2(&Std, 2, 3), Ok(6));
//! assert_eq!(sum2(&Std, String::from("Σ"), "Π"), Ok(String::from("ΣΠ")));
//!
//! // Three or more operands of one type:
//! assert_eq!(sum_n(&Std, 1, 2, 3, [4, 5]), Ok(15));
//! assert_eq!(product_n(&Std, 1, 2, 3, [4, 5]), Ok(120));
//!
//! // Whatever a producer emits:
//! let squares = sum_stream(&Checked, |emitter| {
//!     for x in 1..=10u32 {
//!         if emitter.emit(x * x).is_break() {
//!             break;
//!         }
//!     }
//! });
//! assert_eq!(squares, Ok(385));
//!
//! // Nothing at all:
//! assert_eq!(sum_iter(&Std, Vec::<i32>::new()), Err(FoldError::EmptySequence));
//! ```
//!
//! With the variadic macros:
//! ```rust
//! use sigmapi::{product, sum, ops::Std};
//!
//! assert_eq!(sum!(&Std; 1, 2, 3, 4, 5), Ok(15));
//! assert_eq!(product!(&Std; 1, 2, 3, 4, 5), Ok(120));
//! ```
//!
//! Arrays whose length is a non-zero type-level number cannot be empty,
//! so reducing them only fails if the operator does:
//! ```rust
//! use generic_array::arr;
//! use sigmapi::{ops::Std, product_array};
//!
//! let res: Result<u64, _> = product_array(&Std, arr![1, 2, 3, 4, 5]);
//! assert_eq!(res, Ok(120));
//! ```
//!
//! # Features
//! - `std` (default): implements `std::error::Error` for the error types
//!   and lets `tracing` use the standard library.
//! - `alloc` (implied by `std`): boxed operators are operators too.
//!
//! Without either, the crate is `no_std`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

pub mod error;
pub mod fold;
pub mod nonempty;
pub mod ops;
pub mod reduce;
pub mod reduction;

#[doc(inline)]
pub use error::{FoldError, Overflow};
#[doc(inline)]
pub use fold::Emitter;
#[doc(inline)]
pub use ops::{Addition, Multiplication};
#[doc(inline)]
pub use reduce::*;
#[doc(inline)]
pub use reduction::{Kind, Product, Reduction, Sum};
