//! Variadic Σ and Π.

/// The sum of one or more operands, written out inline.
///
/// `sum!(op; a, b, c, ...)` picks the matching call shape by arity:
/// a single operand is returned as-is, two go through [`sum_same`](crate::sum_same),
/// and three or more through [`sum_n`](crate::sum_n).
/// The result is always a `Result<T, FoldError<E>>` so that all arities can be used interchangeably.
///
/// ```rust
/// use sigmapi::{sum, ops::Std};
///
/// assert_eq!(sum!(&Std; 1, 2, 3, 4, 5), Ok(15));
/// assert_eq!(sum!(&Std; 1.5, 2.5), Ok(4.0));
/// assert_eq!(sum!(&Std; 42), Ok(42));
/// ```
#[macro_export]
macro_rules! sum {
    ($op:expr; $a:expr $(,)?) => {
        $crate::sum_iter($op, [$a])
    };
    ($op:expr; $a:expr, $b:expr $(,)?) => {
        $crate::sum_same($op, $a, $b).map_err($crate::FoldError::Operator)
    };
    ($op:expr; $a:expr, $b:expr, $c:expr $(, $rest:expr)* $(,)?) => {
        $crate::sum_n($op, $a, $b, $c, [$($rest),*])
    };
    ($op:expr $(;)?) => {
        compile_error!("sum! needs at least one operand")
    };
}

/// The product of one or more operands, written out inline.
///
/// Works exactly like [`sum!`], dispatching to [`product_same`](crate::product_same)
/// and [`product_n`](crate::product_n).
///
/// ```rust
/// use sigmapi::{product, ops::Checked, FoldError};
///
/// assert_eq!(product!(&Checked; 1u32, 2, 3, 4, 5), Ok(120));
/// assert!(matches!(product!(&Checked; 16u8, 16), Err(FoldError::Operator(_))));
/// ```
#[macro_export]
macro_rules! product {
    ($op:expr; $a:expr $(,)?) => {
        $crate::product_iter($op, [$a])
    };
    ($op:expr; $a:expr, $b:expr $(,)?) => {
        $crate::product_same($op, $a, $b).map_err($crate::FoldError::Operator)
    };
    ($op:expr; $a:expr, $b:expr, $c:expr $(, $rest:expr)* $(,)?) => {
        $crate::product_n($op, $a, $b, $c, [$($rest),*])
    };
    ($op:expr $(;)?) => {
        compile_error!("product! needs at least one operand")
    };
}
