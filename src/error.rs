//! Errors originated by the reducers and by the ready-made operators.
use core::fmt;

/// Failure of a fold over an operand stream.
///
/// A fold can only fail in two ways:
/// - It saw no operands at all. There is no generic identity element to fall back to,
///   so this is an error rather than a zero or a one.
/// - The injected operator refused a pair of operands.
///   That error is carried as-is: its `Display` and `source` are the operator's own,
///   and [`FoldError::into_operator`] hands the original value back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FoldError<E> {
    #[error("cannot reduce an empty sequence of operands")]
    EmptySequence,
    #[error(transparent)]
    Operator(E),
}

impl<E> FoldError<E> {
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, FoldError::EmptySequence)
    }

    /// Returns the operator's error, if that is what stopped the fold.
    pub fn into_operator(self) -> Option<E> {
        match self {
            FoldError::Operator(err) => Some(err),
            FoldError::EmptySequence => None,
        }
    }

    pub fn map_operator<F>(self, fun: impl FnOnce(E) -> F) -> FoldError<F> {
        match self {
            FoldError::Operator(err) => FoldError::Operator(fun(err)),
            FoldError::EmptySequence => FoldError::EmptySequence,
        }
    }
}

/// The arithmetic operation an operator was asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => f.write_str("addition"),
            Operation::Multiplication => f.write_str("multiplication"),
        }
    }
}

/// Returned by [`crate::ops::Checked`] when the result does not fit the operand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{operation} overflowed {type_name}")]
pub struct Overflow {
    operation: Operation,
    type_name: &'static str,
}

impl Overflow {
    pub(crate) const fn new(operation: Operation, type_name: &'static str) -> Self {
        Overflow {
            operation,
            type_name,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Name of the primitive type that overflowed, e.g. `"u8"`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_errors_display_as_themselves() {
        let err: FoldError<Overflow> =
            FoldError::Operator(Overflow::new(Operation::Addition, "u8"));
        assert_eq!(err.to_string(), "addition overflowed u8");
        assert_eq!(
            err.into_operator(),
            Some(Overflow::new(Operation::Addition, "u8"))
        );
    }

    #[test]
    fn empty_sequence() {
        let err: FoldError<Overflow> = FoldError::EmptySequence;
        assert!(err.is_empty_sequence());
        assert_eq!(err.to_string(), "cannot reduce an empty sequence of operands");
        assert_eq!(err.into_operator(), None);
    }

    #[test]
    fn map_operator_keeps_the_variant() {
        let err: FoldError<u8> = FoldError::Operator(7);
        assert_eq!(err.map_operator(u16::from), FoldError::Operator(7u16));
        let err: FoldError<u8> = FoldError::EmptySequence;
        assert_eq!(err.map_operator(u16::from), FoldError::<u16>::EmptySequence);
    }
}
