//! The one fold every reducer ends up in.
//!
//! A fold is driven by a _producer_: a closure which receives an [`Emitter`]
//! and calls [`Emitter::emit`] once per operand, in the order the operands are to be combined.
//!
//! The emitter owns the accumulator:
//! - The first emitted operand becomes the accumulator as-is. No operator call is made.
//! - Every later operand is combined into it: `acc = op(acc, operand)`.
//! - Once the operator fails, the fold is _halted_. Later operands are dropped without
//!   calling the operator again, and `emit` answers [`ControlFlow::Break`] so the producer can stop early.
//!
//! The producer only ever borrows the emitter for the duration of its own call,
//! so it is impossible to hold on to it and emit after the fold has finished.
use core::marker::PhantomData;
use core::mem;
use core::ops::ControlFlow;

use tracing::trace;

use crate::error::FoldError;
use crate::reduction::Reduction;

enum Accumulator<T, E> {
    Empty,
    Holding(T),
    Failed(E),
}

/// Receives the operands of a fold, one at a time.
///
/// See the [module documentation](self) for the exact semantics.
pub struct Emitter<'o, K, O, T>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
{
    op: &'o O,
    state: Accumulator<T, K::Error>,
    emitted: usize,
    _kind: PhantomData<K>,
}

impl<'o, K, O, T> Emitter<'o, K, O, T>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
{
    fn new(op: &'o O) -> Self {
        Emitter {
            op,
            state: Accumulator::Empty,
            emitted: 0,
            _kind: PhantomData,
        }
    }

    /// Folds `value` into the accumulator.
    ///
    /// Returns [`ControlFlow::Break`] once the operator has failed;
    /// from then on `value` is dropped without being looked at.
    pub fn emit(&mut self, value: T) -> ControlFlow<()> {
        let next = match mem::replace(&mut self.state, Accumulator::Empty) {
            Accumulator::Empty => Accumulator::Holding(value),
            Accumulator::Holding(acc) => match K::combine(self.op, acc, value) {
                Ok(acc) => Accumulator::Holding(acc),
                Err(err) => {
                    trace!(
                        kind = K::NAME,
                        operand = self.emitted + 1,
                        "operator failed, halting fold"
                    );
                    Accumulator::Failed(err)
                }
            },
            failed @ Accumulator::Failed(_) => {
                self.state = failed;
                return ControlFlow::Break(());
            }
        };
        self.state = next;
        self.emitted += 1;

        if self.is_halted() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Emits every value of `values` in order, stopping as soon as the fold is halted.
    pub fn emit_all(&mut self, values: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        if self.is_halted() {
            return ControlFlow::Break(());
        }
        for value in values {
            if self.emit(value).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Whether the operator has failed. A halted fold ignores further operands.
    pub fn is_halted(&self) -> bool {
        matches!(self.state, Accumulator::Failed(_))
    }

    /// The number of operands that were folded (or that failed to fold).
    ///
    /// Operands dropped after the fold halted are not counted.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn finish(self) -> Result<T, FoldError<K::Error>> {
        match self.state {
            Accumulator::Holding(acc) => Ok(acc),
            Accumulator::Failed(err) => Err(FoldError::Operator(err)),
            Accumulator::Empty => {
                trace!(kind = K::NAME, "producer emitted no operands");
                Err(FoldError::EmptySequence)
            }
        }
    }
}

impl<'o, K, O, T> core::fmt::Debug for Emitter<'o, K, O, T>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match self.state {
            Accumulator::Empty => "empty",
            Accumulator::Holding(_) => "holding",
            Accumulator::Failed(_) => "failed",
        };
        f.debug_struct("Emitter")
            .field("kind", &K::NAME)
            .field("state", &state)
            .field("emitted", &self.emitted)
            .finish()
    }
}

/// Runs `producer` once and folds whatever it emits, strictly left to right.
///
/// Fails with [`FoldError::EmptySequence`] if nothing was emitted,
/// and with [`FoldError::Operator`] carrying the operator's own error if combining failed.
pub fn fold_stream<'o, K, O, T, P>(op: &'o O, producer: P) -> Result<T, FoldError<K::Error>>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
    P: FnOnce(&mut Emitter<'o, K, O, T>),
{
    let mut emitter = Emitter::new(op);
    producer(&mut emitter);
    emitter.finish()
}

/// Folds the values of an iterator.
///
/// Stops pulling values as soon as the operator fails.
pub fn fold_iter<K, O, T, I>(op: &O, values: I) -> Result<T, FoldError<K::Error>>
where
    O: ?Sized,
    K: Reduction<O, T, Output = T>,
    I: IntoIterator<Item = T>,
{
    fold_stream::<K, O, T, _>(op, |emitter| {
        let _ = emitter.emit_all(values);
    })
}
