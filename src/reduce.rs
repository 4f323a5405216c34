//! The public Σ / Π call shapes.
//!
//! Every shape exists twice, once as `sum_*` (combining with [`Addition`])
//! and once as `product_*` (combining with [`Multiplication`]):
//!
//! | shape      | operands                                  | result                          |
//! |------------|-------------------------------------------|---------------------------------|
//! | `*2`       | two, of possibly different types          | `Result<O::Output, O::Error>`   |
//! | `*_same`   | two, one type in all three positions      | `Result<T, O::Error>`           |
//! | `*_n`      | three or more, as `a, b, c, rest`         | `Result<T, FoldError<O::Error>>`|
//! | `*_stream` | whatever a producer closure emits         | `Result<T, FoldError<O::Error>>`|
//! | `*_iter`   | whatever an iterator yields               | `Result<T, FoldError<O::Error>>`|
//! | `*_array`  | a non-empty [`GenericArray`]               | `Result<T, O::Error>`           |
//!
//! The folding shapes all combine strictly left to right, stop at the first operator failure,
//! and hand that failure back unchanged.
//! `*_n` and `*_iter` are thin adapters over `*_stream`.
use core::ops::{Add, Sub};

use concat_idents::concat_idents;
use generic_array::{ArrayLength, GenericArray};
use typenum::operator_aliases::Sub1;
use typenum::{NonZero, B1};

use crate::error::FoldError;
use crate::fold::{fold_stream, Emitter};
use crate::nonempty::fold_array;
use crate::ops::{Addition, Multiplication};
use crate::reduction::{Product, Reduction, Sum};

macro_rules! impl_reductions {
    ($kind:ident, $op_trait:ident, $pair:ident, $stream:ident, $prefix:ident) => {
        #[doc = concat!("Combines two operands of possibly different types into their ", stringify!($prefix), ".")]
        ///
        /// The operator is applied exactly once; its error is returned as-is.
        #[inline]
        pub fn $pair<O, A, B>(op: &O, lhs: A, rhs: B) -> Result<O::Output, O::Error>
        where
            O: ?Sized + $op_trait<A, B>,
        {
            <$kind as Reduction<O, A, B>>::combine(op, lhs, rhs)
        }

        concat_idents!(reduce_same = $prefix, _same {
            #[doc = concat!("Combines two operands of the same type into their ", stringify!($prefix), " of that type.")]
            #[inline]
            pub fn reduce_same<O, T>(op: &O, lhs: T, rhs: T) -> Result<T, O::Error>
            where
                O: ?Sized + $op_trait<T, Output = T>,
            {
                <$kind as Reduction<O, T>>::combine(op, lhs, rhs)
            }
        });

        #[doc = concat!("The ", stringify!($prefix), " of everything `producer` emits, combined left to right.")]
        ///
        /// `producer` is called exactly once. The first emitted operand starts the fold;
        /// every later one is combined into the running result.
        /// Emitting nothing fails with [`FoldError::EmptySequence`].
        pub fn $stream<'o, O, T, P>(op: &'o O, producer: P) -> Result<T, FoldError<O::Error>>
        where
            O: ?Sized + $op_trait<T, Output = T>,
            P: FnOnce(&mut Emitter<'o, $kind, O, T>),
        {
            fold_stream::<$kind, O, T, P>(op, producer)
        }

        concat_idents!(reduce_n = $prefix, _n {
            #[doc = concat!("The ", stringify!($prefix), " of `a`, `b`, `c` and then every operand of `rest`, combined left to right.")]
            pub fn reduce_n<O, T, I>(op: &O, a: T, b: T, c: T, rest: I) -> Result<T, FoldError<O::Error>>
            where
                O: ?Sized + $op_trait<T, Output = T>,
                I: IntoIterator<Item = T>,
            {
                $stream(op, |emitter| {
                    let _ = emitter.emit_all([a, b, c].into_iter().chain(rest));
                })
            }
        });

        concat_idents!(reduce_iter = $prefix, _iter {
            #[doc = concat!("The ", stringify!($prefix), " of every operand `values` yields, combined left to right.")]
            ///
            /// No more operands are pulled from `values` once the operator has failed.
            pub fn reduce_iter<O, T, I>(op: &O, values: I) -> Result<T, FoldError<O::Error>>
            where
                O: ?Sized + $op_trait<T, Output = T>,
                I: IntoIterator<Item = T>,
            {
                $stream(op, |emitter| {
                    let _ = emitter.emit_all(values);
                })
            }
        });

        concat_idents!(reduce_array = $prefix, _array {
            #[doc = concat!("The ", stringify!($prefix), " of a statically non-empty array, combined in index order.")]
            pub fn reduce_array<O, T, N>(op: &O, values: GenericArray<T, N>) -> Result<T, O::Error>
            where
                O: ?Sized + $op_trait<T, Output = T>,
                N: ArrayLength + NonZero + Sub<B1>,
                Sub1<N>: ArrayLength + Add<B1, Output = N>,
            {
                fold_array::<$kind, O, T, N>(op, values)
            }
        });
    };
}

impl_reductions!(Sum, Addition, sum2, sum_stream, sum);
impl_reductions!(Product, Multiplication, product2, product_stream, product);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{adding, from_fn, total, Checked, Std, Wrapping};
    use core::cell::{Cell, RefCell};
    use generic_array::arr;
    use proptest::prelude::*;

    fn concat() -> impl Addition<String, Output = String, Error = core::convert::Infallible> {
        total(|a: String, b: String| a + &b, ())
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn pairs() {
        assert_eq!(sum2(&Std, 2, 3), Ok(5));
        assert_eq!(product2(&Std, 2, 3), Ok(6));
        assert_eq!(sum2(&Std, String::from("Σ"), "Π"), Ok(String::from("ΣΠ")));
        assert_eq!(sum_same(&Checked, 250u8, 5), Ok(255));
        assert!(product_same(&Checked, 128u8, 2).is_err());
    }

    #[test]
    fn n_ary() {
        assert_eq!(sum_n(&Std, 1, 2, 3, [4, 5]), Ok(15));
        assert_eq!(product_n(&Std, 1, 2, 3, [4, 5]), Ok(120));
        assert_eq!(sum_n(&Std, 1, 2, 3, []), Ok(6));
    }

    #[test]
    fn n_ary_is_the_stream_over_the_same_operands() {
        let op = concat();
        let words = strings(&["a", "b", "c", "d", "e"]);
        let via_n = sum_n(
            &op,
            words[0].clone(),
            words[1].clone(),
            words[2].clone(),
            words[3..].iter().cloned(),
        );
        let via_stream = sum_stream(&op, |emitter| {
            for word in &words {
                let _ = emitter.emit(word.clone());
            }
        });
        assert_eq!(via_n, via_stream);
        assert_eq!(via_n.as_deref(), Ok("abcde"));

        let via_n = sum_n(&op, words[0].clone(), words[1].clone(), words[2].clone(), []);
        let via_stream = sum_iter(&op, words[..3].iter().cloned());
        assert_eq!(via_n, via_stream);
    }

    #[test]
    fn streams() {
        let res = product_stream(&Std, |emitter| {
            for value in 1..=5u64 {
                let _ = emitter.emit(value);
            }
        });
        assert_eq!(res, Ok(120));

        let res = sum_stream::<_, i32, _>(&Std, |_emitter| {});
        assert_eq!(res, Err(FoldError::EmptySequence));
    }

    #[test]
    fn iterators() {
        assert_eq!(sum_iter(&Std, 1..=100u32), Ok(5050));
        assert_eq!(product_iter(&Std, core::iter::empty::<f64>()), Err(FoldError::EmptySequence));
        assert_eq!(product_iter(&Std, [2.5f64]), Ok(2.5));
    }

    #[test]
    fn arrays() {
        assert_eq!(sum_array(&Std, arr![1, 2, 3, 4, 5]), Ok(15));
        assert_eq!(product_array(&Std, arr![1, 2, 3, 4, 5]), Ok(120));
        assert_eq!(sum_array(&Checked, arr![i8::MIN]), Ok(i8::MIN));
    }

    #[test]
    fn operator_failure_is_returned_unchanged_and_stops_the_fold() {
        #[derive(Debug, Clone, PartialEq)]
        struct Refused {
            lhs: i32,
            rhs: i32,
        }

        let seen = RefCell::new(Vec::new());
        let op = from_fn(
            |lhs: i32, rhs: i32| {
                seen.borrow_mut().push((lhs, rhs));
                if rhs < 0 {
                    Err(Refused { lhs, rhs })
                } else {
                    Ok(lhs + rhs)
                }
            },
            (),
        );
        let res = sum_n(&op, 1, 2, 3, [-4, 5, 6]);
        assert_eq!(res, Err(FoldError::Operator(Refused { lhs: 6, rhs: -4 })));
        assert_eq!(*seen.borrow(), [(1, 2), (3, 3), (6, -4)]);
    }

    #[test]
    fn stream_producer_may_stop_early() {
        let emitted = Cell::new(0);
        let res = sum_stream(&Checked, |emitter| {
            for value in [100u8, 100, 100, 100] {
                emitted.set(emitted.get() + 1);
                if emitter.emit(value).is_break() {
                    break;
                }
            }
        });
        assert!(res.is_err());
        assert_eq!(emitted.get(), 3);
    }

    #[test]
    fn sum_of_a_dyn_operator() {
        let op: &dyn Addition<u8, Output = u8, Error = crate::error::Overflow> = &Checked;
        assert_eq!(sum_iter(op, [1, 2, 3]), Ok(6));
    }

    proptest! {
        #[test]
        fn stream_folds_strictly_left_to_right(words in prop::collection::vec("[a-z]{0,3}", 1..12)) {
            let op = adding(|a: String, b: String| Ok::<_, ()>(format!("({a}{b})")));
            let expected = words[1..]
                .iter()
                .fold(words[0].clone(), |acc, word| format!("({acc}{word})"));
            let res = sum_stream(&op, |emitter| {
                for word in &words {
                    let _ = emitter.emit(word.clone());
                }
            });
            prop_assert_eq!(res, Ok(expected));
        }

        #[test]
        fn iter_matches_wrapping_fold(values in prop::collection::vec(any::<i32>(), 1..64)) {
            let expected = values[1..].iter().fold(values[0], |acc, x| acc.wrapping_mul(*x));
            prop_assert_eq!(product_iter(&Wrapping, values.iter().copied()), Ok(expected));
        }

        #[test]
        fn n_ary_matches_iter(a: i16, b: i16, c: i16, rest in prop::collection::vec(any::<i16>(), 0..8)) {
            let all = [a, b, c].into_iter().chain(rest.iter().copied());
            prop_assert_eq!(sum_n(&Checked, a, b, c, rest.iter().copied()), sum_iter(&Checked, all));
        }
    }
}
