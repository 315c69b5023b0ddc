//! Same-type operators and their selection helpers.
//!
//! Operators are functions whose arguments and result share one type, so they are plain
//! aliases of the function adapters and carry the full recovery family.
//!
//! ```rust
//! use parachute::operator;
//!
//! let min = operator::trinary_min_by(i32::cmp);
//! assert_eq!(min.apply(&Some(1), &None, &Some(3)), Some(1));
//! assert_eq!(min.apply(&None, &None, &None), None);
//! ```

use crate::bi_function::BiFunction;
use crate::function::Function;
use crate::tri_function::TriFunction;
use std::cmp::Ordering;
use std::convert::Infallible;

pub type UnaryOperator<T, E = Infallible> = Function<T, T, E>;

pub type BinaryOperator<T, E = Infallible> = BiFunction<T, T, T, E>;

/// Operates on three operands of one type.
///
/// The selection helpers below use `Option<T>` operands so that missing values can be skipped.
pub type TrinaryOperator<T, E = Infallible> = TriFunction<T, T, T, T, E>;

pub fn identity<T>() -> UnaryOperator<T>
where
    T: Clone + 'static,
{
    Function::identity()
}

/// The lesser operand under `compare`; ties keep the first.
pub fn binary_min_by<T, C>(compare: C) -> BinaryOperator<T>
where
    T: Clone + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    BiFunction::from_fn(move |first: &T, second: &T| lesser(&compare, first, second).clone())
}

/// The greater operand under `compare`; ties keep the first.
pub fn binary_max_by<T, C>(compare: C) -> BinaryOperator<T>
where
    T: Clone + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    BiFunction::from_fn(move |first: &T, second: &T| greater(&compare, first, second).clone())
}

/// The least present operand under `compare`, or `None` when every operand is missing.
///
/// Missing operands never take part in a comparison. Ties keep the earliest operand.
pub fn trinary_min_by<T, C>(compare: C) -> TrinaryOperator<Option<T>>
where
    T: Clone + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    TriFunction::from_fn(move |first: &Option<T>, second: &Option<T>, third: &Option<T>| {
        [first, second, third]
            .into_iter()
            .flatten()
            .reduce(|best, next| lesser(&compare, best, next))
            .cloned()
    })
}

/// The greatest present operand under `compare`, or `None` when every operand is missing.
pub fn trinary_max_by<T, C>(compare: C) -> TrinaryOperator<Option<T>>
where
    T: Clone + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    TriFunction::from_fn(move |first: &Option<T>, second: &Option<T>, third: &Option<T>| {
        [first, second, third]
            .into_iter()
            .flatten()
            .reduce(|best, next| greater(&compare, best, next))
            .cloned()
    })
}

fn lesser<'a, T, C>(compare: &C, first: &'a T, second: &'a T) -> &'a T
where
    C: Fn(&T, &T) -> Ordering,
{
    match compare(first, second) {
        Ordering::Greater => second,
        _ => first,
    }
}

fn greater<'a, T, C>(compare: &C, first: &'a T, second: &'a T) -> &'a T
where
    C: Fn(&T, &T) -> Ordering,
{
    match compare(first, second) {
        Ordering::Less => second,
        _ => first,
    }
}
