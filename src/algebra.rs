//! Boolean operators for predicates.
//!
//! - `!p` - negation, same as [`Predicate::negate`]
//! - `p & q` - short-circuiting AND
//! - `p | q` - short-circuiting OR
//!
//! Both operands share the error type. A failure of either operand propagates unchanged;
//! recover the combined predicate to absorb it. The right operand is not evaluated when the
//! left one already decides the result.
//!
//! # Operator Precedence
//!
//! `&` binds tighter than `|`, so `a | b & c` is parsed as `a | (b & c)`.
//!
//! ```
//! use parachute::Predicate;
//!
//! let positive = Predicate::from_fn(|x: &i32| *x > 0);
//! let even = Predicate::from_fn(|x: &i32| x % 2 == 0);
//! let small = Predicate::from_fn(|x: &i32| x.abs() < 10);
//!
//! let p = !positive | even & small;
//! assert!(p.test(&-3));
//! assert!(p.test(&4));
//! assert!(!p.test(&12));
//! ```

use crate::bi_predicate::BiPredicate;
use crate::predicate::Predicate;
use crate::tri_predicate::TriPredicate;
use std::ops::{BitAnd, BitOr, Not};

macro_rules! predicate_algebra {
    ($name:ident<$($generic:ident),+>, $($arg:ident: $ty:ident),+) => {
        impl<$($generic: 'static,)+ E: 'static> Not for $name<$($generic,)+ E> {
            type Output = Self;
            fn not(self) -> Self::Output {
                self.negate()
            }
        }

        impl<$($generic: 'static,)+ E: 'static> BitAnd for $name<$($generic,)+ E> {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self::Output {
                Self::new(move |$($arg: &$ty),+| {
                    if !self.try_test($($arg),+)? {
                        return Ok(false);
                    }
                    rhs.try_test($($arg),+)
                })
            }
        }

        impl<$($generic: 'static,)+ E: 'static> BitOr for $name<$($generic,)+ E> {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self::Output {
                Self::new(move |$($arg: &$ty),+| {
                    if self.try_test($($arg),+)? {
                        return Ok(true);
                    }
                    rhs.try_test($($arg),+)
                })
            }
        }
    };
}

predicate_algebra!(Predicate<T>, input: T);
predicate_algebra!(BiPredicate<T, U>, first: T, second: U);
predicate_algebra!(TriPredicate<T, U, V>, first: T, second: U, third: V);
