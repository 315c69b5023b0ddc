#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::all))]

//! # parachute
//!
//! Fallback adapters that let closures which may fail stand in for ordinary functions,
//! predicates and consumers.
//!
//! A fallible closure returns `Result<R, E>`. Wrapping it and choosing a fallback turns it
//! into an adapter whose outer call always succeeds: the failure is absorbed and replaced by
//! the fallback's result, or for consumers the fallback runs in place of the action.
//!
//! ## Features
//!
//! - **Shapes** for one, two and three arguments: [`Function`], [`Predicate`], [`Consumer`],
//!   [`BiFunction`], [`BiPredicate`], [`BiConsumer`], [`TriFunction`], [`TriPredicate`],
//!   [`TriConsumer`], and the same-type [`operator`] aliases
//! - **Fallbacks** from a constant, the original arguments, the arguments and the failure,
//!   a supplier, or nothing at all (`Default::default()`, `false`, no-op)
//! - **Opt-in rethrow** through [`rethrow()`] when a fallback wants the caller to see the failure
//! - **Predicate algebra** with `!`, `&` and `|`
//! - **One-shot helpers** in [`suppress`] for closures that borrow from the stack
//! - **Tower integration** (`service` feature) recovering failed service calls
//!
//! ## Quick Start
//!
//! ```rust
//! use parachute::{Function, Predicate};
//!
//! #[derive(Debug)]
//! struct DivideByZero;
//!
//! let divide = Function::new(|x: &i32| 10i32.checked_div(*x).ok_or(DivideByZero));
//!
//! let or_null = divide.clone().and_then(Some).or_default();
//! assert_eq!(or_null.apply(&0), None);
//! assert_eq!(or_null.apply(&5), Some(2));
//!
//! let rollback = divide.or_else(|x| *x);
//! assert_eq!(rollback.apply(&0), 0);
//!
//! let is_odd = Predicate::new(|x: &Option<i32>| x.map(|n| n % 2 != 0).ok_or(DivideByZero)).or_false();
//! assert!(!is_odd.test(&None));
//! ```
//!
//! Failures that are absorbed are reported as `tracing` debug events with the adapter shape
//! and the failure's type name; install a subscriber to see them.

mod algebra;
pub mod bi_consumer;
pub mod bi_function;
pub mod bi_predicate;
pub mod consumer;
pub mod error;
mod fallback;
pub mod function;
pub mod operator;
pub mod predicate;
pub mod prelude;
pub mod rethrow;
#[cfg(feature = "service")]
pub mod service;
pub mod suppress;
pub mod tri_consumer;
pub mod tri_function;
pub mod tri_predicate;

// Re-exports
pub use bi_consumer::BiConsumer;
pub use bi_function::BiFunction;
pub use bi_predicate::BiPredicate;
pub use consumer::Consumer;
pub use error::FallbackError;
pub use function::Function;
pub use operator::{BinaryOperator, TrinaryOperator, UnaryOperator};
pub use predicate::Predicate;
pub use rethrow::rethrow;
pub use tri_consumer::TriConsumer;
pub use tri_function::TriFunction;
pub use tri_predicate::TriPredicate;
