//! Single-argument boolean tests that may fail.
//!
//! [`Predicate`] is the `bool` specialization of [`Function`]: the absent fallback is
//! `false`, and the boolean combinators [`negate`](Predicate::negate),
//! [`and`](Predicate::and) and [`or`](Predicate::or) evaluate through the fallback path.
//! Chaining a predicate into an arbitrary continuation is rejected, see
//! [`and_then`](Predicate::and_then).
//!
//! ```rust
//! use parachute::Predicate;
//!
//! #[derive(Debug)]
//! struct Missing;
//!
//! let is_odd = Predicate::new(|x: &Option<i32>| x.map(|x| x % 2 != 0).ok_or(Missing)).or_false();
//!
//! assert!(is_odd.test(&Some(3)));
//! assert!(!is_odd.test(&None));
//! ```

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::function::Function;
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "predicate";

type Test<T, E> = dyn Fn(&T) -> Result<bool, E> + Send + Sync;

/// A one-argument test returning `Result<bool, E>`.
pub struct Predicate<T, E = Infallible> {
    inner: Arc<Test<T, E>>,
}

impl<T, E> Clone for Predicate<T, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, E> fmt::Debug for Predicate<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("inner", &"<test>").finish()
    }
}

impl<T, E> Predicate<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Wrap a fallible test.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(test) }
    }

    /// Evaluate the test once.
    pub fn try_test(&self, input: &T) -> Result<bool, E> {
        (self.inner)(input)
    }

    /// Recover with a fallback that may itself fail.
    pub fn or_try_else<X, G>(self, fallback: G) -> Predicate<T, X>
    where
        X: 'static,
        G: Fn(&T, E) -> Result<bool, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        Predicate::new(move |input: &T| resolve(SHAPE, inner(input), |error| fallback(input, error)))
    }

    pub fn or_else_with<G>(self, fallback: G) -> Predicate<T>
    where
        G: Fn(&T, E) -> bool + Send + Sync + 'static,
    {
        self.or_try_else(move |input, error| Ok(fallback(input, error)))
    }

    pub fn or_else<G>(self, fallback: G) -> Predicate<T>
    where
        G: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |input, _| fallback(input))
    }

    pub fn or_else_get<G>(self, fallback: G) -> Predicate<T>
    where
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _| fallback())
    }

    pub fn or_value(self, fallback: bool) -> Predicate<T> {
        self.or_else_with(move |_, _| fallback)
    }

    /// Treat every failure as `false`.
    pub fn or_false(self) -> Predicate<T> {
        self.or_value(false)
    }

    /// Recover with a fallback that may be absent; `None` means `false`.
    pub fn recover<G>(self, fallback: Option<G>) -> Predicate<T>
    where
        G: Fn(&T, E) -> bool + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_false(),
        }
    }

    pub fn or_rethrow(self) -> Predicate<T, FallbackError<E>> {
        self.or_try_else(|_, error| rethrow(Some(error)))
    }

    /// Logical negation of the evaluated result.
    pub fn negate(self) -> Self {
        let inner = self.inner;
        Self::new(move |input: &T| inner(input).map(|verdict| !verdict))
    }

    /// Short-circuiting AND. An absent operand counts as `false`.
    pub fn and<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |input: &T| Ok(inner(input)? && other.as_ref().is_some_and(|other| other(input))))
    }

    /// Short-circuiting OR. An absent operand counts as `false`.
    pub fn or<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |input: &T| Ok(inner(input)? || other.as_ref().is_some_and(|other| other(input))))
    }

    /// Always rejected: a predicate's result is a verdict, not a value to map.
    ///
    /// Neither the predicate nor `after` is evaluated. Use
    /// [`into_function`](Self::into_function) to chain the raw `bool` explicitly.
    pub fn and_then<V, H>(&self, _after: H) -> Result<Function<T, V, E>, FallbackError<E>>
    where
        H: Fn(bool) -> V,
    {
        tracing::debug!(shape = SHAPE, "rejecting and_then on a predicate");
        Err(FallbackError::unsupported("and_then", SHAPE))
    }

    /// View this test as a general function returning `bool`.
    pub fn into_function(self) -> Function<T, bool, E> {
        let inner = self.inner;
        Function::new(move |input: &T| inner(input))
    }
}

impl<T> Predicate<T>
where
    T: 'static,
{
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(move |input: &T| Ok(test(input)))
    }

    /// Evaluate the recovered test; cannot fail.
    pub fn test(&self, input: &T) -> bool {
        absorb(self.try_test(input))
    }

    pub fn into_fn(self) -> impl Fn(&T) -> bool + Send + Sync {
        move |input: &T| self.test(input)
    }
}
