//! Two-argument boolean tests that may fail.

use crate::bi_function::BiFunction;
use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "bi-predicate";

type Test<T, U, E> = dyn Fn(&T, &U) -> Result<bool, E> + Send + Sync;

/// The `bool` specialization of [`BiFunction`]; absent fallbacks and operands are `false`.
pub struct BiPredicate<T, U, E = Infallible> {
    inner: Arc<Test<T, U, E>>,
}

impl<T, U, E> Clone for BiPredicate<T, U, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, E> fmt::Debug for BiPredicate<T, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiPredicate").field("inner", &"<test>").finish()
    }
}

impl<T, U, E> BiPredicate<T, U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
{
    /// Wrap a fallible test over a pair of arguments.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(test) }
    }

    /// Evaluate the test once.
    pub fn try_test(&self, first: &T, second: &U) -> Result<bool, E> {
        (self.inner)(first, second)
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> BiPredicate<T, U, X>
    where
        X: 'static,
        G: Fn(&T, &U, E) -> Result<bool, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        BiPredicate::new(move |first: &T, second: &U| {
            resolve(SHAPE, inner(first, second), |error| fallback(first, second, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> BiPredicate<T, U>
    where
        G: Fn(&T, &U, E) -> bool + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, error| Ok(fallback(first, second, error)))
    }

    pub fn or_else<G>(self, fallback: G) -> BiPredicate<T, U>
    where
        G: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, _| fallback(first, second))
    }

    pub fn or_else_get<G>(self, fallback: G) -> BiPredicate<T, U>
    where
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _| fallback())
    }

    pub fn or_value(self, fallback: bool) -> BiPredicate<T, U> {
        self.or_else_with(move |_, _, _| fallback)
    }

    pub fn or_false(self) -> BiPredicate<T, U> {
        self.or_value(false)
    }

    pub fn recover<G>(self, fallback: Option<G>) -> BiPredicate<T, U>
    where
        G: Fn(&T, &U, E) -> bool + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_false(),
        }
    }

    pub fn or_rethrow(self) -> BiPredicate<T, U, FallbackError<E>> {
        self.or_try_else(|_, _, error| rethrow(Some(error)))
    }

    pub fn negate(self) -> Self {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U| inner(first, second).map(|verdict| !verdict))
    }

    pub fn and<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U| {
            Ok(inner(first, second)? && other.as_ref().is_some_and(|other| other(first, second)))
        })
    }

    pub fn or<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U| {
            Ok(inner(first, second)? || other.as_ref().is_some_and(|other| other(first, second)))
        })
    }

    /// Always rejected without evaluating anything, see [`Predicate::and_then`](crate::Predicate::and_then).
    pub fn and_then<V, H>(&self, _after: H) -> Result<BiFunction<T, U, V, E>, FallbackError<E>>
    where
        H: Fn(bool) -> V,
    {
        tracing::debug!(shape = SHAPE, "rejecting and_then on a predicate");
        Err(FallbackError::unsupported("and_then", SHAPE))
    }

    pub fn into_function(self) -> BiFunction<T, U, bool, E> {
        let inner = self.inner;
        BiFunction::new(move |first: &T, second: &U| inner(first, second))
    }
}

impl<T, U> BiPredicate<T, U>
where
    T: 'static,
    U: 'static,
{
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U| Ok(test(first, second)))
    }

    /// Evaluate the recovered test; cannot fail.
    pub fn test(&self, first: &T, second: &U) -> bool {
        absorb(self.try_test(first, second))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U) -> bool + Send + Sync {
        move |first: &T, second: &U| self.test(first, second)
    }
}
