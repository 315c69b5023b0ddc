//! Three-argument boolean tests that may fail.

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use crate::tri_function::TriFunction;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "tri-predicate";

type Test<T, U, V, E> = dyn Fn(&T, &U, &V) -> Result<bool, E> + Send + Sync;

pub struct TriPredicate<T, U, V, E = Infallible> {
    inner: Arc<Test<T, U, V, E>>,
}

impl<T, U, V, E> Clone for TriPredicate<T, U, V, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, V, E> fmt::Debug for TriPredicate<T, U, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriPredicate").field("inner", &"<test>").finish()
    }
}

impl<T, U, V, E> TriPredicate<T, U, V, E>
where
    T: 'static,
    U: 'static,
    V: 'static,
    E: 'static,
{
    /// Wrap a fallible test over three arguments.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U, &V) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(test) }
    }

    /// Evaluate the test once.
    pub fn try_test(&self, first: &T, second: &U, third: &V) -> Result<bool, E> {
        (self.inner)(first, second, third)
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> TriPredicate<T, U, V, X>
    where
        X: 'static,
        G: Fn(&T, &U, &V, E) -> Result<bool, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        TriPredicate::new(move |first: &T, second: &U, third: &V| {
            resolve(SHAPE, inner(first, second, third), |error| fallback(first, second, third, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> TriPredicate<T, U, V>
    where
        G: Fn(&T, &U, &V, E) -> bool + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, third, error| Ok(fallback(first, second, third, error)))
    }

    pub fn or_else<G>(self, fallback: G) -> TriPredicate<T, U, V>
    where
        G: Fn(&T, &U, &V) -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, third, _| fallback(first, second, third))
    }

    pub fn or_else_get<G>(self, fallback: G) -> TriPredicate<T, U, V>
    where
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _, _| fallback())
    }

    pub fn or_value(self, fallback: bool) -> TriPredicate<T, U, V> {
        self.or_else_with(move |_, _, _, _| fallback)
    }

    pub fn or_false(self) -> TriPredicate<T, U, V> {
        self.or_value(false)
    }

    pub fn recover<G>(self, fallback: Option<G>) -> TriPredicate<T, U, V>
    where
        G: Fn(&T, &U, &V, E) -> bool + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_false(),
        }
    }

    pub fn or_rethrow(self) -> TriPredicate<T, U, V, FallbackError<E>> {
        self.or_try_else(|_, _, _, error| rethrow(Some(error)))
    }

    pub fn negate(self) -> Self {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U, third: &V| inner(first, second, third).map(|verdict| !verdict))
    }

    pub fn and<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T, &U, &V) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U, third: &V| {
            Ok(inner(first, second, third)? && other.as_ref().is_some_and(|other| other(first, second, third)))
        })
    }

    pub fn or<P>(self, other: Option<P>) -> Self
    where
        P: Fn(&T, &U, &V) -> bool + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U, third: &V| {
            Ok(inner(first, second, third)? || other.as_ref().is_some_and(|other| other(first, second, third)))
        })
    }

    /// Always rejected without evaluating anything, see [`Predicate::and_then`](crate::Predicate::and_then).
    pub fn and_then<W, H>(&self, _after: H) -> Result<TriFunction<T, U, V, W, E>, FallbackError<E>>
    where
        H: Fn(bool) -> W,
    {
        tracing::debug!(shape = SHAPE, "rejecting and_then on a predicate");
        Err(FallbackError::unsupported("and_then", SHAPE))
    }

    pub fn into_function(self) -> TriFunction<T, U, V, bool, E> {
        let inner = self.inner;
        TriFunction::new(move |first: &T, second: &U, third: &V| inner(first, second, third))
    }
}

impl<T, U, V> TriPredicate<T, U, V>
where
    T: 'static,
    U: 'static,
    V: 'static,
{
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(&T, &U, &V) -> bool + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U, third: &V| Ok(test(first, second, third)))
    }

    /// Evaluate the recovered test; cannot fail.
    pub fn test(&self, first: &T, second: &U, third: &V) -> bool {
        absorb(self.try_test(first, second, third))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U, &V) -> bool + Send + Sync {
        move |first: &T, second: &U, third: &V| self.test(first, second, third)
    }
}
