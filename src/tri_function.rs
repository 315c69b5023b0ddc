//! Three-argument functions that may fail.
//!
//! Same contract as [`Function`](crate::Function) over three borrowed arguments.

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "tri-function";

type Callable<T, U, V, R, E> = dyn Fn(&T, &U, &V) -> Result<R, E> + Send + Sync;

pub struct TriFunction<T, U, V, R, E = Infallible> {
    inner: Arc<Callable<T, U, V, R, E>>,
}

impl<T, U, V, R, E> Clone for TriFunction<T, U, V, R, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, V, R, E> fmt::Debug for TriFunction<T, U, V, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriFunction").field("inner", &"<callable>").finish()
    }
}

impl<T, U, V, R, E> TriFunction<T, U, V, R, E>
where
    T: 'static,
    U: 'static,
    V: 'static,
    R: 'static,
    E: 'static,
{
    /// Wrap a fallible three-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &U, &V) -> Result<R, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(function) }
    }

    /// Call the wrapped function once with all three arguments.
    pub fn try_apply(&self, first: &T, second: &U, third: &V) -> Result<R, E> {
        (self.inner)(first, second, third)
    }

    /// Apply `after` to every successful result; failures propagate unchanged.
    pub fn and_then<W, H>(self, after: H) -> TriFunction<T, U, V, W, E>
    where
        W: 'static,
        H: Fn(R) -> W + Send + Sync + 'static,
    {
        let inner = self.inner;
        TriFunction::new(move |first: &T, second: &U, third: &V| inner(first, second, third).map(&after))
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> TriFunction<T, U, V, R, X>
    where
        X: 'static,
        G: Fn(&T, &U, &V, E) -> Result<R, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        TriFunction::new(move |first: &T, second: &U, third: &V| {
            resolve(SHAPE, inner(first, second, third), |error| fallback(first, second, third, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> TriFunction<T, U, V, R>
    where
        G: Fn(&T, &U, &V, E) -> R + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, third, error| Ok(fallback(first, second, third, error)))
    }

    pub fn or_else<G>(self, fallback: G) -> TriFunction<T, U, V, R>
    where
        G: Fn(&T, &U, &V) -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, third, _| fallback(first, second, third))
    }

    pub fn or_else_get<G>(self, fallback: G) -> TriFunction<T, U, V, R>
    where
        G: Fn() -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _, _| fallback())
    }

    pub fn or_value(self, fallback: R) -> TriFunction<T, U, V, R>
    where
        R: Clone + Send + Sync,
    {
        self.or_else_with(move |_, _, _, _| fallback.clone())
    }

    pub fn or_default(self) -> TriFunction<T, U, V, R>
    where
        R: Default,
    {
        self.or_else_with(|_, _, _, _| R::default())
    }

    pub fn recover<G>(self, fallback: Option<G>) -> TriFunction<T, U, V, R>
    where
        R: Default,
        G: Fn(&T, &U, &V, E) -> R + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_default(),
        }
    }

    pub fn or_rethrow(self) -> TriFunction<T, U, V, R, FallbackError<E>> {
        self.or_try_else(|_, _, _, error| rethrow(Some(error)))
    }
}

impl<T, U, V, R> TriFunction<T, U, V, R>
where
    T: 'static,
    U: 'static,
    V: 'static,
    R: 'static,
{
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&T, &U, &V) -> R + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U, third: &V| Ok(function(first, second, third)))
    }

    /// Call the recovered function; cannot fail.
    pub fn apply(&self, first: &T, second: &U, third: &V) -> R {
        absorb(self.try_apply(first, second, third))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U, &V) -> R + Send + Sync {
        move |first: &T, second: &U, third: &V| self.apply(first, second, third)
    }
}
