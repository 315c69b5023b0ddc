//! Two-argument functions that may fail.
//!
//! Same contract as [`Function`](crate::Function) over a pair of borrowed arguments; every
//! fallback shape receives both arguments.
//!
//! ```rust
//! use parachute::BiFunction;
//!
//! #[derive(Debug)]
//! struct DivideByZero;
//!
//! let divide = BiFunction::new(|x: &i32, y: &i32| x.checked_div(*y).ok_or(DivideByZero))
//!     .or_else_with(|_, _, _| 0);
//!
//! assert_eq!(divide.apply(&10, &0), 0);
//! assert_eq!(divide.apply(&10, &2), 5);
//! ```

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "bi-function";

type Callable<T, U, R, E> = dyn Fn(&T, &U) -> Result<R, E> + Send + Sync;

pub struct BiFunction<T, U, R, E = Infallible> {
    inner: Arc<Callable<T, U, R, E>>,
}

impl<T, U, R, E> Clone for BiFunction<T, U, R, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, R, E> fmt::Debug for BiFunction<T, U, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiFunction").field("inner", &"<callable>").finish()
    }
}

impl<T, U, R, E> BiFunction<T, U, R, E>
where
    T: 'static,
    U: 'static,
    R: 'static,
    E: 'static,
{
    /// Wrap a fallible two-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(function) }
    }

    /// Call the wrapped function once with both arguments.
    pub fn try_apply(&self, first: &T, second: &U) -> Result<R, E> {
        (self.inner)(first, second)
    }

    /// Apply `after` to every successful result; failures propagate unchanged.
    pub fn and_then<V, H>(self, after: H) -> BiFunction<T, U, V, E>
    where
        V: 'static,
        H: Fn(R) -> V + Send + Sync + 'static,
    {
        let inner = self.inner;
        BiFunction::new(move |first: &T, second: &U| inner(first, second).map(&after))
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> BiFunction<T, U, R, X>
    where
        X: 'static,
        G: Fn(&T, &U, E) -> Result<R, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        BiFunction::new(move |first: &T, second: &U| {
            resolve(SHAPE, inner(first, second), |error| fallback(first, second, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> BiFunction<T, U, R>
    where
        G: Fn(&T, &U, E) -> R + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, error| Ok(fallback(first, second, error)))
    }

    pub fn or_else<G>(self, fallback: G) -> BiFunction<T, U, R>
    where
        G: Fn(&T, &U) -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, _| fallback(first, second))
    }

    pub fn or_else_get<G>(self, fallback: G) -> BiFunction<T, U, R>
    where
        G: Fn() -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _| fallback())
    }

    pub fn or_value(self, fallback: R) -> BiFunction<T, U, R>
    where
        R: Clone + Send + Sync,
    {
        self.or_else_with(move |_, _, _| fallback.clone())
    }

    pub fn or_default(self) -> BiFunction<T, U, R>
    where
        R: Default,
    {
        self.or_else_with(|_, _, _| R::default())
    }

    pub fn recover<G>(self, fallback: Option<G>) -> BiFunction<T, U, R>
    where
        R: Default,
        G: Fn(&T, &U, E) -> R + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_default(),
        }
    }

    pub fn or_rethrow(self) -> BiFunction<T, U, R, FallbackError<E>> {
        self.or_try_else(|_, _, error| rethrow(Some(error)))
    }
}

impl<T, U, R> BiFunction<T, U, R>
where
    T: 'static,
    U: 'static,
    R: 'static,
{
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&T, &U) -> R + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U| Ok(function(first, second)))
    }

    /// Call the recovered function; cannot fail.
    pub fn apply(&self, first: &T, second: &U) -> R {
        absorb(self.try_apply(first, second))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U) -> R + Send + Sync {
        move |first: &T, second: &U| self.apply(first, second)
    }
}
