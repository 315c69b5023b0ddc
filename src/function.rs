//! Single-argument functions that may fail, and the adapters recovered from them.
//!
//! A [`Function`] wraps a closure of one borrowed argument returning `Result<R, E>`.
//! Pairing it with a fallback through one of the `or_*` constructors produces a
//! `Function<T, R>` (error type [`Infallible`]), the only kind that exposes
//! [`apply`](Function::apply) and can stand in for a plain `Fn(&T) -> R`.
//!
//! Fallback shapes:
//! - `or_value`: a constant
//! - `or_else`: a function of the input
//! - `or_else_with`: a function of the input and the failure
//! - `or_else_get`: a supplier
//! - `or_default` / `recover(None)`: absent, resolves to `R::default()`
//!
//! Example
//! ```rust
//! use parachute::Function;
//!
//! #[derive(Debug)]
//! struct DivideByZero;
//!
//! let divide = Function::new(|x: &i32| 10i32.checked_div(*x).map(Some).ok_or(DivideByZero))
//!     .or_default();
//!
//! assert_eq!(divide.apply(&5), Some(2));
//! assert_eq!(divide.apply(&0), None);
//! ```

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "function";

type Callable<T, R, E> = dyn Fn(&T) -> Result<R, E> + Send + Sync;

/// A one-argument callable returning `Result<R, E>`.
///
/// With `E = Infallible` this is an adapter: calls always succeed.
pub struct Function<T, R, E = Infallible> {
    inner: Arc<Callable<T, R, E>>,
}

impl<T, R, E> Clone for Function<T, R, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, R, E> fmt::Debug for Function<T, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("inner", &"<callable>").finish()
    }
}

impl<T, R, E> Function<T, R, E>
where
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Wrap a fallible closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(function) }
    }

    /// Invoke the wrapped closure, returning its outcome untouched.
    pub fn try_apply(&self, input: &T) -> Result<R, E> {
        (self.inner)(input)
    }

    /// Apply `after` to every successful result.
    ///
    /// On an adapter this composes with the (possibly fallback) result. On a fallible
    /// function a failure propagates and `after` is not invoked; `after` itself is not guarded.
    pub fn and_then<V, H>(self, after: H) -> Function<T, V, E>
    where
        V: 'static,
        H: Fn(R) -> V + Send + Sync + 'static,
    {
        let inner = self.inner;
        Function::new(move |input: &T| inner(input).map(&after))
    }

    /// Recover with a fallback that may itself fail, typically via [`rethrow`].
    pub fn or_try_else<X, G>(self, fallback: G) -> Function<T, R, X>
    where
        X: 'static,
        G: Fn(&T, E) -> Result<R, X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        Function::new(move |input: &T| resolve(SHAPE, inner(input), |error| fallback(input, error)))
    }

    /// Recover with a function of the input and the failure.
    pub fn or_else_with<G>(self, fallback: G) -> Function<T, R>
    where
        G: Fn(&T, E) -> R + Send + Sync + 'static,
    {
        self.or_try_else(move |input, error| Ok(fallback(input, error)))
    }

    /// Recover with a function of the input.
    pub fn or_else<G>(self, fallback: G) -> Function<T, R>
    where
        G: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |input, _| fallback(input))
    }

    /// Recover with a supplier.
    pub fn or_else_get<G>(self, fallback: G) -> Function<T, R>
    where
        G: Fn() -> R + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _| fallback())
    }

    /// Recover with a constant.
    pub fn or_value(self, fallback: R) -> Function<T, R>
    where
        R: Clone + Send + Sync,
    {
        self.or_else_with(move |_, _| fallback.clone())
    }

    /// Recover with `R::default()`, the result of an absent fallback.
    pub fn or_default(self) -> Function<T, R>
    where
        R: Default,
    {
        self.or_else_with(|_, _| R::default())
    }

    /// Recover with a fallback that may be absent.
    pub fn recover<G>(self, fallback: Option<G>) -> Function<T, R>
    where
        R: Default,
        G: Fn(&T, E) -> R + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_default(),
        }
    }

    /// Hand every failure back to the caller as [`FallbackError::Rethrown`].
    pub fn or_rethrow(self) -> Function<T, R, FallbackError<E>> {
        self.or_try_else(|_, error| rethrow(Some(error)))
    }
}

impl<T, R> Function<T, R>
where
    T: 'static,
    R: 'static,
{
    /// Lift a closure that cannot fail.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self::new(move |input: &T| Ok(function(input)))
    }

    /// Call the recovered function; cannot fail.
    pub fn apply(&self, input: &T) -> R {
        absorb(self.try_apply(input))
    }

    /// Borrow-free closure view, e.g. for `Iterator::map`.
    pub fn into_fn(self) -> impl Fn(&T) -> R + Send + Sync {
        move |input: &T| self.apply(input)
    }
}

impl<T> Function<T, T>
where
    T: Clone + 'static,
{
    /// A function returning (a clone of) its input.
    pub fn identity() -> Self {
        Self::from_fn(T::clone)
    }
}
