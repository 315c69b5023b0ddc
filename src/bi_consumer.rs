//! Two-argument actions that may fail.

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "bi-consumer";

type Action<T, U, E> = dyn Fn(&T, &U) -> Result<(), E> + Send + Sync;

/// Runs for its side effects over a pair of arguments; see [`Consumer`](crate::Consumer).
pub struct BiConsumer<T, U, E = Infallible> {
    inner: Arc<Action<T, U, E>>,
}

impl<T, U, E> Clone for BiConsumer<T, U, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, E> fmt::Debug for BiConsumer<T, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiConsumer").field("inner", &"<action>").finish()
    }
}

impl<T, U, E> BiConsumer<T, U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
{
    /// Wrap a fallible action over a pair of arguments.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&T, &U) -> Result<(), E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(action) }
    }

    /// Run the action once.
    pub fn try_accept(&self, first: &T, second: &U) -> Result<(), E> {
        (self.inner)(first, second)
    }

    /// Run `after` with the same arguments once this action completed; stops at a failure.
    pub fn and_then<H>(self, after: H) -> Self
    where
        H: Fn(&T, &U) + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U| {
            inner(first, second)?;
            after(first, second);
            Ok(())
        })
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> BiConsumer<T, U, X>
    where
        X: 'static,
        G: Fn(&T, &U, E) -> Result<(), X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        BiConsumer::new(move |first: &T, second: &U| {
            resolve(SHAPE, inner(first, second), |error| fallback(first, second, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> BiConsumer<T, U>
    where
        G: Fn(&T, &U, E) + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, error| {
            fallback(first, second, error);
            Ok(())
        })
    }

    pub fn or_else<G>(self, fallback: G) -> BiConsumer<T, U>
    where
        G: Fn(&T, &U) + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, _| fallback(first, second))
    }

    pub fn or_else_run<G>(self, fallback: G) -> BiConsumer<T, U>
    where
        G: Fn() + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _| fallback())
    }

    pub fn or_nothing(self) -> BiConsumer<T, U> {
        self.or_else_with(|_, _, _| {})
    }

    pub fn recover<G>(self, fallback: Option<G>) -> BiConsumer<T, U>
    where
        G: Fn(&T, &U, E) + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_nothing(),
        }
    }

    pub fn or_rethrow(self) -> BiConsumer<T, U, FallbackError<E>> {
        self.or_try_else(|_, _, error| rethrow(Some(error)))
    }
}

impl<T, U> BiConsumer<T, U>
where
    T: 'static,
    U: 'static,
{
    pub fn from_fn<F>(action: F) -> Self
    where
        F: Fn(&T, &U) + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U| {
            action(first, second);
            Ok(())
        })
    }

    /// Run the recovered action; failures were already absorbed.
    pub fn accept(&self, first: &T, second: &U) {
        absorb(self.try_accept(first, second))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U) + Send + Sync {
        move |first: &T, second: &U| self.accept(first, second)
    }
}
