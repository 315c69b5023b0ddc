//! Three-argument actions that may fail.

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "tri-consumer";

type Action<T, U, V, E> = dyn Fn(&T, &U, &V) -> Result<(), E> + Send + Sync;

pub struct TriConsumer<T, U, V, E = Infallible> {
    inner: Arc<Action<T, U, V, E>>,
}

impl<T, U, V, E> Clone for TriConsumer<T, U, V, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, U, V, E> fmt::Debug for TriConsumer<T, U, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriConsumer").field("inner", &"<action>").finish()
    }
}

impl<T, U, V, E> TriConsumer<T, U, V, E>
where
    T: 'static,
    U: 'static,
    V: 'static,
    E: 'static,
{
    /// Wrap a fallible action over three arguments.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&T, &U, &V) -> Result<(), E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(action) }
    }

    /// Run the action once.
    pub fn try_accept(&self, first: &T, second: &U, third: &V) -> Result<(), E> {
        (self.inner)(first, second, third)
    }

    /// Run `after` with the same arguments once this action completed; stops at a failure.
    pub fn and_then<H>(self, after: H) -> Self
    where
        H: Fn(&T, &U, &V) + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |first: &T, second: &U, third: &V| {
            inner(first, second, third)?;
            after(first, second, third);
            Ok(())
        })
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> TriConsumer<T, U, V, X>
    where
        X: 'static,
        G: Fn(&T, &U, &V, E) -> Result<(), X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        TriConsumer::new(move |first: &T, second: &U, third: &V| {
            resolve(SHAPE, inner(first, second, third), |error| fallback(first, second, third, error))
        })
    }

    pub fn or_else_with<G>(self, fallback: G) -> TriConsumer<T, U, V>
    where
        G: Fn(&T, &U, &V, E) + Send + Sync + 'static,
    {
        self.or_try_else(move |first, second, third, error| {
            fallback(first, second, third, error);
            Ok(())
        })
    }

    pub fn or_else<G>(self, fallback: G) -> TriConsumer<T, U, V>
    where
        G: Fn(&T, &U, &V) + Send + Sync + 'static,
    {
        self.or_else_with(move |first, second, third, _| fallback(first, second, third))
    }

    pub fn or_else_run<G>(self, fallback: G) -> TriConsumer<T, U, V>
    where
        G: Fn() + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _, _, _| fallback())
    }

    pub fn or_nothing(self) -> TriConsumer<T, U, V> {
        self.or_else_with(|_, _, _, _| {})
    }

    pub fn recover<G>(self, fallback: Option<G>) -> TriConsumer<T, U, V>
    where
        G: Fn(&T, &U, &V, E) + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_nothing(),
        }
    }

    pub fn or_rethrow(self) -> TriConsumer<T, U, V, FallbackError<E>> {
        self.or_try_else(|_, _, _, error| rethrow(Some(error)))
    }
}

impl<T, U, V> TriConsumer<T, U, V>
where
    T: 'static,
    U: 'static,
    V: 'static,
{
    pub fn from_fn<F>(action: F) -> Self
    where
        F: Fn(&T, &U, &V) + Send + Sync + 'static,
    {
        Self::new(move |first: &T, second: &U, third: &V| {
            action(first, second, third);
            Ok(())
        })
    }

    /// Run the recovered action; failures were already absorbed.
    pub fn accept(&self, first: &T, second: &U, third: &V) {
        absorb(self.try_accept(first, second, third))
    }

    pub fn into_fn(self) -> impl Fn(&T, &U, &V) + Send + Sync {
        move |first: &T, second: &U, third: &V| self.accept(first, second, third)
    }
}
