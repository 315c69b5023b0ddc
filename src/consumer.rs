//! Single-argument actions that may fail.
//!
//! A [`Consumer`] runs for its side effects. Recovered consumers run a fallback action in
//! place of a failed one; an absent fallback does nothing. A consumer that has not been
//! recovered fails loud: [`try_accept`](Consumer::try_accept) returns the failure and
//! [`and_then`](Consumer::and_then) stops at it.

use crate::error::FallbackError;
use crate::fallback::{absorb, resolve};
use crate::rethrow::rethrow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

const SHAPE: &str = "consumer";

type Action<T, E> = dyn Fn(&T) -> Result<(), E> + Send + Sync;

pub struct Consumer<T, E = Infallible> {
    inner: Arc<Action<T, E>>,
}

impl<T, E> Clone for Consumer<T, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, E> fmt::Debug for Consumer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer").field("inner", &"<action>").finish()
    }
}

impl<T, E> Consumer<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Wrap a fallible action.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(action) }
    }

    /// Run the action once.
    pub fn try_accept(&self, input: &T) -> Result<(), E> {
        (self.inner)(input)
    }

    /// Run `after` with the same input once this action completed.
    ///
    /// If this action fails, the failure is returned and `after` does not run.
    pub fn and_then<H>(self, after: H) -> Self
    where
        H: Fn(&T) + Send + Sync + 'static,
    {
        let inner = self.inner;
        Self::new(move |input: &T| {
            inner(input)?;
            after(input);
            Ok(())
        })
    }

    pub fn or_try_else<X, G>(self, fallback: G) -> Consumer<T, X>
    where
        X: 'static,
        G: Fn(&T, E) -> Result<(), X> + Send + Sync + 'static,
    {
        let inner = self.inner;
        Consumer::new(move |input: &T| resolve(SHAPE, inner(input), |error| fallback(input, error)))
    }

    pub fn or_else_with<G>(self, fallback: G) -> Consumer<T>
    where
        G: Fn(&T, E) + Send + Sync + 'static,
    {
        self.or_try_else(move |input, error| {
            fallback(input, error);
            Ok(())
        })
    }

    pub fn or_else<G>(self, fallback: G) -> Consumer<T>
    where
        G: Fn(&T) + Send + Sync + 'static,
    {
        self.or_else_with(move |input, _| fallback(input))
    }

    /// Run a zero-argument action on failure.
    pub fn or_else_run<G>(self, fallback: G) -> Consumer<T>
    where
        G: Fn() + Send + Sync + 'static,
    {
        self.or_else_with(move |_, _| fallback())
    }

    /// Swallow failures.
    pub fn or_nothing(self) -> Consumer<T> {
        self.or_else_with(|_, _| {})
    }

    pub fn recover<G>(self, fallback: Option<G>) -> Consumer<T>
    where
        G: Fn(&T, E) + Send + Sync + 'static,
    {
        match fallback {
            Some(fallback) => self.or_else_with(fallback),
            None => self.or_nothing(),
        }
    }

    pub fn or_rethrow(self) -> Consumer<T, FallbackError<E>> {
        self.or_try_else(|_, error| rethrow(Some(error)))
    }
}

impl<T> Consumer<T>
where
    T: 'static,
{
    pub fn from_fn<F>(action: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self::new(move |input: &T| {
            action(input);
            Ok(())
        })
    }

    /// Run the recovered action; failures were already absorbed.
    pub fn accept(&self, input: &T) {
        absorb(self.try_accept(input))
    }

    pub fn into_fn(self) -> impl Fn(&T) + Send + Sync {
        move |input: &T| self.accept(input)
    }
}
