//! Recovery for `tower` services.
//!
//! [`RecoverLayer`] is the service-level counterpart of [`Function::or_else_with`]: it wraps a
//! `Service<Request, Error = E>` into a service whose error type is [`Infallible`], replacing
//! each failed call with `fallback(request, error)`. The request is cloned before the inner
//! call so the fallback always receives the original.
//!
//! A readiness failure of the inner service is absorbed as well: the wrapper reports itself
//! ready and resolves the held failure through the fallback on the next `call`.
//!
//! ```
//! use parachute::service::RecoverLayer;
//! use tower::{service_fn, Layer, ServiceExt};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let lookup = service_fn(|id: u32| async move {
//!     if id == 0 { Err("no such user") } else { Ok(format!("user-{id}")) }
//! });
//! let svc = RecoverLayer::new(|id: u32, _: &'static str| format!("guest-{id}")).layer(lookup);
//!
//! assert_eq!(svc.clone().oneshot(7).await.unwrap(), "user-7");
//! assert_eq!(svc.oneshot(0).await.unwrap(), "guest-0");
//! # }
//! ```
//!
//! [`Function::or_else_with`]: crate::Function::or_else_with

use crate::fallback::{absorb, resolve};
use futures::future::{self, BoxFuture, FutureExt};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

const SHAPE: &str = "service";

/// Layer producing [`RecoverService`].
pub struct RecoverLayer<G, E> {
    fallback: Arc<G>,
    _failure: PhantomData<fn() -> E>,
}

impl<G, E> RecoverLayer<G, E> {
    pub fn new<Request, Response>(fallback: G) -> Self
    where
        G: Fn(Request, E) -> Response + Send + Sync + 'static,
    {
        Self { fallback: Arc::new(fallback), _failure: PhantomData }
    }
}

impl<G, E> Clone for RecoverLayer<G, E> {
    fn clone(&self) -> Self {
        Self { fallback: Arc::clone(&self.fallback), _failure: PhantomData }
    }
}

impl<G, E> fmt::Debug for RecoverLayer<G, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoverLayer").field("fallback", &"<fallback>").finish()
    }
}

impl<S, G, E> Layer<S> for RecoverLayer<G, E> {
    type Service = RecoverService<S, G, E>;

    fn layer(&self, service: S) -> Self::Service {
        RecoverService { inner: service, fallback: Arc::clone(&self.fallback), not_ready: None }
    }
}

/// Service that never fails: every inner failure is resolved through the fallback.
pub struct RecoverService<S, G, E> {
    inner: S,
    fallback: Arc<G>,
    not_ready: Option<E>,
}

impl<S, G, E> RecoverService<S, G, E> {
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone, G, E> Clone for RecoverService<S, G, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), fallback: Arc::clone(&self.fallback), not_ready: None }
    }
}

impl<S: fmt::Debug, G, E> fmt::Debug for RecoverService<S, G, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoverService")
            .field("inner", &self.inner)
            .field("fallback", &"<fallback>")
            .field("not_ready", &self.not_ready.is_some())
            .finish()
    }
}

impl<S, G, E, Request> Service<Request> for RecoverService<S, G, E>
where
    Request: Clone + Send + 'static,
    S: Service<Request, Error = E> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
    E: Send + 'static,
    G: Fn(Request, E) -> S::Response + Send + Sync + 'static,
{
    type Response = S::Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if self.not_ready.is_some() {
            return Poll::Ready(Ok(()));
        }
        match self.inner.poll_ready(cx) {
            Poll::Ready(Ok(())) => Poll::Ready(Ok(())),
            Poll::Ready(Err(error)) => {
                tracing::debug!(shape = SHAPE, "inner service not ready; holding failure for next call");
                self.not_ready = Some(error);
                Poll::Ready(Ok(()))
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let fallback = Arc::clone(&self.fallback);
        if let Some(error) = self.not_ready.take() {
            let response = absorb(resolve(SHAPE, Err(error), |error| Ok(fallback(request, error))));
            return future::ready(Ok(response)).boxed();
        }
        let retained = request.clone();
        let ready = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, ready);
        async move {
            let outcome = inner.call(request).await;
            Ok(absorb(resolve(SHAPE, outcome, |error| Ok(fallback(retained, error)))))
        }
        .boxed()
    }
}
