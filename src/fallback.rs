//! The failure-resolution routine shared by every adapter.
//!
//! Each adapter runs its wrapped callable to obtain a `Result` and collapses it here:
//! a success passes through untouched and the fallback is never consulted; a failure is
//! handed to the fallback exactly once, together with whatever the adapter retained of the
//! original arguments.
//!
//! Semantics:
//! - One attempt, one fallback evaluation, no retry.
//! - The fallback decides the error type of the resolved call. Fallbacks that cannot fail
//!   resolve to `Result<R, Infallible>`, which [`absorb`] turns back into a plain `R`.

use crate::error::FailureName;
use std::convert::Infallible;

/// Collapse `outcome`, consulting `recover` only when the callable failed.
pub(crate) fn resolve<R, E, X, G>(shape: &'static str, outcome: Result<R, E>, recover: G) -> Result<R, X>
where
    G: FnOnce(E) -> Result<R, X>,
{
    match outcome {
        Ok(value) => Ok(value),
        Err(error) => {
            let failure = FailureName::of::<E>();
            tracing::debug!(shape, %failure, "callable failed; resolving fallback");
            recover(error)
        }
    }
}

/// Unwrap a resolution whose fallback cannot fail.
pub(crate) fn absorb<R>(resolved: Result<R, Infallible>) -> R {
    match resolved {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
