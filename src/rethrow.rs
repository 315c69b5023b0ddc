//! Re-raise a captured failure from inside a fallback.
//!
//! Fallbacks passed to `or_try_else` return a `Result`; returning `rethrow(Some(error))`
//! hands the original failure back to whoever called the adapter's `try_*` surface,
//! exactly as if the adapter were not there.

use crate::error::{FailureName, FallbackError};

/// Surface `failure` to the caller's normal error path.
///
/// A missing failure is itself reported as [`FallbackError::MissingFailure`], so this never
/// silently succeeds.
///
/// ```
/// use parachute::{rethrow, Function, FallbackError};
///
/// let parse = Function::new(|s: &String| s.parse::<i32>())
///     .or_try_else(|s, error| if s.is_empty() { Ok(0) } else { rethrow(Some(error)) });
///
/// assert_eq!(parse.try_apply(&String::new()), Ok(0));
/// assert!(matches!(parse.try_apply(&"x".to_string()), Err(FallbackError::Rethrown(_))));
/// ```
pub fn rethrow<R, E>(failure: Option<E>) -> Result<R, FallbackError<E>> {
    match failure {
        Some(error) => {
            let failure = FailureName::of::<E>();
            tracing::trace!(%failure, "rethrowing captured failure");
            Err(FallbackError::Rethrown(error))
        }
        None => Err(FallbackError::MissingFailure),
    }
}
