//! Error types surfaced when an adapter opts out of absorbing failures.
use std::fmt;

/// Failure raised through an adapter's `try_*` surface.
///
/// Adapters built with the plain `or_*` constructors never produce this type: their error
/// parameter is [`Infallible`](std::convert::Infallible). It only appears once a fallback
/// explicitly re-raises through [`rethrow`](crate::rethrow::rethrow), or when a composition
/// is requested that the adapter shape does not support.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackError<E> {
    /// The fallback handed the wrapped callable's failure back to the caller, unchanged.
    #[error("{0}")]
    Rethrown(E),
    /// `rethrow` was invoked without a failure to raise.
    #[error("rethrow requires a failure value, none was given")]
    MissingFailure,
    /// The adapter shape does not support the requested composition.
    #[error("`{operation}` is not supported on {shape} adapters")]
    Unsupported { operation: &'static str, shape: &'static str },
}

impl<E> FallbackError<E> {
    pub(crate) fn unsupported(operation: &'static str, shape: &'static str) -> Self {
        Self::Unsupported { operation, shape }
    }
    /// Check if this error carries a re-raised failure
    pub fn is_rethrown(&self) -> bool {
        matches!(self, Self::Rethrown(_))
    }
    /// Check if `rethrow` was called with nothing to raise
    pub fn is_missing_failure(&self) -> bool {
        matches!(self, Self::MissingFailure)
    }
    /// Check if this error reports an unsupported composition
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
    /// Get the re-raised failure if this is a `Rethrown` variant
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Rethrown(e) => Some(e),
            _ => None,
        }
    }
    /// Borrow the re-raised failure if present.
    pub fn as_inner(&self) -> Option<&E> {
        match self {
            Self::Rethrown(e) => Some(e),
            _ => None,
        }
    }
    /// Access the rejected operation and adapter shape as (operation, shape).
    pub fn unsupported_details(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Unsupported { operation, shape } => Some((operation, shape)),
            _ => None,
        }
    }
    /// Transform the re-raised failure, leaving the other variants untouched.
    pub fn map_inner<F, O>(self, op: O) -> FallbackError<F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Rethrown(e) => FallbackError::Rethrown(op(e)),
            Self::MissingFailure => FallbackError::MissingFailure,
            Self::Unsupported { operation, shape } => FallbackError::Unsupported { operation, shape },
        }
    }
}

/// Short type name of a failure, used as a structured logging field.
pub(crate) struct FailureName(pub(crate) &'static str);

impl FailureName {
    pub(crate) fn of<E>() -> Self {
        Self(std::any::type_name::<E>())
    }
}

impl fmt::Display for FailureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shorten every path inside the name, keeping generics, tuples and slices intact.
        let name = self.0;
        let mut start = 0;
        for (index, c) in name.char_indices() {
            if !(c.is_alphanumeric() || c == '_' || c == ':') {
                f.write_str(last_segment(&name[start..index]))?;
                f.write_str(&name[index..index + c.len_utf8()])?;
                start = index + c.len_utf8();
            }
        }
        f.write_str(last_segment(&name[start..]))
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
