//! Convenient re-exports for common parachute types.
pub use crate::{
    bi_consumer::BiConsumer,
    bi_function::BiFunction,
    bi_predicate::BiPredicate,
    consumer::Consumer,
    error::FallbackError,
    function::Function,
    operator::{BinaryOperator, TrinaryOperator, UnaryOperator},
    predicate::Predicate,
    rethrow::rethrow,
    suppress,
    tri_consumer::TriConsumer,
    tri_function::TriFunction,
    tri_predicate::TriPredicate,
};

#[cfg(feature = "service")]
pub use crate::service::{RecoverLayer, RecoverService};
