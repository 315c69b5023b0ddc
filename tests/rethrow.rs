mod common;

use common::capture_logs;
use parachute::{rethrow, BiConsumer, FallbackError, Function, TriFunction};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Timeout {
    after_ms: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.after_ms)
    }
}

impl std::error::Error for Timeout {}

fn fetch() -> Function<u64, String, Timeout> {
    Function::new(|budget: &u64| if *budget < 100 { Err(Timeout { after_ms: *budget }) } else { Ok("payload".into()) })
}

#[test]
fn rethrow_preserves_the_failure_identity() {
    let err = fetch().or_rethrow().try_apply(&30).unwrap_err();
    assert_eq!(err.as_inner(), Some(&Timeout { after_ms: 30 }));
    assert_eq!(err.to_string(), "timed out after 30ms");
}

#[test]
fn selective_rethrow_absorbs_some_failures() {
    let fetch = fetch().or_try_else(|budget, error| if *budget == 0 { Ok(String::new()) } else { rethrow(Some(error)) });
    assert_eq!(fetch.try_apply(&0), Ok(String::new()));
    assert_eq!(fetch.try_apply(&500), Ok("payload".to_string()));
    assert_eq!(fetch.try_apply(&50), Err(FallbackError::Rethrown(Timeout { after_ms: 50 })));
}

#[test]
fn rethrown_failures_work_with_question_mark() {
    fn load(budget: u64) -> Result<usize, Box<dyn std::error::Error>> {
        let payload = fetch().or_rethrow().try_apply(&budget)?;
        Ok(payload.len())
    }
    assert_eq!(load(100).unwrap(), 7);
    let err = load(10).unwrap_err();
    assert_eq!(err.to_string(), "timed out after 10ms");
}

#[test]
fn rethrow_without_a_failure_is_reported() {
    let fetch = fetch().or_try_else(|_, _| rethrow::<String, Timeout>(None));
    assert!(fetch.try_apply(&1).unwrap_err().is_missing_failure());
}

#[test]
fn rethrow_across_arities() {
    let sum = TriFunction::new(|a: &u8, b: &u8, c: &u8| {
        a.checked_add(*b).and_then(|ab| ab.checked_add(*c)).ok_or(Timeout { after_ms: 0 })
    })
    .or_rethrow();
    assert_eq!(sum.try_apply(&1, &2, &3), Ok(6));
    assert!(sum.try_apply(&200, &50, &10).unwrap_err().is_rethrown());

    let write = BiConsumer::new(|_: &String, budget: &u64| {
        if *budget < 100 {
            Err(Timeout { after_ms: *budget })
        } else {
            Ok(())
        }
    })
    .or_rethrow();
    assert_eq!(write.try_accept(&"key".to_string(), &500), Ok(()));
    assert_eq!(
        write.try_accept(&"key".to_string(), &5).unwrap_err().into_inner(),
        Some(Timeout { after_ms: 5 })
    );
}

#[test]
fn absorbed_failures_are_logged_and_rethrow_is_traced() {
    let logs = capture_logs(|| {
        let _ = fetch().or_value(String::new()).apply(&1);
        let _ = fetch().or_rethrow().try_apply(&2);
    });
    assert!(logs.contains("resolving fallback"), "logs: {logs}");
    assert!(logs.contains("shape=\"function\"") || logs.contains("shape=function"), "logs: {logs}");
    assert!(logs.contains("failure=Timeout"), "logs: {logs}");
    assert!(logs.contains("rethrowing captured failure"), "logs: {logs}");
}

#[test]
fn successful_calls_log_nothing() {
    let logs = capture_logs(|| {
        let _ = fetch().or_value(String::new()).apply(&1000);
    });
    assert!(logs.is_empty(), "logs: {logs}");
}
