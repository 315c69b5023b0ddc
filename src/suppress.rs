//! One-shot helpers that run a fallible closure once and resolve its failure on the spot.
//!
//! Unlike the adapter types these take `FnOnce` closures with any lifetime, so they can
//! borrow from the caller's stack:
//!
//! ```rust
//! use parachute::suppress;
//!
//! let limit = 10;
//! assert!(suppress::is_true(&"7", |s| s.parse::<i32>().map(|n| n < limit)));
//! assert!(!suppress::is_true(&"seven", |s| s.parse::<i32>().map(|n| n < limit)));
//! assert_eq!(suppress::or_input(0, |x| 10i32.checked_div(*x).ok_or("divide by zero")), 0);
//! ```
//!
//! The `or_else*` helpers take the fallback as a closure too, and it may borrow as well:
//!
//! ```rust
//! use parachute::suppress;
//!
//! let defaults = vec![("port", 8080)];
//! let port = suppress::or_else_with("port", |raw: &str| raw.parse::<u16>(), |key, _| {
//!     defaults.iter().find(|(k, _)| *k == key).map_or(0, |(_, v)| *v)
//! });
//! assert_eq!(port, 8080);
//! ```
//!
//! Two- and three-argument forms live in [`bi`] and [`tri`].

use crate::fallback::{absorb, resolve};

const FUNCTION: &str = "function";
const PREDICATE: &str = "predicate";
const CONSUMER: &str = "consumer";

/// `false` when the test fails.
pub fn is_true<T, E, P>(input: &T, test: P) -> bool
where
    T: ?Sized,
    P: FnOnce(&T) -> Result<bool, E>,
{
    absorb(resolve(PREDICATE, test(input), |_| Ok(false)))
}

/// The input itself when the transform fails.
pub fn or_input<T, E, F>(input: T, transform: F) -> T
where
    F: FnOnce(&T) -> Result<T, E>,
{
    let outcome = transform(&input);
    absorb(resolve(FUNCTION, outcome, |_| Ok(input)))
}

/// `fallback` when the function fails.
pub fn or_value<T, R, E, F>(input: &T, function: F, fallback: R) -> R
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<R, E>,
{
    absorb(resolve(FUNCTION, function(input), |_| Ok(fallback)))
}

/// `None` when the function fails.
pub fn or_none<T, R, E, F>(input: &T, function: F) -> Option<R>
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<R, E>,
{
    absorb(resolve(FUNCTION, function(input).map(Some), |_| Ok(None)))
}

/// `R::default()` when the function fails.
pub fn or_default<T, R, E, F>(input: &T, function: F) -> R
where
    T: ?Sized,
    R: Default,
    F: FnOnce(&T) -> Result<R, E>,
{
    absorb(resolve(FUNCTION, function(input), |_| Ok(R::default())))
}

/// Run the action and ignore its failure.
pub fn run<T, E, F>(input: &T, action: F)
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<(), E>,
{
    absorb(resolve(CONSUMER, action(input), |_| Ok(())))
}

/// `fallback(input)` when the function fails.
pub fn or_else<T, R, E, F, G>(input: &T, function: F, fallback: G) -> R
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<R, E>,
    G: FnOnce(&T) -> R,
{
    absorb(resolve(FUNCTION, function(input), |_| Ok(fallback(input))))
}

/// `fallback(input, error)` when the function fails.
pub fn or_else_with<T, R, E, F, G>(input: &T, function: F, fallback: G) -> R
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<R, E>,
    G: FnOnce(&T, E) -> R,
{
    absorb(resolve(FUNCTION, function(input), |error| Ok(fallback(input, error))))
}

/// `fallback()` when the function fails.
pub fn or_else_get<T, R, E, F, G>(input: &T, function: F, fallback: G) -> R
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<R, E>,
    G: FnOnce() -> R,
{
    absorb(resolve(FUNCTION, function(input), |_| Ok(fallback())))
}

/// Run the action; on failure run `fallback` with the input and the failure instead.
pub fn run_or_else<T, E, F, G>(input: &T, action: F, fallback: G)
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<(), E>,
    G: FnOnce(&T, E),
{
    absorb(resolve(CONSUMER, action(input), |error| Ok(fallback(input, error))))
}

/// Two-argument helpers; the rollback value of [`or_input`](bi::or_input) is the first argument.
pub mod bi {
    use crate::fallback::{absorb, resolve};

    const FUNCTION: &str = "bi-function";
    const PREDICATE: &str = "bi-predicate";
    const CONSUMER: &str = "bi-consumer";

    pub fn is_true<T, U, E, P>(first: &T, second: &U, test: P) -> bool
    where
        T: ?Sized,
        U: ?Sized,
        P: FnOnce(&T, &U) -> Result<bool, E>,
    {
        absorb(resolve(PREDICATE, test(first, second), |_| Ok(false)))
    }

    pub fn or_input<T, U, E, F>(first: T, second: &U, transform: F) -> T
    where
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<T, E>,
    {
        let outcome = transform(&first, second);
        absorb(resolve(FUNCTION, outcome, |_| Ok(first)))
    }

    pub fn or_value<T, U, R, E, F>(first: &T, second: &U, function: F, fallback: R) -> R
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second), |_| Ok(fallback)))
    }

    pub fn or_none<T, U, R, E, F>(first: &T, second: &U, function: F) -> Option<R>
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second).map(Some), |_| Ok(None)))
    }

    pub fn or_default<T, U, R, E, F>(first: &T, second: &U, function: F) -> R
    where
        T: ?Sized,
        U: ?Sized,
        R: Default,
        F: FnOnce(&T, &U) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second), |_| Ok(R::default())))
    }

    pub fn run<T, U, E, F>(first: &T, second: &U, action: F)
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<(), E>,
    {
        absorb(resolve(CONSUMER, action(first, second), |_| Ok(())))
    }

    pub fn or_else<T, U, R, E, F, G>(first: &T, second: &U, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<R, E>,
        G: FnOnce(&T, &U) -> R,
    {
        absorb(resolve(FUNCTION, function(first, second), |_| Ok(fallback(first, second))))
    }

    pub fn or_else_with<T, U, R, E, F, G>(first: &T, second: &U, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<R, E>,
        G: FnOnce(&T, &U, E) -> R,
    {
        absorb(resolve(FUNCTION, function(first, second), |error| Ok(fallback(first, second, error))))
    }

    pub fn or_else_get<T, U, R, E, F, G>(first: &T, second: &U, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<R, E>,
        G: FnOnce() -> R,
    {
        absorb(resolve(FUNCTION, function(first, second), |_| Ok(fallback())))
    }

    pub fn run_or_else<T, U, E, F, G>(first: &T, second: &U, action: F, fallback: G)
    where
        T: ?Sized,
        U: ?Sized,
        F: FnOnce(&T, &U) -> Result<(), E>,
        G: FnOnce(&T, &U, E),
    {
        absorb(resolve(CONSUMER, action(first, second), |error| Ok(fallback(first, second, error))))
    }
}

/// Three-argument helpers.
pub mod tri {
    use crate::fallback::{absorb, resolve};

    const FUNCTION: &str = "tri-function";
    const PREDICATE: &str = "tri-predicate";
    const CONSUMER: &str = "tri-consumer";

    pub fn is_true<T, U, V, E, P>(first: &T, second: &U, third: &V, test: P) -> bool
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        P: FnOnce(&T, &U, &V) -> Result<bool, E>,
    {
        absorb(resolve(PREDICATE, test(first, second, third), |_| Ok(false)))
    }

    pub fn or_input<T, U, V, E, F>(first: T, second: &U, third: &V, transform: F) -> T
    where
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<T, E>,
    {
        let outcome = transform(&first, second, third);
        absorb(resolve(FUNCTION, outcome, |_| Ok(first)))
    }

    pub fn or_value<T, U, V, R, E, F>(first: &T, second: &U, third: &V, function: F, fallback: R) -> R
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second, third), |_| Ok(fallback)))
    }

    pub fn or_none<T, U, V, R, E, F>(first: &T, second: &U, third: &V, function: F) -> Option<R>
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second, third).map(Some), |_| Ok(None)))
    }

    pub fn or_default<T, U, V, R, E, F>(first: &T, second: &U, third: &V, function: F) -> R
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        R: Default,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
    {
        absorb(resolve(FUNCTION, function(first, second, third), |_| Ok(R::default())))
    }

    pub fn run<T, U, V, E, F>(first: &T, second: &U, third: &V, action: F)
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<(), E>,
    {
        absorb(resolve(CONSUMER, action(first, second, third), |_| Ok(())))
    }

    pub fn or_else<T, U, V, R, E, F, G>(first: &T, second: &U, third: &V, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
        G: FnOnce(&T, &U, &V) -> R,
    {
        absorb(resolve(FUNCTION, function(first, second, third), |_| Ok(fallback(first, second, third))))
    }

    pub fn or_else_with<T, U, V, R, E, F, G>(first: &T, second: &U, third: &V, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
        G: FnOnce(&T, &U, &V, E) -> R,
    {
        let outcome = function(first, second, third);
        absorb(resolve(FUNCTION, outcome, |error| Ok(fallback(first, second, third, error))))
    }

    pub fn or_else_get<T, U, V, R, E, F, G>(first: &T, second: &U, third: &V, function: F, fallback: G) -> R
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<R, E>,
        G: FnOnce() -> R,
    {
        absorb(resolve(FUNCTION, function(first, second, third), |_| Ok(fallback())))
    }

    pub fn run_or_else<T, U, V, E, F, G>(first: &T, second: &U, third: &V, action: F, fallback: G)
    where
        T: ?Sized,
        U: ?Sized,
        V: ?Sized,
        F: FnOnce(&T, &U, &V) -> Result<(), E>,
        G: FnOnce(&T, &U, &V, E),
    {
        let outcome = action(first, second, third);
        absorb(resolve(CONSUMER, outcome, |error| Ok(fallback(first, second, third, error))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;

    fn parse(raw: &str) -> Result<i64, ParseIntError> {
        raw.parse()
    }

    #[test]
    fn is_true_is_false_on_failure() {
        assert!(is_true("12", |s| parse(s).map(|n| n % 2 == 0)));
        assert!(!is_true("13", |s| parse(s).map(|n| n % 2 == 0)));
        assert!(!is_true("x", |s| parse(s).map(|n| n % 2 == 0)));
    }

    #[test]
    fn or_input_rolls_back() {
        let halve = |s: &String| parse(s).map(|n| (n / 2).to_string());
        assert_eq!(or_input("10".to_string(), halve), "5");
        assert_eq!(or_input("ten".to_string(), halve), "ten");
    }

    #[test]
    fn value_none_and_default() {
        assert_eq!(or_value("4", parse, -1), 4);
        assert_eq!(or_value("?", parse, -1), -1);
        assert_eq!(or_none("?", parse), None);
        assert_eq!(or_none("8", parse), Some(8));
        assert_eq!(or_default("?", parse), 0);
    }

    #[test]
    fn closures_may_borrow_locals() {
        let mut seen = Vec::new();
        run("3", |s| {
            seen.push(parse(s)?);
            Ok::<_, ParseIntError>(())
        });
        run("three", |s| {
            seen.push(parse(s)?);
            Ok::<_, ParseIntError>(())
        });
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn fallbacks_may_borrow_locals() {
        let aliases = [("one", 1i64), ("two", 2)];
        let lookup = |s: &str| aliases.iter().find(|(name, _)| *name == s).map_or(-1, |(_, n)| *n);
        assert_eq!(or_else("two", parse, lookup), 2);
        assert_eq!(or_else("7", parse, lookup), 7);
        assert_eq!(or_else("nine", parse, lookup), -1);

        let mut failures = Vec::new();
        let value = or_else_with("x1", parse, |raw, error| {
            failures.push(format!("{raw}: {error}"));
            0
        });
        assert_eq!(value, 0);
        assert_eq!(failures, vec!["x1: invalid digit found in string"]);

        let fallback = 42;
        assert_eq!(or_else_get("?", parse, || fallback), 42);
        assert_eq!(or_else_get("5", parse, || fallback), 5);
    }

    #[test]
    fn fallback_is_not_consulted_on_success() {
        let mut consulted = 0;
        let mut count = || {
            consulted += 1;
            0
        };
        assert_eq!(or_else_with("8", parse, |_, _| count()), 8);
        assert_eq!(or_else("8", parse, |_| count()), 8);
        assert_eq!(or_else_get("8", parse, &mut count), 8);
        assert_eq!(consulted, 0);
    }

    #[test]
    fn run_or_else_hands_the_failure_to_the_fallback() {
        let mut total = 0;
        let mut rejected = Vec::new();
        for raw in ["4", "four", "6"] {
            run_or_else(
                raw,
                |s| parse(s).map(|n| total += n),
                |s, error: ParseIntError| rejected.push((s.to_string(), error.to_string())),
            );
        }
        assert_eq!(total, 10);
        assert_eq!(rejected, vec![("four".to_string(), "invalid digit found in string".to_string())]);
    }

    #[test]
    fn two_argument_helpers() {
        let divide = |x: &i32, y: &i32| x.checked_div(*y).ok_or("divide by zero");
        assert_eq!(bi::or_value(&10, &0, divide, 0), 0);
        assert_eq!(bi::or_none(&10, &2, divide), Some(5));
        assert_eq!(bi::or_default(&10, &0, divide), 0);
        assert_eq!(bi::or_input(7, &0, divide), 7);
        assert!(!bi::is_true(&1, &0, |x: &i32, y: &i32| divide(x, y).map(|q| q == 0)));
        let mut total = 0;
        bi::run(&6, &3, |x: &i32, y: &i32| divide(x, y).map(|q| total += q));
        bi::run(&6, &0, |x: &i32, y: &i32| divide(x, y).map(|q| total += q));
        assert_eq!(total, 2);
    }

    #[test]
    fn two_argument_fallbacks_borrow_locals() {
        let divide = |x: &i32, y: &i32| x.checked_div(*y).ok_or("divide by zero");
        let saturate = i32::MAX;
        assert_eq!(bi::or_else(&10, &0, divide, |x, _| if *x > 0 { saturate } else { 0 }), saturate);
        assert_eq!(bi::or_else(&10, &5, divide, |_, _| saturate), 2);
        assert_eq!(bi::or_else_with(&3, &0, divide, |x, y, error| x + y + error.len() as i32), 17);
        assert_eq!(bi::or_else_get(&3, &0, divide, || saturate), saturate);

        let mut ledger = Vec::new();
        let mut total = 0;
        for (x, y) in [(8, 2), (1, 0)] {
            bi::run_or_else(
                &x,
                &y,
                |x: &i32, y: &i32| divide(x, y).map(|q| total += q),
                |x, y, error| ledger.push(format!("{x}/{y}: {error}")),
            );
        }
        assert_eq!(total, 4);
        assert_eq!(ledger, vec!["1/0: divide by zero"]);
    }

    #[test]
    fn three_argument_helpers() {
        let clamp = |x: &i32, lo: &i32, hi: &i32| if lo <= hi { Ok(*x.max(lo).min(hi)) } else { Err("empty range") };
        assert_eq!(tri::or_input(15, &0, &10, clamp), 10);
        assert_eq!(tri::or_input(15, &10, &0, clamp), 15);
        assert_eq!(tri::or_value(&5, &9, &1, clamp, -1), -1);
        assert_eq!(tri::or_none(&5, &9, &1, clamp), None);
        assert_eq!(tri::or_default(&-5, &0, &1, clamp), 0);
        assert!(tri::is_true(&3, &0, &9, |x: &i32, lo: &i32, hi: &i32| clamp(x, lo, hi).map(|c| c == *x)));
        let mut ran = false;
        tri::run(&0, &1, &0, |x: &i32, lo: &i32, hi: &i32| clamp(x, lo, hi).map(|_| ran = true));
        assert!(!ran);
    }

    #[test]
    fn three_argument_fallbacks_borrow_locals() {
        let clamp = |x: &i32, lo: &i32, hi: &i32| if lo <= hi { Ok(*x.max(lo).min(hi)) } else { Err("empty range") };
        let midpoint = |lo: &i32, hi: &i32| (lo + hi) / 2;
        assert_eq!(tri::or_else(&5, &9, &1, clamp, |_, lo, hi| midpoint(lo, hi)), 5);
        assert_eq!(tri::or_else(&50, &0, &10, clamp, |_, lo, hi| midpoint(lo, hi)), 10);
        assert_eq!(tri::or_else_with(&5, &9, &1, clamp, |x, _, _, error| if error.is_empty() { 0 } else { -x }), -5);
        let sentinel = i32::MIN;
        assert_eq!(tri::or_else_get(&5, &9, &1, clamp, || sentinel), sentinel);

        let mut painted = Vec::new();
        let mut skipped = Vec::new();
        for (x, lo, hi) in [(3, 0, 9), (3, 9, 0)] {
            tri::run_or_else(
                &x,
                &lo,
                &hi,
                |x: &i32, lo: &i32, hi: &i32| clamp(x, lo, hi).map(|c| painted.push(c)),
                |_, lo, hi, error| skipped.push(format!("{lo}..{hi} {error}")),
            );
        }
        assert_eq!(painted, vec![3]);
        assert_eq!(skipped, vec!["9..0 empty range"]);
    }
}
