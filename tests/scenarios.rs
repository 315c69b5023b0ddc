use parachute::{operator, BiFunction, Consumer, Function, Predicate};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
struct DivideByZero;

fn divider() -> Function<i32, i32, DivideByZero> {
    Function::new(|x: &i32| 10i32.checked_div(*x).ok_or(DivideByZero))
}

#[test]
fn divider_with_null_fallback() {
    let divide = divider().and_then(Some).or_default();
    assert_eq!(divide.apply(&0), None);
    assert_eq!(divide.apply(&5), Some(2));
}

#[test]
fn divider_with_rollback_fallback() {
    let divide = divider().or_else(|x| *x);
    assert_eq!(divide.apply(&0), 0);
}

#[test]
fn is_odd_is_false_for_missing_input() {
    let is_odd = Predicate::new(|x: &Option<i32>| x.map(|n| n % 2 != 0).ok_or(DivideByZero)).or_false();
    assert!(!is_odd.test(&None));
    assert!(is_odd.test(&Some(7)));
}

#[test]
fn two_argument_divider_with_failure_aware_fallback() {
    let divide = BiFunction::new(|x: &i32, y: &i32| x.checked_div(*y).ok_or(DivideByZero))
        .or_else_with(|_, _, _| 0);
    assert_eq!(divide.apply(&10, &0), 0);
    assert_eq!(divide.apply(&10, &2), 5);
}

#[test]
fn min_by_natural_order_skips_missing_values() {
    let min = operator::trinary_min_by(i32::cmp);
    assert_eq!(min.apply(&Some(1), &None, &Some(3)), Some(1));
    assert_eq!(min.apply(&None, &None, &None), None);
}

#[test]
fn absorption_holds_for_every_input() {
    let divide = divider().or_value(-1);
    for x in -20..=20 {
        let expected = if x == 0 { -1 } else { 10 / x };
        assert_eq!(divide.apply(&x), expected);
    }
}

#[test]
fn success_never_invokes_any_fallback_shape() {
    let calls = Arc::new(AtomicUsize::new(0));
    let count = |calls: &Arc<AtomicUsize>| {
        let calls = calls.clone();
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    };
    let (a, b, c, d) = (count(&calls), count(&calls), count(&calls), count(&calls));
    let adapters = [
        divider().or_else_get(move || {
            a();
            0
        }),
        divider().or_else(move |_| {
            b();
            0
        }),
        divider().or_else_with(move |_, _| {
            c();
            0
        }),
        divider().recover(Some(move |_: &i32, _: DivideByZero| {
            d();
            0
        })),
    ];
    for adapter in &adapters {
        assert_eq!(adapter.apply(&2), 5);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    for adapter in &adapters {
        assert_eq!(adapter.apply(&0), 0);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn absent_fallbacks_resolve_to_conservative_defaults() {
    assert_eq!(divider().and_then(Some).recover(None::<fn(&i32, DivideByZero) -> Option<i32>>).apply(&0), None);
    let never = Predicate::new(|_: &i32| Err::<bool, _>(DivideByZero));
    assert!(!never.recover(None::<fn(&i32, DivideByZero) -> bool>).test(&1));

    let log = Arc::new(Mutex::new(Vec::<i32>::new()));
    let sink = log.clone();
    let record: Consumer<i32, DivideByZero> = Consumer::new(move |x: &i32| {
        let quotient = 10i32.checked_div(*x).ok_or(DivideByZero)?;
        sink.lock().unwrap().push(quotient);
        Ok(())
    });
    let record = record.recover(None::<fn(&i32, DivideByZero)>);
    record.accept(&0);
    record.accept(&5);
    assert_eq!(*log.lock().unwrap(), vec![2]);
}
