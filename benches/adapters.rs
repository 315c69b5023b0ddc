use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parachute::service::RecoverLayer;
use parachute::{suppress, Function, Predicate};
use tower::{ServiceBuilder, ServiceExt};

#[derive(Debug)]
struct DivideByZero;

fn divide(x: &i32) -> Result<i32, DivideByZero> {
    1_000i32.checked_div(*x).ok_or(DivideByZero)
}

// Baseline: the bare closure with the failure handled inline.
fn bare_closure(c: &mut Criterion) {
    c.bench_function("bare_closure_unwrap_or", |b| {
        b.iter(|| divide(black_box(&7)).unwrap_or(0));
    });
}

fn adapter_success_path(c: &mut Criterion) {
    let adapter = Function::new(divide).or_value(0);
    c.bench_function("function_adapter_success", |b| {
        b.iter(|| adapter.apply(black_box(&7)));
    });
}

fn adapter_fallback_path(c: &mut Criterion) {
    let adapter = Function::new(divide).or_else_with(|x, _| -x);
    c.bench_function("function_adapter_fallback", |b| {
        b.iter(|| adapter.apply(black_box(&0)));
    });
}

fn predicate_algebra(c: &mut Criterion) {
    let even = Predicate::from_fn(|x: &i32| x % 2 == 0);
    let positive = Predicate::new(|x: &i32| divide(x).map(|q| q > 0)).or_false();
    let combined = even & !positive;
    c.bench_function("predicate_and_not", |b| {
        b.iter(|| combined.test(black_box(&-4)));
    });
}

fn suppress_helper(c: &mut Criterion) {
    c.bench_function("suppress_or_value_fallback", |b| {
        b.iter(|| suppress::or_value(black_box(&0), divide, 0));
    });
}

fn recover_service_fallback(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = ServiceBuilder::new()
        .layer(RecoverLayer::new(|_: i32, _: DivideByZero| 0))
        .service(tower::service_fn(|x: i32| futures::future::ready(divide(&x))));

    c.bench_function("recover_service_fallback", |b| {
        b.to_async(&rt).iter(|| async {
            let local_svc = svc.clone();
            let _ = black_box(local_svc.oneshot(black_box(0)).await);
        });
    });
}

criterion_group!(
    benches,
    bare_closure,
    adapter_success_path,
    adapter_fallback_path,
    predicate_algebra,
    suppress_helper,
    recover_service_fallback
);
criterion_main!(benches);
