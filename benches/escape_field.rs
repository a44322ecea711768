use criterion::{Criterion, black_box, criterion_group, criterion_main};
use multibrot_explorer::{
    Complex, EscapeTimeEvaluator, GridSpec, RecurrenceParams, SampleWindow, evaluate_field_rayon,
};

fn reference_evaluator(power: f64) -> EscapeTimeEvaluator {
    let window = SampleWindow::new(-2.0, 2.0, -2.0, 2.0).unwrap();
    let grid = GridSpec::new(400, 400).unwrap();
    let params = RecurrenceParams::new(
        Complex {
            real: 0.355,
            imag: 0.355,
        },
        power,
    );

    EscapeTimeEvaluator::new(window, grid, 100, params).unwrap()
}

fn bench_sequential(c: &mut Criterion) {
    let evaluator = reference_evaluator(2.0);

    c.bench_function("evaluate_sequential_400x400", |b| {
        b.iter(|| black_box(&evaluator).evaluate())
    });
}

fn bench_parallel(c: &mut Criterion) {
    let evaluator = reference_evaluator(2.0);

    c.bench_function("evaluate_rayon_400x400", |b| {
        b.iter(|| evaluate_field_rayon(black_box(&evaluator)))
    });
}

fn bench_parallel_fractional_power(c: &mut Criterion) {
    let evaluator = reference_evaluator(2.5);

    c.bench_function("evaluate_rayon_400x400_fractional_power", |b| {
        b.iter(|| evaluate_field_rayon(black_box(&evaluator)))
    });
}

criterion_group!(
    benches,
    bench_sequential,
    bench_parallel,
    bench_parallel_fractional_power
);
criterion_main!(benches);
