use bigint::BigInt;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// 10^digits - 1 as a BigInt.
fn nines(digits: usize) -> BigInt {
    BigInt::parse(&"9".repeat(digits)).unwrap()
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for digits in [20, 200, 2000] {
        let (a, b) = (nines(digits), nines(digits / 2 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

fn bench_div_rem(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    for digits in [20, 200, 1000] {
        let (a, b) = (nines(digits), nines(digits / 3 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a).div_rem(black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let text = "1234567890".repeat(50);
    let value = BigInt::parse(&text).unwrap();
    c.bench_function("parse_500_digits", |b| {
        b.iter(|| BigInt::parse(black_box(&text)).unwrap())
    });
    c.bench_function("format_500_digits", |b| b.iter(|| black_box(&value).to_string()));
}

criterion_group!(benches, bench_mul, bench_div_rem, bench_text);
criterion_main!(benches);
