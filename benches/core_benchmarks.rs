//! Benchmarks for the gamenet-core data grid pipeline

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gamenet_core::grid::{GridQuery, SortState, collate, evaluate, page_window};
use gamenet_core::types::{Payment, PaymentField, PaymentStatus};
use gamenet_core::utils::format_amount;

const NAMES: [&str; 6] = [
    "علی رضایی",
    "سارا احمدی",
    "رضا محمدی",
    "مریم کریمی",
    "Kian Farahani",
    "پرویز تهرانی",
];

fn payments(count: u64) -> Vec<Payment> {
    (0..count)
        .map(|id| Payment {
            id,
            customer_name: NAMES[usize::try_from(id).unwrap_or(0) % NAMES.len()].to_string(),
            amount: i64::try_from((id * 7_919) % 500).unwrap_or(0) * 1_000,
            method: if id % 3 == 0 { "card" } else { "cash" }.to_string(),
            status: if id % 4 == 0 {
                PaymentStatus::Pending
            } else {
                PaymentStatus::Paid
            },
            paid_on: None,
            description: (id % 2 == 0).then(|| format!("night pass #{id}")),
        })
        .collect()
}

/// Full filter, sort and paginate evaluation at several dataset sizes
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let columns = Payment::columns();

    for size in [100u64, 1_000, 10_000] {
        let records = payments(size);
        group.throughput(Throughput::Elements(size));

        let mut query = GridQuery::new(20);
        query.sort = Some(SortState::descending(PaymentField::Amount));
        group.bench_with_input(BenchmarkId::new("sort_amount", size), &records, |b, records| {
            b.iter(|| evaluate(black_box(records), &columns, &query).total_items);
        });

        let mut query = GridQuery::new(20);
        query.search = "رضا".to_string();
        group.bench_with_input(BenchmarkId::new("search", size), &records, |b, records| {
            b.iter(|| evaluate(black_box(records), &columns, &query).total_items);
        });
    }

    group.finish();
}

/// Collation of mixed Persian, Latin and numeric text
fn bench_collation(c: &mut Criterion) {
    let mut group = c.benchmark_group("collation");
    let pairs = [
        ("پرویز", "تینا"),
        ("item 9", "item 10"),
        ("۱۲۰۰۰۰", "30000"),
        ("Kian", "kian"),
    ];

    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("collate_batch", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|(a, b)| collate(black_box(a), black_box(b)))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

/// Page window and amount formatting, run once per rendered page
fn bench_rendering_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.bench_function("page_window", |b| {
        b.iter(|| page_window(black_box(250), black_box(500), black_box(2)));
    });
    group.bench_function("format_amount", |b| {
        b.iter(|| format_amount(black_box(1_234_567)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pipeline,
    bench_collation,
    bench_rendering_helpers
);
criterion_main!(benches);
