use ladders_game_types::links::{self, Link, LinkTable};
use ladders_game_types::types::Square;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_resolve_every_square(c: &mut Criterion) {
    let table = links::classic_snakes_and_ladders();
    c.bench_function("resolve every square of the classic table", |b| {
        b.iter(|| {
            (1..=64)
                .filter_map(|s| black_box(&table).resolve(s))
                .count()
        })
    });
}

fn bench_long_chain(c: &mut Criterion) {
    // 1 -> 3 -> 5 -> ... a ladder on every odd square of a 16x16 board
    let chain: Vec<Link> = (0..127)
        .map(|i| Link {
            from: 2 * i + 1,
            to: 2 * i + 3,
        })
        .collect();
    let table = LinkTable::new(256, chain).unwrap();
    c.bench_function("follow a 127 hop chain", |b| {
        b.iter(|| black_box(&table).chain(black_box(1 as Square)).unwrap())
    });
}

fn bench_validate(c: &mut Criterion) {
    let raw = links::classic_snakes_and_ladders().links();
    c.bench_function("validate the classic table", |b| {
        b.iter(|| LinkTable::new(64, black_box(raw.clone())).unwrap())
    });
}

criterion_group!(benches, bench_resolve_every_square, bench_long_chain, bench_validate);
criterion_main!(benches);
