use criterion::{black_box, criterion_group, criterion_main, Criterion};

use teamfit_core::catalog::builtin_bank;
use teamfit_core::model::{Answer, QuestionBank};
use teamfit_core::parser::parse_bank_str;
use teamfit_core::scoring::{compute_tally, max_possible, rank_tally};

fn answers_for(bank: &QuestionBank, shift: usize) -> Vec<Answer> {
    bank.questions()
        .iter()
        .enumerate()
        .map(|(i, q)| Answer::new(q.id.clone(), (i + shift) % q.choices.len()))
        .collect()
}

fn bench_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("tally");
    let bank = builtin_bank().unwrap();

    group.bench_function("empty", |b| {
        b.iter(|| compute_tally(std::iter::empty::<(&str, usize)>(), black_box(&bank)))
    });

    group.bench_function("all_answered", |b| {
        let answers = answers_for(&bank, 1);
        b.iter(|| compute_tally(black_box(&answers).iter().map(Answer::as_pair), &bank))
    });

    group.bench_function("tally_and_rank", |b| {
        let answers = answers_for(&bank, 2);
        b.iter(|| {
            let tally = compute_tally(black_box(&answers).iter().map(Answer::as_pair), &bank)
                .unwrap();
            rank_tally(&tally)
        })
    });

    group.finish();
}

fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank");
    let bank = builtin_bank().unwrap();

    group.bench_function("max_possible", |b| {
        b.iter(|| max_possible(black_box(&bank)))
    });

    group.bench_function("parse_builtin", |b| {
        b.iter(|| {
            parse_bank_str(
                black_box(teamfit_core::catalog::BUILTIN_BANK),
                std::path::Path::new("bench.toml"),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tally, bench_bank);
criterion_main!(benches);
