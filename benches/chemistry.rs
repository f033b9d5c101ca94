use chempkg::element::ElementTable;
use chempkg::formula::FormulaParser;
use chempkg::molecule::Molecule;
use chempkg::reaction::is_balanced;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn parse_all(parser: &FormulaParser, formulas: &[&str]) -> u128 {
    let mut dummy = 0;
    for formula in formulas {
        dummy += parser.parse(formula).unwrap().total_atoms();
    }
    black_box(dummy)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chemistry");
    group.measurement_time(Duration::from_secs(6));

    group.bench_function("build element table", |b| b.iter(ElementTable::new));

    let parser = FormulaParser::new(ElementTable::global());
    let formulas = ["H2O", "CH3COOH", "C6H12O6", "NaCl", "C8H10N4O2", "KMnO4"];
    group.bench_function("parse formulas", |b| {
        b.iter(|| parse_all(&parser, black_box(&formulas)))
    });

    let side = |terms: &[(&str, u64)]| -> Vec<(Molecule<'static>, u64)> {
        terms
            .iter()
            .map(|&(f, n)| (Molecule::new(f).unwrap(), n))
            .collect()
    };
    let reactants = side(&[("C6H12O6", 1), ("O2", 6)]);
    let products = side(&[("CO2", 6), ("H2O", 6)]);
    group.bench_function("balance respiration", |b| {
        b.iter(|| is_balanced(black_box(&reactants), black_box(&products)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
