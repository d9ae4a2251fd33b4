//! Criterion benchmarks for the tmesis tokenizer.
//!
//! Covers the full tokenization pipeline on:
//! - plain Latin prose with enclitics and abbreviations
//! - Latin verse carrying vowel quantities
//! - Greek with elisions and kraseis
//! - markup-aware tokenization

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tmesis::analysis::analyzer::Analyzer;
use tmesis::lexicon::{StemKind, WordType};
use tmesis::prelude::*;

const LATIN: &str = "Gallia est omnis divisa in partes tres, quarum unam incolunt Belgae, \
aliam Aquitani, tertiam qui ipsorum lingua Celtae, nostra Galli appellantur. \
Hi omnes lingua, institutis, legibus inter se differunt, M. Cicero eoque ratione \
quam diu honestumne a. d. V Kal. Apr. pluresve.";

const METRICAL: &str = "Ārmă vĭrūmquĕ cănō, Trōiae quī prīmus ab ōrīs \
Ītălĭām fātō prŏfŭgūs Lāvīniăquĕ vēnit lītŏră, mūltum īllĕ ĕt tērrīs iactātus ĕt āltō.";

const GREEK: &str = "καὶ διὰ τῆς περὶ τὴν ἀρχαιολογίαν συγγραφῆς, εὖ δ᾽ἴστε κἄπειτα τοὔνομα.";

const XML: &str = r#"<lg org="uniform"><l n="1">Arma virumque cano, Troiae qui primus ab oris</l><l n="2">Italiam fato profugus Laviniaque venit</l></lg>"#;

fn lexicon() -> Arc<StemDictionary> {
    let dictionary = StemDictionary::from_entries(vec![
        StemEntry::new(WordType::Noun, StemKind::Nominative, "ratio", 3),
        StemEntry::new(WordType::Noun, StemKind::Stem, "ration", 3),
        StemEntry::new(WordType::Noun, StemKind::Stem, "homin", 3),
        StemEntry::new(WordType::Adjective, StemKind::Stem, "bon", 1),
    ])
    .unwrap();
    Arc::new(dictionary)
}

/// Generate lines of text by repeating `base`.
fn generate_lines(base: &str, count: usize) -> Vec<String> {
    (0..count).map(|_| base.to_string()).collect()
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let analyzer = ClassicalAnalyzer::new(lexicon());

    group.bench_function("latin_prose", |b| {
        b.iter(|| black_box(analyzer.tokenize(black_box(LATIN))))
    });

    group.bench_function("latin_metrical", |b| {
        b.iter(|| black_box(analyzer.tokenize(black_box(METRICAL))))
    });

    group.bench_function("greek", |b| {
        b.iter(|| black_box(analyzer.tokenize(black_box(GREEK))))
    });

    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let analyzer = ClassicalAnalyzer::new(lexicon());

    let unshifted = OptionOverrides {
        shifting: Some(false),
        ..Default::default()
    };
    group.bench_function("per_call_overrides", |b| {
        b.iter(|| black_box(analyzer.tokenize_with(black_box(LATIN), &unshifted)))
    });

    let xml = ClassicalAnalyzer::with_options(lexicon(), TokenizerOptions::default().with_xml(true))
        .unwrap();
    group.bench_function("xml", |b| b.iter(|| black_box(xml.tokenize(black_box(XML)))));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let analyzer = ClassicalAnalyzer::new(lexicon());
    let lines = generate_lines(LATIN, 100);

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("analyze_lines", |b| {
        b.iter(|| {
            for line in &lines {
                let tokens = analyzer.analyze(black_box(line)).map(|stream| stream.count());
                let _ = black_box(tokens);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_options, bench_batch);
criterion_main!(benches);
