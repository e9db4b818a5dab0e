//! Conversion throughput benchmarks.
//!
//! Covers single-line conversion with both composers and whole-document
//! conversion of a synthetic corpus built from repeated Iliad lines.

use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use betacode::{
    BetaConverter, Composing, ConvertOptions, Precombined, UnicodeNorm, convert_document,
    convert_stream,
};

const LINES: [&str; 4] = [
    "*MH=NIN A)/EIDE QEA\\ *PHLHI+A/DEW *)AXILH=OS",
    "OU)LOME/NHN, H(\\ MURI/' *)AXAIOI=S A)/LGE' E)/QHKE,",
    "POLLA\\S D' I)FQI/MOUS YUXA\\S *)/AI+DI PROI/+AYEN",
    "H(RW/WN, AU)TOU\\S DE\\ E(LW/RIA TEU=XE KU/NESSIN",
];

fn corpus(repeat: usize) -> String {
    let mut text = String::new();
    for _ in 0..repeat {
        for line in LINES {
            text.push_str(line);
            text.push_str("\r\n");
        }
    }
    text
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let precombined = BetaConverter::new(Precombined);
    let composing = BetaConverter::new(Composing);

    group.bench_function("precombined", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(precombined.convert(black_box(line)));
            }
        });
    });

    group.bench_function("composing", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(composing.convert(black_box(line)));
            }
        });
    });

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let text = corpus(1_000);
    let mut group = c.benchmark_group("document");
    group.throughput(Throughput::Bytes(text.len() as u64));

    let options = ConvertOptions::default();
    group.bench_function("precombined", |b| {
        b.iter(|| black_box(convert_document(&text, &options).len()));
    });

    let nfc = ConvertOptions::default().with_unicode_norm(UnicodeNorm::Nfc);
    group.bench_function("precombined_nfc", |b| {
        b.iter(|| black_box(convert_document(&text, &nfc).len()));
    });

    #[cfg(feature = "parallel")]
    group.bench_function("precombined_parallel", |b| {
        b.iter(|| black_box(betacode::convert_document_parallel(&text, &options).len()));
    });

    group.bench_function("stream", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(text.len() * 2);
            let lines = convert_stream(Cursor::new(text.as_bytes()), &mut out, &options);
            black_box(lines.map(|n| n as usize + out.len()).unwrap_or_default())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_line, bench_document);
criterion_main!(benches);
