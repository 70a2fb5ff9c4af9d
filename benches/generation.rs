//! Benchmarks for boleto generation
//!
//! ```bash
//! cargo bench
//! ```
//!
//! - `generate_single` - one record per bank through the public API
//! - `sync_strategy` / `async_strategy` - whole-file pipelines over a
//!   generated CSV mixing every bank

use boleto_engine::cli::StrategyType;
use boleto_engine::strategy::{create_strategy, BatchConfig};
use boleto_engine::{generate, Amount, Bank, PaymentRecord};
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

fn record(bank: Bank, sequence: u64) -> PaymentRecord {
    let builder = PaymentRecord::builder(bank)
        .agency("3087")
        .account("4593")
        .sequence(sequence)
        .due_date(NaiveDate::from_ymd_opt(2013, 5, 14).expect("valid date"))
        .amount(Amount::from_cents(100));

    match bank {
        Bank::Bancoob => builder.agreement("56235").portfolio("1"),
        Bank::Banrisul => builder,
        Bank::Caixa => builder.agreement("870").portfolio("SR"),
        Bank::Hsbc => builder.portfolio("00"),
        Bank::HsbcCnr => builder.agreement("1122334").portfolio("CNR"),
        Bank::Real => builder.portfolio("057"),
        Bank::Santander => builder.portfolio("102"),
        Bank::Sicredi => builder.agreement("12"),
    }
    .build()
}

const ROW_TEMPLATES: [&str; 8] = [
    "bancoob,3087,4593,,56235,1",
    "banrisul,3087,4593,,,",
    "caixa,3087,4593,,870,SR",
    "hsbc,3087,4593,,,00",
    "hsbc_cnr,3087,4593,,1122334,CNR",
    "real,3087,4593,,,057",
    "santander,3087,4593,,,102",
    "sicredi,3087,4593,,12,",
];

/// CSV file with `rows` records cycling through every bank
fn input_file(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        "id,bank,agency,account,account_dv,agreement,portfolio,sequence,due_date,issue_date,amount,ios"
    )
    .expect("Failed to write header");
    for n in 0..rows {
        let template = ROW_TEMPLATES[n % ROW_TEMPLATES.len()];
        // Sequence kept within the narrowest declared width (Sicredi, 5 digits)
        writeln!(file, "{},{},{},2013-05-14,,1.00,", n, template, n % 100_000 + 1)
            .expect("Failed to write row");
    }
    file.flush().expect("Failed to flush temp file");
    file
}

#[divan::bench(args = Bank::ALL)]
fn generate_single(bencher: divan::Bencher, bank: Bank) {
    let record = record(bank, 2);
    bencher.bench(|| generate(divan::black_box(&record)).expect("Generation failed"));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn sync_strategy(bencher: divan::Bencher, rows: usize) {
    let file = input_file(rows);
    let strategy = create_strategy(StrategyType::Sync, None);
    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(file.path(), &mut output)
            .expect("Processing failed");
        output
    });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn async_strategy(bencher: divan::Bencher, rows: usize) {
    let file = input_file(rows);
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(file.path(), &mut output)
            .expect("Processing failed");
        output
    });
}
