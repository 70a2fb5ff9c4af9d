//! Boleto Engine Library
//!
//! # Overview
//!
//! Computes the machine-readable numbers printed on Brazilian bank payment
//! slips ("boletos"): the bank-assigned control number ("nosso número"), the
//! 44 digit barcode payload and its human-enterable digitable line.
//!
//! ```
//! use boleto_engine::{generate, Amount, Bank, PaymentRecord};
//! use chrono::NaiveDate;
//!
//! let record = PaymentRecord::builder(Bank::Bancoob)
//!     .agency("3087")
//!     .agreement("56235")
//!     .portfolio("1")
//!     .sequence(2)
//!     .due_date(NaiveDate::from_ymd_opt(2013, 5, 14).unwrap())
//!     .amount(Amount::from_cents(100))
//!     .build();
//!
//! let boleto = generate(&record).unwrap();
//! assert_eq!(
//!     boleto.barcode.as_str(),
//!     "75691569800000001001308702005623500000028901"
//! );
//! assert_eq!(
//!     boleto.digitable_line.as_str(),
//!     "75691.30870 02005.623505 00000.289017 1 56980000000100"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Payment record, bank table, derived values and errors
//! - [`core`] - The encoding engine:
//!   - [`core::checksum`] - Mod-10 and mod-11 primitives
//!   - [`core::banks`] - One [`BankStrategy`] per supported bank
//!   - [`core::composer`] - Bank agnostic barcode and digitable line assembly
//!   - [`core::generator`] - The public `compute_*` operations
//! - [`io`] - CSV input of payment records and output of boletos
//! - [`strategy`] - Whole-file processing pipelines (sync, async batch)
//! - [`cli`] - CLI arguments parsing
//!
//! # Supported Banks
//!
//! Bancoob/Sicoob (756), Banrisul (041), Caixa SICOB (104), HSBC CSB and
//! CNR (399), Banco Real (356), Santander (033) and Sicredi (748).

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{
    compute_barcode, compute_control_number, compute_digitable_line, compute_free_field, generate,
    strategy_for, BankStrategy,
};
pub use io::write_boletos_csv;
pub use types::{
    Amount, Bank, BankProfile, Barcode, Boleto, BoletoError, ControlNumber, Currency,
    DigitableLine, FieldWidths, FreeField, InputProblem, PaymentRecord, PaymentRecordBuilder,
};
