//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `bank`: Supported banks and their static configuration
//! - `record`: Payment input record, amounts and currencies
//! - `output`: Derived values (control number, free field, barcode, digitable line)
//! - `error`: Error types for the boleto engine

pub mod bank;
pub mod error;
pub mod output;
pub mod record;

pub use bank::{Bank, BankProfile, FieldWidths};
pub use error::{BoletoError, InputProblem};
pub use output::{
    Barcode, Boleto, ControlNumber, DigitableLine, FreeField, BARCODE_LEN, FREE_FIELD_LEN,
};
pub use record::{Amount, Currency, PaymentRecord, PaymentRecordBuilder};
