//! Core encoding engine
//!
//! This module contains the boleto encoding components:
//! - `checksum` - Mod-10 and mod-11 primitives and remainder tables
//! - `format` - Fixed-width zero fill
//! - `due_date` - Due-date factor and bank date encodings
//! - `composer` - Bank agnostic barcode and digitable line assembly
//! - `traits` - The per-bank strategy abstraction
//! - `banks` - One strategy per supported bank
//! - `generator` - Public operations over a payment record

pub mod banks;
pub mod checksum;
pub mod composer;
pub mod due_date;
pub mod format;
pub mod generator;
pub mod traits;

pub use banks::strategy_for;
pub use generator::{
    compute_barcode, compute_control_number, compute_digitable_line, compute_free_field, generate,
};
pub use traits::BankStrategy;
