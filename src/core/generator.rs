//! Public encoding operations
//!
//! Each operation looks up the strategy for the record's bank and runs it.
//! Nothing is cached between calls: every output is recomputed from the
//! record, so the same record always yields the same digits.

use super::banks::strategy_for;
use super::composer::compose_barcode;
use crate::types::{
    Barcode, Boleto, BoletoError, ControlNumber, DigitableLine, FreeField, PaymentRecord,
};
use tracing::debug;

/// Compute the bank-assigned control number ("nosso número")
///
/// # Errors
///
/// `InvalidInput` if a field the bank needs is absent, not numeric or wider
/// than the bank declares; `UnsupportedPortfolio` for a portfolio the bank
/// does not list.
pub fn compute_control_number(record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
    strategy_for(record.bank()).control_number(record)
}

/// Compute the 25 digit free field
///
/// Fails like [`compute_control_number`], and with `EncodingInvariant` if the
/// assembled field is not exactly 25 digits.
pub fn compute_free_field(record: &PaymentRecord) -> Result<FreeField, BoletoError> {
    strategy_for(record.bank()).free_field(record)
}

/// Compute the 44 digit barcode payload
///
/// Fails like [`compute_free_field`], and with `InvalidInput` when the due
/// date or amount is missing or out of range.
pub fn compute_barcode(record: &PaymentRecord) -> Result<Barcode, BoletoError> {
    let free_field = compute_free_field(record)?;
    compose_barcode(record, &free_field)
}

/// Compute the digitable line; derived from [`compute_barcode`]
pub fn compute_digitable_line(record: &PaymentRecord) -> Result<DigitableLine, BoletoError> {
    let barcode = compute_barcode(record)?;
    strategy_for(record.bank()).digitable_line(record, &barcode)
}

/// Compute every derived value for `record` in one pass
pub fn generate(record: &PaymentRecord) -> Result<Boleto, BoletoError> {
    let strategy = strategy_for(record.bank());

    let control_number = strategy.control_number(record)?;
    let free_field = strategy.free_field(record)?;
    let barcode = compose_barcode(record, &free_field)?;
    let digitable_line = strategy.digitable_line(record, &barcode)?;
    let beneficiary_code = strategy.beneficiary_code(record)?;

    debug!(
        bank = %record.bank(),
        control_number = %control_number,
        barcode = %barcode,
        "Generated boleto"
    );

    Ok(Boleto {
        bank: record.bank(),
        control_number,
        barcode,
        digitable_line,
        beneficiary_code,
    })
}
