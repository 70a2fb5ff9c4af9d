//! Core trait for per-bank encoding strategies
//!
//! Every bank implements [`BankStrategy`] as a stateless unit struct. The
//! strategies share nothing but the free functions in `checksum`, `format`,
//! `due_date` and `composer`, so one bank's rules can never leak into another.

use super::banks::Fields;
use super::composer;
use crate::types::{
    Bank, BankProfile, Barcode, BoletoError, ControlNumber, DigitableLine, FreeField,
    PaymentRecord,
};

/// Trait for bank-specific encoding rules
///
/// Implementations are pure functions of the [`PaymentRecord`]; they hold no
/// state and may be shared freely across threads.
pub trait BankStrategy: Send + Sync {
    /// The bank this strategy encodes for
    fn bank(&self) -> Bank;

    /// Static configuration of the bank
    fn profile(&self) -> &'static BankProfile {
        self.bank().profile()
    }

    /// Compute the control number ("nosso número")
    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError>;

    /// Compute the 25 digit free field (barcode positions 20-44)
    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError>;

    /// Render the digitable line for an already composed barcode
    ///
    /// The default is the bank agnostic febraban rendering.
    fn digitable_line(
        &self,
        _record: &PaymentRecord,
        barcode: &Barcode,
    ) -> Result<DigitableLine, BoletoError> {
        Ok(composer::digitable_line(barcode))
    }

    /// "Agência / código do cedente" display string
    ///
    /// The default is `agency / account`, with the account check digit
    /// appended after a dash when the record has one.
    fn beneficiary_code(&self, record: &PaymentRecord) -> Result<String, BoletoError> {
        let fields = Fields::new(record);
        let agency = fields.raw_agency()?;
        let account = fields.raw_account()?;
        Ok(match record.account_check_digit() {
            Some(digit) => format!("{} / {}-{}", agency, account, digit),
            None => format!("{} / {}", agency, account),
        })
    }
}
