//! Santander (033)
//!
//! Control number: sequence (12), a space, then the mod-11 digit of the
//! sequence. Remainders 0 and 1 give 0, remainder 10 gives 1.
//!
//! Free field: constant `9`, beneficiary code (7), control number digits (13),
//! IOS (1, insurance companies only, 0 otherwise), portfolio (3).

use super::Fields;
use crate::core::checksum::{mod11, SANTANDER};
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

const FIXED: &str = "9";

#[derive(Debug, Clone, Copy)]
pub struct Santander;

impl BankStrategy for Santander {
    fn bank(&self) -> Bank {
        Bank::Santander
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        let sequence = Fields::new(record).sequence()?;
        let digit = mod11(&sequence, 9).digit(&SANTANDER);
        Ok(ControlNumber::new(format!("{} {}", sequence, digit)))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let value = format!(
            "{}{}{}{}{}",
            FIXED,
            fields.account()?,
            self.control_number(record)?.digits(),
            fields.digit_or_zero("ios", record.ios())?,
            fields.portfolio_padded(3)?
        );
        FreeField::new(self.bank(), value)
    }

    /// `agency / account`; Santander slips never show the account digit
    fn beneficiary_code(&self, record: &PaymentRecord) -> Result<String, BoletoError> {
        let fields = Fields::new(record);
        Ok(format!("{} / {}", fields.raw_agency()?, fields.raw_account()?))
    }
}
