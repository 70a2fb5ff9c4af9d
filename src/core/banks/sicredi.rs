//! Sicredi (748)
//!
//! Control number: two digit year, generation byte `2`, sequence (5), and a
//! mod-11 check digit over agency, post (the agreement), account and the
//! number itself. The year comes from the issue date, or the due date when
//! the record has none.
//!
//! Free field: `3` (registered charge), `1` (Sicredi portfolio), control
//! number (9), agency (4), post (2), account (5), `00`, then the same mod-11
//! digit over the preceding 24 digits.

use super::Fields;
use crate::core::checksum::{mod11, COLLAPSE_TO_ZERO};
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

const GENERATION: &str = "2";
const CHARGE_AND_PORTFOLIO: &str = "31";
const FILLER: &str = "00";

fn check_digit(number: &str) -> u8 {
    mod11(number, 9).digit(&COLLAPSE_TO_ZERO)
}

#[derive(Debug, Clone, Copy)]
pub struct Sicredi;

impl BankStrategy for Sicredi {
    fn bank(&self) -> Bank {
        Bank::Sicredi
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        let fields = Fields::new(record);
        let year = fields.issue_or_due_date()?.format("%y");
        let number = format!("{}{}{}", year, GENERATION, fields.sequence()?);
        let digit = check_digit(&format!(
            "{}{}{}{}",
            fields.agency()?,
            fields.agreement()?,
            fields.account()?,
            number
        ));
        Ok(ControlNumber::new(format!("{}{}", number, digit)))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let value = format!(
            "{}{}{}{}{}{}",
            CHARGE_AND_PORTFOLIO,
            self.control_number(record)?,
            fields.agency()?,
            fields.agreement()?,
            fields.account()?,
            FILLER
        );
        let digit = check_digit(&value);
        FreeField::new(self.bank(), format!("{}{}", value, digit))
    }
}
