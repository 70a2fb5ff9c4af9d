//! HSBC, CSB portfolio (399)
//!
//! The control number is the sequence, zero-filled to 11 digits; the bank
//! computes its check digit on its side.
//!
//! Free field: agency (4), portfolio (2), control number (11), account (7),
//! application code `0`.

use super::Fields;
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

const APPLICATION_CODE: &str = "0";

#[derive(Debug, Clone, Copy)]
pub struct Hsbc;

impl BankStrategy for Hsbc {
    fn bank(&self) -> Bank {
        Bank::Hsbc
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        Ok(ControlNumber::new(Fields::new(record).sequence()?))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let value = format!(
            "{}{}{}{}{}",
            fields.agency()?,
            fields.portfolio_padded(2)?,
            self.control_number(record)?,
            fields.account()?,
            APPLICATION_CODE
        );
        FreeField::new(self.bank(), value)
    }
}
