//! Caixa Econômica Federal, SICOB layout (104)
//!
//! The control number is a portfolio prefix followed by the sequence, with
//! a portfolio-dependent width. Portfolio codes outside the table fall back
//! to the bare sequence.
//!
//! Free field: control number (10), agency (4), operation code (3, taken from
//! the agreement), beneficiary code (8).

use super::Fields;
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

/// Width of the control number inside the free field
const CONTROL_WIDTH: usize = 10;

/// Portfolio code, control number prefix, sequence width
const PREFIXES: [(&str, &str, usize); 3] = [("SR", "82", 8), ("SR16", "80", 8), ("CR", "9", 9)];

#[derive(Debug, Clone, Copy)]
pub struct Caixa;

impl BankStrategy for Caixa {
    fn bank(&self) -> Bank {
        Bank::Caixa
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        let fields = Fields::new(record);
        let portfolio = fields.portfolio()?;

        let number = match PREFIXES.iter().find(|(code, _, _)| *code == portfolio) {
            Some((_, prefix, width)) => {
                format!("{}{}", prefix, fields.sequence_with_width(*width)?)
            }
            None => fields.bare_sequence()?,
        };
        Ok(ControlNumber::new(number))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let control = self.control_number(record)?;
        let control = fields.fill("sequence", control.as_str(), CONTROL_WIDTH, CONTROL_WIDTH)?;

        let value = format!(
            "{}{}{}{}",
            control,
            fields.agency()?,
            fields.agreement()?,
            fields.account()?
        );
        FreeField::new(self.bank(), value)
    }
}
