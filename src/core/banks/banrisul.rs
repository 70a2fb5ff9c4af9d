//! Banrisul (041)
//!
//! The control number is the sequence itself; the bank assigns its own
//! check digit downstream.
//!
//! Free field: product `2`, constant `1`, agency (4), beneficiary code (7),
//! control number (8), constant `40`, and a two digit "número de controle"
//! over the preceding 23 digits.

use super::Fields;
use crate::core::checksum::{mod10, mod11};
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

const PREFIX: &str = "21";
const SUFFIX: &str = "40";

/// Two digit "número de controle"
///
/// The first digit is mod-10. The second is mod-11 with weights 2..7 over the
/// number followed by the first digit: remainder 0 gives 0, remainder 1 is
/// invalid and bumps the first digit (9 wraps to 0) before recomputing, any
/// other remainder `r` gives `11 - r`.
fn control_digits(number: &str) -> String {
    let mut first = mod10(number);
    loop {
        let remainder = mod11(&format!("{}{}", number, first), 7).remainder;
        match remainder {
            0 => return format!("{}0", first),
            1 => first = (first + 1) % 10,
            r => return format!("{}{}", first, 11 - r),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Banrisul;

impl BankStrategy for Banrisul {
    fn bank(&self) -> Bank {
        Bank::Banrisul
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        Ok(ControlNumber::new(Fields::new(record).sequence()?))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let number = format!(
            "{}{}{}{}{}",
            PREFIX,
            fields.agency()?,
            fields.account()?,
            self.control_number(record)?,
            SUFFIX
        );
        let digits = control_digits(&number);
        FreeField::new(self.bank(), format!("{}{}", number, digits))
    }
}
