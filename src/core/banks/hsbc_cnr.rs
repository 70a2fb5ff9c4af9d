//! HSBC, CNR portfolio (399)
//!
//! The control number carries two check digits around a type identifier:
//!
//! ```text
//! sequence(13) DV1 4 DV2
//! ```
//!
//! DV1 is the inverted mod-11 of the sequence. DV2 is the inverted mod-11 of
//! the arithmetic sum of `sequence DV1 4` (read as an integer), the
//! beneficiary code and the due date in `ddmmyy` form. The string and integer
//! phases are kept apart: the provisional number is built as a string,
//! parsed, summed, and only the sum's decimal form feeds DV2.
//!
//! Free field: beneficiary code (7), sequence (13), julian due date (4),
//! application code `2`.

use super::Fields;
use crate::core::checksum::weighted_sum_rtl;
use crate::core::due_date::{ddmmyy, julian};
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

/// Weights 9 down to 2, applied from the right
const INVERTED_WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Type identifier: control number bound to due date and beneficiary code
const TYPE_IDENTIFIER: char = '4';

const APPLICATION_CODE: &str = "2";

/// Inverted mod-11: the remainder itself is the digit, 10 becomes 0
fn inverted_mod11(number: &str) -> u8 {
    match (weighted_sum_rtl(number, &INVERTED_WEIGHTS) % 11) as u8 {
        10 => 0,
        digit => digit,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HsbcCnr;

impl BankStrategy for HsbcCnr {
    fn bank(&self) -> Bank {
        Bank::HsbcCnr
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        let fields = Fields::new(record);
        fields.portfolio()?;
        let sequence = fields.sequence()?;
        let beneficiary = fields.agreement()?;
        let due_date = fields.due_date()?;

        let provisional = format!("{}{}{}", sequence, inverted_mod11(&sequence), TYPE_IDENTIFIER);

        // 15 + 7 + 6 digit operands: the sum always fits in u64
        let numeric = |value: &str| -> Result<u64, BoletoError> {
            value
                .parse::<u64>()
                .map_err(|_| BoletoError::not_numeric(self.bank(), "agreement", value))
        };
        let sum = numeric(&provisional)? + numeric(&beneficiary)? + ddmmyy(due_date);
        let second = inverted_mod11(&sum.to_string());

        Ok(ControlNumber::new(format!("{}{}", provisional, second)))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        fields.portfolio()?;
        let value = format!(
            "{}{}{}{}",
            fields.agreement()?,
            fields.sequence()?,
            julian(fields.due_date()?),
            APPLICATION_CODE
        );
        FreeField::new(self.bank(), value)
    }

    fn beneficiary_code(&self, record: &PaymentRecord) -> Result<String, BoletoError> {
        Ok(Fields::new(record).raw_agreement()?.to_string())
    }
}
