//! Barcode and digitable line composition
//!
//! This part is bank agnostic. Given a free field from a bank strategy it
//! assembles the 44 digit barcode and renders the digitable line:
//!
//! ```text
//! barcode:  BBB C D FFFF VVVVVVVVVV LLLLLLLLLLLLLLLLLLLLLLLLL
//!           bank, currency, check digit, due-date factor, amount, free field
//!
//! line:     BBBCL.LLLLx LLLLL.LLLLLy LLLLL.LLLLLz D FFFFVVVVVVVVVV
//! ```
//!
//! `x`, `y` and `z` are mod-10 check digits of their blocks and `D` is the
//! barcode check digit.

use super::checksum::{mod10, mod10_verify, mod11, BARCODE};
use super::due_date::due_date_factor;
use super::format::zero_fill;
use crate::types::{
    Barcode, BoletoError, DigitableLine, FreeField, InputProblem, PaymentRecord, BARCODE_LEN,
};

/// Width of the amount field in centavos
const AMOUNT_WIDTH: usize = 10;

/// Number of digits in a digitable line (44 + three block check digits)
const LINE_DIGITS: usize = 47;

/// Overall check digit over the 43 barcode digits that exclude position 5
pub fn barcode_check_digit(digits: &str) -> u8 {
    mod11(digits, 9).digit(&BARCODE)
}

/// Assemble the 44 digit barcode for `record` around `free_field`
///
/// # Errors
///
/// - `InvalidInput` if the due date or amount is missing, the due date is
///   before the factor epoch, or the amount does not fit 10 digits
pub fn compose_barcode(
    record: &PaymentRecord,
    free_field: &FreeField,
) -> Result<Barcode, BoletoError> {
    let bank = record.bank();

    let due_date = record
        .due_date()
        .ok_or_else(|| BoletoError::missing(bank, "due_date"))?;
    let factor = due_date_factor(due_date).ok_or_else(|| BoletoError::InvalidInput {
        bank,
        field: "due_date",
        problem: InputProblem::BeforeEpoch { date: due_date },
    })?;

    let amount = record
        .amount()
        .ok_or_else(|| BoletoError::missing(bank, "amount"))?;
    let amount = zero_fill(amount.cents(), AMOUNT_WIDTH)
        .map_err(|e| BoletoError::too_wide(bank, "amount", e.width, e.actual))?;

    let prefix = format!("{}{}", bank.code(), record.currency().code());
    let rest = format!("{}{}{}", factor, amount, free_field.as_str());
    let check = barcode_check_digit(&format!("{}{}", prefix, rest));

    let digits = format!("{}{}{}", prefix, check, rest);
    if digits.len() != BARCODE_LEN {
        return Err(BoletoError::encoding_invariant(
            bank,
            "barcode",
            BARCODE_LEN,
            digits.len(),
        ));
    }
    Ok(Barcode::from_digits(digits))
}

/// Append the block's mod-10 digit and insert the dot after the fifth character
pub(crate) fn check_block(block: &str) -> String {
    let mut out = String::with_capacity(block.len() + 2);
    out.push_str(&block[..5]);
    out.push('.');
    out.push_str(&block[5..]);
    out.push(char::from(b'0' + mod10(block)));
    out
}

/// Render the digitable line of `barcode`
pub fn digitable_line(barcode: &Barcode) -> DigitableLine {
    let digits = barcode.as_str();
    let free_field = barcode.free_field();

    let block_a = format!("{}{}", &digits[0..4], &free_field[0..5]);
    let block_b = &free_field[5..15];
    let block_c = &free_field[15..25];

    DigitableLine::from_formatted(format!(
        "{} {} {} {} {}",
        check_block(&block_a),
        check_block(block_b),
        check_block(block_c),
        barcode.check_digit(),
        &digits[5..19]
    ))
}

impl Barcode {
    /// Whether position 5 is the correct check digit for the other 43 digits
    pub fn verify(&self) -> bool {
        let digits = self.as_str();
        let body = format!("{}{}", &digits[0..4], &digits[5..]);
        char::from(b'0' + barcode_check_digit(&body)) == self.check_digit()
    }
}

impl DigitableLine {
    /// Rebuild the barcode this line was rendered from
    ///
    /// Punctuation and whitespace are ignored. The three block check digits
    /// and the overall barcode check digit are all verified.
    pub fn parse_barcode(line: &str) -> Result<Barcode, BoletoError> {
        let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
        if line
            .chars()
            .any(|c| !(c.is_ascii_digit() || c == '.' || c.is_whitespace()))
        {
            return Err(BoletoError::invalid_digitable_line(
                line,
                "unexpected character",
            ));
        }
        if digits.len() != LINE_DIGITS {
            return Err(BoletoError::invalid_digitable_line(
                line,
                &format!("expected {} digits, found {}", LINE_DIGITS, digits.len()),
            ));
        }

        let blocks = [(&digits[0..10], "A"), (&digits[10..21], "B"), (&digits[21..32], "C")];
        for (block, name) in blocks {
            if !mod10_verify(block) {
                return Err(BoletoError::invalid_digitable_line(
                    line,
                    &format!("check digit of block {} does not match", name),
                ));
            }
        }

        let barcode = Barcode::from_digits(format!(
            "{}{}{}{}{}{}",
            &digits[0..4],
            &digits[32..33],
            &digits[33..47],
            &digits[4..9],
            &digits[10..20],
            &digits[21..31]
        ));
        if !barcode.verify() {
            return Err(BoletoError::invalid_digitable_line(
                line,
                "barcode check digit does not match",
            ));
        }
        Ok(barcode)
    }

    /// Rebuild the barcode this line was rendered from
    pub fn to_barcode(&self) -> Result<Barcode, BoletoError> {
        Self::parse_barcode(self.as_str())
    }
}
