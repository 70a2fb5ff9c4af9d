//! Derived values produced by the engine
//!
//! None of these are persisted. They are recomputed from the
//! [`PaymentRecord`](super::PaymentRecord) on every generation.

use super::bank::Bank;
use super::error::BoletoError;
use std::fmt;

/// Length of the free field ("campo livre"), barcode positions 20-44
pub const FREE_FIELD_LEN: usize = 25;

/// Length of the barcode payload
pub const BARCODE_LEN: usize = 44;

/// Bank-assigned control number ("nosso número")
///
/// Its length and layout are bank specific. Some banks render it with an
/// internal space before the check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlNumber(String);

impl ControlNumber {
    pub fn new(value: impl Into<String>) -> Self {
        ControlNumber(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, with any display separators removed
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Display for ControlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The 25 digit bank-specific segment of the barcode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreeField(String);

impl FreeField {
    /// Wrap an assembled free field, checking it is exactly 25 digits
    ///
    /// A wrong width is a bug in the bank strategy that assembled it and is
    /// reported as [`BoletoError::EncodingInvariant`].
    pub fn new(bank: Bank, value: String) -> Result<Self, BoletoError> {
        let actual = value.chars().count();
        if actual != FREE_FIELD_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoletoError::encoding_invariant(
                bank,
                "free_field",
                FREE_FIELD_LEN,
                actual,
            ));
        }
        Ok(FreeField(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FreeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The 44 digit barcode payload
///
/// Layout: bank code (3), currency (1), check digit (1), due-date factor (4),
/// amount in centavos (10), free field (25).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert_eq!(digits.len(), BARCODE_LEN);
        Barcode(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    pub fn currency_code(&self) -> char {
        char::from(self.0.as_bytes()[3])
    }

    /// Overall mod-11 check digit (position 5)
    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[4])
    }

    pub fn due_date_factor(&self) -> &str {
        &self.0[5..9]
    }

    pub fn amount_field(&self) -> &str {
        &self.0[9..19]
    }

    pub fn free_field(&self) -> &str {
        &self.0[19..44]
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-enterable rendering of the barcode ("linha digitável")
///
/// `AAAAA.AAAAA BBBBB.BBBBBB CCCCC.CCCCCC D EEEEEEEEEEEEEE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitableLine(String);

impl DigitableLine {
    pub(crate) fn from_formatted(line: String) -> Self {
        DigitableLine(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the rendering layer needs for one boleto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boleto {
    /// Issuing bank
    pub bank: Bank,
    /// Bank-assigned control number, as displayed
    pub control_number: ControlNumber,
    /// 44 digit barcode payload
    pub barcode: Barcode,
    /// Punctuated digitable line
    pub digitable_line: DigitableLine,
    /// "Agência / código do cedente" display string
    pub beneficiary_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_free_field_accepts_25_digits() {
        let field = FreeField::new(Bank::Bancoob, "1308702005623500000028901".to_string());
        assert_eq!(field.unwrap().as_str(), "1308702005623500000028901");
    }

    #[rstest]
    #[case::short("130870200562350000002890", 24)]
    #[case::long("13087020056235000000289011", 26)]
    #[case::non_digit("130870200562350000002890X", 25)]
    fn test_free_field_rejects(#[case] value: &str, #[case] actual: usize) {
        let err = FreeField::new(Bank::Caixa, value.to_string()).unwrap_err();
        assert_eq!(
            err,
            BoletoError::encoding_invariant(Bank::Caixa, "free_field", 25, actual)
        );
    }

    #[test]
    fn test_control_number_digits_strip_separator() {
        let number = ControlNumber::new("000000000002 7");
        assert_eq!(number.as_str(), "000000000002 7");
        assert_eq!(number.digits(), "0000000000027");
    }

    #[test]
    fn test_barcode_accessors() {
        let barcode =
            Barcode::from_digits("75691569800000001001308702005623500000028901".to_string());
        assert_eq!(barcode.bank_code(), "756");
        assert_eq!(barcode.currency_code(), '9');
        assert_eq!(barcode.check_digit(), '1');
        assert_eq!(barcode.due_date_factor(), "5698");
        assert_eq!(barcode.amount_field(), "0000000100");
        assert_eq!(barcode.free_field(), "1308702005623500000028901");
    }
}
