//! Banco Real (356)
//!
//! Free field: agency (4), account (7), "digitão" (1), control number (13).
//! The digitão is the mod-10 digit of control number, agency and account
//! taken together; it also appears in the beneficiary code.

use super::Fields;
use crate::core::checksum::mod10;
use crate::core::traits::BankStrategy;
use crate::types::{Bank, BoletoError, ControlNumber, FreeField, PaymentRecord};

#[derive(Debug, Clone, Copy)]
pub struct Real;

impl Real {
    fn digitao(control: &ControlNumber, agency: &str, account: &str) -> u8 {
        mod10(&format!("{}{}{}", control, agency, account))
    }
}

impl BankStrategy for Real {
    fn bank(&self) -> Bank {
        Bank::Real
    }

    fn control_number(&self, record: &PaymentRecord) -> Result<ControlNumber, BoletoError> {
        let fields = Fields::new(record);
        fields.portfolio()?;
        Ok(ControlNumber::new(fields.sequence()?))
    }

    fn free_field(&self, record: &PaymentRecord) -> Result<FreeField, BoletoError> {
        let fields = Fields::new(record);
        let control = self.control_number(record)?;
        let agency = fields.agency()?;
        let account = fields.account()?;
        let digitao = Self::digitao(&control, &agency, &account);
        FreeField::new(
            self.bank(),
            format!("{}{}{}{}", agency, account, digitao, control),
        )
    }

    fn beneficiary_code(&self, record: &PaymentRecord) -> Result<String, BoletoError> {
        let fields = Fields::new(record);
        let control = self.control_number(record)?;
        let digitao = Self::digitao(&control, &fields.agency()?, &fields.account()?);
        Ok(format!(
            "{}/{}/{}",
            fields.raw_agency()?,
            fields.raw_account()?,
            digitao
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(agency: &str, account: &str, sequence: u64) -> PaymentRecord {
        PaymentRecord::builder(Bank::Real)
            .agency(agency)
            .account(account)
            .portfolio("057")
            .sequence(sequence)
            .build()
    }

    #[rstest]
    #[case::short("3087", "4593", 2, "3087000459380000000000002")]
    #[case::full_width("1234", "7654321", 1_234_567_890_123, "1234765432151234567890123")]
    fn test_free_field(
        #[case] agency: &str,
        #[case] account: &str,
        #[case] sequence: u64,
        #[case] expected: &str,
    ) {
        let field = Real.free_field(&record(agency, account, sequence)).unwrap();
        assert_eq!(field.as_str(), expected);
    }

    #[test]
    fn test_beneficiary_code_carries_digitao() {
        let code = Real.beneficiary_code(&record("3087", "4593", 2)).unwrap();
        assert_eq!(code, "3087/4593/8");
    }

    #[test]
    fn test_unsupported_portfolio() {
        let record = PaymentRecord::builder(Bank::Real)
            .agency("3087")
            .account("4593")
            .portfolio("001")
            .sequence(2)
            .build();
        assert_eq!(
            Real.control_number(&record).unwrap_err(),
            BoletoError::unsupported_portfolio(Bank::Real, "001")
        );
    }
}
