//! Per-bank encoding strategies
//!
//! One module per bank. Each exposes a unit struct implementing
//! [`BankStrategy`]; [`strategy_for`] maps a [`Bank`] to it.
//!
//! [`Fields`] is the shared input reader: it pulls a field out of the
//! record, checks it is present and numeric, enforces the width the bank
//! declares and zero-fills it. Every bank goes through it, so width errors
//! are reported the same way everywhere.

mod bancoob;
mod banrisul;
mod caixa;
mod hsbc;
mod hsbc_cnr;
mod real;
mod santander;
mod sicredi;

pub use bancoob::Bancoob;
pub use banrisul::Banrisul;
pub use caixa::Caixa;
pub use hsbc::Hsbc;
pub use hsbc_cnr::HsbcCnr;
pub use real::Real;
pub use santander::Santander;
pub use sicredi::Sicredi;

use super::format::zero_fill;
use super::traits::BankStrategy;
use crate::types::{Bank, BoletoError, FieldWidths, InputProblem, PaymentRecord};
use chrono::NaiveDate;

/// Strategy implementing the rules of `bank`
pub fn strategy_for(bank: Bank) -> &'static dyn BankStrategy {
    match bank {
        Bank::Bancoob => &Bancoob,
        Bank::Banrisul => &Banrisul,
        Bank::Caixa => &Caixa,
        Bank::Hsbc => &Hsbc,
        Bank::HsbcCnr => &HsbcCnr,
        Bank::Real => &Real,
        Bank::Santander => &Santander,
        Bank::Sicredi => &Sicredi,
    }
}

/// Validated access to the input fields of a record
pub(crate) struct Fields<'a> {
    bank: Bank,
    widths: FieldWidths,
    record: &'a PaymentRecord,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(record: &'a PaymentRecord) -> Self {
        let bank = record.bank();
        Self {
            bank,
            widths: bank.profile().widths,
            record,
        }
    }

    fn required<T>(&self, field: &'static str, value: Option<T>) -> Result<T, BoletoError> {
        value.ok_or_else(|| BoletoError::missing(self.bank, field))
    }

    /// Check `value` is numeric and at most `max` digits, then pad it to `width`
    pub(crate) fn fill(
        &self,
        field: &'static str,
        value: &str,
        max: usize,
        width: usize,
    ) -> Result<String, BoletoError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoletoError::not_numeric(self.bank, field, value));
        }
        if value.len() > max {
            return Err(BoletoError::too_wide(self.bank, field, max, value.len()));
        }
        zero_fill(value, width)
            .map_err(|e| BoletoError::too_wide(self.bank, field, e.width, e.actual))
    }

    pub(crate) fn raw_agency(&self) -> Result<&'a str, BoletoError> {
        self.required("agency", self.record.agency())
    }

    pub(crate) fn raw_account(&self) -> Result<&'a str, BoletoError> {
        self.required("account", self.record.account())
    }

    pub(crate) fn raw_agreement(&self) -> Result<&'a str, BoletoError> {
        self.required("agreement", self.record.agreement())
    }

    /// Agency zero-filled to its declared width
    pub(crate) fn agency(&self) -> Result<String, BoletoError> {
        let width = self.widths.agency;
        self.fill("agency", self.raw_agency()?, width, width)
    }

    /// Account zero-filled to `width`, which may exceed the declared width
    pub(crate) fn account_padded(&self, width: usize) -> Result<String, BoletoError> {
        self.fill("account", self.raw_account()?, self.widths.account, width)
    }

    /// Account zero-filled to its declared width
    pub(crate) fn account(&self) -> Result<String, BoletoError> {
        self.account_padded(self.widths.account)
    }

    /// Agreement zero-filled to `width`, which may exceed the declared width
    pub(crate) fn agreement_padded(&self, width: usize) -> Result<String, BoletoError> {
        self.fill("agreement", self.raw_agreement()?, self.widths.agreement, width)
    }

    /// Agreement zero-filled to its declared width
    pub(crate) fn agreement(&self) -> Result<String, BoletoError> {
        self.agreement_padded(self.widths.agreement)
    }

    pub(crate) fn raw_sequence(&self) -> Result<u64, BoletoError> {
        self.required("sequence", self.record.sequence())
    }

    /// Sequence checked against its declared width, without padding
    pub(crate) fn bare_sequence(&self) -> Result<String, BoletoError> {
        let sequence = self.raw_sequence()?.to_string();
        let max = self.widths.sequence;
        self.fill("sequence", &sequence, max, max)?;
        Ok(sequence)
    }

    /// Sequence zero-filled to exactly `width` digits, `width` being its maximum
    pub(crate) fn sequence_with_width(&self, width: usize) -> Result<String, BoletoError> {
        let sequence = self.raw_sequence()?.to_string();
        self.fill("sequence", &sequence, width, width)
    }

    /// Sequence zero-filled to its declared width
    pub(crate) fn sequence(&self) -> Result<String, BoletoError> {
        self.sequence_with_width(self.widths.sequence)
    }

    /// Portfolio code, checked against the bank's declared list
    pub(crate) fn portfolio(&self) -> Result<&'a str, BoletoError> {
        let portfolio = self.required("portfolio", self.record.portfolio())?;
        if !self.bank.profile().accepts_portfolio(portfolio) {
            return Err(BoletoError::unsupported_portfolio(self.bank, portfolio));
        }
        Ok(portfolio)
    }

    /// Portfolio code zero-filled to `width`
    pub(crate) fn portfolio_padded(&self, width: usize) -> Result<String, BoletoError> {
        let portfolio = self.portfolio()?;
        self.fill("portfolio", portfolio, width, width)
    }

    pub(crate) fn due_date(&self) -> Result<NaiveDate, BoletoError> {
        self.required("due_date", self.record.due_date())
    }

    /// Issue date, falling back to the due date
    pub(crate) fn issue_or_due_date(&self) -> Result<NaiveDate, BoletoError> {
        self.required(
            "issue_date",
            self.record.issue_date().or(self.record.due_date()),
        )
    }

    /// A single digit optional field, zero when absent
    pub(crate) fn digit_or_zero(
        &self,
        field: &'static str,
        value: Option<u8>,
    ) -> Result<char, BoletoError> {
        match value {
            None => Ok('0'),
            Some(v) if v <= 9 => Ok(char::from(b'0' + v)),
            Some(v) => Err(BoletoError::InvalidInput {
                bank: self.bank,
                field,
                problem: InputProblem::TooWide {
                    max: 1,
                    actual: v.to_string().len(),
                },
            }),
        }
    }
}
