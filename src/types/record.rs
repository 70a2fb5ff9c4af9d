//! Payment record types
//!
//! A [`PaymentRecord`] holds everything a bank strategy needs to number one
//! boleto. Records are assembled through [`PaymentRecordBuilder`] and are
//! read-only afterwards. Fields are validated by the bank strategy at
//! generation time, since each bank declares its own required fields and widths.

use super::bank::Bank;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Monetary amount as an exact count of centavos
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from a count of centavos
    pub const fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    /// Convert a decimal amount in reais to centavos
    ///
    /// Rejects negative values and values with more than two decimal places,
    /// so no rounding ever happens.
    pub fn from_decimal(value: Decimal) -> Result<Self, String> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(format!("Amount {} is negative", value));
        }
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| format!("Amount {} is too large", value))?;
        if !cents.fract().is_zero() {
            return Err(format!("Amount {} has more than two decimal places", value));
        }
        cents
            .to_u64()
            .map(Amount)
            .ok_or_else(|| format!("Amount {} is too large", value))
    }

    /// Number of centavos
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Currency of the boleto (barcode position 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    /// Brazilian real
    #[default]
    Real,
    /// Any other currency
    Other,
}

impl Currency {
    /// Single digit febraban currency code
    pub fn code(self) -> char {
        match self {
            Currency::Real => '9',
            Currency::Other => '0',
        }
    }
}

/// Input record for one boleto
///
/// Numeric identifiers are kept as strings so that leading zeros supplied by
/// the caller survive untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    bank: Bank,
    agency: Option<String>,
    account: Option<String>,
    account_check_digit: Option<String>,
    agreement: Option<String>,
    portfolio: Option<String>,
    sequence: Option<u64>,
    due_date: Option<NaiveDate>,
    issue_date: Option<NaiveDate>,
    amount: Option<Amount>,
    currency: Currency,
    ios: Option<u8>,
}

impl PaymentRecord {
    /// Start building a record for `bank`
    pub fn builder(bank: Bank) -> PaymentRecordBuilder {
        PaymentRecordBuilder {
            record: PaymentRecord {
                bank,
                agency: None,
                account: None,
                account_check_digit: None,
                agreement: None,
                portfolio: None,
                sequence: None,
                due_date: None,
                issue_date: None,
                amount: None,
                currency: Currency::Real,
                ios: None,
            },
        }
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn agency(&self) -> Option<&str> {
        self.agency.as_deref()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn account_check_digit(&self) -> Option<&str> {
        self.account_check_digit.as_deref()
    }

    /// Agreement ("convênio"); some banks use it for an operation or post code
    pub fn agreement(&self) -> Option<&str> {
        self.agreement.as_deref()
    }

    pub fn portfolio(&self) -> Option<&str> {
        self.portfolio.as_deref()
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Document issue date ("data do documento")
    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Santander IOS rate (insurance companies only)
    pub fn ios(&self) -> Option<u8> {
        self.ios
    }
}

/// Builder for [`PaymentRecord`]
#[derive(Debug, Clone)]
pub struct PaymentRecordBuilder {
    record: PaymentRecord,
}

impl PaymentRecordBuilder {
    pub fn agency(mut self, agency: impl Into<String>) -> Self {
        self.record.agency = Some(agency.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.record.account = Some(account.into());
        self
    }

    pub fn account_check_digit(mut self, digit: impl Into<String>) -> Self {
        self.record.account_check_digit = Some(digit.into());
        self
    }

    pub fn agreement(mut self, agreement: impl Into<String>) -> Self {
        self.record.agreement = Some(agreement.into());
        self
    }

    pub fn portfolio(mut self, portfolio: impl Into<String>) -> Self {
        self.record.portfolio = Some(portfolio.into());
        self
    }

    pub fn sequence(mut self, sequence: u64) -> Self {
        self.record.sequence = Some(sequence);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.record.due_date = Some(date);
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.record.issue_date = Some(date);
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.record.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.record.currency = currency;
        self
    }

    pub fn ios(mut self, ios: u8) -> Self {
        self.record.ios = Some(ios);
        self
    }

    pub fn build(self) -> PaymentRecord {
        self.record
    }
}
