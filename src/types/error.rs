//! Error types for the boleto engine
//!
//! This module defines all error types that can occur while generating boleto
//! numbers or processing batches of payment records.
//!
//! # Error Categories
//!
//! - **Input Errors**: a required field is missing, too wide or not numeric
//! - **Portfolio Errors**: the portfolio code is not declared by the bank
//! - **Encoding Invariant Errors**: a bank strategy assembled a field of the wrong
//!   width. These indicate a bug in the strategy and should only ever surface in tests
//! - **File I/O and CSV Errors**: raised by the batch pipelines

use super::bank::Bank;
use chrono::NaiveDate;
use thiserror::Error;

/// What is wrong with an input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputProblem {
    /// The field is required by the bank but absent
    #[error("is required")]
    Missing,

    /// The value has more digits than the bank declares
    #[error("has {actual} digits, maximum is {max}")]
    TooWide {
        /// Declared maximum width
        max: usize,
        /// Width of the supplied value
        actual: usize,
    },

    /// The value contains characters other than ASCII digits
    #[error("must contain only digits, got '{value}'")]
    NotNumeric {
        /// The offending value
        value: String,
    },

    /// The date precedes the due-date factor epoch (1997-10-07)
    #[error("{date} is before the due-date factor epoch")]
    BeforeEpoch {
        /// The offending date
        date: NaiveDate,
    },
}

/// Main error type for the boleto engine
///
/// Each variant carries enough context (bank, field, expected and actual
/// width) to diagnose the failure without re-running the generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoletoError {
    /// A required input field is missing or malformed
    ///
    /// Caller-correctable. Generation of the record is aborted.
    #[error("Invalid input for {bank}: {field} {problem}")]
    InvalidInput {
        /// Bank the record was generated for
        bank: Bank,
        /// Name of the input field
        field: &'static str,
        /// What is wrong with it
        problem: InputProblem,
    },

    /// Portfolio code not declared by a bank that has no fallback rule
    #[error("Unsupported portfolio '{portfolio}' for {bank}, expected one of: {}", supported.join(", "))]
    UnsupportedPortfolio {
        /// Bank the record was generated for
        bank: Bank,
        /// The rejected portfolio code
        portfolio: String,
        /// Portfolio codes the bank declares
        supported: Vec<&'static str>,
    },

    /// Internal assembly produced a field of the wrong width
    ///
    /// Signals a bug in a bank strategy, never a caller mistake.
    #[error("Encoding invariant violated for {bank}: {field} has {actual} characters, expected {expected}")]
    EncodingInvariant {
        /// Bank the record was generated for
        bank: Bank,
        /// Name of the assembled field
        field: &'static str,
        /// Required width
        expected: usize,
        /// Width actually produced
        actual: usize,
    },

    /// A digitable line could not be converted back into a barcode
    #[error("Invalid digitable line '{line}': {reason}")]
    InvalidDigitableLine {
        /// The rejected line
        line: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BoletoError {
    fn from(error: std::io::Error) -> Self {
        BoletoError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BoletoError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BoletoError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BoletoError {
    /// Create an InvalidInput error for a missing field
    pub fn missing(bank: Bank, field: &'static str) -> Self {
        BoletoError::InvalidInput {
            bank,
            field,
            problem: InputProblem::Missing,
        }
    }

    /// Create an InvalidInput error for a value wider than declared
    pub fn too_wide(bank: Bank, field: &'static str, max: usize, actual: usize) -> Self {
        BoletoError::InvalidInput {
            bank,
            field,
            problem: InputProblem::TooWide { max, actual },
        }
    }

    /// Create an InvalidInput error for a value with non-digit characters
    pub fn not_numeric(bank: Bank, field: &'static str, value: &str) -> Self {
        BoletoError::InvalidInput {
            bank,
            field,
            problem: InputProblem::NotNumeric {
                value: value.to_string(),
            },
        }
    }

    /// Create an UnsupportedPortfolio error listing the bank's declared codes
    pub fn unsupported_portfolio(bank: Bank, portfolio: &str) -> Self {
        BoletoError::UnsupportedPortfolio {
            bank,
            portfolio: portfolio.to_string(),
            supported: bank.profile().portfolios.unwrap_or_default().to_vec(),
        }
    }

    /// Create an EncodingInvariant error
    pub fn encoding_invariant(
        bank: Bank,
        field: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        BoletoError::EncodingInvariant {
            bank,
            field,
            expected,
            actual,
        }
    }

    /// Create an InvalidDigitableLine error
    pub fn invalid_digitable_line(line: &str, reason: &str) -> Self {
        BoletoError::InvalidDigitableLine {
            line: line.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing(
        BoletoError::missing(Bank::Bancoob, "sequence"),
        "Invalid input for Bancoob (756): sequence is required"
    )]
    #[case::too_wide(
        BoletoError::too_wide(Bank::Santander, "account", 7, 9),
        "Invalid input for Santander (033): account has 9 digits, maximum is 7"
    )]
    #[case::not_numeric(
        BoletoError::not_numeric(Bank::Real, "agency", "30A7"),
        "Invalid input for Real (356): agency must contain only digits, got '30A7'"
    )]
    #[case::before_epoch(
        BoletoError::InvalidInput {
            bank: Bank::Hsbc,
            field: "due_date",
            problem: InputProblem::BeforeEpoch { date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() },
        },
        "Invalid input for HSBC (399): due_date 1990-01-01 is before the due-date factor epoch"
    )]
    #[case::unsupported_portfolio(
        BoletoError::unsupported_portfolio(Bank::Santander, "999"),
        "Unsupported portfolio '999' for Santander (033), expected one of: 101, 102, 201"
    )]
    #[case::encoding_invariant(
        BoletoError::encoding_invariant(Bank::Caixa, "free_field", 25, 21),
        "Encoding invariant violated for Caixa (104): free_field has 21 characters, expected 25"
    )]
    #[case::invalid_line(
        BoletoError::invalid_digitable_line("123", "expected 47 digits, found 3"),
        "Invalid digitable line '123': expected 47 digits, found 3"
    )]
    #[case::io_error(
        BoletoError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        BoletoError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        BoletoError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: BoletoError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BoletoError = io_error.into();
        assert!(matches!(error, BoletoError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_unsupported_portfolio_on_open_list_bank() {
        let error = BoletoError::unsupported_portfolio(Bank::Sicredi, "X");
        assert_eq!(
            error,
            BoletoError::UnsupportedPortfolio {
                bank: Bank::Sicredi,
                portfolio: "X".to_string(),
                supported: vec![],
            }
        );
    }
}
