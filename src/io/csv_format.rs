//! CSV format handling for payment records and boleto output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Boleto output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Amount, Bank, Boleto, PaymentRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// `id,bank,agency,account,account_dv,agreement,portfolio,sequence,due_date,issue_date,amount,ios`.
/// Everything but `id` and `bank` is optional since each bank needs a
/// different subset; an empty cell means the field is absent.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub id: String,
    pub bank: String,
    pub agency: Option<String>,
    pub account: Option<String>,
    pub account_dv: Option<String>,
    pub agreement: Option<String>,
    pub portfolio: Option<String>,
    pub sequence: Option<String>,
    pub due_date: Option<String>,
    pub issue_date: Option<String>,
    pub amount: Option<String>,
    pub ios: Option<String>,
}

/// A payment record tagged with the caller's row identifier
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub id: String,
    pub record: PaymentRecord,
}

/// A generated boleto tagged with the row identifier it came from
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub id: String,
    pub boleto: Boleto,
}

/// Trimmed cell contents, `None` when the cell is empty
fn present(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(id: &str, field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| format!("Invalid {} '{}' for record {}", field, value, id))
}

/// Convert a CsvRecord to a PaymentRecord
///
/// This function:
/// - Parses the bank key into a Bank
/// - Parses dates (`YYYY-MM-DD`), the sequence and the IOS digit
/// - Parses the amount in reais into exact centavos
///
/// Field widths and per-bank requirements are not checked here; the bank
/// strategies report those when the record is encoded.
///
/// # Returns
///
/// Result containing either:
/// - Ok(InputRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<InputRecord, String> {
    let id = csv_record.id.trim().to_string();

    let bank = Bank::from_str(csv_record.bank.trim())
        .map_err(|e| format!("{} for record {}", e, id))?;

    let mut builder = PaymentRecord::builder(bank);

    if let Some(agency) = present(&csv_record.agency) {
        builder = builder.agency(agency);
    }
    if let Some(account) = present(&csv_record.account) {
        builder = builder.account(account);
    }
    if let Some(digit) = present(&csv_record.account_dv) {
        builder = builder.account_check_digit(digit);
    }
    if let Some(agreement) = present(&csv_record.agreement) {
        builder = builder.agreement(agreement);
    }
    if let Some(portfolio) = present(&csv_record.portfolio) {
        builder = builder.portfolio(portfolio);
    }

    if let Some(sequence) = present(&csv_record.sequence) {
        let sequence = sequence
            .parse::<u64>()
            .map_err(|_| format!("Invalid sequence '{}' for record {}", sequence, id))?;
        builder = builder.sequence(sequence);
    }

    if let Some(due_date) = present(&csv_record.due_date) {
        builder = builder.due_date(parse_date(&id, "due_date", due_date)?);
    }
    if let Some(issue_date) = present(&csv_record.issue_date) {
        builder = builder.issue_date(parse_date(&id, "issue_date", issue_date)?);
    }

    if let Some(amount_str) = present(&csv_record.amount) {
        let decimal = Decimal::from_str(amount_str)
            .map_err(|_| format!("Invalid amount '{}' for record {}", amount_str, id))?;
        let amount =
            Amount::from_decimal(decimal).map_err(|e| format!("{} for record {}", e, id))?;
        builder = builder.amount(amount);
    }

    if let Some(ios) = present(&csv_record.ios) {
        let ios = ios
            .parse::<u8>()
            .map_err(|_| format!("Invalid ios '{}' for record {}", ios, id))?;
        builder = builder.ios(ios);
    }

    Ok(InputRecord {
        id,
        record: builder.build(),
    })
}

/// Write generated boletos to CSV format
///
/// Writes boletos in CSV format with columns:
/// `id,bank,control_number,barcode,digitable_line`, in the order given.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_boletos_csv(boletos: &[OutputRecord], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "bank", "control_number", "barcode", "digitable_line"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for row in boletos {
        writer
            .write_record([
                row.id.as_str(),
                row.boleto.bank.key(),
                row.boleto.control_number.as_str(),
                row.boleto.barcode.as_str(),
                row.boleto.digitable_line.as_str(),
            ])
            .map_err(|e| format!("Failed to write boleto record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;
    use rstest::rstest;

    fn bancoob_row() -> CsvRecord {
        CsvRecord {
            id: "a1".to_string(),
            bank: "bancoob".to_string(),
            agency: Some("3087".to_string()),
            account: Some("4593".to_string()),
            agreement: Some("56235".to_string()),
            portfolio: Some("1".to_string()),
            sequence: Some("2".to_string()),
            due_date: Some("2013-05-14".to_string()),
            amount: Some("1.00".to_string()),
            ..CsvRecord::default()
        }
    }

    #[test]
    fn test_convert_csv_record_valid() {
        let converted = convert_csv_record(bancoob_row()).unwrap();
        let record = converted.record;

        assert_eq!(converted.id, "a1");
        assert_eq!(record.bank(), Bank::Bancoob);
        assert_eq!(record.agency(), Some("3087"));
        assert_eq!(record.agreement(), Some("56235"));
        assert_eq!(record.sequence(), Some(2));
        assert_eq!(record.due_date(), NaiveDate::from_ymd_opt(2013, 5, 14));
        assert_eq!(record.issue_date(), None);
        assert_eq!(record.amount(), Some(Amount::from_cents(100)));
        assert_eq!(record.ios(), None);
    }

    #[test]
    fn test_convert_csv_record_treats_blank_cells_as_absent() {
        let row = CsvRecord {
            account_dv: Some("   ".to_string()),
            issue_date: Some(String::new()),
            ..bancoob_row()
        };
        let record = convert_csv_record(row).unwrap().record;
        assert_eq!(record.account_check_digit(), None);
        assert_eq!(record.issue_date(), None);
    }

    #[rstest]
    #[case::hyphenated_key("hsbc-cnr", Bank::HsbcCnr)]
    #[case::upper_case("SANTANDER", Bank::Santander)]
    #[case::padded("  caixa ", Bank::Caixa)]
    fn test_convert_csv_record_bank_keys(#[case] key: &str, #[case] expected: Bank) {
        let row = CsvRecord {
            bank: key.to_string(),
            ..bancoob_row()
        };
        assert_eq!(convert_csv_record(row).unwrap().record.bank(), expected);
    }

    #[rstest]
    #[case::unknown_bank(CsvRecord { bank: "itau".to_string(), ..bancoob_row() }, "Unknown bank")]
    #[case::bad_sequence(CsvRecord { sequence: Some("12a".to_string()), ..bancoob_row() }, "Invalid sequence")]
    #[case::negative_sequence(CsvRecord { sequence: Some("-1".to_string()), ..bancoob_row() }, "Invalid sequence")]
    #[case::bad_due_date(CsvRecord { due_date: Some("14/05/2013".to_string()), ..bancoob_row() }, "Invalid due_date")]
    #[case::bad_issue_date(CsvRecord { issue_date: Some("2013-02-30".to_string()), ..bancoob_row() }, "Invalid issue_date")]
    #[case::bad_amount(CsvRecord { amount: Some("one".to_string()), ..bancoob_row() }, "Invalid amount")]
    #[case::negative_amount(CsvRecord { amount: Some("-1.00".to_string()), ..bancoob_row() }, "negative")]
    #[case::sub_cent_amount(CsvRecord { amount: Some("1.005".to_string()), ..bancoob_row() }, "two decimal places")]
    #[case::overflowing_amount(CsvRecord { amount: Some("79228162514264337593543950335".to_string()), ..bancoob_row() }, "too large")]
    #[case::bad_ios(CsvRecord { ios: Some("x".to_string()), ..bancoob_row() }, "Invalid ios")]
    fn test_convert_csv_record_errors(#[case] row: CsvRecord, #[case] expected_error: &str) {
        let result = convert_csv_record(row);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains(expected_error), "unexpected error: {}", error);
        assert!(error.contains("a1"));
    }

    #[test]
    fn test_write_boletos_csv() {
        let input = convert_csv_record(bancoob_row()).unwrap();
        let rows = vec![OutputRecord {
            id: input.id,
            boleto: generate(&input.record).unwrap(),
        }];

        let mut output = Vec::new();
        write_boletos_csv(&rows, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(lines[0], "id,bank,control_number,barcode,digitable_line");
        assert_eq!(
            lines[1],
            "a1,bancoob,00000028,75691569800000001001308702005623500000028901,\
             75691.30870 02005.623505 00000.289017 1 56980000000100"
        );
    }

    #[test]
    fn test_write_boletos_csv_empty() {
        let mut output = Vec::new();
        write_boletos_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,bank,control_number,barcode,digitable_line\n"
        );
    }
}
