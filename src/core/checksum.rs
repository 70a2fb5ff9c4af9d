//! Checksum primitives shared by every bank
//!
//! Two families are used on boletos:
//!
//! - **mod-10** with alternating weights 2,1,2,1... from the right and folding of
//!   weighted values above 9 (the Luhn scheme)
//! - **mod-11** with weights cycling through a range (usually 2..9) from the
//!   right, no folding
//!
//! The mod-11 primitives only ever return the raw sum and remainder. Mapping a
//! remainder to a check digit is bank policy and lives in a [`RemainderTable`]
//! chosen by the caller.
//!
//! All functions take a string of ASCII digits. Characters other than digits
//! are skipped, so a display separator never shifts the weights.

/// Digit values of `number`, left to right
fn digit_values(number: &str) -> impl DoubleEndedIterator<Item = u32> + '_ {
    number.chars().filter_map(|c| c.to_digit(10))
}

/// Weighted sum with the weights applied right to left
///
/// The rightmost digit takes `cycle[0]`, the next `cycle[1]`, wrapping around.
pub fn weighted_sum_rtl(number: &str, cycle: &[u32]) -> u32 {
    digit_values(number)
        .rev()
        .enumerate()
        .map(|(position, digit)| digit * cycle[position % cycle.len()])
        .sum()
}

/// Weighted sum with the weights applied left to right
///
/// The leftmost digit takes `cycle[0]`, the next `cycle[1]`, wrapping around.
pub fn weighted_sum_ltr(number: &str, cycle: &[u32]) -> u32 {
    digit_values(number)
        .enumerate()
        .map(|(position, digit)| digit * cycle[position % cycle.len()])
        .sum()
}

/// Sum of the folded Luhn products, weights 2,1,2,1... from the right
fn mod10_sum(number: &str, first_weight: u32) -> u32 {
    digit_values(number)
        .rev()
        .enumerate()
        .map(|(position, digit)| {
            let weight = if position % 2 == 0 {
                first_weight
            } else {
                3 - first_weight
            };
            let value = digit * weight;
            if value > 9 {
                value - 9
            } else {
                value
            }
        })
        .sum()
}

/// Mod-10 check digit of `number`
///
/// `number` must contain at least one digit.
pub fn mod10(number: &str) -> u8 {
    ((10 - mod10_sum(number, 2) % 10) % 10) as u8
}

/// Whether the last digit of `number` is a valid mod-10 check digit for the rest
pub fn mod10_verify(number: &str) -> bool {
    mod10_sum(number, 1) % 10 == 0
}

/// Result of a mod-11 weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod11 {
    /// Weighted sum of the digits
    pub sum: u32,
    /// `sum mod 11`
    pub remainder: u8,
}

impl Mod11 {
    /// Check digit under the given remainder policy
    pub fn digit(self, table: &RemainderTable) -> u8 {
        table.digit(self.remainder)
    }
}

/// Mod-11 over `number` with weights `min..=max` cycling from the right
pub fn mod11_with(number: &str, min: u32, max: u32) -> Mod11 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as usize;
    let sum = digit_values(number)
        .rev()
        .enumerate()
        .map(|(position, digit)| digit * (min + (position % span) as u32))
        .sum::<u32>();
    Mod11 {
        sum,
        remainder: (sum % 11) as u8,
    }
}

/// Mod-11 over `number` with weights `2..=max` cycling from the right
pub fn mod11(number: &str, max: u32) -> Mod11 {
    mod11_with(number, 2, max)
}

/// Remainder to check digit mapping
///
/// Remainders listed in `overrides` map to the given digit; every other
/// remainder `r` maps to `11 - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainderTable {
    overrides: &'static [(u8, u8)],
}

impl RemainderTable {
    pub const fn new(overrides: &'static [(u8, u8)]) -> Self {
        Self { overrides }
    }

    pub fn digit(&self, remainder: u8) -> u8 {
        self.overrides
            .iter()
            .find(|(r, _)| *r == remainder)
            .map(|(_, digit)| *digit)
            .unwrap_or(11 - remainder)
    }
}

/// Overall barcode check digit: remainders 0, 1 and 10 become 1
pub const BARCODE: RemainderTable = RemainderTable::new(&[(0, 1), (1, 1), (10, 1)]);

/// Remainders 0, 1 and 10 become 0
pub const COLLAPSE_TO_ZERO: RemainderTable = RemainderTable::new(&[(0, 0), (1, 0), (10, 0)]);

/// Santander control number: remainders 0 and 1 become 0, 10 becomes 1
pub const SANTANDER: RemainderTable = RemainderTable::new(&[(0, 0), (1, 0), (10, 1)]);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bancoob_block_a("756913087", 0)]
    #[case::bancoob_block_b("0200562350", 5)]
    #[case::bancoob_block_c("0000028901", 7)]
    #[case::luhn_reference("7992739871", 3)]
    #[case::single_zero("0", 0)]
    #[case::fold_above_nine("9", 1)]
    fn test_mod10(#[case] number: &str, #[case] expected: u8) {
        assert_eq!(mod10(number), expected);
    }

    #[rstest]
    #[case("756913087")]
    #[case("0200562350")]
    #[case("123456789012345")]
    #[case("5")]
    fn test_mod10_appended_digit_verifies(#[case] number: &str) {
        let with_check = format!("{}{}", number, mod10(number));
        assert!(mod10_verify(&with_check));
    }

    #[test]
    fn test_mod10_verify_rejects_wrong_digit() {
        assert!(!mod10_verify("79927398710"));
        assert!(mod10_verify("79927398713"));
    }

    #[test]
    fn test_mod10_ignores_separators() {
        assert_eq!(mod10("02005.62350"), mod10("0200562350"));
    }

    #[rstest]
    #[case::febraban_example("261533", 9, 90, 2)]
    #[case::sequence("000000000002", 9, 4, 4)]
    #[case::wraps_at_nine("1234567890", 9, 231, 0)]
    #[case::wraps_at_seven("1234567890", 7, 195, 8)]
    fn test_mod11(
        #[case] number: &str,
        #[case] max: u32,
        #[case] sum: u32,
        #[case] remainder: u8,
    ) {
        assert_eq!(mod11(number, max), Mod11 { sum, remainder });
    }

    #[test]
    fn test_mod11_with_matches_weighted_sum() {
        let number = "04192569800000001002130870004593000000024074";
        let cycle: Vec<u32> = (2..=9).collect();
        assert_eq!(mod11_with(number, 2, 9).sum, weighted_sum_rtl(number, &cycle));
    }

    #[test]
    fn test_weighted_sum_ltr_fixed_cycle() {
        assert_eq!(weighted_sum_ltr("308700000562350000002", &[3, 1, 9, 7]), 223);
    }

    #[test]
    fn test_weighted_sum_rtl_descending_cycle() {
        // 2*9 from the right
        assert_eq!(weighted_sum_rtl("0000000000002", &[9, 8, 7, 6, 5, 4, 3, 2]), 18);
    }

    #[rstest]
    #[case::barcode_zero(BARCODE, 0, 1)]
    #[case::barcode_one(BARCODE, 1, 1)]
    #[case::barcode_ten(BARCODE, 10, 1)]
    #[case::barcode_plain(BARCODE, 2, 9)]
    #[case::collapse_zero(COLLAPSE_TO_ZERO, 0, 0)]
    #[case::collapse_one(COLLAPSE_TO_ZERO, 1, 0)]
    #[case::collapse_ten(COLLAPSE_TO_ZERO, 10, 0)]
    #[case::collapse_plain(COLLAPSE_TO_ZERO, 3, 8)]
    #[case::santander_ten(SANTANDER, 10, 1)]
    #[case::santander_one(SANTANDER, 1, 0)]
    #[case::santander_plain(SANTANDER, 4, 7)]
    fn test_remainder_tables(
        #[case] table: RemainderTable,
        #[case] remainder: u8,
        #[case] digit: u8,
    ) {
        assert_eq!(table.digit(remainder), digit);
    }

    #[test]
    fn test_every_table_yields_single_digits() {
        for table in [BARCODE, COLLAPSE_TO_ZERO, SANTANDER] {
            for remainder in 0..11 {
                assert!(table.digit(remainder) <= 9);
            }
        }
    }
}
