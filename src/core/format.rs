//! Fixed-width field formatting

use std::fmt::Display;

/// A value that does not fit the requested width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthOverflow {
    /// Requested width
    pub width: usize,
    /// Width of the value
    pub actual: usize,
}

/// Left-pad `value` with zeros to exactly `width` characters
///
/// Values already wider than `width` are never truncated; they are reported
/// as a [`WidthOverflow`]. Truncation rules that some banks define belong to
/// those banks, not to this formatter.
pub fn zero_fill(value: impl Display, width: usize) -> Result<String, WidthOverflow> {
    let value = value.to_string();
    let actual = value.chars().count();
    if actual > width {
        return Err(WidthOverflow { width, actual });
    }
    Ok(format!("{:0>width$}", value, width = width))
}
