//! Cell and range reference helpers.
//!
//! Conversions between zero-based (row, col) pairs and A1-style references,
//! plus the absolute sheet-qualified formulas charts use as data sources.

use crate::common::error::{Error, Result};

/// Rows in a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;
/// Columns in a worksheet; the last one is XFD.
pub const MAX_COLS: u32 = 16_384;

/// Convert column number to Excel column name (A, B, ..., Z, AA, AB, etc.)
///
/// Input is 1-based (1=A, 2=B, 26=Z, 27=AA, etc.)
pub fn column_index_to_name(mut col: u32) -> String {
    if col == 0 {
        return String::new();
    }

    let mut name = Vec::with_capacity(3);
    while col > 0 {
        col -= 1;
        name.push(b'A' + (col % 26) as u8);
        col /= 26;
    }
    name.reverse();

    String::from_utf8_lossy(&name).into_owned()
}

/// Convert Excel column name to column index (A=0, B=1, ..., Z=25, AA=26, etc.)
pub fn column_name_to_index(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }

    let mut result: u32 = 0;
    for ch in name.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        result = result.checked_mul(26)?.checked_add(ch as u32 - 'A' as u32 + 1)?;
    }

    Some(result - 1)
}

/// Convert zero-based row and column to a relative reference such as "B2".
pub fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_index_to_name(col + 1), row + 1)
}

/// Absolute form of a cell reference, e.g. "$B$2".
pub fn absolute_cell_reference(row: u32, col: u32) -> String {
    format!("${}${}", column_index_to_name(col + 1), row + 1)
}

/// Parse an A1-style reference into zero-based (row, col).
///
/// `$` markers are accepted and ignored.
pub fn parse_cell_reference(reference: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidCellReference(reference.to_string());

    let trimmed: String = reference.chars().filter(|&c| c != '$').collect();
    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (col_str, row_str) = trimmed.split_at(split);

    if col_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let col = column_name_to_index(col_str).ok_or_else(invalid)?;
    let row: u32 = row_str.parse().map_err(|_| invalid())?;
    if row == 0 || row > MAX_ROWS || col >= MAX_COLS {
        return Err(invalid());
    }

    Ok((row - 1, col))
}

/// Reject a zero-based (row, col) outside the worksheet grid.
pub fn check_cell(row: u32, col: u32) -> Result<()> {
    if row >= MAX_ROWS || col >= MAX_COLS {
        return Err(Error::InvalidCellReference(format!(
            "row {} col {} is outside the worksheet",
            row, col
        )));
    }
    Ok(())
}

/// Quote a sheet name for use in a formula when it is not a plain word.
///
/// Embedded single quotes are doubled.
pub fn quote_sheet_name(name: &str) -> String {
    let plain = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// Absolute formula for a single cell, e.g. `Sheet1!$A$1`.
pub fn cell_formula(sheet: &str, row: u32, col: u32) -> String {
    format!("{}!{}", quote_sheet_name(sheet), absolute_cell_reference(row, col))
}

/// Absolute formula for a range, e.g. `Sheet1!$A$1:$A$5`.
///
/// A single-cell range collapses to [`cell_formula`].
pub fn range_formula(sheet: &str, first_row: u32, first_col: u32, last_row: u32, last_col: u32) -> String {
    if first_row == last_row && first_col == last_col {
        return cell_formula(sheet, first_row, first_col);
    }
    format!(
        "{}!{}:{}",
        quote_sheet_name(sheet),
        absolute_cell_reference(first_row, first_col),
        absolute_cell_reference(last_row, last_col)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_to_name() {
        assert_eq!(column_index_to_name(1), "A");
        assert_eq!(column_index_to_name(26), "Z");
        assert_eq!(column_index_to_name(27), "AA");
        assert_eq!(column_index_to_name(16384), "XFD");
        assert_eq!(column_index_to_name(0), "");
    }

    #[test]
    fn test_column_name_to_index() {
        assert_eq!(column_name_to_index("A"), Some(0));
        assert_eq!(column_name_to_index("aa"), Some(26));
        assert_eq!(column_name_to_index("XFD"), Some(16383));
        assert_eq!(column_name_to_index(""), None);
        assert_eq!(column_name_to_index("A1"), None);
    }

    #[test]
    fn test_parse_cell_reference() {
        assert_eq!(parse_cell_reference("A1").unwrap(), (0, 0));
        assert_eq!(parse_cell_reference("E9").unwrap(), (8, 4));
        assert_eq!(parse_cell_reference("$C$12").unwrap(), (11, 2));
        assert!(parse_cell_reference("9E").is_err());
        assert!(parse_cell_reference("A0").is_err());
        assert!(parse_cell_reference("A1B").is_err());
        assert!(parse_cell_reference("").is_err());
        assert_eq!(parse_cell_reference("XFD1048576").unwrap(), (1_048_575, 16_383));
        assert!(parse_cell_reference("XFE1").is_err());
        assert!(parse_cell_reference("A1048577").is_err());
    }

    #[test]
    fn test_check_cell() {
        assert!(check_cell(MAX_ROWS - 1, MAX_COLS - 1).is_ok());
        assert!(matches!(check_cell(MAX_ROWS, 0), Err(Error::InvalidCellReference(_))));
        assert!(matches!(check_cell(0, MAX_COLS), Err(Error::InvalidCellReference(_))));
    }

    #[test]
    fn test_quote_sheet_name() {
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
        assert_eq!(quote_sheet_name("Sales Data"), "'Sales Data'");
        assert_eq!(quote_sheet_name("Bob's"), "'Bob''s'");
        assert_eq!(quote_sheet_name("2024"), "'2024'");
    }

    #[test]
    fn test_formulas() {
        assert_eq!(range_formula("Sheet1", 0, 0, 4, 0), "Sheet1!$A$1:$A$5");
        assert_eq!(range_formula("Data", 1, 2, 1, 2), "Data!$C$2");
        assert_eq!(cell_formula("My Data", 0, 1), "'My Data'!$B$1");
        assert_eq!(cell_reference(1, 1), "B2");
    }
}
