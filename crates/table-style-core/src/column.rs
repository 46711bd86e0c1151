//! Spreadsheet-style column labels.
//!
//! Labels form a bijective base-26 numeral system over `A..=Z`. There is no
//! zero digit, so the label after `Z` is `AA` rather than `BA`.

use crate::{Error, Result};

const ALPHABET_LEN: usize = 26;

/// Label for a zero-based column index.
///
/// ```
/// use table_style_core::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(25), "Z");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(702), "AAA");
/// ```
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index;

    loop {
        letters.push(b'A' + (remaining % ALPHABET_LEN) as u8);
        let next = remaining / ALPHABET_LEN;
        if next == 0 {
            break;
        }
        remaining = next - 1;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Zero-based column index for a label produced by [`column_label`].
///
/// Letters are matched case-insensitively. Returns
/// [`Error::InvalidColumnLabel`] for empty labels, non-letters, or labels
/// whose index does not fit in a `usize`.
pub fn column_index(label: &str) -> Result<usize> {
    if label.is_empty() {
        return Err(Error::InvalidColumnLabel(label.to_string()));
    }

    let mut value: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLabel(label.to_string()));
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        value = value
            .checked_mul(ALPHABET_LEN)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumnLabel(label.to_string()))?;
    }

    // value >= 1 here since every digit is at least 1
    Ok(value - 1)
}
