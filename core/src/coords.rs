// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default coordinate-label formatting.

/// Column letters in Go convention, skipping `I`
const COLUMN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Default column label: `A`..`Z` without `I`, with a numeric suffix once
/// the alphabet wraps (`A2` for column 25).
pub fn default_column_label(index: usize) -> String {
    let letter = COLUMN_ALPHABET[index % COLUMN_ALPHABET.len()] as char;
    let cycle = index / COLUMN_ALPHABET.len();
    if cycle == 0 {
        letter.to_string()
    } else {
        format!("{}{}", letter, cycle + 1)
    }
}

/// Default row label: numbered upward from the bottom edge
pub fn default_row_label(index: usize, height: u16) -> String {
    (height as usize).saturating_sub(index).to_string()
}
