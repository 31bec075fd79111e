//! Canonicalization of Arabic input before table lookup.
//!
//! Applied per character, in order: digit normalization, letter-shape
//! normalization, deletion of the table's strip set, then deletion of
//! tatweel. Whitespace passes through untouched so word boundaries survive.

use crate::table::MorseTable;
use crate::unicode::TATWEEL;

pub fn normalize(table: &MorseTable, text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        let c = table.normalize_variant(table.normalize_digit(c));
        if table.is_strip_char(c) || c == TATWEEL {
            continue;
        }
        result.push(c);
    }
    result
}
