use std::fs;

use morse_core::table::{default_toml, parse_table_toml};
use morse_core::unicode::is_arabic;
use morse_core::MorseTable;
use unicode_width::UnicodeWidthChar;

const GLYPH_WIDTH: usize = 4;

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_table_toml(&content), "Error: {}");
    let meta = table.meta();
    println!(
        "OK: {} letters, letter_separator={:?}, word_separator={:?}, unknown={:?}",
        table.len(),
        meta.letter_separator,
        meta.word_separator,
        meta.unknown
    );
}

pub fn table_chart(table: &MorseTable) {
    for line in chart_lines(table) {
        println!("{line}");
    }
}

fn category(c: char) -> &'static str {
    if c.is_ascii_digit() {
        "digit"
    } else if c.is_alphabetic() && is_arabic(c) {
        "letter"
    } else if c.is_alphabetic() {
        "other"
    } else {
        "punctuation"
    }
}

pub fn chart_lines(table: &MorseTable) -> Vec<String> {
    table
        .letters()
        .map(|(c, code)| {
            let width = UnicodeWidthChar::width(c).unwrap_or(0);
            let pad = " ".repeat(GLYPH_WIDTH.saturating_sub(width));
            format!("{c}{pad}{:<12}{code}", category(c))
        })
        .collect()
}
