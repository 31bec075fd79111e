use super::*;
use crate::separators::{check_symbols, SeparatorHazard};

fn dec(table: &MorseTable, morse: &str) -> String {
    decode(table, morse, &DecodeOptions::default())
}

#[test]
fn test_decode_word() {
    assert_eq!(dec(&example_table(), ".-/-.../.-./-.."), "ابجد");
}

#[test]
fn test_decode_empty() {
    assert_eq!(dec(&example_table(), ""), "");
    assert_eq!(dec(builtin(), "   "), "");
}

#[test]
fn test_decode_words() {
    assert_eq!(dec(builtin(), ".-/-...//-..."), "اب ب");
}

#[test]
fn test_decode_trims_input() {
    assert_eq!(dec(builtin(), "  \n.-/-...\t "), "اب");
}

#[test]
fn test_decode_extra_word_separators() {
    let expected = dec(builtin(), ".-/-...//-...");
    assert_eq!(dec(builtin(), ".-/-...//-...////"), expected);
    assert_eq!(dec(builtin(), "//.-/-...// //-...//"), expected);
    assert_eq!(dec(builtin(), ".-/-... // -..."), expected);
}

#[test]
fn test_decode_extra_letter_separators() {
    assert_eq!(dec(builtin(), ".-/ /-.../"), "اب");
    assert_eq!(dec(builtin(), "/.-/-..."), "اب");
}

#[test]
fn test_decode_dash_aliases() {
    let expected = dec(builtin(), ".-/-...");
    assert_eq!(dec(builtin(), ".—/—..."), expected); // em dash
    assert_eq!(dec(builtin(), ".–/–..."), expected); // en dash
    assert_eq!(dec(builtin(), "._/_..."), expected);
    assert_eq!(dec(builtin(), ".−/−..."), expected); // minus sign
    assert_eq!(dec(builtin(), ".ـ/ـ..."), expected); // tatweel
}

#[test]
fn test_decode_dot_aliases() {
    assert_eq!(dec(builtin(), "·-/-•••"), "اب");
}

#[test]
fn test_decode_custom_dash_aliases_replace_defaults() {
    let opts = DecodeOptions {
        dash_aliases: Some(vec!['~']),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), ".~/~...", &opts), "اب");
    // The em dash is no longer an alias and is cleaned away.
    assert_eq!(decode(builtin(), ".—", &opts), "ء");
}

#[test]
fn test_decode_junk_token_is_placeholder() {
    assert_eq!(dec(builtin(), ".-/abc/-..."), "ا?ب");
}

#[test]
fn test_decode_unknown_token_is_placeholder() {
    assert_eq!(dec(builtin(), ".-/......../-..."), "ا?ب");
}

#[test]
fn test_decode_stray_characters_are_cleaned() {
    assert_eq!(dec(builtin(), ".-,/-...!"), "اب");
    assert_eq!(dec(builtin(), ". -/- . . ."), "اب");
}

#[test]
fn test_decode_without_separators() {
    // One word, one token.
    assert_eq!(dec(builtin(), ".--..."), "?");
    assert_eq!(dec(builtin(), "..--.."), "؟");
}

#[test]
fn test_decode_custom_placeholder() {
    let table = MorseTable::from_toml(
        r#"
[meta]
unknown = "□"

[letters]
"ا" = ".-"
"#,
    )
    .unwrap();
    assert_eq!(dec(&table, ".-/---"), "ا□");
}

#[test]
fn test_decode_custom_symbols() {
    let opts = DecodeOptions {
        dot: Some('*'),
        dash: Some('='),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), "*=/=***", &opts), "اب");
    // Standard symbols are now junk.
    assert_eq!(decode(builtin(), ".-", &opts), "?");
}

#[test]
fn test_decode_swapped_symbols() {
    let opts = DecodeOptions {
        dot: Some('-'),
        dash: Some('.'),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), "-./.---", &opts), "اب");
}

#[test]
fn test_decode_dot_symbol_shadows_alias() {
    // '_' is a default dash alias; as the dot it must read as a dot.
    let opts = DecodeOptions {
        dot: Some('_'),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), "_-/-___", &opts), "اب");
}

#[test]
fn test_decode_custom_separators() {
    let opts = DecodeOptions {
        letter_separator: Some(" ".into()),
        word_separator: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), ".- -...   -...", &opts), "اب ب");
}

#[test]
fn test_decode_multi_char_separators() {
    let opts = DecodeOptions {
        letter_separator: Some("|".into()),
        word_separator: Some("<>".into()),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), ".-|-...<>-...", &opts), "اب ب");
}

// Separator hazards: the call proceeds with the documented behavior.

#[test]
fn test_decode_empty_word_separator_is_one_word() {
    let opts = DecodeOptions {
        word_separator: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), ".-/-...//-...", &opts), "ابب");
}

#[test]
fn test_decode_empty_letter_separator_is_one_token() {
    let opts = DecodeOptions {
        letter_separator: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(decode(builtin(), ".-//-...", &opts), "ا ب");
    assert_eq!(decode(builtin(), ".-/-...", &opts), "?");
}

#[test]
fn test_decode_letter_separator_containing_word_separator() {
    let opts = DecodeOptions {
        letter_separator: Some("//".into()),
        word_separator: Some("/".into()),
        ..Default::default()
    };
    // Words are split first, so letters come out as separate words.
    assert_eq!(decode(builtin(), ".-//-...", &opts), "ا ب");
}

#[test]
fn test_decode_alias_inside_separator_stops_splitting() {
    let opts = DecodeOptions {
        word_separator: Some("__".into()),
        ..Default::default()
    };
    // "__" becomes "--" before splitting: one word, one token.
    assert_eq!(decode(builtin(), ".-__-...", &opts), "?");
}

// Symbol hazards: reported, then decoded as documented.

#[test]
fn test_decode_dot_equal_to_dash_reads_everything_as_dot() {
    let opts = DecodeOptions {
        dot: Some('-'),
        ..Default::default()
    };
    assert_eq!(
        check_symbols('-', builtin().meta().dash),
        vec![SeparatorHazard::DotEqualsDash('-')]
    );
    assert_eq!(decode(builtin(), "-/--", &opts), "ءي");
}

#[test]
fn test_decode_whitespace_dot_survives_only_inside_tokens() {
    let opts = DecodeOptions {
        dot: Some(' '),
        ..Default::default()
    };
    assert_eq!(
        check_symbols(' ', builtin().meta().dash),
        vec![SeparatorHazard::WhitespaceSymbol(' ')]
    );
    // Edge spaces are trimmed with the token.
    assert_eq!(decode(builtin(), "- /  -", &opts), "تت");
    // An interior space is still a dot.
    assert_eq!(decode(builtin(), "- -", &opts), "ك");
}
