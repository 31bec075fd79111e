use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use super::{MorseTable, TableMeta, DEFAULT_TOML};
use crate::separators::check_separators;
use crate::unicode::{is_arabic_indic_digit, is_extended_arabic_indic_digit, single_char, TATWEEL};

#[derive(Deserialize)]
struct TableConfig {
    #[serde(default)]
    meta: MetaConfig,
    letters: BTreeMap<String, String>,
    #[serde(default)]
    digits: BTreeMap<String, String>,
    #[serde(default)]
    variants: BTreeMap<String, String>,
    #[serde(default)]
    strip: StripConfig,
}

#[derive(Deserialize)]
#[serde(default)]
struct MetaConfig {
    letter_separator: String,
    word_separator: String,
    unknown: String,
    dot: String,
    dash: String,
    dash_aliases: Vec<String>,
    dot_aliases: Vec<String>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            letter_separator: "/".to_string(),
            word_separator: "//".to_string(),
            unknown: "?".to_string(),
            dot: ".".to_string(),
            dash: "-".to_string(),
            dash_aliases: Vec::new(),
            dot_aliases: Vec::new(),
        }
    }
}

#[derive(Deserialize, Default)]
struct StripConfig {
    #[serde(default)]
    chars: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[letters] table is empty")]
    Empty,
    #[error("[{table}] key is not a single character: {key:?}")]
    KeyNotSingleChar { table: &'static str, key: String },
    #[error("[{table}] value for {key:?} is not a single character")]
    ValueNotSingleChar { table: &'static str, key: String },
    #[error("empty Morse code for {0:?}")]
    EmptyCode(char),
    #[error("Morse code {code:?} for {letter:?} contains symbols other than dot and dash")]
    InvalidSymbol { letter: char, code: String },
    #[error("Morse code {code:?} is shared by {first:?} and {second:?}")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
    #[error("[{table}] maps {ch:?} to itself")]
    SelfMapping { table: &'static str, ch: char },
    #[error("{ch:?} normalizes to {target:?}, which is normalized again")]
    UnstableNormalization { ch: char, target: char },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("Morse table already initialized")]
    AlreadyInitialized,
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> TableError {
    TableError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Parse and validate TOML text into a [`MorseTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<MorseTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.letters.is_empty() {
        return Err(TableError::Empty);
    }

    let meta = build_meta(config.meta)?;
    let (char_to_morse, morse_to_char) = build_letters(&config.letters, &meta)?;
    let digits = build_char_map("digits", &config.digits)?;
    let variants = build_char_map("variants", &config.variants)?;
    let strip: HashSet<char> = config.strip.chars.chars().collect();

    for (&digit, &latin) in &digits {
        if !is_arabic_indic_digit(digit) && !is_extended_arabic_indic_digit(digit) {
            return Err(invalid(
                format!("digits.{digit}"),
                "key must be an Arabic-Indic digit",
            ));
        }
        if !latin.is_ascii_digit() {
            return Err(invalid(
                format!("digits.{digit}"),
                "value must be an ASCII digit",
            ));
        }
    }

    for &variant in variants.keys() {
        if digits.contains_key(&variant) {
            return Err(invalid(
                format!("variants.{variant}"),
                "already normalized by [digits]",
            ));
        }
        if strip.contains(&variant) {
            return Err(invalid(
                format!("variants.{variant}"),
                "also listed in [strip]",
            ));
        }
    }

    // Normalization must be idempotent: nothing it produces may be rewritten
    // or deleted by a second pass.
    for (&ch, &target) in digits.iter().chain(variants.iter()) {
        if digits.contains_key(&target)
            || variants.contains_key(&target)
            || strip.contains(&target)
            || target == TATWEEL
        {
            return Err(TableError::UnstableNormalization { ch, target });
        }
    }

    debug!(
        letters = char_to_morse.len(),
        digits = digits.len(),
        variants = variants.len(),
        strip = strip.len(),
        "morse table built"
    );

    Ok(MorseTable {
        meta,
        char_to_morse,
        morse_to_char,
        digits,
        variants,
        strip,
    })
}

fn build_meta(raw: MetaConfig) -> Result<TableMeta, TableError> {
    let dot = single_char(&raw.dot).ok_or_else(|| invalid("meta.dot", "must be a single character"))?;
    let dash =
        single_char(&raw.dash).ok_or_else(|| invalid("meta.dash", "must be a single character"))?;
    if dot == dash {
        return Err(invalid("meta.dash", "must differ from meta.dot"));
    }
    if dot.is_whitespace() || dash.is_whitespace() {
        return Err(invalid("meta.dot", "dot and dash must not be whitespace"));
    }
    if raw.unknown.is_empty() {
        return Err(invalid("meta.unknown", "must not be empty"));
    }

    let dash_aliases = parse_aliases("meta.dash_aliases", &raw.dash_aliases)?;
    let dot_aliases = parse_aliases("meta.dot_aliases", &raw.dot_aliases)?;
    if dash_aliases.contains(&dot) {
        return Err(invalid("meta.dash_aliases", "must not contain the dot symbol"));
    }
    if dot_aliases.contains(&dash) {
        return Err(invalid("meta.dot_aliases", "must not contain the dash symbol"));
    }
    if let Some(c) = dot_aliases.iter().find(|c| dash_aliases.contains(c)) {
        return Err(invalid(
            "meta.dot_aliases",
            format!("{c:?} is also a dash alias"),
        ));
    }

    let meta = TableMeta {
        letter_separator: raw.letter_separator,
        word_separator: raw.word_separator,
        unknown: raw.unknown,
        dot,
        dash,
        dash_aliases,
        dot_aliases,
    };

    // The defaults must work out of the box; only per-call overrides may be
    // hazardous.
    if let Some(hazard) = check_separators(
        &meta.letter_separator,
        &meta.word_separator,
        &meta.reserved_symbols(),
    )
    .into_iter()
    .next()
    {
        return Err(invalid("meta.letter_separator", hazard.to_string()));
    }

    // The placeholder must never decode as a letter or a boundary.
    if let Some(c) = meta
        .reserved_symbols()
        .into_iter()
        .find(|&c| meta.unknown.contains(c))
    {
        return Err(invalid(
            "meta.unknown",
            format!("contains the Morse symbol {c:?}"),
        ));
    }
    for (name, sep) in [
        ("letter separator", &meta.letter_separator),
        ("word separator", &meta.word_separator),
    ] {
        if meta.unknown.contains(sep.as_str()) || sep.contains(meta.unknown.as_str()) {
            return Err(invalid(
                "meta.unknown",
                format!("overlaps the {name} {sep:?}"),
            ));
        }
    }

    Ok(meta)
}

fn parse_aliases(field: &str, raw: &[String]) -> Result<Vec<char>, TableError> {
    raw.iter()
        .map(|alias| {
            single_char(alias).ok_or_else(|| {
                invalid(field, format!("alias {alias:?} is not a single character"))
            })
        })
        .collect()
}

#[allow(clippy::type_complexity)]
fn build_letters(
    raw: &BTreeMap<String, String>,
    meta: &TableMeta,
) -> Result<(BTreeMap<char, String>, HashMap<String, char>), TableError> {
    let mut char_to_morse = BTreeMap::new();
    let mut morse_to_char: HashMap<String, char> = HashMap::new();

    for (key, code) in raw {
        let letter = single_char(key).ok_or_else(|| TableError::KeyNotSingleChar {
            table: "letters",
            key: key.clone(),
        })?;
        if code.is_empty() {
            return Err(TableError::EmptyCode(letter));
        }
        if !code.chars().all(|c| c == meta.dot || c == meta.dash) {
            return Err(TableError::InvalidSymbol {
                letter,
                code: code.clone(),
            });
        }
        if let Some(&first) = morse_to_char.get(code) {
            return Err(TableError::DuplicateCode {
                code: code.clone(),
                first,
                second: letter,
            });
        }
        morse_to_char.insert(code.clone(), letter);
        char_to_morse.insert(letter, code.clone());
    }

    Ok((char_to_morse, morse_to_char))
}

fn build_char_map(
    table: &'static str,
    raw: &BTreeMap<String, String>,
) -> Result<HashMap<char, char>, TableError> {
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let from = single_char(key).ok_or_else(|| TableError::KeyNotSingleChar {
            table,
            key: key.clone(),
        })?;
        let to = single_char(value).ok_or_else(|| TableError::ValueNotSingleChar {
            table,
            key: key.clone(),
        })?;
        if from == to {
            return Err(TableError::SelfMapping { table, ch: from });
        }
        map.insert(from, to);
    }
    Ok(map)
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
