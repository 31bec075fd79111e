//! The Morse configuration table.
//!
//! Holds the letter codes, their inverse, the digit and letter-shape
//! normalization maps, the strip set and the default policy values. A table
//! is built once from TOML and never mutated afterwards, so a single
//! instance can be shared by any number of concurrent callers.
//!
//! - `parse_table_toml(toml)` / `MorseTable::from_file(path)` build a table
//! - `MorseTable::builtin()` returns `&'static MorseTable` (lazy-init singleton)
//! - `MorseTable::init_custom(toml)` replaces the builtin before first use
//! - Default values are embedded via `include_str!("default_table.toml")`

mod config;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::separators::reserved_symbols;

pub use config::{default_toml, parse_table_toml, TableError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Default policy values carried by a table. Per-call options fall back to
/// these when a field is left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub letter_separator: String,
    pub word_separator: String,
    /// Emitted for every character or token with no table entry.
    pub unknown: String,
    pub dot: char,
    pub dash: char,
    pub dash_aliases: Vec<char>,
    pub dot_aliases: Vec<char>,
}

impl TableMeta {
    /// Dot, dash and every alias: the characters that mean something inside
    /// a token.
    pub fn reserved_symbols(&self) -> Vec<char> {
        reserved_symbols(self.dot, self.dash, &self.dash_aliases, &self.dot_aliases)
    }
}

#[derive(Debug, Clone)]
pub struct MorseTable {
    meta: TableMeta,
    char_to_morse: BTreeMap<char, String>,
    morse_to_char: HashMap<String, char>,
    digits: HashMap<char, char>,
    variants: HashMap<char, char>,
    strip: HashSet<char>,
}

impl MorseTable {
    /// Set custom TOML before first `builtin()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn builtin() -> &'static MorseTable {
        static INSTANCE: OnceLock<MorseTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("morse table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(toml_str)
    }

    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        parse_table_toml(&content)
    }

    pub fn meta(&self) -> &TableMeta {
        &self.meta
    }

    /// Morse token for a normalized character.
    pub fn lookup_morse(&self, c: char) -> Option<&str> {
        self.char_to_morse.get(&c).map(String::as_str)
    }

    /// Character for a token written in this table's dot and dash symbols.
    pub fn lookup_char(&self, code: &str) -> Option<char> {
        self.morse_to_char.get(code).copied()
    }

    pub fn normalize_digit(&self, c: char) -> char {
        self.digits.get(&c).copied().unwrap_or(c)
    }

    pub fn normalize_variant(&self, c: char) -> char {
        self.variants.get(&c).copied().unwrap_or(c)
    }

    pub fn is_strip_char(&self, c: char) -> bool {
        self.strip.contains(&c)
    }

    /// All letter entries in code point order.
    pub fn letters(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.char_to_morse.iter().map(|(&c, code)| (c, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.char_to_morse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_to_morse.is_empty()
    }
}
