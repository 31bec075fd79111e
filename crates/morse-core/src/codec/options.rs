use crate::separators::reserved_symbols;
use crate::table::TableMeta;

/// Per-call overrides for [`encode`](super::encode). Unset fields fall back
/// to the table's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub letter_separator: Option<String>,
    pub word_separator: Option<String>,
}

/// Per-call overrides for [`decode`](super::decode). Unset fields fall back
/// to the table's metadata.
///
/// `dot` and `dash` name the symbols the *input* is written in; tokens are
/// translated to the table's own symbols before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub letter_separator: Option<String>,
    pub word_separator: Option<String>,
    pub dash_aliases: Option<Vec<char>>,
    pub dot_aliases: Option<Vec<char>>,
    pub dot: Option<char>,
    pub dash: Option<char>,
}

impl DecodeOptions {
    /// The separator overrides, for running the opposite direction with the
    /// same settings.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            letter_separator: self.letter_separator.clone(),
            word_separator: self.word_separator.clone(),
        }
    }
}

pub(crate) struct ResolvedEncode<'a> {
    pub letter_sep: &'a str,
    pub word_sep: &'a str,
}

impl EncodeOptions {
    pub(crate) fn resolve<'a>(&'a self, meta: &'a TableMeta) -> ResolvedEncode<'a> {
        ResolvedEncode {
            letter_sep: self
                .letter_separator
                .as_deref()
                .unwrap_or(&meta.letter_separator),
            word_sep: self
                .word_separator
                .as_deref()
                .unwrap_or(&meta.word_separator),
        }
    }
}

pub(crate) struct ResolvedDecode<'a> {
    pub letter_sep: &'a str,
    pub word_sep: &'a str,
    pub dot: char,
    pub dash: char,
    pub dash_aliases: Vec<char>,
    pub dot_aliases: Vec<char>,
}

impl ResolvedDecode<'_> {
    /// Characters that carry meaning inside a token.
    pub fn reserved_symbols(&self) -> Vec<char> {
        reserved_symbols(self.dot, self.dash, &self.dash_aliases, &self.dot_aliases)
    }
}

impl DecodeOptions {
    /// An alias that collides with the effective symbol of the other kind
    /// is ignored; one that equals its own symbol is a no-op and dropped.
    pub(crate) fn resolve<'a>(&'a self, meta: &'a TableMeta) -> ResolvedDecode<'a> {
        let dot = self.dot.unwrap_or(meta.dot);
        let dash = self.dash.unwrap_or(meta.dash);
        let dash_aliases = self
            .dash_aliases
            .as_deref()
            .unwrap_or(&meta.dash_aliases)
            .iter()
            .copied()
            .filter(|&c| c != dot && c != dash)
            .collect();
        let dot_aliases = self
            .dot_aliases
            .as_deref()
            .unwrap_or(&meta.dot_aliases)
            .iter()
            .copied()
            .filter(|&c| c != dot && c != dash)
            .collect();
        ResolvedDecode {
            letter_sep: self
                .letter_separator
                .as_deref()
                .unwrap_or(&meta.letter_separator),
            word_sep: self
                .word_separator
                .as_deref()
                .unwrap_or(&meta.word_separator),
            dot,
            dash,
            dash_aliases,
            dot_aliases,
        }
    }
}
