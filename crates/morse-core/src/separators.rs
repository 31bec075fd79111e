//! Separator and symbol sanity checks and literal splitting.
//!
//! Separators are matched as literal substrings. Words are always split
//! before letters, so a word separator that contains the letter separator
//! (the default `//` vs `/`) is fine, but the reverse is not. Hazardous
//! combinations are reported, never rejected: encode and decode log them
//! and carry on with the behavior documented on each variant. Per-call dot
//! and dash overrides are checked the same way by [`check_symbols`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorKind {
    Letter,
    Word,
}

impl fmt::Display for SeparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorKind::Letter => f.write_str("letter separator"),
            SeparatorKind::Word => f.write_str("word separator"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeparatorHazard {
    /// Encode concatenates tokens with nothing between them; decode treats
    /// each word as a single token.
    #[error("letter separator is empty")]
    EmptyLetterSeparator,
    /// Encode concatenates words with nothing between them; decode treats
    /// the whole input as a single word.
    #[error("word separator is empty")]
    EmptyWordSeparator,
    /// Decode splits words first, so every letter boundary is also read as a
    /// word boundary.
    #[error("letter separator contains the word separator")]
    LetterContainsWord,
    /// The separator collides with a dot, dash or alias character. Aliases
    /// are rewritten before splitting, and cleaning keeps dot and dash, so
    /// the separator stops splitting and its symbols leak into tokens.
    #[error("{separator} contains the Morse symbol {symbol:?}")]
    SymbolInSeparator {
        separator: SeparatorKind,
        symbol: char,
    },
    /// Dot and dash are the same character. Cleaning tests for the dot
    /// first, so every symbol in a token reads as a dot.
    #[error("dot and dash are both {0:?}")]
    DotEqualsDash(char),
    /// The input is trimmed and so is every word and token, so a whitespace
    /// symbol is lost at those edges and only interior occurrences count.
    #[error("Morse symbol {0:?} is whitespace")]
    WhitespaceSymbol(char),
}

/// Dot, dash and every alias: the characters that mean something inside a
/// token.
pub fn reserved_symbols(
    dot: char,
    dash: char,
    dash_aliases: &[char],
    dot_aliases: &[char],
) -> Vec<char> {
    let mut symbols = vec![dot, dash];
    symbols.extend(dash_aliases);
    symbols.extend(dot_aliases);
    symbols
}

/// Report every hazard in a separator pair. `reserved` lists the characters
/// that carry meaning inside a token: the dot and dash symbols and, when
/// decoding, their aliases.
pub fn check_separators(letter_sep: &str, word_sep: &str, reserved: &[char]) -> Vec<SeparatorHazard> {
    let mut hazards = Vec::new();
    if letter_sep.is_empty() {
        hazards.push(SeparatorHazard::EmptyLetterSeparator);
    }
    if word_sep.is_empty() {
        hazards.push(SeparatorHazard::EmptyWordSeparator);
    }
    if !letter_sep.is_empty() && !word_sep.is_empty() && letter_sep.contains(word_sep) {
        hazards.push(SeparatorHazard::LetterContainsWord);
    }
    for (separator, sep) in [(SeparatorKind::Letter, letter_sep), (SeparatorKind::Word, word_sep)] {
        let mut seen: Vec<char> = Vec::new();
        for &symbol in reserved {
            if sep.contains(symbol) && !seen.contains(&symbol) {
                seen.push(symbol);
                hazards.push(SeparatorHazard::SymbolInSeparator { separator, symbol });
            }
        }
    }
    hazards
}

/// Report a dot/dash pair that cannot be told apart or does not survive
/// trimming.
pub fn check_symbols(dot: char, dash: char) -> Vec<SeparatorHazard> {
    let mut hazards = Vec::new();
    if dot == dash {
        hazards.push(SeparatorHazard::DotEqualsDash(dot));
    }
    if dot.is_whitespace() {
        hazards.push(SeparatorHazard::WhitespaceSymbol(dot));
    }
    if dash.is_whitespace() && dash != dot {
        hazards.push(SeparatorHazard::WhitespaceSymbol(dash));
    }
    hazards
}

/// Split `s` on the literal `sep`, trim every piece and drop the empty ones.
/// An empty separator does not split.
pub(crate) fn split_trimmed<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let parts: Vec<&'a str> = if sep.is_empty() {
        vec![s]
    } else {
        s.split(sep).collect()
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
