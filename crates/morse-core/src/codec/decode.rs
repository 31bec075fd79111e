use tracing::{debug, debug_span, warn};

use super::options::{DecodeOptions, ResolvedDecode};
use crate::separators::{check_separators, check_symbols, split_trimmed};
use crate::table::MorseTable;

/// Decode Morse into Arabic text.
///
/// Aliases are rewritten to the dot and dash symbols across the whole
/// input, then it is split into words and each word into tokens. Anything
/// in a token besides dot and dash is discarded. A token with no entry,
/// including one left empty after cleaning, becomes the table's unknown
/// placeholder. Letters are concatenated; words are joined by one space.
pub fn decode(table: &MorseTable, morse: &str, opts: &DecodeOptions) -> String {
    let meta = table.meta();
    let r = opts.resolve(meta);
    let _span = debug_span!("decode", chars = morse.chars().count()).entered();

    for hazard in check_separators(r.letter_sep, r.word_sep, &r.reserved_symbols()) {
        warn!(%hazard, "separator hazard");
    }
    for hazard in check_symbols(r.dot, r.dash) {
        warn!(%hazard, "symbol hazard");
    }

    let morse = rewrite_aliases(morse.trim(), &r);
    let mut unknown = 0usize;
    let mut words: Vec<String> = Vec::new();

    for word in split_trimmed(&morse, r.word_sep) {
        let mut decoded = String::new();
        for token in split_trimmed(word, r.letter_sep) {
            let code = clean_token(token, &r, table);
            match table.lookup_char(&code) {
                Some(c) => decoded.push(c),
                None => {
                    unknown += 1;
                    decoded.push_str(&meta.unknown);
                }
            }
        }
        words.push(decoded);
    }

    debug!(words = words.len(), unknown);
    words.join(" ")
}

fn rewrite_aliases(morse: &str, r: &ResolvedDecode<'_>) -> String {
    if r.dash_aliases.is_empty() && r.dot_aliases.is_empty() {
        return morse.to_string();
    }
    morse
        .chars()
        .map(|c| {
            if r.dash_aliases.contains(&c) {
                r.dash
            } else if r.dot_aliases.contains(&c) {
                r.dot
            } else {
                c
            }
        })
        .collect()
}

/// Keep only dot and dash, written in the table's own symbols.
fn clean_token(token: &str, r: &ResolvedDecode<'_>, table: &MorseTable) -> String {
    let meta = table.meta();
    token
        .chars()
        .filter_map(|c| {
            if c == r.dot {
                Some(meta.dot)
            } else if c == r.dash {
                Some(meta.dash)
            } else {
                None
            }
        })
        .collect()
}
