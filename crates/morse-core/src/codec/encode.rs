use tracing::{debug, debug_span, warn};

use super::options::EncodeOptions;
use crate::normalize::normalize;
use crate::separators::check_separators;
use crate::table::MorseTable;

/// Encode Arabic text as Morse.
///
/// The text is normalized, split into words on whitespace runs, and each
/// character replaced by its token. Tokens are joined with the letter
/// separator and words with the word separator. A character with no entry
/// becomes the table's unknown placeholder, one per character.
pub fn encode(table: &MorseTable, text: &str, opts: &EncodeOptions) -> String {
    let meta = table.meta();
    let sep = opts.resolve(meta);
    let _span = debug_span!("encode", chars = text.chars().count()).entered();

    for hazard in check_separators(sep.letter_sep, sep.word_sep, &[meta.dot, meta.dash]) {
        warn!(%hazard, "separator hazard");
    }

    let normalized = normalize(table, text);
    let mut unknown = 0usize;
    let mut words: Vec<String> = Vec::new();

    for word in normalized.split_whitespace() {
        let mut tokens: Vec<&str> = Vec::with_capacity(word.len());
        for c in word.chars() {
            if let Some(code) = table.lookup_morse(c) {
                tokens.push(code);
            } else if !c.is_whitespace() {
                unknown += 1;
                tokens.push(&meta.unknown);
            }
        }
        words.push(tokens.join(sep.letter_sep));
    }

    debug!(words = words.len(), unknown);
    words.join(sep.word_sep)
}
