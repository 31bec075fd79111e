//! Character-level Unicode classification for Arabic text.

/// Arabic tatweel (kashida), U+0640. Pure elongation with no letter value.
pub const TATWEEL: char = '\u{0640}';

/// Check the Arabic-Indic digit block (U+0660..U+0669).
pub fn is_arabic_indic_digit(c: char) -> bool {
    ('\u{0660}'..='\u{0669}').contains(&c)
}

/// Check the extended Arabic-Indic (Persian/Urdu) digit block (U+06F0..U+06F9).
pub fn is_extended_arabic_indic_digit(c: char) -> bool {
    ('\u{06F0}'..='\u{06F9}').contains(&c)
}

/// Check the Arabic, Arabic Supplement and Arabic Extended-A blocks.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
        || ('\u{0750}'..='\u{077F}').contains(&c)
        || ('\u{08A0}'..='\u{08FF}').contains(&c)
}

/// Returns the single `char` in `s`, or `None` if `s` is empty or longer.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
