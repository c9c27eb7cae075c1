//! Typographic normalization for extracted PDF text.

use unicode_normalization::UnicodeNormalization;

/// Characters rewritten after compatibility decomposition.
pub const LIGATURE_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "ft"),
    ('\u{FB06}', "st"),
    ('\u{2013}', "-"),
    ('\u{2014}', "--"),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2022}', "*"),
    ('\u{00A0}', " "),
    ('\u{00A3}', "GBP "),
    ('\u{20AC}', "EUR "),
    ('\u{2610}', "[ ]"),
    ('\u{2611}', "[X]"),
    ('\u{2612}', "[X]"),
];

fn replacement(c: char) -> Option<&'static str> {
    LIGATURE_REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// NFKD-decompose `text`, then expand ligatures and swap typographic
/// punctuation, currency and checkbox glyphs for ASCII equivalents.
pub fn replace_ligatures(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.nfkd() {
        match replacement(c) {
            Some(ascii) => normalized.push_str(ascii),
            None => normalized.push(c),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(replace_ligatures("office"), "office");
        assert_eq!(replace_ligatures(""), "");
    }

    #[test]
    fn test_ligatures_expand() {
        assert_eq!(replace_ligatures("\u{FB01}le"), "file");
        assert_eq!(replace_ligatures("o\u{FB03}ce"), "office");
        assert_eq!(replace_ligatures("\u{FB00}\u{FB02}\u{FB04}"), "ffflffl");
    }

    #[test]
    fn test_punctuation_and_symbols() {
        assert_eq!(
            replace_ligatures("\u{201C}it\u{2019}s\u{201D} \u{2013} \u{2014}"),
            "\"it's\" - --"
        );
        assert_eq!(replace_ligatures("\u{2022} item"), "* item");
        assert_eq!(replace_ligatures("\u{00A3}5 or \u{20AC}6"), "GBP 5 or EUR 6");
        assert_eq!(replace_ligatures("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_checkboxes() {
        assert_eq!(
            replace_ligatures("\u{2610} todo \u{2611} done \u{2612} no"),
            "[ ] todo [X] done [X] no"
        );
    }

    #[test]
    fn test_compatibility_decomposition_applies() {
        // U+00E9 decomposes to 'e' + combining acute
        assert_eq!(replace_ligatures("\u{00E9}"), "e\u{0301}");
        // fullwidth letters fold to ASCII
        assert_eq!(replace_ligatures("\u{FF21}"), "A");
    }
}
