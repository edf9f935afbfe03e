// charnames.rs - Named characters for `\N{NAME}`.
//
// A compact compiled-in subset of the Unicode name list: C0 controls,
// printable ASCII, Latin-1 symbols, Greek letters and common typographic
// characters. Latin letters and digits are generated by rule. Two algorithmic
// forms are also accepted: `U+HHHH` and `CJK UNIFIED IDEOGRAPH-HHHH`.
//
// Matching is loose: case-insensitive, with spaces, underscores and hyphens
// ignored.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::escape::{scan_hex, CodePoint};

static NAMED_CHARS: &[(&str, CodePoint)] = &[
    // C0 controls
    ("NULL", 0x00),
    ("START OF HEADING", 0x01),
    ("START OF TEXT", 0x02),
    ("END OF TEXT", 0x03),
    ("END OF TRANSMISSION", 0x04),
    ("ENQUIRY", 0x05),
    ("ACKNOWLEDGE", 0x06),
    ("ALERT", 0x07),
    ("BACKSPACE", 0x08),
    ("CHARACTER TABULATION", 0x09),
    ("LINE FEED", 0x0A),
    ("LINE TABULATION", 0x0B),
    ("FORM FEED", 0x0C),
    ("CARRIAGE RETURN", 0x0D),
    ("SHIFT OUT", 0x0E),
    ("SHIFT IN", 0x0F),
    ("DATA LINK ESCAPE", 0x10),
    ("DEVICE CONTROL ONE", 0x11),
    ("DEVICE CONTROL TWO", 0x12),
    ("DEVICE CONTROL THREE", 0x13),
    ("DEVICE CONTROL FOUR", 0x14),
    ("NEGATIVE ACKNOWLEDGE", 0x15),
    ("SYNCHRONOUS IDLE", 0x16),
    ("END OF TRANSMISSION BLOCK", 0x17),
    ("CANCEL", 0x18),
    ("END OF MEDIUM", 0x19),
    ("SUBSTITUTE", 0x1A),
    ("ESCAPE", 0x1B),
    ("INFORMATION SEPARATOR FOUR", 0x1C),
    ("INFORMATION SEPARATOR THREE", 0x1D),
    ("INFORMATION SEPARATOR TWO", 0x1E),
    ("INFORMATION SEPARATOR ONE", 0x1F),
    ("DELETE", 0x7F),
    // Printable ASCII (letters and digits by rule below)
    ("SPACE", 0x20),
    ("EXCLAMATION MARK", 0x21),
    ("QUOTATION MARK", 0x22),
    ("NUMBER SIGN", 0x23),
    ("DOLLAR SIGN", 0x24),
    ("PERCENT SIGN", 0x25),
    ("AMPERSAND", 0x26),
    ("APOSTROPHE", 0x27),
    ("LEFT PARENTHESIS", 0x28),
    ("RIGHT PARENTHESIS", 0x29),
    ("ASTERISK", 0x2A),
    ("PLUS SIGN", 0x2B),
    ("COMMA", 0x2C),
    ("HYPHEN-MINUS", 0x2D),
    ("FULL STOP", 0x2E),
    ("SOLIDUS", 0x2F),
    ("COLON", 0x3A),
    ("SEMICOLON", 0x3B),
    ("LESS-THAN SIGN", 0x3C),
    ("EQUALS SIGN", 0x3D),
    ("GREATER-THAN SIGN", 0x3E),
    ("QUESTION MARK", 0x3F),
    ("COMMERCIAL AT", 0x40),
    ("LEFT SQUARE BRACKET", 0x5B),
    ("REVERSE SOLIDUS", 0x5C),
    ("RIGHT SQUARE BRACKET", 0x5D),
    ("CIRCUMFLEX ACCENT", 0x5E),
    ("LOW LINE", 0x5F),
    ("GRAVE ACCENT", 0x60),
    ("LEFT CURLY BRACKET", 0x7B),
    ("VERTICAL LINE", 0x7C),
    ("RIGHT CURLY BRACKET", 0x7D),
    ("TILDE", 0x7E),
    // Latin-1
    ("NO-BREAK SPACE", 0xA0),
    ("INVERTED EXCLAMATION MARK", 0xA1),
    ("CENT SIGN", 0xA2),
    ("POUND SIGN", 0xA3),
    ("CURRENCY SIGN", 0xA4),
    ("YEN SIGN", 0xA5),
    ("SECTION SIGN", 0xA7),
    ("COPYRIGHT SIGN", 0xA9),
    ("LEFT-POINTING DOUBLE ANGLE QUOTATION MARK", 0xAB),
    ("NOT SIGN", 0xAC),
    ("SOFT HYPHEN", 0xAD),
    ("REGISTERED SIGN", 0xAE),
    ("DEGREE SIGN", 0xB0),
    ("PLUS-MINUS SIGN", 0xB1),
    ("MICRO SIGN", 0xB5),
    ("PILCROW SIGN", 0xB6),
    ("MIDDLE DOT", 0xB7),
    ("RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK", 0xBB),
    ("INVERTED QUESTION MARK", 0xBF),
    ("MULTIPLICATION SIGN", 0xD7),
    ("LATIN SMALL LETTER SHARP S", 0xDF),
    ("DIVISION SIGN", 0xF7),
    // General punctuation and symbols
    ("EN SPACE", 0x2002),
    ("EM SPACE", 0x2003),
    ("ZERO WIDTH SPACE", 0x200B),
    ("ZERO WIDTH NON-JOINER", 0x200C),
    ("ZERO WIDTH JOINER", 0x200D),
    ("EN DASH", 0x2013),
    ("EM DASH", 0x2014),
    ("LEFT SINGLE QUOTATION MARK", 0x2018),
    ("RIGHT SINGLE QUOTATION MARK", 0x2019),
    ("LEFT DOUBLE QUOTATION MARK", 0x201C),
    ("RIGHT DOUBLE QUOTATION MARK", 0x201D),
    ("BULLET", 0x2022),
    ("HORIZONTAL ELLIPSIS", 0x2026),
    ("LINE SEPARATOR", 0x2028),
    ("PARAGRAPH SEPARATOR", 0x2029),
    ("NARROW NO-BREAK SPACE", 0x202F),
    ("EURO SIGN", 0x20AC),
    ("TRADE MARK SIGN", 0x2122),
    ("LEFTWARDS ARROW", 0x2190),
    ("UPWARDS ARROW", 0x2191),
    ("RIGHTWARDS ARROW", 0x2192),
    ("DOWNWARDS ARROW", 0x2193),
    ("INFINITY", 0x221E),
    ("SNOWMAN", 0x2603),
    ("BLACK HEART SUIT", 0x2665),
    ("IDEOGRAPHIC SPACE", 0x3000),
    ("ZERO WIDTH NO-BREAK SPACE", 0xFEFF),
    ("REPLACEMENT CHARACTER", 0xFFFD),
    ("GRINNING FACE", 0x1F600),
];

static DIGIT_NAMES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

// U+0391.. in order; U+03A2 is unassigned (its small form is FINAL SIGMA).
static GREEK_LETTERS: [&str; 25] = [
    "ALPHA", "BETA", "GAMMA", "DELTA", "EPSILON", "ZETA", "ETA", "THETA", "IOTA", "KAPPA",
    "LAMDA", "MU", "NU", "XI", "OMICRON", "PI", "RHO", "", "SIGMA", "TAU", "UPSILON", "PHI",
    "CHI", "PSI", "OMEGA",
];

/// Loose-matching key: uppercase, with space, `_` and `-` removed.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

static NAME_TABLE: Lazy<HashMap<String, CodePoint>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(NAMED_CHARS.len() + 2 * 26 + 10 + 2 * 25);
    for &(name, cp) in NAMED_CHARS {
        map.insert(normalize(name), cp);
    }
    for (i, digit) in DIGIT_NAMES.iter().enumerate() {
        map.insert(normalize(&format!("DIGIT {}", digit)), '0' as CodePoint + i as CodePoint);
    }
    for (i, letter) in ('A'..='Z').enumerate() {
        let i = i as CodePoint;
        map.insert(normalize(&format!("LATIN CAPITAL LETTER {}", letter)), 0x41 + i);
        map.insert(normalize(&format!("LATIN SMALL LETTER {}", letter)), 0x61 + i);
    }
    for (i, letter) in GREEK_LETTERS.iter().enumerate() {
        let i = i as CodePoint;
        if letter.is_empty() {
            map.insert(normalize("GREEK SMALL LETTER FINAL SIGMA"), 0x3B1 + i);
            continue;
        }
        map.insert(normalize(&format!("GREEK CAPITAL LETTER {}", letter)), 0x391 + i);
        map.insert(normalize(&format!("GREEK SMALL LETTER {}", letter)), 0x3B1 + i);
    }
    map
});

const CJK_PREFIX: &str = "CJKUNIFIEDIDEOGRAPH";

fn is_cjk_unified(cp: CodePoint) -> bool {
    matches!(cp, 0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0x20000..=0x2A6DF)
}

/// Look up a character name. `None` if unknown.
pub fn lookup(name: &str) -> Option<CodePoint> {
    let key = normalize(name.trim());
    if let Some(hex) = key.strip_prefix("U+") {
        return match hex.len() {
            4..=6 => scan_hex(hex.as_bytes()),
            _ => None,
        };
    }
    if let Some(hex) = key.strip_prefix(CJK_PREFIX) {
        return scan_hex(hex.as_bytes()).filter(|&cp| is_cjk_unified(cp));
    }
    NAME_TABLE.get(&key).copied()
}

/// Build the name table now instead of on first lookup.
pub fn init_table() {
    Lazy::force(&NAME_TABLE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_matching() {
        assert_eq!(lookup("LATIN SMALL LETTER A"), Some(0x61));
        assert_eq!(lookup("latin_small_letter_a"), Some(0x61));
        assert_eq!(lookup("Hyphen Minus"), Some(0x2D));
        assert_eq!(lookup(" SPACE "), Some(0x20));
    }

    #[test]
    fn generated_ranges() {
        assert_eq!(lookup("DIGIT SEVEN"), Some(0x37));
        assert_eq!(lookup("LATIN CAPITAL LETTER Z"), Some(0x5A));
        assert_eq!(lookup("GREEK CAPITAL LETTER OMEGA"), Some(0x3A9));
        assert_eq!(lookup("GREEK SMALL LETTER FINAL SIGMA"), Some(0x3C2));
        assert_eq!(lookup("GREEK SMALL LETTER SIGMA"), Some(0x3C3));
        assert_eq!(lookup("GREEK CAPITAL LETTER FINAL SIGMA"), None);
    }

    #[test]
    fn algorithmic_names() {
        assert_eq!(lookup("U+1F600"), Some(0x1F600));
        assert_eq!(lookup("u+0041"), Some(0x41));
        assert_eq!(lookup("U+41"), None);
        assert_eq!(lookup("U+110000"), None);
        assert_eq!(lookup("CJK UNIFIED IDEOGRAPH-4E00"), Some(0x4E00));
        assert_eq!(lookup("CJK UNIFIED IDEOGRAPH-0041"), None);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("LATIN SMALL LETTER AE LIGATURE"), None);
    }
}
