// escape.rs - Escape decoder: raw `\...` spelling to a code point.
//
// Decoding reads the escape token's text and nothing else. Every malformed
// form answers `None`; the only reported condition is being handed text that
// is not an escape at all, which means the caller skipped the literal path.

use memchr::memchr;

use crate::charnames;
use crate::element::Char;
use crate::error::{report_inconsistency, Inconsistency, InconsistencyKind};

/// A Unicode scalar value or surrogate, as decoded from the source.
pub type CodePoint = u32;

pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

const ESC: u8 = b'\\';

/// Accumulate a run of hex digits. Empty input, a non-hex digit, or a value
/// above `MAX_CODE_POINT` yields `None`.
pub(crate) fn scan_hex(digits: &[u8]) -> Option<CodePoint> {
    if digits.is_empty() {
        return None;
    }
    let mut code: CodePoint = 0;
    for &c in digits {
        let val = (c as char).to_digit(16)?;
        code = (code << 4) + val;
        if code > MAX_CODE_POINT {
            return None;
        }
    }
    Some(code)
}

/// `{H..H}` with the closing brace as the last byte.
fn scan_braced_hex(rest: &[u8]) -> Option<CodePoint> {
    if rest.first() != Some(&b'{') {
        return None;
    }
    let close = memchr(b'}', rest)?;
    if close + 1 != rest.len() {
        return None;
    }
    scan_hex(&rest[1..close])
}

/// Octal run from the start of `digits`, stopping at the first non-octal
/// byte or an opening brace.
fn scan_octal(digits: &[u8]) -> Option<CodePoint> {
    let mut code: CodePoint = 0;
    for &c in digits {
        if c == b'{' || !(b'0'..=b'7').contains(&c) {
            break;
        }
        code = code * 8 + (c - b'0') as CodePoint;
        if code > MAX_CODE_POINT {
            return None;
        }
    }
    Some(code)
}

#[inline]
fn is_high_surrogate(c: CodePoint) -> bool {
    (0xD800..=0xDBFF).contains(&c)
}

#[inline]
fn is_low_surrogate(c: CodePoint) -> bool {
    (0xDC00..=0xDFFF).contains(&c)
}

/// `\uHHHH`, `\u{H..}`, or the surrogate pair `\uHHHH\uHHHH`.
fn decode_unicode(rest: &[u8]) -> Option<CodePoint> {
    if rest.is_empty() {
        return Some('u' as CodePoint);
    }
    if rest[0] == b'{' {
        return scan_braced_hex(rest);
    }
    if rest.len() < 4 {
        return None;
    }
    let first = scan_hex(&rest[..4])?;
    let tail = &rest[4..];
    if tail.is_empty() {
        return Some(first);
    }
    // The only form that spans two escapes.
    if tail.len() == 6 && tail[0] == ESC && tail[1] == b'u' && is_high_surrogate(first) {
        let second = scan_hex(&tail[2..])?;
        if is_low_surrogate(second) {
            return Some(0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00));
        }
    }
    None
}

/// Decode one escape sequence.
///
/// `raw` must start with `\` and have at least one more character.
///
/// | second char | result |
/// |---|---|
/// | `n r t a e f b` | LF, CR, TAB, BEL, ESC, FF, BS |
/// | `c` | `\cX`: `X ^ 64` |
/// | `N` | `\N{NAME}` through the named-character table |
/// | `x` | `\xHH` or `\x{H..}` |
/// | `u` | `\uHHHH`, `\u{H..}`, a surrogate pair, or bare `\u` as `u` |
/// | `0`-`7` | octal run |
/// | other | the character itself |
pub fn decode_escape(raw: &str) -> Option<CodePoint> {
    let mut chars = raw.chars();
    let second = match (chars.next(), chars.next()) {
        (Some('\\'), Some(c)) => c,
        _ => {
            report_inconsistency(Inconsistency::new(
                InconsistencyKind::NotAnEscape,
                format!("{:?}", raw),
            ));
            return None;
        }
    };
    let rest = &raw.as_bytes()[1 + second.len_utf8()..];

    match second {
        'n' => Some(0x0A),
        'r' => Some(0x0D),
        't' => Some(0x09),
        'a' => Some(0x07),
        'e' => Some(0x1B),
        'f' => Some(0x0C),
        'b' => Some(0x08),
        'c' => {
            let mut tail = chars;
            match (tail.next(), tail.next()) {
                (Some(x), None) => Some(x as CodePoint ^ 64),
                _ => None,
            }
        }
        'N' => {
            let name = raw[2..].strip_prefix('{')?.strip_suffix('}')?;
            charnames::lookup(name)
        }
        'x' => {
            if rest.first() == Some(&b'{') {
                scan_braced_hex(rest)
            } else if rest.len() == 2 {
                scan_hex(rest)
            } else {
                None
            }
        }
        'u' => decode_unicode(rest),
        '0'..='7' => scan_octal(&raw.as_bytes()[1..]),
        other => Some(other as CodePoint),
    }
}

impl<'t> Char<'t> {
    /// Decoded code point. Plain characters are read directly; escapes go
    /// through [`decode_escape`]. A lone `\` is itself.
    pub fn value(self) -> Option<CodePoint> {
        let text = self.syntax().unescaped_text();
        if !text.starts_with('\\') || text.len() == 1 {
            return text.chars().next().map(CodePoint::from);
        }
        decode_escape(&text)
    }

    /// [`value`](Self::value) as a `char`; `None` for lone surrogates too.
    pub fn value_char(self) -> Option<char> {
        self.value().and_then(char::from_u32)
    }
}
