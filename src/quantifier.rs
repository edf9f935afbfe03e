// quantifier.rs - Repetition bounds and greediness of Quantifier nodes.
//
// A Quantifier node is `atom marker [suffix]` where the primary marker is
// `?`, `*`, `+` or a brace interval `{ Number? ,? Number? }`, and the optional
// suffix `?`/`+` selects reluctant/possessive. Only the first two marker
// tokens are inspected.

use std::fmt;

use smallvec::SmallVec;

use crate::element::{Element, Number, Quantifier};
use crate::error::{report_inconsistency, Inconsistency, InconsistencyKind};
use crate::regtree::TokenKind;

/// Upper bound of `*`, `+` and `{m,}`.
pub const INFINITE_REPEAT: i32 = i32::MAX;

#[inline]
pub fn is_infinite_repeat(n: i32) -> bool {
    n == INFINITE_REPEAT
}

/// Repetition bounds. `max` is [`INFINITE_REPEAT`] when unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Count {
    pub min: i32,
    pub max: i32,
}

impl Count {
    pub const ZERO_OR_ONE: Count = Count { min: 0, max: 1 };
    pub const ZERO_OR_MORE: Count = Count {
        min: 0,
        max: INFINITE_REPEAT,
    };
    pub const ONE_OR_MORE: Count = Count {
        min: 1,
        max: INFINITE_REPEAT,
    };
    /// Malformed interval.
    pub const INVALID: Count = Count { min: -1, max: -1 };

    pub const fn new(min: i32, max: i32) -> Self {
        Count { min, max }
    }

    pub fn is_valid(self) -> bool {
        self != Count::INVALID
    }

    pub fn is_unbounded(self) -> bool {
        is_infinite_repeat(self.max)
    }

    /// Valid and `min <= max`. `{5,2}` is parsed as written and fails here.
    pub fn is_well_formed(self) -> bool {
        self.is_valid() && self.min >= 0 && (self.is_unbounded() || self.min <= self.max)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            write!(f, "{{invalid}}")
        } else if self.is_unbounded() {
            write!(f, "{{{},}}", self.min)
        } else if self.min == self.max {
            write!(f, "{{{}}}", self.min)
        } else {
            write!(f, "{{{},{}}}", self.min, self.max)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QuantifierType {
    #[default]
    Greedy,
    /// `??`, `*?`, `{m,n}?`
    Reluctant,
    /// `?+`, `*+`, `{m,n}+`
    Possessive,
}

/// Decimal digits to `i32`; `None` for empty text, non-digits or overflow.
pub(crate) fn scan_number(text: &str) -> Option<i32> {
    if text.is_empty() {
        return None;
    }
    let mut num: i32 = 0;
    for c in text.bytes() {
        if !c.is_ascii_digit() {
            return None;
        }
        let val = (c - b'0') as i32;
        if (i32::MAX - val) / 10 < num {
            return None;
        }
        num = num * 10 + val;
    }
    Some(num)
}

/// A written bound. `INFINITE_REPEAT` itself is reserved for `{m,}`.
fn finite_bound(n: Number<'_>) -> Option<i32> {
    n.value().filter(|&v| !is_infinite_repeat(v))
}

impl<'t> Number<'t> {
    pub fn value(self) -> Option<i32> {
        scan_number(self.text())
    }
}

impl<'t> Quantifier<'t> {
    /// The repeated atom.
    pub fn atom(self) -> Option<Element<'t>> {
        self.syntax()
            .first_child()
            .filter(|n| !n.is_token())
            .map(Element::from)
    }

    fn markers(self) -> SmallVec<[TokenKind; 2]> {
        self.syntax()
            .tokens()
            .filter_map(|n| n.token_kind())
            .filter(|k| k.is_quantifier_marker())
            .take(2)
            .collect()
    }

    fn missing_marker(self) {
        report_inconsistency(
            Inconsistency::new(
                InconsistencyKind::MissingToken,
                format!("quantifier without marker {:?}", self.text()),
            )
            .at(self.syntax().id()),
        );
    }

    fn number_after(self, kind: TokenKind) -> Option<Number<'t>> {
        self.syntax()
            .child_nodes()
            .filter_map(Number::cast)
            .find(|n| n.syntax().prev_sibling().and_then(|p| p.token_kind()) == Some(kind))
    }

    /// `{m,n}` form.
    pub fn is_counted(self) -> bool {
        self.markers().first() == Some(&TokenKind::LBrace)
    }

    /// The number right after `{`.
    pub fn min_number(self) -> Option<Number<'t>> {
        self.number_after(TokenKind::LBrace)
    }

    /// The number right after `,`.
    pub fn max_number(self) -> Option<Number<'t>> {
        self.number_after(TokenKind::Comma)
    }

    pub fn count(self) -> Count {
        let markers = self.markers();
        let primary = match markers.first() {
            Some(&k) => k,
            None => {
                self.missing_marker();
                return Count::INVALID;
            }
        };
        match primary {
            TokenKind::Quest => Count::ZERO_OR_ONE,
            TokenKind::Star => Count::ZERO_OR_MORE,
            TokenKind::Plus => Count::ONE_OR_MORE,
            _ => self.interval(),
        }
    }

    fn interval(self) -> Count {
        let min = match self.min_number().and_then(finite_bound) {
            Some(min) => min,
            None => return Count::INVALID,
        };
        let max = match self.max_number() {
            Some(n) => match finite_bound(n) {
                Some(max) => max,
                None => return Count::INVALID,
            },
            None if self.syntax().has_token(TokenKind::Comma) => INFINITE_REPEAT,
            None => min,
        };
        Count::new(min, max)
    }

    pub fn quantifier_type(self) -> QuantifierType {
        let markers = self.markers();
        if markers.is_empty() {
            self.missing_marker();
        }
        match markers.get(1) {
            Some(TokenKind::Quest) => QuantifierType::Reluctant,
            Some(TokenKind::Plus) => QuantifierType::Possessive,
            _ => QuantifierType::Greedy,
        }
    }
}
