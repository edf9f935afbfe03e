// options.rs - Inline option letters of `(?im-sx)` and `(?i:...)`.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::element::{Options, SetOptions};
use crate::regtree::TokenKind;

bitflags! {
    /// Option letters understood across the supported flavors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OptionFlags: u16 {
        /// `i`
        const CASE_INSENSITIVE = 1 << 0;
        /// `m`
        const MULTILINE = 1 << 1;
        /// `s`
        const DOTALL = 1 << 2;
        /// `x`
        const COMMENTS = 1 << 3;
        /// `u`
        const UNICODE_CASE = 1 << 4;
        /// `d`
        const UNIX_LINES = 1 << 5;
        /// `U`
        const UNICODE_CLASS = 1 << 6;
        /// `a`
        const ASCII = 1 << 7;
        /// `L`
        const LOCALE = 1 << 8;
        /// `n`
        const NO_AUTO_CAPTURE = 1 << 9;
        /// `J`
        const DUPLICATE_NAMES = 1 << 10;
    }
}

static OPTION_LETTERS: &[(char, OptionFlags)] = &[
    ('i', OptionFlags::CASE_INSENSITIVE),
    ('m', OptionFlags::MULTILINE),
    ('s', OptionFlags::DOTALL),
    ('x', OptionFlags::COMMENTS),
    ('u', OptionFlags::UNICODE_CASE),
    ('d', OptionFlags::UNIX_LINES),
    ('U', OptionFlags::UNICODE_CLASS),
    ('a', OptionFlags::ASCII),
    ('L', OptionFlags::LOCALE),
    ('n', OptionFlags::NO_AUTO_CAPTURE),
    ('J', OptionFlags::DUPLICATE_NAMES),
];

impl OptionFlags {
    pub fn from_char(c: char) -> Option<Self> {
        OPTION_LETTERS
            .iter()
            .find(|&&(letter, _)| letter == c)
            .map(|&(_, flag)| flag)
    }

    /// The letter of a single flag.
    pub fn to_char(self) -> Option<char> {
        OPTION_LETTERS
            .iter()
            .find(|&&(_, flag)| flag == self)
            .map(|&(letter, _)| letter)
    }

    /// Known letters of `letters` as flags; unknown ones are skipped.
    pub fn from_letters(letters: &str) -> Self {
        letters
            .chars()
            .filter_map(OptionFlags::from_char)
            .fold(OptionFlags::empty(), |acc, f| acc | f)
    }
}

impl<'t> Options<'t> {
    /// Letters switched on, e.g. `im` in `(?im-s)`.
    pub fn on_text(self) -> &'t str {
        self.syntax()
            .child_token(TokenKind::OptionsOn)
            .map_or("", |n| n.text())
    }

    /// Letters switched off, without the leading `-`.
    pub fn off_text(self) -> &'t str {
        self.syntax()
            .child_token(TokenKind::OptionsOff)
            .map_or("", |n| {
                let text = n.text();
                text.strip_prefix('-').unwrap_or(text)
            })
    }

    pub fn options_on(self) -> OptionFlags {
        OptionFlags::from_letters(self.on_text())
    }

    pub fn options_off(self) -> OptionFlags {
        OptionFlags::from_letters(self.off_text())
    }

    /// Raw letter test, independent of whether the letter is known.
    pub fn is_switched_on(self, c: char) -> bool {
        self.on_text().contains(c)
    }

    pub fn is_switched_off(self, c: char) -> bool {
        self.off_text().contains(c)
    }

    /// Letters no supported flavor defines, in source order.
    pub fn unknown_options(self) -> SmallVec<[char; 4]> {
        self.on_text()
            .chars()
            .chain(self.off_text().chars())
            .filter(|&c| OptionFlags::from_char(c).is_none())
            .collect()
    }
}

impl<'t> SetOptions<'t> {
    pub fn options_on(self) -> OptionFlags {
        self.options().map_or(OptionFlags::empty(), Options::options_on)
    }

    pub fn options_off(self) -> OptionFlags {
        self.options().map_or(OptionFlags::empty(), Options::options_off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regtree::{NodeKind, RegexTree};

    // (?ix-sq)
    fn set_options_tree() -> RegexTree {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::SetOptions)
            .token(TokenKind::SetOptions, "(?")
            .start_node(NodeKind::Options)
            .token(TokenKind::OptionsOn, "ix")
            .token(TokenKind::OptionsOff, "-sq")
            .finish_node()
            .token(TokenKind::GroupEnd, ")")
            .finish_node()
            .finish_node()
            .finish_node();
        b.finish().unwrap()
    }

    #[test]
    fn letters_round_trip() {
        for &(letter, flag) in OPTION_LETTERS {
            assert_eq!(OptionFlags::from_char(letter), Some(flag));
            assert_eq!(flag.to_char(), Some(letter));
        }
        assert_eq!(OptionFlags::from_char('z'), None);
        assert_eq!((OptionFlags::DOTALL | OptionFlags::ASCII).to_char(), None);
    }

    #[test]
    fn on_and_off_sets() {
        let tree = set_options_tree();
        let set = tree.iter().find_map(SetOptions::cast).unwrap();
        assert_eq!(
            set.options_on(),
            OptionFlags::CASE_INSENSITIVE | OptionFlags::COMMENTS
        );
        assert_eq!(set.options_off(), OptionFlags::DOTALL);

        let opts = set.options().unwrap();
        assert!(opts.is_switched_on('i'));
        assert!(!opts.is_switched_on('s'));
        assert!(opts.is_switched_off('q'));
        assert_eq!(opts.unknown_options().as_slice(), &['q']);
    }
}
