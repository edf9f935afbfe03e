// classify.rs - Closed mappings from raw spelling to semantic kinds.
//
// Every legal dialect spelling maps to exactly one kind. A node that the
// lexer already tagged as a boundary/class/group but whose spelling is not
// in the table is an internal-consistency violation: it is reported and the
// query answers `None`.

use crate::element::{Boundary, Char, Group, NamedGroupRef, SimpleClass};
use crate::error::{report_inconsistency, Inconsistency, InconsistencyKind};
use crate::regtree::NodeRef;

fn unknown_spelling<T>(node: NodeRef<'_>, what: &str) -> Option<T> {
    report_inconsistency(
        Inconsistency::new(
            InconsistencyKind::UnknownSpelling,
            format!("{} {:?}", what, node.text()),
        )
        .at(node.id()),
    );
    None
}

// === Boundaries ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// `^`
    LineStart,
    /// `$`
    LineEnd,
    /// `\b`
    Word,
    /// `\B`
    NonWord,
    /// `\A`
    Begin,
    /// `\Z`
    End,
    /// `\z`
    EndNoLineTerm,
    /// `\G`
    PreviousMatch,
    /// `\K`
    ResetMatch,
    /// `\b{g}`
    UnicodeExtendedGrapheme,
}

impl BoundaryKind {
    pub fn from_spelling(s: &str) -> Option<Self> {
        Some(match s {
            "^" => BoundaryKind::LineStart,
            "$" => BoundaryKind::LineEnd,
            "\\b" => BoundaryKind::Word,
            "\\B" => BoundaryKind::NonWord,
            "\\A" => BoundaryKind::Begin,
            "\\Z" => BoundaryKind::End,
            "\\z" => BoundaryKind::EndNoLineTerm,
            "\\G" => BoundaryKind::PreviousMatch,
            "\\K" => BoundaryKind::ResetMatch,
            "\\b{g}" => BoundaryKind::UnicodeExtendedGrapheme,
            _ => return None,
        })
    }

    pub fn spelling(self) -> &'static str {
        match self {
            BoundaryKind::LineStart => "^",
            BoundaryKind::LineEnd => "$",
            BoundaryKind::Word => "\\b",
            BoundaryKind::NonWord => "\\B",
            BoundaryKind::Begin => "\\A",
            BoundaryKind::End => "\\Z",
            BoundaryKind::EndNoLineTerm => "\\z",
            BoundaryKind::PreviousMatch => "\\G",
            BoundaryKind::ResetMatch => "\\K",
            BoundaryKind::UnicodeExtendedGrapheme => "\\b{g}",
        }
    }
}

impl<'t> Boundary<'t> {
    pub fn kind(self) -> Option<BoundaryKind> {
        BoundaryKind::from_spelling(self.text())
            .or_else(|| unknown_spelling(self.syntax(), "boundary"))
    }
}

// === Predefined classes ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleClassKind {
    Any,
    Digit,
    NonDigit,
    Word,
    NonWord,
    Space,
    NonSpace,
    HorizontalSpace,
    NonHorizontalSpace,
    VerticalSpace,
    NonVerticalSpace,
    XmlNameStart,
    NonXmlNameStart,
    XmlNamePart,
    NonXmlNamePart,
    UnicodeGrapheme,
    UnicodeLinebreak,
}

impl SimpleClassKind {
    pub fn from_spelling(s: &str) -> Option<Self> {
        Some(match s {
            "." => SimpleClassKind::Any,
            "\\d" => SimpleClassKind::Digit,
            "\\D" => SimpleClassKind::NonDigit,
            "\\w" => SimpleClassKind::Word,
            "\\W" => SimpleClassKind::NonWord,
            "\\s" => SimpleClassKind::Space,
            "\\S" => SimpleClassKind::NonSpace,
            "\\h" => SimpleClassKind::HorizontalSpace,
            "\\H" => SimpleClassKind::NonHorizontalSpace,
            "\\v" => SimpleClassKind::VerticalSpace,
            "\\V" => SimpleClassKind::NonVerticalSpace,
            "\\i" => SimpleClassKind::XmlNameStart,
            "\\I" => SimpleClassKind::NonXmlNameStart,
            "\\c" => SimpleClassKind::XmlNamePart,
            "\\C" => SimpleClassKind::NonXmlNamePart,
            "\\X" => SimpleClassKind::UnicodeGrapheme,
            "\\R" => SimpleClassKind::UnicodeLinebreak,
            _ => return None,
        })
    }

    pub fn spelling(self) -> &'static str {
        match self {
            SimpleClassKind::Any => ".",
            SimpleClassKind::Digit => "\\d",
            SimpleClassKind::NonDigit => "\\D",
            SimpleClassKind::Word => "\\w",
            SimpleClassKind::NonWord => "\\W",
            SimpleClassKind::Space => "\\s",
            SimpleClassKind::NonSpace => "\\S",
            SimpleClassKind::HorizontalSpace => "\\h",
            SimpleClassKind::NonHorizontalSpace => "\\H",
            SimpleClassKind::VerticalSpace => "\\v",
            SimpleClassKind::NonVerticalSpace => "\\V",
            SimpleClassKind::XmlNameStart => "\\i",
            SimpleClassKind::NonXmlNameStart => "\\I",
            SimpleClassKind::XmlNamePart => "\\c",
            SimpleClassKind::NonXmlNamePart => "\\C",
            SimpleClassKind::UnicodeGrapheme => "\\X",
            SimpleClassKind::UnicodeLinebreak => "\\R",
        }
    }

    /// The complementary class, for the kinds that have one.
    pub fn negated(self) -> Option<Self> {
        use SimpleClassKind::*;
        Some(match self {
            Digit => NonDigit,
            NonDigit => Digit,
            Word => NonWord,
            NonWord => Word,
            Space => NonSpace,
            NonSpace => Space,
            HorizontalSpace => NonHorizontalSpace,
            NonHorizontalSpace => HorizontalSpace,
            VerticalSpace => NonVerticalSpace,
            NonVerticalSpace => VerticalSpace,
            XmlNameStart => NonXmlNameStart,
            NonXmlNameStart => XmlNameStart,
            XmlNamePart => NonXmlNamePart,
            NonXmlNamePart => XmlNamePart,
            Any | UnicodeGrapheme | UnicodeLinebreak => return None,
        })
    }
}

impl<'t> SimpleClass<'t> {
    pub fn kind(self) -> Option<SimpleClassKind> {
        SimpleClassKind::from_spelling(self.text())
            .or_else(|| unknown_spelling(self.syntax(), "simple class"))
    }
}

// === Characters ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharKind {
    /// Plain character or identity/control-letter escape.
    Literal,
    /// `\0`, `\012`, ...
    Octal,
    /// `\xHH`, `\x{H..}`
    Hex,
    /// `\uHHHH`, `\u{H..}`
    Unicode,
    /// `\N{NAME}`
    Named,
    /// `\cX`
    Control,
}

impl CharKind {
    /// Total over all spellings: anything that is not a recognizable
    /// numeric, named or control escape is a literal.
    pub fn from_spelling(s: &str) -> Self {
        let mut chars = s.chars();
        if chars.next() != Some('\\') {
            return CharKind::Literal;
        }
        match chars.next() {
            Some('x') => CharKind::Hex,
            Some('u') if s.len() > 2 => CharKind::Unicode,
            Some('0'..='7') => CharKind::Octal,
            Some('N') => CharKind::Named,
            Some('c') => CharKind::Control,
            _ => CharKind::Literal,
        }
    }
}

impl<'t> Char<'t> {
    pub fn kind(self) -> CharKind {
        CharKind::from_spelling(&self.syntax().unescaped_text())
    }

    /// Spelled with a leading backslash.
    pub fn is_escape(self) -> bool {
        self.syntax().unescaped_text().starts_with('\\')
    }
}

// === Groups ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `(`
    Capturing,
    /// `(?<name>`
    NamedGroup,
    /// `(?P<name>`
    PythonNamedGroup,
    /// `(?'name'`
    QuotedNamedGroup,
    /// `(?:`
    NonCapturing,
    /// `(?>`
    Atomic,
    /// `(?flags:`
    Options,
    /// `(?=`
    PositiveLookahead,
    /// `(?!`
    NegativeLookahead,
    /// `(?<=`
    PositiveLookbehind,
    /// `(?<!`
    NegativeLookbehind,
    /// `(?|`
    BranchReset,
}

impl GroupKind {
    /// Classify by the spelling of the group's opening token.
    pub fn from_spelling(s: &str) -> Option<Self> {
        Some(match s {
            "(" => GroupKind::Capturing,
            "(?<" => GroupKind::NamedGroup,
            "(?P<" => GroupKind::PythonNamedGroup,
            "(?'" => GroupKind::QuotedNamedGroup,
            "(?:" => GroupKind::NonCapturing,
            "(?>" => GroupKind::Atomic,
            "(?" => GroupKind::Options,
            "(?=" => GroupKind::PositiveLookahead,
            "(?!" => GroupKind::NegativeLookahead,
            "(?<=" => GroupKind::PositiveLookbehind,
            "(?<!" => GroupKind::NegativeLookbehind,
            "(?|" => GroupKind::BranchReset,
            _ => return None,
        })
    }

    pub fn spelling(self) -> &'static str {
        match self {
            GroupKind::Capturing => "(",
            GroupKind::NamedGroup => "(?<",
            GroupKind::PythonNamedGroup => "(?P<",
            GroupKind::QuotedNamedGroup => "(?'",
            GroupKind::NonCapturing => "(?:",
            GroupKind::Atomic => "(?>",
            GroupKind::Options => "(?",
            GroupKind::PositiveLookahead => "(?=",
            GroupKind::NegativeLookahead => "(?!",
            GroupKind::PositiveLookbehind => "(?<=",
            GroupKind::NegativeLookbehind => "(?<!",
            GroupKind::BranchReset => "(?|",
        }
    }

    /// Gets an ordinal in the capture numbering.
    pub fn is_capturing(self) -> bool {
        matches!(
            self,
            GroupKind::Capturing
                | GroupKind::NamedGroup
                | GroupKind::PythonNamedGroup
                | GroupKind::QuotedNamedGroup
        )
    }

    pub fn is_named(self) -> bool {
        matches!(
            self,
            GroupKind::NamedGroup | GroupKind::PythonNamedGroup | GroupKind::QuotedNamedGroup
        )
    }

    pub fn is_lookaround(self) -> bool {
        matches!(
            self,
            GroupKind::PositiveLookahead
                | GroupKind::NegativeLookahead
                | GroupKind::PositiveLookbehind
                | GroupKind::NegativeLookbehind
        )
    }
}

impl<'t> Group<'t> {
    pub fn kind(self) -> Option<GroupKind> {
        let open = match self.syntax().first_child().filter(|n| n.is_token()) {
            Some(open) => open,
            None => return unknown_spelling(self.syntax(), "group without opening token"),
        };
        GroupKind::from_spelling(open.text()).or_else(|| unknown_spelling(open, "group opener"))
    }

    pub fn is_capturing(self) -> bool {
        self.kind().is_some_and(GroupKind::is_capturing)
    }

    pub fn is_named(self) -> bool {
        self.kind().is_some_and(GroupKind::is_named)
    }
}

// === Group references ===

/// Dialect sub-kind of a [`NamedGroupRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `\k<name>`, `\k'name'`
    RubyName,
    /// `\g<name>`, `\g'name'`, `\g<1>`
    RubyCall,
    /// `\k{name}`
    PerlName,
    /// `(?P=name)`
    PythonName,
    /// `\g{1}`, `\g1`, `\g{-1}`
    PcreNumbered,
    /// `(?&name)`, `(?P>name)`
    PcreCall,
}

impl RefKind {
    pub fn from_spelling(s: &str) -> Option<Self> {
        Some(match s {
            "\\k<" | "\\k'" => RefKind::RubyName,
            "\\g<" | "\\g'" => RefKind::RubyCall,
            "\\k{" => RefKind::PerlName,
            "(?P=" => RefKind::PythonName,
            "\\g{" | "\\g" => RefKind::PcreNumbered,
            "(?&" | "(?P>" => RefKind::PcreCall,
            _ => return None,
        })
    }

    /// Subroutine call rather than a back-reference.
    pub fn is_call(self) -> bool {
        matches!(self, RefKind::RubyCall | RefKind::PcreCall)
    }
}

impl<'t> NamedGroupRef<'t> {
    pub fn ref_kind(self) -> Option<RefKind> {
        let open = match self.syntax().first_child().filter(|n| n.is_token()) {
            Some(open) => open,
            None => return unknown_spelling(self.syntax(), "reference without opening token"),
        };
        RefKind::from_spelling(open.text()).or_else(|| unknown_spelling(open, "reference opener"))
    }
}
