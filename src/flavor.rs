// flavor.rs - Regex flavors and the host-language capability seam.
//
// The semantic layer itself is flavor-agnostic: it resolves whatever the
// parser built. A `LanguageHost` answers the questions that do depend on the
// dialect (is this group kind legal here, is `javaLowerCase` a property) so
// inspections can flag constructs the target engine would reject.

use bitflags::bitflags;

use crate::classify::{GroupKind, RefKind};
use crate::element::Property;
use crate::quantifier::QuantifierType;
use crate::unicode;

/// Regex dialect of the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    /// `java.util.regex` (default).
    #[default]
    Java,
    /// PCRE2 / Perl.
    Pcre,
    /// Ruby (Onigmo).
    Ruby,
    /// Python `re`.
    Python,
    /// Oniguruma.
    Oniguruma,
    /// ECMAScript 2018+.
    EcmaScript,
}

bitflags! {
    /// Dialect features a host may or may not accept.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// `(?<name>..)`, `\k<name>`
        const NAMED_GROUPS = 1 << 0;
        /// `(?P<name>..)`, `(?P=name)`
        const PYTHON_NAMED_GROUPS = 1 << 1;
        /// `(?'name'..)`, `\k'name'`
        const QUOTED_NAMED_GROUPS = 1 << 2;
        /// `*+`, `{m,n}+`
        const POSSESSIVE_QUANTIFIERS = 1 << 3;
        /// `(?|..)`
        const BRANCH_RESET = 1 << 4;
        /// `\p{..}`
        const PROPERTY_ESCAPES = 1 << 5;
        /// `\p{javaLowerCase}` and friends
        const JAVA_PREDICATES = 1 << 6;
        /// `\g<name>`, `(?&name)`, `(?P>name)`
        const NAMED_GROUP_CALLS = 1 << 7;
        /// `\g{1}`, `\g{-1}`, `\g1`
        const NUMBERED_GROUP_REFS = 1 << 8;
        /// `(?(1)..|..)`
        const CONDITIONALS = 1 << 9;
        /// `(?<=..)`, `(?<!..)`
        const LOOKBEHIND = 1 << 10;
        /// `(?>..)`
        const ATOMIC_GROUPS = 1 << 11;
        /// `\x{..}`, `\u{..}`
        const EXTENDED_HEX = 1 << 12;
    }
}

impl Flavor {
    pub const ALL: [Flavor; 6] = [
        Flavor::Java,
        Flavor::Pcre,
        Flavor::Ruby,
        Flavor::Python,
        Flavor::Oniguruma,
        Flavor::EcmaScript,
    ];

    /// Preset capability set.
    pub fn capabilities(self) -> Capabilities {
        use Capabilities as C;
        match self {
            Flavor::Java => {
                C::NAMED_GROUPS
                    | C::POSSESSIVE_QUANTIFIERS
                    | C::PROPERTY_ESCAPES
                    | C::JAVA_PREDICATES
                    | C::LOOKBEHIND
                    | C::ATOMIC_GROUPS
                    | C::EXTENDED_HEX
            }
            Flavor::Pcre => C::all().difference(C::JAVA_PREDICATES),
            Flavor::Ruby => {
                C::NAMED_GROUPS
                    | C::QUOTED_NAMED_GROUPS
                    | C::POSSESSIVE_QUANTIFIERS
                    | C::PROPERTY_ESCAPES
                    | C::NAMED_GROUP_CALLS
                    | C::CONDITIONALS
                    | C::LOOKBEHIND
                    | C::ATOMIC_GROUPS
                    | C::EXTENDED_HEX
            }
            Flavor::Python => {
                C::PYTHON_NAMED_GROUPS
                    | C::POSSESSIVE_QUANTIFIERS
                    | C::CONDITIONALS
                    | C::LOOKBEHIND
                    | C::ATOMIC_GROUPS
            }
            Flavor::Oniguruma => Flavor::Ruby.capabilities() | C::NUMBERED_GROUP_REFS,
            Flavor::EcmaScript => {
                C::NAMED_GROUPS | C::PROPERTY_ESCAPES | C::LOOKBEHIND | C::EXTENDED_HEX
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Flavor::Java => "java",
            Flavor::Pcre => "pcre",
            Flavor::Ruby => "ruby",
            Flavor::Python => "python",
            Flavor::Oniguruma => "oniguruma",
            Flavor::EcmaScript => "ecmascript",
        }
    }

    /// Case-insensitive inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Flavor> {
        Flavor::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

/// Dialect questions asked by inspections on top of the semantic layer.
pub trait LanguageHost {
    fn capabilities(&self) -> Capabilities;

    fn is_valid_category(&self, name: &str) -> bool {
        let caps = self.capabilities();
        caps.contains(Capabilities::PROPERTY_ESCAPES)
            && unicode::is_valid_category_with(name, caps.contains(Capabilities::JAVA_PREDICATES))
    }

    fn supports_group_kind(&self, kind: GroupKind) -> bool {
        let caps = self.capabilities();
        match kind {
            GroupKind::Capturing
            | GroupKind::NonCapturing
            | GroupKind::Options
            | GroupKind::PositiveLookahead
            | GroupKind::NegativeLookahead => true,
            GroupKind::NamedGroup => caps.contains(Capabilities::NAMED_GROUPS),
            GroupKind::PythonNamedGroup => caps.contains(Capabilities::PYTHON_NAMED_GROUPS),
            GroupKind::QuotedNamedGroup => caps.contains(Capabilities::QUOTED_NAMED_GROUPS),
            GroupKind::Atomic => caps.contains(Capabilities::ATOMIC_GROUPS),
            GroupKind::PositiveLookbehind | GroupKind::NegativeLookbehind => {
                caps.contains(Capabilities::LOOKBEHIND)
            }
            GroupKind::BranchReset => caps.contains(Capabilities::BRANCH_RESET),
        }
    }

    fn supports_quantifier_type(&self, ty: QuantifierType) -> bool {
        match ty {
            QuantifierType::Possessive => self
                .capabilities()
                .contains(Capabilities::POSSESSIVE_QUANTIFIERS),
            QuantifierType::Greedy | QuantifierType::Reluctant => true,
        }
    }

    fn supports_ref_kind(&self, kind: RefKind) -> bool {
        let caps = self.capabilities();
        match kind {
            RefKind::RubyName => {
                caps.intersects(Capabilities::NAMED_GROUPS | Capabilities::QUOTED_NAMED_GROUPS)
            }
            RefKind::PerlName => caps.contains(Capabilities::NAMED_GROUPS),
            RefKind::PythonName => caps.contains(Capabilities::PYTHON_NAMED_GROUPS),
            RefKind::RubyCall | RefKind::PcreCall => caps.contains(Capabilities::NAMED_GROUP_CALLS),
            RefKind::PcreNumbered => caps.contains(Capabilities::NUMBERED_GROUP_REFS),
        }
    }
}

/// A flavor preset with optional capability overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub flavor: Flavor,
    pub capabilities: Capabilities,
}

impl HostConfig {
    pub fn new(flavor: Flavor) -> Self {
        HostConfig {
            flavor,
            capabilities: flavor.capabilities(),
        }
    }

    pub fn with(mut self, caps: Capabilities) -> Self {
        self.capabilities |= caps;
        self
    }

    pub fn without(mut self, caps: Capabilities) -> Self {
        self.capabilities -= caps;
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig::new(Flavor::default())
    }
}

impl LanguageHost for HostConfig {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

impl<'t> Property<'t> {
    /// [`is_valid`](Property::is_valid) under a host's rules.
    pub fn is_valid_for<H: LanguageHost + ?Sized>(self, host: &H) -> bool {
        self.category_name()
            .is_some_and(|name| host.is_valid_category(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_java() {
        let host = HostConfig::default();
        assert_eq!(host.flavor, Flavor::Java);
        assert!(host.is_valid_category("javaMirrored"));
        assert!(host.supports_quantifier_type(QuantifierType::Possessive));
        assert!(!host.supports_group_kind(GroupKind::PythonNamedGroup));
    }

    #[test]
    fn java_predicates_follow_capability() {
        let pcre = HostConfig::new(Flavor::Pcre);
        assert!(!pcre.is_valid_category("javaMirrored"));
        assert!(pcre.is_valid_category("Lu"));
        assert!(pcre.with(Capabilities::JAVA_PREDICATES).is_valid_category("javaMirrored"));
    }

    #[test]
    fn python_host() {
        let py = HostConfig::new(Flavor::Python);
        assert!(py.supports_group_kind(GroupKind::PythonNamedGroup));
        assert!(py.supports_ref_kind(RefKind::PythonName));
        assert!(!py.supports_ref_kind(RefKind::RubyName));
        assert!(!py.is_valid_category("L"));
    }

    #[test]
    fn overrides() {
        let host = HostConfig::new(Flavor::Java).without(Capabilities::LOOKBEHIND);
        assert!(!host.supports_group_kind(GroupKind::NegativeLookbehind));
        assert!(host.supports_group_kind(GroupKind::PositiveLookahead));
    }

    #[test]
    fn names_round_trip() {
        for flavor in Flavor::ALL {
            assert_eq!(Flavor::from_name(flavor.name()), Some(flavor));
        }
        assert_eq!(Flavor::from_name("PCRE"), Some(Flavor::Pcre));
        assert_eq!(Flavor::from_name("perl6"), None);
    }
}
