// unicode/mod.rs - Property name validation for `\p{..}` and `[:name:]`.
//
// `is_valid_category` applies the prefix rules: `In` selects a block name,
// `Is` is stripped and the rest may be a property, a binary property or a
// script; anything else must be a general category, a POSIX name or (when
// enabled) a `java*` predicate. `key=value` forms pick the table by key.
//
// Block and script sets are built once, on first use or through
// `init_tables`, and are read-only afterwards.

mod property_data;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::element::{PosixBracket, Property};
use crate::regtree::TokenKind;
use property_data::{BINARY_PROPERTIES, POSIX_BRACKETS, PROPERTY_NAMES, UNICODE_BLOCKS, UNICODE_SCRIPTS};

/// Which table a property name comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyClass {
    /// `Lu`, `L`, `LC`, `all`, ...
    GeneralCategory,
    /// `Alnum`, `XDigit`, `ASCII`, ...
    Posix,
    /// `javaLowerCase`, `javaMirrored`, ...
    JavaPredicate,
}

/// Loose key for block and script names: uppercase, no space, `_` or `-`.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

static BLOCKS: Lazy<HashSet<String>> =
    Lazy::new(|| UNICODE_BLOCKS.iter().map(|b| normalize(b)).collect());

static SCRIPTS: Lazy<HashSet<String>> = Lazy::new(|| {
    UNICODE_SCRIPTS
        .iter()
        .flat_map(|&(name, alias)| [normalize(name), normalize(alias)])
        .collect()
});

/// Build the block and script sets now. Later calls are no-ops.
pub fn init_tables() {
    Lazy::force(&BLOCKS);
    Lazy::force(&SCRIPTS);
    crate::charnames::init_table();
}

/// Exact, case-sensitive lookup in the property table.
pub fn property_class(name: &str) -> Option<PropertyClass> {
    PROPERTY_NAMES
        .binary_search_by_key(&name.as_bytes(), |(n, _)| n.as_bytes())
        .ok()
        .map(|idx| PROPERTY_NAMES[idx].1)
}

fn is_valid_property_with(name: &str, java_predicates: bool) -> bool {
    match property_class(name) {
        Some(PropertyClass::JavaPredicate) => java_predicates,
        Some(_) => true,
        None => false,
    }
}

pub fn is_valid_property(name: &str) -> bool {
    is_valid_property_with(name, true)
}

pub fn is_valid_unicode_block(name: &str) -> bool {
    !name.is_empty() && BLOCKS.contains(&normalize(name))
}

/// Script name or ISO 15924 code, case-insensitive.
pub fn is_valid_unicode_script(name: &str) -> bool {
    !name.is_empty() && SCRIPTS.contains(&normalize(name))
}

/// `Alphabetic`, `White_Space`, `Emoji`, ... as accepted after `Is`.
pub fn is_valid_binary_property(name: &str) -> bool {
    BINARY_PROPERTIES.binary_search(&normalize(name).as_str()).is_ok()
}

/// `alpha`, `xdigit`, ... as used in `[:alpha:]`.
pub fn is_valid_posix_bracket(name: &str) -> bool {
    POSIX_BRACKETS.contains(&name)
}

/// Validate a `\p{..}` category name, `java*` predicates included.
pub fn is_valid_category(name: &str) -> bool {
    is_valid_category_with(name, true)
}

pub fn is_valid_category_with(name: &str, java_predicates: bool) -> bool {
    if let Some((key, value)) = name.split_once('=') {
        return match normalize(key).as_str() {
            "SCRIPT" | "SC" => is_valid_unicode_script(value),
            "BLOCK" | "BLK" => is_valid_unicode_block(value),
            "GENERALCATEGORY" | "GC" => {
                property_class(value) == Some(PropertyClass::GeneralCategory)
            }
            _ => false,
        };
    }
    if let Some(block) = name.strip_prefix("In") {
        return is_valid_unicode_block(block);
    }
    if let Some(rest) = name.strip_prefix("Is") {
        return is_valid_property_with(rest, java_predicates)
            || is_valid_binary_property(rest)
            || is_valid_unicode_script(rest);
    }
    is_valid_property_with(name, java_predicates)
}

// === Node queries ===

impl<'t> Property<'t> {
    /// `\P{..}` or `\p{^..}`; both together cancel out.
    pub fn is_negated(self) -> bool {
        let upper = self
            .syntax()
            .child_token(TokenKind::Property)
            .is_some_and(|t| t.text().starts_with("\\P"));
        upper ^ self.syntax().has_token(TokenKind::Caret)
    }

    /// `L` in `\pL`, `Lu` in `\p{Lu}`, `sc=Latn` in `\p{sc=Latn}`.
    pub fn category_name(self) -> Option<&'t str> {
        self.syntax()
            .tokens()
            .find(|t| {
                matches!(
                    t.token_kind(),
                    Some(TokenKind::CategoryShortHand) | Some(TokenKind::Name)
                )
            })
            .map(|t| t.text())
    }

    pub fn is_valid(self) -> bool {
        self.category_name().is_some_and(is_valid_category)
    }
}

impl<'t> PosixBracket<'t> {
    pub fn class_name(self) -> Option<&'t str> {
        self.syntax()
            .child_token(TokenKind::BracketExprName)
            .map(|t| t.text())
    }

    /// `[:^alpha:]`
    pub fn is_negated(self) -> bool {
        self.syntax().has_token(TokenKind::Caret)
    }

    pub fn is_valid(self) -> bool {
        self.class_name().is_some_and(is_valid_posix_bracket)
    }
}
