// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use regsema::prelude::*;
//!
//! assert!(is_valid_category("IsLetter"));
//! assert_eq!(BoundaryKind::from_spelling("\\z"), Some(BoundaryKind::EndNoLineTerm));
//! ```

pub use crate::classify::{BoundaryKind, CharKind, GroupKind, RefKind, SimpleClassKind};
pub use crate::element::{
    walk, Backref, Boundary, Branch, Char, CharRange, Class, ClassElement, Conditional, Element,
    Group, Intersection, NamedGroupRef, Number, Options, Pattern, PosixBracket, Property,
    PyNamedGroupRef, Quantifier, SetOptions, SimpleClass, Token, Union, Visitor,
};
pub use crate::error::{ConsistencyMode, Inconsistency, InconsistencyKind, TreeError};
pub use crate::escape::{decode_escape, CodePoint, MAX_CODE_POINT};
pub use crate::flavor::{Capabilities, Flavor, HostConfig, LanguageHost};
pub use crate::grouptrav::{
    capture_count, capturing_groups, resolve_backref, resolve_named_group,
    resolve_numbered_group_ref,
};
pub use crate::options::OptionFlags;
pub use crate::quantifier::{Count, QuantifierType, INFINITE_REPEAT};
pub use crate::regtree::{NodeId, NodeKind, NodeRef, RegexTree, TokenKind, TreeBuilder};
pub use crate::unicode::is_valid_category;
