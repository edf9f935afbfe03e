//! # regsema
//!
//! Semantic layer over regex syntax trees. An external lexer/parser builds
//! the tree through [`TreeBuilder`](regtree::TreeBuilder); this crate answers
//! what the nodes mean: decoded character values, quantifier bounds and
//! greediness, capture numbering, and back-reference / named-group
//! resolution across Java, PCRE, Ruby, Python and Oniguruma spellings.
//!
//! ## Quick Start
//!
//! ```rust
//! use regsema::prelude::*;
//!
//! // (?<y>a)\k<y>
//! let mut b = RegexTree::builder();
//! b.start_node(NodeKind::Pattern).start_node(NodeKind::Branch);
//! b.start_node(NodeKind::Group)
//!     .token(TokenKind::RubyNamedGroup, "(?<")
//!     .token(TokenKind::Name, "y")
//!     .token(TokenKind::Gt, ">")
//!     .start_node(NodeKind::Pattern)
//!     .start_node(NodeKind::Branch)
//!     .start_node(NodeKind::Char)
//!     .token(TokenKind::Character, "a")
//!     .finish_node()
//!     .finish_node()
//!     .finish_node()
//!     .token(TokenKind::GroupEnd, ")")
//!     .finish_node();
//! b.start_node(NodeKind::NamedGroupRef)
//!     .token(TokenKind::RubyNamedGroupRef, "\\k<")
//!     .token(TokenKind::Name, "y")
//!     .token(TokenKind::Gt, ">")
//!     .finish_node();
//! b.finish_node().finish_node();
//! let tree = b.finish().unwrap();
//! assert_eq!(tree.source(), r"(?<y>a)\k<y>");
//!
//! let reference = tree.iter().find_map(NamedGroupRef::cast).unwrap();
//! let group = reference.resolve().unwrap();
//! assert_eq!(group.name(), Some("y"));
//! assert_eq!(group.capture_number(), Some(1));
//! ```
//!
//! Escapes decode without a tree:
//!
//! ```rust
//! use regsema::escape::decode_escape;
//!
//! assert_eq!(decode_escape(r"\x{1F600}"), Some(0x1F600));
//! assert_eq!(decode_escape(r"\q"), Some('q' as u32));
//! assert_eq!(decode_escape(r"\x{110000}"), None);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`regtree`] | Arena tree, node handles, builder |
//! | [`element`] | Typed node views, `Element` union, `Visitor` |
//! | [`classify`] | Boundary, class, char, group and reference kinds |
//! | [`escape`] | Escape decoder |
//! | [`charnames`] | Names for `\N{..}` |
//! | [`quantifier`] | `Count` and `QuantifierType` |
//! | [`options`] | Inline option letters |
//! | [`grouptrav`] | Capture numbering and reference resolution |
//! | [`unicode`] | Property, block, script and POSIX name validation |
//! | [`flavor`] | Dialect presets and the `LanguageHost` trait |
//! | [`error`] | Builder errors, consistency reporting |
//!
//! ## Consistency violations
//!
//! A node whose tokens contradict its kind (a quantifier without a marker,
//! a boundary with an unknown spelling) means the parser is broken. Debug
//! builds panic; release builds report through [`error::report_inconsistency`]
//! and the query returns its `None`/`INVALID` sentinel. Switch with
//! [`error::set_consistency_mode`].

pub mod charnames;
pub mod classify;
pub mod element;
pub mod error;
pub mod escape;
pub mod flavor;
pub mod grouptrav;
pub mod options;
pub mod prelude;
pub mod quantifier;
pub mod regtree;
pub mod unicode;
