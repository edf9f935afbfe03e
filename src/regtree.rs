// regtree.rs - Arena-backed regex syntax tree.
//
// The external parser feeds a `TreeBuilder` with start/token/finish events.
// Nodes land in one `Vec` in pre-order, so the subtree of a node is the
// contiguous index range `[id, end)` and a whole-document walk is a plain
// index scan. Parent links are indices; nothing holds a reference upward.
//
// Composite nodes carry no data of their own. Every attribute (negation,
// bounds, names, decoded values) is derived from the token children, which
// keep their raw spelling.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use crate::error::TreeError;

// === Node identity ===

/// Index of a node inside its [`RegexTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

/// Node capacity of one tree. Each node records its subtree end as
/// `id + 1`, so the last id is `MAX_NODES - 1`.
const MAX_NODES: u32 = u32::MAX;

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An id for position `index`; only meaningful against the tree it
    /// was taken from. `None` when `index` does not fit a tree.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i < MAX_NODES)
            .map(NodeId)
    }
}

// === Node kinds ===

/// Composite syntactic categories, plus `Token` for leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Alternation: `Branch ('|' Branch)*`.
    Pattern,
    /// Concatenation of atoms.
    Branch,
    Char,
    /// `from '-' to?`
    CharRange,
    /// `.`, `\d`, `\w`, ...
    SimpleClass,
    /// `[...]`
    Class,
    /// Juxtaposed class elements used as an operand of `&&`.
    Union,
    /// `a&&b`
    Intersection,
    /// `\p{..}` / `\P{..}` / `\pL`
    Property,
    /// `[:alpha:]`
    PosixBracket,
    Group,
    /// `(?(cond)yes|no)`
    Conditional,
    /// `\1`
    Backref,
    /// `\k<name>`, `\g<name>`, `\g{1}`, `(?P=name)`, ...
    NamedGroupRef,
    /// Legacy Python `(?P=name)`.
    PyNamedGroupRef,
    /// Atom followed by `?`, `*`, `+` or `{m,n}`, optionally `?`/`+`.
    Quantifier,
    Boundary,
    /// On/off option letters.
    Options,
    /// `(?i-s)`
    SetOptions,
    /// A decimal literal inside a quantifier, backref or group ref.
    Number,
    Token(TokenKind),
}

impl NodeKind {
    #[inline]
    pub fn is_token(self) -> bool {
        matches!(self, NodeKind::Token(_))
    }

    /// Can appear as an element of a `Branch`.
    pub fn is_atom(self) -> bool {
        matches!(
            self,
            NodeKind::Char
                | NodeKind::SimpleClass
                | NodeKind::Class
                | NodeKind::Property
                | NodeKind::Group
                | NodeKind::Conditional
                | NodeKind::Backref
                | NodeKind::NamedGroupRef
                | NodeKind::PyNamedGroupRef
                | NodeKind::Quantifier
                | NodeKind::Boundary
                | NodeKind::SetOptions
        )
    }

    /// Can appear inside a `[...]` class.
    pub fn is_class_element(self) -> bool {
        matches!(
            self,
            NodeKind::Char
                | NodeKind::CharRange
                | NodeKind::Class
                | NodeKind::Union
                | NodeKind::Intersection
                | NodeKind::SimpleClass
                | NodeKind::Property
                | NodeKind::PosixBracket
        )
    }
}

/// Lexical token kinds assigned by the external lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Characters
    Character,
    EscCharacter,
    EscCtrlCharacter,
    Ctrl,
    OctChar,
    BadOctValue,
    HexChar,
    BadHexValue,
    UnicodeChar,
    NamedCharacter,
    RedundantEscape,
    QuoteBegin,
    QuoteEnd,

    // Classes
    Dot,
    CharClass,
    ClassBegin,
    ClassEnd,
    Caret,
    Minus,
    Plus,
    AndAnd,
    BracketExprBegin,
    BracketExprName,
    BracketExprEnd,

    // Properties
    Property,
    CategoryShortHand,
    LBrace,
    RBrace,
    Name,

    // Anchors
    Dollar,
    Boundary,

    // Groups
    GroupBegin,
    GroupEnd,
    NonCaptGroup,
    AtomicGroup,
    PosLookahead,
    NegLookahead,
    PosLookbehind,
    NegLookbehind,
    RubyNamedGroup,
    RubyQuotedNamedGroup,
    PythonNamedGroup,
    PcreBranchReset,
    SetOptions,
    OptionsOn,
    OptionsOff,
    Colon,
    Gt,
    Quote,
    Conditional,

    // References
    Backref,
    RubyNamedGroupRef,
    RubyQuotedNamedGroupRef,
    RubyNamedGroupCall,
    RubyQuotedNamedGroupCall,
    PythonNamedGroupRef,
    PcreNumberedGroupRef,
    PerlNamedGroupRef,
    PcreNamedGroupCall,

    // Quantifiers
    Quest,
    Star,
    Comma,
    Number,

    Union,
    Comment,
}

impl TokenKind {
    /// Tokens that open or modify a quantifier: the first one fixes the
    /// count, a second `?`/`+` fixes the type.
    #[inline]
    pub fn is_quantifier_marker(self) -> bool {
        matches!(
            self,
            TokenKind::Quest | TokenKind::Star | TokenKind::Plus | TokenKind::LBrace
        )
    }
}

// === Storage ===

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    /// One past the last node of this subtree.
    end: u32,
    span: Range<usize>,
    /// Host-string-unescaped text, when it differs from the raw spelling.
    unescaped: Option<Box<str>>,
}

/// An immutable regex syntax tree.
#[derive(Clone)]
pub struct RegexTree {
    source: String,
    nodes: Vec<NodeData>,
}

impl RegexTree {
    /// Start building a tree.
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    /// The outermost `Pattern`.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Raw source text, the concatenation of every token in order.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Panics if `id` comes from another tree and is out of range.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.index() < self.nodes.len(), "node id {} out of range", id.index());
        NodeRef { tree: self, id }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Every node in document (pre-)order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (0..self.nodes.len() as u32).map(move |i| NodeRef {
            tree: self,
            id: NodeId(i),
        })
    }

    /// Deepest node whose span contains `offset`.
    pub fn node_at_offset(&self, offset: usize) -> Option<NodeRef<'_>> {
        let mut current = self.root();
        if !current.span().contains(&offset) {
            return None;
        }
        'descend: loop {
            for child in current.children() {
                if child.span().contains(&offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    #[inline]
    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

impl fmt::Debug for RegexTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dump(node: NodeRef<'_>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match node.kind() {
                NodeKind::Token(k) => writeln!(f, "{:indent$}{:?} {:?}", "", k, node.text(), indent = depth * 2)?,
                k => writeln!(f, "{:indent$}{:?}@{:?}", "", k, node.span(), indent = depth * 2)?,
            }
            for child in node.children() {
                dump(child, depth + 1, f)?;
            }
            Ok(())
        }
        dump(self.root(), 0, f)
    }
}

// === Node handle ===

/// A borrowed handle to one node of a [`RegexTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t RegexTree,
    id: NodeId,
}

impl<'t> PartialEq for NodeRef<'t> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<'t> Eq for NodeRef<'t> {}

impl<'t> fmt::Debug for NodeRef<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{} {:?}", self.kind(), self.id.index(), self.text())
    }
}

impl<'t> NodeRef<'t> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'t RegexTree {
        self.tree
    }

    #[inline]
    pub fn kind(self) -> NodeKind {
        self.tree.data(self.id).kind
    }

    pub fn token_kind(self) -> Option<TokenKind> {
        match self.kind() {
            NodeKind::Token(k) => Some(k),
            _ => None,
        }
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self.kind().is_token()
    }

    pub fn span(self) -> Range<usize> {
        self.tree.data(self.id).span.clone()
    }

    /// Raw source spelling.
    pub fn text(self) -> &'t str {
        &self.tree.source[self.span()]
    }

    /// Text after the host-language string pre-pass. Identical to
    /// [`text`](Self::text) unless the builder supplied unescaped tokens.
    pub fn unescaped_text(self) -> Cow<'t, str> {
        let data = self.tree.data(self.id);
        if let Some(s) = &data.unescaped {
            return Cow::Borrowed(&**s);
        }
        if data.kind.is_token() {
            return Cow::Borrowed(self.text());
        }
        let overridden = self
            .subtree()
            .any(|n| n.is_token() && n.tree.data(n.id).unescaped.is_some());
        if !overridden {
            return Cow::Borrowed(self.text());
        }
        let mut out = String::with_capacity(data.span.len());
        for n in self.subtree().filter(|n| n.is_token()) {
            out.push_str(&n.unescaped_text());
        }
        Cow::Owned(out)
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.tree
            .data(self.id)
            .parent
            .map(|id| NodeRef { tree: self.tree, id })
    }

    /// Direct children, tokens included, in source order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// Direct composite (non-token) children.
    pub fn child_nodes(self) -> impl DoubleEndedIterator<Item = NodeRef<'t>> + 't {
        self.children().filter(|n| !n.is_token())
    }

    /// Direct token children.
    pub fn tokens(self) -> impl DoubleEndedIterator<Item = NodeRef<'t>> + 't {
        self.children().filter(|n| n.is_token())
    }

    pub fn first_child(self) -> Option<NodeRef<'t>> {
        self.children().next()
    }

    pub fn last_child(self) -> Option<NodeRef<'t>> {
        self.children().next_back()
    }

    /// First direct token child of the given kind.
    pub fn child_token(self, kind: TokenKind) -> Option<NodeRef<'t>> {
        self.children().find(|n| n.kind() == NodeKind::Token(kind))
    }

    pub fn has_token(self, kind: TokenKind) -> bool {
        self.child_token(kind).is_some()
    }

    /// First direct composite child of the given kind.
    pub fn child_of_kind(self, kind: NodeKind) -> Option<NodeRef<'t>> {
        self.children().find(|n| n.kind() == kind)
    }

    fn sibling_at(self, delta: isize) -> Option<NodeRef<'t>> {
        let parent = self.parent()?;
        let siblings = &self.tree.data(parent.id).children;
        let pos = siblings.iter().position(|&id| id == self.id)?;
        let target = pos.checked_add_signed(delta)?;
        siblings
            .get(target)
            .map(|&id| NodeRef { tree: self.tree, id })
    }

    pub fn prev_sibling(self) -> Option<NodeRef<'t>> {
        self.sibling_at(-1)
    }

    pub fn next_sibling(self) -> Option<NodeRef<'t>> {
        self.sibling_at(1)
    }

    /// This node and everything below it, in document order.
    pub fn subtree(self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        let end = tree.data(self.id).end;
        (self.id.0..end).map(move |i| NodeRef { tree, id: NodeId(i) })
    }

    /// Everything below this node, in document order.
    pub fn descendants(self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        self.subtree().skip(1)
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    /// Whether `other` lies inside this node's subtree (self included).
    pub fn contains(self, other: NodeRef<'t>) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && other.id.0 >= self.id.0
            && other.id.0 < self.tree.data(self.id).end
    }

    /// The outermost `Pattern` enclosing this node. For any well-formed
    /// tree this is the root.
    pub fn containing_pattern(self) -> NodeRef<'t> {
        std::iter::once(self)
            .chain(self.ancestors())
            .filter(|n| n.kind() == NodeKind::Pattern)
            .last()
            .unwrap_or_else(|| self.tree.root())
    }
}

// === Builder ===

/// Event-driven builder used by the external parser.
///
/// Errors are sticky: the first one is kept and returned by
/// [`finish`](Self::finish); later calls are ignored.
///
/// ```
/// use regsema::regtree::{NodeKind, RegexTree, TokenKind};
///
/// let mut b = RegexTree::builder();
/// b.start_node(NodeKind::Pattern)
///     .start_node(NodeKind::Branch)
///     .start_node(NodeKind::Char)
///     .token(TokenKind::Character, "a")
///     .finish_node()
///     .finish_node()
///     .finish_node();
/// let tree = b.finish().unwrap();
/// assert_eq!(tree.source(), "a");
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    source: String,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    error: Option<TreeError>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, err: TreeError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn push(&mut self, kind: NodeKind, unescaped: Option<Box<str>>, raw_len: usize) -> Option<NodeId> {
        let parent = self.stack.last().copied();
        if parent.is_none() {
            if kind.is_token() {
                self.fail(TreeError::TokenAtRoot);
                return None;
            }
            if !self.nodes.is_empty() {
                self.fail(TreeError::MultipleRoots);
                return None;
            }
        }
        let id = match NodeId::from_index(self.nodes.len()) {
            Some(id) => id,
            None => {
                self.fail(TreeError::TooManyNodes);
                return None;
            }
        };
        let start = self.source.len();
        self.nodes.push(NodeData {
            kind,
            parent,
            children: SmallVec::new(),
            end: id.0 + 1,
            span: start..start + raw_len,
            unescaped,
        });
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        Some(id)
    }

    /// Open a composite node; tokens and nodes pushed until the matching
    /// [`finish_node`](Self::finish_node) become its children.
    pub fn start_node(&mut self, kind: NodeKind) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if kind.is_token() {
            self.fail(TreeError::TokenKindAsNode);
            return self;
        }
        if let Some(id) = self.push(kind, None, 0) {
            self.stack.push(id);
        }
        self
    }

    /// Append a leaf token with its raw spelling.
    pub fn token(&mut self, kind: TokenKind, raw: &str) -> &mut Self {
        if self.error.is_none() && self.push(NodeKind::Token(kind), None, raw.len()).is_some() {
            self.source.push_str(raw);
        }
        self
    }

    /// Append a leaf token whose regex-level text differs from its raw
    /// spelling because it sits inside a host-language string literal.
    pub fn token_unescaped(&mut self, kind: TokenKind, raw: &str, unescaped: &str) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let over = (raw != unescaped).then(|| Box::<str>::from(unescaped));
        if self.push(NodeKind::Token(kind), over, raw.len()).is_some() {
            self.source.push_str(raw);
        }
        self
    }

    /// Close the most recently opened node.
    pub fn finish_node(&mut self) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        match self.stack.pop() {
            Some(id) => {
                // push keeps the node count within MAX_NODES
                let end = self.nodes.len() as u32;
                let source_end = self.source.len();
                let data = &mut self.nodes[id.index()];
                data.end = end;
                data.span.end = source_end;
            }
            None => self.fail(TreeError::UnbalancedFinish),
        }
        self
    }

    pub fn finish(self) -> Result<RegexTree, TreeError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(TreeError::UnclosedNodes(self.stack.len()));
        }
        match self.nodes.first() {
            None => Err(TreeError::EmptyTree),
            Some(root) if root.kind != NodeKind::Pattern => Err(TreeError::RootNotPattern),
            Some(_) => Ok(RegexTree {
                source: self.source,
                nodes: self.nodes,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a(b)
    fn sample() -> RegexTree {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::Char)
            .token(TokenKind::Character, "a")
            .finish_node()
            .start_node(NodeKind::Group)
            .token(TokenKind::GroupBegin, "(")
            .start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::Char)
            .token(TokenKind::Character, "b")
            .finish_node()
            .finish_node()
            .finish_node()
            .token(TokenKind::GroupEnd, ")")
            .finish_node()
            .finish_node()
            .finish_node();
        b.finish().unwrap()
    }

    #[test]
    fn spans_cover_token_text() {
        let tree = sample();
        assert_eq!(tree.source(), "a(b)");
        let group = tree.iter().find(|n| n.kind() == NodeKind::Group).unwrap();
        assert_eq!(group.text(), "(b)");
        assert_eq!(group.span(), 1..4);
    }

    #[test]
    fn subtree_is_contiguous_preorder() {
        let tree = sample();
        let group = tree.iter().find(|n| n.kind() == NodeKind::Group).unwrap();
        let kinds: Vec<_> = group.subtree().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Group,
                NodeKind::Token(TokenKind::GroupBegin),
                NodeKind::Pattern,
                NodeKind::Branch,
                NodeKind::Char,
                NodeKind::Token(TokenKind::Character),
                NodeKind::Token(TokenKind::GroupEnd),
            ]
        );
    }

    #[test]
    fn siblings_and_parents() {
        let tree = sample();
        let begin = tree
            .iter()
            .find(|n| n.token_kind() == Some(TokenKind::GroupBegin))
            .unwrap();
        assert_eq!(begin.parent().unwrap().kind(), NodeKind::Group);
        assert_eq!(begin.next_sibling().unwrap().kind(), NodeKind::Pattern);
        assert!(begin.prev_sibling().is_none());
        let inner_b = tree.iter().filter(|n| n.kind() == NodeKind::Char).nth(1).unwrap();
        assert_eq!(inner_b.containing_pattern(), tree.root());
        assert_eq!(inner_b.ancestors().count(), 5);
    }

    #[test]
    fn node_at_offset_finds_deepest() {
        let tree = sample();
        let n = tree.node_at_offset(2).unwrap();
        assert_eq!(n.token_kind(), Some(TokenKind::Character));
        assert_eq!(n.text(), "b");
        assert!(tree.node_at_offset(4).is_none());
    }

    #[test]
    fn unescaped_text_overrides_raw() {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::Char)
            .token_unescaped(TokenKind::EscCharacter, "\\\\n", "\\n")
            .finish_node()
            .finish_node()
            .finish_node();
        let tree = b.finish().unwrap();
        let ch = tree.iter().find(|n| n.kind() == NodeKind::Char).unwrap();
        assert_eq!(ch.text(), "\\\\n");
        assert_eq!(ch.unescaped_text(), "\\n");
        assert_eq!(tree.root().unescaped_text(), "\\n");
    }

    #[test]
    fn builder_errors() {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern);
        assert_eq!(b.finish().unwrap_err(), TreeError::UnclosedNodes(1));

        let mut b = RegexTree::builder();
        b.finish_node();
        assert_eq!(b.finish().unwrap_err(), TreeError::UnbalancedFinish);

        let mut b = RegexTree::builder();
        b.token(TokenKind::Character, "a");
        assert_eq!(b.finish().unwrap_err(), TreeError::TokenAtRoot);

        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Branch).finish_node();
        assert_eq!(b.finish().unwrap_err(), TreeError::RootNotPattern);

        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .finish_node()
            .start_node(NodeKind::Pattern);
        assert_eq!(b.finish().unwrap_err(), TreeError::MultipleRoots);

        assert_eq!(RegexTree::builder().finish().unwrap_err(), TreeError::EmptyTree);
    }

    #[test]
    fn node_id_range() {
        assert_eq!(NodeId::from_index(0).map(NodeId::index), Some(0));
        let last = (MAX_NODES - 1) as usize;
        assert_eq!(NodeId::from_index(last).map(NodeId::index), Some(last));
        assert!(NodeId::from_index(MAX_NODES as usize).is_none());
        assert!(NodeId::from_index(usize::MAX).is_none());
    }
}
