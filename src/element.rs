// element.rs - Typed views over tree nodes and single-dispatch visiting.
//
// Each composite `NodeKind` has a zero-cost wrapper around `NodeRef` with
// structural accessors. Semantic queries live next to the code that
// computes them: `Char::value` in escape.rs, `Quantifier::count` in
// quantifier.rs, the `kind()` classifiers in classify.rs, `resolve()` in
// grouptrav.rs.
//
// `Element` is the tagged union of all views. `Element::accept` routes to
// the matching `Visitor` method with an exhaustive match; every visitor
// method defaults to `visit_element`, so a visitor only overrides what it
// cares about.

use crate::error::{report_inconsistency, Inconsistency, InconsistencyKind};
use crate::regtree::{NodeKind, NodeRef, TokenKind};

macro_rules! typed_node {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name<'t>(NodeRef<'t>);

        impl<'t> $name<'t> {
            /// View `node` as this kind, or `None` if it is something else.
            pub fn cast(node: NodeRef<'t>) -> Option<Self> {
                (node.kind() == NodeKind::$kind).then_some($name(node))
            }

            #[inline]
            pub fn syntax(self) -> NodeRef<'t> {
                self.0
            }

            #[inline]
            pub fn text(self) -> &'t str {
                self.0.text()
            }
        }
    };
}

typed_node!(Pattern => Pattern);
typed_node!(Branch => Branch);
typed_node!(
    /// One literal or escaped character.
    Char => Char
);
typed_node!(CharRange => CharRange);
typed_node!(SimpleClass => SimpleClass);
typed_node!(Class => Class);
typed_node!(Union => Union);
typed_node!(Intersection => Intersection);
typed_node!(Property => Property);
typed_node!(PosixBracket => PosixBracket);
typed_node!(Group => Group);
typed_node!(Conditional => Conditional);
typed_node!(Backref => Backref);
typed_node!(NamedGroupRef => NamedGroupRef);
typed_node!(PyNamedGroupRef => PyNamedGroupRef);
typed_node!(Quantifier => Quantifier);
typed_node!(Boundary => Boundary);
typed_node!(Options => Options);
typed_node!(SetOptions => SetOptions);
typed_node!(Number => Number);

/// A leaf token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'t>(NodeRef<'t>);

impl<'t> Token<'t> {
    pub fn cast(node: NodeRef<'t>) -> Option<Self> {
        node.is_token().then_some(Token(node))
    }

    pub fn kind(self) -> TokenKind {
        match self.0.kind() {
            NodeKind::Token(k) => k,
            _ => unreachable!("Token wraps only token nodes"),
        }
    }

    #[inline]
    pub fn syntax(self) -> NodeRef<'t> {
        self.0
    }

    #[inline]
    pub fn text(self) -> &'t str {
        self.0.text()
    }
}

// === Tagged unions ===

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element<'t> {
    Pattern(Pattern<'t>),
    Branch(Branch<'t>),
    Char(Char<'t>),
    CharRange(CharRange<'t>),
    SimpleClass(SimpleClass<'t>),
    Class(Class<'t>),
    Union(Union<'t>),
    Intersection(Intersection<'t>),
    Property(Property<'t>),
    PosixBracket(PosixBracket<'t>),
    Group(Group<'t>),
    Conditional(Conditional<'t>),
    Backref(Backref<'t>),
    NamedGroupRef(NamedGroupRef<'t>),
    PyNamedGroupRef(PyNamedGroupRef<'t>),
    Quantifier(Quantifier<'t>),
    Boundary(Boundary<'t>),
    Options(Options<'t>),
    SetOptions(SetOptions<'t>),
    Number(Number<'t>),
    Token(Token<'t>),
}

impl<'t> From<NodeRef<'t>> for Element<'t> {
    fn from(node: NodeRef<'t>) -> Self {
        match node.kind() {
            NodeKind::Pattern => Element::Pattern(Pattern(node)),
            NodeKind::Branch => Element::Branch(Branch(node)),
            NodeKind::Char => Element::Char(Char(node)),
            NodeKind::CharRange => Element::CharRange(CharRange(node)),
            NodeKind::SimpleClass => Element::SimpleClass(SimpleClass(node)),
            NodeKind::Class => Element::Class(Class(node)),
            NodeKind::Union => Element::Union(Union(node)),
            NodeKind::Intersection => Element::Intersection(Intersection(node)),
            NodeKind::Property => Element::Property(Property(node)),
            NodeKind::PosixBracket => Element::PosixBracket(PosixBracket(node)),
            NodeKind::Group => Element::Group(Group(node)),
            NodeKind::Conditional => Element::Conditional(Conditional(node)),
            NodeKind::Backref => Element::Backref(Backref(node)),
            NodeKind::NamedGroupRef => Element::NamedGroupRef(NamedGroupRef(node)),
            NodeKind::PyNamedGroupRef => Element::PyNamedGroupRef(PyNamedGroupRef(node)),
            NodeKind::Quantifier => Element::Quantifier(Quantifier(node)),
            NodeKind::Boundary => Element::Boundary(Boundary(node)),
            NodeKind::Options => Element::Options(Options(node)),
            NodeKind::SetOptions => Element::SetOptions(SetOptions(node)),
            NodeKind::Number => Element::Number(Number(node)),
            NodeKind::Token(_) => Element::Token(Token(node)),
        }
    }
}

impl<'t> Element<'t> {
    pub fn syntax(self) -> NodeRef<'t> {
        match self {
            Element::Pattern(n) => n.syntax(),
            Element::Branch(n) => n.syntax(),
            Element::Char(n) => n.syntax(),
            Element::CharRange(n) => n.syntax(),
            Element::SimpleClass(n) => n.syntax(),
            Element::Class(n) => n.syntax(),
            Element::Union(n) => n.syntax(),
            Element::Intersection(n) => n.syntax(),
            Element::Property(n) => n.syntax(),
            Element::PosixBracket(n) => n.syntax(),
            Element::Group(n) => n.syntax(),
            Element::Conditional(n) => n.syntax(),
            Element::Backref(n) => n.syntax(),
            Element::NamedGroupRef(n) => n.syntax(),
            Element::PyNamedGroupRef(n) => n.syntax(),
            Element::Quantifier(n) => n.syntax(),
            Element::Boundary(n) => n.syntax(),
            Element::Options(n) => n.syntax(),
            Element::SetOptions(n) => n.syntax(),
            Element::Number(n) => n.syntax(),
            Element::Token(n) => n.syntax(),
        }
    }

    /// Route to the visitor method for this element's concrete kind.
    pub fn accept<V: Visitor<'t> + ?Sized>(self, visitor: &mut V) {
        match self {
            Element::Pattern(n) => visitor.visit_pattern(n),
            Element::Branch(n) => visitor.visit_branch(n),
            Element::Char(n) => visitor.visit_char(n),
            Element::CharRange(n) => visitor.visit_char_range(n),
            Element::SimpleClass(n) => visitor.visit_simple_class(n),
            Element::Class(n) => visitor.visit_class(n),
            Element::Union(n) => visitor.visit_union(n),
            Element::Intersection(n) => visitor.visit_intersection(n),
            Element::Property(n) => visitor.visit_property(n),
            Element::PosixBracket(n) => visitor.visit_posix_bracket(n),
            Element::Group(n) => visitor.visit_group(n),
            Element::Conditional(n) => visitor.visit_conditional(n),
            Element::Backref(n) => visitor.visit_backref(n),
            Element::NamedGroupRef(n) => visitor.visit_named_group_ref(n),
            Element::PyNamedGroupRef(n) => visitor.visit_py_named_group_ref(n),
            Element::Quantifier(n) => visitor.visit_quantifier(n),
            Element::Boundary(n) => visitor.visit_boundary(n),
            Element::Options(n) => visitor.visit_options(n),
            Element::SetOptions(n) => visitor.visit_set_options(n),
            Element::Number(n) => visitor.visit_number(n),
            Element::Token(n) => visitor.visit_token(n),
        }
    }
}

/// Element of a `[...]` class body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassElement<'t> {
    Char(Char<'t>),
    CharRange(CharRange<'t>),
    Class(Class<'t>),
    Union(Union<'t>),
    Intersection(Intersection<'t>),
    SimpleClass(SimpleClass<'t>),
    Property(Property<'t>),
    PosixBracket(PosixBracket<'t>),
}

impl<'t> ClassElement<'t> {
    pub fn cast(node: NodeRef<'t>) -> Option<Self> {
        Some(match Element::from(node) {
            Element::Char(n) => ClassElement::Char(n),
            Element::CharRange(n) => ClassElement::CharRange(n),
            Element::Class(n) => ClassElement::Class(n),
            Element::Union(n) => ClassElement::Union(n),
            Element::Intersection(n) => ClassElement::Intersection(n),
            Element::SimpleClass(n) => ClassElement::SimpleClass(n),
            Element::Property(n) => ClassElement::Property(n),
            Element::PosixBracket(n) => ClassElement::PosixBracket(n),
            _ => return None,
        })
    }

    pub fn syntax(self) -> NodeRef<'t> {
        match self {
            ClassElement::Char(n) => n.syntax(),
            ClassElement::CharRange(n) => n.syntax(),
            ClassElement::Class(n) => n.syntax(),
            ClassElement::Union(n) => n.syntax(),
            ClassElement::Intersection(n) => n.syntax(),
            ClassElement::SimpleClass(n) => n.syntax(),
            ClassElement::Property(n) => n.syntax(),
            ClassElement::PosixBracket(n) => n.syntax(),
        }
    }
}

// === Visitor ===

/// Per-kind callbacks. Unimplemented methods fall through to
/// [`visit_element`](Visitor::visit_element), which does nothing.
pub trait Visitor<'t> {
    fn visit_element(&mut self, _node: NodeRef<'t>) {}

    fn visit_pattern(&mut self, n: Pattern<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_branch(&mut self, n: Branch<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_char(&mut self, n: Char<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_char_range(&mut self, n: CharRange<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_simple_class(&mut self, n: SimpleClass<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_class(&mut self, n: Class<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_union(&mut self, n: Union<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_intersection(&mut self, n: Intersection<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_property(&mut self, n: Property<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_posix_bracket(&mut self, n: PosixBracket<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_group(&mut self, n: Group<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_conditional(&mut self, n: Conditional<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_backref(&mut self, n: Backref<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_named_group_ref(&mut self, n: NamedGroupRef<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_py_named_group_ref(&mut self, n: PyNamedGroupRef<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_quantifier(&mut self, n: Quantifier<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_boundary(&mut self, n: Boundary<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_options(&mut self, n: Options<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_set_options(&mut self, n: SetOptions<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_number(&mut self, n: Number<'t>) {
        self.visit_element(n.syntax())
    }
    fn visit_token(&mut self, n: Token<'t>) {
        self.visit_element(n.syntax())
    }
}

/// Dispatch every node of `root`'s subtree, `root` first, in document order.
pub fn walk<'t, V: Visitor<'t> + ?Sized>(root: NodeRef<'t>, visitor: &mut V) {
    for node in root.subtree() {
        Element::from(node).accept(visitor);
    }
}

// === Structural accessors ===

impl<'t> Pattern<'t> {
    pub fn branches(self) -> impl Iterator<Item = Branch<'t>> + 't {
        self.0.children().filter_map(Branch::cast)
    }
}

impl<'t> Branch<'t> {
    pub fn atoms(self) -> impl Iterator<Item = Element<'t>> + 't {
        self.0
            .children()
            .filter(|n| n.kind().is_atom())
            .map(Element::from)
    }
}

impl<'t> CharRange<'t> {
    pub fn from(self) -> Option<Char<'t>> {
        self.0.children().find_map(Char::cast)
    }

    /// Upper end, or `None` while the range is still being typed (`a-`).
    pub fn to(self) -> Option<Char<'t>> {
        self.0.children().filter_map(Char::cast).nth(1)
    }
}

impl<'t> Class<'t> {
    /// `[^...]`: a caret directly after the opening bracket.
    pub fn is_negated(self) -> bool {
        let mut tokens = self.0.children();
        matches!(tokens.next().and_then(|n| n.token_kind()), Some(TokenKind::ClassBegin))
            && matches!(tokens.next().and_then(|n| n.token_kind()), Some(TokenKind::Caret))
    }

    pub fn elements(self) -> impl Iterator<Item = ClassElement<'t>> + 't {
        self.0.children().filter_map(ClassElement::cast)
    }
}

impl<'t> Union<'t> {
    pub fn elements(self) -> impl Iterator<Item = ClassElement<'t>> + 't {
        self.0.children().filter_map(ClassElement::cast)
    }
}

impl<'t> Intersection<'t> {
    /// Operands on either side of each `&&`.
    pub fn operands(self) -> impl Iterator<Item = ClassElement<'t>> + 't {
        self.0.children().filter_map(ClassElement::cast)
    }
}

impl<'t> Group<'t> {
    /// The wrapped pattern.
    pub fn pattern(self) -> Option<Pattern<'t>> {
        self.0.children().find_map(Pattern::cast)
    }

    /// Name token text, whatever the group kind.
    pub fn name(self) -> Option<&'t str> {
        self.0.child_token(TokenKind::Name).map(|n| n.text())
    }

    /// The option letters of a `(?i:...)` group.
    pub fn options(self) -> Option<Options<'t>> {
        self.0.children().find_map(Options::cast)
    }
}

impl<'t> Conditional<'t> {
    /// The condition: a `Backref`, `NamedGroupRef` or lookaround `Group`.
    pub fn condition(self) -> Option<Element<'t>> {
        let node = self
            .0
            .child_nodes()
            .find(|n| n.kind() != NodeKind::Pattern)?;
        match Element::from(node) {
            e @ (Element::Backref(_) | Element::NamedGroupRef(_) | Element::Group(_)) => Some(e),
            _ => {
                report_inconsistency(
                    Inconsistency::new(
                        InconsistencyKind::WrongNodeKind,
                        format!("conditional on {:?}", node.text()),
                    )
                    .at(node.id()),
                );
                None
            }
        }
    }

    pub fn pattern(self) -> Option<Pattern<'t>> {
        self.0.children().find_map(Pattern::cast)
    }
}

impl<'t> NamedGroupRef<'t> {
    pub fn group_name(self) -> Option<&'t str> {
        self.0.child_token(TokenKind::Name).map(|n| n.text())
    }
}

impl<'t> PyNamedGroupRef<'t> {
    pub fn group_name(self) -> Option<&'t str> {
        self.0.child_token(TokenKind::Name).map(|n| n.text())
    }
}

impl<'t> SetOptions<'t> {
    pub fn options(self) -> Option<Options<'t>> {
        self.0.children().find_map(Options::cast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regtree::{RegexTree, TokenKind};

    // [^a-z\d]
    fn class_tree() -> RegexTree {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::Class)
            .token(TokenKind::ClassBegin, "[")
            .token(TokenKind::Caret, "^")
            .start_node(NodeKind::CharRange)
            .start_node(NodeKind::Char)
            .token(TokenKind::Character, "a")
            .finish_node()
            .token(TokenKind::Minus, "-")
            .start_node(NodeKind::Char)
            .token(TokenKind::Character, "z")
            .finish_node()
            .finish_node()
            .start_node(NodeKind::SimpleClass)
            .token(TokenKind::CharClass, "\\d")
            .finish_node()
            .token(TokenKind::ClassEnd, "]")
            .finish_node()
            .finish_node()
            .finish_node();
        b.finish().unwrap()
    }

    #[derive(Default)]
    struct Counter {
        chars: usize,
        generic: usize,
    }

    impl<'t> Visitor<'t> for Counter {
        fn visit_element(&mut self, _node: NodeRef<'t>) {
            self.generic += 1;
        }
        fn visit_char(&mut self, _n: Char<'t>) {
            self.chars += 1;
        }
    }

    #[test]
    fn visitor_dispatches_by_kind() {
        let tree = class_tree();
        let mut counter = Counter::default();
        walk(tree.root(), &mut counter);
        assert_eq!(counter.chars, 2);
        assert_eq!(counter.generic, tree.len() - 2);
    }

    #[test]
    fn class_elements_and_negation() {
        let tree = class_tree();
        let class = tree.iter().find_map(Class::cast).unwrap();
        assert!(class.is_negated());
        let elements: Vec<_> = class.elements().collect();
        assert_eq!(elements.len(), 2);
        match elements[0] {
            ClassElement::CharRange(r) => {
                assert_eq!(r.from().unwrap().text(), "a");
                assert_eq!(r.to().unwrap().text(), "z");
            }
            other => panic!("expected range, got {:?}", other),
        }
        assert!(matches!(elements[1], ClassElement::SimpleClass(_)));
    }

    #[test]
    fn open_range_has_no_upper_end() {
        let mut b = RegexTree::builder();
        b.start_node(NodeKind::Pattern)
            .start_node(NodeKind::Branch)
            .start_node(NodeKind::Class)
            .token(TokenKind::ClassBegin, "[")
            .start_node(NodeKind::CharRange)
            .start_node(NodeKind::Char)
            .token(TokenKind::Character, "a")
            .finish_node()
            .token(TokenKind::Minus, "-")
            .finish_node()
            .finish_node()
            .finish_node()
            .finish_node();
        let tree = b.finish().unwrap();
        let range = tree.iter().find_map(CharRange::cast).unwrap();
        assert!(range.from().is_some());
        assert!(range.to().is_none());
    }

    #[test]
    fn branch_atoms_skip_tokens() {
        let tree = class_tree();
        let branch = tree.iter().find_map(Branch::cast).unwrap();
        let atoms: Vec<_> = branch.atoms().collect();
        assert_eq!(atoms.len(), 1);
        assert!(matches!(atoms[0], Element::Class(_)));
    }
}
