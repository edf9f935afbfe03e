// common/mod.rs - Tree-shape helpers shared by the integration tests.
//
// Stands in for the external parser: each helper produces the node shape the
// parser emits for one construct, and `build` replays it into a TreeBuilder.

#![allow(dead_code)]

use regsema::regtree::{NodeKind, RegexTree, TokenKind, TreeBuilder};

pub enum Shape {
    Node(NodeKind, Vec<Shape>),
    Tok(TokenKind, String),
    HostTok(TokenKind, String, String),
}

fn replay(b: &mut TreeBuilder, shape: &Shape) {
    match shape {
        Shape::Node(kind, children) => {
            b.start_node(*kind);
            for child in children {
                replay(b, child);
            }
            b.finish_node();
        }
        Shape::Tok(kind, text) => {
            b.token(*kind, text);
        }
        Shape::HostTok(kind, raw, unescaped) => {
            b.token_unescaped(*kind, raw, unescaped);
        }
    }
}

pub fn build(root: Shape) -> RegexTree {
    let mut b = RegexTree::builder();
    replay(&mut b, &root);
    b.finish().expect("well-formed test tree")
}

pub fn node(kind: NodeKind, children: Vec<Shape>) -> Shape {
    Shape::Node(kind, children)
}

pub fn tok(kind: TokenKind, text: &str) -> Shape {
    Shape::Tok(kind, text.to_string())
}

/// Alternation; branches are separated by `|` tokens.
pub fn alt(branches: Vec<Vec<Shape>>) -> Shape {
    let mut children = Vec::new();
    for (i, atoms) in branches.into_iter().enumerate() {
        if i > 0 {
            children.push(tok(TokenKind::Union, "|"));
        }
        children.push(node(NodeKind::Branch, atoms));
    }
    node(NodeKind::Pattern, children)
}

/// Single-branch pattern.
pub fn seq(atoms: Vec<Shape>) -> Shape {
    alt(vec![atoms])
}

pub fn ch(text: &str) -> Shape {
    let kind = if text.starts_with('\\') && text.len() > 1 {
        TokenKind::EscCharacter
    } else {
        TokenKind::Character
    };
    node(NodeKind::Char, vec![tok(kind, text)])
}

/// A char token written inside a host string literal: `raw` is what the
/// source file holds, `unescaped` what the regex engine sees.
pub fn host_ch(raw: &str, unescaped: &str) -> Shape {
    node(
        NodeKind::Char,
        vec![Shape::HostTok(TokenKind::EscCharacter, raw.to_string(), unescaped.to_string())],
    )
}

pub fn lit(text: &str) -> Vec<Shape> {
    text.chars().map(|c| ch(&c.to_string())).collect()
}

pub fn group(open_kind: TokenKind, open: &str, body: Shape) -> Shape {
    node(
        NodeKind::Group,
        vec![tok(open_kind, open), body, tok(TokenKind::GroupEnd, ")")],
    )
}

pub fn capture(body: Shape) -> Shape {
    group(TokenKind::GroupBegin, "(", body)
}

pub fn non_capture(body: Shape) -> Shape {
    group(TokenKind::NonCaptGroup, "(?:", body)
}

pub fn named(name: &str, body: Shape) -> Shape {
    node(
        NodeKind::Group,
        vec![
            tok(TokenKind::RubyNamedGroup, "(?<"),
            tok(TokenKind::Name, name),
            tok(TokenKind::Gt, ">"),
            body,
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}

pub fn py_named(name: &str, body: Shape) -> Shape {
    node(
        NodeKind::Group,
        vec![
            tok(TokenKind::PythonNamedGroup, "(?P<"),
            tok(TokenKind::Name, name),
            tok(TokenKind::Gt, ">"),
            body,
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}

pub fn quoted_named(name: &str, body: Shape) -> Shape {
    node(
        NodeKind::Group,
        vec![
            tok(TokenKind::RubyQuotedNamedGroup, "(?'"),
            tok(TokenKind::Name, name),
            tok(TokenKind::Quote, "'"),
            body,
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}

pub fn backref(index: u32) -> Shape {
    node(
        NodeKind::Backref,
        vec![tok(TokenKind::Backref, &format!("\\{}", index))],
    )
}

pub fn number(digits: &str) -> Shape {
    node(NodeKind::Number, vec![tok(TokenKind::Number, digits)])
}

/// `\k<name>`
pub fn k_ref(name: &str) -> Shape {
    node(
        NodeKind::NamedGroupRef,
        vec![
            tok(TokenKind::RubyNamedGroupRef, "\\k<"),
            tok(TokenKind::Name, name),
            tok(TokenKind::Gt, ">"),
        ],
    )
}

/// `(?P=name)` as a NamedGroupRef node.
pub fn py_named_ref(name: &str) -> Shape {
    node(
        NodeKind::NamedGroupRef,
        vec![
            tok(TokenKind::PythonNamedGroupRef, "(?P="),
            tok(TokenKind::Name, name),
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}

/// Legacy `(?P=name)` node.
pub fn py_ref(name: &str) -> Shape {
    node(
        NodeKind::PyNamedGroupRef,
        vec![
            tok(TokenKind::PythonNamedGroupRef, "(?P="),
            tok(TokenKind::Name, name),
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}

/// `\g{n}`, `\g{-n}`, `\g{+n}`
pub fn g_ref(sign: Option<char>, digits: &str) -> Shape {
    let mut children = vec![tok(TokenKind::PcreNumberedGroupRef, "\\g{")];
    match sign {
        Some('-') => children.push(tok(TokenKind::Minus, "-")),
        Some('+') => children.push(tok(TokenKind::Plus, "+")),
        _ => {}
    }
    children.push(number(digits));
    children.push(tok(TokenKind::RBrace, "}"));
    node(NodeKind::NamedGroupRef, children)
}

/// `\g<name>`
pub fn g_call(name: &str) -> Shape {
    node(
        NodeKind::NamedGroupRef,
        vec![
            tok(TokenKind::RubyNamedGroupCall, "\\g<"),
            tok(TokenKind::Name, name),
            tok(TokenKind::Gt, ">"),
        ],
    )
}

pub fn quant(atom: Shape, markers: Vec<Shape>) -> Shape {
    let mut children = vec![atom];
    children.extend(markers);
    node(NodeKind::Quantifier, children)
}

pub fn star() -> Shape {
    tok(TokenKind::Star, "*")
}

pub fn plus() -> Shape {
    tok(TokenKind::Plus, "+")
}

pub fn quest() -> Shape {
    tok(TokenKind::Quest, "?")
}

/// `{min,max}` tokens; `comma` controls whether the `,` is present.
pub fn interval(min: Option<&str>, comma: bool, max: Option<&str>) -> Vec<Shape> {
    let mut out = vec![tok(TokenKind::LBrace, "{")];
    if let Some(min) = min {
        out.push(number(min));
    }
    if comma {
        out.push(tok(TokenKind::Comma, ","));
    }
    if let Some(max) = max {
        out.push(number(max));
    }
    out.push(tok(TokenKind::RBrace, "}"));
    out
}

pub fn simple_class(text: &str) -> Shape {
    let kind = if text == "." {
        TokenKind::Dot
    } else {
        TokenKind::CharClass
    };
    node(NodeKind::SimpleClass, vec![tok(kind, text)])
}

pub fn boundary(text: &str) -> Shape {
    let kind = match text {
        "^" => TokenKind::Caret,
        "$" => TokenKind::Dollar,
        _ => TokenKind::Boundary,
    };
    node(NodeKind::Boundary, vec![tok(kind, text)])
}

/// `\p{name}` / `\P{^name}`
pub fn property(upper: bool, caret: bool, name: &str) -> Shape {
    let mut children = vec![
        tok(TokenKind::Property, if upper { "\\P" } else { "\\p" }),
        tok(TokenKind::LBrace, "{"),
    ];
    if caret {
        children.push(tok(TokenKind::Caret, "^"));
    }
    children.push(tok(TokenKind::Name, name));
    children.push(tok(TokenKind::RBrace, "}"));
    node(NodeKind::Property, children)
}

/// `\pL`
pub fn property_short(letter: &str) -> Shape {
    node(
        NodeKind::Property,
        vec![
            tok(TokenKind::Property, "\\p"),
            tok(TokenKind::CategoryShortHand, letter),
        ],
    )
}

pub fn class(negated: bool, elements: Vec<Shape>) -> Shape {
    let mut children = vec![tok(TokenKind::ClassBegin, "[")];
    if negated {
        children.push(tok(TokenKind::Caret, "^"));
    }
    children.extend(elements);
    children.push(tok(TokenKind::ClassEnd, "]"));
    node(NodeKind::Class, children)
}

pub fn range(from: &str, to: Option<&str>) -> Shape {
    let mut children = vec![ch(from), tok(TokenKind::Minus, "-")];
    if let Some(to) = to {
        children.push(ch(to));
    }
    node(NodeKind::CharRange, children)
}

pub fn posix(negated: bool, name: &str) -> Shape {
    let mut children = vec![tok(TokenKind::BracketExprBegin, "[:")];
    if negated {
        children.push(tok(TokenKind::Caret, "^"));
    }
    children.push(tok(TokenKind::BracketExprName, name));
    children.push(tok(TokenKind::BracketExprEnd, ":]"));
    node(NodeKind::PosixBracket, children)
}

/// `(?(n)yes|no)` with a numeric condition.
pub fn conditional(index: &str, body: Shape) -> Shape {
    node(
        NodeKind::Conditional,
        vec![
            tok(TokenKind::Conditional, "(?"),
            node(
                NodeKind::Backref,
                vec![
                    tok(TokenKind::GroupBegin, "("),
                    number(index),
                    tok(TokenKind::GroupEnd, ")"),
                ],
            ),
            body,
            tok(TokenKind::GroupEnd, ")"),
        ],
    )
}
