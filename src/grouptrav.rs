// grouptrav.rs - Group enumeration and reference resolution.
//
// Every query walks the whole containing pattern once, left to right and
// depth first, collecting Group nodes in the order their opening token
// appears. Capture ordinals are positions in that walk restricted to
// capturing kinds, 1-based. No index is cached between queries.
//
// Name lookup has two scopes. `\k<name>` and the other NamedGroupRef forms
// accept any group carrying the name; the legacy `(?P=name)` node only
// considers capturing groups. Duplicate names resolve to the first in
// document order.
//
// Branch-reset groups `(?|...)` do not renumber their alternatives here:
// ordinals stay strictly document-ordered.

use smallvec::SmallVec;

use crate::element::{walk, Backref, Group, NamedGroupRef, Number, Pattern, PyNamedGroupRef, Visitor};
use crate::quantifier::scan_number;
use crate::regtree::{NodeRef, TokenKind};

pub type GroupList<'t> = SmallVec<[Group<'t>; 8]>;

struct GroupCollector<'t> {
    capturing_only: bool,
    groups: GroupList<'t>,
}

impl<'t> Visitor<'t> for GroupCollector<'t> {
    fn visit_group(&mut self, group: Group<'t>) {
        if !self.capturing_only || group.is_capturing() {
            self.groups.push(group);
        }
    }
}

fn collect<'t>(root: Pattern<'t>, capturing_only: bool) -> GroupList<'t> {
    let mut collector = GroupCollector {
        capturing_only,
        groups: SmallVec::new(),
    };
    walk(root.syntax(), &mut collector);
    collector.groups
}

/// Every group of `root`, in document order.
pub fn all_groups(root: Pattern<'_>) -> GroupList<'_> {
    collect(root, false)
}

/// Capturing groups of `root`; element `i` has ordinal `i + 1`.
pub fn capturing_groups(root: Pattern<'_>) -> GroupList<'_> {
    collect(root, true)
}

pub fn capture_count(root: Pattern<'_>) -> usize {
    capturing_groups(root).len()
}

/// 1-based ordinal of `group`, or `None` if it does not capture.
pub fn group_number<'t>(root: Pattern<'t>, group: Group<'t>) -> Option<usize> {
    capturing_groups(root)
        .iter()
        .position(|&g| g == group)
        .map(|i| i + 1)
}

fn nth_capturing(root: Pattern<'_>, index: i32) -> Option<Group<'_>> {
    if index < 1 {
        return None;
    }
    capturing_groups(root).get(index as usize - 1).copied()
}

/// Capturing group `index` (1-based), for `\1`.
pub fn resolve_backref(root: Pattern<'_>, index: i32) -> Option<Group<'_>> {
    nth_capturing(root, index)
}

/// Capturing group `number` (1-based), for `\g{1}`, `\g<1>` and friends.
pub fn resolve_numbered_group_ref(root: Pattern<'_>, number: i32) -> Option<Group<'_>> {
    nth_capturing(root, number)
}

/// First group of any kind named `name`.
pub fn resolve_named_group<'t>(root: Pattern<'t>, name: &str) -> Option<Group<'t>> {
    all_groups(root)
        .into_iter()
        .find(|g| g.name() == Some(name))
}

/// First capturing group named `name`.
pub fn resolve_named_capturing_group<'t>(root: Pattern<'t>, name: &str) -> Option<Group<'t>> {
    capturing_groups(root)
        .into_iter()
        .find(|g| g.name() == Some(name))
}

/// All groups named `name`, in document order.
pub fn groups_named<'t>(root: Pattern<'t>, name: &str) -> GroupList<'t> {
    all_groups(root)
        .into_iter()
        .filter(|g| g.name() == Some(name))
        .collect()
}

/// Relative reference from `from`: `-n` is the n-th capturing group opened
/// before it, `+n` the n-th opened after it.
pub fn resolve_relative<'t>(root: Pattern<'t>, from: NodeRef<'t>, offset: i32) -> Option<Group<'t>> {
    let groups = capturing_groups(root);
    let at = from.id();
    if offset < 0 {
        let back = offset.unsigned_abs() as usize;
        groups
            .iter()
            .rev()
            .filter(|g| g.syntax().id() < at)
            .nth(back - 1)
            .copied()
    } else if offset > 0 {
        groups
            .iter()
            .filter(|g| g.syntax().id() > at)
            .nth(offset as usize - 1)
            .copied()
    } else {
        None
    }
}

fn pattern_of(node: NodeRef<'_>) -> Option<Pattern<'_>> {
    Pattern::cast(node.containing_pattern())
}

// === Node-level queries ===

impl<'t> Group<'t> {
    /// 1-based capture ordinal within the whole pattern.
    pub fn capture_number(self) -> Option<usize> {
        if !self.is_capturing() {
            return None;
        }
        group_number(pattern_of(self.syntax())?, self)
    }
}

impl<'t> Backref<'t> {
    /// The referenced ordinal: `\12` is 12.
    pub fn index(self) -> Option<i32> {
        if let Some(n) = self.syntax().children().find_map(Number::cast) {
            return n.value();
        }
        let token = self.syntax().child_token(TokenKind::Backref)?;
        scan_number(token.text().strip_prefix('\\')?)
    }

    pub fn resolve(self) -> Option<Group<'t>> {
        resolve_backref(pattern_of(self.syntax())?, self.index()?)
    }
}

impl<'t> NamedGroupRef<'t> {
    /// Numeric target of `\g{-1}`, `\g<2>`, `\g1`; signed when relative.
    pub fn number(self) -> Option<i32> {
        let n = self.syntax().children().find_map(Number::cast)?.value()?;
        if self.syntax().has_token(TokenKind::Minus) {
            Some(-n)
        } else {
            Some(n)
        }
    }

    /// Carries an explicit `-` or `+` sign.
    pub fn is_relative(self) -> bool {
        self.syntax().has_token(TokenKind::Minus) || self.syntax().has_token(TokenKind::Plus)
    }

    pub fn resolve(self) -> Option<Group<'t>> {
        let root = pattern_of(self.syntax())?;
        if let Some(name) = self.group_name() {
            return resolve_named_group(root, name);
        }
        let number = self.number()?;
        if self.is_relative() {
            return resolve_relative(root, self.syntax(), number);
        }
        resolve_numbered_group_ref(root, number)
    }
}

impl<'t> PyNamedGroupRef<'t> {
    pub fn resolve(self) -> Option<Group<'t>> {
        resolve_named_capturing_group(pattern_of(self.syntax())?, self.group_name()?)
    }
}
