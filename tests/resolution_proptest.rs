//! Property-based tests for attribute resolution
//!
//! These pin the resolution rule down over generated shapes: the nearest
//! assignment along the ancestor chain always wins, mutation never leaks
//! sideways, and interning is invisible to lookup.

use proptest::prelude::*;
use seam::seam::attribute::{Attribute, AttributeSet};
use seam::seam::tree::{SegmentId, SegmentTree};
use seam::seam::value::Value;

/// Build a chain of `depth` segments: root at level 0, each next level a
/// child of the previous. Returns ids by level.
fn build_chain(depth: usize) -> (SegmentTree, Vec<SegmentId>) {
    let mut tree = SegmentTree::new("level");
    let mut levels = vec![tree.root_id()];
    for _ in 1..depth {
        let child = tree.add("level");
        let parent = *levels.last().expect("chain always has a root");
        tree.append_child(parent, child).expect("fresh segment attaches");
        levels.push(child);
    }
    (tree, levels)
}

fn attr_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,10}"
}

proptest! {
    /// Setting one attribute at one level splits the chain: levels above
    /// resolve nothing, the level itself and everything below resolve the
    /// value.
    #[test]
    fn prop_chain_resolves_below_the_assignment(
        depth in 1usize..10,
        set_level_raw in 0usize..10,
        name in attr_name(),
        value in 0i64..1000,
    ) {
        let set_level = set_level_raw % depth;
        let (mut tree, levels) = build_chain(depth);
        tree.set_attribute(levels[set_level], name.as_str(), value).unwrap();

        let attr = Attribute::of(name.as_str());
        for (level, &id) in levels.iter().enumerate() {
            let expected = if level >= set_level {
                Some(Value::Int(value))
            } else {
                None
            };
            prop_assert_eq!(tree.inherited(id, &attr).cloned(), expected);
        }
    }

    /// With several assignments of the same attribute along the chain,
    /// the leaf resolves the nearest (deepest) one.
    #[test]
    fn prop_nearest_assignment_wins(
        depth in 2usize..10,
        assignments in prop::collection::btree_map(0usize..10, 0i64..1000, 1..4),
        name in attr_name(),
    ) {
        let (mut tree, levels) = build_chain(depth);
        let mut by_level = std::collections::BTreeMap::new();
        for (level_raw, value) in assignments {
            let level = level_raw % depth;
            tree.set_attribute(levels[level], name.as_str(), value).unwrap();
            by_level.insert(level, value);
        }

        let attr = Attribute::of(name.as_str());
        let leaf = *levels.last().unwrap();
        let nearest = by_level
            .iter()
            .next_back()
            .map(|(_, &value)| Value::Int(value));
        prop_assert_eq!(tree.inherited(leaf, &attr).cloned(), nearest);
    }

    /// A local write is visible only to the segment itself and its
    /// descendants, never to ancestors.
    #[test]
    fn prop_writes_never_flow_upward(
        depth in 2usize..10,
        set_level_raw in 1usize..10,
        name in attr_name(),
        value in 0i64..1000,
    ) {
        let set_level = 1 + set_level_raw % (depth - 1);
        let (mut tree, levels) = build_chain(depth);
        tree.set_attribute(levels[set_level], name.as_str(), value).unwrap();

        let attr = Attribute::of(name.as_str());
        for &id in &levels[..set_level] {
            prop_assert_eq!(tree.attribute(id, &attr), None);
            prop_assert_eq!(tree.inherited(id, &attr), None);
        }
    }

    /// Interned attributes and plainly constructed ones are fully
    /// interchangeable as keys.
    #[test]
    fn prop_interning_is_invisible_to_lookup(name in attr_name(), value in 0i64..1000) {
        let mut interner = AttributeSet::new();
        let interned = interner.intern(&name);
        let plain = Attribute::of(name.as_str());

        let mut tree = SegmentTree::new("document");
        tree.set_attribute(tree.root_id(), interned.clone(), value).unwrap();

        prop_assert_eq!(interned, plain.clone());
        prop_assert_eq!(
            tree.attribute(tree.root_id(), &plain),
            Some(&Value::Int(value))
        );
    }

    /// Setting the same attribute repeatedly keeps exactly one entry,
    /// holding the last value.
    #[test]
    fn prop_set_is_idempotent(
        name in attr_name(),
        values in prop::collection::vec(0i64..1000, 1..5),
    ) {
        let mut tree = SegmentTree::new("document");
        for &value in &values {
            tree.set_attribute(tree.root_id(), name.as_str(), value).unwrap();
        }

        let root = tree.root();
        prop_assert_eq!(root.attrs().len(), 1);
        let last = *values.last().unwrap();
        prop_assert_eq!(
            root.attribute(&Attribute::of(name.as_str())),
            Some(&Value::Int(last))
        );
    }

    /// Detaching a subtree cuts it off from ancestor context.
    #[test]
    fn prop_detach_cuts_inheritance(
        depth in 2usize..10,
        cut_raw in 1usize..10,
        name in attr_name(),
        value in 0i64..1000,
    ) {
        let cut = 1 + cut_raw % (depth - 1);
        let (mut tree, levels) = build_chain(depth);
        tree.set_attribute(tree.root_id(), name.as_str(), value).unwrap();

        let attr = Attribute::of(name.as_str());
        let leaf = *levels.last().unwrap();
        prop_assert_eq!(tree.inherited(leaf, &attr).cloned(), Some(Value::Int(value)));

        tree.detach(levels[cut]).unwrap();
        prop_assert_eq!(tree.inherited(leaf, &attr), None);

        // Reattachment restores the full chain.
        tree.append_child(levels[cut - 1], levels[cut]).unwrap();
        prop_assert_eq!(tree.inherited(leaf, &attr).cloned(), Some(Value::Int(value)));
    }
}
