//! Declarative tree fixtures
//!
//! `seg(kind)` describes a segment; nesting specs describes the tree. The
//! builder routes every link through the arena's checked API, so a fixture
//! that builds is a tree that upholds the structural invariants.

use super::super::attribute::Attribute;
use super::super::tree::{SegmentId, SegmentTree};
use super::super::value::Value;

/// Start a segment spec of the given kind.
pub fn seg(kind: impl Into<String>) -> SegmentSpec {
    SegmentSpec {
        kind: kind.into(),
        text: String::new(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Declarative description of a segment and its subtree.
#[derive(Debug, Clone)]
pub struct SegmentSpec {
    kind: String,
    text: String,
    attrs: Vec<(Attribute, Value)>,
    children: Vec<SegmentSpec>,
}

impl SegmentSpec {
    /// Set the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, name: impl Into<Attribute>, value: impl Into<Value>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a child spec.
    pub fn child(mut self, child: SegmentSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Build the tree described by this spec, with this segment as root.
    pub fn build(self) -> SegmentTree {
        let mut tree = SegmentTree::new(self.kind.clone());
        let root = tree.root_id();
        self.apply(&mut tree, root);
        tree
    }

    fn apply(self, tree: &mut SegmentTree, id: SegmentId) {
        let segment = tree
            .segment_mut(id)
            .expect("fixture builder produced an invalid id");
        segment.text = self.text;
        for (attr, value) in self.attrs {
            segment.attrs.set(attr, value);
        }
        for child_spec in self.children {
            let child = tree.add(child_spec.kind.clone());
            tree.append_child(id, child)
                .expect("fixture builder links freshly added segments only");
            child_spec.apply(tree, child);
        }
    }
}

/// The canonical sample tree used across suites:
/// `document{lang=en} -> section -> paragraph{indent=2}`.
pub fn standard_document() -> SegmentTree {
    seg("document")
        .attr("lang", "en")
        .child(seg("section").child(seg("paragraph").text("Hello").attr("indent", 2)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_links_and_annotates() {
        let tree = seg("document")
            .attr("lang", "en")
            .child(seg("section").child(seg("paragraph").attr("indent", 2)))
            .child(seg("paragraph").text("trailing"))
            .build();

        assert_eq!(tree.len(), 4);
        let root = tree.root();
        assert_eq!(root.kind(), "document");
        assert_eq!(root.child_count(), 2);

        let para = root.child(0).unwrap().child(0).unwrap();
        assert_eq!(para.kind(), "paragraph");
        assert_eq!(
            para.attribute(&Attribute::of("indent")),
            Some(&Value::Int(2))
        );

        let trailing = root.child(1).unwrap();
        assert_eq!(trailing.text(), "trailing");
    }

    #[test]
    fn test_standard_document_shape() {
        let tree = standard_document();
        let para = tree.root().child(0).unwrap().child(0).unwrap();
        assert_eq!(para.inherited(&Attribute::of("lang")), Some(&Value::from("en")));
        assert_eq!(para.attribute(&Attribute::of("lang")), None);
    }
}
