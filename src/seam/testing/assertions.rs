//! Fluent assertion API for segment trees

use super::super::attribute::Attribute;
use super::super::tree::{SegmentRef, SegmentTree};
use super::super::value::Value;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a tree.
pub fn assert_tree(tree: &SegmentTree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

// ============================================================================
// Tree Assertions
// ============================================================================

pub struct TreeAssertion<'a> {
    tree: &'a SegmentTree,
}

impl<'a> TreeAssertion<'a> {
    /// Assert the number of segments in the arena.
    pub fn segment_count(self, expected: usize) -> Self {
        let actual = self.tree.len();
        assert_eq!(
            actual, expected,
            "Expected {} segments, found {}",
            expected, actual
        );
        self
    }

    /// Assert on the root segment.
    pub fn root<F>(self, assertion: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        assertion(SegmentAssertion {
            segment: self.tree.root(),
            context: "root".to_string(),
        });
        self
    }

    /// Assert on the segment addressed by a child-index path from the
    /// root: `&[]` is the root, `&[0]` its first child, `&[0, 1]` that
    /// child's second child.
    pub fn segment<F>(self, path: &[usize], assertion: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        let mut segment = self.tree.root();
        let mut context = "root".to_string();
        for &index in path {
            context = format!("{}.children[{}]", context, index);
            segment = match segment.child(index) {
                Some(child) => child,
                None => panic!(
                    "No segment at {} ({} has {} children)",
                    context,
                    segment.kind(),
                    segment.child_count()
                ),
            };
        }
        assertion(SegmentAssertion { segment, context });
        self
    }
}

// ============================================================================
// Segment Assertions
// ============================================================================

pub struct SegmentAssertion<'a> {
    segment: SegmentRef<'a>,
    context: String,
}

impl<'a> SegmentAssertion<'a> {
    /// The underlying handle, for checks the fluent API doesn't cover.
    pub fn get(&self) -> SegmentRef<'a> {
        self.segment
    }

    /// Assert the segment kind.
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.kind(),
            expected,
            "Expected {} to be a {}, found {}",
            self.context,
            expected,
            self.segment.kind()
        );
        self
    }

    /// Assert the text content.
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.text(),
            expected,
            "Unexpected text at {}",
            self.context
        );
        self
    }

    /// Assert the number of children.
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.segment.child_count();
        assert_eq!(
            actual, expected,
            "Expected {} children at {}, found {}",
            expected, self.context, actual
        );
        self
    }

    /// Assert a local attribute value.
    pub fn has_attr(self, name: &str, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let actual = self.segment.attribute(&Attribute::of(name));
        assert_eq!(
            actual,
            Some(&expected),
            "Expected {}={} locally at {}",
            name,
            expected,
            self.context
        );
        self
    }

    /// Assert an attribute is not set locally (it may still be inherited).
    pub fn lacks_attr(self, name: &str) -> Self {
        let actual = self.segment.attribute(&Attribute::of(name));
        assert_eq!(
            actual, None,
            "Expected no local {} at {}, found {:?}",
            name, self.context, actual
        );
        self
    }

    /// Assert the resolved (inherited) attribute value.
    pub fn inherits(self, name: &str, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let actual = self.segment.inherited(&Attribute::of(name));
        assert_eq!(
            actual,
            Some(&expected),
            "Expected {} to resolve {}={} through its ancestor chain",
            self.context,
            name,
            expected
        );
        self
    }

    /// Assert the attribute resolves to absent along the whole chain.
    pub fn lacks_inherited(self, name: &str) -> Self {
        let actual = self.segment.inherited(&Attribute::of(name));
        assert_eq!(
            actual, None,
            "Expected {} to resolve no value for {}, found {:?}",
            self.context, name, actual
        );
        self
    }

    /// Assert on a specific child by index.
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        let context = format!("{}.children[{}]", self.context, index);
        let child = match self.segment.child(index) {
            Some(child) => child,
            None => panic!(
                "No segment at {} ({} has {} children)",
                context,
                self.segment.kind(),
                self.segment.child_count()
            ),
        };
        assertion(SegmentAssertion {
            segment: child,
            context,
        });
        self
    }
}
