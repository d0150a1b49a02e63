//! # seam
//!
//! The segment core of a text transformation toolchain: a rooted tree of
//! text segments, each carrying a local attribute map, with effective
//! values resolved by walking the ancestor chain. Transformation passes
//! read context through this resolution contract ("what language applies
//! here", "what indentation level is in effect") and annotate segments
//! with attributes consumed by later passes.
//!
//! ```
//! use seam::seam::attribute::Attribute;
//! use seam::seam::tree::SegmentTree;
//! use seam::seam::value::Value;
//!
//! let mut tree = SegmentTree::new("document");
//! tree.set_attribute(tree.root_id(), "lang", "en").unwrap();
//!
//! let para = tree.add("paragraph");
//! tree.append_child(tree.root_id(), para).unwrap();
//!
//! // Not set locally, but inherited from the document root.
//! let lang = Attribute::of("lang");
//! assert_eq!(tree.attribute(para, &lang), None);
//! assert_eq!(tree.inherited(para, &lang), Some(&Value::Text("en".into())));
//! ```

pub mod seam;
