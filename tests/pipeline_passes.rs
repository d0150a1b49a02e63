//! Passes communicating through attributes
//!
//! The canonical flow: an early pass computes context and writes it back
//! as attributes; a later pass resolves those attributes (locally or
//! inherited) to make its decisions.

use seam::seam::attribute::Attribute;
use seam::seam::pipeline::{FnPass, PassError, Pipeline, PipelineError};
use seam::seam::testing::fixtures::seg;
use seam::seam::tree::{SegmentId, SegmentTree};
use seam::seam::value::Value;

/// Annotates every segment with its depth: the root gets 0, every child
/// one more than its parent. Parents are visited first, so each segment
/// can read its parent's annotation locally.
fn depth_pass() -> FnPass<impl FnMut(&mut SegmentTree) -> Result<(), PassError>> {
    FnPass::new("depth", |tree: &mut SegmentTree| {
        let ids: Vec<SegmentId> = tree.walk().map(|s| s.id()).collect();
        let depth_attr = Attribute::of("depth");
        for id in ids {
            let parent = tree.get(id).and_then(|s| s.parent()).map(|p| p.id());
            let depth = match parent {
                None => 0,
                Some(parent_id) => {
                    tree.attribute(parent_id, &depth_attr)
                        .and_then(Value::as_int)
                        .ok_or(PassError::MissingContext {
                            segment: parent_id,
                            attribute: "depth".to_string(),
                        })?
                        + 1
                }
            };
            tree.set_attribute(id, "depth", depth)
                .map_err(|e| PassError::Failed(e.to_string()))?;
        }
        Ok(())
    })
}

/// Consumes the depth annotation: paragraphs get indented four columns
/// per level of nesting.
fn indent_pass() -> FnPass<impl FnMut(&mut SegmentTree) -> Result<(), PassError>> {
    FnPass::new("indent", |tree: &mut SegmentTree| {
        let ids: Vec<SegmentId> = tree
            .walk()
            .filter(|s| s.kind() == "paragraph")
            .map(|s| s.id())
            .collect();
        let depth_attr = Attribute::of("depth");
        for id in ids {
            let depth = tree
                .inherited(id, &depth_attr)
                .and_then(Value::as_int)
                .ok_or(PassError::MissingContext {
                    segment: id,
                    attribute: "depth".to_string(),
                })?;
            tree.set_attribute(id, "indent", depth * 4)
                .map_err(|e| PassError::Failed(e.to_string()))?;
        }
        Ok(())
    })
}

#[test]
fn test_passes_annotate_then_consume() {
    let mut tree = seg("document")
        .child(seg("section").child(seg("paragraph").text("nested")))
        .child(seg("paragraph").text("top level"))
        .build();

    let mut pipeline = Pipeline::new()
        .with_pass(depth_pass())
        .with_pass(indent_pass());
    let report = pipeline.run(&mut tree).unwrap();
    assert_eq!(report.executed, vec!["depth", "indent"]);

    let indent = Attribute::of("indent");
    let nested = tree.root().child(0).unwrap().child(0).unwrap();
    let top = tree.root().child(1).unwrap();
    assert_eq!(nested.attribute(&indent), Some(&Value::Int(8)));
    assert_eq!(top.attribute(&indent), Some(&Value::Int(4)));
    // The depth annotation stays behind for any later pass.
    assert_eq!(
        tree.root().attribute(&Attribute::of("depth")),
        Some(&Value::Int(0))
    );
}

#[test]
fn test_missing_context_names_pass_and_segment() {
    let mut tree = seg("document")
        .child(seg("paragraph"))
        .build();

    // Consume without annotating first.
    let mut pipeline = Pipeline::new().with_pass(indent_pass());
    let err = pipeline.run(&mut tree).unwrap_err();

    let para = tree.root().child(0).unwrap().id();
    assert_eq!(
        err,
        PipelineError::PassFailed {
            pass: "indent".to_string(),
            error: PassError::MissingContext {
                segment: para,
                attribute: "depth".to_string()
            }
        }
    );
    // Nothing was written before the failure.
    assert_eq!(tree.attribute(para, &Attribute::of("indent")), None);
}

#[test]
fn test_rerunning_observes_tree_mutation() {
    let mut tree = seg("document")
        .child(seg("paragraph"))
        .build();

    let mut pipeline = Pipeline::new()
        .with_pass(depth_pass())
        .with_pass(indent_pass());
    pipeline.run(&mut tree).unwrap();

    // Push the paragraph one level deeper, then rerun: annotations are
    // recomputed from the new shape, nothing stale survives.
    let para = tree.root().child(0).unwrap().id();
    let section = tree.add("section");
    tree.append_child(tree.root_id(), section).unwrap();
    tree.detach(para).unwrap();
    tree.append_child(section, para).unwrap();

    pipeline.run(&mut tree).unwrap();
    assert_eq!(
        tree.attribute(para, &Attribute::of("indent")),
        Some(&Value::Int(8))
    );
}
