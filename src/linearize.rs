use crate::doc::{Doc, DocNode};
use crate::stream::{StreamConsumer, StreamElem};

/// Stage one: walk `doc` depth-first and push its stream elements into `out`.
///
/// A group surrounds its contents with `GroupBegin`/`GroupEnd`. A nest wraps an
/// implicit group as well, so an indentation scope always coincides with a
/// fit-or-break decision: `NestBegin GroupBegin … GroupEnd NestEnd`.
pub(crate) fn linearize<'d, C: StreamConsumer<'d>>(doc: &'d Doc, out: &mut C) {
    match &*doc.0 {
        DocNode::Text(s) => out.accept(StreamElem::Text {
            payload: s,
            hpos: None,
        }),
        DocNode::Cond { small, cont, tail } => out.accept(StreamElem::Cond {
            small,
            tail,
            cont,
            hpos: None,
        }),
        DocNode::Concat(children) => {
            for child in children {
                linearize(child, out);
            }
        }
        DocNode::Group(child) => {
            out.accept(StreamElem::GroupBegin { hpos: None });
            linearize(child, out);
            out.accept(StreamElem::GroupEnd { hpos: None });
        }
        DocNode::Nest(child) => {
            out.accept(StreamElem::NestBegin);
            out.accept(StreamElem::GroupBegin { hpos: None });
            linearize(child, out);
            out.accept(StreamElem::GroupEnd { hpos: None });
            out.accept(StreamElem::NestEnd { hpos: None });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::{br, concat, group, nest, text};
    use crate::stream::{render_stream, Collect};

    fn linearized(doc: &Doc) -> String {
        let mut collect = Collect(Vec::new());
        linearize(doc, &mut collect);
        render_stream(&collect.0)
    }

    #[test]
    fn text_and_cond_become_payload_elements() {
        let doc = concat(vec![text("ab"), br()]);
        assert_eq!(linearized(&doc), r#"TE("ab",-) CE(" ","","",-)"#);
    }

    #[test]
    fn nest_wraps_an_implicit_group() {
        let doc = nest(text("x"));
        assert_eq!(
            linearized(&doc),
            r#"NBeg GBeg(-) TE("x",-) GEnd(-) NEnd(-)"#
        );
    }

    #[test]
    fn groups_nest_in_document_order() {
        let doc = group(concat(vec![text("a"), group(text("b"))]));
        assert_eq!(
            linearized(&doc),
            r#"GBeg(-) TE("a",-) GBeg(-) TE("b",-) GEnd(-) GEnd(-)"#
        );
    }

    #[test]
    fn delimiters_stay_balanced() {
        let doc = nest(concat(vec![
            group(text("a")),
            nest(concat(vec![br(), group(br())])),
        ]));
        let mut collect = Collect(Vec::new());
        linearize(&doc, &mut collect);

        let mut group_depth = 0i32;
        let mut nest_depth = 0i32;
        for elem in &collect.0 {
            match elem {
                StreamElem::GroupBegin { .. } => group_depth += 1,
                StreamElem::GroupEnd { .. } => group_depth -= 1,
                StreamElem::NestBegin => nest_depth += 1,
                StreamElem::NestEnd { .. } => nest_depth -= 1,
                _ => {}
            }
            assert!(group_depth >= 0 && nest_depth >= 0);
        }
        assert_eq!(group_depth, 0);
        assert_eq!(nest_depth, 0);
    }
}
