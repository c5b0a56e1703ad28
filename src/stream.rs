//! The linearized form of a document.
//!
//! Linearization flattens the tree into a left-to-right stream: text and
//! conditional breaks become payload-carrying elements, and groups and nests
//! become matched begin/end markers. The stream can be processed one element at a
//! time, which is what makes the width bookkeeping linear instead of a repeated
//! tree measurement.

use crate::geometry::Width;
use std::fmt;

/// One element of the linearized document stream.
///
/// `hpos` is the horizontal position of the element's last character assuming the
/// whole document were laid out on a single line. Elements are emitted without it;
/// the annotation stage fills it in for everything except the begin markers, whose
/// last character is their matching end's. `GroupBegin` gets its position from the
/// correction stage, and nothing downstream ever needs a `NestBegin` position.
///
/// Payload strings are borrowed from the document being printed, which outlives
/// the pipeline.
#[derive(Clone, Debug)]
pub(crate) enum StreamElem<'d> {
    Text {
        payload: &'d str,
        hpos: Option<Width>,
    },
    Cond {
        small: &'d str,
        tail: &'d str,
        cont: &'d str,
        hpos: Option<Width>,
    },
    NestBegin,
    NestEnd {
        hpos: Option<Width>,
    },
    GroupBegin {
        hpos: Option<Width>,
    },
    GroupEnd {
        hpos: Option<Width>,
    },
}

impl StreamElem<'_> {
    pub(crate) fn hpos(&self) -> Option<Width> {
        match self {
            StreamElem::Text { hpos, .. }
            | StreamElem::Cond { hpos, .. }
            | StreamElem::NestEnd { hpos }
            | StreamElem::GroupBegin { hpos }
            | StreamElem::GroupEnd { hpos } => *hpos,
            StreamElem::NestBegin => None,
        }
    }
}

/// A stage of the layout pipeline. Stages own their downstream consumer and push
/// one element at a time, in document order.
pub(crate) trait StreamConsumer<'d> {
    fn accept(&mut self, elem: StreamElem<'d>);
}

impl fmt::Display for StreamElem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn pos(hpos: &Option<Width>) -> String {
            match hpos {
                Some(p) => p.to_string(),
                None => "-".to_owned(),
            }
        }

        match self {
            StreamElem::Text { payload, hpos } => write!(f, "TE({:?},{})", payload, pos(hpos)),
            StreamElem::Cond {
                small,
                tail,
                cont,
                hpos,
            } => write!(f, "CE({:?},{:?},{:?},{})", small, tail, cont, pos(hpos)),
            StreamElem::NestBegin => write!(f, "NBeg"),
            StreamElem::NestEnd { hpos } => write!(f, "NEnd({})", pos(hpos)),
            StreamElem::GroupBegin { hpos } => write!(f, "GBeg({})", pos(hpos)),
            StreamElem::GroupEnd { hpos } => write!(f, "GEnd({})", pos(hpos)),
        }
    }
}

/// Collects every element it is handed; the stage tests inspect the result.
#[cfg(test)]
pub(crate) struct Collect<'d>(pub(crate) Vec<StreamElem<'d>>);

#[cfg(test)]
impl<'d> StreamConsumer<'d> for Collect<'d> {
    fn accept(&mut self, elem: StreamElem<'d>) {
        self.0.push(elem);
    }
}

#[cfg(test)]
pub(crate) fn render_stream(elems: &[StreamElem<'_>]) -> String {
    elems
        .iter()
        .map(|elem| elem.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
