use crate::stream::{StreamConsumer, StreamElem};
use tracing::trace;

/// Stage three: rewrite every `GroupBegin` to carry the position of its matching
/// `GroupEnd`, which is where the group would end on a single line. With that in
/// hand, the emitter can decide fit-or-break the moment a group opens.
///
/// The interior of each open group is buffered until its end arrives. This is the
/// only stage of the pipeline that buffers at all, and its memory peaks at the
/// contents of the deepest unclosed group.
pub(crate) struct CorrectGroupBegins<'d, C> {
    /// One buffer per currently-open group. Empty means pass-through.
    lookahead: Vec<Vec<StreamElem<'d>>>,
    out: C,
}

impl<'d, C: StreamConsumer<'d>> CorrectGroupBegins<'d, C> {
    pub(crate) fn new(out: C) -> Self {
        CorrectGroupBegins {
            lookahead: Vec::new(),
            out,
        }
    }

    pub(crate) fn into_inner(self) -> C {
        if !self.lookahead.is_empty() {
            panic!("bug in correct_group_begins: stream ended inside an open group");
        }
        self.out
    }

    fn forward_or_buffer(&mut self, elem: StreamElem<'d>) {
        match self.lookahead.last_mut() {
            None => self.out.accept(elem),
            Some(buffer) => buffer.push(elem),
        }
    }
}

impl<'d, C: StreamConsumer<'d>> StreamConsumer<'d> for CorrectGroupBegins<'d, C> {
    fn accept(&mut self, elem: StreamElem<'d>) {
        use StreamElem::*;

        match elem {
            GroupBegin { hpos } => {
                if hpos.is_some() {
                    panic!("bug in correct_group_begins: GroupBegin already has a position");
                }
                self.lookahead.push(Vec::new());
            }
            GroupEnd { hpos } => {
                if hpos.is_none() {
                    panic!("bug in correct_group_begins: GroupEnd without a position");
                }
                let buffer = match self.lookahead.pop() {
                    Some(buffer) => buffer,
                    None => panic!("bug in correct_group_begins: GroupEnd without an open group"),
                };
                trace!(
                    buffered = buffer.len(),
                    depth = self.lookahead.len(),
                    "group closed"
                );
                match self.lookahead.last_mut() {
                    None => {
                        // Topmost group: release it downstream.
                        self.out.accept(GroupBegin { hpos });
                        for elem in buffer {
                            self.out.accept(elem);
                        }
                        self.out.accept(GroupEnd { hpos });
                    }
                    Some(outer) => {
                        outer.push(GroupBegin { hpos });
                        outer.extend(buffer);
                        outer.push(GroupEnd { hpos });
                    }
                }
            }
            NestBegin => self.forward_or_buffer(NestBegin),
            elem => {
                if elem.hpos().is_none() {
                    panic!("bug in correct_group_begins: {} arrived without a position", elem);
                }
                self.forward_or_buffer(elem);
            }
        }
    }
}
