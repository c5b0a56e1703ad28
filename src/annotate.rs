use crate::geometry::{str_width, Width};
use crate::stream::{StreamConsumer, StreamElem};

/// Stage two: tag each element with the horizontal position its last character
/// would occupy if no line break ever fired.
///
/// The begin markers pass through untouched. A `GroupBegin` position becomes known
/// only when its matching end arrives, and filling it in is the next stage's job.
pub(crate) struct Annotate<C> {
    /// Running position; advances by the non-breaking rendering of each element.
    position: Width,
    out: C,
}

impl<C> Annotate<C> {
    pub(crate) fn new(out: C) -> Self {
        Annotate { position: 0, out }
    }

    pub(crate) fn into_inner(self) -> C {
        self.out
    }
}

impl<'d, C: StreamConsumer<'d>> StreamConsumer<'d> for Annotate<C> {
    fn accept(&mut self, elem: StreamElem<'d>) {
        use StreamElem::*;

        let elem = match elem {
            Text { payload, .. } => {
                self.position += str_width(payload);
                Text {
                    payload,
                    hpos: Some(self.position),
                }
            }
            Cond {
                small, tail, cont, ..
            } => {
                // A break's width contribution is its `small` form: that is what
                // the enclosing group's fit decision is measured against.
                self.position += str_width(small);
                Cond {
                    small,
                    tail,
                    cont,
                    hpos: Some(self.position),
                }
            }
            GroupEnd { .. } => GroupEnd {
                hpos: Some(self.position),
            },
            NestEnd { .. } => NestEnd {
                hpos: Some(self.position),
            },
            elem @ (GroupBegin { .. } | NestBegin) => elem,
        };
        self.out.accept(elem);
    }
}
