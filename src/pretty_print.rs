use crate::annotate::Annotate;
use crate::correct::CorrectGroupBegins;
use crate::doc::Doc;
use crate::geometry::{str_width, Width};
use crate::linearize::linearize;
use crate::stream::{StreamConsumer, StreamElem};
use tracing::trace;

/// Render `doc` to fit within `width` columns per line wherever possible.
///
/// A single over-long [`text`](crate::text), or a continuation pushed past the
/// page by deep indentation, overflows rather than being cut. A `width` of zero is
/// legal and forces every conditional break inside a too-wide group to fire.
///
/// The document is only read; one call instantiates its own pipeline state, so
/// shared documents may be printed concurrently.
pub fn pretty_print(width: Width, doc: &Doc) -> String {
    let emit = Emit::new(width);
    let correct = CorrectGroupBegins::new(emit);
    let mut annotate = Annotate::new(correct);
    linearize(doc, &mut annotate);
    annotate.into_inner().into_inner().finish()
}

/// Stage four: walk the corrected stream left to right and produce the output.
///
/// Positions on incoming elements are measured in the single-line coordinate
/// system rooted at the document start, even after breaks have happened, so
/// `right_edge` is tracked in that same coordinate system. After a break at a
/// conditional whose single-line position was `c`, the room left on the new
/// physical line is `width - hpos`, which puts the right edge at
/// `c + (width - hpos)`. That quantity goes negative when indentation plus the
/// continuation already overflow the page, leaving no room until the next break,
/// hence the signed representation.
struct Emit {
    /// Page width.
    width: Width,
    /// Open groups known to fit on the current line. While positive, conditional
    /// breaks render their `small` form.
    fitting: usize,
    /// Largest single-line-coordinate position that still lands on this line.
    right_edge: isize,
    /// Column in the output buffer where the next character will go.
    hpos: Width,
    /// Indentation column of each open nest.
    indent: Vec<Width>,
    out: String,
}

impl Emit {
    fn new(width: Width) -> Emit {
        Emit {
            width,
            fitting: 0,
            right_edge: width as isize,
            hpos: 0,
            indent: Vec::new(),
            out: String::new(),
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

impl<'d> StreamConsumer<'d> for Emit {
    fn accept(&mut self, elem: StreamElem<'d>) {
        use StreamElem::*;

        match elem {
            Text { payload, .. } => {
                self.out.push_str(payload);
                self.hpos += str_width(payload);
            }
            Cond { small, .. } if self.fitting > 0 => {
                self.out.push_str(small);
                self.hpos += str_width(small);
            }
            Cond {
                tail, cont, hpos, ..
            } => {
                let hpos = match hpos {
                    Some(hpos) => hpos,
                    None => panic!("bug in emit: conditional break without a position"),
                };
                let indent = self.indent.last().copied().unwrap_or(0);
                self.out.push_str(tail);
                self.out.push('\n');
                self.out.push_str(&" ".repeat(indent));
                self.out.push_str(cont);
                self.hpos = indent + str_width(cont);
                self.right_edge = self.width as isize - self.hpos as isize + hpos as isize;
                trace!(at = hpos, right_edge = self.right_edge, "line break");
            }
            GroupBegin { hpos } => {
                let hpos = match hpos {
                    Some(hpos) => hpos,
                    None => panic!("bug in emit: GroupBegin without a position"),
                };
                if self.fitting > 0 || hpos as isize <= self.right_edge {
                    self.fitting += 1;
                } else {
                    // The group is too wide; its conditional breaks all fire.
                    self.fitting = 0;
                }
                trace!(
                    end = hpos,
                    right_edge = self.right_edge,
                    fitting = self.fitting,
                    "group open"
                );
            }
            GroupEnd { .. } => {
                if self.fitting > 0 {
                    self.fitting -= 1;
                }
            }
            NestBegin => self.indent.push(self.hpos),
            NestEnd { .. } => {
                if self.indent.pop().is_none() {
                    panic!("bug in emit: NestEnd without an open nest");
                }
            }
        }
    }
}
