use crate::doc::{Doc, DocNode};
use crate::geometry::{str_width, Width};

const DEBUG_PRINT: bool = false;

/// Print the document by direct tree traversal instead of the streaming pipeline.
///
/// A group fits iff the column it opens at plus the flat width of its contents
/// stays within the page, or an enclosing group already fits; that restates the
/// pipeline's right-edge comparison in plain output coordinates. This renderer
/// re-measures subtrees at every group, so it is quadratic where the pipeline is
/// linear. It exists so tests can compare the pipeline against an independently
/// obvious implementation. This function should always produce the same output as
/// [`pretty_print`](crate::pretty_print).
pub fn oracular_pretty_print(width: Width, doc: &Doc) -> String {
    let mut oracle = Oracle {
        width,
        col: 0,
        indent: Vec::new(),
        out: String::new(),
    };
    oracle.render(doc, false);
    oracle.out
}

struct Oracle {
    width: Width,
    /// Column where the next character lands.
    col: Width,
    indent: Vec<Width>,
    out: String,
}

impl Oracle {
    fn render(&mut self, doc: &Doc, fits: bool) {
        match &*doc.0 {
            DocNode::Text(s) => {
                self.out.push_str(s);
                self.col += str_width(s);
            }
            DocNode::Cond { small, cont, tail } => {
                if fits {
                    self.out.push_str(small);
                    self.col += str_width(small);
                } else {
                    let indent = self.indent.last().copied().unwrap_or(0);
                    self.out.push_str(tail);
                    self.out.push('\n');
                    self.out.push_str(&" ".repeat(indent));
                    self.out.push_str(cont);
                    self.col = indent + str_width(cont);
                }
            }
            DocNode::Concat(children) => {
                for child in children {
                    self.render(child, fits);
                }
            }
            DocNode::Group(child) => {
                let fits = fits || self.decide(child);
                self.render(child, fits);
            }
            DocNode::Nest(child) => {
                self.indent.push(self.col);
                let fits = fits || self.decide(child);
                self.render(child, fits);
                self.indent.pop();
            }
        }
    }

    fn decide(&self, child: &Doc) -> bool {
        let flat = child.width();
        let fits = self.col + flat <= self.width;
        if DEBUG_PRINT {
            println!(
                "==group at col {}: flat {} vs width {} -> fits {}",
                self.col, flat, self.width, fits
            );
        }
        fits
    }
}
