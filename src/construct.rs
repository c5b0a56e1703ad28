//! Constructors and combinators for building documents.

use crate::doc::{Doc, DocNode};
use once_cell::sync::Lazy;
use std::sync::Arc;

static EMPTY: Lazy<Doc> = Lazy::new(|| text(""));
static BR: Lazy<Doc> = Lazy::new(|| cond(" ", "", ""));
static DOT: Lazy<Doc> = Lazy::new(|| cond(".", ".", ""));

/// The empty document.
pub fn empty() -> Doc {
    EMPTY.clone()
}

/// A break point that renders as a single space while its group fits.
pub fn br() -> Doc {
    BR.clone()
}

/// A break point for dotted chains: renders as `.`, or breaks with the dot carried
/// to the start of the continuation line.
pub fn dot() -> Doc {
    DOT.clone()
}

/// Literal text. Must not contain a newline.
pub fn text(s: &str) -> Doc {
    Doc(Arc::new(DocNode::Text(s.to_owned())))
}

/// A conditional break point: `small` when the enclosing group fits, otherwise
/// `tail`, a newline, indentation, and `cont`.
pub fn cond(small: &str, cont: &str, tail: &str) -> Doc {
    Doc(Arc::new(DocNode::Cond {
        small: small.to_owned(),
        cont: cont.to_owned(),
        tail: tail.to_owned(),
    }))
}

/// Sequential composition of any number of documents.
pub fn concat(children: impl IntoIterator<Item = Doc>) -> Doc {
    Doc(Arc::new(DocNode::Concat(children.into_iter().collect())))
}

/// A unit of fit-or-break decision.
pub fn group(child: Doc) -> Doc {
    Doc(Arc::new(DocNode::Group(child)))
}

/// An indentation scope: breaks inside continue at the column where the scope
/// began. A nest is also an implicit group.
pub fn nest(child: Doc) -> Doc {
    Doc(Arc::new(DocNode::Nest(child)))
}

/// `x0, x1, …, xn` with a break point after each comma, all sharing one
/// indentation scope.
pub fn comma_separated(xs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut xs = xs.into_iter();
    let first = match xs.next() {
        None => return empty(),
        Some(first) => first,
    };
    let mut v = vec![first];
    for x in xs {
        v.push(text(","));
        v.push(br());
        v.push(x);
    }
    nest(concat(v))
}

/// A parenthesized, comma-separated argument list.
pub fn arglist(xs: impl IntoIterator<Item = Doc>) -> Doc {
    concat(vec![text("("), comma_separated(xs), text(")")])
}

/// A dotted chain `x0.x1.….xn`. The first dot is plain text and never breaks;
/// later dots may break, with each continuation dot indented to line up under the
/// first.
pub fn dotted_list(xs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut xs = xs.into_iter();
    let head = match xs.next() {
        None => return empty(),
        Some(head) => head,
    };
    let second = match xs.next() {
        None => return nest(head),
        Some(second) => second,
    };
    let mut chain = vec![text("."), second];
    for x in xs {
        chain.push(dot());
        chain.push(x);
    }
    // The nest starts right after the head, so on a break the continuation dot
    // lands in the same column as the first dot.
    concat(vec![head, nest(concat(chain))])
}

/// A function call: `name(x0, x1, …, xn)`.
pub fn funcall(name: &str, args: impl IntoIterator<Item = Doc>) -> Doc {
    concat(vec![text(name), arglist(args)])
}
