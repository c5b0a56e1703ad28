//! A streaming pretty-printing library for structured symbolic documents.
//!
//! You describe your output as a [`Doc`] built from five primitives: literal text
//! ([`text`]), conditional break points ([`cond`]), concatenation ([`concat`]),
//! fit-or-break units ([`group`]), and indentation scopes ([`nest`]). Then
//! [`pretty_print`] lays the document out within a desired line width, breaking
//! lines only where necessary and indenting continuations to the column where
//! their enclosing scope began.
//!
//! The layout algorithm is Oppen's linear-time pretty-printer in the streaming
//! formulation of Kiselyov, Peyton-Jones and Sabry
//! ([Lazy v. Yield: Incremental, Linear Pretty-printing](http://okmij.org/ftp/continuations/PPYield/yield-pp.pdf)).
//! The document is linearized into a stream of elements. Each element is annotated
//! with the horizontal position its last character would occupy on a single line,
//! and group openings are rewritten to carry their closing position; that
//! rewriting is the only stage that buffers, and it buffers only for the span of
//! one group. A final pass walks the stream and decides each break with a counter
//! of enclosing groups known to fit. Lookahead is unbounded per group, and the
//! whole document is rendered to one `String`.
//!
//! # Quick start
//!
//! ```
//! use stream_pretty_printer::{funcall, pretty_print, text};
//!
//! let call = funcall("connect", vec![text("host"), text("port")]);
//! assert_eq!(pretty_print(80, &call), "connect(host, port)");
//! assert_eq!(pretty_print(10, &call), "connect(host,\n        port)");
//! ```
//!
//! Higher-level combinators ([`comma_separated`], [`arglist`], [`dotted_list`],
//! [`funcall`]) encode common call-syntax conventions: argument lists share one
//! indentation scope, and a dotted chain never breaks at its first dot.
//!
//! Widths are measured in code units of the underlying string, not grapheme
//! clusters or display cells; see [`testing::str_width`].

mod annotate;
mod construct;
mod correct;
mod doc;
mod geometry;
mod linearize;
mod oracle;
mod pretty_print;
mod stream;

pub use construct::{
    arglist, br, comma_separated, concat, cond, dot, dotted_list, empty, funcall, group, nest,
    text,
};
pub use doc::{Doc, InvalidDocError};
pub use geometry::Width;
pub use pretty_print::pretty_print;

pub mod testing {
    //! Helpers for testing code that produces documents.

    pub use super::geometry::str_width;
    pub use super::oracle::oracular_pretty_print;
}
