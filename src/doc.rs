use crate::geometry::{str_width, Width};
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// An immutable tree describing intent to render.
///
/// A `Doc` is a cheap reference-counted handle; cloning shares the underlying tree,
/// and documents may be shared between threads and between concurrent
/// [`pretty_print`](crate::pretty_print) calls. Documents are acyclic by
/// construction.
#[derive(Clone, Debug)]
pub struct Doc(pub(crate) Arc<DocNode>);

#[derive(Debug)]
pub(crate) enum DocNode {
    /// Literal characters. Must not contain a newline.
    Text(String),
    /// A conditional break point. If the enclosing group fits on one line, renders
    /// as `small`; otherwise renders as `tail`, then a newline and indentation,
    /// then `cont`.
    Cond {
        small: String,
        cont: String,
        tail: String,
    },
    /// Sequential composition. Contributes no rendering of its own.
    Concat(Vec<Doc>),
    /// A unit of fit-or-break decision: either every conditional break inside
    /// renders its `small` form, or all of them break.
    Group(Doc),
    /// An indentation scope: breaks inside continue at the column where the scope
    /// began.
    Nest(Doc),
}

impl Doc {
    /// The width this document would occupy laid out on a single line, with every
    /// conditional break rendering its `small` form.
    pub fn width(&self) -> Width {
        match &*self.0 {
            DocNode::Text(s) => str_width(s),
            DocNode::Cond { small, .. } => str_width(small),
            DocNode::Concat(children) => children.iter().map(Doc::width).sum(),
            DocNode::Group(child) => child.width(),
            DocNode::Nest(child) => child.width(),
        }
    }

    /// Check the structural invariants that the constructors cannot enforce through
    /// types: no embedded newline in a `Text` payload, nor in a conditional break's
    /// `small` or `cont` rendering. A `tail` is exempt; it is emitted verbatim
    /// right before the break, newlines included.
    pub fn validate(&self) -> Result<(), InvalidDocError> {
        match &*self.0 {
            DocNode::Text(s) => {
                if s.contains('\n') {
                    return Err(InvalidDocError::NewlineInText(s.clone()));
                }
                Ok(())
            }
            DocNode::Cond { small, cont, .. } => {
                for (part, s) in [("small", small), ("cont", cont)] {
                    if s.contains('\n') {
                        return Err(InvalidDocError::NewlineInCond {
                            part,
                            text: s.clone(),
                        });
                    }
                }
                Ok(())
            }
            DocNode::Concat(children) => children.iter().try_for_each(Doc::validate),
            DocNode::Group(child) => child.validate(),
            DocNode::Nest(child) => child.validate(),
        }
    }
}

/// A document that breaks the algebra's structural rules. See [`Doc::validate`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum InvalidDocError {
    #[error("Text must not contain a newline: {0:?}")]
    NewlineInText(String),
    #[error("a conditional break's {part} rendering must not contain a newline: {text:?}")]
    NewlineInCond { part: &'static str, text: String },
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for binary concatenation.
    fn add(self, other: Doc) -> Doc {
        Doc(Arc::new(DocNode::Concat(vec![self, other])))
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            DocNode::Text(s) => write!(f, "Text({:?})", s),
            DocNode::Cond { small, cont, tail } => {
                write!(f, "Cond({:?},{:?},{:?})", small, cont, tail)
            }
            DocNode::Concat(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            DocNode::Group(child) => write!(f, "Group({})", child),
            DocNode::Nest(child) => write!(f, "Nest({})", child),
        }
    }
}
