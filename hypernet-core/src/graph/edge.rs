use crate::autograd::Function;
use crate::graph::VertexId;
use std::fmt;

/// Handle to a hyperedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A function of zero or more vertices.
///
/// `head` is the vertex receiving the result, `tail` the ordered arguments.
/// Parameters, inputs and constants are edges with an empty tail.
#[derive(Debug)]
pub struct Edge {
    pub(crate) head: VertexId,
    pub(crate) tail: Vec<VertexId>,
    pub(crate) function: Box<dyn Function>,
}

impl Edge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn tail(&self) -> &[VertexId] {
        &self.tail
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.tail.len()
    }

    pub fn function(&self) -> &dyn Function {
        self.function.as_ref()
    }

    pub fn has_parameters(&self) -> bool {
        self.function.has_parameters()
    }
}
