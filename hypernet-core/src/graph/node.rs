use crate::dim::Dim;
use crate::graph::EdgeId;
use std::fmt;

/// Handle to a vertex. Issued densely in creation order and stable for the
/// lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A value node: one SSA variable of the computation.
///
/// * `in_edge` is the function that computes the variable.
/// * `out_edges` are the functions that read it.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) in_edge: EdgeId,
    pub(crate) out_edges: Vec<EdgeId>,
    pub(crate) dim: Dim,
    pub(crate) name: String,
}

impl Node {
    pub fn in_edge(&self) -> EdgeId {
        self.in_edge
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    /// Shape of the value computed for this vertex.
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Debug name, if one was given.
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}
