//! The expression hypergraph and its forward/backward evaluators.
//!
//! Vertices are stored in topological order: a vertex is only appended
//! after every vertex its defining edge reads from. Forward evaluation walks
//! that order, backward walks it in reverse. Per-pass values and gradients
//! live in side tables ([`ForwardPass`], [`Gradients`]) rather than in the
//! graph, which stays immutable once built.

mod backward;
mod config;
mod edge;
mod forward;
mod graphviz;
mod hypergraph;
mod node;

pub use backward::Gradients;
pub use config::EvalConfig;
pub use edge::{Edge, EdgeId};
pub use forward::ForwardPass;
pub use hypergraph::Hypergraph;
pub use node::{Node, VertexId};

#[cfg(test)]
#[path = "hypergraph_test.rs"]
mod tests;
