use crate::dim::Dim;
use crate::error::HypernetError;
use crate::graph::{EvalConfig, Gradients, Hypergraph, VertexId};
use crate::matrix::Matrix;
use log::{debug, trace};

/// The values computed by one forward pass, one per vertex.
///
/// Borrowing the graph ties the values to the structure they were computed
/// from, so a backward pass can only ever run against a matching forward.
#[derive(Debug)]
pub struct ForwardPass<'g> {
    pub(crate) graph: &'g Hypergraph,
    pub(crate) values: Vec<Matrix>,
    pub(crate) config: EvalConfig,
}

impl Hypergraph {
    /// Evaluates every vertex in topological order with the default checks.
    pub fn forward(&self) -> Result<ForwardPass<'_>, HypernetError> {
        self.forward_with(EvalConfig::default())
    }

    /// Evaluates every vertex in topological order.
    ///
    /// For each vertex, the values of its edge's tail are gathered in tail
    /// order and handed to the edge's function. Each value slot is written
    /// exactly once.
    pub fn forward_with(&self, config: EvalConfig) -> Result<ForwardPass<'_>, HypernetError> {
        if self.nodes.is_empty() {
            return Err(HypernetError::EmptyGraph);
        }
        let mut values: Vec<Matrix> = Vec::with_capacity(self.nodes.len());

        for (i, node) in self.nodes.iter().enumerate() {
            let edge = &self.edges[node.in_edge.0];
            let fx = {
                let xs = gather(&values, &edge.tail, i)?;
                edge.function.forward(&xs)?
            };
            trace!("forward: v{} <- {:?} {:?}", i, edge.function, fx.dim());

            if config.check_shapes && !node.dim.matches(&fx) {
                return Err(HypernetError::ShapeMismatch {
                    expected: node.dim,
                    actual: Dim::try_new(fx.nrows(), fx.ncols())?,
                    operation: format!("forward of {:?}", edge.function),
                });
            }
            if config.check_finite && fx.iter().any(|v| !v.is_finite()) {
                return Err(HypernetError::NonFiniteValue {
                    vertex: i,
                    name: node.name.clone(),
                });
            }
            values.push(fx);
        }
        debug!("forward: evaluated {} vertices", values.len());

        Ok(ForwardPass {
            graph: self,
            values,
            config,
        })
    }
}

/// Collects references to the values of `tail`, all of which must precede `head`.
pub(crate) fn gather<'a>(
    values: &'a [Matrix],
    tail: &[VertexId],
    head: usize,
) -> Result<Vec<&'a Matrix>, HypernetError> {
    tail.iter()
        .map(|t| {
            if t.0 >= head {
                return Err(HypernetError::InternalError(format!(
                    "edge of v{} reads v{}, breaking topological order",
                    head, t.0
                )));
            }
            values.get(t.0).ok_or(HypernetError::UnknownVertex {
                vertex: t.0,
                len: values.len(),
            })
        })
        .collect()
}

impl<'g> ForwardPass<'g> {
    /// The graph this pass evaluated.
    pub fn graph(&self) -> &'g Hypergraph {
        self.graph
    }

    /// Value of the last vertex.
    pub fn output(&self) -> &Matrix {
        // forward_with refuses empty graphs, so there is always a last value
        &self.values[self.values.len() - 1]
    }

    /// Value of any vertex.
    pub fn value(&self, v: VertexId) -> Option<&Matrix> {
        self.values.get(v.0)
    }

    /// All values, indexed by vertex.
    pub fn values(&self) -> &[Matrix] {
        &self.values
    }

    pub fn into_output(mut self) -> Matrix {
        self.values.swap_remove(self.values.len() - 1)
    }

    /// Runs the backward pass against these values, with the checks this
    /// forward pass was configured with.
    pub fn backward(&self) -> Result<Gradients, HypernetError> {
        self.graph.backward_with(self, self.config)
    }
}
