use crate::dim::Dim;
use crate::error::HypernetError;
use crate::graph::forward::gather;
use crate::graph::{EvalConfig, ForwardPass, Hypergraph, VertexId};
use crate::matrix::{self, Matrix};
use log::{debug, trace};

/// \( \frac{dE}{dv} \) for every vertex `v`, produced by one backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    grads: Vec<Matrix>,
}

impl Gradients {
    /// Gradient of the output with respect to `v`.
    pub fn wrt(&self, v: VertexId) -> Option<&Matrix> {
        self.grads.get(v.0)
    }

    /// All gradients, indexed by vertex.
    pub fn as_slice(&self) -> &[Matrix] {
        &self.grads
    }

    pub fn len(&self) -> usize {
        self.grads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grads.is_empty()
    }
}

impl Hypergraph {
    /// Propagates the derivative of the scalar output back to every vertex.
    ///
    /// Every gradient slot starts at zero and the output's at `1`. Vertices
    /// are then visited in reverse topological order; by the time a vertex is
    /// visited as a head, every edge reading it has already added its
    /// contribution, so its adjoint is final. It is then pulled back through
    /// the vertex's edge into each tail slot by addition. Once the sweep has
    /// finished without error, the final adjoint of every vertex whose edge
    /// owns parameters is handed to that edge.
    pub fn backward_with(&self, pass: &ForwardPass<'_>, config: EvalConfig) -> Result<Gradients, HypernetError> {
        let values = &pass.values;
        if !std::ptr::eq(pass.graph, self) || values.len() != self.nodes.len() {
            return Err(HypernetError::StaleForwardPass {
                expected: self.nodes.len(),
                actual: values.len(),
            });
        }
        let n = values.len();
        if n == 0 {
            return Err(HypernetError::EmptyGraph);
        }
        let last = &self.nodes[n - 1];
        if last.dim != Dim::default() {
            return Err(HypernetError::BackwardNonScalar { actual: last.dim });
        }

        let mut grads: Vec<Matrix> = self.nodes.iter().map(|node| matrix::zeros(node.dim)).collect();
        grads[n - 1] = matrix::scalar(1.0);

        for i in (0..n).rev() {
            let node = &self.nodes[i];
            let edge = &self.edges[node.in_edge.0];
            // tails precede their head, so they all live in `lower`
            let (lower, upper) = grads.split_at_mut(i);
            let dedf = &upper[0];

            if config.check_finite && dedf.iter().any(|v| !v.is_finite()) {
                return Err(HypernetError::NonFiniteValue {
                    vertex: i,
                    name: node.name.clone(),
                });
            }
            if edge.tail.is_empty() {
                continue;
            }

            let xs = gather(values, &edge.tail, i)?;
            let fx = &values[i];
            for (arg, t) in edge.tail.iter().enumerate() {
                let dedx = edge.function.backward(&xs, fx, dedf, arg)?;
                let target = &mut lower[t.0];
                if dedx.dim() != target.dim() {
                    // a mismatched contribution can never be accumulated
                    return Err(HypernetError::ShapeMismatch {
                        expected: self.nodes[t.0].dim,
                        actual: Dim::try_new(dedx.nrows(), dedx.ncols())?,
                        operation: format!("backward of {:?} for argument {}", edge.function, arg),
                    });
                }
                *target += &dedx;
            }
            trace!("backward: v{} pulled back through {:?}", i, edge.function);
        }
        // parameter stores only change once the whole sweep has succeeded
        for (node, dedf) in self.nodes.iter().zip(&grads) {
            let edge = &self.edges[node.in_edge.0];
            if edge.function.has_parameters() {
                edge.function.accumulate_grad(dedf)?;
            }
        }
        debug!("backward: propagated gradients to {} vertices", n);

        Ok(Gradients { grads })
    }
}
