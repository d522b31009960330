use crate::autograd::Function;
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::graph::{Edge, EdgeId, Node, VertexId};
use crate::nn::{Input, Parameter};
use crate::ops::{InputEdge, ParameterEdge};
use log::debug;

/// Computation graph where vertices hold intermediate values and
/// hyperedges are functions of several values.
///
/// Given `z = f(x, y)`, `z`, `x` and `y` are vertices and there is one edge
/// for `f` whose head is `z` and whose tail is `[x, y]`. Constants, inputs
/// and parameters are functions of no arguments.
///
/// The graph exclusively owns its vertices and edges, refers to them only
/// by index, and never removes or rewires anything. Vertices are **stored
/// in topological order**: every tail index of an edge is smaller than its
/// head index.
#[derive(Debug, Default)]
pub struct Hypergraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Hypergraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex whose value is read from `parameter` and whose adjoint is
    /// accumulated into the parameter's gradient.
    pub fn add_parameter(&mut self, parameter: &Parameter, name: &str) -> VertexId {
        let dim = parameter.dim();
        self.push(Box::new(ParameterEdge::new(parameter.clone())), Vec::new(), dim, name)
    }

    /// Adds a vertex whose value is read from the caller's `input` binding.
    pub fn add_input(&mut self, input: &Input, name: &str) -> VertexId {
        let dim = input.dim();
        self.push(Box::new(InputEdge::new(input.clone())), Vec::new(), dim, name)
    }

    /// Adds a vertex computed by a default-constructed `F` over `arguments`.
    pub fn add_function<F>(&mut self, arguments: &[VertexId], name: &str) -> Result<VertexId, HypernetError>
    where
        F: Function + Default + 'static,
    {
        self.add_function_with(F::default(), arguments, name)
    }

    /// Adds a vertex computed by `function` over `arguments`.
    ///
    /// Every argument must already exist, which is what keeps the vertex
    /// sequence topologically ordered. The new vertex's shape is inferred
    /// with [`Function::dim_forward`], so arity and shape errors are reported
    /// here rather than during evaluation. The graph is left untouched on error.
    pub fn add_function_with<F>(
        &mut self,
        function: F,
        arguments: &[VertexId],
        name: &str,
    ) -> Result<VertexId, HypernetError>
    where
        F: Function + 'static,
    {
        let len = self.nodes.len();
        let arg_dims = arguments
            .iter()
            .map(|v| {
                self.nodes
                    .get(v.0)
                    .map(|n| n.dim)
                    .ok_or(HypernetError::UnknownVertex { vertex: v.0, len })
            })
            .collect::<Result<Vec<Dim>, HypernetError>>()?;
        let dim = function.dim_forward(&arg_dims)?;
        Ok(self.push(Box::new(function), arguments.to_vec(), dim, name))
    }

    fn push(&mut self, function: Box<dyn Function>, tail: Vec<VertexId>, dim: Dim, name: &str) -> VertexId {
        let new_node_index = VertexId(self.nodes.len());
        let new_edge_index = EdgeId(self.edges.len());
        for t in &tail {
            self.nodes[t.0].out_edges.push(new_edge_index);
        }
        self.nodes.push(Node {
            in_edge: new_edge_index,
            out_edges: Vec::new(),
            dim,
            name: name.to_string(),
        });
        debug!(
            "Hypergraph: added {} '{}' {} = {:?} over {:?}",
            new_node_index, name, dim, function, tail
        );
        self.edges.push(Edge {
            head: new_node_index,
            tail,
            function,
        });
        new_node_index
    }

    /// Number of vertices (which is also the number of edges).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, v: VertexId) -> Option<&Node> {
        self.nodes.get(v.0)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.0)
    }

    /// Vertices in topological order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over every vertex handle in topological order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.nodes.len()).map(VertexId)
    }

    /// Shape of a vertex's value.
    pub fn dim(&self, v: VertexId) -> Option<Dim> {
        self.node(v).map(|n| n.dim)
    }

    /// The last vertex, whose value `forward` returns.
    pub fn output(&self) -> Option<VertexId> {
        self.nodes.len().checked_sub(1).map(VertexId)
    }

    /// Display name of every vertex, `v<index>` for unnamed ones.
    pub fn var_names(&self) -> Vec<String> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| match n.name() {
                Some(name) => name.to_string(),
                None => VertexId(i).to_string(),
            })
            .collect()
    }
}
