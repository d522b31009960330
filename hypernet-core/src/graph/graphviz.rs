use crate::graph::Hypergraph;
use std::fmt::Write;

impl Hypergraph {
    /// Renders the structure as a Graphviz `digraph`.
    ///
    /// Each vertex is labelled `name = <function over its tail names>` and
    /// each tail link becomes an arrow into the head.
    pub fn to_graphviz(&self) -> String {
        let var_names = self.var_names();
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "digraph G {{");
        let _ = writeln!(out, "  rankdir=LR;");
        let _ = writeln!(out, "  nodesep=.05;");
        for (i, node) in self.nodes.iter().enumerate() {
            let edge = &self.edges[node.in_edge.0];
            let arg_names: Vec<String> = edge.tail.iter().map(|t| var_names[t.0].clone()).collect();
            let label = format!("{} = {}", var_names[i], edge.function.as_string(&arg_names));
            let _ = writeln!(out, "  N{} [label=\"{}\"];", i, escape(&label));
        }
        for edge in &self.edges {
            for t in &edge.tail {
                let _ = writeln!(out, "  N{} -> N{};", t.0, edge.head.0);
            }
        }
        let _ = writeln!(out, "}}");
        out
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
