use super::*;
use crate::autograd::Function;
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::nn::{Input, Parameter};
use crate::ops::{CwiseMultiply, Log, MatrixMultiply, Sum, SumElements, Tanh};
use ndarray::array;

/// Claims to preserve the shape of its argument but returns a (1,1) matrix.
#[derive(Debug, Default)]
struct LyingShape;

impl Function for LyingShape {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        Ok(xs[0])
    }

    fn forward(&self, _xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        Ok(array![[0.0]])
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, _dedf: &Matrix, _i: usize) -> Result<Matrix, HypernetError> {
        Ok(Matrix::zeros(xs[0].raw_dim()))
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("lie({})", arg_names[0])
    }
}

fn scalar_input(v: f64) -> Input {
    Input::from_matrix(array![[v]]).unwrap()
}

#[test]
fn test_vertices_are_topologically_ordered() -> Result<(), HypernetError> {
    let x = scalar_input(1.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    let a = g.add_function::<Tanh>(&[vx], "a")?;
    let b = g.add_function::<CwiseMultiply>(&[vx, a], "b")?;
    g.add_function::<Sum>(&[a, b, vx], "c")?;

    assert_eq!(g.len(), 4);
    assert_eq!(g.edges().len(), g.nodes().len());
    for (i, node) in g.nodes().iter().enumerate() {
        let edge = g.edge(node.in_edge()).unwrap();
        assert_eq!(edge.head().index(), i);
        assert!(edge.tail().iter().all(|t| t.index() < i));
    }
    Ok(())
}

#[test]
fn test_links_are_consistent() -> Result<(), HypernetError> {
    let x = scalar_input(2.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    let sq = g.add_function::<CwiseMultiply>(&[vx, vx], "sq")?;
    g.add_function::<Sum>(&[sq, vx], "s")?;

    // every out edge lists the vertex in its tail, once per occurrence
    for v in g.vertex_ids() {
        let node = g.node(v).unwrap();
        for e in node.out_edges() {
            assert!(g.edge(*e).unwrap().tail().contains(&v));
        }
        let occurrences: usize = g
            .edges()
            .iter()
            .map(|e| e.tail().iter().filter(|t| **t == v).count())
            .sum();
        assert_eq!(node.out_edges().len(), occurrences);
    }
    assert_eq!(g.node(vx).unwrap().out_edges().len(), 3);
    assert_eq!(g.node(sq).unwrap().in_edge().index(), 1);
    Ok(())
}

#[test]
fn test_unknown_vertex_leaves_graph_untouched() {
    let x = scalar_input(1.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    let bogus = VertexId(7);
    let err = g.add_function::<Sum>(&[vx, bogus], "bad").unwrap_err();
    assert_eq!(err, HypernetError::UnknownVertex { vertex: 7, len: 1 });
    assert_eq!(g.len(), 1);
    assert_eq!(g.edges().len(), 1);
    assert!(g.node(vx).unwrap().out_edges().is_empty());
}

#[test]
fn test_arity_and_shape_errors_at_construction() {
    let a = Input::new(Dim::new(2, 3));
    let b = Input::new(Dim::new(2, 3));
    let mut g = Hypergraph::new();
    let va = g.add_input(&a, "a");
    let vb = g.add_input(&b, "b");

    assert!(matches!(
        g.add_function::<Tanh>(&[va, vb], "t"),
        Err(HypernetError::ArityMismatch { expected: 1, actual: 2, .. })
    ));
    assert!(matches!(
        g.add_function::<MatrixMultiply>(&[va, vb], "ab"),
        Err(HypernetError::IncompatibleDims { .. })
    ));
    assert_eq!(g.len(), 2);
    assert_eq!(g.dim(va), Some(Dim::new(2, 3)));
    assert_eq!(g.dim(VertexId(5)), None);
}

#[test]
fn test_empty_graph_cannot_be_evaluated() {
    let g = Hypergraph::new();
    assert!(g.is_empty());
    assert_eq!(g.output(), None);
    assert_eq!(g.forward().unwrap_err(), HypernetError::EmptyGraph);
}

#[test]
fn test_backward_requires_scalar_output() -> Result<(), HypernetError> {
    let x = Input::new(Dim::vector(3));
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    g.add_function::<Tanh>(&[vx], "t")?;

    let pass = g.forward()?;
    assert_eq!(
        pass.backward().unwrap_err(),
        HypernetError::BackwardNonScalar { actual: Dim::vector(3) }
    );
    Ok(())
}

#[test]
fn test_backward_rejects_pass_from_other_graph() -> Result<(), HypernetError> {
    let x = scalar_input(1.0);
    let mut g1 = Hypergraph::new();
    g1.add_input(&x, "x");
    let mut g2 = Hypergraph::new();
    let vx = g2.add_input(&x, "x");
    g2.add_function::<Tanh>(&[vx], "t")?;

    let pass = g1.forward()?;
    assert_eq!(
        g2.backward_with(&pass, EvalConfig::default()).unwrap_err(),
        HypernetError::StaleForwardPass { expected: 2, actual: 1 }
    );
    Ok(())
}

#[test]
fn test_evaluation_is_reproducible() -> Result<(), HypernetError> {
    let w = Parameter::from_matrix(array![[0.2, -0.4], [0.9, 0.1]])?;
    let x = Input::from_matrix(array![[1.5], [-0.5]])?;
    let mut g = Hypergraph::new();
    let vw = g.add_parameter(&w, "W");
    let vx = g.add_input(&x, "x");
    let h = g.add_function::<MatrixMultiply>(&[vw, vx], "h")?;
    let t = g.add_function::<Tanh>(&[h], "t")?;
    g.add_function::<SumElements>(&[t], "s")?;

    let p1 = g.forward()?;
    let g1 = p1.backward()?;
    let p2 = g.forward()?;
    let g2 = p2.backward()?;
    assert_eq!(p1.values(), p2.values());
    assert_eq!(g1, g2);
    assert_eq!(g1.len(), g.len());
    // the parameter accumulated both passes
    let expected = g1.wrt(vw).unwrap() * 2.0;
    assert_eq!(w.grad()?, expected);
    Ok(())
}

#[test]
fn test_rebinding_input_changes_next_pass() -> Result<(), HypernetError> {
    let x = scalar_input(3.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    g.add_function::<CwiseMultiply>(&[vx, vx], "sq")?;

    assert_eq!(g.forward()?.into_output(), array![[9.0]]);
    x.set(array![[-2.0]])?;
    assert_eq!(g.forward()?.into_output(), array![[4.0]]);
    assert!(x.set(array![[1.0, 2.0]]).is_err());
    Ok(())
}

#[test]
fn test_shape_check_catches_misbehaving_function() -> Result<(), HypernetError> {
    let x = Input::new(Dim::new(2, 2));
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    g.add_function::<LyingShape>(&[vx], "lie")?;

    assert!(matches!(
        g.forward(),
        Err(HypernetError::ShapeMismatch { expected, .. }) if expected == Dim::new(2, 2)
    ));
    let pass = g.forward_with(EvalConfig::unchecked())?;
    assert_eq!(pass.output(), &array![[0.0]]);
    Ok(())
}

#[test]
fn test_finite_check_is_opt_in() -> Result<(), HypernetError> {
    let x = scalar_input(-1.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    g.add_function::<Log>(&[vx], "log")?;

    assert!(g.forward()?.output()[[0, 0]].is_nan());
    assert_eq!(
        g.forward_with(EvalConfig::strict()).unwrap_err(),
        HypernetError::NonFiniteValue {
            vertex: 1,
            name: "log".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_var_names_and_graphviz() -> Result<(), HypernetError> {
    let x = scalar_input(1.0);
    let y = scalar_input(2.0);
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    let vy = g.add_input(&y, "");
    g.add_function::<Sum>(&[vx, vy], "z")?;

    assert_eq!(g.var_names(), vec!["x", "v1", "z"]);
    let dot = g.to_graphviz();
    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.contains("  N0 [label=\"x = inputs(1,1)\"];"));
    assert!(dot.contains("  N2 [label=\"z = x + v1\"];"));
    assert!(dot.contains("  N0 -> N2;"));
    assert!(dot.contains("  N1 -> N2;"));
    assert!(dot.trim_end().ends_with('}'));
    Ok(())
}

#[test]
fn test_failed_backward_leaves_parameter_gradients_untouched() -> Result<(), HypernetError> {
    // 1/x overflows on the way back to the subnormal input
    let x = scalar_input(1e-320);
    let p = Parameter::from_matrix(array![[0.5]])?;
    let mut g = Hypergraph::new();
    let vx = g.add_input(&x, "x");
    let l = g.add_function::<Log>(&[vx], "l")?;
    let vp = g.add_parameter(&p, "p");
    g.add_function::<Sum>(&[l, vp], "s")?;

    let pass = g.forward_with(EvalConfig::strict())?;
    assert_eq!(
        pass.backward().unwrap_err(),
        HypernetError::NonFiniteValue {
            vertex: 0,
            name: "x".to_string()
        }
    );
    assert_eq!(p.grad()?, array![[0.0]]);

    // without the finite check the same graph completes and accumulates
    g.forward()?.backward()?;
    assert_eq!(p.grad()?, array![[1.0]]);
    Ok(())
}

#[test]
fn test_graph_evaluated_from_two_threads() -> Result<(), HypernetError> {
    let w = Parameter::from_matrix(array![[0.3, -0.2], [0.8, 0.5]])?;
    let x = Input::from_matrix(array![[1.0], [2.0]])?;
    let mut g = Hypergraph::new();
    let vw = g.add_parameter(&w, "W");
    let vx = g.add_input(&x, "x");
    let h = g.add_function::<MatrixMultiply>(&[vw, vx], "h")?;
    let t = g.add_function::<Tanh>(&[h], "t")?;
    g.add_function::<SumElements>(&[t], "s")?;

    let expected = g.forward()?.into_output();
    w.zero_grad()?;

    let graph = &g;
    let results: Vec<Result<(Matrix, Matrix), HypernetError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(move || -> Result<(Matrix, Matrix), HypernetError> {
                    let pass = graph.forward()?;
                    let grads = pass.backward()?;
                    Ok((pass.output().clone(), grads.wrt(vw).cloned().unwrap_or_default()))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("evaluation thread panicked"))
            .collect()
    });

    let mut per_thread = Vec::new();
    for result in results {
        let (output, grad_w) = result?;
        assert_eq!(output, expected);
        per_thread.push(grad_w);
    }
    assert_eq!(per_thread[0], per_thread[1]);
    // both passes accumulated into the shared parameter
    assert_eq!(w.grad()?, &per_thread[0] * 2.0);
    Ok(())
}
