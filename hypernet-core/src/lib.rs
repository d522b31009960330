//! # hypernet-core
//!
//! Reverse-mode automatic differentiation over an explicit expression
//! hypergraph. Vertices hold intermediate matrices, hyperedges are
//! differentiable functions of zero or more vertices.
//!
//! A graph is built once with [`Hypergraph::add_parameter`],
//! [`Hypergraph::add_input`] and [`Hypergraph::add_function`], then
//! evaluated any number of times:
//!
//! ```
//! use hypernet_core::nn::Input;
//! use hypernet_core::ops::{CwiseMultiply, SumElements};
//! use hypernet_core::{Dim, Hypergraph};
//! use ndarray::array;
//!
//! let x = Input::from_matrix(array![[4.0]]).unwrap();
//! let y = Input::from_matrix(array![[-3.0]]).unwrap();
//!
//! let mut graph = Hypergraph::new();
//! let vx = graph.add_input(&x, "x");
//! let vy = graph.add_input(&y, "y");
//! let z = graph.add_function::<CwiseMultiply>(&[vx, vy], "z").unwrap();
//! let _loss = graph.add_function::<SumElements>(&[z], "loss").unwrap();
//!
//! let pass = graph.forward().unwrap();
//! assert_eq!(pass.output()[[0, 0]], -12.0);
//!
//! let grads = pass.backward().unwrap();
//! assert_eq!(grads.wrt(vx).unwrap()[[0, 0]], -3.0);
//! assert_eq!(grads.wrt(vy).unwrap()[[0, 0]], 4.0);
//! assert_eq!(graph.dim(z), Some(Dim::default()));
//! ```

pub mod autograd;
pub mod dim;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::Function;
pub use dim::Dim;
pub use error::HypernetError;
pub use graph::{EdgeId, EvalConfig, ForwardPass, Gradients, Hypergraph, VertexId};
pub use matrix::Matrix;
