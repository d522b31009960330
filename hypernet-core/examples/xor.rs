//! # Training a small XOR network
//!
//! Builds a two-layer tanh network as a hypergraph, then trains it with
//! plain SGD on the four XOR points, rebinding the input between passes.
//!
//! 1. Parameters live in a `ParameterStore`; the graph only holds handles.
//! 2. One graph is built once and evaluated for every example.
//! 3. Each step: `zero_grad`, `forward`, `backward`, `step`.
//!
//! Run with `RUST_LOG=info cargo run --example xor`.

use hypernet_core::nn::{init, Input, ParameterStore};
use hypernet_core::ops::{MatrixMultiply, SquaredDistance, Sum, Tanh};
use hypernet_core::optim::{Optimizer, SgdConfig, SgdOptimizer};
use hypernet_core::{Dim, Hypergraph, HypernetError};
use log::info;
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

const HIDDEN: u16 = 8;
const EPOCHS: usize = 500;

fn main() -> Result<(), HypernetError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut store = ParameterStore::new();
    let w1 = store.add_parameters(Dim::new(HIDDEN, 2), "W1");
    w1.set_value(init::xavier_uniform(w1.dim(), &mut rng)?)?;
    let b1 = store.add_parameters(Dim::vector(HIDDEN), "b1");
    let w2 = store.add_parameters(Dim::new(1, HIDDEN), "W2");
    w2.set_value(init::xavier_uniform(w2.dim(), &mut rng)?)?;
    let b2 = store.add_parameters(Dim::default(), "b2");
    info!("model has {} learnable values", store.num_elements());

    let x = Input::new(Dim::vector(2));
    let y = Input::new(Dim::default());

    let mut g = Hypergraph::new();
    let vw1 = g.add_parameter(&w1, "W1");
    let vb1 = g.add_parameter(&b1, "b1");
    let vw2 = g.add_parameter(&w2, "W2");
    let vb2 = g.add_parameter(&b2, "b2");
    let vx = g.add_input(&x, "x");
    let vy = g.add_input(&y, "y");
    let a1 = g.add_function::<MatrixMultiply>(&[vw1, vx], "a1")?;
    let z1 = g.add_function::<Sum>(&[a1, vb1], "z1")?;
    let h = g.add_function::<Tanh>(&[z1], "h")?;
    let a2 = g.add_function::<MatrixMultiply>(&[vw2, h], "a2")?;
    let pred = g.add_function::<Sum>(&[a2, vb2], "pred")?;
    g.add_function::<SquaredDistance>(&[pred, vy], "loss")?;

    println!("{}", g.to_graphviz());

    let data = [
        (array![[-1.0], [-1.0]], -1.0),
        (array![[-1.0], [1.0]], 1.0),
        (array![[1.0], [-1.0]], 1.0),
        (array![[1.0], [1.0]], -1.0),
    ];

    let mut optimizer = SgdOptimizer::new(store.parameters().to_vec(), SgdConfig::with_learning_rate(0.05))?;
    for epoch in 0..EPOCHS {
        let mut loss = 0.0;
        for (xv, yv) in &data {
            x.set(xv.clone())?;
            y.set(array![[*yv]])?;
            optimizer.zero_grad()?;
            let pass = g.forward()?;
            loss += pass.output()[[0, 0]];
            pass.backward()?;
            optimizer.step()?;
        }
        if epoch % 50 == 0 || epoch + 1 == EPOCHS {
            info!("epoch {:>4}: loss {:.6}", epoch, loss / data.len() as f64);
        }
    }

    for (xv, yv) in &data {
        x.set(xv.clone())?;
        let pass = g.forward()?;
        let out = pass.value(pred).map(|m| m[[0, 0]]).unwrap_or(f64::NAN);
        info!("x = ({}, {}) -> {:.3} (target {})", xv[[0, 0]], xv[[1, 0]], out, yv);
    }
    Ok(())
}
