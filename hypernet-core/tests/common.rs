use hypernet_core::nn::Input;
use hypernet_core::Matrix;

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn input(values: Matrix) -> Input {
    Input::from_matrix(values).expect("test input fits in 16-bit dims")
}

#[allow(dead_code)]
pub(crate) fn scalar(m: &Matrix) -> f64 {
    assert_eq!(m.dim(), (1, 1), "expected a (1,1) matrix");
    m[[0, 0]]
}
