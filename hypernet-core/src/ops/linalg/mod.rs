pub mod matmul;
pub mod transpose;

pub use matmul::MatrixMultiply;
pub use transpose::Transpose;
