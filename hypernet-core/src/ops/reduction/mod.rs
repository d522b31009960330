pub mod sum;

pub use sum::SumElements;
