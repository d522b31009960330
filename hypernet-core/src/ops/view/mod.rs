//! Functions that rearrange values without arithmetic on them.

pub mod concat;
pub mod max_pool;

pub use concat::Concatenate;
pub use max_pool::MaxPooling1D;
