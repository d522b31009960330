//! Parameter and input providers bound into hypergraphs.

pub mod init;
pub mod input;
pub mod parameter;
pub mod store;

pub use input::Input;
pub use parameter::Parameter;
pub use store::ParameterStore;
