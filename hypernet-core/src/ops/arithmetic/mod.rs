pub mod add;
pub mod identity;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::Sum;
pub use identity::Identity;
pub use mul::CwiseMultiply;
pub use neg::Negate;
pub use sub::ConstantMinusX;
