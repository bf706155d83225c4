pub mod alpha_beta;
pub mod driver;
pub mod evaluation;
pub mod move_ordering;

pub use alpha_beta::*;
pub use driver::*;
pub use evaluation::*;
pub use move_ordering::*;
