pub mod board;
pub mod board_stack;
pub mod error;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use board_stack::*;
pub use error::*;
pub use types::*;
pub use zobrist::*;
