// Alphabot - motor de xadrez Alpha-Beta de profundidade fixa

pub mod core;
pub mod moves;
pub mod position;
pub mod search;

pub use crate::core::*;
pub use position::Position;
pub use search::{choose_move, Driver, SearchConfig, SearchReport};
