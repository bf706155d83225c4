// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod king;
