// Ficheiro: src/core/error.rs
// Descrição: Erros recuperáveis nas fronteiras do motor (FEN e lances UCI).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid FEN: expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid FEN: rank {rank} does not describe 8 squares")]
    RankWidth { rank: usize },
    #[error("invalid FEN: unknown piece '{0}'")]
    Piece(char),
    #[error("invalid FEN: side to move must be 'w' or 'b', found '{0}'")]
    SideToMove(String),
    #[error("invalid FEN: bad castling field '{0}'")]
    Castling(String),
    #[error("invalid FEN: bad en passant square '{0}'")]
    EnPassant(String),
    #[error("invalid FEN: bad move counter '{0}'")]
    Counter(String),
    #[error("invalid FEN: each side needs exactly one king")]
    Kings,
    #[error("invalid FEN: pawn on the first or last rank")]
    PawnRank,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("malformed move '{0}'")]
    Malformed(String),
    #[error("illegal move '{0}' in this position")]
    Illegal(String),
}
