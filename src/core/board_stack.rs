// Ficheiro: src/core/board_stack.rs
// Descrição: Tabuleiro com pilha de desfazer (make/undo) e histórico para repetições.

use super::board::Board;
use super::error::{FenError, MoveParseError};
use super::types::*;
use crate::position::Position;

/// Tabuleiro atual mais uma pilha de cópias anteriores, cada uma com o lance
/// que a fez avançar. `undo_move` recupera a cópia, por isso o estado
/// restaurado é idêntico bit a bit ao original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStack {
    board: Board,
    history: Vec<(Board, Move)>,
}

impl BoardStack {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Self {
        BoardStack { board, history: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::from_fen(fen).map(Self::with_board)
    }

    /// Estado atual do tabuleiro.
    #[inline]
    pub fn current(&self) -> &Board {
        &self.board
    }

    /// Número de lances atualmente aplicados sobre a posição inicial.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Posição espelhada (cores trocadas), sem histórico.
    pub fn mirrored(&self) -> Self {
        Self::with_board(self.board.mirrored())
    }

    /// Tripla repetição: a posição atual já apareceu pelo menos duas vezes
    /// desde o último lance irreversível.
    pub fn is_threefold_repetition(&self) -> bool {
        let hash = self.board.zobrist_hash;
        let seen = self
            .history
            .iter()
            .rev()
            .take(self.board.halfmove_clock as usize)
            .filter(|(earlier, _)| earlier.zobrist_hash == hash)
            .count();
        seen >= 2
    }

    /// Interpreta um lance em notação UCI ("e2e4", "e7e8q") contra os lances legais.
    pub fn parse_uci_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let malformed = || MoveParseError::Malformed(text.to_string());
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(malformed());
        }

        let from = parse_square(&text[0..2]).ok_or_else(malformed)?;
        let to = parse_square(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text.as_bytes().get(4) {
            None => None,
            Some(b'q') => Some(PieceKind::Queen),
            Some(b'r') => Some(PieceKind::Rook),
            Some(b'b') => Some(PieceKind::Bishop),
            Some(b'n') => Some(PieceKind::Knight),
            Some(_) => return Err(malformed()),
        };

        self.board
            .generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveParseError::Illegal(text.to_string()))
    }

    /// Aplica um lance UCI depois de o validar.
    pub fn apply_uci_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_uci_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }

    /// Conta as folhas da árvore de lances legais até à profundidade dada.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.board.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move(mv);
        }
        nodes
    }
}

impl Default for BoardStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Position for BoardStack {
    fn legal_moves(&self) -> Vec<Move> {
        self.board.generate_legal_moves()
    }

    fn make_move(&mut self, mv: Move) {
        debug_assert!(!mv.is_null(), "the null move is never applied");
        self.history.push((self.board, mv));
        self.board.make_move(mv);
    }

    fn undo_move(&mut self, mv: Move) {
        match self.history.pop() {
            Some((previous, applied)) if applied == mv => self.board = previous,
            Some((_, applied)) => panic!("undo_move({}) but the last move applied was {}", mv, applied),
            None => panic!("undo_move({}) with an empty history", mv),
        }
    }

    fn is_in_check(&self) -> bool {
        self.board.in_check()
    }

    fn is_checkmate(&self) -> bool {
        self.board.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.board.is_draw_by_fifty_moves()
            || self.board.is_draw_by_insufficient_material()
            || self.is_threefold_repetition()
            || self.board.is_stalemate()
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.board.is_capture(mv)
    }

    fn side_to_move(&self) -> Color {
        self.board.to_move
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    fn pieces(&self) -> Vec<(Square, Piece)> {
        let mut pieces = Vec::with_capacity(32);
        let mut occupied = self.board.occupied();
        while occupied != 0 {
            let sq = occupied.trailing_zeros() as u8;
            occupied &= occupied - 1;
            if let Some(piece) = self.board.piece_at(sq) {
                pieces.push((sq, piece));
            }
        }
        pieces
    }
}
