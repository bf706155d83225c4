// Ficheiro: src/position.rs
// Descrição: Interface entre o núcleo de busca e o tabuleiro.
//
// A busca, a avaliação e a ordenação de lances só conhecem este trait; a
// representação do tabuleiro, a geração de lances e as regras de empate
// ficam do lado do colaborador (ver `core::BoardStack`).

use crate::core::types::{Color, Move, Piece, Square};

pub trait Position {
    /// Lances legais do jogador a mover. Vazio apenas no fim do jogo.
    fn legal_moves(&self) -> Vec<Move>;

    /// Aplica o lance no lugar. Cada chamada tem de ser emparelhada com um
    /// `undo_move` do mesmo lance, por ordem LIFO.
    fn make_move(&mut self, mv: Move);

    /// Inverso exato do `make_move` mais recente.
    fn undo_move(&mut self, mv: Move);

    fn is_in_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn is_capture(&self, mv: Move) -> bool;

    fn side_to_move(&self) -> Color;
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Todas as peças no tabuleiro, com as respetivas casas.
    fn pieces(&self) -> Vec<(Square, Piece)> {
        (0..64u8)
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
            .collect()
    }
}
