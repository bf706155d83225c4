//! Utilitários partilhados pelos testes de integração
#![allow(dead_code)]

use alphabot::search::{adjust_mate_distance, material_and_position, order_moves, terminal_score, Score, INFINITY};
use alphabot::{BoardStack, Color, Move, Position};

pub fn stack(fen: &str) -> BoardStack {
    BoardStack::from_fen(fen).unwrap_or_else(|e| panic!("bad fen {}: {}", fen, e))
}

/// Minimax sem poda, com a mesma ordenação e o mesmo desempate estrito.
pub fn minimax(position: &mut BoardStack, depth: u8) -> (Score, Move) {
    if let Some(score) = terminal_score(&*position) {
        return (score, Move::NULL);
    }
    if depth == 0 {
        return (material_and_position(&*position), Move::NULL);
    }

    let maximizing = position.side_to_move() == Color::White;
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = Move::NULL;

    let moves = position.legal_moves();
    for mv in order_moves(position, moves) {
        position.make_move(mv);
        let (score, _) = minimax(position, depth - 1);
        position.undo_move(mv);

        if (maximizing && score > best) || (!maximizing && score < best) {
            best = score;
            best_move = mv;
        }
    }
    (adjust_mate_distance(best), best_move)
}

pub mod positions {
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    pub const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    pub const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    pub const OPEN_CENTER: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq d3 0 3";

    pub const MATE_IN_1_WHITE: &str = "6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1"; // Re8#
    pub const MATE_IN_1_BLACK: &str = "4r1k1/8/8/8/8/8/5PPP/6K1 b - - 0 1"; // Re1#
    pub const MATE_IN_2_WHITE: &str = "7k/8/R7/1R6/8/8/8/K7 w - - 0 1"; // Rb7 Kg8 Ra8#
    pub const CHECKMATED_BLACK: &str = "7k/6Q1/6K1/8/8/8/8/8 b - - 0 1";
    pub const STALEMATE: &str = "k7/1R6/K7/8/8/8/8/8 b - - 0 1";
    pub const KINGS_ONLY: &str = "8/8/8/4k3/8/8/8/4K3 w - - 0 1";
}
