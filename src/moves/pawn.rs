// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões (avanços, capturas, promoções e en passant).

use crate::core::board::Board;
use crate::core::types::{rank_of, Bitboard, Color, Move, PieceKind};

const NOT_A_FILE: Bitboard = 0xfefe_fefe_fefe_fefe;
const NOT_H_FILE: Bitboard = 0x7f7f_7f7f_7f7f_7f7f;

const PROMOTION_KINDS: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

/// Casas atacadas por um peão da cor indicada que esteja em `square`.
#[inline]
pub fn pawn_attacks(color: Color, square: u8) -> Bitboard {
    let bb = 1u64 << square;
    match color {
        Color::White => ((bb << 7) & NOT_H_FILE) | ((bb << 9) & NOT_A_FILE),
        Color::Black => ((bb >> 7) & NOT_A_FILE) | ((bb >> 9) & NOT_H_FILE),
    }
}

fn push_with_promotions(moves: &mut Vec<Move>, from: u8, to: u8, promotes: bool) {
    if promotes {
        for kind in PROMOTION_KINDS {
            moves.push(Move { promotion: Some(kind), ..Move::quiet(from, to) });
        }
    } else {
        moves.push(Move::quiet(from, to));
    }
}

/// Gera todos os lances pseudo-legais para os peões do jogador atual.
pub fn generate_pawn_moves(board: &Board, moves: &mut Vec<Move>) {
    let us = board.to_move;
    let our_pawns = board.pawns & board.pieces_of(us);
    let enemies = board.pieces_of(!us);
    let empty = !board.occupied();

    let (start_rank, last_rank, forward): (u8, u8, i8) = match us {
        Color::White => (1, 7, 8),
        Color::Black => (6, 0, -8),
    };

    let mut bb = our_pawns;
    while bb != 0 {
        let from = bb.trailing_zeros() as u8;
        bb &= bb - 1;

        // Avanço simples e duplo
        let one = (from as i8 + forward) as u8;
        if empty & (1u64 << one) != 0 {
            push_with_promotions(moves, from, one, rank_of(one) == last_rank);

            if rank_of(from) == start_rank {
                let two = (one as i8 + forward) as u8;
                if empty & (1u64 << two) != 0 {
                    moves.push(Move::quiet(from, two));
                }
            }
        }

        // Capturas normais
        let attacks = pawn_attacks(us, from);
        let mut captures = attacks & enemies;
        while captures != 0 {
            let to = captures.trailing_zeros() as u8;
            captures &= captures - 1;
            push_with_promotions(moves, from, to, rank_of(to) == last_rank);
        }

        // En passant
        if let Some(ep) = board.en_passant_target {
            if attacks & (1u64 << ep) != 0 {
                moves.push(Move { is_en_passant: true, ..Move::quiet(from, ep) });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_attacks_do_not_wrap_around_files() {
        // a2 branco só ataca b3
        assert_eq!(pawn_attacks(Color::White, 8), 1u64 << 17);
        // h7 preto só ataca g6
        assert_eq!(pawn_attacks(Color::Black, 55), 1u64 << 46);
        // d4 branco ataca c5 e e5
        assert_eq!(pawn_attacks(Color::White, 27), (1u64 << 34) | (1u64 << 36));
    }

    #[test]
    fn promotion_generates_four_moves() {
        let board = Board::from_fen("8/4P3/8/8/8/k7/8/K7 w - - 0 1").unwrap();
        let mut moves = Vec::new();
        generate_pawn_moves(&board, &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promotion.is_some() && m.to == 60));
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let mut moves = Vec::new();
        generate_pawn_moves(&board, &mut moves);
        assert!(moves.iter().any(|m| m.is_en_passant && m.from == 36 && m.to == 43));
    }
}
