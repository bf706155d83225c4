// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres, Bispos e Dama).

use crate::core::board::Board;
use crate::core::types::{Bitboard, Move, PieceKind};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Percorre cada raio até à primeira peça (inclusive) ou ao fim do tabuleiro.
fn ray_attacks(square: u8, occupancy: Bitboard, directions: &[(i8, i8); 4]) -> Bitboard {
    let mut attacks = 0u64;
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;

    for &(df, dr) in directions {
        let (mut f, mut r) = (file + df, rank + dr);
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let bb = 1u64 << (r * 8 + f) as u32;
            attacks |= bb;
            if occupancy & bb != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

pub fn bishop_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

pub fn rook_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

pub fn queen_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Função genérica para gerar lances de Torres, Bispos e Damas.
pub fn generate_sliding_moves(board: &Board, piece_kind: PieceKind, moves: &mut Vec<Move>) {
    let our_pieces = board.pieces_of(board.to_move);
    let all_pieces = board.occupied();

    let attacks_fn: fn(u8, Bitboard) -> Bitboard = match piece_kind {
        PieceKind::Bishop => bishop_attacks,
        PieceKind::Rook => rook_attacks,
        PieceKind::Queen => queen_attacks,
        other => unreachable!("{:?} is not a sliding piece", other),
    };

    let mut our_sliders = board.bitboard_of(piece_kind) & our_pieces;

    while our_sliders != 0 {
        let from_sq = our_sliders.trailing_zeros() as u8;
        let mut targets = attacks_fn(from_sq, all_pieces) & !our_pieces;

        while targets != 0 {
            let to_sq = targets.trailing_zeros() as u8;
            moves.push(Move::quiet(from_sq, to_sq));
            targets &= targets - 1;
        }

        our_sliders &= our_sliders - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        assert_eq!(rook_attacks(0, 0).count_ones(), 14);
        assert_eq!(rook_attacks(27, 0).count_ones(), 14);
    }

    #[test]
    fn bishop_rays_stop_at_first_blocker() {
        // Bispo em c1 com bloqueador em e3: vê b2, a3, d2, e3
        let blocker = 1u64 << 20;
        let attacks = bishop_attacks(2, blocker);
        assert_eq!(attacks, (1u64 << 9) | (1u64 << 16) | (1u64 << 11) | blocker);
    }

    #[test]
    fn queen_combines_both_patterns() {
        assert_eq!(queen_attacks(27, 0).count_ones(), 27);
    }
}
