// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::board::Board;
use crate::core::types::{Bitboard, Move};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// Gera a tabela de ataques de cavalo para todas as 64 casas.
const fn generate_knight_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut attack_bb = 0u64;
        let mut i = 0;

        while i < KNIGHT_DELTAS.len() {
            let f = file + KNIGHT_DELTAS[i].0;
            let r = rank + KNIGHT_DELTAS[i].1;
            // Descarta saltos que saem do tabuleiro
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                attack_bb |= 1u64 << ((r * 8 + f) as u32);
            }
            i += 1;
        }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de cavalo para cada casa do tabuleiro.
static KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks_table();

/// Obtém o bitboard de ataque para um cavalo numa dada casa.
#[inline]
pub fn knight_attacks(square: u8) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Gera todos os lances pseudo-legais para os cavalos do jogador atual.
pub fn generate_knight_moves(board: &Board, moves: &mut Vec<Move>) {
    let our_pieces = board.pieces_of(board.to_move);
    let mut our_knights = board.knights & our_pieces;

    while our_knights != 0 {
        let from_sq = our_knights.trailing_zeros() as u8;
        let mut targets = knight_attacks(from_sq) & !our_pieces;

        while targets != 0 {
            let to_sq = targets.trailing_zeros() as u8;
            moves.push(Move::quiet(from_sq, to_sq));
            targets &= targets - 1;
        }
        our_knights &= our_knights - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_knight_has_two_targets() {
        // a1 -> b3, c2
        assert_eq!(knight_attacks(0), (1u64 << 17) | (1u64 << 10));
    }

    #[test]
    fn central_knight_has_eight_targets() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
    }

    #[test]
    fn edge_knight_does_not_wrap() {
        // h4 só ataca casas nas colunas f e g
        let attacks = knight_attacks(31);
        assert_eq!(attacks.count_ones(), 4);
        assert_eq!(attacks & 0x0303030303030303, 0);
    }
}
