// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei, incluindo o roque.

use crate::core::board::{Board, CASTLE_BLACK_KING, CASTLE_BLACK_QUEEN, CASTLE_WHITE_KING, CASTLE_WHITE_QUEEN};
use crate::core::types::{Bitboard, Color, Move, PieceKind};

/// Gera a tabela de ataques de rei para todas as 64 casas.
const fn generate_king_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let king_pos = 1u64 << square;
        let file = square % 8;
        let rank = square / 8;
        let mut attack_bb = 0u64;

        // Movimentos de um passo em todas as 8 direções.
        if file > 0 { attack_bb |= king_pos >> 1; }
        if file < 7 { attack_bb |= king_pos << 1; }
        if rank > 0 { attack_bb |= king_pos >> 8; }
        if rank < 7 { attack_bb |= king_pos << 8; }
        if file > 0 && rank > 0 { attack_bb |= king_pos >> 9; }
        if file < 7 && rank > 0 { attack_bb |= king_pos >> 7; }
        if file > 0 && rank < 7 { attack_bb |= king_pos << 7; }
        if file < 7 && rank < 7 { attack_bb |= king_pos << 9; }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de rei para cada casa do tabuleiro.
static KING_ATTACKS: [Bitboard; 64] = generate_king_attacks_table();

#[inline]
pub fn king_attacks(square: u8) -> Bitboard {
    KING_ATTACKS[square as usize]
}

// Descrição de um roque: direito necessário, casas do rei, casas que devem
// estar vazias e casas que não podem estar atacadas.
struct CastleSpec {
    right: u8,
    king_from: u8,
    king_to: u8,
    rook_from: u8,
    must_be_empty: Bitboard,
    must_be_safe: [u8; 3],
}

const WHITE_CASTLES: [CastleSpec; 2] = [
    CastleSpec { right: CASTLE_WHITE_KING, king_from: 4, king_to: 6, rook_from: 7, must_be_empty: 0x60, must_be_safe: [4, 5, 6] },
    CastleSpec { right: CASTLE_WHITE_QUEEN, king_from: 4, king_to: 2, rook_from: 0, must_be_empty: 0x0e, must_be_safe: [4, 3, 2] },
];

const BLACK_CASTLES: [CastleSpec; 2] = [
    CastleSpec { right: CASTLE_BLACK_KING, king_from: 60, king_to: 62, rook_from: 63, must_be_empty: 0x6000_0000_0000_0000, must_be_safe: [60, 61, 62] },
    CastleSpec { right: CASTLE_BLACK_QUEEN, king_from: 60, king_to: 58, rook_from: 56, must_be_empty: 0x0e00_0000_0000_0000, must_be_safe: [60, 59, 58] },
];

/// Gera todos os lances pseudo-legais para o rei do jogador atual.
pub fn generate_king_moves(board: &Board, moves: &mut Vec<Move>) {
    let us = board.to_move;
    let our_pieces = board.pieces_of(us);
    let our_king = board.kings & our_pieces;

    if our_king == 0 { return; } // Sem rei (posição anormal)

    let from_sq = our_king.trailing_zeros() as u8;
    let mut targets = king_attacks(from_sq) & !our_pieces;

    while targets != 0 {
        let to_sq = targets.trailing_zeros() as u8;
        moves.push(Move::quiet(from_sq, to_sq));
        targets &= targets - 1;
    }

    let castles = if us == Color::White { &WHITE_CASTLES } else { &BLACK_CASTLES };
    let occupied = board.occupied();
    let our_rooks = board.bitboard_of(PieceKind::Rook) & our_pieces;

    for spec in castles {
        if board.castling_rights & spec.right == 0 { continue; }
        if from_sq != spec.king_from || our_rooks & (1u64 << spec.rook_from) == 0 { continue; }
        if occupied & spec.must_be_empty != 0 { continue; }
        if spec.must_be_safe.iter().any(|&sq| board.is_square_attacked_by(sq, !us)) { continue; }

        moves.push(Move { is_castling: true, ..Move::quiet(spec.king_from, spec.king_to) });
    }
}
