// Zobrist hashing para detecção de repetições
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::*;

// Semente fixa: o mesmo tabuleiro tem o mesmo hash em todas as execuções.
const ZOBRIST_SEED: u64 = 0x5EED_A1FA_BE7A_2024;

pub struct ZobristKeys {
    pub pieces: [[[u64; 64]; 6]; 2], // [color][piece_type][square]
    pub castling: [u64; 16],         // Para direitos de roque
    pub en_passant: [u64; 8],        // Para en passant por coluna
    pub side_to_move: u64,           // Para quem joga
}

impl ZobristKeys {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            castling: [0; 16],
            en_passant: [0; 8],
            side_to_move: 0,
        };

        for color in keys.pieces.iter_mut() {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        for key in keys.castling.iter_mut() {
            *key = rng.gen();
        }
        for key in keys.en_passant.iter_mut() {
            *key = rng.gen();
        }
        keys.side_to_move = rng.gen();

        keys
    }

    #[inline]
    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()][sq as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

// Instância global das chaves Zobrist
lazy_static::lazy_static! {
    pub static ref ZOBRIST_KEYS: ZobristKeys = ZobristKeys::new();
}
