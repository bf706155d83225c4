// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::error::FenError;
use super::types::*;
use super::zobrist::ZOBRIST_KEYS;
use crate::moves;
use crate::moves::king::king_attacks;
use crate::moves::knight::knight_attacks;
use crate::moves::pawn::pawn_attacks;
use crate::moves::sliding::{bishop_attacks, rook_attacks};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Direitos de roque. Bits: 0=K, 1=Q, 2=k, 3=q
pub const CASTLE_WHITE_KING: u8 = 0b0001;
pub const CASTLE_WHITE_QUEEN: u8 = 0b0010;
pub const CASTLE_BLACK_KING: u8 = 0b0100;
pub const CASTLE_BLACK_QUEEN: u8 = 0b1000;

/// Direitos que sobrevivem a um lance que toca a casa (origem ou destino).
const fn generate_castling_masks() -> [u8; 64] {
    let mut masks = [0b1111u8; 64];
    masks[0] = !CASTLE_WHITE_QUEEN & 0b1111; // a1
    masks[7] = !CASTLE_WHITE_KING & 0b1111; // h1
    masks[4] = !(CASTLE_WHITE_KING | CASTLE_WHITE_QUEEN) & 0b1111; // e1
    masks[56] = !CASTLE_BLACK_QUEEN & 0b1111; // a8
    masks[63] = !CASTLE_BLACK_KING & 0b1111; // h8
    masks[60] = !(CASTLE_BLACK_KING | CASTLE_BLACK_QUEEN) & 0b1111; // e8
    masks
}

static CASTLING_MASKS: [u8; 64] = generate_castling_masks();

// Casas claras (b1, d1, ...), usadas no empate por bispos da mesma cor.
const LIGHT_SQUARES: Bitboard = 0x55AA_55AA_55AA_55AA;

// A struct principal do tabuleiro, usando Bitboards.
// É Copy: a pilha de desfazer (BoardStack) guarda cópias inteiras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Bitboards para cada tipo de peça.
    pub pawns: Bitboard,
    pub knights: Bitboard,
    pub bishops: Bitboard,
    pub rooks: Bitboard,
    pub queens: Bitboard,
    pub kings: Bitboard,

    // Bitboards para as peças de cada cor.
    pub white_pieces: Bitboard,
    pub black_pieces: Bitboard,

    // De quem é a vez de jogar.
    pub to_move: Color,

    pub en_passant_target: Option<u8>,
    pub castling_rights: u8,

    // Para detecção de empates
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub zobrist_hash: u64,
}

impl Board {
    fn empty() -> Self {
        Board {
            pawns: 0, knights: 0, bishops: 0, rooks: 0, queens: 0, kings: 0,
            white_pieces: 0, black_pieces: 0,
            to_move: Color::White,
            en_passant_target: None,
            castling_rights: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            zobrist_hash: 0,
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão usando bitboards.
    pub fn new() -> Self {
        const RANK_1: Bitboard = 0x0000_0000_0000_00FF;
        const RANK_2: Bitboard = 0x0000_0000_0000_FF00;
        const RANK_7: Bitboard = 0x00FF_0000_0000_0000;
        const RANK_8: Bitboard = 0xFF00_0000_0000_0000;

        let mut board = Board {
            pawns: RANK_2 | RANK_7,
            knights: 0x4200_0000_0000_0042,
            bishops: 0x2400_0000_0000_0024,
            rooks: 0x8100_0000_0000_0081,
            queens: 0x0800_0000_0000_0008,
            kings: 0x1000_0000_0000_0010,
            white_pieces: RANK_1 | RANK_2,
            black_pieces: RANK_7 | RANK_8,
            castling_rights: 0b1111, // Todos os roques inicialmente permitidos
            ..Board::empty()
        };

        board.zobrist_hash = board.compute_zobrist_hash();
        board
    }

    /// Cria um novo tabuleiro a partir de uma string FEN.
    /// Os contadores de lances são opcionais.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut board = Board::empty();

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RankCount(rows.len()));
        }

        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for ch in row.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(FenError::RankWidth { rank: rank as usize + 1 });
                    }
                    continue;
                }
                let piece = Piece::from_fen_char(ch).ok_or(FenError::Piece(ch))?;
                if file >= 8 {
                    return Err(FenError::RankWidth { rank: rank as usize + 1 });
                }
                if piece.kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                    return Err(FenError::PawnRank);
                }
                board.set_bits(make_square(file, rank), piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank as usize + 1 });
            }
        }

        board.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for ch in parts[2].chars() {
                board.castling_rights |= match ch {
                    'K' => CASTLE_WHITE_KING,
                    'Q' => CASTLE_WHITE_QUEEN,
                    'k' => CASTLE_BLACK_KING,
                    'q' => CASTLE_BLACK_QUEEN,
                    _ => return Err(FenError::Castling(parts[2].to_string())),
                };
            }
        }

        if parts[3] != "-" {
            // Casa vazia atrás de um peão inimigo que acabou de avançar duas casas
            let ep = parse_square(parts[3])
                .filter(|&sq| {
                    let (rank, pushed) = match board.to_move {
                        Color::White => (5, sq.wrapping_sub(8)),
                        Color::Black => (2, sq + 8),
                    };
                    rank_of(sq) == rank
                        && board.occupied() & (1u64 << sq) == 0
                        && board.pieces_of(!board.to_move) & board.pawns & (1u64 << pushed) != 0
                })
                .ok_or_else(|| FenError::EnPassant(parts[3].to_string()))?;
            board.en_passant_target = Some(ep);
        }

        if let Some(halfmove) = parts.get(4) {
            board.halfmove_clock = halfmove.parse().map_err(|_| FenError::Counter(halfmove.to_string()))?;
        }
        if let Some(fullmove) = parts.get(5) {
            board.fullmove_number = fullmove.parse().map_err(|_| FenError::Counter(fullmove.to_string()))?;
        }

        if (board.kings & board.white_pieces).count_ones() != 1
            || (board.kings & board.black_pieces).count_ones() != 1
        {
            return Err(FenError::Kings);
        }

        board.zobrist_hash = board.compute_zobrist_hash();
        Ok(board)
    }

    /// Escreve a posição em notação FEN.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(make_square(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.to_move == Color::White { 'w' } else { 'b' });
        fen.push(' ');

        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (bit, ch) in [(CASTLE_WHITE_KING, 'K'), (CASTLE_WHITE_QUEEN, 'Q'), (CASTLE_BLACK_KING, 'k'), (CASTLE_BLACK_QUEEN, 'q')] {
                if self.castling_rights & bit != 0 {
                    fen.push(ch);
                }
            }
        }

        let ep = self.en_passant_target.map(square_name).unwrap_or_else(|| "-".to_string());
        fen.push_str(&format!(" {} {} {}", ep, self.halfmove_clock, self.fullmove_number));
        fen
    }

    #[inline]
    pub fn pieces_of(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white_pieces,
            Color::Black => self.black_pieces,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white_pieces | self.black_pieces
    }

    #[inline]
    pub fn bitboard_of(&self, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawns,
            PieceKind::Knight => self.knights,
            PieceKind::Bishop => self.bishops,
            PieceKind::Rook => self.rooks,
            PieceKind::Queen => self.queens,
            PieceKind::King => self.kings,
        }
    }

    fn bitboard_of_mut(&mut self, kind: PieceKind) -> &mut Bitboard {
        match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => &mut self.kings,
        }
    }

    /// Peça na casa indicada.
    ///
    /// Entra em pânico se a casa estiver ocupada sem nenhum tipo de peça:
    /// bitboards incoerentes estragariam a avaliação sem qualquer sintoma.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let bb = 1u64 << sq;
        let color = if self.white_pieces & bb != 0 {
            Color::White
        } else if self.black_pieces & bb != 0 {
            Color::Black
        } else {
            return None;
        };

        let kind = PieceKind::ALL
            .into_iter()
            .find(|&kind| self.bitboard_of(kind) & bb != 0)
            .unwrap_or_else(|| panic!("square {} is occupied but holds no piece kind", square_name(sq)));
        Some(Piece::new(kind, color))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king_bb = self.kings & self.pieces_of(color);
        (king_bb != 0).then(|| king_bb.trailing_zeros() as u8)
    }

    // Só mexe nos bitboards; o hash é tratado por quem chama.
    fn set_bits(&mut self, sq: Square, piece: Piece) {
        let bb = 1u64 << sq;
        *self.bitboard_of_mut(piece.kind) |= bb;
        match piece.color {
            Color::White => self.white_pieces |= bb,
            Color::Black => self.black_pieces |= bb,
        }
    }

    fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.set_bits(sq, piece);
        self.zobrist_hash ^= ZOBRIST_KEYS.piece(piece, sq);
    }

    fn remove_piece(&mut self, sq: Square, piece: Piece) {
        let bb = !(1u64 << sq);
        *self.bitboard_of_mut(piece.kind) &= bb;
        match piece.color {
            Color::White => self.white_pieces &= bb,
            Color::Black => self.black_pieces &= bb,
        }
        self.zobrist_hash ^= ZOBRIST_KEYS.piece(piece, sq);
    }

    /// Executa um lance, atualizando o estado do tabuleiro e o hash Zobrist.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.to_move;
        let moving = match self.piece_at(mv.from) {
            Some(piece) if piece.color == us => piece,
            other => panic!("make_move {}: origin holds {:?}, {:?} to move", mv, other, us),
        };

        // Hash Zobrist - remove estado atual
        if let Some(ep) = self.en_passant_target {
            self.zobrist_hash ^= ZOBRIST_KEYS.en_passant[(ep % 8) as usize];
        }
        self.zobrist_hash ^= ZOBRIST_KEYS.castling[self.castling_rights as usize];

        let mut is_capture = false;
        if mv.is_en_passant {
            let captured_sq = if us == Color::White { mv.to - 8 } else { mv.to + 8 };
            self.remove_piece(captured_sq, Piece::new(PieceKind::Pawn, !us));
            is_capture = true;
        } else if let Some(captured) = self.piece_at(mv.to) {
            self.remove_piece(mv.to, captured);
            is_capture = true;
        }

        self.remove_piece(mv.from, moving);
        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, us),
            None => moving,
        };
        self.put_piece(mv.to, placed);

        if mv.is_castling {
            let (rook_from, rook_to) = match mv.to {
                6 => (7, 5),    // h1 -> f1
                2 => (0, 3),    // a1 -> d1
                62 => (63, 61), // h8 -> f8
                58 => (56, 59), // a8 -> d8
                _ => unreachable!("castling move to {}", square_name(mv.to)),
            };
            let rook = Piece::new(PieceKind::Rook, us);
            self.remove_piece(rook_from, rook);
            self.put_piece(rook_to, rook);
        }

        self.en_passant_target = None;
        if moving.kind == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
            self.en_passant_target = Some((mv.from + mv.to) / 2);
        }

        self.castling_rights &= CASTLING_MASKS[mv.from as usize] & CASTLING_MASKS[mv.to as usize];

        if moving.kind == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.to_move = !us;

        // Hash Zobrist - adiciona novo estado
        self.zobrist_hash ^= ZOBRIST_KEYS.side_to_move;
        if let Some(ep) = self.en_passant_target {
            self.zobrist_hash ^= ZOBRIST_KEYS.en_passant[(ep % 8) as usize];
        }
        self.zobrist_hash ^= ZOBRIST_KEYS.castling[self.castling_rights as usize];
    }

    /// O lance captura alguma peça (incluindo en passant)?
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_en_passant || self.pieces_of(!self.to_move) & (1u64 << mv.to) != 0
    }

    /// Verifica se uma casa é atacada por peças da cor especificada
    pub fn is_square_attacked_by(&self, square: Square, attacking_color: Color) -> bool {
        let attackers = self.pieces_of(attacking_color);
        if attackers == 0 {
            return false;
        }
        let occupied = self.occupied();

        // Um peão da cor atacante ataca `square` se estiver numa casa que um
        // peão da cor oposta, colocado em `square`, atacaria.
        pawn_attacks(!attacking_color, square) & self.pawns & attackers != 0
            || knight_attacks(square) & self.knights & attackers != 0
            || king_attacks(square) & self.kings & attackers != 0
            || bishop_attacks(square, occupied) & (self.bishops | self.queens) & attackers != 0
            || rook_attacks(square, occupied) & (self.rooks | self.queens) & attackers != 0
    }

    /// Verifica se o rei da cor especificada está em xeque
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked_by(sq, !color),
            None => false,
        }
    }

    /// O jogador a mover está em xeque?
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_in_check(self.to_move)
    }

    /// Gera todos os lances pseudo-legais para o jogador atual.
    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        moves::pawn::generate_pawn_moves(self, &mut moves);
        moves::knight::generate_knight_moves(self, &mut moves);
        moves::sliding::generate_sliding_moves(self, PieceKind::Bishop, &mut moves);
        moves::sliding::generate_sliding_moves(self, PieceKind::Rook, &mut moves);
        moves::sliding::generate_sliding_moves(self, PieceKind::Queen, &mut moves);
        moves::king::generate_king_moves(self, &mut moves);

        moves
    }

    /// Verifica se um lance pseudo-legal não deixa o próprio rei em xeque
    pub fn is_legal_move(&self, mv: Move) -> bool {
        let mut temp = *self;
        temp.make_move(mv);
        !temp.is_king_in_check(self.to_move)
    }

    /// Gera apenas lances legais
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        self.generate_pseudo_legal_moves()
            .into_iter()
            .filter(|&mv| self.is_legal_move(mv))
            .collect()
    }

    fn has_legal_move(&self) -> bool {
        self.generate_pseudo_legal_moves()
            .into_iter()
            .any(|mv| self.is_legal_move(mv))
    }

    /// Verifica se a posição atual é xeque-mate
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    /// Verifica se a posição atual é empate por afogamento
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    /// Verifica se há empate por material insuficiente
    pub fn is_draw_by_insufficient_material(&self) -> bool {
        let piece_count = self.occupied().count_ones();

        // King vs King
        if piece_count == 2 {
            return true;
        }

        let heavy_or_pawns = self.pawns | self.rooks | self.queens;

        // King + minor piece vs King
        if piece_count == 3 && heavy_or_pawns == 0 {
            return (self.knights | self.bishops).count_ones() == 1;
        }

        // King + Bishop vs King + Bishop (bispos na mesma cor de casa)
        if piece_count == 4 && (heavy_or_pawns | self.knights) == 0 {
            let white_bishops = self.bishops & self.white_pieces;
            let black_bishops = self.bishops & self.black_pieces;

            if white_bishops.count_ones() == 1 && black_bishops.count_ones() == 1 {
                let white_on_light = white_bishops & LIGHT_SQUARES != 0;
                let black_on_light = black_bishops & LIGHT_SQUARES != 0;
                return white_on_light == black_on_light;
            }
        }

        false
    }

    /// Verifica se há empate pela regra dos 50 lances
    pub fn is_draw_by_fifty_moves(&self) -> bool {
        self.halfmove_clock >= 100 // 50 lances = 100 meios-lances
    }

    /// Calcula o hash Zobrist da posição atual do zero
    pub fn compute_zobrist_hash(&self) -> u64 {
        let mut hash = 0u64;

        let mut occupied = self.occupied();
        while occupied != 0 {
            let sq = occupied.trailing_zeros() as u8;
            occupied &= occupied - 1;
            if let Some(piece) = self.piece_at(sq) {
                hash ^= ZOBRIST_KEYS.piece(piece, sq);
            }
        }

        hash ^= ZOBRIST_KEYS.castling[self.castling_rights as usize];
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST_KEYS.en_passant[(ep % 8) as usize];
        }
        if self.to_move == Color::Black {
            hash ^= ZOBRIST_KEYS.side_to_move;
        }

        hash
    }

    /// Posição espelhada: cores trocadas e filas invertidas (a2 <-> a7).
    pub fn mirrored(&self) -> Board {
        let flip = |bb: Bitboard| bb.swap_bytes();
        let rights = self.castling_rights;

        let mut board = Board {
            pawns: flip(self.pawns),
            knights: flip(self.knights),
            bishops: flip(self.bishops),
            rooks: flip(self.rooks),
            queens: flip(self.queens),
            kings: flip(self.kings),
            white_pieces: flip(self.black_pieces),
            black_pieces: flip(self.white_pieces),
            to_move: !self.to_move,
            en_passant_target: self.en_passant_target.map(|sq| sq ^ 56),
            castling_rights: ((rights & 0b0011) << 2) | ((rights & 0b1100) >> 2),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            zobrist_hash: 0,
        };
        board.zobrist_hash = board.compute_zobrist_hash();
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
