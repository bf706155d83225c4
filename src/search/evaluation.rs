use crate::core::types::*;
use crate::position::Position;

/// Pontuação em centipeões, sempre do ponto de vista das brancas.
pub type Score = i32;

/// Valor de mate (brancas dão mate = +MATE_SCORE).
pub const MATE_SCORE: Score = 1_000_000;
/// Acima deste módulo a pontuação codifica um mate forçado.
pub const MATE_THRESHOLD: Score = 900_000;
/// Janela inicial da busca.
pub const INFINITY: Score = 10_000_000;

// Valores das peças: Pawn, Knight, Bishop, Rook, Queen, King.
// O rei não tem valor material porque nunca é capturado.
const MATERIAL: [Score; 6] = [100, 320, 330, 500, 900, 0];

// Bónus por coluna, espelhada (a/h, b/g, c/f, d/e partilham a entrada).
static FILE_TABLES: [[Score; 4]; 6] = [
    [9, 9, 10, 13],      // Pawn
    [-38, -14, -1, 2],   // Knight
    [-13, 0, 1, 3],      // Bishop
    [-3, 1, 1, 1],       // Rook
    [-11, -2, 1, 1],     // Queen
    [0, 0, 0, 0],        // King
];

// Bónus por fila, contada a partir do lado do próprio jogador.
static RANK_TABLES: [[Score; 8]; 6] = [
    [-10, -9, -13, -5, 1, 7, 40, -10],  // Pawn
    [-25, -2, 11, 15, 14, 13, -1, -25], // Knight
    [-10, 1, 7, 5, 5, 3, 0, -10],       // Bishop
    [0, -2, -2, -2, -2, -2, 8, 0],      // Rook (bónus na 7ª fila)
    [-9, 1, 4, 5, 4, 3, 0, -9],         // Queen
    [0, 0, 0, 0, 0, 0, 0, 0],           // King
];

#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    MATERIAL[kind.index()]
}

/// Material + bónus posicional de uma peça, do ponto de vista do seu dono.
#[inline]
pub fn piece_square_score(piece: Piece, sq: Square) -> Score {
    let file = file_of(sq);
    let mirrored_file = if file < 4 { file } else { 7 - file };
    let own_rank = match piece.color {
        Color::White => rank_of(sq),
        Color::Black => 7 - rank_of(sq),
    };

    let k = piece.kind.index();
    MATERIAL[k] + FILE_TABLES[k][mirrored_file as usize] + RANK_TABLES[k][own_rank as usize]
}

/// Soma material e posicional de todas as peças, sem olhar para mates ou empates.
pub fn material_and_position<P: Position + ?Sized>(position: &P) -> Score {
    position
        .pieces()
        .into_iter()
        .map(|(sq, piece)| match piece.color {
            Color::White => piece_square_score(piece, sq),
            Color::Black => -piece_square_score(piece, sq),
        })
        .sum()
}

/// Avaliação heurística de uma posição.
///
/// Mate vale `±MATE_SCORE` a favor de quem não está a mover, empate vale 0,
/// e qualquer outra posição vale `material_and_position`. Sem normalização
/// pelo lado a mover: positivo favorece sempre as brancas.
pub fn evaluate<P: Position + ?Sized>(position: &P) -> Score {
    terminal_score(position).unwrap_or_else(|| material_and_position(position))
}

/// Pontuação de uma posição final (mate ou empate), ou `None` se o jogo continua.
pub fn terminal_score<P: Position + ?Sized>(position: &P) -> Option<Score> {
    if position.is_checkmate() {
        return Some(match position.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        });
    }
    position.is_draw().then_some(0)
}

#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() > MATE_THRESHOLD
}

/// Distância ao mate em meios-lances: positiva se as brancas dão mate,
/// negativa se são as pretas. `None` para pontuações normais.
pub fn mate_in_plies(score: Score) -> Option<i32> {
    if score > MATE_THRESHOLD {
        Some(MATE_SCORE - score)
    } else if score < -MATE_THRESHOLD {
        Some(-(MATE_SCORE + score))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardStack;

    fn eval_fen(fen: &str) -> Score {
        evaluate(&BoardStack::from_fen(fen).unwrap())
    }

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&BoardStack::new()), 0);
    }

    #[test]
    fn only_kings_is_exactly_zero() {
        assert_eq!(eval_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1"), 0);
    }

    #[test]
    fn mate_favours_the_side_not_to_move() {
        // Pretas em mate
        assert_eq!(eval_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1"), MATE_SCORE);
        // Brancas em mate
        assert_eq!(eval_fen("8/8/8/8/8/6k1/6q1/7K w - - 0 1"), -MATE_SCORE);
    }

    #[test]
    fn stalemate_is_zero_even_with_extra_material() {
        assert_eq!(eval_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), 0);
    }

    #[test]
    fn tables_are_indexed_by_mirrored_file_and_own_rank() {
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        // Cavalo branco em g1: coluna espelhada b (-14), fila 1 (-25)
        assert_eq!(piece_square_score(white_knight, 6), 320 - 14 - 25);
        // Cavalo preto em g8 vê a mesma tabela
        assert_eq!(piece_square_score(black_knight, 62), 320 - 14 - 25);
        // Peão branco em e7: coluna d/e (13), fila 7 (40)
        assert_eq!(piece_square_score(Piece::new(PieceKind::Pawn, Color::White), 52), 100 + 13 + 40);
        // O rei não conta
        assert_eq!(piece_square_score(Piece::new(PieceKind::King, Color::Black), 60), 0);
    }

    #[test]
    fn extra_white_rook_scores_positive() {
        // Torre branca em a1 (500 - 3 + 0), posição sem empate
        assert_eq!(eval_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"), 497);
        assert_eq!(eval_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1"), -497);
    }

    #[test]
    fn mate_distance_is_decoded() {
        assert_eq!(mate_in_plies(999_999), Some(1));
        assert_eq!(mate_in_plies(-999_997), Some(-3));
        assert_eq!(mate_in_plies(1_500), None);
        assert!(is_mate_score(-950_000));
        assert!(!is_mate_score(MATE_THRESHOLD));
    }
}
