use log::warn;

use crate::core::types::{Color, Move};
use crate::position::Position;
use crate::search::evaluation::{material_and_position, terminal_score, Score, INFINITY, MATE_THRESHOLD};
use crate::search::move_ordering::order_moves;

/// Pior pontuação possível para o lado que maximiza / minimiza.
#[inline]
fn worst_score(maximizing: bool) -> Score {
    if maximizing { -INFINITY } else { INFINITY }
}

/// `candidate` é estritamente melhor que `best` para o lado a mover?
#[inline]
fn improves(maximizing: bool, candidate: Score, best: Score) -> bool {
    if maximizing { candidate > best } else { candidate < best }
}

/// Afasta um mate de um meio-lance por cada nível que sobe na árvore:
/// mate em N meios-lances vale `MATE_SCORE - N`, logo mates mais curtos
/// ganham sempre aos mais longos.
#[inline]
pub fn adjust_mate_distance(score: Score) -> Score {
    if score > MATE_THRESHOLD {
        score - 1
    } else if score < -MATE_THRESHOLD {
        score + 1
    } else {
        score
    }
}

/// Minimax com poda Alpha-Beta, profundidade fixa.
///
/// As pontuações são sempre do ponto de vista das brancas; as brancas
/// maximizam e as pretas minimizam. `alpha` e `beta` são passados por valor,
/// por isso cada ramo tem a sua própria janela.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes: u64,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nós visitados desde a criação ou o último `reset`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Devolve a pontuação minimax da posição até `depth` meios-lances e o
    /// melhor lance (`Move::NULL` em folhas). A posição volta exatamente ao
    /// estado de entrada.
    pub fn search<P: Position + ?Sized>(&mut self, position: &mut P, depth: u8, mut alpha: Score, mut beta: Score) -> (Score, Move) {
        debug_assert!(alpha <= beta, "search window inverted: {} > {}", alpha, beta);
        self.nodes += 1;

        if let Some(score) = terminal_score(&*position) {
            return (score, Move::NULL);
        }
        if depth == 0 {
            return (material_and_position(&*position), Move::NULL);
        }

        let maximizing = position.side_to_move() == Color::White;
        let mut best_score = worst_score(maximizing);
        let mut best_move = Move::NULL;

        let moves = position.legal_moves();
        if moves.is_empty() {
            // Não terminal mas sem lances: o colaborador contradiz-se.
            warn!("position reports no legal moves but is neither mate nor draw");
            return (best_score, best_move);
        }

        for mv in order_moves(position, moves) {
            position.make_move(mv);
            let (score, _) = self.search(position, depth - 1, alpha, beta);
            position.undo_move(mv);

            if improves(maximizing, score, best_score) {
                best_score = score;
                best_move = mv;
            }

            if maximizing {
                if best_score > beta {
                    break; // Beta cutoff
                }
                alpha = alpha.max(best_score);
            } else {
                if best_score < alpha {
                    break; // Alpha cutoff
                }
                beta = beta.min(best_score);
            }
        }

        (adjust_mate_distance(best_score), best_move)
    }
}

/// Busca a partir de uma janela dada, sem guardar estatísticas.
pub fn alpha_beta<P: Position + ?Sized>(position: &mut P, depth: u8, alpha: Score, beta: Score) -> (Score, Move) {
    AlphaBeta::new().search(position, depth, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardStack;
    use crate::search::evaluation::MATE_SCORE;

    const BLACK_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1";

    /// Filhos na ordem de visita, com a avaliação estática de cada um.
    fn ordered_children(stack: &mut BoardStack) -> Vec<(Move, Score)> {
        let moves = stack.legal_moves();
        order_moves(stack, moves)
            .into_iter()
            .map(|mv| {
                stack.make_move(mv);
                let score = material_and_position(&*stack);
                stack.undo_move(mv);
                (mv, score)
            })
            .collect()
    }

    #[test]
    fn mate_distance_moves_towards_zero() {
        assert_eq!(adjust_mate_distance(MATE_SCORE), 999_999);
        assert_eq!(adjust_mate_distance(-MATE_SCORE), -999_999);
        assert_eq!(adjust_mate_distance(MATE_THRESHOLD), MATE_THRESHOLD);
        assert_eq!(adjust_mate_distance(-250), -250);
    }

    #[test]
    fn depth_zero_is_a_static_evaluation() {
        let mut stack = BoardStack::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(alpha_beta(&mut stack, 0, -INFINITY, INFINITY), (497, Move::NULL));
    }

    #[test]
    fn terminal_positions_are_not_expanded() {
        let mut stack = BoardStack::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut search = AlphaBeta::new();
        assert_eq!(search.search(&mut stack, 4, -INFINITY, INFINITY), (MATE_SCORE, Move::NULL));
        assert_eq!(search.nodes(), 1);
    }

    #[test]
    fn black_minimises() {
        // Pretas em xeque podem capturar a dama branca indefesa
        let mut stack = BoardStack::from_fen("q3k3/8/8/8/Q7/8/8/4K3 b - - 0 1").unwrap();
        let (score, mv) = alpha_beta(&mut stack, 1, -INFINITY, INFINITY);
        assert_eq!(mv.to_string(), "a8a4");
        assert!(score < 0, "score {}", score);
    }

    #[test]
    fn ties_keep_the_first_ordered_move() {
        for (fen, maximizing) in [(crate::core::START_FEN, true), (BLACK_START, false)] {
            let mut stack = BoardStack::from_fen(fen).unwrap();
            let children = ordered_children(&mut stack);
            let best = if maximizing {
                children.iter().map(|&(_, s)| s).max().unwrap()
            } else {
                children.iter().map(|&(_, s)| s).min().unwrap()
            };
            let tied: Vec<Move> = children.iter().filter(|&&(_, s)| s == best).map(|&(mv, _)| mv).collect();
            assert!(tied.len() >= 2, "{}: no tie to break", fen);

            assert_eq!(alpha_beta(&mut stack, 1, -INFINITY, INFINITY), (best, tied[0]), "{}", fen);
        }
    }

    #[test]
    fn maximizing_node_equal_to_beta_does_not_cut() {
        let mut stack = BoardStack::new();
        let children = ordered_children(&mut stack);
        let beta = children[0].1;

        // Só um filho estritamente acima de beta corta
        let visited = children.iter().position(|&(_, s)| s > beta).map_or(children.len(), |i| i + 1);
        let expected_move = match children.iter().find(|&&(_, s)| s > beta) {
            Some(&(mv, _)) => mv,
            None => children.iter().find(|&&(_, s)| s == beta).map(|&(mv, _)| mv).unwrap(),
        };

        let mut search = AlphaBeta::new();
        let (_, mv) = search.search(&mut stack, 1, beta - 1, beta);
        assert!(search.nodes() >= 3, "cut after the first child");
        assert_eq!(search.nodes(), 1 + visited as u64);
        assert_eq!(mv, expected_move);
    }

    #[test]
    fn minimizing_node_equal_to_alpha_does_not_cut() {
        let mut stack = BoardStack::from_fen(BLACK_START).unwrap();
        let children = ordered_children(&mut stack);
        let alpha = children[0].1;

        let visited = children.iter().position(|&(_, s)| s < alpha).map_or(children.len(), |i| i + 1);
        let expected_move = match children.iter().find(|&&(_, s)| s < alpha) {
            Some(&(mv, _)) => mv,
            None => children.iter().find(|&&(_, s)| s == alpha).map(|&(mv, _)| mv).unwrap(),
        };

        let mut search = AlphaBeta::new();
        let (_, mv) = search.search(&mut stack, 1, alpha, alpha + 1);
        assert!(search.nodes() >= 3, "cut after the first child");
        assert_eq!(search.nodes(), 1 + visited as u64);
        assert_eq!(mv, expected_move);
    }

    #[test]
    fn search_counts_nodes_and_restores_the_position() {
        let mut stack = BoardStack::new();
        let before = stack.clone();
        let mut search = AlphaBeta::new();
        search.search(&mut stack, 2, -INFINITY, INFINITY);
        assert!(search.nodes() > 20);
        assert_eq!(stack, before);
        search.reset();
        assert_eq!(search.nodes(), 0);
    }
}
