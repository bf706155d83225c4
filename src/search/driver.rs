use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::core::types::Move;
use crate::position::Position;
use crate::search::alpha_beta::AlphaBeta;
use crate::search::evaluation::{Score, INFINITY};

/// Profundidade usada quando ninguém pede outra.
pub const DEFAULT_DEPTH: u8 = 4;

/// Configuração da busca de profundidade fixa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u8,
}

impl SearchConfig {
    /// Profundidade mínima 1: com 0 a raiz nunca teria lance.
    pub fn with_depth(depth: u8) -> Self {
        SearchConfig { depth: depth.max(1) }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: DEFAULT_DEPTH }
    }
}

/// Resultado de uma busca na raiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Driver {
    config: SearchConfig,
    search: AlphaBeta,
}

impl Driver {
    pub fn new(config: SearchConfig) -> Self {
        Driver { config, search: AlphaBeta::new() }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Busca completa a partir da raiz com janela total.
    ///
    /// O orçamento de tempo só é registado no log: a profundidade é fixa e a
    /// busca corre sempre até ao fim.
    pub fn think<P: Position + ?Sized>(&mut self, position: &mut P, time_budget: Duration) -> SearchReport {
        let depth = self.config.depth;
        trace!("search start: depth {}, budget {:?}", depth, time_budget);

        self.search.reset();
        let start = Instant::now();
        let (score, best_move) = self.search.search(position, depth, -INFINITY, INFINITY);

        let report = SearchReport {
            best_move,
            score,
            depth,
            nodes: self.search.nodes(),
            elapsed: start.elapsed(),
        };

        debug!(
            "depth {} best {} score {} nodes {} in {:?} (budget {:?})",
            report.depth, report.best_move, report.score, report.nodes, report.elapsed, time_budget
        );
        if report.elapsed > time_budget {
            debug!("fixed-depth search overran its time budget by {:?}", report.elapsed - time_budget);
        }

        report
    }

    /// Escolhe o lance a jogar. Devolve `Move::NULL` se a raiz já for fim de
    /// jogo; cabe a quem chama verificar.
    pub fn choose_move<P: Position + ?Sized>(&mut self, position: &mut P, time_budget: Duration) -> Move {
        self.think(position, time_budget).best_move
    }
}

/// Atalho com a configuração por omissão.
pub fn choose_move<P: Position + ?Sized>(position: &mut P, time_budget: Duration) -> Move {
    Driver::default().choose_move(position, time_budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardStack;

    #[test]
    fn depth_is_never_zero() {
        assert_eq!(SearchConfig::with_depth(0).depth(), 1);
        assert_eq!(SearchConfig::default().depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn shallowest_config_still_picks_a_move() {
        let mut stack = BoardStack::new();
        let mut driver = Driver::new(SearchConfig::with_depth(0));
        assert_eq!(driver.config().depth(), 1);
        assert!(!driver.choose_move(&mut stack, Duration::from_millis(10)).is_null());
    }

    #[test]
    fn game_over_root_returns_null_move() {
        let mut stack = BoardStack::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(choose_move(&mut stack, Duration::from_millis(100)).is_null());
    }

    #[test]
    fn report_carries_search_statistics() {
        let mut stack = BoardStack::new();
        let mut driver = Driver::new(SearchConfig::with_depth(2));
        let report = driver.think(&mut stack, Duration::from_secs(1));
        assert_eq!(report.depth, 2);
        assert!(report.nodes > 1);
        assert!(!report.best_move.is_null());
    }
}
