// Interface UCI (Universal Chess Interface) para o motor Alphabot

use alphabot::search::{mate_in_plies, Driver, SearchConfig, SearchReport};
use alphabot::*;
use anyhow::Result;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Tempo usado quando o `go` não traz nenhum limite.
const DEFAULT_BUDGET: Duration = Duration::from_secs(5);

struct UCIEngine {
    position: BoardStack,
    config: SearchConfig,
}

impl UCIEngine {
    fn new() -> Self {
        UCIEngine {
            position: BoardStack::new(),
            config: SearchConfig::default(),
        }
    }

    fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let input = line?;
            let parts: Vec<&str> = input.split_whitespace().collect();

            if parts.is_empty() {
                continue;
            }

            match parts[0] {
                "uci" => self.handle_uci(),
                "isready" => println!("readyok"),
                "ucinewgame" => self.handle_new_game(),
                "position" => self.handle_position(&parts),
                "go" => self.handle_go(&parts),
                "stop" => {} // A busca é síncrona, nada a parar
                "quit" => break,
                other => debug!("ignoring unknown command {:?}", other),
            }
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn handle_uci(&self) {
        println!("id name Alphabot {}", env!("CARGO_PKG_VERSION"));
        println!("id author Pedro Contessoto");
        println!("uciok");
    }

    fn handle_new_game(&mut self) {
        self.position = BoardStack::new();
    }

    fn handle_position(&mut self, parts: &[&str]) {
        if parts.len() < 2 {
            return;
        }

        let mut idx = 1;

        match parts[idx] {
            "startpos" => {
                self.position = BoardStack::new();
                idx += 1;
            }
            "fen" => {
                idx += 1;
                let mut fen_parts = Vec::new();

                // Coleta partes do FEN até "moves" ou fim
                while idx < parts.len() && parts[idx] != "moves" {
                    fen_parts.push(parts[idx]);
                    idx += 1;
                }

                let fen = fen_parts.join(" ");
                match BoardStack::from_fen(&fen) {
                    Ok(position) => self.position = position,
                    Err(e) => {
                        println!("info string invalid fen: {}", e);
                        return;
                    }
                }
            }
            _ => return,
        }

        if idx < parts.len() && parts[idx] == "moves" {
            for text in &parts[idx + 1..] {
                if let Err(e) = self.position.apply_uci_move(text) {
                    // Lances seguintes dependem deste; para aqui
                    println!("info string {}", e);
                    warn!("stopped applying moves at {}: {}", text, e);
                    break;
                }
            }
        }
    }

    fn handle_go(&mut self, parts: &[&str]) {
        let mut config = self.config;
        let mut budget = DEFAULT_BUDGET;
        let to_move = self.position.side_to_move();
        let mut idx = 1;

        while idx < parts.len() {
            let value = parts.get(idx + 1).and_then(|v| v.parse::<u64>().ok());
            match (parts[idx], value) {
                ("depth", Some(d)) => config = SearchConfig::with_depth(d.min(u8::MAX as u64) as u8),
                ("movetime", Some(ms)) => budget = Duration::from_millis(ms),
                // Usa 2% do tempo restante
                ("wtime", Some(ms)) if to_move == Color::White => budget = Duration::from_millis(ms / 50),
                ("btime", Some(ms)) if to_move == Color::Black => budget = Duration::from_millis(ms / 50),
                (_, Some(_)) => {}
                (_, None) => {
                    idx += 1;
                    continue;
                }
            }
            idx += 2;
        }

        let report = Driver::new(config).think(&mut self.position, budget);
        println!("{}", info_line(&report, to_move));
        println!("bestmove {}", report.best_move);
        info!("bestmove {} after {} nodes", report.best_move, report.nodes);
    }
}

/// Linha `info` com a pontuação do ponto de vista do lado a mover.
fn info_line(report: &SearchReport, to_move: Color) -> String {
    let sign = if to_move == Color::White { 1 } else { -1 };
    let score = match mate_in_plies(report.score) {
        Some(plies) => {
            let plies = plies * sign;
            format!("mate {}", (plies + plies.signum()) / 2)
        }
        None => format!("cp {}", report.score * sign),
    };
    format!(
        "info depth {} score {} nodes {} time {}",
        report.depth,
        score,
        report.nodes,
        report.elapsed.as_millis()
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    UCIEngine::new().run()
}
