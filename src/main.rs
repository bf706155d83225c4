// Motor de Xadrez - escolhe um lance para uma posição dada na linha de comandos
use alphabot::search::{mate_in_plies, Driver, SearchConfig, DEFAULT_DEPTH};
use alphabot::*;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

/// Search a chess position and print the chosen move
#[derive(Parser, Debug)]
#[command(name = "alphabot", version, about)]
struct Opt {
    /// Position to search, in FEN
    #[arg(long, default_value = START_FEN)]
    fen: String,
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,
    /// Time budget handed to the driver, in milliseconds
    #[arg(long, default_value_t = 1000)]
    budget_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::parse();

    let mut position = BoardStack::from_fen(&opt.fen)
        .with_context(|| format!("failed to parse fen: {}", opt.fen))?;

    let mut driver = Driver::new(SearchConfig::with_depth(opt.depth));
    let report = driver.think(&mut position, Duration::from_millis(opt.budget_ms));

    if report.best_move.is_null() {
        println!("Sem lances: {}", if position.is_checkmate() { "xeque-mate" } else { "empate" });
        return Ok(());
    }

    println!("Lance: {}", report.best_move);
    match mate_in_plies(report.score) {
        Some(plies) => println!("Avaliação: mate em {} meios-lances ({})", plies.abs(), if plies > 0 { "brancas" } else { "pretas" }),
        None => println!("Avaliação: {} cp (brancas)", report.score),
    }
    println!("Profundidade: {}", report.depth);
    println!("Nós: {}", report.nodes);
    println!("Tempo: {:.2?}", report.elapsed);

    Ok(())
}
