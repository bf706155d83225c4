mod common;

use common::{positions, stack};

fn check_perft(fen: &str, expected: &[u64]) {
    let mut position = stack(fen);
    for (depth, &nodes) in expected.iter().enumerate() {
        let depth = depth as u32 + 1;
        assert_eq!(position.perft(depth), nodes, "perft({}) of {}", depth, fen);
    }
}

#[test]
fn perft_starting_position() {
    check_perft(positions::STARTING, &[20, 400, 8902]);
}

#[test]
fn perft_kiwipete() {
    // Roques, en passant e promoções no mesmo tabuleiro
    check_perft(positions::KIWIPETE, &[48, 2039]);
}

#[test]
fn perft_rook_endgame() {
    check_perft(positions::ROOK_ENDGAME, &[14, 191, 2812]);
}

#[test]
fn perft_promotions() {
    check_perft(positions::PROMOTIONS, &[6, 264]);
}

#[test]
fn perft_leaves_the_position_untouched() {
    let mut position = stack(positions::KIWIPETE);
    let before = position.clone();
    position.perft(2);
    assert_eq!(position, before);
}
