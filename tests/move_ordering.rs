mod common;

use alphabot::search::{classify, gives_check, order_moves, MoveClass};
use alphabot::{Move, Position};
use common::{positions, stack};
use std::collections::HashSet;

const TACTICAL: &str = "4k3/1p3p2/8/3Q4/8/8/8/4K3 w - - 0 1";

#[test]
fn ordering_is_a_permutation() {
    for fen in [positions::STARTING, positions::KIWIPETE, positions::PROMOTIONS, TACTICAL] {
        let mut position = stack(fen);
        let moves = position.legal_moves();
        let ordered = order_moves(&mut position, moves.clone());

        assert_eq!(ordered.len(), moves.len(), "{}", fen);
        let a: HashSet<Move> = moves.into_iter().collect();
        let b: HashSet<Move> = ordered.into_iter().collect();
        assert_eq!(a, b, "{}", fen);
    }
}

#[test]
fn checks_then_captures_then_quiet_moves() {
    for fen in [positions::KIWIPETE, positions::PROMOTIONS, TACTICAL] {
        let mut position = stack(fen);
        let moves = position.legal_moves();
        let ordered = order_moves(&mut position, moves);
        let classes: Vec<MoveClass> = ordered.iter().map(|&mv| classify(&mut position, mv)).collect();
        assert!(classes.windows(2).all(|w| w[0] <= w[1]), "{}: {:?}", fen, classes);
    }
}

#[test]
fn a_checking_capture_is_a_check() {
    let mut position = stack(TACTICAL);
    let qxf7 = position.parse_uci_move("d5f7").unwrap();
    let qxb7 = position.parse_uci_move("d5b7").unwrap();

    assert!(gives_check(&mut position, qxf7));
    assert_eq!(classify(&mut position, qxf7), MoveClass::Check);
    assert_eq!(classify(&mut position, qxb7), MoveClass::Capture);

    let moves = position.legal_moves();
    let ordered = order_moves(&mut position, moves);
    let at = |mv| ordered.iter().position(|&m| m == mv).unwrap();
    assert!(at(qxf7) < at(qxb7));
}

#[test]
fn ordering_restores_the_position() {
    let mut position = stack(positions::KIWIPETE);
    let before = position.clone();
    let moves = position.legal_moves();
    order_moves(&mut position, moves);
    assert_eq!(position, before);
}
