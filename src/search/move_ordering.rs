use crate::core::types::Move;
use crate::position::Position;

/// Grupo de ordenação de um lance. A ordem das variantes é a ordem de visita.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveClass {
    Check,
    Capture,
    Quiet,
}

/// O lance deixa o adversário em xeque? Usa make/undo, a posição fica intacta.
pub fn gives_check<P: Position + ?Sized>(position: &mut P, mv: Move) -> bool {
    position.make_move(mv);
    let check = position.is_in_check();
    position.undo_move(mv);
    check
}

pub fn classify<P: Position + ?Sized>(position: &mut P, mv: Move) -> MoveClass {
    if gives_check(position, mv) {
        MoveClass::Check
    } else if position.is_capture(mv) {
        MoveClass::Capture
    } else {
        MoveClass::Quiet
    }
}

/// Ordena lances para maximizar podas Alpha-Beta: xeques, depois capturas,
/// depois lances calmos. Dentro de cada grupo mantém a ordem de geração.
pub fn order_moves<P: Position + ?Sized>(position: &mut P, moves: Vec<Move>) -> Vec<Move> {
    let mut checks = Vec::with_capacity(moves.len());
    let mut captures = Vec::new();
    let mut quiet = Vec::new();

    for mv in moves {
        match classify(position, mv) {
            MoveClass::Check => checks.push(mv),
            MoveClass::Capture => captures.push(mv),
            MoveClass::Quiet => quiet.push(mv),
        }
    }

    checks.extend(captures);
    checks.extend(quiet);
    checks
}
