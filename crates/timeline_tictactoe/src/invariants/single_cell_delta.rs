//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Cell, Engine, Mark};

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The changed cell went from empty to the mark whose turn it was: X when
/// the earlier snapshot's index is even, O when it is odd.
pub struct SingleCellDeltaInvariant;

impl Invariant<Engine> for SingleCellDeltaInvariant {
    fn holds(engine: &Engine) -> bool {
        engine
            .history()
            .boards()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Cell::Empty
                            && after.get(*pos) == Cell::Marked(Mark::for_move(k))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark for the player whose turn it was"
    }
}
