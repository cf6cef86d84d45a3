//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by engine operations.
///
/// Occupied cells, decided games and reverting at the start are routine
/// input and are silently ignored; only a jump outside the recorded
/// history is an error, since it means the caller offered a target that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Requested history index is past the end of the history.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Index the caller asked for.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
