//! Error taxonomy for the game's I/O edge.
//!
//! In-game mistakes (bad menu picks, out-of-range numbers) never become
//! errors; the input provider re-prompts for those. What remains is the
//! narrow set of conditions the process genuinely cannot recover from.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream ended (EOF on stdin); no further prompting is
    /// possible.
    #[error("input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
