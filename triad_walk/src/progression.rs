// The progression driver and the renderer boundary.
//
// The driver realizes chords one at a time: each chord goes to the renderer
// before its successor is computed, so event emission and harmonic
// computation interleave in lockstep. A renderer failure aborts the run
// before the next advance — no partially applied chord state is ever
// externally visible.

use crate::chord::ChordState;
use crate::markov::step;
use thiserror::Error;
use triad_walk_prng::WalkRng;

/// Errors surfaced by a renderer while realizing a chord.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A computed key fell outside the 7-bit MIDI key space.
    #[error("pitch {key} exceeds the MIDI key range")]
    KeyOutOfRange { key: u16 },
    /// The underlying sink failed to accept events.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Consumer of realized chords.
///
/// Implementations must fully close chord N's events (every begin paired
/// with its end) before `chord` is called for chord N+1: consecutive chords
/// never overlap.
pub trait ChordRenderer {
    fn chord(&mut self, state: &ChordState) -> Result<(), RenderError>;
}

/// Generate a progression of exactly `count` chords, starting from (and
/// including) `initial`.
///
/// Every realized chord is handed to the renderer before the next one is
/// computed; nothing advances after the final chord. The caller owns the RNG
/// stream, so running twice with equal seeds reproduces the identical
/// progression.
pub fn generate(
    initial: ChordState,
    count: usize,
    rng: &mut WalkRng,
    renderer: &mut dyn ChordRenderer,
) -> Result<Vec<ChordState>, RenderError> {
    let mut chords = Vec::with_capacity(count);
    let mut current = initial;
    for i in 0..count {
        renderer.chord(&current)?;
        chords.push(current);
        if i + 1 < count {
            current = step(&current, rng);
        }
    }
    Ok(chords)
}
