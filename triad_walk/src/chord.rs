// Chord state: the unit of progression state.
//
// `canonical` is the structurally-ordered triad that harmonic bookkeeping
// tracks across steps; `voicing` is the same three pitch classes reordered
// once per step so that melodic motion from the previous chord is minimized.
// The two are deliberately decoupled: transition deltas apply to `canonical`
// positionally, and `voicing` is re-derived from it, never mutated on its
// own.

use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chord quality participating in the random walk.
///
/// Tags are purely classificatory: a state's tag selects which transition
/// row group applies to it next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicTag {
    Major,
    Minor,
    Suspended,
    Diminished,
}

impl HarmonicTag {
    pub const ALL: [HarmonicTag; 4] = [
        HarmonicTag::Major,
        HarmonicTag::Minor,
        HarmonicTag::Suspended,
        HarmonicTag::Diminished,
    ];
}

/// One realized chord in a progression.
///
/// `voicing` is always a permutation of `canonical` for the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordState {
    pub tag: HarmonicTag,
    pub canonical: [PitchClass; 3],
    pub voicing: [PitchClass; 3],
}

impl ChordState {
    /// A fresh state with identity voicing — a progression's first chord has
    /// no predecessor to optimize against.
    pub fn new(tag: HarmonicTag, canonical: [PitchClass; 3]) -> Self {
        ChordState {
            tag,
            canonical,
            voicing: canonical,
        }
    }

    /// The historical starting chord: C major in structural order.
    pub fn c_major() -> Self {
        ChordState::new(
            HarmonicTag::Major,
            [PitchClass::C, PitchClass::E, PitchClass::G],
        )
    }
}

impl fmt::Display for ChordState {
    /// Voicing first, canonical in parens: `C E G (C E G)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({} {} {})",
            self.voicing[0],
            self.voicing[1],
            self.voicing[2],
            self.canonical[0],
            self.canonical[1],
            self.canonical[2],
        )
    }
}
