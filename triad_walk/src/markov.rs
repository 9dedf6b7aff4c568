// Tag-indexed transition tables and the harmonic step.
//
// The walk is a Markov chain over the four harmonic tags: each tag owns an
// immutable row group of (delta triple, result tag) alternatives, and one
// uniform draw per step picks the row to apply. Deltas add positionally to
// the canonical triad, mod 12. Row counts differ per tag (9/9/4/4) — that
// is harmonic asymmetry, not an omission.
//
// Exactly one RNG draw happens per step, in step order. Reordering or adding
// draws silently changes every progression a given seed produces, so don't.

use crate::chord::{ChordState, HarmonicTag};
use crate::voicing::best_permutation;
use triad_walk_prng::WalkRng;

/// One permissible harmonic move: a transposition triple applied
/// positionally to the canonical triad, and the tag of the resulting chord.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub delta: [i8; 3],
    pub tag: HarmonicTag,
}

const fn t(delta: [i8; 3], tag: HarmonicTag) -> Transition {
    Transition { delta, tag }
}

/// Moves out of a major triad.
static MAJOR: [Transition; 9] = [
    t([-2, -2, -2], HarmonicTag::Major), // whole step down
    t([-2, -3, -2], HarmonicTag::Minor), // whole step down, minor
    t([3, 3, 3], HarmonicTag::Major),    // minor third up
    t([4, 3, 4], HarmonicTag::Minor),    // major third up, minor
    t([-5, -4, -5], HarmonicTag::Suspended),
    t([2, 3, 2], HarmonicTag::Suspended),
    t([0, 1, 0], HarmonicTag::Suspended), // suspend in place
    t([4, 3, 3], HarmonicTag::Diminished),
    t([5, 4, 4], HarmonicTag::Diminished),
];

/// Moves out of a minor triad.
static MINOR: [Transition; 9] = [
    t([-4, -4, -4], HarmonicTag::Minor), // major third down
    t([5, 6, 5], HarmonicTag::Major),    // fourth up, major
    t([-5, -5, -5], HarmonicTag::Minor), // fourth down
    t([-2, -1, -2], HarmonicTag::Major), // whole step down, major
    t([-5, -3, -5], HarmonicTag::Suspended),
    t([5, 7, 5], HarmonicTag::Suspended),
    t([0, 2, 0], HarmonicTag::Suspended), // suspend in place
    t([0, 0, -1], HarmonicTag::Diminished),
    t([-3, -3, -4], HarmonicTag::Diminished),
];

/// Moves out of a suspended chord. Suspensions always resolve.
static SUSPENDED: [Transition; 4] = [
    t([0, -1, 0], HarmonicTag::Major),  // resolve down to major
    t([0, -2, 0], HarmonicTag::Minor),  // resolve down to minor
    t([5, 4, 5], HarmonicTag::Major),   // resolve up a fourth
    t([5, 3, 5], HarmonicTag::Minor),
];

/// Moves out of a diminished chord.
static DIMINISHED: [Transition; 4] = [
    t([0, 1, 1], HarmonicTag::Major),
    t([-5, -5, -4], HarmonicTag::Minor),
    t([1, 2, 2], HarmonicTag::Major),
    t([-1, 0, 0], HarmonicTag::Major),
];

/// The immutable row group of permissible moves out of `tag`.
pub fn transitions(tag: HarmonicTag) -> &'static [Transition] {
    match tag {
        HarmonicTag::Major => &MAJOR,
        HarmonicTag::Minor => &MINOR,
        HarmonicTag::Suspended => &SUSPENDED,
        HarmonicTag::Diminished => &DIMINISHED,
    }
}

/// Apply one transition row to a state: transpose the canonical triad, take
/// the row's tag, and re-derive the voicing against the previous canonical.
///
/// The voice-leading comparison deliberately runs against the previous
/// *canonical* triad rather than the previously sounded voicing; harmonic
/// bookkeeping and playback order stay decoupled.
fn advance(current: &ChordState, row: Transition) -> ChordState {
    let mut canonical = current.canonical;
    for (pc, delta) in canonical.iter_mut().zip(row.delta) {
        *pc = pc.offset(delta as i32);
    }

    let perm = best_permutation(current.canonical, canonical);
    ChordState {
        tag: row.tag,
        canonical,
        voicing: perm.apply(canonical),
    }
}

/// Advance one chord to its successor with a single uniform draw over the
/// current tag's row group.
pub fn step(current: &ChordState, rng: &mut WalkRng) -> ChordState {
    let rows = transitions(current.tag);
    let row = rows[rng.range_usize(0, rows.len())];
    advance(current, row)
}
