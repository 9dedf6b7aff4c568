// Triad Walk
//
// A deterministic chord progression generator. The engine random-walks a
// small Markov chain over four harmonic tags (major, minor, suspended,
// diminished): each step transposes a canonical triad by a table-driven
// delta triple, then re-voices the result so that melodic motion from the
// previous chord is minimized. Finished progressions render as two-track
// standard MIDI files.
//
// Architecture:
// - pitch.rs: pitch classes modulo the 12-tone octave
// - chord.rs: harmonic tags and the per-step chord state
// - voicing.rs: triad permutations and the voice-leading search
// - markov.rs: tag-indexed transition tables and the one-step advance
// - progression.rs: the driver loop and the renderer boundary
// - midi.rs: midly-backed SMF renderer
//
// The generator is deterministic given a seed, supporting reproducible output.

pub mod chord;
pub mod markov;
pub mod midi;
pub mod pitch;
pub mod progression;
pub mod voicing;
