// Pitch-class arithmetic.
//
// A pitch class is a pitch reduced modulo the 12-tone octave; it carries no
// octave information. Octaves are assigned only at render time by the MIDI
// layer. Transposition deltas from the transition tables may be negative, so
// the wrapping constructor must be total over `i32`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pitch class: an integer in `[0, 12)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const DB: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const EB: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const GB: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const AB: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const BB: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// Reduce an arbitrary integer into `[0, 12)`.
    ///
    /// Total over `i32`; negative inputs wrap upward, so `wrap(-2)` is `Bb`.
    pub fn wrap(x: i32) -> PitchClass {
        PitchClass(x.rem_euclid(12) as u8)
    }

    /// Transpose by `delta` semitones, wrapping into `[0, 12)`.
    pub fn offset(self, delta: i32) -> PitchClass {
        PitchClass::wrap(self.0 as i32 + delta)
    }

    /// The raw `0..12` value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Note name, flat spellings.
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "C",
            1 => "Db",
            2 => "D",
            3 => "Eb",
            4 => "E",
            5 => "F",
            6 => "Gb",
            7 => "G",
            8 => "Ab",
            9 => "A",
            10 => "Bb",
            11 => "B",
            _ => unreachable!("pitch class out of range"),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_total_and_in_range() {
        for x in -1000..1000 {
            let pc = PitchClass::wrap(x);
            assert!(pc.value() < 12, "wrap({x}) out of range: {}", pc.value());
            assert_eq!(pc, PitchClass::wrap(x + 12), "wrap({x}) != wrap({})", x + 12);
        }
    }

    #[test]
    fn wrap_negative_inputs() {
        assert_eq!(PitchClass::wrap(-1), PitchClass::B);
        assert_eq!(PitchClass::wrap(-2), PitchClass::BB);
        assert_eq!(PitchClass::wrap(-12), PitchClass::C);
        assert_eq!(PitchClass::wrap(-13), PitchClass::B);
    }

    #[test]
    fn offset_wraps_both_directions() {
        assert_eq!(PitchClass::C.offset(-2), PitchClass::BB);
        assert_eq!(PitchClass::B.offset(1), PitchClass::C);
        assert_eq!(PitchClass::G.offset(5), PitchClass::C);
        assert_eq!(PitchClass::E.offset(0), PitchClass::E);
    }

    #[test]
    fn names_are_distinct() {
        let names: std::collections::HashSet<&str> =
            (0..12).map(|v| PitchClass::wrap(v).name()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(PitchClass::DB.to_string(), "Db");
        assert_eq!(PitchClass::C.to_string(), "C");
    }
}
