// Triad permutations and the voice-leading search.
//
// A voicing is one of the six orderings of a triad. Picking the next chord's
// voicing is an exhaustive search: apply each of the six permutations to the
// new canonical triad and keep the one with the least total squared motion
// from the previous triad, slot by slot.
//
// The distance is the raw difference of the 0-11 values, not the shortest
// path around the octave: a move from B (11) to C (0) costs 121, not 1. The
// wraparound cost is part of the walk's contract; do not smooth it.

use crate::pitch::PitchClass;

/// One of the six orderings of a three-element triad.
///
/// The variant name spells out where each source slot lands: `Bca` sends
/// slot B to position 0, C to 1, A to 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permutation {
    Abc,
    Acb,
    Bac,
    Bca,
    Cab,
    Cba,
}

impl Permutation {
    /// All six permutations. Enumeration order is load-bearing: the
    /// optimizer's tie-break keeps the earliest entry that reaches the
    /// minimum cost.
    pub const ALL: [Permutation; 6] = [
        Permutation::Abc,
        Permutation::Acb,
        Permutation::Bac,
        Permutation::Bca,
        Permutation::Cab,
        Permutation::Cba,
    ];

    /// The ordering that leaves a triad untouched.
    pub const IDENTITY: Permutation = Permutation::Abc;

    /// Source index feeding each destination slot.
    fn indices(self) -> [usize; 3] {
        match self {
            Permutation::Abc => [0, 1, 2],
            Permutation::Acb => [0, 2, 1],
            Permutation::Bac => [1, 0, 2],
            Permutation::Bca => [1, 2, 0],
            Permutation::Cab => [2, 0, 1],
            Permutation::Cba => [2, 1, 0],
        }
    }

    /// Reorder `src` according to this permutation.
    pub fn apply<T: Copy>(self, src: [T; 3]) -> [T; 3] {
        let [a, b, c] = self.indices();
        [src[a], src[b], src[c]]
    }
}

/// Total squared melodic motion between two slot-aligned triads.
///
/// Squaring penalizes large jumps superlinearly, so three small motions beat
/// one large jump plus two holds.
fn motion_cost(from: [PitchClass; 3], to: [PitchClass; 3]) -> i32 {
    (0..3)
        .map(|i| {
            let d = to[i].value() as i32 - from[i].value() as i32;
            d * d
        })
        .sum()
}

/// The permutation of `to` that minimizes squared melodic motion from
/// `from`.
///
/// Exhausts all six orderings; ties break toward the earliest entry in
/// [`Permutation::ALL`], which makes the result deterministic.
pub fn best_permutation(from: [PitchClass; 3], to: [PitchClass; 3]) -> Permutation {
    let mut best = Permutation::IDENTITY;
    let mut best_cost = i32::MAX;
    for perm in Permutation::ALL {
        let cost = motion_cost(from, perm.apply(to));
        if cost < best_cost {
            best_cost = cost;
            best = perm;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(triad: [i32; 3]) -> [PitchClass; 3] {
        [
            PitchClass::wrap(triad[0]),
            PitchClass::wrap(triad[1]),
            PitchClass::wrap(triad[2]),
        ]
    }

    #[test]
    fn all_six_orderings_are_distinct() {
        let orderings: std::collections::HashSet<[u8; 3]> = Permutation::ALL
            .iter()
            .map(|p| p.apply([0u8, 1, 2]))
            .collect();
        assert_eq!(orderings.len(), 6, "permutations must cover all 6 bijections");
    }

    #[test]
    fn identity_is_a_noop() {
        assert_eq!(Permutation::IDENTITY.apply([7u8, 11, 2]), [7, 11, 2]);
    }

    #[test]
    fn apply_matches_variant_names() {
        let src = ['a', 'b', 'c'];
        assert_eq!(Permutation::Abc.apply(src), ['a', 'b', 'c']);
        assert_eq!(Permutation::Acb.apply(src), ['a', 'c', 'b']);
        assert_eq!(Permutation::Bac.apply(src), ['b', 'a', 'c']);
        assert_eq!(Permutation::Bca.apply(src), ['b', 'c', 'a']);
        assert_eq!(Permutation::Cab.apply(src), ['c', 'a', 'b']);
        assert_eq!(Permutation::Cba.apply(src), ['c', 'b', 'a']);
    }

    #[test]
    fn best_permutation_is_optimal() {
        // Exhaustive check against every alternative over a spread of triads.
        for a in [0, 3, 5, 9, 11] {
            for b in [1, 4, 7, 10] {
                for c in [2, 6, 8] {
                    let from = pcs([a, b, c]);
                    let to = pcs([c + 3, a + 5, b + 1]);
                    let best = best_permutation(from, to);
                    let best_cost = motion_cost(from, best.apply(to));
                    for perm in Permutation::ALL {
                        assert!(
                            best_cost <= motion_cost(from, perm.apply(to)),
                            "{best:?} not optimal for {from:?} -> {to:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn major_down_to_minor_picks_smoothest_ordering() {
        // C major shifted down to a minor triad: [0, 4, 7] -> [10, 1, 5].
        // Identity costs 10^2 + 3^2 + 2^2 = 113; Bca gives [1, 5, 10] at
        // 1 + 1 + 9 = 11, the true minimum.
        let from = pcs([0, 4, 7]);
        let to = pcs([10, 1, 5]);
        assert_eq!(motion_cost(from, to), 113);
        let best = best_permutation(from, to);
        assert_eq!(best, Permutation::Bca);
        assert_eq!(motion_cost(from, best.apply(to)), 11);
    }

    #[test]
    fn ties_break_toward_enumeration_order() {
        // A uniform triad makes every permutation cost the same.
        let from = pcs([0, 4, 7]);
        let to = pcs([5, 5, 5]);
        assert_eq!(best_permutation(from, to), Permutation::Abc);
    }

    #[test]
    fn distance_is_linear_not_circular() {
        // B to C is one real semitone but costs 121 here; a distant slot
        // ordering wins instead. This is the fixed contract.
        let from = pcs([11, 11, 11]);
        let to = pcs([0, 11, 11]);
        let best = best_permutation(from, to);
        // Any ordering placing the 0 anywhere costs 121 + 0 + 0; all tie, so
        // enumeration order keeps the identity.
        assert_eq!(best, Permutation::Abc);
        assert_eq!(motion_cost(from, best.apply(to)), 121);
    }
}
