use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// Walk a scale degree-by-degree from an anchor pitch.
///
/// Produces `formula.len() * octaves + 1` MIDI notes: each step moves by
/// the true semitone gap between consecutive scale degrees, wrapping by an
/// octave at the formula boundary, so the motion is diatonic rather than
/// chromatic. The extra final note closes the last octave on the starting
/// degree.
///
/// If the anchor's pitch class is not in the scale there is no degree to
/// walk from and the result is just `[start_midi]`. Callers treat a
/// length-1 sequence as "no walk possible".
pub fn scale_sequence(
    root: u8,
    formula: &[u8],
    start_midi: i32,
    direction: Direction,
    octaves: u32,
) -> Vec<i32> {
    let chromatic: Vec<u8> = formula
        .iter()
        .map(|&offset| (root as usize + offset as usize) as u8 % 12)
        .collect();
    let start_class = start_midi.rem_euclid(12) as u8;
    let Some(mut degree) = chromatic.iter().position(|&pc| pc == start_class) else {
        return vec![start_midi];
    };

    let count = formula.len() * octaves as usize + 1;
    let mut sequence = Vec::with_capacity(count);
    let mut midi = start_midi;

    for _ in 0..count {
        sequence.push(midi);
        match direction {
            Direction::Ascending => {
                let next = (degree + 1) % formula.len();
                let mut interval = formula[next] as i32 - formula[degree] as i32;
                if interval <= 0 {
                    interval += 12;
                }
                midi += interval;
                degree = next;
            }
            Direction::Descending => {
                let next = (degree + formula.len() - 1) % formula.len();
                let mut interval = formula[degree] as i32 - formula[next] as i32;
                if interval <= 0 {
                    interval += 12;
                }
                midi -= interval;
                degree = next;
            }
        }
    }
    sequence
}

/// Practice-pattern shapes over a scale's pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    /// Each degree paired with the degree a third above: 1-3, 2-4, ...
    Thirds,
    /// Each degree paired with the degree a fourth above: 1-4, 2-5, ...
    Fourths,
    /// Four-note runs from each degree: 1-2-3-4, 2-3-4-5, ...
    GroupsOfFour,
}

/// Expand a scale into a practice pattern. `scale_notes` is the output of
/// [`crate::theory::notes_in_scale`]; degree indices wrap around the scale.
pub fn scale_pattern(scale_notes: &[u8], kind: PatternKind) -> Vec<u8> {
    let len = scale_notes.len();
    if len == 0 {
        return Vec::new();
    }
    let mut pattern = Vec::new();
    match kind {
        PatternKind::Thirds => {
            for i in 0..len {
                pattern.push(scale_notes[i]);
                pattern.push(scale_notes[(i + 2) % len]);
            }
        }
        PatternKind::Fourths => {
            for i in 0..len {
                pattern.push(scale_notes[i]);
                pattern.push(scale_notes[(i + 3) % len]);
            }
        }
        PatternKind::GroupsOfFour => {
            for i in 0..len {
                for j in 0..4 {
                    pattern.push(scale_notes[(i + j) % len]);
                }
            }
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::{notes_in_scale, ScaleKind};

    const IONIAN: &[u8] = &[0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn ascending_octave_from_the_root() {
        // C major from C4: the familiar do-re-mi spacing.
        let seq = scale_sequence(0, IONIAN, 60, Direction::Ascending, 1);
        assert_eq!(seq, vec![60, 62, 64, 65, 67, 69, 71, 72]);
    }

    #[test]
    fn descending_octave_from_the_root() {
        let seq = scale_sequence(0, IONIAN, 60, Direction::Descending, 1);
        assert_eq!(seq, vec![60, 59, 57, 55, 53, 52, 50, 48]);
    }

    #[test]
    fn ascending_from_a_middle_degree() {
        // Anchor on E2 (MIDI 40), degree 3 of C major.
        let seq = scale_sequence(0, IONIAN, 40, Direction::Ascending, 1);
        assert_eq!(seq.len(), IONIAN.len() + 1);
        assert!(seq.windows(2).all(|w| w[0] < w[1]), "strictly increasing");
        assert_eq!(seq[seq.len() - 1] - seq[0], 12, "closes one octave up");
        assert_eq!(seq, vec![40, 41, 43, 45, 47, 48, 50, 52]);
    }

    #[test]
    fn descending_is_the_interval_mirror() {
        let seq = scale_sequence(0, IONIAN, 40, Direction::Descending, 1);
        assert_eq!(seq.len(), IONIAN.len() + 1);
        assert!(seq.windows(2).all(|w| w[0] > w[1]), "strictly decreasing");
        assert_eq!(seq[seq.len() - 1] - seq[0], -12, "closes one octave down");
    }

    #[test]
    fn octave_count_scales_the_length() {
        for octaves in 1..=3u32 {
            let seq = scale_sequence(0, IONIAN, 60, Direction::Ascending, octaves);
            assert_eq!(seq.len(), IONIAN.len() * octaves as usize + 1);
            assert_eq!(seq[seq.len() - 1] - seq[0], 12 * octaves as i32);
        }
    }

    #[test]
    fn foreign_anchor_yields_a_single_note() {
        // C# is not in C major: no walk possible, degenerate by contract.
        let seq = scale_sequence(0, IONIAN, 61, Direction::Ascending, 2);
        assert_eq!(seq, vec![61]);
    }

    #[test]
    fn pentatonic_walk_spans_the_wide_gaps() {
        // C minor pentatonic ascending from C3: gaps of 3,2,2,3,2 semitones.
        let formula = ScaleKind::MinorPentatonic.formula();
        let seq = scale_sequence(0, formula, 48, Direction::Ascending, 1);
        assert_eq!(seq, vec![48, 51, 53, 55, 58, 60]);
    }

    #[test]
    fn thirds_pattern_interleaves_degrees() {
        let notes = notes_in_scale(0, IONIAN);
        let pattern = scale_pattern(&notes, PatternKind::Thirds);
        assert_eq!(pattern.len(), notes.len() * 2);
        assert_eq!(&pattern[..6], &[0, 4, 2, 5, 4, 7]);
    }

    #[test]
    fn fourths_pattern_interleaves_degrees() {
        let notes = notes_in_scale(0, IONIAN);
        let pattern = scale_pattern(&notes, PatternKind::Fourths);
        assert_eq!(pattern.len(), notes.len() * 2);
        assert_eq!(&pattern[..4], &[0, 5, 2, 7]);
    }

    #[test]
    fn groups_of_four_wrap_around_the_scale() {
        let notes = notes_in_scale(0, ScaleKind::MinorPentatonic.formula());
        let pattern = scale_pattern(&notes, PatternKind::GroupsOfFour);
        assert_eq!(pattern.len(), notes.len() * 4);
        // Last run starts on the final degree and wraps to the top.
        assert_eq!(&pattern[16..], &[10, 0, 3, 5]);
    }

    #[test]
    fn empty_scale_yields_empty_pattern() {
        assert!(scale_pattern(&[], PatternKind::Thirds).is_empty());
    }
}
