use crate::types::{INTERVAL_NAMES, NOTE_NAMES};
use serde::{Deserialize, Serialize};

/// The scale and mode presets the trainer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 10] = [
        ScaleKind::Ionian,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
        ScaleKind::MajorPentatonic,
        ScaleKind::MinorPentatonic,
        ScaleKind::Blues,
    ];

    /// Interval offsets from the root, one octave. The first element is
    /// always 0 and the list is strictly increasing.
    pub fn formula(self) -> &'static [u8] {
        match self {
            ScaleKind::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleKind::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleKind::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleKind::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleKind::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleKind::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleKind::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleKind::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleKind::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleKind::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Ionian => "Ionian (Major)",
            ScaleKind::Dorian => "Dorian",
            ScaleKind::Phrygian => "Phrygian",
            ScaleKind::Lydian => "Lydian",
            ScaleKind::Mixolydian => "Mixolydian",
            ScaleKind::Aeolian => "Aeolian (Natural Minor)",
            ScaleKind::Locrian => "Locrian",
            ScaleKind::MajorPentatonic => "Major Pentatonic",
            ScaleKind::MinorPentatonic => "Minor Pentatonic",
            ScaleKind::Blues => "Blues",
        }
    }

    /// Identifier used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ScaleKind::Ionian => "ionian",
            ScaleKind::Dorian => "dorian",
            ScaleKind::Phrygian => "phrygian",
            ScaleKind::Lydian => "lydian",
            ScaleKind::Mixolydian => "mixolydian",
            ScaleKind::Aeolian => "aeolian",
            ScaleKind::Locrian => "locrian",
            ScaleKind::MajorPentatonic => "major-pentatonic",
            ScaleKind::MinorPentatonic => "minor-pentatonic",
            ScaleKind::Blues => "blues",
        }
    }

    pub fn from_key(s: &str) -> Option<ScaleKind> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
    }
}

/// Pitch classes of a scale: `(root + offset) % 12` in formula order.
/// Duplicates are impossible as long as the formula stays within one octave.
pub fn notes_in_scale(root: u8, formula: &[u8]) -> Vec<u8> {
    formula
        .iter()
        .map(|&offset| (root as usize + offset as usize) as u8 % 12)
        .collect()
}

/// Chromatic name of a pitch class.
pub fn note_name(pitch_class: u8) -> &'static str {
    NOTE_NAMES[(pitch_class % 12) as usize]
}

/// Scale-degree label of `note` relative to `root` ("1", "b3", "5", ...).
/// Total: every semitone distance has a label.
pub fn interval_name(note: u8, root: u8) -> &'static str {
    INTERVAL_NAMES[(note as i32 - root as i32).rem_euclid(12) as usize]
}

/// Parse a note name: a letter A–G plus an optional '#' or 'b'.
/// "C" → 0, "F#" → 6, "Bb" → 10. The letter is case-insensitive.
pub fn parse_note_name(s: &str) -> Option<u8> {
    let mut chars = s.trim().chars();
    let base: i32 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let accidental: i32 = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some((base + accidental).rem_euclid(12) as u8)
}

/// MIDI note number of a pitch class in a given octave (C4 = 60).
pub fn midi_of(pitch_class: u8, octave: i32) -> i32 {
    (octave + 1) * 12 + (pitch_class % 12) as i32
}

/// Full name of a MIDI note, e.g. MIDI 40 → "E2".
pub fn midi_name(midi: i32) -> String {
    format!(
        "{}{}",
        note_name(midi.rem_euclid(12) as u8),
        midi.div_euclid(12) - 1
    )
}

/// Convert MIDI note number (fractional) to Hz. A4 = MIDI 69 = 440 Hz.
pub fn midi_to_hz(midi: f64) -> f64 {
    440.0 * 2.0_f64.powf((midi - 69.0) / 12.0)
}

/// Convert Hz to MIDI note number (fractional).
pub fn hz_to_midi(hz: f64) -> f64 {
    69.0 + 12.0 * (hz / 440.0).log2()
}
