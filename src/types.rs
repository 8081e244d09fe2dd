use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Strings and frets ──────────────────────────────────────────────────────

/// Number of strings on the instrument. String 0 is the high E, string 5
/// the low E: the order the board is drawn in, top row first.
pub const STRING_COUNT: usize = 6;

/// Number of frets the trainer shows unless told otherwise.
pub const DEFAULT_FRET_COUNT: u8 = 15;

/// Display names per string, high e down to low E.
pub const STRING_NAMES: [&str; STRING_COUNT] = ["e", "B", "G", "D", "A", "E"];

// ─── Note identity ──────────────────────────────────────────────────────────

/// Chromatic note names, index 0 = C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scale-degree labels, indexed by semitone distance from the root.
pub const INTERVAL_NAMES: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

// ─── Direction ──────────────────────────────────────────────────────────────

/// Which way a scale walk travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

// ─── Tuning ─────────────────────────────────────────────────────────────────

/// Open-string tuning: pitch class and MIDI note number per string.
/// Index 0 = string 1 (high e), index 5 = string 6 (low E).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub name: String,
    /// Open pitch class per string (0–11, 0 = C).
    pub open_pitch_classes: [u8; STRING_COUNT],
    /// Open MIDI note number per string.
    pub open_midi: [i32; STRING_COUNT],
}

impl Tuning {
    /// Open pitch class of the lowest string. Position windows anchor on
    /// the first fret where the root lands on this string.
    pub fn lowest_open_pitch_class(&self) -> u8 {
        self.open_pitch_classes[STRING_COUNT - 1]
    }
}

/// Standard 6-string tuning.
///
/// Strings top to bottom (as drawn):
///       str1  str2  str3  str4  str5  str6
///       E4    B3    G3    D3    A2    E2
pub fn standard_tuning() -> Tuning {
    Tuning {
        name: "Standard".to_string(),
        open_pitch_classes: [4, 11, 7, 2, 9, 4],
        open_midi: [64, 59, 55, 50, 45, 40],
    }
}

// ─── Fretboard facts ────────────────────────────────────────────────────────

/// One (string, fret) cell of the note table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardNote {
    /// String index, 0 = high e.
    pub string: u8,
    /// Fret number, 0 = open.
    pub fret: u8,
    /// Pitch class (0–11, 0 = C).
    pub pitch_class: u8,
    /// MIDI note number, unclamped (C4 = 60).
    pub midi: i32,
}

impl fmt::Display for FretboardNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = NOTE_NAMES[(self.pitch_class % 12) as usize];
        let octave = self.midi.div_euclid(12) - 1;
        write!(
            f,
            "{}{} (string {}, fret {})",
            name,
            octave,
            self.string + 1,
            self.fret
        )
    }
}

// ─── Position windows ───────────────────────────────────────────────────────

/// Fret bounds of one CAGED-style position. `end` may exceed the board's
/// fret count; callers clip with [`PositionWindow::clip`] when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionWindow {
    pub start: u8,
    pub end: u8,
}

impl PositionWindow {
    /// Clip the open upper bound to a concrete board.
    pub fn clip(self, fret_count: u8) -> PositionWindow {
        PositionWindow {
            start: self.start,
            end: self.end.min(fret_count),
        }
    }

    /// Whether a fret lies within the window bounds.
    pub fn contains(self, fret: u8) -> bool {
        fret >= self.start && fret <= self.end
    }
}

impl fmt::Display for PositionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frets {}..={}", self.start, self.end)
    }
}
