use crate::theory;
use crate::types::{FretboardNote, PositionWindow, Tuning, STRING_COUNT, STRING_NAMES};

/// Frets carrying inlay markers, as on a real neck.
const MARKER_FRETS: [u8; 6] = [3, 5, 7, 9, 12, 15];

/// How visible cells are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Chromatic note names: C, F#, ...
    NoteNames,
    /// Scale-degree labels relative to the root: 1, b3, 5, ...
    Intervals,
}

/// Render the fretboard as an ASCII grid: one row per string (high e on
/// top) and a fret-marker row beneath. Cells outside the scale (or outside
/// `window`, when one is given) are left blank; root cells are
/// bracketed.
///
/// `window` is clipped against `fret_count` here, so a window whose upper
/// bound runs past the board is safe to pass straight in.
pub fn render_fretboard(
    table: &[FretboardNote],
    scale_notes: &[u8],
    root: u8,
    labels: LabelMode,
    window: Option<PositionWindow>,
    fret_count: u8,
) -> String {
    let clipped = window.map(|w| w.clip(fret_count));
    let mut out = String::new();

    for string in 0..STRING_COUNT {
        out.push_str(&format!("{:>2} ", STRING_NAMES[string]));
        for note in table.iter().filter(|n| n.string == string as u8) {
            let visible = scale_notes.contains(&note.pitch_class)
                && clipped.map_or(true, |w| w.contains(note.fret));
            let label = match labels {
                _ if !visible => "",
                LabelMode::NoteNames => theory::note_name(note.pitch_class),
                LabelMode::Intervals => theory::interval_name(note.pitch_class, root),
            };
            let cell = if visible && note.pitch_class == root {
                format!("[{:^3}]", label)
            } else if visible && note.fret == 0 {
                format!("{:^5}", label)
            } else if visible {
                format!("{:-^5}", label)
            } else if note.fret == 0 {
                "     ".to_string()
            } else {
                "-----".to_string()
            };
            out.push_str(&cell);
            out.push(if note.fret == 0 { '║' } else { '|' });
        }
        out.push('\n');
    }

    // Marker row: fret numbers under the inlay positions.
    out.push_str("   ");
    out.push_str("      ");
    for fret in 1..=fret_count {
        if MARKER_FRETS.contains(&fret) {
            out.push_str(&format!("{:^6}", fret));
        } else {
            out.push_str("      ");
        }
    }
    out.push('\n');
    out
}

/// One-line summary of the scale: note names with their degree labels.
pub fn scale_summary(scale_notes: &[u8], root: u8) -> String {
    scale_notes
        .iter()
        .map(|&pc| format!("{} ({})", theory::note_name(pc), theory::interval_name(pc, root)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Tuning banner: string names with their open pitches, e.g. "e=E4 B=B3 ...".
pub fn tuning_summary(tuning: &Tuning) -> String {
    (0..STRING_COUNT)
        .map(|s| format!("{}={}", STRING_NAMES[s], theory::midi_name(tuning.open_midi[s])))
        .collect::<Vec<_>>()
        .join(" ")
}
