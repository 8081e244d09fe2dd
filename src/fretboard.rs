use crate::types::{FretboardNote, PositionWindow, Tuning, STRING_COUNT};
use log::debug;

/// Build the full note table: one entry per (string, fret) cell,
/// string-major, string 0 (high e) first.
///
/// `fret_count` is the highest fret included, so each string contributes
/// `fret_count + 1` entries; 0 yields open strings only. The table is a
/// pure function of (tuning, fret_count); rebuild it whenever either
/// changes, cache it if you like.
pub fn build_note_table(tuning: &Tuning, fret_count: u8) -> Vec<FretboardNote> {
    let mut notes = Vec::with_capacity(STRING_COUNT * (fret_count as usize + 1));
    for string in 0..STRING_COUNT {
        let open_class = tuning.open_pitch_classes[string];
        let open_midi = tuning.open_midi[string];
        for fret in 0..=fret_count {
            notes.push(FretboardNote {
                string: string as u8,
                fret,
                pitch_class: ((open_class as usize + fret as usize) % 12) as u8,
                midi: open_midi + fret as i32,
            });
        }
    }
    debug!(
        "note table for {}: {} strings x {} frets = {} entries",
        tuning.name,
        STRING_COUNT,
        fret_count as usize + 1,
        notes.len()
    );
    notes
}

/// Fret offsets of the five position shapes, relative to the fret where
/// the root first lands on the lowest string. Stepping the position index
/// by one moves roughly one shape up the neck.
const POSITION_OFFSETS: [(i32, i32); 5] = [(-1, 3), (2, 6), (4, 8), (7, 11), (9, 13)];

/// Fret bounds of one of the five positions for a root pitch class.
///
/// Any integer index is accepted and folded modulo 5, so index `i` and
/// `i + 5` name the same window. Only the lower bound is clamped to the
/// nut; the upper bound may run past the board and callers clip it
/// against their own fret count when rendering.
pub fn position_window(tuning: &Tuning, root: u8, position_index: i32) -> PositionWindow {
    let root_fret = (root as i32 - tuning.lowest_open_pitch_class() as i32).rem_euclid(12);
    let (start, end) = POSITION_OFFSETS[position_index.rem_euclid(5) as usize];
    let window = PositionWindow {
        start: (root_fret + start).max(0) as u8,
        end: (root_fret + end) as u8,
    };
    debug!(
        "position {} around root fret {}: {}",
        position_index.rem_euclid(5),
        root_fret,
        window
    );
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::standard_tuning;

    #[test]
    fn table_has_one_entry_per_cell() {
        let table = build_note_table(&standard_tuning(), 15);
        assert_eq!(table.len(), 6 * 16);
    }

    #[test]
    fn open_strings_match_tuning() {
        let tuning = standard_tuning();
        let table = build_note_table(&tuning, 15);
        for string in 0..STRING_COUNT {
            let open = table
                .iter()
                .find(|n| n.string == string as u8 && n.fret == 0)
                .unwrap();
            assert_eq!(open.pitch_class, tuning.open_pitch_classes[string]);
            assert_eq!(open.midi, tuning.open_midi[string]);
        }
    }

    #[test]
    fn every_cell_round_trips_against_tuning() {
        let tuning = standard_tuning();
        for n in build_note_table(&tuning, 15) {
            assert_eq!(
                (tuning.open_pitch_classes[n.string as usize] + n.fret) % 12,
                n.pitch_class
            );
            assert_eq!(n.midi - n.fret as i32, tuning.open_midi[n.string as usize]);
        }
    }

    #[test]
    fn fret_count_zero_is_open_strings_only() {
        let table = build_note_table(&standard_tuning(), 0);
        assert_eq!(table.len(), 6);
        assert!(table.iter().all(|n| n.fret == 0));
    }

    #[test]
    fn low_e_fret_three_is_g() {
        let table = build_note_table(&standard_tuning(), 15);
        let n = table.iter().find(|n| n.string == 5 && n.fret == 3).unwrap();
        assert_eq!(n.pitch_class, 7);
        assert_eq!(n.midi, 43);
    }

    #[test]
    fn window_index_folds_modulo_five() {
        let tuning = standard_tuning();
        for root in 0..12u8 {
            for i in -7..12i32 {
                assert_eq!(
                    position_window(&tuning, root, i),
                    position_window(&tuning, root, i + 5),
                    "root {} index {}",
                    root,
                    i
                );
            }
        }
    }

    #[test]
    fn g_root_first_position() {
        // G lands on fret 3 of the low E string; position 0 spans 3-1 .. 3+3.
        let w = position_window(&standard_tuning(), 7, 0);
        assert_eq!(w, PositionWindow { start: 2, end: 6 });
    }

    #[test]
    fn e_root_first_position_clamps_at_nut() {
        // E is the open low string, so the -1 start offset hits the nut.
        let w = position_window(&standard_tuning(), 4, 0);
        assert_eq!(w, PositionWindow { start: 0, end: 3 });
    }

    #[test]
    fn window_end_may_run_past_the_board() {
        // B root: fret 7 on the low E string; position 4 spans 16..=20.
        let w = position_window(&standard_tuning(), 11, 4);
        assert_eq!(w, PositionWindow { start: 16, end: 20 });
        let clipped = w.clip(15);
        assert_eq!(clipped.end, 15);
        assert!(!clipped.contains(15), "start is beyond the board entirely");
    }

    #[test]
    fn clipped_window_contains_its_frets() {
        let w = position_window(&standard_tuning(), 7, 0).clip(15);
        for fret in 0..=15u8 {
            assert_eq!(w.contains(fret), (2..=6).contains(&fret));
        }
    }
}
