use crate::theory::{self, ScaleKind};
use crate::types::FretboardNote;
use serde::{Deserialize, Serialize};

/// Verdict on one clicked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judgement {
    Correct,
    WrongNote,
}

/// Scores a note-identification round: the player hunts every cell of the
/// active scale, gaining a point per in-scale click and losing one (never
/// below zero) per miss.
pub struct TrainerSession {
    scale_notes: Vec<u8>,
    score: u32,
    /// Distinct (string, fret) cells already answered correctly.
    found: Vec<(u8, u8)>,
}

impl TrainerSession {
    pub fn new(root: u8, scale: ScaleKind) -> Self {
        Self {
            scale_notes: theory::notes_in_scale(root, scale.formula()),
            score: 0,
            found: Vec::new(),
        }
    }

    /// Judge a clicked cell. Correct cells are recorded once each;
    /// re-clicking a found cell still scores.
    pub fn classify(&mut self, note: &FretboardNote) -> Judgement {
        if self.scale_notes.contains(&note.pitch_class) {
            self.score += 1;
            let cell = (note.string, note.fret);
            if !self.found.contains(&cell) {
                self.found.push(cell);
            }
            Judgement::Correct
        } else {
            self.score = self.score.saturating_sub(1);
            Judgement::WrongNote
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// In-scale cells of `table` not yet answered.
    pub fn remaining(&self, table: &[FretboardNote]) -> usize {
        table
            .iter()
            .filter(|n| self.scale_notes.contains(&n.pitch_class))
            .filter(|n| !self.found.contains(&(n.string, n.fret)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::build_note_table;
    use crate::types::standard_tuning;

    fn cell(table: &[FretboardNote], string: u8, fret: u8) -> FretboardNote {
        *table
            .iter()
            .find(|n| n.string == string && n.fret == fret)
            .unwrap()
    }

    #[test]
    fn in_scale_click_scores_a_point() {
        let table = build_note_table(&standard_tuning(), 15);
        let mut session = TrainerSession::new(0, ScaleKind::MinorPentatonic);
        // Low E fret 3 is G, the fifth of C minor pentatonic.
        let verdict = session.classify(&cell(&table, 5, 3));
        assert_eq!(verdict, Judgement::Correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn wrong_click_never_drops_below_zero() {
        let table = build_note_table(&standard_tuning(), 15);
        let mut session = TrainerSession::new(0, ScaleKind::MinorPentatonic);
        // Low E fret 4 is G#, outside the scale.
        assert_eq!(session.classify(&cell(&table, 5, 4)), Judgement::WrongNote);
        assert_eq!(session.score(), 0);
        session.classify(&cell(&table, 5, 3));
        session.classify(&cell(&table, 5, 4));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn reclicking_a_found_cell_scores_but_records_once() {
        let table = build_note_table(&standard_tuning(), 15);
        let mut session = TrainerSession::new(0, ScaleKind::MinorPentatonic);
        let g = cell(&table, 5, 3);
        session.classify(&g);
        session.classify(&g);
        assert_eq!(session.score(), 2);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let table = build_note_table(&standard_tuning(), 3);
        let mut session = TrainerSession::new(0, ScaleKind::MinorPentatonic);
        let total = session.remaining(&table);
        assert!(total > 0);
        let targets: Vec<FretboardNote> = table
            .iter()
            .filter(|n| [0u8, 3, 5, 7, 10].contains(&n.pitch_class))
            .copied()
            .collect();
        assert_eq!(targets.len(), total);
        for note in &targets {
            session.classify(note);
        }
        assert_eq!(session.remaining(&table), 0);
        assert_eq!(session.found_count(), total);
    }
}
