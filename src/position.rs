use crate::types::{Direction, FretboardNote};

/// Widest comfortable fret span for one hand position. Documented here for
/// callers sizing their own reachability filters; [`next_position`] does
/// not enforce it.
pub const MAX_FRET_STRETCH: u8 = 5;

/// Pick the (string, fret) occurrence of `target_midi` that keeps the hand
/// closest to `current` while still moving with `direction`.
///
/// Occurrences on the direction's side of the current fret (ascending:
/// same fret or higher; descending: same or lower) strictly beat
/// occurrences on the wrong side; within a side the smallest fret distance
/// wins, with ties going to table order (string 0 outward). With no
/// `current` (the first note of a sequence), the first occurrence in
/// table order is returned.
///
/// `None` means the pitch does not occur in the table at all: below the
/// open-string floor or above the fret ceiling.
pub fn next_position(
    target_midi: i32,
    current: Option<FretboardNote>,
    table: &[FretboardNote],
    direction: Direction,
) -> Option<FretboardNote> {
    let mut occurrences = table.iter().filter(|n| n.midi == target_midi);

    let Some(current) = current else {
        return occurrences.next().copied();
    };

    occurrences
        .min_by_key(|n| {
            let shift = n.fret as i32 - current.fret as i32;
            let wrong_side = match direction {
                Direction::Ascending => shift < 0,
                Direction::Descending => shift > 0,
            };
            (wrong_side, shift.abs())
        })
        .copied()
}

/// Resolve a whole pitch sequence to fretboard positions, threading the
/// previously chosen position through so playback stays localized.
/// Unplayable pitches yield `None` and leave the hand where it was.
pub fn resolve_sequence(
    pitches: &[i32],
    table: &[FretboardNote],
    direction: Direction,
) -> Vec<Option<FretboardNote>> {
    let mut current = None;
    pitches
        .iter()
        .map(|&midi| {
            let chosen = next_position(midi, current, table, direction);
            if chosen.is_some() {
                current = chosen;
            }
            chosen
        })
        .collect()
}
