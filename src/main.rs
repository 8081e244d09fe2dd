use fret_trainer::console_display::{self, LabelMode};
use fret_trainer::fretboard;
use fret_trainer::position;
use fret_trainer::sequence::{self, PatternKind};
use fret_trainer::theory::{self, ScaleKind};
use fret_trainer::trainer::{Judgement, TrainerSession};
use fret_trainer::types::*;

use clap::Parser;
use crossbeam_channel::bounded;
use log::{error, info};
use serde::Serialize;
use std::io::BufRead;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "fret-trainer")]
#[command(about = "Guitar fretboard scale trainer")]
struct Cli {
    /// Root note (C, C#, Db, F#, Bb, ...)
    #[arg(long, default_value = "C")]
    root: String,

    /// Scale: ionian, dorian, phrygian, lydian, mixolydian, aeolian,
    /// locrian, major-pentatonic, minor-pentatonic, blues
    #[arg(long, default_value = "ionian")]
    scale: String,

    /// Number of frets to show
    #[arg(long, default_value_t = DEFAULT_FRET_COUNT)]
    frets: u8,

    /// Label cells with scale-degree intervals instead of note names
    #[arg(long)]
    intervals: bool,

    /// Isolate one of the five positions (0-4)
    #[arg(long)]
    position: Option<i32>,

    /// Print the scale summary and note table as JSON and exit
    #[arg(long)]
    json: bool,

    /// Walk the scale across the board in time instead of rendering it
    #[arg(long)]
    play: bool,

    /// Playback direction: asc or desc
    #[arg(long, default_value = "asc")]
    direction: String,

    /// Octaves to walk during playback
    #[arg(long, default_value_t = 2)]
    octaves: u32,

    /// Playback tempo (notes per minute)
    #[arg(long, default_value_t = 120)]
    tempo: u32,

    /// Run the note-identification quiz (reads "<string> <fret>" lines)
    #[arg(long)]
    quiz: bool,

    /// Print a practice pattern over the scale: thirds, fourths, groups-of-4
    #[arg(long)]
    pattern: Option<String>,
}

/// Everything the `--json` consumer needs to draw one board state.
#[derive(Serialize)]
struct Summary<'a> {
    root: &'static str,
    scale: &'static str,
    scale_notes: Vec<&'static str>,
    intervals: Vec<&'static str>,
    window: Option<PositionWindow>,
    tuning: &'a Tuning,
    table: &'a [FretboardNote],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let Some(root) = theory::parse_note_name(&cli.root) else {
        error!("unrecognized root note '{}' (expected C, C#, Db, ...)", cli.root);
        std::process::exit(1);
    };
    let Some(scale) = ScaleKind::from_key(&cli.scale) else {
        let known: Vec<&str> = ScaleKind::ALL.iter().map(|k| k.key()).collect();
        error!("unrecognized scale '{}' (one of: {})", cli.scale, known.join(", "));
        std::process::exit(1);
    };
    let direction = match cli.direction.as_str() {
        "asc" => Direction::Ascending,
        "desc" => Direction::Descending,
        other => {
            error!("unrecognized direction '{}' (asc or desc)", other);
            std::process::exit(1);
        }
    };
    let pattern = match cli.pattern.as_deref() {
        None => None,
        Some("thirds") => Some(PatternKind::Thirds),
        Some("fourths") => Some(PatternKind::Fourths),
        Some("groups-of-4") => Some(PatternKind::GroupsOfFour),
        Some(other) => {
            error!("unrecognized pattern '{}' (thirds, fourths, groups-of-4)", other);
            std::process::exit(1);
        }
    };

    let tuning = standard_tuning();
    let table = fretboard::build_note_table(&tuning, cli.frets);
    let scale_notes = theory::notes_in_scale(root, scale.formula());
    let window = cli.position.map(|i| fretboard::position_window(&tuning, root, i));

    info!("═══════════════════════════════════════════════");
    info!("  FRET TRAINER v{}", env!("CARGO_PKG_VERSION"));
    info!("  Scale: {} {}", theory::note_name(root), scale.name());
    info!("  Tuning: {} ({})", tuning.name, console_display::tuning_summary(&tuning));
    if let Some(w) = window {
        info!("  Position {}: {}", cli.position.unwrap_or(0).rem_euclid(5), w);
    }
    info!("═══════════════════════════════════════════════");

    if cli.json {
        let summary = Summary {
            root: theory::note_name(root),
            scale: scale.key(),
            scale_notes: scale_notes.iter().map(|&pc| theory::note_name(pc)).collect(),
            intervals: scale_notes
                .iter()
                .map(|&pc| theory::interval_name(pc, root))
                .collect(),
            window,
            tuning: &tuning,
            table: &table,
        };
        let json = serde_json::to_string_pretty(&summary).expect("summary serializes");
        println!("{}", json);
        return;
    }

    if cli.play {
        run_playback(root, scale, &table, direction, cli.octaves, cli.tempo);
        return;
    }

    if cli.quiz {
        run_quiz(root, scale, &table);
        return;
    }

    if let Some(kind) = pattern {
        let degrees = sequence::scale_pattern(&scale_notes, kind);
        let names: Vec<&str> = degrees.iter().map(|&pc| theory::note_name(pc)).collect();
        println!("{}", names.join(" "));
        return;
    }

    let labels = if cli.intervals {
        LabelMode::Intervals
    } else {
        LabelMode::NoteNames
    };
    print!(
        "{}",
        console_display::render_fretboard(&table, &scale_notes, root, labels, window, cli.frets)
    );
    println!();
    println!("  {}", console_display::scale_summary(&scale_notes, root));
}

/// One element of the playback stream: a pitch and where to fret it.
struct PlaybackStep {
    index: usize,
    midi: i32,
    position: Option<FretboardNote>,
}

/// Walk the scale across the board, pacing steps on a playback thread.
/// The core answers "what comes next"; this loop answers "when".
fn run_playback(
    root: u8,
    scale: ScaleKind,
    table: &[FretboardNote],
    direction: Direction,
    octaves: u32,
    tempo: u32,
) {
    // Anchor on the root: the lowest string for an ascending walk, the
    // highest for a descending one, so the walk has room to travel.
    let anchor_string = match direction {
        Direction::Ascending => (STRING_COUNT - 1) as u8,
        Direction::Descending => 0,
    };
    let Some(anchor) = table
        .iter()
        .find(|n| n.string == anchor_string && n.pitch_class == root)
    else {
        error!(
            "root {} not reachable on string {} within this fret count",
            theory::note_name(root),
            anchor_string + 1
        );
        std::process::exit(1);
    };

    let pitches = sequence::scale_sequence(root, scale.formula(), anchor.midi, direction, octaves);
    let steps = position::resolve_sequence(&pitches, table, direction);
    let drone = theory::midi_of(root, 2);
    info!(
        "drone the root underneath: {} ({:.1} Hz)",
        theory::midi_name(drone),
        theory::midi_to_hz(f64::from(drone))
    );
    info!(
        "playing {} {} from {}: {} notes at {} npm",
        theory::note_name(root),
        scale.name(),
        anchor,
        pitches.len(),
        tempo
    );

    let beat = Duration::from_millis(60_000 / u64::from(tempo.max(1)));
    let (tx, rx) = bounded::<PlaybackStep>(16);
    let handle = thread::Builder::new()
        .name("playback".into())
        .spawn(move || {
            for (index, (midi, position)) in pitches.into_iter().zip(steps).enumerate() {
                if tx.send(PlaybackStep { index, midi, position }).is_err() {
                    break;
                }
                thread::sleep(beat);
            }
        })
        .unwrap();

    for step in rx.iter() {
        let name = theory::midi_name(step.midi);
        let hz = theory::midi_to_hz(f64::from(step.midi));
        match step.position {
            Some(p) => println!(
                "{:>3}  {:<4} {:7.1} Hz   string {} fret {:>2}",
                step.index + 1,
                name,
                hz,
                p.string + 1,
                p.fret
            ),
            None => println!(
                "{:>3}  {:<4} {:7.1} Hz   (not reachable on this board)",
                step.index + 1,
                name,
                hz
            ),
        }
    }
    let _ = handle.join();
}

/// Line-based note-identification quiz: the player names cells, the
/// session keeps score until every in-scale cell is found.
fn run_quiz(root: u8, scale: ScaleKind, table: &[FretboardNote]) {
    let mut session = TrainerSession::new(root, scale);
    println!(
        "Find every {} {} note. Enter cells as: <string 1-6> <fret>  (Ctrl-D to stop)",
        theory::note_name(root),
        scale.name()
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut parts = line.split_whitespace();
        let (Some(s), Some(f)) = (parts.next(), parts.next()) else {
            println!("expected: <string 1-6> <fret>");
            continue;
        };
        let (Ok(string), Ok(fret)) = (s.parse::<u8>(), f.parse::<u8>()) else {
            println!("expected two numbers, got '{}'", line.trim());
            continue;
        };
        let Some(note) = table
            .iter()
            .find(|n| n.string + 1 == string && n.fret == fret)
        else {
            println!("no such cell: string {} fret {}", string, fret);
            continue;
        };
        match session.classify(note) {
            Judgement::Correct => println!(
                "Correct! {}   score {}, {} left",
                note,
                session.score(),
                session.remaining(table)
            ),
            Judgement::WrongNote => println!(
                "Wrong note: {} is not in the scale.   score {}",
                note,
                session.score()
            ),
        }
        if session.remaining(table) == 0 {
            println!(
                "All {} cells found. Final score {}",
                session.found_count(),
                session.score()
            );
            break;
        }
    }
}
