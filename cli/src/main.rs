use clap::Parser;

use blast_engine::config;
use blast_engine::game::{BlastSession, GameEvent, GameStatus, Position, Tile};
use blast_engine::log;
use blast_engine::logger;

#[derive(Parser)]
#[command(name = "blast_cli", about = "Offline auto-player for the blast match engine")]
struct Args {
    /// Path to the YAML settings file; defaults apply when it is absent.
    #[arg(long, default_value = "blast.yaml")]
    config: String,

    /// Session seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Safety cap on taps in case the configured session never terminates.
    #[arg(long, default_value_t = 10_000)]
    max_taps: u32,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logger::init_logger(None);

    let settings = config::load_settings(&args.config)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let (mut session, opening_events) = BlastSession::create(&settings, seed)?;
    log!(
        "Starting {}x{} session, seed {}, goal {} in {} moves",
        settings.height,
        settings.width,
        seed,
        settings.score_goal,
        settings.moves_count
    );
    log_notable(&opening_events);
    render(&session);

    let mut taps = 0;
    while session.state().status() == GameStatus::InProgress && taps < args.max_taps {
        let Some((position, events)) = activate_any(&mut session)? else {
            // Cannot happen: the engine reshuffles or ends the game after
            // every resolution.
            log!("No activatable tap found, stopping");
            break;
        };
        taps += 1;

        let removed = count(&events, |e| matches!(e, GameEvent::TileRemoved(_)));
        let fell = count(&events, |e| matches!(e, GameEvent::TileFell(_)));
        log!(
            "Tap ({}, {}): removed {}, fell {}, score {}, moves left {}",
            position.row,
            position.column,
            removed,
            fell,
            session.state().score(),
            session.state().moves_left()
        );
        log_notable(&events);
        render(&session);
    }

    let score = session.state().score();
    match session.state().status() {
        GameStatus::Won => log!("Won with {} points after {} taps", score, taps),
        GameStatus::Lost => log!("Lost with {} points after {} taps", score, taps),
        GameStatus::InProgress => log!("Stopped after {} taps with {} points", taps, score),
    }

    Ok(())
}

/// Taps cells row-major until one activates. Non-activating taps are
/// free no-ops by the engine's contract, so trial taps are safe.
fn activate_any(session: &mut BlastSession) -> Result<Option<(Position, Vec<GameEvent>)>, String> {
    for row in 0..session.state().height() {
        for column in 0..session.state().width() {
            let position = Position::new(row, column);
            let events = session.tap(position)?;
            if !events.is_empty() {
                return Ok(Some((position, events)));
            }
        }
    }
    Ok(None)
}

fn count(events: &[GameEvent], predicate: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| predicate(e)).count()
}

fn log_notable(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::SuperTileCreated(position) => {
                log!("  Super tile created at ({}, {})", position.row, position.column);
            }
            GameEvent::BoardReshuffled => log!("  Board reshuffled"),
            GameEvent::GameOver(result) => log!("  Game over: {:?}", result),
            GameEvent::TileRemoved(_) | GameEvent::TileFell(_) | GameEvent::CascadeSettled => {}
        }
    }
}

fn render(session: &BlastSession) {
    for row in session.state().tiles() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Some(Tile::Color(color)) => {
                    char::from_digit(color % 10, 10).unwrap_or('?')
                }
                Some(Tile::Super) => '*',
                None => '.',
            })
            .collect();
        log!("  {}", line);
    }
}
