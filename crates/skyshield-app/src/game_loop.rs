//! Battery game loop: drives `SimulationEngine` at the configured tick rate.
//!
//! Operator commands arrive as JSON lines on a reader thread and reach the
//! loop over an `mpsc` channel. Each tick's snapshot is written to the output
//! as one JSON line.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

use tracing::{debug, info, warn};

use skyshield_core::commands::PlayerCommand;
use skyshield_sim::score::ScoreState;
use skyshield_sim::SimulationEngine;

use crate::assets::AudioAssets;
use crate::error::AppError;

/// Commands forwarded from the input thread to the loop.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the engine.
    Player(PlayerCommand),
    /// The input stream reached its end.
    InputClosed,
}

/// Run-level knobs that are not part of the simulation config.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Stop after this many ticks even if no Quit arrives.
    pub max_ticks: Option<u64>,
    /// Skip the per-tick sleep.
    pub no_throttle: bool,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterySummary {
    pub ticks: u64,
    pub score: ScoreState,
}

/// Nominal duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Parse one input line. Blank lines and malformed JSON yield `None`.
pub fn parse_command_line(line: &str) -> Option<PlayerCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(command) => Some(command),
        Err(err) => {
            warn!(%err, line, "ignoring malformed command");
            None
        }
    }
}

/// Spawn a thread that reads commands from `reader` until EOF.
pub fn spawn_command_reader<R>(reader: R) -> Result<mpsc::Receiver<LoopCommand>, AppError>
where
    R: BufRead + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("skyshield-input".into())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!(%err, "command input failed");
                        break;
                    }
                };
                if let Some(command) = parse_command_line(&line) {
                    if cmd_tx.send(LoopCommand::Player(command)).is_err() {
                        return;
                    }
                }
            }
            let _ = cmd_tx.send(LoopCommand::InputClosed);
        })?;

    Ok(cmd_rx)
}

/// Run the battery until Quit or the tick budget is spent.
///
/// End of input does not stop the run; the battery keeps defending until it
/// is told to quit.
pub fn run_battery<W: Write>(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    out: &mut W,
    options: LoopOptions,
    assets: Option<&AudioAssets>,
) -> Result<BatterySummary, AppError> {
    let interval = tick_duration(engine.config().tick_rate);
    let mut input_open = true;
    let mut ticks = 0u64;

    info!(
        tick_rate = engine.config().tick_rate,
        max_ticks = ?options.max_ticks,
        "battery online"
    );

    loop {
        // 1. Drain all pending commands
        while input_open {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => engine.queue_command(command),
                Ok(LoopCommand::InputClosed) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command input closed");
                    input_open = false;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        ticks += 1;

        for event in &snapshot.audio_events {
            let cue = event.cue();
            match assets.and_then(|a| a.path(cue)) {
                Some(path) => debug!(?cue, path = %path.display(), "audio cue"),
                None => debug!(?cue, "audio cue"),
            }
        }

        // 3. Emit snapshot
        serde_json::to_writer(&mut *out, &snapshot).map_err(io::Error::from)?;
        writeln!(out)?;

        if !engine.is_running() {
            break;
        }
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            info!(ticks, "tick budget spent");
            break;
        }

        // 4. Fixed delay until the next tick
        if !options.no_throttle {
            std::thread::sleep(interval);
        }
    }
    out.flush()?;

    let score = engine.score();
    info!(
        ticks,
        interceptions = score.interceptions,
        threats_launched = score.threats_launched,
        interceptors_fired = score.interceptors_fired,
        impacts = score.impacts,
        "battery offline"
    );
    Ok(BatterySummary { ticks, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::config::BatteryConfig;
    use skyshield_core::enums::{GamePhase, ThreatKind};
    use skyshield_core::state::GameStateSnapshot;
    use std::io::Cursor;

    fn no_throttle(max_ticks: Option<u64>) -> LoopOptions {
        LoopOptions {
            max_ticks,
            no_throttle: true,
        }
    }

    fn snapshots(out: &[u8]) -> Vec<GameStateSnapshot> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Player(PlayerCommand::Click { x: 60.0, y: 60.0 }))
            .unwrap();
        tx.send(LoopCommand::Player(PlayerCommand::Quit)).unwrap();
        tx.send(LoopCommand::InputClosed).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Player(PlayerCommand::Click { .. })
        ));
        assert!(matches!(commands[1], LoopCommand::Player(PlayerCommand::Quit)));
        assert!(matches!(commands[2], LoopCommand::InputClosed));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(tick_duration(60).as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_parse_command_line() {
        assert_eq!(
            parse_command_line(r#"  {"type":"LaunchThreat","kind":"Swift"}  "#),
            Some(PlayerCommand::LaunchThreat {
                kind: ThreatKind::Swift
            })
        );
        assert_eq!(parse_command_line(""), None);
        assert_eq!(parse_command_line("launch please"), None);
        assert_eq!(parse_command_line(r#"{"type":"Explode"}"#), None);
    }

    #[test]
    fn test_reader_thread_skips_bad_lines() {
        let input = "{\"type\":\"Click\",\"x\":100,\"y\":70}\nnot json\n\n{\"type\":\"Quit\"}\n";
        let rx = spawn_command_reader(Cursor::new(input)).unwrap();

        let commands: Vec<LoopCommand> = rx.iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Player(PlayerCommand::Click { .. })
        ));
        assert!(matches!(commands[1], LoopCommand::Player(PlayerCommand::Quit)));
        assert!(matches!(commands[2], LoopCommand::InputClosed));
    }

    #[test]
    fn test_quit_ends_run_after_final_snapshot() {
        let mut engine = SimulationEngine::new(BatteryConfig::default()).unwrap();
        let (tx, rx) = mpsc::channel();
        tx.send(LoopCommand::Player(PlayerCommand::LaunchThreat {
            kind: ThreatKind::Heavy,
        }))
        .unwrap();
        tx.send(LoopCommand::Player(PlayerCommand::Quit)).unwrap();

        let mut out = Vec::new();
        let summary =
            run_battery(&mut engine, &rx, &mut out, no_throttle(Some(1000)), None).unwrap();

        let lines = snapshots(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].phase, GamePhase::Stopped);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.score.threats_launched, 1);
    }

    #[test]
    fn test_closed_input_keeps_running_until_budget() {
        let mut engine = SimulationEngine::new(BatteryConfig::default()).unwrap();
        let (tx, rx) = mpsc::channel();
        tx.send(LoopCommand::Player(PlayerCommand::Click { x: 100.0, y: 70.0 }))
            .unwrap();
        drop(tx);

        let mut out = Vec::new();
        let summary =
            run_battery(&mut engine, &rx, &mut out, no_throttle(Some(25)), None).unwrap();

        let lines = snapshots(&out);
        assert_eq!(lines.len(), 25);
        assert_eq!(summary.ticks, 25);
        assert_eq!(lines[0].threats.len(), 1);
        assert_eq!(lines[24].time.tick, 25);
        assert!(lines.iter().all(|s| s.phase == GamePhase::Running));
    }
}
