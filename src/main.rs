//! RPS Arena entry point
//!
//! Headless runner: loads settings, replays an optional command scenario and
//! runs the paced tick loop until one kind has taken over the arena.
//!
//! Usage: `rps-arena [scenario.json] [--ticks N] [--fast]`

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rps_arena::sim::{Command, FixedStep, Kind, TickInput, World, tick};
use rps_arena::{Settings, ui};

/// Default tick limit (five minutes at speed 1)
const DEFAULT_MAX_TICKS: u64 = 30 * 60 * 5;
/// Real-time frame cadence of the headless loop
const FRAME: Duration = Duration::from_millis(16);

/// A command scheduled for a given tick
#[derive(Debug, Clone)]
struct ScheduledCommand {
    tick: u64,
    command: Command,
}

struct Options {
    scenario: Option<PathBuf>,
    max_ticks: u64,
    fast: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        scenario: None,
        max_ticks: DEFAULT_MAX_TICKS,
        fast: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fast" => options.fast = true,
            "--ticks" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => options.max_ticks = n,
                None => log::warn!("--ticks expects a number, keeping {}", options.max_ticks),
            },
            _ => options.scenario = Some(PathBuf::from(arg)),
        }
    }
    options
}

/// Load `[{"tick": n, "command": ...}, ...]`, skipping entries that don't parse
fn load_scenario(path: &Path) -> Vec<ScheduledCommand> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to read scenario {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&json) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Scenario {} is not a JSON array: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut scheduled: Vec<ScheduledCommand> = entries
        .iter()
        .filter_map(|entry| {
            let tick = entry.get("tick").and_then(|t| t.as_u64()).unwrap_or(0);
            let command = Command::from_json(entry.get("command")?)?;
            Some(ScheduledCommand { tick, command })
        })
        .collect();
    // Stable: same-tick commands keep file order
    scheduled.sort_by_key(|s| s.tick);
    log::info!("Loaded {} scenario commands from {}", scheduled.len(), path.display());
    scheduled
}

/// Round-robin spawns of every kind up to the initial cap
fn default_scenario(max_objects: usize) -> Vec<ScheduledCommand> {
    (0..max_objects)
        .map(|i| ScheduledCommand {
            tick: 0,
            command: Command::spawn(Kind::ALL[i % Kind::ALL.len()]),
        })
        .collect()
}

/// Pop every command scheduled at or before `now`
fn due_commands(pending: &mut Vec<ScheduledCommand>, now: u64) -> TickInput {
    let due = pending.iter().take_while(|s| s.tick <= now).count();
    TickInput::new(pending.drain(..due).map(|s| s.command).collect())
}

fn main() {
    env_logger::init();
    log::info!("RPS Arena (headless) starting...");

    let options = parse_args();
    let settings = Settings::load();
    let mut world = World::from_settings(&settings);
    let mut pending = match &options.scenario {
        Some(path) => load_scenario(path),
        None => default_scenario(world.sim.max_objects),
    };

    let mut step = FixedStep::new(settings.sanitized().base_tick_hz);
    let mut last_frame = Instant::now();
    let mut winner = None;

    'frames: while world.time_ticks < options.max_ticks {
        let ticks = if options.fast {
            1
        } else {
            std::thread::sleep(FRAME);
            let now = Instant::now();
            let frame_dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            step.advance(frame_dt, &world.sim)
        };

        for _ in 0..ticks {
            let input = due_commands(&mut pending, world.time_ticks);
            let report = tick(&mut world, &input);
            if report.truncated > 0 {
                log::info!("Population trimmed to cap {}", world.sim.max_objects);
            }

            let snapshot = world.snapshot();
            if world.time_ticks % world.sim.tick_rate_hz(step.base_hz()) as u64 == 0 {
                log::info!("[tick {}] {}", world.time_ticks, ui::hud_lines(&snapshot).join(" | "));
            }

            if pending.is_empty() {
                if let Some(kind) = snapshot.counts.sole_survivor() {
                    winner = Some(kind);
                    break 'frames;
                }
            }
            if world.time_ticks >= options.max_ticks {
                break 'frames;
            }
        }
    }

    match winner {
        Some(kind) => log::info!("{} took over after {} ticks", kind.as_str(), world.time_ticks),
        None => log::info!("Stopped after {} ticks without a winner", world.time_ticks),
    }

    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final snapshot: {}", e),
    }
}
