//! Let's Type entry point
//!
//! Native build runs a headless session: a simulated typist plays against the
//! engine on a manual clock and the end summary is printed as JSON.
//!
//! Usage: `lets-type [config.json] [--seed N]`

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use lets_type::sim::{EndSummary, NotificationSink, RemoveNotice, SpawnNotice, StateSnapshot};
use lets_type::{Clock, Config, Engine, FrameDriver, ManualClock, WordId, WordList};

/// Play-area height the demo host reports as every word's fall limit
const PLAY_HEIGHT: f64 = 480.0;
/// Display refresh the demo host simulates (60 Hz)
const FRAME: Duration = Duration::from_micros(16_667);
/// Simulated typist speed (characters per second)
const TYPIST_CPS: f64 = 4.0;
/// Chance the typist ignores a word entirely
const TYPIST_SKIP_CHANCE: f64 = 0.15;
/// Safety stop for unbounded sessions
const MAX_DEMO_SECS: u64 = 120;

/// headless falling-word session with a simulated typist
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// JSON config file (spawnIntervalMs, baseFallSpeed, initialLives, wordBudget)
    config: Option<PathBuf>,

    /// seed for word choice, fall speeds and the typist
    #[clap(short = 's', long, default_value_t = 12345)]
    seed: u64,
}

/// Host-side sink: remembers spawns so the host can finish them with
/// geometry, and keeps the last summary
#[derive(Default)]
struct DemoHost {
    pending: Vec<SpawnNotice>,
    summary: Option<EndSummary>,
}

impl NotificationSink for DemoHost {
    fn on_spawn(&mut self, notice: &SpawnNotice) {
        self.pending.push(notice.clone());
    }

    fn on_remove(&mut self, notice: &RemoveNotice) {
        if notice.miss {
            log::info!("missed '{}'", notice.text);
        } else {
            log::info!("typed '{}'", notice.text);
        }
    }

    fn on_state_change(&mut self, state: &StateSnapshot) {
        log::trace!("score={} lives={} wpm={}", state.score, state.lives, state.wpm);
    }

    fn on_end(&mut self, summary: &EndSummary) {
        self.summary = Some(*summary);
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Let's Type (headless) starting...");

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => Config::default().with_word_budget(20),
    };
    let seed = cli.seed;

    let clock = ManualClock::new();
    let mut engine = Engine::new(
        config,
        WordList::builtin(seed),
        clock.clone(),
        DemoHost::default(),
        seed,
    );
    let mut driver = FrameDriver::variable();
    let mut typist = Pcg32::seed_from_u64(seed ^ 0x5eed);
    // When each targeted word will have been typed
    let mut typing_queue: BTreeMap<WordId, (Duration, String)> = BTreeMap::new();
    let mut typist_free_at = Duration::ZERO;

    log::info!("Config: {:?}", engine.config());
    engine.start();
    driver.reset(clock.now());

    while engine.is_running() && clock.now() < Duration::from_secs(MAX_DEMO_SECS) {
        clock.advance(FRAME);
        driver.frame_now(&mut engine);

        for notice in std::mem::take(&mut engine.sink_mut().pending) {
            engine.set_fall_limit(notice.id, PLAY_HEIGHT);
            if typist.random::<f64>() < TYPIST_SKIP_CHANCE {
                continue;
            }
            let start = typist_free_at.max(clock.now());
            let secs = notice.text.chars().count() as f64 / TYPIST_CPS;
            let done = start + Duration::from_secs_f64(secs);
            typist_free_at = done;
            typing_queue.insert(notice.id, (done, notice.text));
        }

        let now = clock.now();
        let ready: Vec<WordId> = typing_queue
            .iter()
            .filter(|(_, (done, _))| *done <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in ready {
            if let Some((_, text)) = typing_queue.remove(&id) {
                engine.resolve_typed(&text);
            }
        }
    }

    if engine.is_running() {
        engine.stop();
    }

    let summary = engine.sink().summary.unwrap_or(EndSummary {
        score: engine.score(),
        lives: engine.lives(),
        wpm: engine.compute_wpm(),
        spawned: engine.spawned_count(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to encode summary: {}", e),
    }
}
