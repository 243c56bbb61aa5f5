//! Property tests over random tick/resolve/limit sequences

use proptest::prelude::*;

use lets_type::sim::{EventLog, SessionPhase};
use lets_type::{Config, Engine, ManualClock, WordList};

#[derive(Debug, Clone)]
enum Action {
    Tick(f64),
    /// Resolve the nth active word (wrapping), or a stale id when none
    Resolve(usize),
    /// Give the nth active word a fall limit
    Limit(usize, f64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0.0f64..0.3).prop_map(Action::Tick),
        2 => (0usize..8).prop_map(Action::Resolve),
        2 => ((0usize..8), (0.0f64..120.0)).prop_map(|(i, l)| Action::Limit(i, l)),
    ]
}

fn config() -> impl Strategy<Value = Config> {
    (
        50.0f64..600.0,
        20.0f64..200.0,
        1u32..5,
        prop::option::of(1u32..6),
    )
        .prop_map(|(interval, speed, lives, budget)| Config {
            spawn_interval_ms: interval,
            base_fall_speed: speed,
            initial_lives: lives,
            word_budget: budget,
        })
}

fn build(config: Config, seed: u64) -> Engine<WordList, ManualClock, EventLog> {
    Engine::new(
        config,
        WordList::builtin(seed),
        ManualClock::new(),
        EventLog::new(),
        seed,
    )
}

proptest! {
    #[test]
    fn lives_never_increase(
        config in config(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..200),
    ) {
        let mut engine = build(config, seed);
        engine.start();
        let mut last_lives = engine.lives();
        let mut stale = Vec::new();

        for action in actions {
            match action {
                Action::Tick(dt) => {
                    engine.clock().advance_secs(dt);
                    engine.tick(dt);
                }
                Action::Resolve(n) => {
                    let ids: Vec<_> = engine.active_words().map(|w| w.id).collect();
                    if ids.is_empty() {
                        if let Some(id) = stale.first().copied() {
                            prop_assert!(!engine.resolve_word(id));
                        }
                    } else {
                        let id = ids[n % ids.len()];
                        prop_assert!(engine.resolve_word(id));
                        stale.push(id);
                    }
                }
                Action::Limit(n, limit) => {
                    let ids: Vec<_> = engine.active_words().map(|w| w.id).collect();
                    if !ids.is_empty() {
                        engine.set_fall_limit(ids[n % ids.len()], limit);
                    }
                }
            }

            prop_assert!(engine.lives() <= last_lives);
            last_lives = engine.lives();
            if engine.is_running() {
                prop_assert!(engine.lives() > 0);
            }
        }
    }

    #[test]
    fn resolve_succeeds_iff_active(
        seed in any::<u64>(),
        ticks in 1usize..40,
        pick in any::<usize>(),
    ) {
        let config = Config { spawn_interval_ms: 100.0, ..Default::default() };
        let mut engine = build(config, seed);
        engine.start();
        for _ in 0..ticks {
            engine.tick(0.15);
        }
        let ids: Vec<_> = engine.active_words().map(|w| w.id).collect();
        prop_assume!(!ids.is_empty());
        let id = ids[pick % ids.len()];

        let before = engine.active_count();
        let len = engine.active_word(id).map(|w| w.char_len()).unwrap_or(0);
        let score = engine.score();
        let typed = engine.typed_chars();

        prop_assert!(engine.resolve_word(id));
        prop_assert_eq!(engine.active_count(), before - 1);
        prop_assert_eq!(engine.score(), score + len.max(1) as u64);
        prop_assert_eq!(engine.typed_chars(), typed + len as u64);
        prop_assert!(!engine.resolve_word(id));
        prop_assert_eq!(engine.active_count(), before - 1);
    }

    #[test]
    fn budget_caps_spawns(
        budget in 1u32..6,
        seed in any::<u64>(),
        ticks in 1usize..400,
    ) {
        let config = Config {
            spawn_interval_ms: 50.0,
            ..Default::default()
        }
        .with_word_budget(budget);
        let mut engine = build(config, seed);
        engine.start();
        for _ in 0..ticks {
            engine.tick(0.1);
        }
        prop_assert!(engine.spawned_count() <= u64::from(budget));
        prop_assert_eq!(engine.spawn_finished(), engine.spawned_count() == u64::from(budget));
    }

    #[test]
    fn session_ends_only_on_terminal_condition(
        config in config(),
        seed in any::<u64>(),
        limit in 0.0f64..80.0,
        ticks in 1usize..300,
    ) {
        let mut engine = build(config, seed);
        engine.start();
        for _ in 0..ticks {
            let was_running = engine.is_running();
            engine.tick(0.05);
            if engine.is_running() {
                prop_assert!(engine.lives() > 0);
                prop_assert!(!(engine.spawn_finished() && engine.active_count() == 0));
            }
            let ids: Vec<_> = engine.active_words().map(|w| w.id).collect();
            for id in ids {
                engine.set_fall_limit(id, limit);
            }
            if was_running && engine.phase() == SessionPhase::Ended {
                prop_assert!(
                    engine.lives() == 0
                        || (engine.spawn_finished() && engine.active_count() == 0)
                );
                prop_assert_eq!(engine.sink().ends().count(), 1);
            }
        }
    }
}
