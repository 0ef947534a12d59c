//! Field Goal entry point
//!
//! The browser build is driven from JavaScript through `field_goal::web`.
//! Natively this runs a headless demo: the CPU kicker plays a session and
//! every kick is logged.
//!
//! Usage: `field-goal [kicks] [distance-yards] [wind] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use field_goal::announcer::{LogAnnouncer, Voice};
    use field_goal::consts::SIM_DT;
    use field_goal::sim::{
        AutoKicker, GameEvent, GameState, KickDistance, WindMode, select_distance, select_wind,
        tick,
    };
    use field_goal::{Settings, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Field Goal (native demo) starting...");

    let mut settings = Settings::load();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let kicks: u32 = match args.first() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid kick count {arg:?}, using 10");
            10
        }),
        None => 10,
    };
    if let Some(arg) = args.get(1) {
        match arg.parse().ok().and_then(KickDistance::from_yards) {
            Some(distance) => settings.distance = distance,
            None => log::warn!("Unknown distance {arg:?}, expected 20/30/40/50/60"),
        }
    }
    if let Some(arg) = args.get(2) {
        match WindMode::from_str(arg) {
            Some(mode) => settings.wind = mode,
            None => log::warn!("Unknown wind {arg:?}, expected none/light/heavy"),
        }
    }
    let seed: u64 = args
        .get(3)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut state = GameState::with_tuning(seed, Tuning::load());
    select_distance(&mut state, settings.distance);
    select_wind(&mut state, settings.wind);
    let mut kicker = AutoKicker::new(seed ^ 0x5eed);
    let mut voice = Voice::from_settings(LogAnnouncer, &settings);

    log::info!(
        "Seed {seed}: {kicks} kicks from {} yards, wind {}",
        settings.distance.yards(),
        settings.wind.as_str()
    );

    // One kick cycle takes a few seconds; cap runaway sessions
    let max_ticks = u64::from(kicks) * 60 * 30;
    let mut resolved = 0;
    while resolved < kicks && state.time_ticks < max_ticks {
        let input = kicker.input(&state);
        let events = tick(&mut state, &input, SIM_DT);
        voice.handle_events(&events);
        resolved += events
            .iter()
            .filter(|e| matches!(e, GameEvent::KickResolved { .. } | GameEvent::KickBlocked))
            .count() as u32;
    }

    let stats = state.stats;
    println!(
        "{}/{} made ({:.0}%), score {}, streak {}",
        stats.makes,
        stats.attempts,
        stats.make_percentage(),
        stats.score,
        stats.streak
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is field_goal::web::start, this is just to satisfy the compiler
}
