use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use onslaught_app::autopilot;
use onslaught_app::control;
use onslaught_app::game_loop::TICK_DURATION;
use onslaught_app::state::AppState;
use onslaught_core::commands::PlayerCommand;
use onslaught_core::enums::GamePhase;
use onslaught_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "onslaught", about = "Run a headless Onslaught session")]
struct Cli {
    /// JSON file with simulation settings; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wall-clock seconds to play before stopping
    #[arg(long, default_value_t = 30)]
    seconds: u64,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(seed = config.seed, seconds = cli.seconds, "Starting session");

    let state = AppState::new();
    control::start_simulation(&state, config).map_err(anyhow::Error::msg)?;
    control::send_command(&state, PlayerCommand::StartGame).map_err(anyhow::Error::msg)?;
    control::send_command(&state, PlayerCommand::ToggleAutoShoot)
        .map_err(anyhow::Error::msg)?;

    let deadline = Instant::now() + Duration::from_secs(cli.seconds);
    let mut last = None;
    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = control::get_snapshot(&state).map_err(anyhow::Error::msg)? else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            last = Some(snapshot);
            break;
        }
        let input = autopilot::next_input(&snapshot, snapshot.time.tick);
        control::send_input(&state, input).map_err(anyhow::Error::msg)?;
        last = Some(snapshot);
    }

    control::stop_simulation(&state).map_err(anyhow::Error::msg)?;

    let Some(snapshot) = last else {
        bail!("simulation produced no snapshot");
    };
    info!(
        phase = ?snapshot.phase,
        elapsed_secs = snapshot.time.elapsed_secs,
        wave = snapshot.hud.wave,
        level = snapshot.hud.level,
        score = snapshot.hud.score,
        high_score = snapshot.hud.high_score,
        "Session finished"
    );
    Ok(())
}
