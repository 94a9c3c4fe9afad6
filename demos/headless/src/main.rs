//! headless — batch crowdnav runner.
//!
//! Runs a configured number of episodes without any rendering, prints
//! per-episode results with running averages, and writes per-tick penalties
//! plus episode summaries as CSV.  Every run is replayable: the seed in use
//! is always printed, including entropy-drawn ones.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use nav_core::{EpisodeId, SimConfig, Tick};
use nav_output::{CsvWriter, StatsOutputObserver};
use nav_policy::{ControlMode, Policy};
use nav_scenario::{builtin, load_templates, select_template};
use nav_sim::{EpisodeStats, SimBuilder, SimObserver, StepPenalty};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Crowd navigation simulation (headless)")]
struct Args {
    /// Scenario id from the config directory (home, airport, shopping_center).
    #[arg(long, env = "CROWD_SIM_SCENARIO", default_value = "airport")]
    scenario: String,

    /// Number of pedestrians to spawn.
    #[arg(long, env = "CROWD_SIM_PEDESTRIANS", default_value_t = 12)]
    pedestrians: usize,

    /// Deterministic seed for the run RNG.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Use an entropy-based seed instead of the deterministic one.
    #[arg(long, env = "CROWD_SIM_RANDOM_SEED")]
    random_seed: bool,

    /// Randomize obstacle layouts per episode.
    #[arg(long, env = "CROWD_SIM_RANDOM_WORLD")]
    random_world: bool,

    /// Path to the scenario JSON config directory.
    #[arg(long, env = "CROWD_SIM_SCENARIO_DIR", default_value = "configs")]
    scenario_config_dir: PathBuf,

    /// Control mode: manual, naive, random, potential_field.
    #[arg(long, default_value = "potential_field")]
    mode: ControlMode,

    /// Episodes to run.
    #[arg(long, default_value_t = 10)]
    episodes: u32,

    /// Step cap per episode before it counts as timed out.
    #[arg(long, default_value_t = 5_000)]
    max_steps: u64,

    /// Directory for the CSV output files.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

// ── Console reporting ─────────────────────────────────────────────────────────

/// Wraps the CSV observer and prints per-episode lines with running averages,
/// matching the cadence of an interactive run.
struct ConsoleReport<O: SimObserver> {
    inner:     O,
    penalties: Vec<f32>,
    steps:     Vec<u64>,
}

impl<O: SimObserver> ConsoleReport<O> {
    fn new(inner: O) -> Self {
        Self { inner, penalties: Vec::new(), steps: Vec::new() }
    }
}

impl<O: SimObserver> SimObserver for ConsoleReport<O> {
    fn on_episode_start(&mut self, episode: EpisodeId) {
        self.inner.on_episode_start(episode);
    }

    fn on_tick_end(&mut self, tick: Tick, penalty: &StepPenalty) {
        self.inner.on_tick_end(tick, penalty);
    }

    fn on_episode_end(&mut self, stats: &EpisodeStats) {
        self.penalties.push(stats.total_penalty);
        self.steps.push(stats.steps);
        let n = self.penalties.len() as f32;
        let avg_penalty = self.penalties.iter().sum::<f32>() / n;
        let avg_steps = self.steps.iter().sum::<u64>() as f32 / n;

        let outcome = if stats.goal_reached { "goal" } else { "timeout" };
        println!(
            "Episode {}: penalty={:.1}, steps={}, outcome={}",
            stats.episode.0, stats.total_penalty, stats.steps, outcome
        );
        println!("  Averages: penalty={avg_penalty:.1}, steps={avg_steps:.1}");
        self.inner.on_episode_end(stats);
    }

    fn on_run_end(&mut self, all: &[EpisodeStats]) {
        self.inner.on_run_end(all);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let seed = if args.random_seed { rand::random() } else { args.seed };

    // 1. Scenario templates: config directory when present, stock layouts
    //    otherwise (the stock set mirrors the shipped JSON files).
    let templates = if args.scenario_config_dir.is_dir() {
        load_templates(&args.scenario_config_dir)
            .with_context(|| format!("loading {}", args.scenario_config_dir.display()))?
    } else {
        eprintln!(
            "note: scenario dir {} not found, using built-in templates",
            args.scenario_config_dir.display()
        );
        builtin::all()
    };
    let template = select_template(&templates, &args.scenario)?.clone();

    // 2. Run configuration.
    let config = SimConfig {
        seed,
        max_steps_per_episode: args.max_steps,
        episodes:              args.episodes,
        pedestrian_count:      args.pedestrians,
        randomize_world:       args.random_world,
        ..SimConfig::default()
    };

    println!("=== crowdnav headless ===");
    println!(
        "Scenario: {} | Mode: {} | Pedestrians: {} | Episodes: {}",
        template.name, args.mode, args.pedestrians, args.episodes
    );
    println!("Seed: {seed} | random_world={}", args.random_world);
    println!();

    // 3. Build and run.
    let mut runner = SimBuilder::new(config, template, Policy::from_mode(args.mode)).build()?;

    std::fs::create_dir_all(&args.output_dir)?;
    let writer = CsvWriter::new(Path::new(&args.output_dir))?;
    let mut observer = ConsoleReport::new(StatsOutputObserver::new(writer));

    let all = runner.run(&mut observer);

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary table.
    let reached = all.iter().filter(|s| s.goal_reached).count();
    println!();
    println!("{:<10} {:<8} {:<12} {:<12} {:<12}", "Episode", "Steps", "Penalty", "Intrusions", "Collisions");
    println!("{}", "-".repeat(56));
    for s in &all {
        println!(
            "{:<10} {:<8} {:<12.1} {:<12} {:<12}",
            s.episode.0, s.steps, s.total_penalty, s.intrusions, s.collisions
        );
    }
    println!();
    println!(
        "Goal reached in {reached}/{} episodes; output in {}",
        all.len(),
        args.output_dir.display()
    );

    Ok(())
}
