use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hero_slider::config::HeroConfig;
use hero_slider::controller::HeroSlider;
use hero_slider::environment::HeroEnvironment;
use hero_slider::sim::{PageSession, SimulatedPage};

#[derive(Parser, Debug)]
#[command(name = "hero-slider", about = "Hero banner image slider")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a window hosting the slider
    #[cfg(feature = "desktop")]
    Window {
        #[command(flatten)]
        source: SourceArgs,
        /// Start unconditionally instead of waiting for the hero to be observed
        #[arg(long)]
        no_observer: bool,
    },
    /// Run the slider against a simulated page and log each slide change
    Simulate {
        #[command(flatten)]
        source: SourceArgs,
        /// Virtual seconds to simulate
        #[arg(long, default_value_t = 30)]
        seconds: u64,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// TOML config file
    #[arg(long, conflicts_with = "dir")]
    config: Option<PathBuf>,
    /// Directory of images to use as slides
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Base rotation interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
    /// Prefer reduced motion
    #[arg(long)]
    reduced_motion: bool,
}

impl SourceArgs {
    fn load(&self) -> Result<HeroConfig> {
        let mut config = match (&self.config, &self.dir) {
            (Some(path), _) => HeroConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            (None, Some(dir)) => HeroConfig::from_dir(dir)
                .with_context(|| format!("scanning slides in {}", dir.display()))?,
            (None, None) => HeroConfig::default(),
        };

        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if self.reduced_motion {
            config.reduced_motion = Some(true);
        }
        config.validate()?;
        Ok(config)
    }
}

fn simulate(config: &HeroConfig, seconds: u64) {
    let page = SimulatedPage::new();
    let preferences = config.preferences(page.prefers_reduced_motion());
    let slider = HeroSlider::new(page, config.slide_set(), preferences, config.mode);
    let mut session = PageSession::load(slider);

    let step = session.slider().effective_interval();
    let end = Duration::from_secs(seconds);
    let mut logged = 0;
    loop {
        let page = session.page();
        for url in &page.shown()[logged..] {
            tracing::info!(at = ?page.now(), %url, "slide shown");
        }
        logged = page.shown().len();

        if page.now() >= end {
            break;
        }
        let remaining = end - page.now();
        session.advance(step.min(remaining));
    }

    println!(
        "{} slides painted in {}s, resting on slide {}",
        logged,
        seconds,
        session.slider().current_index()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        #[cfg(feature = "desktop")]
        Command::Window { source, no_observer } => {
            let config = source.load()?;
            hero_slider::desktop::run(hero_slider::desktop::WindowOptions {
                config,
                observer: !no_observer,
            });
        }
        Command::Simulate { source, seconds } => {
            let config = source.load()?;
            simulate(&config, seconds);
        }
    }
    Ok(())
}
