use std::path::PathBuf;

use clap::Parser;

use llm_tour::educational::InteractiveTutorial;
use llm_tour::telemetry::{DEFAULT_FILTER, setup_logging};
use llm_tour::{DemoScenario, StageCatalog, TourConfig, TourSession};

#[derive(Parser, Debug)]
#[command(name = "llm-tour")]
#[command(about = "Step through how an LLM turns a prompt into a response")]
struct Args {
    /// Prompt to start with (defaults to the scenario's prompt)
    #[arg(short, long)]
    prompt: Option<String>,

    /// JSON scenario file (prompt, keywords, response)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stage to open on, starting at 1 (out-of-range numbers are ignored)
    #[arg(long)]
    stage: Option<usize>,

    /// Milliseconds between generated fragments
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for token values
    #[arg(long)]
    seed: Option<u64>,

    /// Keep token values while their text is unchanged
    #[arg(long)]
    stable_values: bool,

    /// Reveal generated fragments without waiting
    #[arg(long)]
    instant: bool,
}

fn main() -> anyhow::Result<()> {
    setup_logging(DEFAULT_FILTER)?;
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::default(),
    };
    if let Some(tick_ms) = args.tick_ms {
        config.playback.tick_interval_ms = tick_ms;
    }
    if let Some(seed) = args.seed {
        config.tokenizer.seed = Some(seed);
    }
    if args.stable_values {
        config.tokenizer.stable_values = true;
    }

    let scenario = match &args.scenario {
        Some(path) => DemoScenario::load(path)?,
        None => DemoScenario::reference(),
    };
    tracing::info!(scenario = %scenario.name, "starting tour");

    let mut session = TourSession::new(&config, StageCatalog::reference(), scenario)?;
    if let Some(prompt) = args.prompt {
        session.set_prompt(prompt);
    }

    let mut tutorial = InteractiveTutorial::new(session);
    if args.instant {
        tutorial = tutorial.instant();
    }
    if let Some(stage) = args.stage {
        tutorial = tutorial.open_at(stage);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    tutorial.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
