use solsim::{Console, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Star and planets, one tick at a time")]
struct Args {
    /// YAML file with physical parameters (see scenarios/default.yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let cfg = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    Ok(Scenario::build_scenario(cfg)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let scenario = load_scenario(&args)?;
    log::info!("G = {:e}, {} s per tick", scenario.parameters.G, scenario.parameters.seconds_per_tick);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), scenario);
    console.run().context("console I/O failed")?;

    Ok(())
}
