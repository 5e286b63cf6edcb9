mod rig;
mod script;
mod sim;

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use rig::Rig;
use std::process::ExitCode;

const DEMO_SEED: u64 = 42;

fn run() -> anyhow::Result<()> {
    let steps = match std::env::args().nth(1) {
        Some(path) => {
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("reading trace {path}"))?;
            let steps = script::parse_script(&src).with_context(|| format!("parsing {path}"))?;
            log::info!("[native] replaying {} steps from {}", steps.len(), path);
            steps
        }
        None => {
            let mut rng = StdRng::seed_from_u64(DEMO_SEED);
            let steps = sim::demo_script(&mut rng);
            log::info!("[native] no trace given, replaying {} demo steps", steps.len());
            steps
        }
    };

    let mut rig = Rig::new()?;
    rig.run(&steps);
    rig.log_summary();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[native] {e:#}");
            ExitCode::FAILURE
        }
    }
}
