use std::io;

use anyhow::Context;
use log::info;

use mental_health_nn::{MentalHealthNN, RunConfig, runner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RunConfig::from_env().context("reading configuration")?;
    info!(
        "reading samples from stdin: input={:?} skip_invalid={}",
        config.input(),
        config.skip_invalid()
    );

    let mut nn = MentalHealthNN::new();
    runner::run(&config, &mut nn, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
