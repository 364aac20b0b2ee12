use anyhow::{Context, Result};
use lux_probe::{evaluate, ProbeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ProbeConfig::load(&path)
            .with_context(|| format!("Failed to load probe file {}", path))?,
        None => {
            log::info!("No probe file given, reading from stdin");
            ProbeConfig::from_reader(std::io::stdin().lock())
                .context("Failed to read probe config from stdin")?
        }
    };

    let samples = evaluate(&config).context("Failed to evaluate rays")?;
    for sample in &samples {
        println!("{} {} {}", sample.name, sample.t, sample.position);
    }

    log::info!("Evaluated {} samples", samples.len());
    Ok(())
}
