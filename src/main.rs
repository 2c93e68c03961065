mod optimize;
mod parser;
mod plot;
mod prompt;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Chart output path, relative to the working directory.
const CHART_PATH: &str = "isp_vs_of.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let choice = prompt::prompt_choice(&mut input, &mut out)?;
    let filepath = prompt::prompt_filepath(&mut input, &mut out)?;

    let text = std::fs::read_to_string(&filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    let groups = parser::extract(&text);
    info!(pressures = groups.len(), "extraction finished");
    debug!(data = %serde_json::to_string(&groups)?, "extracted groups");

    let chart_path = Path::new(CHART_PATH);
    plot::render(&groups, choice, chart_path)
        .with_context(|| format!("failed to render {}", chart_path.display()))?;
    println!("Chart written to {}", chart_path.display());

    let best = optimize::best_ratios(&groups);
    println!("Best O/F Ratios for Highest Isp:");
    for b in &best {
        println!(
            "Pressure: {} bar -> Best O/F: {}, Max Isp: {} m/s",
            b.pressure, b.of_ratio, b.isp
        );
    }

    Ok(())
}
