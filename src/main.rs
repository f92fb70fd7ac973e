use anyhow::{Context, Result};
use clap::Parser;
use routh_hurwitz::cli::Cli;
use routh_hurwitz::RouthHurwitzAnalyzer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let polynomial = cli
        .polynomial()
        .with_context(|| format!("Invalid polynomial: {}", cli.polynomial))?;
    tracing::debug!(%polynomial, "analyzing");

    let analyzer = RouthHurwitzAnalyzer::new(cli.analysis_config())
        .context("Invalid analysis configuration")?;
    let result = analyzer
        .analyze(&polynomial)
        .with_context(|| format!("Failed to analyze {polynomial}"))?;

    print!("{result}");
    Ok(())
}
