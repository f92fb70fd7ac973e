//! Command-line interface of the `rhc` binary

use crate::{AnalysisConfig, Polynomial};
use clap::Parser;
use routh_parse::{parse_polynomial, parse_polynomial_in, ParseError};
use tracing_subscriber::EnvFilter;

/// Routh-Hurwitz stability criterion for characteristic polynomials
#[derive(Debug, Parser)]
#[command(name = "rhc", version, about)]
pub struct Cli {
    /// Characteristic polynomial, e.g. "s^3 + 2s^2 + s + 2"
    ///
    /// Put `--` before polynomials that start with a minus sign.
    #[arg(allow_hyphen_values = true)]
    pub polynomial: String,

    /// Variable of the polynomial; inferred when omitted
    #[arg(short = 'x', long = "variable", value_name = "NAME")]
    pub variable: Option<String>,

    /// Decimal places used to round reported roots
    #[arg(long, default_value_t = 5)]
    pub precision: u32,

    /// Multiply the polynomial by -1 when its leading coefficient is negative
    #[arg(long = "normalize-sign")]
    pub normalize_sign: bool,

    /// Skip the numerical root cross-check
    #[arg(long = "no-roots")]
    pub no_roots: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Analysis configuration selected by the flags
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_root_precision(self.precision)
            .with_cross_check(!self.no_roots)
            .with_normalized_sign(self.normalize_sign)
    }

    /// Parse the polynomial argument
    pub fn polynomial(&self) -> Result<Polynomial, ParseError> {
        match &self.variable {
            Some(variable) => parse_polynomial_in(&self.polynomial, variable),
            None => parse_polynomial(&self.polynomial),
        }
    }

    /// Log filter: `-v` flags win over `RUST_LOG`, which wins over `warn`
    pub fn log_filter(&self) -> EnvFilter {
        match self.verbosity {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }
}
