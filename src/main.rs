//! Generates a random graph and prints its adjacency matrix, the distances from a start vertex
//! and the graph's radius, diameter, central and peripheral vertices.
//!
//! Exit code 1 on any usage or validation error, nothing but the error is printed then.

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser, ValueEnum};
use eccentric::{generate::DEFAULT_EDGE_PROBABILITY, Config, Format};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Flags also accepted with a single leading dash, e.g. `-start 0`.
const LEGACY_FLAGS: &[&str] = &["start", "weighted", "directed", "seed", "format"];

/// Generate a random graph and measure its eccentricities
#[derive(Debug, Parser)]
#[command(name = "eccentric", version)]
struct Cli {
    /// Number of vertices in the generated graph
    #[arg(short = 'n', long = "vertices")]
    vertices: usize,

    /// Vertex to report distances from
    #[arg(long)]
    start: usize,

    /// Give edges random weights from 1 to 10
    #[arg(long)]
    weighted: bool,

    /// Generate directed edges
    #[arg(long)]
    directed: bool,

    /// Probability of each possible edge being present
    #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY)]
    edge_probability: f64,

    /// Seed for the random generator, picked at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv), logs go to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            vertices: self.vertices,
            start: self.start,
            weighted: self.weighted,
            directed: self.directed,
            edge_probability: self.edge_probability,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(legacy_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version output are not errors.
            print!("{err}");
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match eccentric::run(&cli.config(), cli.format.into(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(%err, "run failed");
            let _ = writeln!(out, "error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Rewrites single-dash long flags (`-start`) to the double-dash form clap expects.
fn legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag)
                if flag
                    .strip_prefix('-')
                    .is_some_and(|name| LEGACY_FLAGS.contains(&name)) =>
            {
                format!("-{flag}").into()
            }
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let args = std::iter::once("eccentric")
            .chain(args.iter().copied())
            .map(OsString::from);

        Cli::try_parse_from(legacy_args(args))
    }

    #[test]
    fn legacy_flags() {
        let cli = parse(&["-weighted", "-directed", "-n", "5", "-start", "2"]).unwrap();

        assert_eq!(
            cli.config(),
            Config {
                weighted: true,
                directed: true,
                ..Config::new(5, 2)
            }
        );
    }

    #[test]
    fn long_flags() {
        let cli = parse(&[
            "--vertices",
            "4",
            "--start",
            "0",
            "--seed",
            "17",
            "--edge-probability",
            "0.2",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.config().seed, Some(17));
        assert_eq!(cli.config().edge_probability, 0.2);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn missing_required() {
        let err = parse(&["-n", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());

        let err = parse(&["-start", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn malformed_number() {
        let err = parse(&["-n", "five", "-start", "0"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn start_out_of_range_is_left_to_validation() {
        let cli = parse(&["-n", "3", "-start", "3"]).unwrap();

        assert!(cli.config().validate().is_err());
    }

    #[test]
    fn legacy_args_leaves_other_arguments() {
        let args: Vec<OsString> = ["eccentric", "-n", "3", "--start", "-v", "-x"]
            .into_iter()
            .map(OsString::from)
            .collect();

        assert_eq!(
            legacy_args(args),
            ["eccentric", "-n", "3", "--start", "-v", "-x"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
