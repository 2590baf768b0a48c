//! MC/DC driver for `(a && b) || c` - Command Line Interface
//!
//! Prints the five coverage cases and their outcomes. The exit status is
//! always success; disagreements and output failures go to stderr.

use clap::{Parser, ValueEnum};
use mcdc_decision::{Backend, CoverageReport, DriverConfig, Outcome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum BackendArg {
    /// C implementation linked into this binary (default)
    Linked,
    /// Rust implementation from the library
    Reference,
}

impl From<BackendArg> for Backend {
    fn from(val: BackendArg) -> Self {
        match val {
            BackendArg::Linked => Backend::Linked,
            BackendArg::Reference => Backend::Reference,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mcdc-driver")]
#[command(about = "MC/DC test driver for (a && b) || c", long_about = None)]
#[command(version)]
struct Args {
    /// Decision implementation to drive
    #[arg(short = 'b', long = "backend", value_enum, default_value = "linked")]
    backend: BackendArg,

    /// Provide execution summary on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print the independence pair found for each condition
    #[arg(short = 'p', long = "pairs")]
    pairs: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn write_pairs<W: Write>(out: &mut W, report: &CoverageReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Independence pairs:")?;
    for pair in report.pairs() {
        writeln!(out, "  {}", pair)?;
    }
    for cond in report.uncovered() {
        writeln!(out, "  {}: no pair", cond)?;
    }
    out.flush()
}

fn report<W: Write>(config: &DriverConfig, out: &mut W) -> Option<Vec<Outcome>> {
    let outcomes = match config.driver().run(out) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("{}", e);
            return None;
        }
    };

    if config.show_pairs {
        let coverage = CoverageReport::from_outcomes(&outcomes);
        if let Err(e) = write_pairs(out, &coverage) {
            eprintln!("Error writing pairs: {}", e);
        }
    }

    Some(outcomes)
}

fn main() {
    let args = Args::parse();

    let config = DriverConfig {
        backend: args.backend.into(),
        summary: args.summary,
        show_pairs: args.pairs,
    };

    if config.summary {
        eprintln!("Driving (a && b) || c with the {} decision", config.backend);
    }

    let outcomes = match args.output_file {
        Some(ref output_path) => match File::create(output_path) {
            Ok(file) => {
                let outcomes = report(&config, &mut BufWriter::new(file));
                if config.summary && outcomes.is_some() {
                    eprintln!("Wrote output to: {}", output_path.display());
                }
                outcomes
            }
            Err(e) => {
                eprintln!(
                    "Error creating output file '{}': {}",
                    output_path.display(),
                    e
                );
                None
            }
        },
        None => report(&config, &mut io::stdout().lock()),
    };

    let Some(outcomes) = outcomes else {
        return;
    };

    for outcome in &outcomes {
        if let Err(e) = outcome.check() {
            eprintln!("{}", e);
        }
    }

    if config.summary {
        let mismatches = outcomes.iter().filter(|o| !o.matches_expected()).count();
        let coverage = CoverageReport::from_outcomes(&outcomes);
        eprintln!(
            "{} of {} outcomes match (a && b) || c",
            outcomes.len() - mismatches,
            outcomes.len()
        );
        if coverage.is_satisfied() {
            eprintln!("MC/DC satisfied for a, b and c");
        } else {
            let missing: Vec<_> = coverage.uncovered().iter().map(|c| c.name()).collect();
            eprintln!("MC/DC not satisfied, no pair for: {}", missing.join(", "));
        }
        eprintln!("Done.");
    }
}
