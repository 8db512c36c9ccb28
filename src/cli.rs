use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::types::{JudgeConfig, VerdictReport, ENV_TEST_INPUT, ENV_TEST_OUTPUT};
use crate::protocol::adapter::ProtocolAdapter;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CliMode {
    Compat,
    Opendata,
    Cms,
}

impl CliMode {
    fn primary_binary(self) -> &'static str {
        match self {
            Self::Compat => "sumjudge",
            Self::Opendata => "opendata-judge",
            Self::Cms => "cms-judge",
        }
    }

    fn mode_name(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Opendata => "opendata",
            Self::Cms => "cms",
        }
    }

    /// Dedicated binaries pin the emission protocol; compat selects via flag.
    fn fixed_protocol(self) -> Option<&'static str> {
        match self {
            Self::Compat => None,
            Self::Opendata => Some("opendata-v1"),
            Self::Cms => Some("cms-batch"),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verdict emission protocol (opendata-v1 or cms-batch)
    #[arg(long)]
    protocol: Option<String>,
    /// Reference input file: test count followed by addend pairs
    #[arg(long, env = ENV_TEST_INPUT, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Reference output file: expected sums, one per test case
    #[arg(long, env = ENV_TEST_OUTPUT, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn validate_protocol_mode(mode: CliMode, requested: Option<&str>) -> String {
    match (mode.fixed_protocol(), requested) {
        (Some(fixed), None) => fixed.to_string(),
        (Some(fixed), Some(requested)) => {
            // Restating the pinned protocol is fine; switching it is not.
            if crate::protocol::registry::canonical_name(requested) == Some(fixed) {
                return fixed.to_string();
            }
            eprintln!(
                "Error: protocol '{}' is not available in '{}' mode",
                requested,
                mode.mode_name()
            );
            eprintln!(
                "Use '{}' to select a protocol explicitly.",
                CliMode::Compat.primary_binary()
            );
            std::process::exit(2);
        }
        (None, Some(requested)) => requested.to_string(),
        (None, None) => {
            eprintln!("Error: --protocol is required in '{}' mode", mode.mode_name());
            eprintln!(
                "Pick 'opendata-v1' or 'cms-batch', or run one of the dedicated binaries ('{}', '{}').",
                CliMode::Opendata.primary_binary(),
                CliMode::Cms.primary_binary()
            );
            std::process::exit(2);
        }
    }
}

/// Entry point shared by all three binaries. Returns the process exit code;
/// fatal harness faults propagate as errors without emitting a verdict.
pub fn run(mode: CliMode) -> Result<i32> {
    env_logger::init();

    let cli = Cli::parse();
    let protocol = validate_protocol_mode(mode, cli.protocol.as_deref());

    let config = JudgeConfig::resolve(cli.input, cli.output)?;
    log::debug!(
        "judging via {} (reference input {}, reference output {})",
        protocol,
        config.input.display(),
        config.output.display()
    );

    let (input, reference) = config.open()?;
    let stdin = io::stdin();
    let verification = crate::verify::verifier::verify(input, reference, stdin.lock())?;

    let adapter = crate::protocol::registry::adapter_for(&protocol)?;
    let report = VerdictReport::new(adapter.name(), &verification);
    log::debug!("verdict report: {}", serde_json::to_string(&report)?);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = adapter.emit(verification.verdict, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(code)
}
