use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cmake_saver::{Mode, RunConfig, output};

use crate::logging;

/// Highest exit status a shell reliably reports; larger counts saturate here.
const MAX_EXIT_STATUS: i32 = 255;

/// List CMake list files with trailing whitespace, or fix them in place.
///
/// Exits with the number of offending files in report mode (0 when all are
/// clean) and 0 in fix mode.
#[derive(Parser, Debug)]
#[command(name = "cmake-saver", version, about, long_about = None)]
pub struct Cli {
    /// Directory to search for CMake list files
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Fix CMake list files in place
    #[arg(short, long)]
    pub fix: bool,

    /// Recurse into all subdirectories of the input directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Print a JSON report instead of bare file paths
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.directory)
            .recursive(self.recursive)
            .mode(Mode::from_fix_flag(self.fix))
    }
}

/// Clamp a file count into a process exit status.
///
/// Counts above 255 would wrap on Unix and could read as success.
fn exit_status(count: usize) -> i32 {
    i32::try_from(count).map_or(MAX_EXIT_STATUS, |c| c.min(MAX_EXIT_STATUS))
}

/// Parse arguments, run the scan and return the process exit status.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(?cli, "parsed arguments");

    let config = cli.run_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = if cli.json {
        let report = cmake_saver::run(&config, &mut io::sink())?;
        output::write_json(&report, &mut out)?;
        report
    } else {
        cmake_saver::run(&config, &mut out)?
    };
    out.flush()?;

    Ok(exit_status(report.nonconforming_count()))
}
