//! Command-line driver: flag parsing, logging setup, mode dispatch.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scanrs::{STDIN_PATH, ScanConfig, ScanMode, ScanOutcome, Source};

const DEFAULT_LOG_FILTER: &str = "warn";

const EXAMPLES: &str = "\
examples:
\tcat /usr/bin/ls | scanrs -m checksum
\tscanrs -f /usr/bin/ls -m checksum
\tscanrs -f /usr/bin/ls -m words -v ls
\techo \"small ssmall fix small\" | scanrs -m words -v small";

#[derive(Parser, Debug)]
#[command(
    name = "scanrs",
    about = "Checksum a file or count whole-word occurrences in one streaming pass",
    after_help = EXAMPLES,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Input file, `-` for standard input
    #[arg(short = 'f', value_name = "file_name|-", default_value = STDIN_PATH)]
    pub file: String,

    /// Scan mode
    #[arg(short = 'm', value_name = "words|checksum", default_value = "checksum")]
    pub mode: ScanMode,

    /// Word to count, required in `words` mode
    #[arg(short = 'v', value_name = "word", default_value = "", allow_hyphen_values = true)]
    pub word: String,
}

impl Args {
    /// Rejects flag combinations that cannot be scanned.
    pub fn validate(&self) -> Result<()> {
        if self.mode == ScanMode::Words && self.word.is_empty() {
            bail!("mode 'words' require non empty '-v' option");
        }
        if self.file.is_empty() {
            bail!("empty file name");
        }
        Ok(())
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Opens the input and runs the selected scan.
pub fn execute(args: &Args) -> Result<ScanOutcome> {
    args.validate()?;

    let config = ScanConfig::default();
    let mut source = Source::open(&args.file, &config)?;
    debug!(file = %args.file, mode = %args.mode, source = source.kind(), "starting scan");

    let outcome = scanrs::run(&mut source, args.mode, Some(args.word.as_bytes()))
        .with_context(|| format!("scan of \"{}\" failed", args.file))?;

    Ok(outcome)
}

/// Parses the process arguments, runs, and maps the result to an exit code.
///
/// Exit code 0 on success or `-h`; 1 on any parse, open, or I/O failure.
pub fn main_with_args<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        // Usage goes to stderr; stdout only ever carries the result line.
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            eprint!("{}", e.render());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let outcome = match execute(&args) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", outcome).and_then(|_| stdout.flush()) {
        eprintln!("write error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
