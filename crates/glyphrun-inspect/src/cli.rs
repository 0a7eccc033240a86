use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use glyphrun::{DecodeOptions, Encoding, InvalidPolicy, TruncationPolicy};

use crate::error::Result;
use crate::input::{decode, read_input};
use crate::logging;
use crate::report::{self, OutputFormat, emit};

#[derive(Debug, Parser)]
#[command(
    name = "glyphrun-inspect",
    about = "Inspect how glyphrun decodes, classifies and segments text",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every decoded codepoint with its properties.
    #[command(visible_alias = "cp")]
    Codepoints(InputArgs),

    /// Show the script/presentation runs a shaper would receive.
    Runs(InputArgs),

    /// Show script runs and the script of each member codepoint.
    Scripts(InputArgs),

    /// Show emoji presentation runs and each codepoint's grammar category.
    Emoji(InputArgs),
}

impl Commands {
    #[must_use]
    pub fn input(&self) -> &InputArgs {
        match self {
            Self::Codepoints(args) | Self::Runs(args) | Self::Scripts(args) | Self::Emoji(args) => {
                args
            }
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Input file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Input encoding: utf8, utf16 or utf32 (wide encodings little-endian).
    #[arg(short, long, default_value = "utf8")]
    pub encoding: Encoding,

    /// Emit U+FFFD for invalid sequences instead of dropping them.
    #[arg(long)]
    pub replace_invalid: bool,

    /// Fail when the input ends inside a codepoint or a code unit.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::new(self.encoding)
            .invalid(if self.replace_invalid {
                InvalidPolicy::Replace
            } else {
                InvalidPolicy::Skip
            })
            .truncation(if self.strict {
                TruncationPolicy::Reject
            } else {
                TruncationPolicy::Discard
            })
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let bytes = read_input(cli.command.input().file.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &bytes, cli.format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run `command` over `bytes`, writing the report to `out`.
pub fn execute(
    command: &Commands,
    bytes: &[u8],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let located = decode(bytes, &command.input().decode_options())?;
    let chars: Vec<char> = located.iter().map(|l| l.ch).collect();
    match command {
        Commands::Codepoints(_) => emit(&report::codepoints(&located), format, out),
        Commands::Runs(_) => emit(&report::runs(&chars), format, out),
        Commands::Scripts(_) => emit(&report::scripts(&chars), format, out),
        Commands::Emoji(_) => emit(&report::emoji(&chars), format, out),
    }
}
