// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use tcdc::app_config::{self, Config, LogLevel};
use tcdc::app_controller::{Controller, TextUtility};
use tcdc::diff::{DiffOption, GranularityMode, ViewMode};

/// CLI Wrapper for GranularityMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliGranularity {
    Char,
    Word,
    Line,
}

impl From<CliGranularity> for GranularityMode {
    fn from(cli_mode: CliGranularity) -> Self {
        match cli_mode {
            CliGranularity::Char => GranularityMode::Character,
            CliGranularity::Word => GranularityMode::Word,
            CliGranularity::Line => GranularityMode::Line,
        }
    }
}

/// CLI Wrapper for ViewMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliView {
    Unified,
    Split,
}

impl From<CliView> for ViewMode {
    fn from(cli_view: CliView) -> Self {
        match cli_view {
            CliView::Unified => ViewMode::Unified,
            CliView::Split => ViewMode::Split,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare an original and a modified transcript
    Diff(DiffArgs),

    /// Remove SRT sequence numbers and timestamps from a file
    #[command(name = "strip-srt")]
    StripSrt(UtilityArgs),

    /// Put every sentence of a file in its own paragraph
    Reformat(UtilityArgs),

    /// Generate shell completions for tcdc
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// Original text file
    #[arg(value_name = "LEFT")]
    left: PathBuf,

    /// Modified text file
    #[arg(value_name = "RIGHT")]
    right: PathBuf,

    /// Collapse whitespace runs before comparing
    #[arg(short = 'w', long, overrides_with = "no_ignore_whitespace")]
    ignore_whitespace: bool,

    /// Compare whitespace as is, even if the config file ignores it
    #[arg(long, overrides_with = "ignore_whitespace")]
    no_ignore_whitespace: bool,

    /// Ignore changes made only of punctuation
    #[arg(short = 'p', long, overrides_with = "no_ignore_punctuation")]
    ignore_punctuation: bool,

    /// Report punctuation-only changes, even if the config file ignores them
    #[arg(long, overrides_with = "ignore_punctuation")]
    no_ignore_punctuation: bool,

    /// Put every sentence on its own line before comparing
    #[arg(short = 'b', long, overrides_with = "no_break_sentences")]
    break_sentences: bool,

    /// Keep the original line layout, even if the config file breaks sentences
    #[arg(long, overrides_with = "break_sentences")]
    no_break_sentences: bool,

    /// Diff granularity (default: line with --break-sentences, word otherwise)
    #[arg(short, long, value_enum)]
    mode: Option<CliGranularity>,

    /// Result layout
    #[arg(short, long, value_enum)]
    view: Option<CliView>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Do not print the diff summary
    #[arg(long)]
    no_summary: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl DiffArgs {
    // @returns: Options set on the command line; the last of a flag and its --no- form wins
    fn option_overrides(&self) -> Vec<(DiffOption, bool)> {
        [
            (DiffOption::IgnoreWhitespace, self.ignore_whitespace, self.no_ignore_whitespace),
            (DiffOption::IgnorePunctuation, self.ignore_punctuation, self.no_ignore_punctuation),
            (DiffOption::BreakSentences, self.break_sentences, self.no_break_sentences),
        ]
        .into_iter()
        .filter(|(_, on, off)| *on || *off)
        .map(|(option, on, _)| (option, on))
        .collect()
    }
}

#[derive(Args, Debug)]
struct UtilityArgs {
    /// Input text or SRT file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the result next to the input (e.g. talk.stripped.srt)
    #[arg(short, long, conflicts_with = "output")]
    write: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = app_config::default_config_path())]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// TCDC - Transcript Caption Diff Checker
///
/// Compares two versions of a transcript or caption text after light
/// normalization and shows what changed.
#[derive(Parser, Debug)]
#[command(name = "tcdc")]
#[command(version)]
#[command(about = "Transcript caption diff checker")]
#[command(long_about = "TCDC compares two versions of a transcript or caption text and reports what changed.

EXAMPLES:
    tcdc diff old.txt new.txt                  # Word-level diff with summary
    tcdc diff -p old.txt new.txt               # Ignore punctuation-only changes
    tcdc diff -b -v split old.txt new.txt      # One sentence per line, split view
    tcdc diff -m char --no-color a.txt b.txt   # Character diff with plain markers
    tcdc strip-srt captions.srt -w             # Writes captions.stripped.srt
    tcdc reformat transcript.txt -o out.txt    # One sentence per paragraph
    tcdc completions bash > tcdc.bash          # Generate bash completions

CONFIGURATION:
    Default options are stored in tcdc.json. You can specify a different
    config file with --config-path. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info; the effective level is known once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "tcdc", &mut std::io::stdout());
            Ok(())
        }
        Commands::Diff(args) => run_diff(args),
        Commands::StripSrt(args) => run_utility(TextUtility::StripSrt, args),
        Commands::Reformat(args) => run_utility(TextUtility::Reformat, args),
    }
}

// Load the config file and apply the log level, CLI taking precedence
fn load_config(common: &CommonArgs) -> Result<Config> {
    if let Some(cli_level) = &common.log_level {
        log::set_max_level(LogLevel::from(cli_level.clone()).to_level_filter());
    }

    let mut config = Config::load_or_create(&common.config_path)
        .with_context(|| format!("Failed to load configuration: {}", common.config_path))?;

    if let Some(cli_level) = &common.log_level {
        config.log_level = cli_level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    debug!("Loaded configuration from {}", common.config_path);
    Ok(config)
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;

    for (option, value) in args.option_overrides() {
        config.diff.set(option, value);
    }

    if let Some(mode) = args.mode {
        config.granularity = Some(mode.into());
    }
    if let Some(view) = args.view {
        config.view = view.into();
    }
    if args.no_color {
        config.color = false;
    }
    if args.no_summary {
        config.show_summary = false;
    }

    let controller = Controller::with_config(config);
    let report = controller.run_diff(&args.left, &args.right)?;

    let mut stdout = std::io::stdout();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_utility(utility: TextUtility, args: UtilityArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let controller = Controller::with_config(config);

    if args.write || args.output.is_some() {
        controller.write_utility_output(utility, &args.input, args.output)?;
        return Ok(());
    }

    let result = controller.run_utility(utility, &args.input)?;
    println!("{}", result);
    Ok(())
}
