//! prunecopy - filtered recursive copy
//!
//! Copies files from one or more source trees to one or more destinations,
//! filtering by filename patterns and directory names, with interactive
//! conflict resolution, flatten modes, dry-run, and optional file logging.

use clap::{Parser, ValueEnum};
use prunecopy::{
    ColorMode, CopyBuilder, CopyStats, Error as CopyError, EventKind, LogLevel, Logger,
    ParallelMode, copy_filtered,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

mod preset;

/// prunecopy - filtered recursive copy
///
/// Walks each SOURCE tree, copies every file that passes the include and
/// exclude filters into every --dest directory, and asks what to do when a
/// target already exists.
///
/// Usage:
///   prunecopy SOURCE... --dest DIR
///   prunecopy SOURCE... --dest DIR1 --dest DIR2 --include "*.hpp"
#[derive(Parser, Debug)]
#[command(name = "prunecopy", version, about, long_about = None)]
struct Args {
    /// Source directories to scan
    #[arg(value_name = "SOURCE")]
    sources: Vec<PathBuf>,

    /// Destination directory (repeatable; every matched file is copied to
    /// every destination)
    #[arg(short = 'd', long = "dest", value_name = "DIR")]
    destinations: Vec<PathBuf>,

    /// Filename pattern a file must match to be copied (repeatable;
    /// none given means all files)
    #[arg(long = "include", value_name = "GLOB")]
    include: Vec<String>,

    /// Filename pattern that excludes a file, even if included (repeatable)
    #[arg(long = "exclude-files", value_name = "GLOB")]
    exclude_files: Vec<String>,

    /// Skip directories whose name contains this substring (repeatable)
    #[arg(long = "exclude-dirs", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Copy all files directly into each destination, discarding structure
    #[arg(long)]
    flatten: bool,

    /// Flatten, prefixing file names with their original subdirectory path
    #[arg(long = "flatten-suffix")]
    flatten_suffix: bool,

    /// Flatten, renaming colliding files automatically (name(1).ext)
    #[arg(long = "auto-rename")]
    auto_rename: bool,

    /// Skip files that already exist at a destination
    #[arg(long = "no-overwrite")]
    no_overwrite: bool,

    /// Overwrite existing files without prompting
    #[arg(long = "force-overwrite")]
    force_overwrite: bool,

    /// Recursively delete each destination directory before copying
    #[arg(long = "delete-target-first")]
    delete_target_first: bool,

    /// Simulate the copy without touching the filesystem
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Parallel copy strategy (only "none" is implemented)
    #[arg(long, value_enum, default_value = "none")]
    parallel: ParallelArg,

    /// Write a full, unfiltered log file into this directory
    #[arg(long = "log-dir", value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Console verbosity
    #[arg(long = "log-level", value_enum, default_value = "info")]
    log_level: LogLevelArg,

    /// Console color output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorArg,

    /// Load a saved preset and run it (replaces all other options)
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Save the given options as a named preset after the run
    #[arg(long = "save-preset", value_name = "NAME")]
    save_preset: Option<String>,

    /// List saved presets and exit
    #[arg(long = "list-presets")]
    list_presets: bool,

    /// Print the arguments stored in a preset and exit
    #[arg(long = "show-preset", value_name = "NAME")]
    show_preset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParallelArg {
    None,
    Async,
    Thread,
    Openmp,
}

impl From<ParallelArg> for ParallelMode {
    fn from(arg: ParallelArg) -> Self {
        match arg {
            ParallelArg::None => Self::None,
            ParallelArg::Async => Self::Async,
            ParallelArg::Thread => Self::Thread,
            ParallelArg::Openmp => Self::OpenMp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevelArg {
    All,
    Standard,
    Info,
    Warning,
    Error,
    Off,
}

impl LogLevelArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Standard => "standard",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::All => Self::All,
            LogLevelArg::Standard => Self::Standard,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Warning => Self::Warning,
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Off => Self::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl ColorArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("No source directories given. Use --help to display available options")]
    MissingSources,

    #[error("No destination directories given (--dest). Use --help to display available options")]
    MissingDestinations,

    #[error("Failed to prepare log directory {path}: {source}")]
    LogDir { path: PathBuf, source: io::Error },

    #[error("Failed to open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },

    #[error("Failed to delete target directory {path}: {source}")]
    DeleteTarget { path: PathBuf, source: io::Error },

    #[error("Preset '{name}' is not valid: {message}")]
    InvalidPreset { name: String, message: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Preset(#[from] preset::PresetError),

    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => 0,
            Self::Preset(_) | Self::InvalidPreset { .. } => 2,
            Self::Copy(CopyError::ParallelModeUnimplemented(mode)) => match mode {
                ParallelMode::Async => 3,
                _ => 2,
            },
            _ => 1,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        let code = error.exit_code();
        // Cancellation was already reported through the logger.
        if code != 0 {
            eprintln!("error: {error}");
        }
        std::process::exit(code);
    }
}

fn run() -> CliResult<()> {
    let mut args = Args::parse();

    if args.list_presets {
        return list_presets();
    }
    if let Some(name) = args.show_preset.clone() {
        println!("{}", preset::show(&name)?);
        return Ok(());
    }

    let loaded_preset = args.preset.clone();
    if let Some(name) = &loaded_preset {
        args = load_preset_args(name)?;
    }

    if args.sources.is_empty() {
        return Err(CliError::MissingSources);
    }
    if args.destinations.is_empty() {
        return Err(CliError::MissingDestinations);
    }

    let logger = build_logger(&args)?;

    logger.event(EventKind::Info, "Starting prunecopy");
    if let Some(name) = &loaded_preset {
        logger.event(EventKind::Info, &format!("Loaded preset: {name}"));
    }
    log_run_setup(&logger, &args);

    if args.delete_target_first {
        delete_targets(&logger, &args)?;
    }

    logger.event(EventKind::Info, "Copying files...");

    let config = build_config(&args);

    match copy_filtered(&config, &logger) {
        Ok(stats) => {
            report_success(&logger, &stats);
            if let Some(name) = &args.save_preset {
                let path = preset::save(name, &rebuild_args(&args))?;
                logger.event(
                    EventKind::Success,
                    &format!("Preset saved: {}", path.display()),
                );
            }
            logger.flush();
            Ok(())
        }
        Err(CopyError::Cancelled { .. }) => {
            logger.always_to_console(EventKind::Aborted, "Operation cancelled by user.");
            logger.flush();
            Err(CliError::Cancelled)
        }
        Err(error) => {
            logger.event(EventKind::Error, &format!("Fatal error: {error}"));
            logger.flush();
            Err(CliError::Copy(error))
        }
    }
}

fn build_config(args: &Args) -> prunecopy::CopyConfig {
    let mut builder = CopyBuilder::new()
        .sources(args.sources.iter().cloned())
        .destinations(args.destinations.iter().cloned())
        .parallel_mode(args.parallel.into());
    for glob in &args.include {
        builder = builder.include(glob.clone());
    }
    for glob in &args.exclude_files {
        builder = builder.exclude_file(glob.clone());
    }
    for name in &args.exclude_dirs {
        builder = builder.exclude_dir(name.clone());
    }
    if args.flatten {
        builder = builder.flatten();
    }
    if args.flatten_suffix {
        builder = builder.flatten_with_suffix();
    }
    if args.auto_rename {
        builder = builder.auto_rename();
    }
    if args.dry_run {
        builder = builder.dry_run();
    }
    if args.no_overwrite {
        builder = builder.no_overwrite();
    }
    if args.force_overwrite {
        builder = builder.force_overwrite();
    }
    if args.delete_target_first {
        builder = builder.delete_target_first();
    }
    builder.build()
}

fn list_presets() -> CliResult<()> {
    let names = preset::list()?;
    if names.is_empty() {
        println!(
            "No presets found in: {}",
            preset::preset_dir().display()
        );
    } else {
        println!("Available presets:");
        for name in names {
            println!("  {name}");
        }
    }
    Ok(())
}

fn load_preset_args(name: &str) -> CliResult<Args> {
    let stored = preset::load(name)?;
    let argv = std::iter::once("prunecopy".to_string()).chain(stored);
    Args::try_parse_from(argv).map_err(|error| CliError::InvalidPreset {
        name: name.to_string(),
        message: error.to_string(),
    })
}

fn build_logger(args: &Args) -> CliResult<Logger> {
    let logger = Logger::new(args.log_level.into(), args.color.into());
    let Some(log_dir) = &args.log_dir else {
        return Ok(logger);
    };
    fs::create_dir_all(log_dir).map_err(|source| CliError::LogDir {
        path: log_dir.clone(),
        source,
    })?;
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = log_dir.join(format!("prunecopy_{timestamp}.log"));
    logger
        .with_file(&path)
        .map_err(|source| CliError::LogFile { path, source })
}

fn log_run_setup(logger: &Logger, args: &Args) {
    let numbered = |label: &str, paths: &[PathBuf]| {
        for (index, path) in paths.iter().enumerate() {
            let message = if paths.len() > 1 {
                format!("{label} ({}): {}", index + 1, path.display())
            } else {
                format!("{label}: {}", path.display())
            };
            logger.event(EventKind::Info, &message);
        }
    };
    numbered("Source", &args.sources);
    numbered("Destination", &args.destinations);

    if args.dry_run {
        logger.event(
            EventKind::Info,
            "Dry run enabled - no files will be copied.",
        );
    }
    if !args.include.is_empty() {
        logger.event(
            EventKind::Info,
            &format!("Included file patterns: {}", args.include.join(", ")),
        );
    }
    if !args.exclude_dirs.is_empty() {
        logger.event(
            EventKind::Info,
            &format!("Excluded directories: {}", args.exclude_dirs.join(", ")),
        );
    }
    if !args.exclude_files.is_empty() {
        logger.event(
            EventKind::Info,
            &format!("Excluded file patterns: {}", args.exclude_files.join(", ")),
        );
    }
}

fn delete_targets(logger: &Logger, args: &Args) -> CliResult<()> {
    for dest in &args.destinations {
        logger.event(
            EventKind::Deleted,
            &format!("Deleting target directory before copy: {}", dest.display()),
        );
        if args.dry_run {
            continue;
        }
        match fs::remove_dir_all(dest) {
            Ok(()) => {}
            Err(source) if source.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(CliError::DeleteTarget {
                    path: dest.clone(),
                    source,
                });
            }
        }
    }
    Ok(())
}

fn report_success(logger: &Logger, stats: &CopyStats) {
    logger.event(EventKind::Info, "Copy process completed successfully.");
    logger.event(
        EventKind::Info,
        &format!(
            "{} copied, {} skipped, {} failed",
            stats.files_copied, stats.files_skipped, stats.files_failed
        ),
    );
}

/// Rebuild the argument list that reproduces this run, for preset storage.
/// Preset control flags themselves are left out.
fn rebuild_args(args: &Args) -> Vec<String> {
    let mut out = Vec::new();
    for source in &args.sources {
        out.push(source.display().to_string());
    }
    for dest in &args.destinations {
        out.push("--dest".to_string());
        out.push(dest.display().to_string());
    }
    for glob in &args.include {
        out.push("--include".to_string());
        out.push(glob.clone());
    }
    for glob in &args.exclude_files {
        out.push("--exclude-files".to_string());
        out.push(glob.clone());
    }
    for name in &args.exclude_dirs {
        out.push("--exclude-dirs".to_string());
        out.push(name.clone());
    }
    if args.flatten {
        out.push("--flatten".to_string());
    }
    if args.flatten_suffix {
        out.push("--flatten-suffix".to_string());
    }
    if args.auto_rename {
        out.push("--auto-rename".to_string());
    }
    if args.no_overwrite {
        out.push("--no-overwrite".to_string());
    }
    if args.force_overwrite {
        out.push("--force-overwrite".to_string());
    }
    if args.delete_target_first {
        out.push("--delete-target-first".to_string());
    }
    if args.dry_run {
        out.push("--dry-run".to_string());
    }
    if let Some(log_dir) = &args.log_dir {
        out.push("--log-dir".to_string());
        out.push(log_dir.display().to_string());
    }
    if args.log_level != LogLevelArg::Info {
        out.push("--log-level".to_string());
        out.push(args.log_level.as_str().to_string());
    }
    if args.color != ColorArg::Auto {
        out.push("--color".to_string());
        out.push(args.color.as_str().to_string());
    }
    out
}
