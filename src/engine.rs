//! The filtered copy engine.
//!
//! Walks each source root depth-first in platform enumeration order,
//! prunes excluded directories, filters files by the include/exclude
//! pattern sets, fans each surviving file out to every destination, runs
//! conflict resolution when the target already exists, and performs (or,
//! under dry-run, simulates) the byte copy. Every copy, skip, and failure
//! is reported through the [`Logger`].
//!
//! # Example
//!
//! ```no_run
//! use prunecopy::{ColorMode, CopyBuilder, LogLevel, Logger, copy_filtered};
//!
//! let config = CopyBuilder::new()
//!     .source("src")
//!     .destination("backup")
//!     .include("*.rs")
//!     .build();
//! let logger = Logger::new(LogLevel::Info, ColorMode::Auto);
//!
//! let stats = copy_filtered(&config, &logger)?;
//! println!("{} files copied", stats.files_copied);
//! # Ok::<(), prunecopy::Error>(())
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::conflict::{self, PromptSource, Resolution, StdinPrompt};
use crate::error::{Error, Result};
use crate::logging::{EventKind, Logger};
use crate::options::{CopyConfig, OverwritePolicy, ParallelMode};
use crate::pattern::is_excluded_dir;
use crate::resolve::resolve_target;

/// Statistics from a copy run.
///
/// Under dry-run, `files_copied` counts the copies that *would* have
/// happened, so a simulation reports the same totals as the real run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied (or simulated under dry-run)
    pub files_copied: u64,
    /// Number of files skipped at conflict resolution
    pub files_skipped: u64,
    /// Number of files abandoned due to per-file I/O errors
    pub files_failed: u64,
    /// Total bytes copied (zero under dry-run)
    pub bytes_copied: u64,
    /// Duration of the run
    pub duration: Duration,
}

/// Run a filtered copy, prompting on conflicts via standard input.
///
/// # Errors
///
/// Returns an error if a source root is missing or unreadable
/// ([`Error::SourceNotFound`], [`Error::NotADirectory`], [`Error::Io`]),
/// if a parallel mode was requested
/// ([`Error::ParallelModeUnimplemented`]), if prompt input fails
/// ([`Error::Prompt`]), or if the user cancels ([`Error::Cancelled`]).
/// Per-file copy failures are logged and counted, not returned.
pub fn copy_filtered(config: &CopyConfig, logger: &Logger) -> Result<CopyStats> {
    let mut prompt = StdinPrompt;
    copy_filtered_with(config, logger, &mut prompt)
}

/// Run a filtered copy with a caller-supplied prompt source.
///
/// Behaves exactly like [`copy_filtered`]; tests use this entry point to
/// script conflict decisions.
///
/// # Errors
///
/// See [`copy_filtered`].
pub fn copy_filtered_with(
    config: &CopyConfig,
    logger: &Logger,
    prompt: &mut dyn PromptSource,
) -> Result<CopyStats> {
    if config.parallel_mode != ParallelMode::None {
        return Err(Error::ParallelModeUnimplemented(config.parallel_mode));
    }

    let start = Instant::now();
    let mut engine = Engine {
        config,
        logger,
        policy: OverwritePolicy::from_config(config),
        stats: CopyStats::default(),
    };

    for src in &config.sources {
        engine.walk_root(src, prompt)?;
    }

    let mut stats = engine.stats;
    stats.duration = start.elapsed();
    Ok(stats)
}

struct Engine<'a> {
    config: &'a CopyConfig,
    logger: &'a Logger,
    policy: OverwritePolicy,
    stats: CopyStats,
}

impl Engine<'_> {
    fn walk_root(&mut self, src_root: &Path, prompt: &mut dyn PromptSource) -> Result<()> {
        if !src_root.exists() {
            return Err(Error::SourceNotFound(src_root.to_path_buf()));
        }
        if !src_root.is_dir() {
            return Err(Error::NotADirectory(src_root.to_path_buf()));
        }
        self.walk_dir(src_root, src_root, true, prompt)
    }

    /// Pre-order recursive walk. An unreadable source root is fatal; an
    /// unreadable subdirectory is logged and pruned, and the walk goes on.
    fn walk_dir(
        &mut self,
        src_root: &Path,
        dir: &Path,
        is_root: bool,
        prompt: &mut dyn PromptSource,
    ) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if !is_root => {
                self.logger.event(
                    EventKind::Error,
                    &format!("Failed to read directory {}: {err}", dir.display()),
                );
                return Ok(());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.logger.event(
                        EventKind::Error,
                        &format!("Failed to read entry in {}: {err}", dir.display()),
                    );
                    continue;
                }
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    self.logger.event(
                        EventKind::Error,
                        &format!("Failed to stat {}: {err}", path.display()),
                    );
                    continue;
                }
            };

            if file_type.is_dir() {
                let name = entry.file_name();
                if is_excluded_dir(&name.to_string_lossy(), &self.config.exclude_dirs) {
                    self.logger
                        .event(EventKind::Skipped, &path.display().to_string());
                    continue;
                }
                self.walk_dir(src_root, &path, false, &mut *prompt)?;
            } else if file_type.is_file() {
                self.process_file(src_root, &path, &mut *prompt)?;
            }
            // Symlinks and special files are not regular files: ignored.
        }
        Ok(())
    }

    fn process_file(
        &mut self,
        src_root: &Path,
        file: &Path,
        prompt: &mut dyn PromptSource,
    ) -> Result<()> {
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !self.config.include_patterns.is_empty()
            && !self.config.include_patterns.matches(&file_name)
        {
            return Ok(());
        }
        if !self.config.exclude_patterns.is_empty()
            && self.config.exclude_patterns.matches(&file_name)
        {
            self.logger
                .event(EventKind::Skipped, &file.display().to_string());
            return Ok(());
        }

        for dest_root in &self.config.destinations {
            let mut target = resolve_target(
                src_root,
                file,
                dest_root,
                self.config.flatten,
                self.config.flatten_with_suffix,
            );

            if target.exists() {
                let resolution = conflict::resolve_conflict(
                    &target,
                    self.config.flatten,
                    &mut self.policy,
                    &mut *prompt,
                    self.logger,
                )?;
                match resolution {
                    Resolution::Skip => {
                        self.stats.files_skipped += 1;
                        self.logger
                            .event(EventKind::Skipped, &target.display().to_string());
                        continue;
                    }
                    Resolution::Cancel => {
                        return Err(Error::Cancelled {
                            files_copied: self.stats.files_copied,
                            files_skipped: self.stats.files_skipped,
                        });
                    }
                    Resolution::RenameTo(renamed) => target = renamed,
                    Resolution::Overwrite => {}
                }
            }

            self.copy_file(file, &target);
        }
        Ok(())
    }

    /// Copy one file (or simulate it), logging the outcome. Per-file I/O
    /// failures are absorbed here so the walk continues.
    fn copy_file(&mut self, src: &Path, target: &Path) {
        if !self.config.dry_run {
            if let Err(err) = self.try_copy(src, target) {
                self.logger.event(
                    EventKind::Error,
                    &format!(
                        "Failed to copy {} to {}: {err}",
                        src.display(),
                        target.display()
                    ),
                );
                self.stats.files_failed += 1;
                return;
            }
        }
        self.stats.files_copied += 1;
        self.logger
            .event(EventKind::Copied, &target.display().to_string());
    }

    fn try_copy(&mut self, src: &Path, target: &Path) -> io::Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = fs::copy(src, target)?;
        self.stats.bytes_copied += bytes;
        Ok(())
    }
}
