//! Builder API for assembling copy configurations.
//!
//! The builder pattern provides a fluent interface for configuring and
//! executing filtered copy runs. This is often more convenient than filling
//! in a [`CopyConfig`] by hand, and it compiles the pattern strings for you.
//!
//! # Examples
//!
//! ```no_run
//! use prunecopy::{ColorMode, CopyBuilder, LogLevel, Logger};
//!
//! let logger = Logger::new(LogLevel::Info, ColorMode::Auto);
//! let stats = CopyBuilder::new()
//!     .source("include")
//!     .destination("dist/include")
//!     .include("*.h")
//!     .include("*.hpp")
//!     .exclude_file("*Impl.hpp")
//!     .exclude_dir("internal")
//!     .run(&logger)?;
//! println!("Copied {} files", stats.files_copied);
//! # Ok::<(), prunecopy::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::engine::{CopyStats, copy_filtered};
use crate::error::Result;
use crate::logging::Logger;
use crate::options::{CopyConfig, ParallelMode};
use crate::pattern::PatternSet;

/// A builder for configuring and executing filtered copy runs.
///
/// Pattern strings are collected as given and compiled into
/// [`PatternSet`]s by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct CopyBuilder {
    config: CopyConfig,
    include: Vec<String>,
    exclude_files: Vec<String>,
}

impl CopyBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source root to scan.
    #[must_use]
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.sources.push(path.as_ref().to_path_buf());
        self
    }

    /// Add several source roots at once.
    #[must_use]
    pub fn sources<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a destination root. Every matched file is copied to every
    /// destination.
    #[must_use]
    pub fn destination<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.destinations.push(path.as_ref().to_path_buf());
        self
    }

    /// Add several destination roots at once.
    #[must_use]
    pub fn destinations<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config
            .destinations
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add an include pattern (e.g. `*.hpp`). With no include patterns,
    /// every filename passes.
    #[must_use]
    pub fn include<S: Into<String>>(mut self, glob: S) -> Self {
        self.include.push(glob.into());
        self
    }

    /// Add an exclude pattern. Exclusion wins over inclusion.
    #[must_use]
    pub fn exclude_file<S: Into<String>>(mut self, glob: S) -> Self {
        self.exclude_files.push(glob.into());
        self
    }

    /// Prune directories whose base name contains `name` as a substring.
    #[must_use]
    pub fn exclude_dir<S: Into<String>>(mut self, name: S) -> Self {
        self.config.exclude_dirs.push(name.into());
        self
    }

    /// Discard subdirectory structure at the destinations.
    #[must_use]
    pub fn flatten(mut self) -> Self {
        self.config.flatten = true;
        self
    }

    /// Flatten, prefixing file names with their original relative
    /// directory path. Implies [`flatten`](Self::flatten).
    #[must_use]
    pub fn flatten_with_suffix(mut self) -> Self {
        self.config.flatten = true;
        self.config.flatten_with_suffix = true;
        self
    }

    /// Flatten, renaming colliding files automatically instead of
    /// prompting. Implies [`flatten`](Self::flatten).
    #[must_use]
    pub fn auto_rename(mut self) -> Self {
        self.config.flatten = true;
        self.config.flatten_auto_rename = true;
        self
    }

    /// Simulate the run without touching the filesystem.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Skip files that already exist at a destination, without prompting.
    #[must_use]
    pub fn no_overwrite(mut self) -> Self {
        self.config.no_overwrite = true;
        self
    }

    /// Overwrite existing files without prompting.
    /// [`no_overwrite`](Self::no_overwrite) wins when both are set.
    #[must_use]
    pub fn force_overwrite(mut self) -> Self {
        self.config.force_overwrite = true;
        self
    }

    /// Recursively delete each destination root before copying. Honored by
    /// the caller of the engine (the CLI), not by the walk.
    #[must_use]
    pub fn delete_target_first(mut self) -> Self {
        self.config.delete_target_first = true;
        self
    }

    /// Request a parallel strategy. Anything but [`ParallelMode::None`]
    /// makes the run fail up front.
    #[must_use]
    pub fn parallel_mode(mut self, mode: ParallelMode) -> Self {
        self.config.parallel_mode = mode;
        self
    }

    /// Compile the pattern strings and produce the final configuration.
    #[must_use]
    pub fn build(self) -> CopyConfig {
        let mut config = self.config;
        config.include_patterns = PatternSet::compile(&self.include);
        config.exclude_patterns = PatternSet::compile(&self.exclude_files);
        config
    }

    /// Build the configuration and run the engine, prompting on standard
    /// input.
    ///
    /// # Errors
    ///
    /// See [`copy_filtered`].
    pub fn run(self, logger: &Logger) -> Result<CopyStats> {
        let config = self.build();
        copy_filtered(&config, logger)
    }
}
