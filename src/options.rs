//! Configuration for filtered copy runs.
//!
//! This module provides [`CopyConfig`], the full configuration for one run,
//! and [`OverwritePolicy`], the run-scoped sticky state that interactive
//! conflict choices mutate.
//!
//! # Example
//!
//! ```
//! use prunecopy::{CopyBuilder, ParallelMode};
//!
//! let config = CopyBuilder::new()
//!     .source("src")
//!     .destination("backup")
//!     .include("*.rs")
//!     .exclude_dir("target")
//!     .build();
//!
//! assert_eq!(config.parallel_mode, ParallelMode::None);
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::pattern::PatternSet;

/// Parallel copy strategies selectable on the command line.
///
/// Only [`ParallelMode::None`] (sequential) is implemented. The engine
/// rejects every other variant with
/// [`Error::ParallelModeUnimplemented`](crate::Error::ParallelModeUnimplemented)
/// before touching the filesystem, so selecting a parallel mode either works
/// or fails loudly, never silently falling back to sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelMode {
    /// Sequential, single-threaded copying (default)
    #[default]
    None,
    /// Future-based parallelism (unimplemented placeholder)
    Async,
    /// Thread-pool parallelism (unimplemented placeholder)
    Thread,
    /// OpenMP-style loop parallelism (unimplemented placeholder)
    OpenMp,
}

impl ParallelMode {
    /// Stable lowercase name, as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Async => "async",
            Self::Thread => "thread",
            Self::OpenMp => "openmp",
        }
    }
}

impl fmt::Display for ParallelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full configuration for one filtered copy run.
///
/// Constructed once (usually via [`CopyBuilder`](crate::CopyBuilder) or the
/// CLI/preset layer) and treated as read-only by the engine. The overwrite
/// flags are only the *initial* values; the mutable sticky state lives in
/// [`OverwritePolicy`] for the duration of a run.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `include_patterns` | empty | Empty set admits every filename |
/// | `exclude_patterns` | empty | Empty set excludes nothing |
/// | `exclude_dirs` | empty | No directories pruned |
/// | `flatten` | `false` | Mirror source structure |
/// | `dry_run` | `false` | Perform real copies |
/// | `parallel_mode` | `None` | Sequential |
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyConfig {
    /// Source directories to scan, in order. Duplicates are allowed.
    pub sources: Vec<PathBuf>,

    /// Destination directories. Every matched file is copied to every one.
    pub destinations: Vec<PathBuf>,

    /// Filename patterns a file must match to be copied.
    ///
    /// An empty set admits all filenames.
    pub include_patterns: PatternSet,

    /// Filename patterns that exclude a file even when it is included.
    pub exclude_patterns: PatternSet,

    /// Directory-name substrings that prune whole subtrees.
    ///
    /// A directory is excluded when its base name *contains* any entry
    /// (case-sensitive). This is intentionally looser than the anchored
    /// file patterns above.
    pub exclude_dirs: Vec<String>,

    /// Discard subdirectory structure; place all files directly under each
    /// destination root.
    pub flatten: bool,

    /// When flattening, prefix file names with their original relative
    /// directory path (separators replaced by `_`). Files at the source
    /// root keep their bare name. Only meaningful when `flatten` is set.
    pub flatten_with_suffix: bool,

    /// When flattening, rename colliding files automatically using the
    /// `name(1).ext` scheme instead of prompting. Only meaningful when
    /// `flatten` is set.
    pub flatten_auto_rename: bool,

    /// Simulate the run: no directory creation, no copies, no deletes,
    /// but all log events are still emitted.
    pub dry_run: bool,

    /// Start the run with "skip existing files" in effect.
    pub no_overwrite: bool,

    /// Start the run with "overwrite without prompting" in effect.
    ///
    /// `no_overwrite` wins when both are set.
    pub force_overwrite: bool,

    /// Recursively delete each destination root before the walk begins.
    /// Honored by the caller of the engine, not by the walk itself.
    pub delete_target_first: bool,

    /// Requested parallel strategy. Anything but [`ParallelMode::None`]
    /// makes the engine fail up front.
    pub parallel_mode: ParallelMode,
}

/// Sticky overwrite decisions for a single run.
///
/// Initialized from [`CopyConfig`] when the walk starts and passed mutably
/// through it. Interactive choices ("all", "skip all", "auto-rename all")
/// flip these flags, and the change applies to every later conflict in the
/// same run, across all sources, destinations, and files. The state is
/// run-scoped on purpose: nothing outlives the invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverwritePolicy {
    /// Skip every conflicting file without prompting. Checked first.
    pub no_overwrite: bool,
    /// Overwrite every conflicting file without prompting.
    pub force_overwrite: bool,
    /// In flatten mode, rename conflicting files to the suggested name
    /// without prompting.
    pub auto_rename: bool,
}

impl OverwritePolicy {
    /// Capture the initial policy from a run configuration.
    #[must_use]
    pub fn from_config(config: &CopyConfig) -> Self {
        Self {
            no_overwrite: config.no_overwrite,
            force_overwrite: config.force_overwrite,
            auto_rename: config.flatten_auto_rename,
        }
    }
}
