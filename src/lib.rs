//! # prunecopy
//!
//! Filtered recursive file copying with interactive conflict resolution.
//!
//! ## Core Features
//!
//! - **Pattern filtering**: include/exclude filenames with `*`/`?` globs,
//!   matched case-insensitively against the whole name
//! - **Directory pruning**: skip entire subtrees whose directory name
//!   contains a configured substring
//! - **Multi-source, multi-destination**: every matched file fans out to
//!   every destination root
//! - **Flatten modes**: collapse directory structure, optionally prefixing
//!   file names with their original relative path, optionally auto-renaming
//!   collisions with a `name(1).ext` scheme
//! - **Interactive conflict resolution**: per-file overwrite prompts with
//!   sticky "all" / "skip all" / "auto-rename all" decisions
//! - **Dry-run**: simulate the full run, including log output, without
//!   touching the filesystem
//! - **Tagged logging**: level-filtered colored console output plus an
//!   unfiltered log-file sink
//!
//! ## Quick Start with Builder API
//!
//! The easiest way to use prunecopy is with the [`CopyBuilder`]:
//!
//! ```no_run
//! use prunecopy::{ColorMode, CopyBuilder, LogLevel, Logger};
//!
//! let logger = Logger::new(LogLevel::Info, ColorMode::Auto);
//! let stats = CopyBuilder::new()
//!     .source("include")
//!     .destination("dist")
//!     .include("*.hpp")
//!     .exclude_dir("detail")
//!     .run(&logger)?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), prunecopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! For more control, fill in a [`CopyConfig`] and call [`copy_filtered`],
//! or [`copy_filtered_with`] to supply your own [`PromptSource`] for
//! conflict decisions:
//!
//! ```no_run
//! use prunecopy::{ColorMode, CopyBuilder, LogLevel, Logger, copy_filtered};
//!
//! let config = CopyBuilder::new()
//!     .source("src")
//!     .destination("backup")
//!     .no_overwrite()
//!     .build();
//! let logger = Logger::new(LogLevel::Standard, ColorMode::Never);
//! let stats = copy_filtered(&config, &logger)?;
//! println!("{} new, {} already present", stats.files_copied, stats.files_skipped);
//! # Ok::<(), prunecopy::Error>(())
//! ```
//!
//! ## Conflict Semantics
//!
//! When a target path already exists, the run-scoped
//! [`OverwritePolicy`] is consulted first: "skip existing" wins over
//! "force overwrite", and either suppresses the prompt entirely. Otherwise
//! the user is prompted, with a five-choice protocol in preserve mode and
//! a six-choice protocol (including renames) in flatten mode. Choices like
//! "all" and "skip all" flip the sticky policy for the remainder of the
//! run. "Cancel" stops the whole run via [`Error::Cancelled`]; the caller
//! is expected to flush logs and exit cleanly.
//!
//! ## Sequential by Design
//!
//! Execution is single-threaded; the only blocking point is the interactive
//! prompt. Requesting any [`ParallelMode`] other than `None` fails with
//! [`Error::ParallelModeUnimplemented`] instead of silently running
//! sequentially.

mod builder;
mod conflict;
mod engine;
mod error;
mod logging;
mod options;
mod pattern;
mod resolve;

pub use builder::CopyBuilder;
pub use conflict::{PromptSource, Resolution, StdinPrompt, resolve_conflict, suggest_rename};
pub use engine::{CopyStats, copy_filtered, copy_filtered_with};
pub use error::{Error, Result};
pub use logging::{ColorMode, EventKind, LogLevel, Logger};
pub use options::{CopyConfig, OverwritePolicy, ParallelMode};
pub use pattern::{PatternSet, is_excluded_dir};
pub use resolve::resolve_target;
