//! Error types for prunecopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during a filtered copy run, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`] |
//! | Validation | [`Error::SourceNotFound`], [`Error::NotADirectory`] |
//! | Prompting | [`Error::Prompt`] |
//! | Control | [`Error::Cancelled`], [`Error::ParallelModeUnimplemented`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::options::ParallelMode;

/// Result type for prunecopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a filtered copy run.
///
/// Failures scoped to a single file are logged and counted rather than
/// returned; only run-level failures surface through this enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error while enumerating a source root
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source root does not exist
    #[error("Source path does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Source root is not a directory
    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Reading a conflict-prompt response failed (e.g. the input stream
    /// closed while a prompt was pending)
    #[error("Failed to read prompt input: {source}")]
    Prompt {
        /// Underlying error
        source: io::Error,
    },

    /// The user chose "cancel" at a conflict prompt
    ///
    /// Cancellation is an intentional full stop, not a failure. The error
    /// carries partial statistics so the caller can report what was done
    /// before the run stopped.
    #[error("Operation cancelled by user ({files_copied} files copied, {files_skipped} skipped)")]
    Cancelled {
        /// Number of files copied before cancellation
        files_copied: u64,
        /// Number of files skipped before cancellation
        files_skipped: u64,
    },

    /// A parallel copy strategy was requested
    ///
    /// Only sequential copying is implemented. Selecting any other
    /// [`ParallelMode`] fails up front instead of silently running
    /// sequentially.
    #[error("Parallel mode '{0}' is not implemented")]
    ParallelModeUnimplemented(ParallelMode),
}
