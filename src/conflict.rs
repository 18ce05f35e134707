//! Conflict resolution for existing target files.
//!
//! When a computed target path already exists, the engine asks this module
//! what to do. The answer comes from the sticky [`OverwritePolicy`] when a
//! run-wide decision is already in effect, and from an interactive prompt
//! otherwise. Prompt choices can themselves flip the sticky flags ("all",
//! "skip all", "auto-rename all"), which then short-circuit every later
//! conflict in the run.
//!
//! Two prompt protocols exist, matching the two copy modes:
//!
//! - standard: `[y]es / [n]o / [a]ll / [s]kip all / [c]ancel`
//! - flatten: `[o]verwrite / [r]ename / [s]kip / [c]ancel / [a]lways
//!   overwrite / [m] auto-rename all`, with a collision-avoiding rename
//!   suggestion
//!
//! "Cancel" is not handled here: it is returned as [`Resolution::Cancel`]
//! and propagated up through the walk so the top level can flush logs and
//! stop cleanly.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::{EventKind, Logger};
use crate::options::OverwritePolicy;

/// Outcome of a conflict decision for one (file, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Copy over the existing target.
    Overwrite,
    /// Copy to this alternate path instead.
    RenameTo(PathBuf),
    /// Leave the target alone and move on.
    Skip,
    /// Stop the entire run.
    Cancel,
}

/// Source of interactive prompt responses.
///
/// The engine reads decisions through this seam so tests can script them.
/// Production use reads lines from standard input via [`StdinPrompt`].
pub trait PromptSource {
    /// Read one line of user input, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying stream fails or is exhausted.
    /// End-of-input is an error rather than an empty line: an empty line
    /// re-prompts, and a closed stream must not re-prompt forever.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads prompt responses from standard input, blocking until a line
/// arrives.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "prompt input stream closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Decide the fate of a copy whose `target` already exists.
///
/// The sticky policy is consulted first (`no_overwrite` wins over
/// `force_overwrite`, in that order) and only then is the user prompted,
/// with the protocol chosen by `flatten`. Prompt choices may mutate
/// `policy` for the remainder of the run.
///
/// # Errors
///
/// Returns [`Error::Prompt`] when reading a response fails.
pub fn resolve_conflict(
    target: &Path,
    flatten: bool,
    policy: &mut OverwritePolicy,
    prompt: &mut dyn PromptSource,
    logger: &Logger,
) -> Result<Resolution> {
    if policy.no_overwrite {
        return Ok(Resolution::Skip);
    }
    if policy.force_overwrite {
        return Ok(Resolution::Overwrite);
    }
    if flatten {
        flatten_procedure(target, policy, prompt, logger)
    } else {
        standard_procedure(target, policy, prompt, logger)
    }
}

/// Suggest a collision-free sibling of `original` by appending `(1)`,
/// `(2)`, … to the file stem until a free path is found.
///
/// Existence is re-checked for every candidate rather than computed
/// arithmetically, so the first free slot is found even when earlier
/// suffixes were taken by previous renames.
#[must_use]
pub fn suggest_rename(original: &Path) -> PathBuf {
    let parent = original.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = original
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = original
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned());

    let mut counter: u32 = 1;
    loop {
        let file_name = match &extension {
            Some(ext) => format!("{stem}({counter}).{ext}"),
            None => format!("{stem}({counter})"),
        };
        let candidate = parent.join(file_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn standard_procedure(
    target: &Path,
    policy: &mut OverwritePolicy,
    prompt: &mut dyn PromptSource,
    logger: &Logger,
) -> Result<Resolution> {
    let message = format!(
        "{} already exists. [y]es / [n]o / [a]ll / [s]kip all / [c]ancel:",
        target.display()
    );
    loop {
        logger.always_to_console(EventKind::Conflict, &message);
        let input = read_response(prompt, logger)?;
        let Some(choice) = input.chars().next() else {
            continue;
        };
        match choice.to_ascii_lowercase() {
            'y' => return Ok(Resolution::Overwrite),
            'n' => return Ok(Resolution::Skip),
            'a' => {
                policy.force_overwrite = true;
                return Ok(Resolution::Overwrite);
            }
            's' => {
                policy.no_overwrite = true;
                return Ok(Resolution::Skip);
            }
            'c' => return Ok(Resolution::Cancel),
            _ => {}
        }
    }
}

fn flatten_procedure(
    target: &Path,
    policy: &mut OverwritePolicy,
    prompt: &mut dyn PromptSource,
    logger: &Logger,
) -> Result<Resolution> {
    let suggested = suggest_rename(target);
    if policy.auto_rename {
        return Ok(Resolution::RenameTo(suggested));
    }

    let suggested_name = suggested
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let message = format!(
        "{} already exists. [o]verwrite / [r]ename / [s]kip / [c]ancel / [a]lways overwrite / [m] auto-rename all\nSuggested rename: {suggested_name}",
        target.display()
    );
    loop {
        logger.always_to_console(EventKind::Conflict, &message);
        let input = read_response(prompt, logger)?;
        let Some(choice) = input.chars().next() else {
            continue;
        };
        match choice.to_ascii_lowercase() {
            'o' => return Ok(Resolution::Overwrite),
            'r' => {
                let renamed = prompt_rename(target, &suggested, prompt, logger)?;
                return Ok(Resolution::RenameTo(renamed));
            }
            's' => return Ok(Resolution::Skip),
            'c' => return Ok(Resolution::Cancel),
            'a' => {
                policy.force_overwrite = true;
                return Ok(Resolution::Overwrite);
            }
            'm' => {
                policy.auto_rename = true;
                return Ok(Resolution::RenameTo(suggested));
            }
            _ => {}
        }
    }
}

/// Read a user-supplied replacement name, re-validating against existing
/// paths in a loop. A blank response at any point falls back to the
/// suggested name, which is already known to be free.
fn prompt_rename(
    target: &Path,
    suggested: &Path,
    prompt: &mut dyn PromptSource,
    logger: &Logger,
) -> Result<PathBuf> {
    logger.always_to_console(
        EventKind::Conflict,
        "Enter new filename (leave blank to use suggested):",
    );
    let parent = target.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut name = read_response(prompt, logger)?;
    if name.is_empty() {
        return Ok(suggested.to_path_buf());
    }
    let mut candidate = parent.join(&name);
    while candidate.exists() {
        logger.always_to_console(
            EventKind::Conflict,
            &format!("{} also exists. Enter different name:", candidate.display()),
        );
        name = read_response(prompt, logger)?;
        if name.is_empty() {
            return Ok(suggested.to_path_buf());
        }
        candidate = parent.join(&name);
    }
    Ok(candidate)
}

fn read_response(prompt: &mut dyn PromptSource, logger: &Logger) -> Result<String> {
    let input = prompt
        .read_line()
        .map_err(|source| Error::Prompt { source })?;
    logger.file_only(EventKind::UserInput, &format!("User entered: {input}"));
    Ok(input)
}
