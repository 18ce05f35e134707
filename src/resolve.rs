//! Target-path computation for preserve and flatten modes.
//!
//! Pure path arithmetic: no filesystem access, deterministic output for a
//! given input tuple. Whether the computed target collides with anything on
//! disk is the conflict resolver's concern, not this module's.

use std::path::{Component, Path, PathBuf};

/// Compute the destination path for `file`, discovered under `src_root`,
/// when copying into `dest_root`.
///
/// - Preserve mode (`flatten == false`): the directory structure under
///   `src_root` is mirrored under `dest_root`.
/// - Flatten mode without suffix: the bare file name lands directly in
///   `dest_root`; files from different subdirectories may collide.
/// - Flatten mode with suffix: the relative parent path, with separators
///   replaced by `_`, is prefixed to the file name. Files directly under
///   `src_root` keep their bare name.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use prunecopy::resolve_target;
///
/// let target = resolve_target(
///     Path::new("/src"),
///     Path::new("/src/core/api.hpp"),
///     Path::new("/out"),
///     true,
///     true,
/// );
/// assert_eq!(target, Path::new("/out/core_api.hpp"));
/// ```
#[must_use]
pub fn resolve_target(
    src_root: &Path,
    file: &Path,
    dest_root: &Path,
    flatten: bool,
    flatten_with_suffix: bool,
) -> PathBuf {
    // The walk only ever hands us paths below the root it started from.
    let relative = file.strip_prefix(src_root).unwrap_or(file);

    if !flatten {
        return dest_root.join(relative);
    }

    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if flatten_with_suffix {
        if let Some(prefix) = suffix_prefix(relative) {
            return dest_root.join(format!("{prefix}_{file_name}"));
        }
    }

    dest_root.join(file_name)
}

/// The `_`-joined relative parent path, or `None` for files directly under
/// the source root.
fn suffix_prefix(relative: &Path) -> Option<String> {
    let parent = relative.parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    let joined = parent
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("_");
    if joined.is_empty() { None } else { Some(joined) }
}
