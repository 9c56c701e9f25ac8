//! PATH search for executables.
//!
//! Finds the first existing regular file matching a command name along the
//! `PATH` search path, honoring Windows-style `PATHEXT` extension inference.
//! Both calling conventions (async and blocking) walk the exact same
//! candidate sequence; the sequence is produced once by [`candidates`] so
//! the two cannot drift.

use crate::env::Environment;
use crate::error::Error;
use std::io;

/// Extensions tried on Windows when `PATHEXT` is unset.
const DEFAULT_PATHEXT: &str = ".EXE;.CMD;.BAT;.COM";

/// Per-call snapshot of everything the search needs from the environment.
///
/// Built fresh on every call, never cached. `path_items` preserves the
/// order (and duplicates) of `PATH`, each entry normalized to end with the
/// platform separator so candidates are plain concatenations.
struct SearchContext {
    path_items: Vec<String>,
    /// `Some` only on Windows, and only when the command does not already
    /// end with one of the extensions.
    path_exts: Option<Vec<String>>,
}

/// Finds the path to the specified command asynchronously.
///
/// Returns `Ok(None)` when `PATH` is unset or nothing matched; the only
/// error is a permission-denied stat, which aborts the search immediately.
pub async fn which(command: &str, env: &impl Environment) -> Result<Option<String>, Error> {
    let Some(ctx) = search_context(command, env) else {
        return Ok(None);
    };

    // Stats are awaited strictly in sequence: first match wins, and a
    // denied probe must abort before later entries are touched.
    for candidate in candidates(&ctx, command) {
        if path_matches(env, &candidate).await? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Finds the path to the specified command synchronously.
///
/// Identical candidate ordering to [`which`], using the blocking stat.
pub fn which_sync(command: &str, env: &impl Environment) -> Result<Option<String>, Error> {
    let Some(ctx) = search_context(command, env) else {
        return Ok(None);
    };

    for candidate in candidates(&ctx, command) {
        if path_matches_blocking(env, &candidate)? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Full candidate sequence for a search: for each path entry in order, the
/// bare concatenation first, then each `PATHEXT` extension in order.
fn candidates(ctx: &SearchContext, command: &str) -> Vec<String> {
    let mut out = Vec::new();
    for item in &ctx.path_items {
        let bare = format!("{item}{command}");
        if let Some(exts) = &ctx.path_exts {
            out.push(bare.clone());
            for ext in exts {
                out.push(format!("{bare}{ext}"));
            }
        } else {
            out.push(bare);
        }
    }
    out
}

async fn path_matches(env: &impl Environment, path: &str) -> Result<bool, Error> {
    classify_stat(env.stat_is_file(path).await, path)
}

fn path_matches_blocking(env: &impl Environment, path: &str) -> Result<bool, Error> {
    classify_stat(env.stat_is_file_blocking(path), path)
}

/// A denied stat propagates; every other failure (not found, broken path
/// segment, transient I/O) is a non-match and the search continues.
fn classify_stat(result: io::Result<bool>, path: &str) -> Result<bool, Error> {
    match result {
        Ok(is_file) => Ok(is_file),
        Err(source) if source.kind() == io::ErrorKind::PermissionDenied => {
            Err(Error::PermissionDenied {
                path: path.to_string(),
                source,
            })
        }
        Err(_) => Ok(false),
    }
}

/// Builds the per-call [`SearchContext`], or `None` when `PATH` is unset
/// (resolution short-circuits to "not found").
fn search_context(command: &str, env: &impl Environment) -> Option<SearchContext> {
    let is_windows = env.is_windows();
    let value_separator = if is_windows { ';' } else { ':' };
    let path_separator = if is_windows { '\\' } else { '/' };

    let path = env.var("PATH")?;

    let split = |value: &str| -> Vec<String> {
        value
            .split(value_separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    };

    let path_items = split(&path)
        .into_iter()
        .map(|mut item| {
            if !item.ends_with(path_separator) {
                item.push(path_separator);
            }
            item
        })
        .collect();

    let path_exts = if is_windows {
        let text = env
            .var("PATHEXT")
            .unwrap_or_else(|| DEFAULT_PATHEXT.to_string());
        let exts = split(&text);
        let lower_command = command.to_lowercase();
        // A command that already names an executable extension is probed
        // as-is; appending would double the extension.
        if exts
            .iter()
            .any(|ext| lower_command.ends_with(&ext.to_lowercase()))
        {
            None
        } else {
            Some(exts)
        }
    } else {
        None
    };

    Some(SearchContext {
        path_items,
        path_exts,
    })
}
