//! Staged diff collection.
//!
//! Lists the paths staged for the next commit, drops minified files, then
//! diffs each remaining path on its own and joins the results.

use tracing::{debug, error, info, warn};

use super::executor::GitExecutor;

/// Maximum characters of diff text sent to the model.
pub const MAX_DIFF_CHARS: usize = 4000;

/// Paths containing this marker (e.g. `app.min.js`) are never diffed.
pub const MINIFIED_MARKER: &str = ".min.";

/// Whether a staged path should be skipped.
pub fn is_excluded(path: &str) -> bool {
    path.trim().is_empty() || path.contains(MINIFIED_MARKER)
}

/// Truncate `text` to at most `max` characters, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// List staged paths, in git's order, with excluded paths removed.
///
/// Uses `-z` so git emits raw NUL-terminated paths. Without it, paths with
/// non-ASCII characters, quotes or backslashes come back C-quoted and no
/// longer match themselves as pathspecs.
async fn list_staged_files<E: GitExecutor + ?Sized>(executor: &E) -> Option<Vec<String>> {
    let args = ["diff", "--cached", "--name-only", "-z"].map(String::from);
    match executor.run(&args).await {
        Ok(output) => Some(
            output
                .split('\0')
                .filter(|line| !is_excluded(line))
                .map(str::to_string)
                .collect(),
        ),
        Err(e) => {
            error!("Error listing staged files: {}", e);
            None
        }
    }
}

/// Diff a single staged path. Failures yield an empty contribution.
async fn diff_file<E: GitExecutor + ?Sized>(executor: &E, path: &str) -> String {
    let args = ["diff", "--cached", "--", path].map(String::from);
    match executor.run(&args).await {
        Ok(diff) => diff,
        Err(e) => {
            warn!("Error getting diff for file {}: {}", path, e);
            String::new()
        }
    }
}

/// Collect the staged diff, truncated to [`MAX_DIFF_CHARS`].
///
/// Returns an empty string when nothing (after filtering) is staged or when
/// the staged files cannot be listed at all. A failing per-file diff is
/// logged and skipped without aborting the rest of the collection.
pub async fn collect_diff<E: GitExecutor + ?Sized>(executor: &E) -> String {
    let Some(files) = list_staged_files(executor).await else {
        return String::new();
    };

    if files.is_empty() {
        info!("No files changed.");
        return String::new();
    }

    info!("Inspecting staged files: {:?}", files);

    let mut diffs = Vec::with_capacity(files.len());
    for file in &files {
        diffs.push(diff_file(executor, file).await);
    }

    let joined = diffs.join("\n");
    let truncated = truncate_chars(&joined, MAX_DIFF_CHARS);
    if truncated.len() < joined.len() {
        debug!(
            "Diff truncated from {} to {} characters",
            joined.chars().count(),
            MAX_DIFF_CHARS
        );
    }

    truncated.to_string()
}
