use crate::error::{GitstatsError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const GIT_MARKER: &str = ".git";
pub const EXCLUDE_MARKER: &str = ".exclude";

/// Find every directory under `root` (itself included) that holds a `.git`
/// entry and no `.exclude` entry. Results are in file-name order.
pub fn discover_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).map_err(|e| GitstatsError::Discovery {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(GitstatsError::Discovery {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != GIT_MARKER)
        .build();

    let mut repositories = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        let dir = entry.path();
        if !dir.join(GIT_MARKER).exists() {
            continue;
        }
        if dir.join(EXCLUDE_MARKER).exists() {
            debug!("Skipping excluded repository: {}", dir.display());
            continue;
        }

        info!("Git repository discovered: {}", dir.display());
        repositories.push(dir.to_path_buf());
    }

    Ok(repositories)
}
