use crate::error::Result;
use crate::git::{discover_repositories, extract_log, LogSource};
use crate::model::CommitRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Everything gathered from one scan.
#[derive(Debug, Default)]
pub struct Collection {
    pub repositories: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub records: Vec<CommitRecord>,
    pub skipped_rows: usize,
}

/// Discover repositories under `root` and pull the history of each one.
///
/// Only an unusable `root` is fatal. A repository whose log cannot be read is
/// reported and left out; unparseable rows are dropped and counted.
pub fn collect_records<S: LogSource + ?Sized>(
    root: &Path,
    source: &S,
    show_progress: bool,
) -> Result<Collection> {
    let repositories = discover_repositories(root)?;
    Ok(collect_from(repositories, source, show_progress))
}

pub fn collect_from<S: LogSource + ?Sized>(
    repositories: Vec<PathBuf>,
    source: &S,
    show_progress: bool,
) -> Collection {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_length(repositories.len() as u64);
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut collection = Collection::default();

    for repo in &repositories {
        pb.set_message(repo.display().to_string());

        match extract_log(source, repo) {
            Ok(extraction) => {
                if !extraction.rejected.is_empty() {
                    warn!(
                        "Skipped {} unparseable rows in {}",
                        extraction.rejected.len(),
                        repo.display()
                    );
                }
                collection.skipped_rows += extraction.rejected.len();
                collection.records.extend(extraction.records);
            }
            Err(e) => {
                warn!("Not able to generate logs for {}: {e}", repo.display());
                collection.failed.push(repo.clone());
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    collection.repositories = repositories;
    collection
}
