use crate::error::{GitstatsError, Result};
use crate::git::row::parse_row;
use crate::model::CommitRecord;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Author name, author email and author date, pipe separated.
pub const DEFAULT_LOG_FORMAT: &str = "%an|%ae|%ad";

/// Where raw `name|email|date` history comes from.
pub trait LogSource {
    fn raw_log(&self, repository: &Path) -> Result<String>;
}

/// Runs `git log --pretty=format:<format>` inside the repository.
#[derive(Debug, Clone)]
pub struct GitLog {
    program: String,
    format: String,
}

impl GitLog {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn command(&self, repository: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("log")
            .arg(format!("--pretty=format:{}", self.format))
            .current_dir(repository);
        cmd
    }
}

impl Default for GitLog {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for GitLog {
    fn raw_log(&self, repository: &Path) -> Result<String> {
        let output = self
            .command(repository)
            .output()
            .map_err(|e| GitstatsError::Extraction {
                repository: repository.to_path_buf(),
                message: format!("failed to run {}: {e}", self.program),
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        // Freshly initialised repository: no HEAD to walk yet.
        if stderr.contains("does not have any commits yet") {
            debug!("No commits yet in {}", repository.display());
            return Ok(String::new());
        }

        Err(GitstatsError::Extraction {
            repository: repository.to_path_buf(),
            message: if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            },
        })
    }
}

/// Parsed history of one repository plus the rows that could not be parsed.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<CommitRecord>,
    pub rejected: Vec<GitstatsError>,
}

pub fn parse_log(raw: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for line in raw.lines().filter(|l| !l.trim().is_empty()) {
        match parse_row(line) {
            Ok(record) => extraction.records.push(record),
            Err(e) => {
                debug!("Skipping row: {e}");
                extraction.rejected.push(e);
            }
        }
    }

    extraction
}

/// Fetch and parse one repository's history. Only whole-repository failures
/// are errors; bad rows end up in [`Extraction::rejected`].
pub fn extract_log<S: LogSource + ?Sized>(source: &S, repository: &Path) -> Result<Extraction> {
    info!("Analyzing {}", repository.display());
    let raw = source.raw_log(repository)?;
    Ok(parse_log(&raw))
}
