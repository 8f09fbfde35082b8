pub mod discover;
pub mod log;
pub mod row;

pub use discover::discover_repositories;
pub use log::{extract_log, parse_log, Extraction, GitLog, LogSource, DEFAULT_LOG_FORMAT};
pub use row::{parse_git_date, parse_row};
