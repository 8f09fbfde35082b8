use crate::error::{GitstatsError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};

/// `%ad` with git's default date style, e.g. `Sat Dec 5 17:10:45 2015 +0900`.
const GIT_DEFAULT_DATE: &str = "%a %b %e %H:%M:%S %Y %z";
/// `%ai`, e.g. `2015-12-05 17:10:45 +0900`.
const GIT_ISO_DATE: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse one `name|email|date` line of `git log` output.
///
/// The line is split from the right, so a `|` inside an author name stays
/// part of the name.
pub fn parse_row(row: &str) -> Result<CommitRecord> {
    let row = row.trim();
    let mut fields = row.rsplitn(3, '|');

    let (Some(date), Some(email), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(GitstatsError::MalformedRow {
            row: row.to_string(),
            fields: row.split('|').count(),
        });
    };

    Ok(CommitRecord {
        author_name: name.to_string(),
        author_email: email.to_string(),
        timestamp: parse_git_date(date)?,
    })
}

/// Parse the date formats git can be asked to print, keeping the author's offset.
pub fn parse_git_date(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();

    DateTime::parse_from_str(value, GIT_DEFAULT_DATE)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .or_else(|_| DateTime::parse_from_str(value, GIT_ISO_DATE))
        .map_err(|_| GitstatsError::DateParse {
            value: value.to_string(),
        })
}
