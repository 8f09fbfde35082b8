use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as reported by `git log`, with the author's own UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author_name: String,
    pub author_email: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Records grouped by the calendar year their timestamp reports.
pub type YearBucket = BTreeMap<i32, Vec<CommitRecord>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub year: i32,
    pub max_commits: u32,
    pub daily_mine: BTreeMap<u32, u32>,
    pub daily_others: BTreeMap<u32, u32>,
}

impl DailyAggregate {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// My commits on `day` (1-based day-of-year); zero when nothing was recorded.
    pub fn mine(&self, day: u32) -> u32 {
        self.daily_mine.get(&day).copied().unwrap_or(0)
    }

    pub fn others(&self, day: u32) -> u32 {
        self.daily_others.get(&day).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.daily_mine.is_empty() && self.daily_others.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailMatch {
    #[default]
    Exact,
    CaseInsensitive,
}

/// The addresses whose commits count as "mine".
#[derive(Debug, Clone, Default)]
pub struct PersonalEmails {
    emails: HashSet<String>,
    mode: EmailMatch,
}

impl PersonalEmails {
    pub fn new<I, S>(emails: I, mode: EmailMatch) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let emails = emails
            .into_iter()
            .map(Into::into)
            .map(|e: String| match mode {
                EmailMatch::Exact => e,
                EmailMatch::CaseInsensitive => e.to_lowercase(),
            })
            .collect();
        Self { emails, mode }
    }

    pub fn exact<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(emails, EmailMatch::Exact)
    }

    pub fn is_mine(&self, email: &str) -> bool {
        match self.mode {
            EmailMatch::Exact => self.emails.contains(email),
            EmailMatch::CaseInsensitive => self.emails.contains(&email.to_lowercase()),
        }
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub root_path: String,
    pub repositories: Vec<String>,
    #[serde(default)]
    pub failed_repositories: Vec<String>,
    pub records: Vec<CommitRecord>,
}

/// What `render` accepts: the current document, or the bare
/// `[name, email, timestamp]` array older releases printed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExportInput {
    Document(ExportDocument),
    Legacy(Vec<(String, String, DateTime<FixedOffset>)>),
}

impl ExportInput {
    pub fn into_records(self) -> Vec<CommitRecord> {
        match self {
            ExportInput::Document(doc) => doc.records,
            ExportInput::Legacy(rows) => rows
                .into_iter()
                .map(|(author_name, author_email, timestamp)| CommitRecord {
                    author_name,
                    author_email,
                    timestamp,
                })
                .collect(),
        }
    }
}
