use crate::model::{CommitRecord, DailyAggregate, PersonalEmails, YearBucket};
use chrono::Datelike;

/// Group records by the year of their timestamp in its own offset.
pub fn by_year<I>(records: I) -> YearBucket
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut buckets = YearBucket::new();
    for record in records {
        buckets
            .entry(record.timestamp.year())
            .or_default()
            .push(record);
    }
    buckets
}

/// Count commits per day-of-year for `year`, split into mine and others.
/// Records from other years are ignored.
pub fn aggregate_year(
    records: &[CommitRecord],
    year: i32,
    emails: &PersonalEmails,
) -> DailyAggregate {
    let mut agg = DailyAggregate::new(year);

    for record in records {
        if record.timestamp.year() != year {
            continue;
        }
        let day = record.timestamp.ordinal();
        let counts = if emails.is_mine(&record.author_email) {
            &mut agg.daily_mine
        } else {
            &mut agg.daily_others
        };
        *counts.entry(day).or_insert(0) += 1;
    }

    agg.max_commits = agg
        .daily_mine
        .values()
        .chain(agg.daily_others.values())
        .copied()
        .max()
        .unwrap_or(0);
    agg
}

/// Largest daily count over every year, so separately rendered years share
/// one color scale.
pub fn global_max(buckets: &YearBucket, emails: &PersonalEmails) -> u32 {
    buckets
        .iter()
        .map(|(year, records)| aggregate_year(records, *year, emails).max_commits)
        .max()
        .unwrap_or(0)
}

pub fn latest_year(buckets: &YearBucket) -> Option<i32> {
    buckets.keys().next_back().copied()
}
