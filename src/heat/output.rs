use crate::error::Result;
use crate::heat::aggregate::{aggregate_year, latest_year};
use crate::heat::svg::render_svg;
use crate::model::{DailyAggregate, PersonalEmails, YearBucket};
use chrono::{Datelike, Utc};
use console::style;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Buffered writer over `path`, or over stdout when there is none.
pub fn open_sink(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// The requested year, else the newest year with commits, else the current year.
pub fn select_year(buckets: &YearBucket, requested: Option<i32>) -> i32 {
    if let Some(year) = requested {
        return year;
    }
    latest_year(buckets).unwrap_or_else(|| {
        let year = Utc::now().year();
        warn!("No commits found; rendering an empty {year}");
        year
    })
}

pub fn write_year_report<W: Write + ?Sized>(
    buckets: &YearBucket,
    year: i32,
    emails: &PersonalEmails,
    global_max: u32,
    out: &mut W,
) -> Result<DailyAggregate> {
    let records = buckets.get(&year).map(Vec::as_slice).unwrap_or_default();
    if records.is_empty() {
        warn!("No commits in {year}");
    }

    let data = aggregate_year(records, year, emails);
    info!("Generating report for year {year}");
    render_svg(&data, global_max, out)?;
    Ok(data)
}

/// Render `<out_dir>/<year>.svg` for every year in `buckets`.
pub fn write_all_years(
    buckets: &YearBucket,
    emails: &PersonalEmails,
    global_max: u32,
    out_dir: &Path,
) -> Result<Vec<(PathBuf, DailyAggregate)>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(buckets.len());
    for year in buckets.keys() {
        let path = out_dir.join(format!("{year}.svg"));
        let mut out = BufWriter::new(File::create(&path)?);
        let data = write_year_report(buckets, *year, emails, global_max, &mut out)?;
        written.push((path, data));
    }
    Ok(written)
}

pub fn print_summary(data: &DailyAggregate, destination: Option<&Path>) {
    let mine: u32 = data.daily_mine.values().sum();
    let others: u32 = data.daily_others.values().sum();
    let target = destination
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    eprintln!(
        "{} {}: {} mine, {} others, busiest day {} -> {}",
        style("✓").green(),
        style(data.year).bold(),
        style(mine).cyan(),
        style(others).red(),
        style(data.max_commits).yellow(),
        style(target).dim()
    );
}
