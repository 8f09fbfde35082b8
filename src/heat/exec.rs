use crate::cli::{CommonArgs, ScanArgs};
use crate::export::read_export_path;
use crate::heat::aggregate::{by_year, global_max};
use crate::heat::fetch::{collect_records, Collection};
use crate::heat::output::{open_sink, print_summary, select_year, write_all_years, write_year_report};
use crate::model::{CommitRecord, PersonalEmails};
use anyhow::Context;
use console::style;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Discover and extract everything under `args.path`.
pub fn scan(args: &ScanArgs) -> anyhow::Result<Collection> {
    let source = args.log_source();
    let collection = collect_records(&args.path, &source, !args.no_progress)
        .with_context(|| format!("Failed to scan {}", args.path.display()))?;

    if collection.repositories.is_empty() {
        warn!("No git repositories found under {}", args.path.display());
    }
    if !collection.failed.is_empty() {
        eprintln!(
            "{} {} of {} repositories could not be read",
            style("!").yellow(),
            collection.failed.len(),
            collection.repositories.len()
        );
    }
    Ok(collection)
}

pub fn exec_render(
    common: CommonArgs,
    input: PathBuf,
    year: Option<i32>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let records = read_export_path(&input)
        .with_context(|| format!("Failed to read export {}", input.display()))?;
    render_one(&common, records, year, output.as_deref())
}

pub fn exec_report(
    common: CommonArgs,
    scan_args: ScanArgs,
    year: Option<i32>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let collection = scan(&scan_args)?;
    render_one(&common, collection.records, year, output.as_deref())
}

pub fn exec_report_all(common: CommonArgs, scan_args: ScanArgs, out_dir: PathBuf) -> anyhow::Result<()> {
    let collection = scan(&scan_args)?;
    let emails = personal_emails(&common);
    let buckets = by_year(collection.records);
    let max = global_max(&buckets, &emails);

    let written = write_all_years(&buckets, &emails, max, &out_dir)
        .with_context(|| format!("Failed to write reports to {}", out_dir.display()))?;
    if written.is_empty() {
        warn!("No commits found; nothing written to {}", out_dir.display());
    }
    for (path, data) in &written {
        print_summary(data, Some(path));
    }
    Ok(())
}

fn render_one(
    common: &CommonArgs,
    records: Vec<CommitRecord>,
    year: Option<i32>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let emails = personal_emails(common);
    let buckets = by_year(records);
    let year = select_year(&buckets, year);
    let max = global_max(&buckets, &emails);

    let mut sink = open_sink(output).context("Failed to open output")?;
    let data = write_year_report(&buckets, year, &emails, max, &mut sink)
        .context("Failed to write SVG report")?;
    drop(sink);

    print_summary(&data, output);
    Ok(())
}

fn personal_emails(common: &CommonArgs) -> PersonalEmails {
    let emails = common.personal_emails();
    if emails.is_empty() {
        warn!("No --email given; every commit counts as someone else's");
    }
    emails
}
