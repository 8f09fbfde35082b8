use crate::cli::{CommonArgs, ScanArgs};
use crate::error::Result;
use crate::heat::{open_sink, scan, Collection};
use crate::model::{CommitRecord, ExportDocument, ExportInput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

pub fn exec(_common: CommonArgs, scan_args: ScanArgs, output: Option<PathBuf>) -> anyhow::Result<()> {
    let collection = scan(&scan_args)?;
    let document = build_document(&scan_args.path, &collection);

    let mut sink = open_sink(output.as_deref()).context("Failed to open output")?;
    write_export(&document, &mut sink).context("Failed to write export")?;
    drop(sink);

    eprintln!(
        "{} {} commits from {} repositories",
        style("✓").green(),
        style(document.records.len()).cyan(),
        style(document.repositories.len()).cyan()
    );
    if collection.skipped_rows > 0 {
        eprintln!(
            "{} {} unparseable rows skipped",
            style("!").yellow(),
            collection.skipped_rows
        );
    }
    Ok(())
}

pub fn build_document(root: &Path, collection: &Collection) -> ExportDocument {
    let display = |p: &PathBuf| p.to_string_lossy().to_string();
    ExportDocument {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        root_path: root.to_string_lossy().to_string(),
        repositories: collection.repositories.iter().map(display).collect(),
        failed_repositories: collection.failed.iter().map(display).collect(),
        records: collection.records.clone(),
    }
}

pub fn write_export<W: Write + ?Sized>(document: &ExportDocument, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, document)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Accepts both the current document and the legacy bare triple array.
pub fn read_export<R: Read>(reader: R) -> Result<Vec<CommitRecord>> {
    let input: ExportInput = serde_json::from_reader(reader)?;
    Ok(input.into_records())
}

/// `-` reads stdin.
pub fn read_export_path(path: &Path) -> Result<Vec<CommitRecord>> {
    if path == Path::new("-") {
        return read_export(io::stdin().lock());
    }
    read_export(BufReader::new(File::open(path)?))
}
