use crate::git::{GitLog, DEFAULT_LOG_FORMAT};
use crate::model::{EmailMatch, PersonalEmails};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitstats")]
#[command(about = "Annual commit heatmaps for every git repository under a directory")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long = "email", global = true, help = "My email address (repeat for several)")]
    pub emails: Vec<String>,

    #[arg(long, global = true, help = "Compare email addresses case-insensitively")]
    pub ignore_email_case: bool,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "More diagnostics on stderr (-v info, -vv debug)")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn personal_emails(&self) -> PersonalEmails {
        let mode = if self.ignore_email_case {
            EmailMatch::CaseInsensitive
        } else {
            EmailMatch::Exact
        };
        PersonalEmails::new(self.emails.iter().cloned(), mode)
    }
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    #[arg(help = "Directory to scan for git repositories")]
    pub path: PathBuf,

    #[arg(long, default_value = DEFAULT_LOG_FORMAT, help = "git log pretty format producing name|email|date")]
    pub log_format: String,

    #[arg(long, default_value = "git", help = "git executable to run")]
    pub git: String,

    #[arg(long, help = "Hide the progress spinner")]
    pub no_progress: bool,
}

impl ScanArgs {
    pub fn log_source(&self) -> GitLog {
        GitLog::new()
            .with_program(self.git.clone())
            .with_format(self.log_format.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract commit history into a JSON document for later rendering.
    Analyze {
        #[clap(flatten)]
        scan: ScanArgs,

        #[arg(short, long, help = "Write JSON here instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Render an SVG heatmap from a JSON document produced by `analyze`.
    Render {
        #[arg(help = "JSON document, or - for stdin")]
        input: PathBuf,

        #[arg(long, help = "Year to render (default: latest year with commits)")]
        year: Option<i32>,

        #[arg(short, long, help = "Write SVG here instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Scan and render in one go.
    Report {
        #[clap(flatten)]
        scan: ScanArgs,

        #[arg(long, conflicts_with = "all_years", help = "Year to render (default: latest year with commits)")]
        year: Option<i32>,

        #[arg(long, requires = "out_dir", conflicts_with = "output", help = "Render every year as <year>.svg")]
        all_years: bool,

        #[arg(long, requires = "all_years", help = "Directory for --all-years output")]
        out_dir: Option<PathBuf>,

        #[arg(short, long, help = "Write SVG here instead of stdout")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze { scan, output } => crate::export::exec(self.common, scan, output),
            Commands::Render { input, year, output } => {
                crate::heat::exec_render(self.common, input, year, output)
            }
            Commands::Report {
                scan,
                year,
                all_years,
                out_dir,
                output,
            } => {
                if all_years {
                    // clap enforces --out-dir alongside --all-years
                    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
                    crate::heat::exec_report_all(self.common, scan, out_dir)
                } else {
                    crate::heat::exec_report(self.common, scan, year, output)
                }
            }
        }
    }
}
