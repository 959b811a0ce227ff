use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use fetch_call_fixer::{FileOutcome, Patcher, WriteMode};
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fetch-call-fixer")]
#[command(
    about = "Restore the missing parenthesis in `await fetch` calls under app/tools/*/page.tsx",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Show unified diff of changed files
    #[arg(short, long)]
    diff: bool,

    /// Dry run - show what would be changed without modifying files
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    anyhow::ensure!(
        cli.root.is_dir(),
        "Root is not a directory: {}",
        cli.root.display()
    );

    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::InPlace
    };
    let patcher = Patcher::new(&cli.root).with_mode(mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        writeln!(out, "{}", "[DRY RUN - no files will be written]".cyan())?;
    }

    let report = patcher
        .run(|outcome| report_file(&mut out, outcome, cli.dry_run, cli.diff))
        .map_err(|err| {
            let location = err.path().unwrap_or(patcher.root()).display().to_string();
            anyhow::Error::new(err).context(format!("Fix run aborted at {location}"))
        })?;
    info!(%report, "run finished");

    if cli.dry_run {
        writeln!(out, "\nDry run complete, no files written.")?;
    } else {
        writeln!(out, "\nAll files fixed!")?;
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only progress lines.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn report_file(
    out: &mut impl Write,
    outcome: &FileOutcome,
    dry_run: bool,
    show_diff: bool,
) -> io::Result<()> {
    let label = if dry_run { "Would fix" } else { "Fixed" };
    writeln!(out, "{}: {}", label, outcome.display.display())?;

    if show_diff && outcome.result.changed() {
        display_diff(
            out,
            &outcome.display,
            &outcome.result.original,
            &outcome.result.patched,
        )?;
    }

    Ok(())
}

/// Show unified diff between original and patched content
fn display_diff(
    out: &mut impl Write,
    file: &Path,
    original: &str,
    patched: &str,
) -> io::Result<()> {
    writeln!(out, "{}", format!("--- {} (original)", file.display()).dimmed())?;
    writeln!(out, "{}", format!("+++ {} (patched)", file.display()).dimmed())?;

    let diff = TextDiff::from_lines(original, patched);

    for hunk in diff.unified_diff().context_radius(2).iter_hunks() {
        writeln!(out, "{}", hunk.header().to_string().cyan())?;
        for change in hunk.iter_changes() {
            let line = match change.tag() {
                ChangeTag::Delete => format!("-{}", change).red(),
                ChangeTag::Insert => format!("+{}", change).green(),
                ChangeTag::Equal => format!(" {}", change).normal(),
            };
            write!(out, "{}", line)?;
            if change.missing_newline() {
                writeln!(out)?;
            }
        }
    }

    Ok(())
}
