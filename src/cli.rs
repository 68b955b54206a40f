//! CLI argument definitions and command dispatch.

use crate::extractors::{ExtractorManager, FileDetails};
use crate::manifest::{
    self, classify, render_dependencies, DependencyDisplay, DependencySplit, ProjectDetails,
};
use crate::utils::{collect_source_files, DescribeOptions};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Top-level CLI parser for `gosymex`.
#[derive(Debug, Parser)]
#[command(
    name = "gosymex",
    version,
    about = "Describe the declared surface of Go source files"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print imports, structs, interfaces and functions of a Go file or tree.
    Describe {
        /// A `.go` file or a directory to walk.
        path: PathBuf,

        /// Include `_test.go` files when walking a directory.
        #[arg(short = 't', long)]
        include_tests: bool,

        /// Include `_mock.go` files when walking a directory.
        #[arg(short = 'm', long)]
        include_mocks: bool,

        /// Skip files whose path relative to the root matches this glob.
        #[arg(long, value_name = "GLOB")]
        exclude: Vec<String>,

        /// Print single-line JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Find the enclosing go.mod and list the project's dependencies.
    Detect {
        /// Any path inside the project.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also list indirect dependencies.
        #[arg(long)]
        all_deps: bool,

        /// Print the project details as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log level implied by `-v`/`-q`, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Run the parsed command.
pub fn execute(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Describe {
            path,
            include_tests,
            include_mocks,
            exclude,
            compact,
        } => {
            let opts = DescribeOptions {
                include_tests,
                include_mocks,
                exclude: Vec::new(),
            }
            .with_excludes(exclude.as_slice())
            .context("invalid --exclude pattern")?;
            execute_describe(&path, &opts, compact)
        }
        Command::Detect {
            path,
            all_deps,
            json,
        } => execute_detect(&path, DependencyDisplay { show_all: all_deps }, json),
    }
}

fn execute_describe(path: &Path, opts: &DescribeOptions, compact: bool) -> Result<ExitCode> {
    let manager = ExtractorManager::new();
    let mut stdout = io::stdout().lock();

    if !path.is_dir() {
        let details = manager.describe(path)?;
        write_report(&mut stdout, &details, compact)?;
        return Ok(ExitCode::SUCCESS);
    }

    let files = collect_source_files(path, opts);
    info!("Describing {} files under {}", files.len(), path.display());

    let mut failures = 0usize;
    for outcome in manager.describe_files(&files) {
        match outcome.result {
            Ok(details) => write_report(&mut stdout, &details, compact)?,
            Err(e) => {
                failures += 1;
                eprintln!("{}", e);
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} files failed", failures, files.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn write_report(out: &mut impl Write, details: &FileDetails, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, details)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, details)?;
    }
    writeln!(out)?;
    Ok(())
}

/// `detect --json` output
#[derive(Serialize)]
struct DetectReport<'a> {
    project: &'a ProjectDetails,
    dependencies: &'a DependencySplit,
}

fn execute_detect(path: &Path, display: DependencyDisplay, json: bool) -> Result<ExitCode> {
    let project = manifest::inspect_project(path)?;
    let split = classify(&project.dependencies);
    let mut stdout = io::stdout().lock();

    if json {
        let report = DetectReport {
            project: &project,
            dependencies: &split,
        };
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_project_details(&project))?;
        writeln!(stdout)?;
        write!(stdout, "{}", render_dependencies(&split, display))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Header block printed above the dependency table.
pub fn render_project_details(project: &ProjectDetails) -> String {
    let mut out = String::from("Project Details:\n");
    out.push_str(&format!("  Project Name: {}\n", project.project_name));
    out.push_str(&format!("  Project Directory: {}\n", project.project_dir.display()));
    out.push_str(&format!("  Module Path: {}\n", project.module_path));
    out.push_str(&format!(
        "  Go Version: {}\n",
        project.go_version.as_deref().unwrap_or("unknown")
    ));
    out
}
