use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hashira::cli::Cli;
use hashira::commands::{BatchReport, CaseSource, run_batch};
use hashira::observer::{ConsoleObserver, NoopObserver, SolveObserver};
use hashira::solver::SolveOptions;

fn print_text_report(report: &BatchReport) {
    println!("FINAL RESULTS:");
    for case in &report.cases {
        println!("{}: {}", case.source, case.outcome);
    }
    if !report.is_success() {
        eprintln!(
            "{} of {} cases failed",
            report.failed_count(),
            report.cases.len()
        );
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut sources: Vec<CaseSource> = cli.files.into_iter().map(CaseSource::File).collect();
    if cli.samples {
        sources.extend(CaseSource::builtins());
    }

    let options = SolveOptions {
        cross_validate: cli.cross_validate,
    };

    // Progress goes to stderr; only the report is written to stdout
    let mut console = ConsoleObserver::stderr();
    let mut quiet = NoopObserver;
    let observer: &mut dyn SolveObserver = if cli.quiet { &mut quiet } else { &mut console };

    let report = run_batch(&sources, options, observer);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_text_report(&report);
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
