//! CLR compiler CLI.

use std::io::{self, Write};
use std::process::ExitCode;

use clrc::commands::{check, render, symbols};
use clrc::{init_tracing, CompilerConfig, DiagnosticCollector, DriverError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rest = &args[2..];
    let result = match args[1].as_str() {
        "symbols" => symbols(rest, &mut out).map(|()| ExitCode::SUCCESS),
        "render" => render(rest, &mut out).map(|()| ExitCode::SUCCESS),
        "check" => run_check(rest, &mut out),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        other => Err(DriverError::usage(format!("unknown command '{other}'"))),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            let _ = out.flush();
            eprintln!("error: {error}");
            if matches!(error, DriverError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn run_check(args: &[String], out: &mut impl Write) -> Result<ExitCode, DriverError> {
    let config = CompilerConfig::from_args(args)?;
    let mut diagnostics = DiagnosticCollector::new();
    let summary = check(&config, &mut diagnostics, out)?;

    eprint!("{}", diagnostics.render());
    if let Some(summary) = &summary {
        for package in &summary.unresolved_imports {
            tracing::debug!(package, "default import has no provider");
        }
    }
    if diagnostics.has_errors() {
        eprintln!("error: aborting due to {} error(s)", diagnostics.error_count());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_usage() {
    eprintln!("CLR compiler core");
    eprintln!();
    eprintln!("Usage: clrc <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  symbols <assembly.json>...   List symbols built from assembly descriptions");
    eprintln!("  render <tree.json> [-o <f>]  Render a serialized code tree");
    eprintln!("  check [options]              Validate inputs and resolve symbols");
    eprintln!("  help                         Show this message");
    eprintln!();
    eprintln!("Check options:");
    eprintln!("  -s, --source <dir>           Source root (repeatable)");
    eprintln!("  -a, --assembly <file>        Assembly description (repeatable)");
    eprintln!("  --module <name>              Module name (default: main)");
    eprintln!("  -o, --output <dir>           Write a symbol listing here");
    eprintln!("  --implicit-package <name>    Package that always exists (repeatable)");
    eprintln!();
    eprintln!("Set CLR_LOG (e.g. CLR_LOG=clr_symbols=debug) for tracing output.");
}
