//! Replay a recorded event trace into Impro command files.
//!
//! Usage:
//!   replay_trace <trace.json> <output> [<page>|all] [-U]
//!
//! - `<page>`: page label, or 1-based page number when no label matches
//!   (default: first page)
//! - `all`: convert every page; `%d` in `<output>` becomes the page number
//! - `-U`: capture text glyph by glyph instead of whole strings
//!
//! Diagnostics go to stderr (`RUST_LOG` controls verbosity, default `warn`).

use pdf_impro::batch::{convert_pages, OutputTemplate, PageSelection};
use pdf_impro::config::{TextCaptureMode, TranslatorConfig};
use pdf_impro::trace::Trace;
use std::path::PathBuf;
use std::process::ExitCode;

struct ReplayArgs {
    trace: PathBuf,
    output: OutputTemplate,
    selection: PageSelection,
    capture_mode: TextCaptureMode,
}

impl ReplayArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if !(2..=4).contains(&args.len()) {
            return None;
        }

        let mut capture_mode = TextCaptureMode::WholeString;
        let mut page = None;
        for arg in &args[2..] {
            match arg.as_str() {
                "-U" => capture_mode = TextCaptureMode::PerGlyph,
                _ if page.is_none() => page = Some(arg.as_str()),
                _ => return None,
            }
        }

        Some(Self {
            trace: PathBuf::from(&args[0]),
            output: OutputTemplate::new(args[1].as_str()),
            selection: PageSelection::from_arg(page),
            capture_mode,
        })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(args) = ReplayArgs::from_args() else {
        eprintln!("Usage: replay_trace <trace.json> <output> [<page>|all] [-U]");
        return ExitCode::from(2);
    };

    let trace = match Trace::open(&args.trace) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Unable to open trace {}: {}", args.trace.display(), e);
            return ExitCode::from(3);
        },
    };

    let config = TranslatorConfig::new().with_capture_mode(args.capture_mode);
    let report = match convert_pages(&trace.pages, &args.selection, &args.output, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(5);
        },
    };

    for outcome in &report.pages {
        match &outcome.result {
            Ok(summary) => println!(
                "Page {}: {} records, {} diagnostics -> {}",
                outcome.page_number,
                summary.records,
                summary.diagnostics.len(),
                outcome.output.display()
            ),
            Err(e) => eprintln!("Page {}: {}", outcome.page_number, e),
        }
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{} of {} pages failed", report.failed(), report.pages.len());
        ExitCode::from(4)
    }
}
