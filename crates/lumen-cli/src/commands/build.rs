// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Build Lumen source files.
//!
//! Runs the front end over every file, printing diagnostics as they are
//! produced. Diagnostics never fail the run; only a usage or I/O problem
//! does. Code generation is a stub.

use camino::Utf8PathBuf;
use miette::{IntoDiagnostic, Result};
use tracing::{info, instrument, warn};

use lumen_core::analyse::{render, AnalysisEntryKind, CollectingReporter};
use lumen_core::ast_printer;
use lumen_core::compilation::Compilation;

/// Build the given source files.
#[instrument(skip_all, fields(files = files.len()))]
pub fn build(files: &[Utf8PathBuf], verbose: bool) -> Result<()> {
    info!("Starting build");
    let mut compilation = Compilation::new();
    let mut diagnostics = 0usize;

    for file in files {
        let mut reporter = CollectingReporter::new();
        compilation
            .parse_file(file, &mut reporter)
            .into_diagnostic()?;

        for entry in reporter.entries() {
            if matches!(
                entry.kind(),
                AnalysisEntryKind::Error | AnalysisEntryKind::Warning | AnalysisEntryKind::Info
            ) {
                eprintln!("{}", render(file, entry));
                diagnostics += 1;
            }
        }
    }

    if diagnostics > 0 {
        warn!(diagnostics, "build finished with diagnostics");
    }
    if verbose {
        print!("{}", ast_printer::print(compilation.root()));
    }
    println!("{}", compilation.build());
    Ok(())
}
