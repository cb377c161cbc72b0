// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Analyse Lumen source files.
//!
//! Runs the front end over every file and streams each analysis entry to
//! stdout as it is produced, one line per entry. This is the machine-facing
//! surface an editor integration consumes.

use camino::Utf8PathBuf;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, instrument};

use lumen_core::analyse::ConsoleAnalysisReporter;
use lumen_core::compilation::Compilation;

/// Analyse the given source files.
#[instrument(skip_all, fields(files = files.len()))]
pub fn analyse(files: &[Utf8PathBuf]) -> Result<()> {
    let mut compilation = Compilation::new();

    for file in files {
        let stdout = std::io::stdout().lock();
        let mut reporter = ConsoleAnalysisReporter::new(file, stdout);
        let lexical_errors = compilation
            .parse_file(file, &mut reporter)
            .into_diagnostic()?;
        debug!(file = %file, lexical_errors, "analysed file");
    }
    Ok(())
}
