// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lumen compiler command-line interface.
//!
//! This is the main entry point for the `lumen` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;

/// Lumen: a small statically-typed language
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile Lumen source files
    Build {
        /// Source files to compile
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,

        /// Print the parsed AST outline
        #[arg(long)]
        verbose: bool,
    },

    /// Analyse source files, printing one line per analysis entry
    Analyse {
        /// Source files to analyse
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage problems (unknown task, missing files) exit with status 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Build { files, verbose } => commands::build::build(&files, verbose),
        Command::Analyse { files } => commands::analyse::analyse(&files),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
