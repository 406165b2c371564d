#![forbid(unsafe_code)]

//! folio: a terminal portfolio and resume viewer.

mod app;
mod config;
mod content;
mod doc;
mod export;
mod theme;

use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use folio_runtime::Program;
use tracing_subscriber::EnvFilter;

use crate::app::Folio;
use crate::config::FolioConfig;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let config_path = env::var_os("FOLIO_CONFIG").map(PathBuf::from);
    let config = FolioConfig::load(config_path.as_deref())?;

    let (width, height) = crossterm::terminal::size()?;
    let program_config = config.program();
    let model = Folio::new(config, width, height);
    Program::new(model).config(program_config).run()
}

/// Log to the file named by `FOLIO_LOG_FILE`, filtered by `FOLIO_LOG`.
/// Stdout belongs to the terminal UI, so without a file target logging
/// stays off entirely.
fn init_tracing() {
    let Some(path) = env::var_os("FOLIO_LOG_FILE") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        eprintln!("folio: cannot open log file {}", PathBuf::from(path).display());
        return;
    };
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}
