// src/helpers/log.rs
//
// Diagnostics setup for the UI binary.
//
// In release builds with `windows_subsystem = "windows"` there is no console
// attached, so the subscriber writes to paths::log_file() instead. Falls back
// to stderr when that file cannot be opened.
//
// Filter with RUST_LOG, e.g. `RUST_LOG=frameforge_worker=debug`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::paths;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let log_path = paths::log_file();
    let result = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
        Err(e) => {
            eprintln!("[log] cannot open {}: {e}; logging to stderr", log_path.display());
            builder.try_init()
        }
    };
    if let Err(e) = result {
        eprintln!("[log] subscriber already installed: {e}");
    }
}
