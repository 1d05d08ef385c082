//! Demonstration program: builds the sink and logs a few representative lines.
//!
//! Settings come from the compile-time defaults, or from the TOML file named
//! by `DAYLOG_CONFIG` when that variable is set.
use std::path::PathBuf;
use std::thread;

use anyhow::{Context as _, Result};
use daylog::{
    LogSink, Render, SinkConfig, emit, emit_spaced, log_error, log_value, log_warning, msg,
};

/// Environment variable naming an optional TOML config file.
const CONFIG_ENV: &str = "DAYLOG_CONFIG";

struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Render for Point3 {
    fn render(&self, out: &mut String) {
        msg!(self.x, ", ", self.y, ", ", self.z).render(out);
    }
}

struct User {
    name: String,
    health: i32,
    pos: Point3,
}

impl Render for User {
    fn render(&self, out: &mut String) {
        msg!("name(", self.name, "), HP(", self.health, "), pos(", self.pos, ")").render(out);
    }
}

fn load_config() -> Result<SinkConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            SinkConfig::from_toml_file(&path)
                .with_context(|| format!("failed to load {CONFIG_ENV}={}", path.display()))
        }
        None => Ok(SinkConfig::default()),
    }
}

fn main() -> Result<()> {
    daylog::diagnostics::init_diagnostics();
    let log = LogSink::new(load_config()?);
    log.set_thread_name("main")?;

    let fname = "useful_file.txt";
    let is_opened = true;

    emit_spaced!(log, "Any number of parameters separated by comma", fname, "opened =", is_opened);
    emit!(log, fname, " is opened = ", is_opened);
    emit!(log, "Processing...");
    log.emit_fmt(format_args!("Good old {}, from {}s", "horse", 2000));
    log_error!(log, "File not found", fname);
    log_warning!(log, "File not found", fname);
    log_value!(log, is_opened);

    let user = User {
        name: "Vaniya".to_string(),
        health: 120,
        pos: Point3 {
            x: 122.3,
            y: 17.4,
            z: 442.0,
        },
    };
    emit_spaced!(log, "User:", user);

    log.separator_line();
    thread::scope(|s| {
        for worker in 0..3 {
            let log = &log;
            s.spawn(move || emit_spaced!(log, "worker", worker, "checking in"));
        }
    });

    if let Some(path) = log.current_file_path() {
        emit_spaced!(log, "log file:", path);
    }
    log.flush()?;
    Ok(())
}
