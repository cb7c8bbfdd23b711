//! Terminal logger: info on stdout, warnings and errors on stderr.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn line(&self, record: &Record) -> String {
        let prefix = match record.level() {
            Level::Error => format!("{} ", "error:".if_supports_color(Stderr, |t| t.red())),
            Level::Warn => format!("{} ", "warning:".if_supports_color(Stderr, |t| t.yellow())),
            Level::Debug | Level::Trace => {
                format!("{} ", "debug:".if_supports_color(Stdout, |t| t.dimmed()))
            }
            Level::Info => String::new(),
        };
        if self.timestamps {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            format!("[{now}] {prefix}{}", record.args())
        } else {
            format!("{prefix}{}", record.args())
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.line(record);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let plain = strip_ansi_escapes::strip_str(&line);
            let _ = writeln!(file, "{plain}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

/// Install the logger. `--quiet` keeps warnings and errors only; `--verbose`
/// adds debug output and timestamps.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = logfile.and_then(|path| match File::create(path) {
        Ok(f) => Some(Mutex::new(f)),
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", path.display(), e);
            None
        }
    });
    let logger = CliLogger {
        level,
        timestamps: verbose,
        file,
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

/// Print an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}
