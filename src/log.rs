//! File logging.
//!
//! The terminal is owned by the UI, so diagnostics go to
//! `~/.selectbox/logs/selectbox_<timestamp>.log` instead. Until [`init`]
//! succeeds every call is a no-op.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;

use crate::error::Result;

static SINK: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Tag written in front of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Plain,
    Event,
    Panic,
}

impl Tag {
    fn prefix(self) -> &'static str {
        match self {
            Tag::Plain => "",
            Tag::Event => "[EVENT] ",
            Tag::Panic => "[PANIC] ",
        }
    }
}

fn log_dir(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from("."))
        .join(".selectbox")
        .join("logs")
}

/// One file per run, named after the start time.
fn session_file(dir: &Path, started: DateTime<Local>) -> PathBuf {
    dir.join(format!("selectbox_{}.log", started.format("%Y%m%d_%H%M%S")))
}

fn format_line(at: DateTime<Local>, tag: Tag, msg: &str) -> String {
    format!("[{}] {}{}\n", at.format("%H:%M:%S%.3f"), tag.prefix(), msg)
}

fn open_in(dir: &Path, started: DateTime<Local>) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let path = session_file(dir, started);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    Ok((file, path))
}

fn write(tag: Tag, msg: &str) {
    let Ok(mut guard) = SINK.lock() else {
        return;
    };
    if let Some(file) = guard.as_mut() {
        let line = format_line(Local::now(), tag, msg);
        let _ = file.write_all(line.as_bytes());
        let _ = file.flush();
    }
}

/// Open this run's log file and return its path.
pub fn init() -> Result<PathBuf> {
    let (file, path) = open_in(&log_dir(dirs::home_dir()), Local::now())?;
    if let Ok(mut guard) = SINK.lock() {
        *guard = Some(file);
    }
    log("=== selectbox started ===");
    Ok(path)
}

pub fn log(msg: &str) {
    write(Tag::Plain, msg);
}

/// Log an input or signal the app reacted to.
pub fn log_event(event: &str) {
    write(Tag::Event, event);
}

/// Restore the terminal and record the panic before the default hook prints it.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        write(Tag::Panic, &info.to_string());
        crate::tui::restore_terminal();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    #[test]
    fn test_log_dir_falls_back_to_cwd() {
        assert_eq!(log_dir(None), PathBuf::from("./.selectbox/logs"));
        assert_eq!(
            log_dir(Some(PathBuf::from("/home/u"))),
            PathBuf::from("/home/u/.selectbox/logs")
        );
    }

    #[test]
    fn test_session_file_named_by_start_time() {
        let path = session_file(Path::new("/logs"), at(7, 5, 3));
        assert_eq!(path, PathBuf::from("/logs/selectbox_20240309_070503.log"));
    }

    #[test]
    fn test_line_tags() {
        assert_eq!(format_line(at(1, 2, 3), Tag::Plain, "hi"), "[01:02:03.000] hi\n");
        assert_eq!(
            format_line(at(1, 2, 3), Tag::Event, "ctrl-c signal"),
            "[01:02:03.000] [EVENT] ctrl-c signal\n"
        );
        assert!(format_line(at(1, 2, 3), Tag::Panic, "boom").contains("[PANIC] boom"));
    }

    #[test]
    fn test_open_creates_dir_and_truncates() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");

        let (mut file, path) = open_in(&dir, at(9, 0, 0)).unwrap();
        file.write_all(b"first run\n").unwrap();
        drop(file);

        let (_file, again) = open_in(&dir, at(9, 0, 0)).unwrap();
        assert_eq!(path, again);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
