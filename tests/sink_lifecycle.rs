#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the log sink: file contents, retention, thread
//! tags and concurrent emission.
//!
//! Every test writes into its own temporary directory with the console
//! switched off, then reads the dated file back from disk.

mod common;

use std::collections::HashSet;
use std::thread;

use daylog::{LogSink, SinkConfig, SinkError, emit, emit_spaced};

// ---------------------------------------------------------------------------
// File contents
// ---------------------------------------------------------------------------

/// Writing N lines and reading the file back yields N well-formed lines.
#[test]
fn lines_round_trip_through_the_file() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    for i in 0..10 {
        emit_spaced!(sink, "line", i, "of", 10);
    }
    let path = sink.current_file_path().expect("file should be open");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));

    let lines = common::read_lines(&path);
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        let (timestamp, tag, text) = common::split_line(line).expect("line layout");
        assert!(common::is_timestamp(timestamp), "bad timestamp in {line:?}");
        assert!(!tag.is_empty());
        assert_eq!(text, format!("line {i} of 10"));
    }
}

/// The file is named `<prefix><YYYY-MM-DD><extension>`.
#[test]
fn file_name_follows_naming_scheme() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(SinkConfig {
        prefix: "app_".to_string(),
        extension: ".txt".to_string(),
        ..dir.config()
    });
    let path = sink.current_file_path().unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    let date = name
        .strip_prefix("app_")
        .and_then(|n| n.strip_suffix(".txt"))
        .expect("prefix and extension");
    assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(), "got {name}");
}

/// Concrete rendering scenarios reach the file verbatim.
#[test]
fn rendering_policies_reach_the_file() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    emit_spaced!(sink, "User:", 42, true);
    emit!(sink, "a", 1, "b");
    sink.emit_spaced(&[]);
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    let texts: Vec<&str> = lines
        .iter()
        .map(|l| common::split_line(l).unwrap().2)
        .collect();
    assert_eq!(texts, ["User: 42 true", "a1b", ""]);
}

/// A second sink on the same day appends to the existing file.
#[test]
fn reopening_appends_to_existing_file() {
    let dir = common::LogDir::new();
    {
        let sink = LogSink::new(dir.config());
        emit!(sink, "first run");
    }
    let sink = LogSink::new(dir.config());
    emit!(sink, "second run");
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first run"));
    assert!(lines[1].ends_with("second run"));
}

// ---------------------------------------------------------------------------
// Retention
// ---------------------------------------------------------------------------

/// With a retention of two, opening prunes all but the two newest files.
#[test]
fn retention_keeps_newest_files() {
    let dir = common::LogDir::new();
    dir.touch(&[
        "daylog_2000-01-01.log",
        "daylog_2000-01-02.log",
        "daylog_2000-01-03.log",
        "daylog_2000-01-04.log",
        "daylog_2000-01-05.log",
    ]);
    let sink = LogSink::new(SinkConfig {
        max_files: 2,
        ..dir.config()
    });
    let current = sink
        .current_file_path()
        .unwrap()
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(dir.file_names(), ["daylog_2000-01-05.log".to_string(), current]);
}

/// Files outside the naming scheme are never pruned.
#[test]
fn retention_leaves_foreign_files_alone() {
    let dir = common::LogDir::new();
    dir.touch(&["daylog_2000-01-01.txt", "notes.log", "other_2000-01-01.log"]);
    let _sink = LogSink::new(SinkConfig {
        max_files: 1,
        ..dir.config()
    });
    let names = dir.file_names();
    assert_eq!(names.len(), 4, "got {names:?}");
    assert!(names.contains(&"notes.log".to_string()));
}

/// A file dated in the future does not push today's file out of retention.
#[test]
fn retention_spares_open_file_next_to_future_dated_one() {
    let dir = common::LogDir::new();
    dir.touch(&["daylog_2099-01-01.log"]);
    let sink = LogSink::new(SinkConfig {
        max_files: 1,
        ..dir.config()
    });
    emit!(sink, "still here");
    let path = sink.current_file_path().expect("file should be open");
    assert!(path.is_file(), "open file {} was deleted", path.display());
    assert_eq!(dir.file_names().len(), 1);
    let lines = common::read_lines(&path);
    assert!(lines[0].ends_with("] still here"), "got {lines:?}");
}

/// An explicit reopen re-runs retention against files that appeared since.
#[test]
fn reopen_prunes_again() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(SinkConfig {
        max_files: 1,
        ..dir.config()
    });
    dir.touch(&["daylog_2000-01-01.log"]);
    assert_eq!(dir.file_names().len(), 2);
    sink.reopen().unwrap();
    assert_eq!(dir.file_names().len(), 1);
}

// ---------------------------------------------------------------------------
// Thread tags
// ---------------------------------------------------------------------------

/// Threads that never name themselves get distinct automatic tags.
#[test]
fn unnamed_threads_get_distinct_tags() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    thread::scope(|s| {
        s.spawn(|| emit!(sink, "from a"));
        s.spawn(|| emit!(sink, "from b"));
    });
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    let tags: HashSet<&str> = lines
        .iter()
        .map(|l| common::split_line(l).unwrap().1)
        .collect();
    assert_eq!(tags.len(), 2, "got {lines:?}");
}

/// A named thread sees its name on every later line.
#[test]
fn named_thread_tags_all_lines() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    thread::scope(|s| {
        s.spawn(|| {
            sink.set_thread_name("worker").unwrap();
            emit!(sink, "one");
            emit!(sink, "two");
        });
    });
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("[worker] ")), "got {lines:?}");
}

/// An empty name is refused with one warning line and the tag is kept.
#[test]
fn empty_thread_name_keeps_previous() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    thread::scope(|s| {
        s.spawn(|| {
            let before = sink.thread_name();
            assert!(matches!(
                sink.set_thread_name(""),
                Err(SinkError::EmptyThreadName)
            ));
            assert_eq!(sink.thread_name(), before);
        });
    });
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("cannot be set empty"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

/// Concurrent writers never split or lose lines.
#[test]
fn concurrent_writers_keep_lines_whole() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let dir = common::LogDir::new();
    let sink = LogSink::new(SinkConfig {
        flush_interval_ms: 5,
        ..dir.config()
    });
    thread::scope(|s| {
        for t in 0..THREADS {
            let sink = &sink;
            s.spawn(move || {
                sink.set_thread_name(&format!("w{t}")).unwrap();
                for i in 0..PER_THREAD {
                    emit_spaced!(sink, "payload", t, i, "end");
                }
            });
        }
    });
    let path = sink.current_file_path().unwrap();
    drop(sink);

    let lines = common::read_lines(&path);
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in &lines {
        let (timestamp, tag, text) = common::split_line(line).expect("line layout");
        assert!(common::is_timestamp(timestamp), "bad line {line:?}");
        let t = tag.strip_prefix('w').expect("worker tag");
        assert!(text.starts_with(&format!("payload {t} ")), "bad line {line:?}");
        assert!(text.ends_with(" end"), "bad line {line:?}");
    }
}

/// Rotation under concurrent writers loses no lines.
#[test]
fn reopen_while_writing_is_safe() {
    let dir = common::LogDir::new();
    let sink = LogSink::new(dir.config());
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for i in 0..100 {
                    emit!(sink, "tick ", i);
                }
            });
        }
        s.spawn(|| {
            for _ in 0..20 {
                sink.reopen().unwrap();
            }
        });
    });
    let lines = common::read_lines(&sink.current_file_path().unwrap());
    assert_eq!(lines.len(), 400);
}

// ---------------------------------------------------------------------------
// Degraded modes
// ---------------------------------------------------------------------------

/// A sink whose directory cannot be created keeps running without a file.
#[test]
fn unusable_directory_degrades_to_console() {
    let dir = common::LogDir::new();
    dir.touch(&["blocker"]);
    let sink = LogSink::new(SinkConfig {
        directory: Some(dir.path().join("blocker").join("logs")),
        ..dir.config()
    });
    assert!(!sink.is_file_open());
    emit!(sink, "ignored");
    sink.flush().unwrap();
    assert!(sink.rotate_if_date_changed().is_err());
}
