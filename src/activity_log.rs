// src/activity_log.rs
//
// Best-effort JSONL event log in the app data dir. Logging must never take
// the app down: every write failure is swallowed after the first init check.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const LOG_FILE_NAME: &str = "activity.log.jsonl";
pub const MAX_LOG_EVENTS: usize = 200;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ActivityKind {
    AppStarted,
    ExportStarted,
    ExportSucceeded,
    ExportFailed,
    FontFallback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: u64,
    pub ts_utc: String,
    pub kind: ActivityKind,
    pub detail: String,
}

pub struct ActivityLog {
    path: PathBuf,
    buf: VecDeque<ActivityEvent>,
    next_id: u64,
}

impl ActivityLog {
    pub fn init(app_data_dir: &Path) -> Result<Self, String> {
        fs::create_dir_all(app_data_dir).map_err(|e| format!("activity log dir create: {e}"))?;

        let mut log = Self {
            path: app_data_dir.join(LOG_FILE_NAME),
            buf: VecDeque::with_capacity(MAX_LOG_EVENTS),
            next_id: 1,
        };

        log.load_tail_best_effort();
        log.next_id = log.buf.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        Ok(log)
    }

    pub fn record(&mut self, kind: ActivityKind, detail: impl Into<String>) {
        let ev = ActivityEvent {
            id: self.alloc_id(),
            ts_utc: chrono::Utc::now().to_rfc3339(),
            kind,
            detail: detail.into(),
        };

        if self.buf.len() >= MAX_LOG_EVENTS {
            self.buf.pop_front();
        }
        self.buf.push_back(ev.clone());

        let _ = self.append_jsonl_best_effort(&ev);
    }

    pub fn recent(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.buf.iter()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn load_tail_best_effort(&mut self) {
        let Ok(file) = fs::File::open(&self.path) else {
            return;
        };

        for line in BufReader::new(file).lines().map_while(Result::ok) {
            if let Ok(ev) = serde_json::from_str::<ActivityEvent>(&line) {
                if self.buf.len() >= MAX_LOG_EVENTS {
                    self.buf.pop_front();
                }
                self.buf.push_back(ev);
            }
        }
    }

    fn append_jsonl_best_effort(&self, ev: &ActivityEvent) -> std::io::Result<()> {
        let line = serde_json::to_string(ev)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_one_jsonl_line_per_event() {
        let td = tempfile::tempdir().unwrap();
        let mut log = ActivityLog::init(td.path()).unwrap();

        log.record(ActivityKind::AppStarted, "");
        log.record(ActivityKind::ExportFailed, "svg parse failed");

        let raw = fs::read_to_string(td.path().join(LOG_FILE_NAME)).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 2);

        let ev: ActivityEvent = serde_json::from_str(lines[1]).unwrap();
        assert!(matches!(ev.kind, ActivityKind::ExportFailed));
        assert_eq!(ev.detail, "svg parse failed");
    }

    #[test]
    fn reinit_resumes_ids_after_existing_events() {
        let td = tempfile::tempdir().unwrap();

        {
            let mut log = ActivityLog::init(td.path()).unwrap();
            log.record(ActivityKind::AppStarted, "");
            log.record(ActivityKind::ExportSucceeded, "a.pdf");
        }

        let mut log = ActivityLog::init(td.path()).unwrap();
        assert_eq!(log.recent().count(), 2);

        log.record(ActivityKind::AppStarted, "");
        let ids: Vec<u64> = log.recent().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn corrupt_lines_are_skipped_on_load() {
        let td = tempfile::tempdir().unwrap();
        {
            let mut log = ActivityLog::init(td.path()).unwrap();
            log.record(ActivityKind::AppStarted, "");
        }

        let path = td.path().join(LOG_FILE_NAME);
        let mut raw = fs::read_to_string(&path).unwrap();
        raw.push_str("{not json}\n");
        fs::write(&path, raw).unwrap();

        let log = ActivityLog::init(td.path()).unwrap();
        assert_eq!(log.recent().count(), 1);
    }
}
