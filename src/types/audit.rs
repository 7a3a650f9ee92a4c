//! In-memory audit trail of operator actions

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Console-style local timestamp, e.g. `11/7/1983 9:05:00 PM`
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// A single timestamped action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: String,
    pub description: String,
}

impl AuditRecord {
    /// One line of the rendered log, including the trailing newline
    pub fn render(&self) -> String {
        format!("[{}] AUDIT: {}\n", self.timestamp, self.description)
    }
}

/// Append-only list of [`AuditRecord`]s, kept for the life of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    records: Vec<AuditRecord>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action stamped with the current local time
    pub fn record(&mut self, description: impl Into<String>) {
        self.record_at(format_timestamp(Local::now()), description);
    }

    /// Record an action with an explicit timestamp
    pub fn record_at(&mut self, timestamp: impl Into<String>, description: impl Into<String>) {
        let record = AuditRecord {
            timestamp: timestamp.into(),
            description: description.into(),
        };
        log::info!("audit: {}", record.description);
        self.records.push(record);
    }

    /// All records concatenated in insertion order
    pub fn render(&self) -> String {
        self.records.iter().map(AuditRecord::render).collect()
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
