//! Scene script representation
//!
//! A [`Script`] is plain data: an ordered list of [`Step`]s plus where the
//! session goes once the last step is done. The scripts themselves live in
//! [`crate::scenes`] as static tables.

use serde::Serialize;
use std::time::Duration;

/// One unit of scripted playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "args")]
pub enum Step {
    /// Type the text out character by character, then break the line
    Reveal(&'static str),
    /// Write the text and a line break at once
    WriteLine(&'static str),
    /// Pause playback
    Delay(#[serde(with = "millis")] Duration),
    /// Act on something other than the display
    Effect(SideEffect),
}

/// Non-display actions a script can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SideEffect {
    /// Append an audit record
    RecordAudit(&'static str),
    /// Write the Sector 11 log followed by every audit record so far
    WriteAuditLog,
    /// Save the classified report to the export directory
    ExportReport,
}

/// Where the session goes after the script's last step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Finish {
    Menu,
    Pause,
    Exit,
}

/// Identifies a scene script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    Login,
    Surveillance,
    Tracker,
    Diagnostics,
    DataTransfer,
    CommMatrix,
    SensorReadings,
    Exit,
}

impl SceneId {
    pub const ALL: [SceneId; 8] = [
        SceneId::Login,
        SceneId::Surveillance,
        SceneId::Tracker,
        SceneId::Diagnostics,
        SceneId::DataTransfer,
        SceneId::CommMatrix,
        SceneId::SensorReadings,
        SceneId::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneId::Login => "login",
            SceneId::Surveillance => "surveillance",
            SceneId::Tracker => "tracker",
            SceneId::Diagnostics => "diagnostics",
            SceneId::DataTransfer => "data_transfer",
            SceneId::CommMatrix => "comm_matrix",
            SceneId::SensorReadings => "sensor_readings",
            SceneId::Exit => "exit",
        }
    }

    pub fn from_name(name: &str) -> Option<SceneId> {
        SceneId::ALL.into_iter().find(|id| id.name() == name)
    }
}

/// A fixed, linear scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Script {
    pub id: SceneId,
    pub steps: &'static [Step],
    pub finish: Finish,
}

impl Script {
    /// Total scripted delay, ignoring reveal pacing
    pub fn total_delay(&self) -> Duration {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Delay(d) => Some(*d),
                _ => None,
            })
            .sum()
    }

    /// Audit descriptions this script records, in order
    pub fn audit_descriptions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Effect(SideEffect::RecordAudit(description)) => Some(*description),
            _ => None,
        })
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}
