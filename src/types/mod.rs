//! Core types for the terminal
//!
//! - State: session mode, prompt label and the input field
//! - Event: keyboard input delivered to the session
//! - Step: scene scripts as plain data
//! - Audit: the in-memory audit trail

pub mod audit;
pub mod event;
pub mod state;
pub mod step;

pub use audit::{AuditLog, AuditRecord};
pub use event::Event;
pub use state::{InputField, Mode, Prompt};
pub use step::{Finish, SceneId, Script, SideEffect, Step};
