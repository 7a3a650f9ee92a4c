//! # jrl-terminal
//!
//! A scripted "secure terminal" for the Jalandhar Regional Laboratory. The
//! operator logs in, picks numbered menu options, and watches each scene
//! type itself out a character at a time. Some scenes leave entries in an
//! audit log or save a classified report to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use jrl_terminal::{MemoryExporter, Mode, Screen, Session, TerminalConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), jrl_terminal::TerminalError> {
//! let config = TerminalConfig::default().fast();
//! let mut session = Session::with_config(Screen::new(), Box::new(MemoryExporter::new()), &config);
//!
//! session.boot().await?;
//! assert_eq!(session.mode(), Mode::Menu);
//!
//! session.submit("3").await?;
//! assert!(session.surface().contents().contains("Total Memory: 65536MB"));
//! assert_eq!(session.mode(), Mode::Pause);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod runtime;
pub mod scenes;
pub mod session;
pub mod types;

pub use config::TerminalConfig;
pub use display::{DisplayDriver, Screen, Surface};
pub use error::TerminalError;
pub use export::{DirectoryExporter, Exporter, MemoryExporter};
pub use runtime::play;
pub use session::{Dispatch, Session, Transition, dispatch};
pub use types::{AuditLog, AuditRecord, Event, Finish, Mode, Prompt, SceneId, Script, Step};
