//! Tests for the command-line layer: config files, dumps and the console

use jrl_terminal::cli::console::Console;
use jrl_terminal::cli::dump;
use jrl_terminal::cli::play::{StampedLine, drive};
use jrl_terminal::{MemoryExporter, Mode, Session, TerminalConfig, TerminalError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

#[test]
fn config_file_overrides_pacing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jrl.json");
    std::fs::write(&path, r#"{ "char_interval_ms": 5, "export_dir": "out" }"#).unwrap();

    let config = TerminalConfig::load(&path).unwrap();
    assert_eq!(config.char_interval(), Duration::from_millis(5));
    assert_eq!(config.delay_scale, 1.0);
    assert_eq!(config.export_dir, std::path::PathBuf::from("out"));
}

#[test]
fn broken_config_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ char_interval_ms: ").unwrap();

    let err = TerminalConfig::load(&path).unwrap_err();
    assert!(matches!(err, TerminalError::Config { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn dump_lists_every_scene_with_a_hash() {
    let json = dump::dump(None).unwrap();
    let scripts: serde_json::Value = serde_json::from_str(&json).unwrap();

    for script in scripts.as_array().unwrap() {
        assert_eq!(script["content_hash"].as_str().unwrap().len(), 32);
    }
    assert_eq!(scripts[0]["scene"], "login");
    assert_eq!(scripts[0]["finish"], "Menu");
}

#[tokio::test(start_paused = true)]
async fn console_session_plays_through_to_exit() {
    let session = Session::new(Console::new(Vec::new()), Box::new(MemoryExporter::new()));
    let (tx, rx) = mpsc::unbounded_channel();
    let driver = tokio::spawn(drive(session, rx));

    // Let boot finish so the lines below are not stale
    tokio::time::sleep(Duration::from_secs(120)).await;
    for text in ["5", "", "7"] {
        tx.send(Ok(StampedLine {
            text: text.to_string(),
            at: Instant::now(),
        }))
        .unwrap();
        tokio::time::sleep(Duration::from_secs(120)).await;
    }

    let session = driver.await.unwrap().unwrap();
    assert_eq!(session.mode(), Mode::Exited);

    let out = String::from_utf8(session.into_surface().into_inner()).unwrap();
    assert!(out.contains("ACCESS GRANTED. Welcome."));
    assert!(out.contains("EXTERNAL COMMUNICATIONS LOG - ENCRYPTED"));
    assert!(out.contains("\x1b[2J\x1b[H"));
    assert!(out.contains("JRL_ADMIN> "));
    assert!(out.ends_with("System Shutdown Complete.\n"));
}
