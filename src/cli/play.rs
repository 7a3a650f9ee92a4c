//! Interactive terminal mode
//!
//! Stdin is read on its own task. Each line is stamped with when it
//! arrived, so lines typed while a scene was playing can be discarded by
//! the session instead of being replayed afterwards.

use crate::cli::console::Console;
use crate::config::TerminalConfig;
use crate::export::DirectoryExporter;
use crate::session::Session;
use crate::types::Event;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// A line of input and when it was read
#[derive(Debug)]
pub struct StampedLine {
    pub text: String,
    pub at: Instant,
}

/// Run the terminal against stdin/stdout until exit or end of input
pub async fn run_play(config: &TerminalConfig) -> anyhow::Result<()> {
    let exporter = DirectoryExporter::new(&config.export_dir);
    let session = Session::with_config(Console::stdout(), Box::new(exporter), config);

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(read_lines(BufReader::new(tokio::io::stdin()), tx));

    drive(session, rx).await?;
    Ok(())
}

/// Boot the session, then feed it lines until it exits or input ends
pub async fn drive<W: Write>(
    mut session: Session<Console<W>>,
    mut lines: mpsc::UnboundedReceiver<io::Result<StampedLine>>,
) -> anyhow::Result<Session<Console<W>>> {
    session.boot().await?;
    session.surface_mut().show_prompt()?;

    while let Some(line) = lines.recv().await {
        let line = line?;
        let mut moved = false;
        for event in Event::line(&line.text) {
            if session.handle_at(event, line.at).await?.is_some() {
                moved = true;
            }
        }

        if session.mode().is_terminal() {
            break;
        }
        if moved {
            session.surface_mut().show_prompt()?;
        }
    }

    Ok(session)
}

/// Forward lines from `reader` until it ends or the receiver goes away
///
/// Bytes that are not valid UTF-8 are replaced rather than ending input.
pub async fn read_lines<R: AsyncBufRead + Unpin>(
    mut reader: R,
    tx: mpsc::UnboundedSender<io::Result<StampedLine>>,
) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let text = match String::from_utf8(buf.clone()) {
                    Ok(text) => text,
                    Err(err) => {
                        log::warn!("[Input] line is not valid UTF-8: {err}");
                        String::from_utf8_lossy(&buf).into_owned()
                    }
                };
                let stamped = StampedLine {
                    text: text.trim_end_matches(['\n', '\r']).to_string(),
                    at: Instant::now(),
                };
                if tx.send(Ok(stamped)).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = tx.send(Err(err));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemoryExporter;
    use crate::types::Mode;

    fn fast_session() -> Session<Console<Vec<u8>>> {
        Session::with_config(
            Console::new(Vec::new()),
            Box::new(MemoryExporter::new()),
            &TerminalConfig::default().fast(),
        )
    }

    #[tokio::test]
    async fn read_lines_forwards_each_line() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        read_lines(&b"1\n\n7\n"[..], tx).await;

        let mut texts = Vec::new();
        while let Some(line) = rx.recv().await {
            texts.push(line.unwrap().text);
        }
        assert_eq!(texts, ["1", "", "7"]);
    }

    #[tokio::test]
    async fn read_lines_replaces_invalid_utf8() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        read_lines(&b"\xff\r\n7"[..], tx).await;

        let first = rx.recv().await.unwrap().unwrap();
        assert_eq!(first.text, "\u{FFFD}");
        let second = rx.recv().await.unwrap().unwrap();
        assert_eq!(second.text, "7");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn garbled_line_does_not_end_the_session() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(drive(fast_session(), rx));
        tokio::time::sleep(std::time::Duration::from_secs(1)).await;

        read_lines(&b"\xff\n7\n"[..], tx).await;

        let session = handle.await.unwrap().unwrap();
        assert_eq!(session.mode(), Mode::Exited);
        assert!(
            session
                .surface()
                .screen()
                .transcript()
                .contains(crate::scenes::content::INVALID_SELECTION)
        );
    }

    #[tokio::test]
    async fn drive_stops_at_exit() {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = fast_session();

        let handle = tokio::spawn(async move { drive(session, rx).await });
        tokio::task::yield_now().await;
        for text in ["3", "", "7", "1"] {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            // The session stops listening after "7"
            let _ = tx.send(Ok(StampedLine {
                text: text.to_string(),
                at: Instant::now(),
            }));
        }

        let session = handle.await.unwrap().unwrap();
        assert_eq!(session.mode(), Mode::Exited);
        let console = session.into_surface();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("Total Memory: 65536MB"));
        assert!(out.ends_with("System Shutdown Complete.\n"));
    }

    #[tokio::test]
    async fn lines_typed_before_boot_finishes_are_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let early = Instant::now()
            .checked_sub(std::time::Duration::from_millis(1))
            .unwrap();
        tx.send(Ok(StampedLine {
            text: "7".to_string(),
            at: early,
        }))
        .unwrap();
        drop(tx);

        let session = drive(fast_session(), rx).await.unwrap();
        assert_eq!(session.mode(), Mode::Menu);
    }
}
