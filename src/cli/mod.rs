//! Command-line front end
//!
//! Argument handling stays hand-rolled: there are two commands and three
//! options.

pub mod console;
pub mod dump;
pub mod play;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Dump { scene: Option<String> },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub fast: bool,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I, S>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args {
        command: Command::Play,
        config: None,
        export_dir: None,
        fast: false,
    };
    let mut positional = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.command = Command::Help,
            "--fast" => parsed.fast = true,
            "--config" => {
                let path = args.next().ok_or("Missing value for --config")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--export-dir" => {
                let path = args.next().ok_or("Missing value for --export-dir")?;
                parsed.export_dir = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{flag}'")),
            _ => positional.push(arg),
        }
    }

    if parsed.command == Command::Help {
        return Ok(parsed);
    }

    let mut positional = positional.into_iter();
    parsed.command = match positional.next().as_deref() {
        None | Some("play") => Command::Play,
        Some("dump") => Command::Dump {
            scene: positional.next(),
        },
        Some(other) => return Err(format!("Unknown command '{other}'")),
    };
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument '{extra}'"));
    }

    Ok(parsed)
}

pub fn print_usage() {
    println!("jrl-terminal - J.R.L. Secure Terminal");
    println!();
    println!("USAGE:");
    println!("    jrl-terminal [play] [--config <file.json>] [--export-dir <dir>] [--fast]");
    println!("    jrl-terminal dump [<scene>]");
    println!();
    println!("COMMANDS:");
    println!("    play            Start the terminal (default)");
    println!("    dump [scene]    Print scene scripts as JSON");
    println!("    --help, -h      Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>       Load settings from a JSON file");
    println!("    --export-dir <dir>    Where the classified report is saved");
    println!("    --fast                Disable the typing effect and pauses");
    println!();
    println!("Set JRL_DEBUG=1 to write a debug log (jrl-terminal.log by default).");
}
