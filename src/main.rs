//! CLI entry point for jrl-terminal

use jrl_terminal::cli::{self, Args, Command};
use jrl_terminal::config::TerminalConfig;
use jrl_terminal::runtime::debug;
use std::process;

fn main() {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            cli::print_usage();
            process::exit(1);
        }
    };

    match &args.command {
        Command::Help => cli::print_usage(),
        Command::Dump { scene } => match cli::dump::dump(scene.as_deref()) {
            Ok(json) => println!("{json}"),
            Err(err) => fail("Failed to dump scenes", &err),
        },
        Command::Play => run_play(&args),
    }
}

fn load_config(args: &Args) -> TerminalConfig {
    let mut config = match &args.config {
        Some(path) => match TerminalConfig::load(path) {
            Ok(config) => config,
            Err(err) => fail("Failed to load config", &err),
        },
        None => TerminalConfig::default(),
    };
    if let Some(dir) = &args.export_dir {
        config.export_dir = dir.clone();
    }
    if args.fast {
        config = config.fast();
    }
    config
}

fn run_play(args: &Args) {
    let config = load_config(args);

    if let Err(err) = debug::install(&config.log) {
        fail("Failed to start debug log", &err);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => fail("Failed to start runtime", &err),
    };

    let result = runtime.block_on(cli::play::run_play(&config));
    // The stdin reader may still be parked on a blocking read
    runtime.shutdown_background();

    if let Err(err) = result {
        fail("Terminal session failed", &err);
    }
}

fn fail(context: &str, reason: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {context}");
    eprintln!("Reason: {reason}");
    process::exit(1);
}
