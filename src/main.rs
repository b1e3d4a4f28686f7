// NES core CLI: loads an iNES ROM and drives the console to completion or
// to a configured frame limit. The windowing/rendering front end this core
// is meant to sit behind is out of scope here; this binary is a headless
// harness useful for test ROMs and CI.

use std::process::ExitCode;

use clap::Parser;

use nes_core::logger::LogLevel;
use nes_core::{Config, Console};

/// Headless driver for the NES core: 6502 CPU, PPU timing, and NROM cartridge loading.
#[derive(Parser, Debug)]
#[command(name = "nes-core", version, about)]
struct Args {
    /// Path to an iNES (.nes) ROM image.
    rom: String,

    /// Run without attempting to present frames (the only mode this binary
    /// supports, since the renderer is an external collaborator).
    #[arg(long)]
    headless: bool,

    /// Exit after running this many frames instead of running forever.
    #[arg(long, value_name = "N")]
    stop: Option<u64>,

    /// Logging verbosity.
    #[arg(long, value_enum, default_value = "info")]
    verbosity: Verbosity,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Verbosity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Verbosity> for LogLevel {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Trace => LogLevel::Trace,
            Verbosity::Debug => LogLevel::Debug,
            Verbosity::Info => LogLevel::Info,
            Verbosity::Warn => LogLevel::Warn,
            Verbosity::Error => LogLevel::Error,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = Config {
        headless: args.headless,
        stop_after_frames: args.stop,
        verbosity: args.verbosity.into(),
    };

    let mut console = Console::new(config);

    if let Err(err) = console.load_rom(&args.rom) {
        console.logger_mut().flush_to_stderr();
        eprintln!("error: {err}");
        return ExitCode::from(err.exit_code() as u8);
    }

    let result = console.run();
    console.logger_mut().flush_to_stderr();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
