// Console orchestration: owns the CPU, the bus, the cartridge lifecycle, the
// shared logger, and the run configuration. Everything in `cpu`, `ppu`, and
// `bus` is a pure, synchronously-stepped state machine; this module is the
// ambient harness a finished binary needs around that contract.

use std::path::Path;

use crate::bus::Bus;
use crate::config::Config;
use crate::cpu::Cpu;
use crate::error::CoreError;
use crate::input::{Button, Player};
use crate::logger::{Logger, TraceSource};

/// Drives the CPU/PPU/Bus triple to completion, owning everything above the
/// cycle-accuracy contract: ROM loading, configuration, diagnostics, and the
/// per-frame stepping loop.
pub struct Console {
    cpu: Cpu,
    bus: Bus,
    logger: Logger,
    config: Config,
    frames_run: u64,
}

impl Console {
    /// Builds a console with a fresh CPU/Bus pair and the given configuration.
    /// No cartridge is installed yet; call `load_rom` before running.
    pub fn new(config: Config) -> Self {
        let mut logger = Logger::new(config.verbosity);
        let mut bus = Bus::new();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        logger.log(
            crate::logger::LogLevel::Info,
            TraceSource::Bus,
            "console initialized",
        );
        Console {
            cpu,
            bus,
            logger,
            config,
            frames_run: 0,
        }
    }

    /// Loads and applies config from `config_path`, falling back to defaults
    /// when the file is absent.
    pub fn with_config_file(
        config_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default(config_path)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Reads a ROM file from disk, parses its iNES header, and installs the
    /// resulting cartridge on the bus. The CPU is reset afterward so it picks
    /// up the cartridge's reset vector.
    pub fn load_rom(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| CoreError::InvalidHeader(e.to_string()))?;
        match crate::cartridge::Cartridge::load(&data) {
            Ok(cartridge) => {
                self.logger.log(
                    crate::logger::LogLevel::Info,
                    TraceSource::Cartridge,
                    format!(
                        "loaded {} (mapper {}, {:?})",
                        path.display(),
                        cartridge.mapper_id(),
                        cartridge.mirroring()
                    ),
                );
                self.bus.load_cartridge(cartridge);
                self.cpu.reset(&mut self.bus);
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(format!("failed to load {}: {err}", path.display()));
                Err(err)
            }
        }
    }

    /// Installs an already-parsed cartridge, e.g. one built in memory by a
    /// test harness, and resets the CPU to pick up its reset vector.
    pub fn load_cartridge(&mut self, cartridge: crate::cartridge::Cartridge) {
        self.bus.load_cartridge(cartridge);
        self.cpu.reset(&mut self.bus);
    }

    /// Applies a button-down/button-up event from the host to a controller.
    pub fn set_button(&mut self, player: Player, button: Button, pressed: bool) {
        self.bus.controllers_mut().set_button(player, button, pressed);
    }

    /// Advances one CPU instruction, ticking the PPU three dots per CPU
    /// cycle (and the OAM-DMA stall counter, when active). Returns the
    /// number of CPU cycles the instruction took.
    fn step_instruction(&mut self) -> Result<u32, CoreError> {
        if self.bus.dma_in_progress() {
            // Every CPU cycle during DMA still ticks the PPU three dots so
            // the video clock never falls behind while the CPU is stalled.
            self.bus.tick_dma();
            self.advance_ppu(3);
            return Ok(1);
        }

        let cycles = self.cpu.step(&mut self.bus)?;
        self.advance_ppu(cycles as u32 * 3);
        Ok(cycles as u32)
    }

    fn advance_ppu(&mut self, dots: u32) {
        for _ in 0..dots {
            if self.bus.step_ppu_dot() {
                self.frames_run += 1;
            }
        }
    }

    /// Steps the CPU until vertical blank starts, then steps through the
    /// vblank period until the PPU leaves it again. Matches the "CPU step ->
    /// PPU ticks 3x cycles -> CPU may fast-forward PPU" interleaving: the
    /// only boundary this core checks a stop condition at is the one
    /// between frames.
    pub fn run_until_vblank_start(&mut self) -> Result<(), CoreError> {
        while !self.bus.ppu().in_vblank() {
            self.step_instruction()?;
        }
        while self.bus.ppu().in_vblank() {
            self.step_instruction()?;
        }
        Ok(())
    }

    /// Runs frames until the configured frame limit is reached (if any),
    /// or forever in headless mode without a limit. Returns on the first
    /// fatal error, having already logged a diagnostic for it.
    pub fn run(&mut self) -> Result<(), CoreError> {
        loop {
            if let Some(limit) = self.config.stop_after_frames {
                if self.frames_run >= limit {
                    return Ok(());
                }
            }
            if let Err(err) = self.run_until_vblank_start() {
                self.log_fatal(&err);
                return Err(err);
            }
        }
    }

    /// Records a structured diagnostic for a fatal error, including CPU and
    /// PPU position, before the caller exits the process.
    fn log_fatal(&mut self, err: &CoreError) {
        self.logger.error(format!(
            "fatal: {err} (pc=${:04X}, frame={}, row={}, col={})",
            self.cpu.pc,
            self.bus.ppu().frame_count(),
            self.bus.ppu().scanline(),
            self.bus.ppu().cycle(),
        ));
    }

    pub fn frame_count(&self) -> u64 {
        self.frames_run
    }
}
