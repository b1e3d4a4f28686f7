// NES Emulator Library
// Core library for the NES emulator implementation: a cycle-accurate 6502
// CPU, a 2C02 PPU timing model, a shared system bus, and NROM cartridge
// loading, wrapped in a Console that owns configuration, logging, and the
// run loop.

// Public modules
pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod config;
pub mod console;
pub mod cpu;
pub mod error;
pub mod input;
pub mod logger;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use apu::Apu;
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::mappers::Mapper;
pub use cartridge::{Cartridge, Mirroring};
pub use config::Config;
pub use console::Console;
pub use cpu::Cpu;
pub use error::CoreError;
pub use input::{Button, Controller, ControllerIO, Player};
pub use logger::{LogLevel, Logger, TraceEntry, TraceSource};
pub use ppu::Ppu;
pub use ram::Ram;
