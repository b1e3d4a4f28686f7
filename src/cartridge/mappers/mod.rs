// Mapper trait and factory.
//
// Only mapper 0 (NROM) is implemented; any other mapper number is a
// recognized-but-unsupported error rather than a panic.

mod mapper0;

pub use mapper0::Mapper0;

use crate::cartridge::Mirroring;
use crate::error::CoreError;

/// Behavior that differs between cartridge boards.
///
/// CPU- and PPU-side reads/writes take `&mut self` uniformly: CHR-RAM writes
/// and future bank-switching mappers both need mutation, so one signature
/// keeps the `Bus`/`Ppu` call sites from matching on mapper capability.
pub trait Mapper: std::fmt::Debug {
    fn cpu_read(&mut self, addr: u16) -> u8;
    fn cpu_write(&mut self, addr: u16, value: u8) -> Result<(), CoreError>;
    fn ppu_read(&mut self, addr: u16) -> u8;
    fn ppu_write(&mut self, addr: u16, value: u8) -> Result<(), CoreError>;
    fn mirroring(&self) -> Mirroring;
}

pub fn create_mapper(
    mapper_id: u16,
    prg: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
) -> Result<Box<dyn Mapper>, CoreError> {
    match mapper_id {
        0 => Ok(Box::new(Mapper0::new(prg, chr, chr_is_ram, mirroring)?)),
        other => Err(CoreError::UnsupportedMapper(other)),
    }
}
