// Shared helpers for integration tests: building minimal in-memory iNES
// images rather than depending on committed binary `.nes` fixtures.

#![allow(dead_code)]

use nes_core::Cartridge;

const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Builds a 32KB-PRG / 8KB-CHR NROM image, placing `prg` at the start of the
/// $8000 bank and pointing the reset vector at $8000.
pub fn nrom_with_program(prg: &[u8]) -> Vec<u8> {
    nrom_with_program_at(prg, 0x8000)
}

/// Like [`nrom_with_program`], but the reset vector points at `start`
/// instead of the bank base, so tests can leave room before the program.
pub fn nrom_with_program_at(prg: &[u8], start: u16) -> Vec<u8> {
    let mut data = vec![0x00u8; 16];
    data[0..4].copy_from_slice(&INES_MAGIC);
    data[4] = 2; // 32 KiB PRG
    data[5] = 1; // 8 KiB CHR
    data[6] = 0; // horizontal mirroring, mapper 0

    let mut prg_bank = vec![0u8; 32 * 1024];
    let offset = (start - 0x8000) as usize;
    prg_bank[offset..offset + prg.len()].copy_from_slice(prg);
    prg_bank[0x7FFC] = (start & 0xFF) as u8;
    prg_bank[0x7FFD] = (start >> 8) as u8;

    data.extend(prg_bank);
    data.extend(vec![0u8; 8 * 1024]);
    data
}

pub fn load_program(prg: &[u8]) -> Cartridge {
    Cartridge::load(&nrom_with_program(prg)).unwrap()
}
