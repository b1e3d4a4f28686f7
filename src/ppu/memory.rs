// PPU memory access: pattern tables (via cartridge), nametables, palette RAM.

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::{Cartridge, Mirroring};
use crate::error::CoreError;

impl Ppu {
    /// Maps a nametable address ($2000-$2FFF) to its physical VRAM offset
    /// according to the cartridge's mirroring mode.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let mirrored_table = match self.mirroring {
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                _ => 1,
            },
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                _ => 1,
            },
            // Four-screen needs cartridge-supplied extra VRAM this core does
            // not model; fall back to horizontal rather than panic.
            Mirroring::FourScreen => match table {
                0 | 1 => 0,
                _ => 1,
            },
        };

        mirrored_table * NAMETABLE_SIZE + offset
    }

    /// Maps a palette address to its physical slot, folding the four
    /// sprite-palette-0 mirrors ($3F10/$14/$18/$1C) onto their background
    /// counterparts.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    pub(super) fn read_ppu_memory(&self, addr: u16, cartridge: Option<&mut Cartridge>) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => cartridge.map(|c| c.ppu_read(addr)).unwrap_or(0),
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette_ram[self.mirror_palette_addr(addr)],
            _ => unreachable!(),
        }
    }

    pub(super) fn write_ppu_memory(
        &mut self,
        addr: u16,
        data: u8,
        cartridge: Option<&mut Cartridge>,
    ) -> Result<(), CoreError> {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(c) = cartridge {
                    c.ppu_write(addr, data)?;
                }
            }
            0x2000..=0x2FFF => {
                let offset = self.mirror_nametable_addr(addr);
                self.nametables[offset] = data;
            }
            0x3000..=0x3EFF => {
                let offset = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[offset] = data;
            }
            0x3F00..=0x3FFF => {
                let offset = self.mirror_palette_addr(addr);
                self.palette_ram[offset] = data;
            }
            _ => unreachable!(),
        }
        Ok(())
    }
}
