// Mapper 0 (NROM) - the original unbanked board
//
// Memory Layout:
// - CPU $6000-$7FFF: 8KB PRG-RAM (Family BASIC boards; present here for all)
// - CPU $8000-$FFFF: 16KB or 32KB PRG-ROM (16KB images are mirrored)
// - PPU $0000-$1FFF: 8KB CHR-ROM, or 8KB CHR-RAM when the header has no CHR
//
// There are no registers: writes into $8000-$FFFF are ignored and the
// mirroring arrangement is fixed by the header.

use crate::cartridge::{CartridgeDescriptor, CartridgeError, Mapper, Mirroring};

use super::{chr_memory, PRG_BANK_16K, PRG_RAM_SIZE};

/// Mapper 0 implementation (NROM)
///
/// Used by early titles such as Super Mario Bros., Donkey Kong, and Balloon
/// Fight.
pub struct Mapper0 {
    /// PRG-ROM data (16KB or 32KB)
    prg_rom: Vec<u8>,
    /// CHR-ROM or CHR-RAM data (8KB)
    chr_mem: Vec<u8>,
    /// PRG-RAM (8KB)
    prg_ram: Vec<u8>,
    /// Whether CHR memory is RAM (writable) or ROM (read-only)
    chr_is_ram: bool,
    /// Nametable mirroring, fixed by the header
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Create a new Mapper0 instance from a cartridge descriptor
    ///
    /// # Arguments
    /// * `descriptor` - The cartridge containing ROM data
    ///
    /// # Errors
    /// Returns `CartridgeError::InvalidPrgRom` unless PRG-ROM is exactly 16KB
    /// or 32KB.
    pub fn new(descriptor: CartridgeDescriptor) -> Result<Self, CartridgeError> {
        let prg_len = descriptor.prg_rom.len();
        if prg_len != PRG_BANK_16K && prg_len != 2 * PRG_BANK_16K {
            return Err(CartridgeError::InvalidPrgRom(prg_len));
        }

        let (chr_mem, chr_is_ram) = chr_memory(&descriptor);

        Ok(Mapper0 {
            prg_rom: descriptor.prg_rom,
            chr_mem,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr_is_ram,
            mirroring: descriptor.mirroring,
        })
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize],
            // 16KB images mirror across the full $8000-$FFFF window
            0x8000..=0xFFFF => {
                let index = (addr - 0x8000) as usize % self.prg_rom.len();
                self.prg_rom[index]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, addr: u16, value: u8) {
        if let 0x6000..=0x7FFF = addr {
            self.prg_ram[(addr - 0x6000) as usize] = value;
        }
        // Writes into ROM space are ignored: NROM has no registers
    }

    fn ppu_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.chr_mem[addr as usize % self.chr_mem.len()],
            _ => 0,
        }
    }

    fn ppu_write(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            if let 0x0000..=0x1FFF = addr {
                let len = self.chr_mem.len();
                self.chr_mem[addr as usize % len] = value;
            }
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    fn reset(&mut self) {
        // No registers, nothing to reset
    }
}
