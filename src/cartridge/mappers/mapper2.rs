// Mapper 2 (UxROM) - discrete-logic PRG banking
//
// Memory Layout:
// - CPU $8000-$BFFF: 16KB switchable PRG-ROM bank
// - CPU $C000-$FFFF: 16KB PRG-ROM bank fixed to the last bank
// - PPU $0000-$1FFF: 8KB CHR-RAM
//
// Register Interface:
// Any write to $8000-$FFFF selects the PRG bank mapped at $8000. Only the
// low bits participate; selections beyond the bank count wrap.

use crate::cartridge::{CartridgeDescriptor, CartridgeError, Mapper, Mirroring};

use super::{chr_memory, PRG_BANK_16K};

/// Mapper 2 implementation (UxROM)
///
/// Used by games like Mega Man, Castlevania, Contra, and Metal Gear.
pub struct Mapper2 {
    /// PRG-ROM data
    prg_rom: Vec<u8>,
    /// CHR memory - UxROM boards carry CHR-RAM
    chr_mem: Vec<u8>,
    /// Whether CHR memory is RAM (writable) or ROM (read-only)
    chr_is_ram: bool,
    /// Selected 16KB bank for $8000-$BFFF
    prg_bank: u8,
    /// Number of 16KB PRG banks
    prg_banks: usize,
    /// Nametable mirroring, fixed by the header
    mirroring: Mirroring,
}

impl Mapper2 {
    /// Create a new Mapper2 instance from a cartridge descriptor
    ///
    /// # Arguments
    /// * `descriptor` - The cartridge containing ROM data
    pub fn new(descriptor: CartridgeDescriptor) -> Result<Self, CartridgeError> {
        let prg_banks = descriptor.prg_rom.len() / PRG_BANK_16K;
        let (chr_mem, chr_is_ram) = chr_memory(&descriptor);

        Ok(Mapper2 {
            prg_rom: descriptor.prg_rom,
            chr_mem,
            chr_is_ram,
            prg_bank: 0,
            prg_banks,
            mirroring: descriptor.mirroring,
        })
    }
}

impl Mapper for Mapper2 {
    fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            // Switchable bank
            0x8000..=0xBFFF => {
                let bank = self.prg_bank as usize % self.prg_banks;
                let offset = (addr - 0x8000) as usize;
                self.prg_rom[bank * PRG_BANK_16K + offset]
            }
            // Fixed last bank
            0xC000..=0xFFFF => {
                let bank = self.prg_banks - 1;
                let offset = (addr - 0xC000) as usize;
                self.prg_rom[bank * PRG_BANK_16K + offset]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, addr: u16, value: u8) {
        if let 0x8000..=0xFFFF = addr {
            self.prg_bank = value;
        }
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
        self.prg_bank = 0;
    }
}
