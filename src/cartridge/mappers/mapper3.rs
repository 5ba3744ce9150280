// Mapper 3 (CNROM) - discrete-logic CHR banking
//
// Memory Layout:
// - CPU $8000-$FFFF: 16KB or 32KB PRG-ROM, fixed (16KB images are mirrored)
// - PPU $0000-$1FFF: 8KB switchable CHR-ROM window
//
// Register Interface:
// Any write to $8000-$FFFF selects the 8KB CHR bank. Selections beyond the
// bank count wrap. CNROM carries CHR-ROM only; a descriptor without CHR is
// rejected at construction.

use crate::cartridge::{CartridgeDescriptor, CartridgeError, Mapper, Mirroring};

use super::{CHR_BANK_8K, PRG_BANK_16K};

/// Mapper 3 implementation (CNROM)
///
/// Used by games like Arkanoid, Gradius, and Solomon's Key.
pub struct Mapper3 {
    /// PRG-ROM data (16KB or 32KB, fixed)
    prg_rom: Vec<u8>,
    /// CHR-ROM data
    chr_rom: Vec<u8>,
    /// Selected 8KB CHR bank
    chr_bank: u8,
    /// Number of 8KB CHR banks
    chr_banks: usize,
    /// Nametable mirroring, fixed by the header
    mirroring: Mirroring,
}

impl Mapper3 {
    /// Create a new Mapper3 instance from a cartridge descriptor
    ///
    /// # Arguments
    /// * `descriptor` - The cartridge containing ROM data
    ///
    /// # Errors
    /// * `CartridgeError::ChrRomRequired` when the descriptor has no CHR-ROM
    /// * `CartridgeError::InvalidChrRom` when CHR is not a multiple of 8KB
    pub fn new(descriptor: CartridgeDescriptor) -> Result<Self, CartridgeError> {
        if descriptor.chr_rom.is_empty() {
            return Err(CartridgeError::ChrRomRequired(3));
        }
        let chr_len = descriptor.chr_rom.len();
        if chr_len % CHR_BANK_8K != 0 {
            return Err(CartridgeError::InvalidChrRom(chr_len));
        }

        let prg_len = descriptor.prg_rom.len();
        if prg_len != PRG_BANK_16K && prg_len != 2 * PRG_BANK_16K {
            return Err(CartridgeError::InvalidPrgRom(prg_len));
        }

        Ok(Mapper3 {
            prg_rom: descriptor.prg_rom,
            chr_rom: descriptor.chr_rom,
            chr_bank: 0,
            chr_banks: chr_len / CHR_BANK_8K,
            mirroring: descriptor.mirroring,
        })
    }
}

impl Mapper for Mapper3 {
    fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x8000..=0xFFFF => {
                let index = (addr - 0x8000) as usize % self.prg_rom.len();
                self.prg_rom[index]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, addr: u16, value: u8) {
        if let 0x8000..=0xFFFF = addr {
            self.chr_bank = value;
        }
    }

    fn ppu_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => {
                let bank = self.chr_bank as usize % self.chr_banks;
                self.chr_rom[bank * CHR_BANK_8K + addr as usize]
            }
            _ => 0,
        }
    }

    fn ppu_write(&mut self, _addr: u16, _value: u8) {
        // CHR-ROM only; writes are ignored
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    fn reset(&mut self) {
        self.chr_bank = 0;
    }
}
