// Mappers module - implementations of the supported NES cartridge mappers
//
// This module contains the mapper factory and the individual mapper
// implementations. Each mapper handles memory mapping and banking for one
// board family.

mod mapper0;
mod mapper1;
mod mapper2;
mod mapper3;
mod mapper4;

pub use mapper0::Mapper0;
pub use mapper1::Mapper1;
pub use mapper2::Mapper2;
pub use mapper3::Mapper3;
pub use mapper4::Mapper4;

use super::{CartridgeDescriptor, CartridgeError, Mapper};

/// 16KB PRG bank granularity shared by the simple boards
pub(crate) const PRG_BANK_16K: usize = 16 * 1024;

/// 8KB CHR window (the full pattern-table space)
pub(crate) const CHR_BANK_8K: usize = 8 * 1024;

/// 8KB PRG-RAM at $6000-$7FFF
pub(crate) const PRG_RAM_SIZE: usize = 8 * 1024;

/// Resolve the CHR memory of a descriptor
///
/// An empty CHR-ROM means the board carries 8KB of CHR-RAM; otherwise the
/// CHR-ROM bytes are used as-is. Returns the backing bytes plus a flag that
/// tells the mapper whether PPU writes should stick.
pub(crate) fn chr_memory(descriptor: &CartridgeDescriptor) -> (Vec<u8>, bool) {
    if descriptor.chr_rom.is_empty() {
        (vec![0; CHR_BANK_8K], true)
    } else {
        (descriptor.chr_rom.clone(), false)
    }
}

/// Create a mapper instance from a cartridge descriptor
///
/// This factory validates the descriptor against the requirements of the
/// requested mapper and returns the boxed implementation.
///
/// # Arguments
/// * `descriptor` - The parsed cartridge to build a mapper for
///
/// # Errors
/// * `CartridgeError::UnsupportedMapper` for mapper numbers other than 0-4
/// * `CartridgeError::InvalidPrgRom` when PRG-ROM is empty or not a multiple
///   of 16KB
/// * `CartridgeError::ChrRomRequired` when a CHR-ROM-only board has no CHR
pub fn create_mapper(descriptor: CartridgeDescriptor) -> Result<Box<dyn Mapper>, CartridgeError> {
    let prg_len = descriptor.prg_rom.len();
    if prg_len == 0 || prg_len % PRG_BANK_16K != 0 {
        return Err(CartridgeError::InvalidPrgRom(prg_len));
    }

    log::debug!(
        "building mapper {} (PRG {}KB, CHR {}KB)",
        descriptor.mapper,
        prg_len / 1024,
        descriptor.chr_rom.len() / 1024
    );

    match descriptor.mapper {
        0 => Ok(Box::new(Mapper0::new(descriptor)?)),
        1 => Ok(Box::new(Mapper1::new(descriptor)?)),
        2 => Ok(Box::new(Mapper2::new(descriptor)?)),
        3 => Ok(Box::new(Mapper3::new(descriptor)?)),
        4 => Ok(Box::new(Mapper4::new(descriptor)?)),
        mapper_num => Err(CartridgeError::UnsupportedMapper(mapper_num)),
    }
}
