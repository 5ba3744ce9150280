// Cartridge module - descriptor, mapper contract, and mapper implementations
//
// The core does not parse ROM files. An external loader converts an iNES (or
// equivalent) image into a `CartridgeDescriptor`, and the bus consumes a
// mapper built from that descriptor. Everything bank-switched lives behind
// the `Mapper` trait.

pub mod mappers;

pub use mappers::create_mapper;

/// Nametable mirroring arrangement
///
/// Determines how the four logical nametables at $2000/$2400/$2800/$2C00 are
/// folded onto the PPU's 2KB of physical VRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mirroring {
    /// $2000=$2400, $2800=$2C00 (vertical scrolling layouts)
    Horizontal,
    /// $2000=$2800, $2400=$2C00 (horizontal scrolling layouts)
    Vertical,
    /// All four nametables map to the first physical table
    SingleScreenLow,
    /// All four nametables map to the second physical table
    SingleScreenHigh,
    /// Four independent nametables (requires cartridge VRAM)
    FourScreen,
}

/// Parsed cartridge image, as produced by an external ROM loader
///
/// This is the construction-time configuration surface of the core: mapper
/// number, raw PRG/CHR bytes, header mirroring, and the battery flag. An
/// empty `chr_rom` means the board carries 8KB of CHR-RAM instead of CHR-ROM.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartridgeDescriptor {
    /// Mapper number (0, 1, 2, 3, 4 supported)
    pub mapper: u8,
    /// PRG-ROM data (multiple of 16KB)
    pub prg_rom: Vec<u8>,
    /// CHR-ROM data (empty to request 8KB CHR-RAM)
    pub chr_rom: Vec<u8>,
    /// Nametable mirroring from the header
    pub mirroring: Mirroring,
    /// Battery-backed PRG-RAM flag
    pub has_battery: bool,
}

impl CartridgeDescriptor {
    /// Create a descriptor with the given mapper and ROM contents
    ///
    /// # Arguments
    /// * `mapper` - Mapper number
    /// * `prg_rom` - PRG-ROM bytes
    /// * `chr_rom` - CHR-ROM bytes (empty for CHR-RAM boards)
    /// * `mirroring` - Header mirroring mode
    pub fn new(mapper: u8, prg_rom: Vec<u8>, chr_rom: Vec<u8>, mirroring: Mirroring) -> Self {
        CartridgeDescriptor {
            mapper,
            prg_rom,
            chr_rom,
            mirroring,
            has_battery: false,
        }
    }
}

/// Error type for cartridge/mapper construction
///
/// These are the only errors the core can produce: once a `System` exists,
/// runtime faults are counted, never raised.
#[derive(Debug)]
pub enum CartridgeError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
    /// PRG-ROM is missing or not a multiple of the bank size
    InvalidPrgRom(usize),
    /// CHR-ROM is required by this mapper but the descriptor has none
    ChrRomRequired(u8),
    /// CHR size is not a multiple of the mapper's CHR bank size
    InvalidChrRom(usize),
}

impl std::fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartridgeError::UnsupportedMapper(num) => {
                write!(f, "Mapper {} is not supported", num)
            }
            CartridgeError::InvalidPrgRom(size) => {
                write!(f, "Invalid PRG-ROM size: {} bytes", size)
            }
            CartridgeError::ChrRomRequired(mapper) => {
                write!(f, "Mapper {} requires CHR-ROM but none was provided", mapper)
            }
            CartridgeError::InvalidChrRom(size) => {
                write!(f, "Invalid CHR size: {} bytes", size)
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Cartridge mapper interface
///
/// A mapper virtualizes bank-switched PRG and CHR access and, for boards with
/// a scanline counter, watches PPU address line A12. The bus routes CPU
/// accesses in $4020-$FFFF here; the PPU routes pattern-table accesses in
/// $0000-$1FFF here.
///
/// Reads outside the mapped range return 0 (the bus may substitute its open
/// bus latch). Writes outside the mapped range are ignored. Bank selections
/// beyond physical capacity wrap modulo the bank count.
pub trait Mapper {
    /// Read a byte from CPU address space ($4020-$FFFF)
    fn cpu_read(&self, addr: u16) -> u8;

    /// Write a byte to CPU address space ($4020-$FFFF)
    ///
    /// Writes into ROM ranges drive the mapper's bank registers.
    fn cpu_write(&mut self, addr: u16, value: u8);

    /// Read a byte from PPU address space ($0000-$1FFF, pattern tables)
    fn ppu_read(&self, addr: u16) -> u8;

    /// Write a byte to PPU address space ($0000-$1FFF)
    ///
    /// Only meaningful for CHR-RAM boards; CHR-ROM writes are ignored.
    fn ppu_write(&mut self, addr: u16, value: u8);

    /// Current nametable mirroring arrangement
    ///
    /// Fixed by the header for most boards, runtime-controlled on MMC1/MMC3.
    fn mirroring(&self) -> Mirroring;

    /// Observe a PPU address placed on the PPU bus (for A12 scanline counters)
    ///
    /// Called by the PPU for every pattern-table fetch while rendering. The
    /// default implementation ignores it; MMC3 clocks its IRQ counter on the
    /// rising edge of address line A12.
    fn tick_a12(&mut self, _addr: u16) {}

    /// Notify the mapper that one CPU cycle has elapsed
    ///
    /// Used by MMC1 to collapse the back-to-back writes of a read-modify-write
    /// instruction into a single serial-port write.
    fn cpu_cycle(&mut self) {}

    /// Whether the mapper's IRQ line is asserted
    ///
    /// Level-triggered; stays asserted until the game acknowledges it through
    /// the mapper's own register interface.
    fn irq_pending(&self) -> bool {
        false
    }

    /// Reset mapper state to power-on defaults (ROM contents are preserved)
    fn reset(&mut self);
}
