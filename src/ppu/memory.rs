// PPU memory map ($0000-$3FFF)
//
// | Range         | Target                                      |
// |---------------|---------------------------------------------|
// | $0000-$1FFF   | Pattern tables, through the mapper          |
// | $2000-$3EFF   | Nametable RAM, through the mirroring fold   |
// | $3F00-$3FFF   | Palette RAM, mirrored every 32 bytes        |

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// The mirroring arrangement currently in effect
    ///
    /// MMC1 and MMC3 reroute the nametables at runtime, so the mapper is the
    /// authority whenever one is attached.
    pub(crate) fn effective_mirroring(&self) -> Mirroring {
        match &self.mapper {
            Some(mapper) => mapper.borrow().mirroring(),
            None => self.mirroring,
        }
    }

    /// Fold a nametable address onto the 2KB of physical VRAM
    ///
    /// Given the 12-bit offset `a` within $2000-$2FFF, the logical table is
    /// `(a >> 10) & 3` and the physical table comes from the mirroring mode:
    /// Horizontal [0,0,1,1], Vertical [0,1,0,1], single-screen [t,t,t,t].
    ///
    /// # Arguments
    /// * `addr` - Nametable address ($2000-$2FFF, or any mirror of it)
    ///
    /// # Returns
    /// Physical VRAM index (0-2047)
    pub(crate) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let a = (addr & 0x0FFF) as usize;
        let table = a / NAMETABLE_SIZE;
        let offset = a % NAMETABLE_SIZE;

        let physical = match self.effective_mirroring() {
            Mirroring::Horizontal => [0, 0, 1, 1][table],
            Mirroring::Vertical => [0, 1, 0, 1][table],
            Mirroring::SingleScreenLow => 0,
            Mirroring::SingleScreenHigh => 1,
            // None of the base mappers supply the extra 2KB a four-screen
            // board carries; fold like horizontal until one does.
            Mirroring::FourScreen => [0, 0, 1, 1][table],
        };

        physical * NAMETABLE_SIZE + offset
    }

    /// Fold a palette address onto the 32 bytes of palette RAM
    ///
    /// $3F10/$3F14/$3F18/$3F1C alias $3F00/$3F04/$3F08/$3F0C: sprite palette
    /// entry 0 is the shared backdrop.
    pub(crate) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index >= 0x10 && index % 4 == 0 {
            index - 0x10
        } else {
            index
        }
    }

    /// Read a byte of PPU memory
    ///
    /// # Arguments
    /// * `addr` - PPU address; mirrored into $0000-$3FFF
    pub(crate) fn read_ppu_memory(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => match &self.mapper {
                Some(mapper) => mapper.borrow().ppu_read(addr),
                None => 0,
            },
            0x2000..=0x3EFF => {
                let index = self.mirror_nametable_addr(addr);
                self.nametables[index]
            }
            0x3F00..=0x3FFF => {
                let index = self.mirror_palette_addr(addr);
                self.palette_ram[index]
            }
            _ => unreachable!(),
        }
    }

    /// Write a byte of PPU memory
    ///
    /// # Arguments
    /// * `addr` - PPU address; mirrored into $0000-$3FFF
    /// * `data` - Byte to write
    pub(crate) fn write_ppu_memory(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().ppu_write(addr, data);
                }
            }
            0x2000..=0x3EFF => {
                let index = self.mirror_nametable_addr(addr);
                self.nametables[index] = data;
            }
            0x3F00..=0x3FFF => {
                let index = self.mirror_palette_addr(addr);
                self.palette_ram[index] = data;
            }
            _ => unreachable!(),
        }
    }

    /// Fetch a pattern-table byte during rendering
    ///
    /// Unlike `read_ppu_memory`, this is a bus access the mapper can observe:
    /// MMC3's scanline counter watches A12 through these fetches.
    pub(crate) fn fetch_pattern(&mut self, addr: u16) -> u8 {
        match &self.mapper {
            Some(mapper) => {
                let mut mapper = mapper.borrow_mut();
                mapper.tick_a12(addr);
                mapper.ppu_read(addr)
            }
            None => 0,
        }
    }

    /// Palette lookup used by pixel emission, honoring the aliases
    #[inline]
    pub(crate) fn read_palette_color(&self, addr: u16) -> u8 {
        self.palette_ram[self.mirror_palette_addr(addr)]
    }
}
