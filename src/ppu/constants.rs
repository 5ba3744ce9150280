// PPU constants

/// PPU register index mask; the eight registers repeat through $2000-$3FFF
pub(crate) const PPU_REGISTER_MASK: u16 = 0x0007;

/// Size of one nametable in bytes (1KB)
pub(crate) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes
pub(crate) const PALETTE_SIZE: usize = 32;

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Pixels in one frame buffer
pub const FRAME_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

// ========================================
// PPU Timing Constants (NTSC)
// ========================================

/// Number of PPU cycles (dots) per scanline
pub(crate) const DOTS_PER_SCANLINE: u16 = 341;

/// Number of scanlines per frame
pub(crate) const SCANLINES_PER_FRAME: u16 = 262;

/// Total PPU cycles in a frame without the odd-frame skip:
/// 341 dots x 262 scanlines = 89,342
pub const DOTS_PER_FRAME: u64 =
    (DOTS_PER_SCANLINE as u64) * (SCANLINES_PER_FRAME as u64);

/// First visible scanline
pub(crate) const FIRST_VISIBLE_SCANLINE: u16 = 0;

/// Last visible scanline
pub(crate) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render idle scanline
pub(crate) const POSTRENDER_SCANLINE: u16 = 240;

/// First VBlank scanline; the VBlank flag rises at dot 1
pub(crate) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last VBlank scanline
pub(crate) const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render bookkeeping scanline (scanline "-1" of the next frame)
pub(crate) const PRERENDER_SCANLINE: u16 = 261;
