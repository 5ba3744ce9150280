#![allow(dead_code)] // each test binary uses its own subset of the helpers

//! Shared cartridge builders for the integration scenarios
//!
//! Every scenario runs against a synthetic cartridge: a PRG image with a
//! small hand-assembled program and the reset vector pointing at it. No ROM
//! files are involved.

use famicore::{CartridgeDescriptor, Mirroring, System};

/// Opt-in log output for test debugging (`RUST_LOG=debug cargo test`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 32KB NROM image with `program` at $8000 and reset vector $8000
pub fn nrom_with_program(program: &[u8]) -> CartridgeDescriptor {
    let mut prg = vec![0u8; 32 * 1024];
    prg[..program.len()].copy_from_slice(program);
    prg[0x7FFC] = 0x00;
    prg[0x7FFD] = 0x80;
    CartridgeDescriptor::new(0, prg, Vec::new(), Mirroring::Horizontal)
}

/// System booted from `program`
pub fn system_with_program(program: &[u8]) -> System {
    System::new(nrom_with_program(program)).unwrap()
}

/// Absolute PPU dot position since the current frame began
///
/// The frame starts at the pre-render line, so (261, d) is dot d and the
/// visible lines follow.
pub fn dots_into_frame(scanline: u16, dot: u16) -> u64 {
    if scanline == 261 {
        dot as u64
    } else {
        341 * (1 + scanline as u64) + dot as u64
    }
}

/// Absolute PPU dot count: completed frames plus the current offset
///
/// Only meaningful while rendering is disabled (every frame is 89,342 dots).
pub fn absolute_dots(system: &System) -> u64 {
    let ppu = system.bus().ppu();
    ppu.frame_count() * 89_342 + dots_into_frame(ppu.scanline(), ppu.dot())
}
