// famicore - a cycle-accurate NES emulation core
//
// The crate models the 2A03 CPU, the 2C02 PPU, the system bus between them,
// and the bank-switching cartridge mappers, interleaved at the hardware's
// 3:1 PPU:CPU clock ratio. ROM loading, video output, and audio synthesis
// live outside: the core consumes a `CartridgeDescriptor` and controller
// input, and emits a 256x240 buffer of palette indices once per frame.

// Public modules
pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod input;
pub mod palette;
pub mod ppu;
pub mod system;

// Re-export main types for convenience
pub use apu::Apu;
pub use bus::Bus;
pub use cartridge::{create_mapper, CartridgeDescriptor, CartridgeError, Mapper, Mirroring};
pub use cpu::{Cpu, TraceEvent, TraceHook};
pub use input::{Button, Controller};
pub use palette::{color_to_rgb, color_to_srgb, HARDWARE_PALETTE};
pub use ppu::{LoopyRegister, Ppu, FRAME_PIXELS, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use system::System;
