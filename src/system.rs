// System module - the top-level composite
//
// Wires a CPU and a Bus around a cartridge descriptor and exposes the whole
// machine through four operations: reset, single-step, run-until-frame, and
// frame-buffer access. Execution is single-threaded and deterministic given
// the descriptor and the controller inputs.

use crate::bus::Bus;
use crate::cartridge::{create_mapper, CartridgeDescriptor, CartridgeError};
use crate::cpu::{Cpu, TraceHook};
use crate::input::Button;
use crate::ppu::FRAME_PIXELS;

/// A complete NES core: CPU, bus, PPU, APU stub, mapper, and controllers
pub struct System {
    cpu: Cpu,
    bus: Bus,
}

impl System {
    /// Build a system from a parsed cartridge
    ///
    /// # Arguments
    /// * `descriptor` - Mapper number, ROM contents, and header flags
    ///
    /// # Errors
    /// Construction is the only fallible path in the core; see
    /// [`CartridgeError`] for the cases. Runtime faults (unknown opcodes)
    /// are counted on [`System::fault_count`] instead of being raised.
    pub fn new(descriptor: CartridgeDescriptor) -> Result<Self, CartridgeError> {
        let mapper = create_mapper(descriptor)?;
        let mut bus = Bus::with_mapper(mapper);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        Ok(System { cpu, bus })
    }

    /// Reset every component and reload PC from the reset vector
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Execute one CPU instruction with its embedded bus ticks
    ///
    /// A pending NMI or IRQ is serviced instead, and an OAM DMA stall is
    /// charged to the instruction that triggered it.
    ///
    /// # Returns
    /// CPU cycles consumed
    pub fn step_instruction(&mut self) -> u64 {
        self.cpu.step(&mut self.bus)
    }

    /// Run until the PPU finishes the current frame
    ///
    /// Returns with the frame-complete flag acknowledged and the frame
    /// buffer stable until the next call.
    pub fn run_frame(&mut self) {
        let frame = self.bus.ppu().frame_count();
        while self.bus.ppu().frame_count() == frame {
            self.cpu.step(&mut self.bus);
        }
        self.bus.ppu_mut().clear_frame_complete();
    }

    /// The finished frame: 256x240 palette indices (0-63)
    ///
    /// Convert to sRGB with [`crate::palette::color_to_srgb`].
    pub fn frame_buffer(&self) -> &[u8; FRAME_PIXELS] {
        self.bus.ppu().frame()
    }

    /// Press or release a controller button
    ///
    /// # Arguments
    /// * `port` - Controller port, 0 or 1
    /// * `button` - The button to change
    /// * `pressed` - true to press, false to release
    pub fn set_button(&mut self, port: usize, button: Button, pressed: bool) {
        self.bus.controller_mut(port & 1).set_button(button, pressed);
    }

    /// Press or release a set of buttons given as a bit mask
    ///
    /// # Arguments
    /// * `port` - Controller port, 0 or 1
    /// * `mask` - Buttons to change, in the bit layout of [`Button::mask`]
    /// * `pressed` - true to press, false to release
    pub fn set_button_mask(&mut self, port: usize, mask: u8, pressed: bool) {
        self.bus.controller_mut(port & 1).set_mask(mask, pressed);
    }

    /// Runtime faults recorded so far (unknown opcodes)
    ///
    /// Faults are invisible to the emulated game; the frame loop never
    /// aborts on them.
    pub fn fault_count(&self) -> u64 {
        self.cpu.fault_count()
    }

    /// Install or remove the CPU monitor hook
    pub fn set_trace_hook(&mut self, hook: Option<TraceHook>) {
        self.cpu.set_trace_hook(hook);
    }

    /// The CPU, for inspection
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The bus (and through it the PPU and controllers)
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// The bus, mutably
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}
