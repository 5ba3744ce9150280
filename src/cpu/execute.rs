// Instruction fetch, dispatch, and retirement

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::{Cpu, TraceEvent};

impl Cpu {
    /// Execute one instruction (or service a pending interrupt)
    ///
    /// A pending NMI, or an IRQ with the I flag clear, preempts the fetch
    /// and runs its 7-cycle service sequence instead. Every memory access
    /// inside ticks the bus as it happens; whatever internal cycles the
    /// instruction still owes are padded afterwards, so the PPU advances
    /// exactly three dots per CPU cycle no matter what executes.
    ///
    /// # Returns
    /// The number of CPU cycles consumed (including any OAM DMA stall)
    pub fn step(&mut self, bus: &mut Bus) -> u64 {
        let start = bus.clock();

        if bus.take_nmi() {
            self.service_nmi(bus);
            return bus.clock().wrapping_sub(start);
        }
        if bus.irq_line() && !self.get_interrupt_disable() {
            self.service_irq(bus);
            return bus.clock().wrapping_sub(start);
        }

        if self.trace_hook.is_some() {
            let event = self.trace_event(bus);
            if let Some(hook) = self.trace_hook.as_mut() {
                hook(&event);
            }
        }

        // Fetch
        let opcode = bus.read(self.pc);
        let opcode_info = &OPCODE_TABLE[opcode as usize];
        self.pc = self.pc.wrapping_add(1);

        // Decode the effective address
        let addr_result = match opcode_info.mode {
            AddressingMode::Implied => self.addr_implied(),
            AddressingMode::Accumulator => self.addr_accumulator(),
            AddressingMode::Immediate => self.addr_immediate(bus),
            AddressingMode::ZeroPage => self.addr_zero_page(bus),
            AddressingMode::ZeroPageX => self.addr_zero_page_x(bus),
            AddressingMode::ZeroPageY => self.addr_zero_page_y(bus),
            AddressingMode::Relative => self.addr_relative(bus),
            AddressingMode::Absolute => self.addr_absolute(bus),
            AddressingMode::AbsoluteX => self.addr_absolute_x(bus),
            AddressingMode::AbsoluteY => self.addr_absolute_y(bus),
            AddressingMode::Indirect => self.addr_indirect(bus),
            AddressingMode::IndexedIndirect => self.addr_indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.addr_indirect_indexed(bus),
        };

        // Execute
        let extra_cycles = self.execute_instruction(opcode, &addr_result, bus);

        // Retire: base cycles, page penalty for indexed reads, branch extras
        let mut expected = opcode_info.cycles as u64;
        if opcode_info.page_cycle && addr_result.page_crossed {
            expected += 1;
        }
        expected += extra_cycles as u64;

        self.pad_cycles(bus, start, expected);
        bus.clock().wrapping_sub(start)
    }

    /// Dispatch one opcode
    ///
    /// # Returns
    /// Extra cycles beyond the table value (branches only)
    fn execute_instruction(
        &mut self,
        opcode: u8,
        addr_result: &crate::cpu::addressing::AddressingResult,
        bus: &mut Bus,
    ) -> u8 {
        match opcode {
            // Load/Store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, addr_result),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, addr_result),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, addr_result),
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, addr_result),
            0x86 | 0x96 | 0x8E => self.stx(bus, addr_result),
            0x84 | 0x94 | 0x8C => self.sty(bus, addr_result),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, addr_result),
            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.sbc(bus, addr_result),
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, addr_result),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, addr_result),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Logic
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, addr_result),
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, addr_result),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, addr_result),
            0x24 | 0x2C => self.bit(bus, addr_result),

            // Shift/Rotate
            0x0A => self.asl(bus, addr_result, true),
            0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, addr_result, false),
            0x4A => self.lsr(bus, addr_result, true),
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, addr_result, false),
            0x2A => self.rol(bus, addr_result, true),
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, addr_result, false),
            0x6A => self.ror(bus, addr_result, true),
            0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, addr_result, false),

            // Compare
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, addr_result),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, addr_result),
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, addr_result),

            // Branches (return their extra cycles)
            0x90 => return self.bcc(addr_result),
            0xB0 => return self.bcs(addr_result),
            0xF0 => return self.beq(addr_result),
            0x30 => return self.bmi(addr_result),
            0xD0 => return self.bne(addr_result),
            0x10 => return self.bpl(addr_result),
            0x50 => return self.bvc(addr_result),
            0x70 => return self.bvs(addr_result),

            // Jump/Subroutine
            0x4C | 0x6C => self.jmp(addr_result),
            0x20 => self.jsr(bus, addr_result),
            0x60 => self.rts(bus),

            // Stack
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),
            0x08 => self.php(bus),
            0x28 => self.plp(bus),
            0x9A => self.txs(),
            0xBA => self.tsx(),

            // Transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),

            // Flags
            0x18 => self.clc(),
            0x38 => self.sec(),
            0x58 => self.cli(),
            0x78 => self.sei(),
            0xB8 => self.clv(),
            0xD8 => self.cld(),
            0xF8 => self.sed(),

            // Miscellaneous
            0x00 => self.brk(bus),
            0x40 => self.rti(bus),
            0xEA => self.nop(),

            // Undocumented: report the fault and retire as a 2-cycle NOP
            _ => {
                self.faults = self.faults.wrapping_add(1);
                log::warn!(
                    "unknown opcode ${:02X} at ${:04X}; retiring as NOP",
                    opcode,
                    self.pc.wrapping_sub(1)
                );
            }
        }
        0
    }

    /// Build the monitor-hook snapshot for the instruction at PC
    ///
    /// Uses side-effect-free peeks so tracing never perturbs the machine.
    fn trace_event(&self, bus: &Bus) -> TraceEvent {
        let opcode = bus.peek(self.pc);
        let opcode_info = &OPCODE_TABLE[opcode as usize];
        let operand_len = opcode_info.bytes.saturating_sub(1).min(2);

        let mut operands = [0u8; 2];
        for (i, operand) in operands.iter_mut().enumerate().take(operand_len as usize) {
            *operand = bus.peek(self.pc.wrapping_add(1 + i as u16));
        }

        TraceEvent {
            pc: self.pc,
            opcode,
            operands,
            operand_len,
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            status: self.status,
            cycle: self.cycles,
        }
    }
}
