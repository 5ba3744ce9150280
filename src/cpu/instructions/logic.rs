// Logical instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// AND - Logical AND with Accumulator
    ///
    /// Flags affected: Z, N
    pub(crate) fn and(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a &= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Logical OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub(crate) fn ora(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a |= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Exclusive OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub(crate) fn eor(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a ^= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test
    ///
    /// Z from A & M; N and V copied straight from bits 7 and 6 of memory.
    /// The classic PPUSTATUS poll (`BIT $2002; BPL ...`) rides on this.
    ///
    /// Flags affected: Z, V, N
    pub(crate) fn bit(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.update_flag(flags::ZERO, self.a & value == 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
    }
}
