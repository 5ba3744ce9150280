// Compare instructions
// Register minus memory; the result is discarded, the flags remain.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// Shared compare core: C = reg >= M, Z = reg == M, N from the difference
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.update_flag(flags::CARRY, register >= value);
        self.update_zero_and_negative_flags(result);
    }

    /// CMP - Compare Accumulator
    ///
    /// Flags affected: C, Z, N
    pub(crate) fn cmp(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.compare(self.a, value);
    }

    /// CPX - Compare X Register
    ///
    /// Flags affected: C, Z, N
    pub(crate) fn cpx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.compare(self.x, value);
    }

    /// CPY - Compare Y Register
    ///
    /// Flags affected: C, Z, N
    pub(crate) fn cpy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.compare(self.y, value);
    }
}
