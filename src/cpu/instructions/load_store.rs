// Load and store instructions
// Loads update Z and N; stores touch no flags.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub(crate) fn lda(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub(crate) fn ldx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub(crate) fn ldy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    /// STA - Store Accumulator
    pub(crate) fn sta(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a);
    }

    /// STX - Store X Register
    pub(crate) fn stx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.x);
    }

    /// STY - Store Y Register
    pub(crate) fn sty(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.y);
    }
}
