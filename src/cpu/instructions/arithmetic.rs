// Arithmetic instructions
// ADC/SBC operate in binary only: the 2A03 has no decimal mode.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// ADC - Add with Carry
    ///
    /// A = A + M + C. Overflow is set when the operands share a sign that
    /// the result does not.
    ///
    /// Flags affected: C, Z, V, N
    pub(crate) fn adc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(value);
    }

    /// SBC - Subtract with Carry
    ///
    /// A = A - M - (1 - C), implemented as ADC of the one's complement.
    ///
    /// Flags affected: C, Z, V, N
    pub(crate) fn sbc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(!value);
    }

    /// Shared ADC/SBC core
    fn add_to_accumulator(&mut self, value: u8) {
        let carry_in = self.get_carry() as u16;
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.update_flag(flags::CARRY, sum > 0xFF);
        self.update_flag(
            flags::OVERFLOW,
            (self.a ^ result) & (value ^ result) & 0x80 != 0,
        );
        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// INC - Increment Memory
    ///
    /// Flags affected: Z, N
    pub(crate) fn inc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address).wrapping_add(1);
        bus.write(addr_result.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// DEC - Decrement Memory
    ///
    /// Flags affected: Z, N
    pub(crate) fn dec(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address).wrapping_sub(1);
        bus.write(addr_result.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// INX - Increment X
    pub(crate) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - Increment Y
    pub(crate) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - Decrement X
    pub(crate) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - Decrement Y
    pub(crate) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
