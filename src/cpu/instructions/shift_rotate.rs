// Shift and rotate instructions
// Each has an accumulator form and read-modify-write memory forms.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// ASL - Arithmetic Shift Left
    ///
    /// Flags affected: C (old bit 7), Z, N
    pub(crate) fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        if accumulator {
            self.update_flag(flags::CARRY, self.a & 0x80 != 0);
            self.a <<= 1;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address);
            self.update_flag(flags::CARRY, value & 0x80 != 0);
            let result = value << 1;
            bus.write(addr_result.address, result);
            self.update_zero_and_negative_flags(result);
        }
    }

    /// LSR - Logical Shift Right
    ///
    /// Flags affected: C (old bit 0), Z, N (always clear)
    pub(crate) fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        if accumulator {
            self.update_flag(flags::CARRY, self.a & 0x01 != 0);
            self.a >>= 1;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address);
            self.update_flag(flags::CARRY, value & 0x01 != 0);
            let result = value >> 1;
            bus.write(addr_result.address, result);
            self.update_zero_and_negative_flags(result);
        }
    }

    /// ROL - Rotate Left through Carry
    ///
    /// Flags affected: C, Z, N
    pub(crate) fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let carry_in = self.get_carry() as u8;
        if accumulator {
            self.update_flag(flags::CARRY, self.a & 0x80 != 0);
            self.a = (self.a << 1) | carry_in;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address);
            self.update_flag(flags::CARRY, value & 0x80 != 0);
            let result = (value << 1) | carry_in;
            bus.write(addr_result.address, result);
            self.update_zero_and_negative_flags(result);
        }
    }

    /// ROR - Rotate Right through Carry
    ///
    /// Flags affected: C, Z, N
    pub(crate) fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let carry_in = (self.get_carry() as u8) << 7;
        if accumulator {
            self.update_flag(flags::CARRY, self.a & 0x01 != 0);
            self.a = (self.a >> 1) | carry_in;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address);
            self.update_flag(flags::CARRY, value & 0x01 != 0);
            let result = (value >> 1) | carry_in;
            bus.write(addr_result.address, result);
            self.update_zero_and_negative_flags(result);
        }
    }
}
