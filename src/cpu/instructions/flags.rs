// Flag manipulation instructions

use crate::cpu::{flags, Cpu};

impl Cpu {
    /// CLC - Clear Carry
    pub(crate) fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// SEC - Set Carry
    pub(crate) fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// CLI - Clear Interrupt Disable
    pub(crate) fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// SEI - Set Interrupt Disable
    pub(crate) fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - Clear Overflow
    pub(crate) fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    /// CLD - Clear Decimal (latched but ignored by the 2A03 ALU)
    pub(crate) fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// SED - Set Decimal (latched but ignored by the 2A03 ALU)
    pub(crate) fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }
}
