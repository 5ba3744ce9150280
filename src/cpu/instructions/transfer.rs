// Register transfer instructions
// All update Z and N except TXS (see stack.rs).

use crate::cpu::Cpu;

impl Cpu {
    /// TAX - Transfer Accumulator to X
    pub(crate) fn tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    /// TAY - Transfer Accumulator to Y
    pub(crate) fn tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    /// TXA - Transfer X to Accumulator
    pub(crate) fn txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    /// TYA - Transfer Y to Accumulator
    pub(crate) fn tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }
}
