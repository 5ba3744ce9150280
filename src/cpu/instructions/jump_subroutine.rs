// Jump and subroutine instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// JMP - Jump (absolute or indirect)
    pub(crate) fn jmp(&mut self, addr_result: &AddressingResult) {
        self.pc = addr_result.address;
    }

    /// JSR - Jump to Subroutine
    ///
    /// Pushes the address of the last byte of the JSR (PC - 1), then jumps.
    pub(crate) fn jsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let return_addr = self.pc.wrapping_sub(1);
        self.stack_push_u16(bus, return_addr);
        self.pc = addr_result.address;
    }

    /// RTS - Return from Subroutine
    ///
    /// Pulls the JSR return address and resumes one byte after it.
    pub(crate) fn rts(&mut self, bus: &mut Bus) {
        let return_addr = self.stack_pull_u16(bus);
        self.pc = return_addr.wrapping_add(1);
    }
}
