// Opcode table for the documented 6502 instruction set
//
// A flat 256-entry table indexed by opcode byte. Undocumented opcodes carry
// the `???` mnemonic; the dispatcher reports them on the fault channel and
// retires them as 2-cycle NOPs so the frame loop stays alive.

use super::addressing::AddressingMode;

/// Static description of one opcode
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Assembler mnemonic
    pub mnemonic: &'static str,
    /// Addressing mode
    pub mode: AddressingMode,
    /// Instruction length in bytes (opcode + operands)
    pub bytes: u8,
    /// Base cycle count
    pub cycles: u8,
    /// Whether an address-calculation page cross costs one extra cycle
    pub page_cycle: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
    }
}

/// Placeholder for undocumented opcodes
const ILL: OpcodeInfo = op("???", AddressingMode::Implied, 1, 2, false);

use AddressingMode::*;

/// The dispatch table, indexed by opcode byte
#[rustfmt::skip]
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00
    op("BRK", Implied, 1, 7, false),         op("ORA", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    ILL,                                     op("ORA", ZeroPage, 2, 3, false),
    op("ASL", ZeroPage, 2, 5, false),        ILL,
    op("PHP", Implied, 1, 3, false),         op("ORA", Immediate, 2, 2, false),
    op("ASL", Accumulator, 1, 2, false),     ILL,
    ILL,                                     op("ORA", Absolute, 3, 4, false),
    op("ASL", Absolute, 3, 6, false),        ILL,
    // 0x10
    op("BPL", Relative, 2, 2, false),        op("ORA", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("ORA", ZeroPageX, 2, 4, false),
    op("ASL", ZeroPageX, 2, 6, false),       ILL,
    op("CLC", Implied, 1, 2, false),         op("ORA", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("ORA", AbsoluteX, 3, 4, true),
    op("ASL", AbsoluteX, 3, 7, false),       ILL,
    // 0x20
    op("JSR", Absolute, 3, 6, false),        op("AND", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    op("BIT", ZeroPage, 2, 3, false),        op("AND", ZeroPage, 2, 3, false),
    op("ROL", ZeroPage, 2, 5, false),        ILL,
    op("PLP", Implied, 1, 4, false),         op("AND", Immediate, 2, 2, false),
    op("ROL", Accumulator, 1, 2, false),     ILL,
    op("BIT", Absolute, 3, 4, false),        op("AND", Absolute, 3, 4, false),
    op("ROL", Absolute, 3, 6, false),        ILL,
    // 0x30
    op("BMI", Relative, 2, 2, false),        op("AND", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("AND", ZeroPageX, 2, 4, false),
    op("ROL", ZeroPageX, 2, 6, false),       ILL,
    op("SEC", Implied, 1, 2, false),         op("AND", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("AND", AbsoluteX, 3, 4, true),
    op("ROL", AbsoluteX, 3, 7, false),       ILL,
    // 0x40
    op("RTI", Implied, 1, 6, false),         op("EOR", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    ILL,                                     op("EOR", ZeroPage, 2, 3, false),
    op("LSR", ZeroPage, 2, 5, false),        ILL,
    op("PHA", Implied, 1, 3, false),         op("EOR", Immediate, 2, 2, false),
    op("LSR", Accumulator, 1, 2, false),     ILL,
    op("JMP", Absolute, 3, 3, false),        op("EOR", Absolute, 3, 4, false),
    op("LSR", Absolute, 3, 6, false),        ILL,
    // 0x50
    op("BVC", Relative, 2, 2, false),        op("EOR", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("EOR", ZeroPageX, 2, 4, false),
    op("LSR", ZeroPageX, 2, 6, false),       ILL,
    op("CLI", Implied, 1, 2, false),         op("EOR", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("EOR", AbsoluteX, 3, 4, true),
    op("LSR", AbsoluteX, 3, 7, false),       ILL,
    // 0x60
    op("RTS", Implied, 1, 6, false),         op("ADC", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    ILL,                                     op("ADC", ZeroPage, 2, 3, false),
    op("ROR", ZeroPage, 2, 5, false),        ILL,
    op("PLA", Implied, 1, 4, false),         op("ADC", Immediate, 2, 2, false),
    op("ROR", Accumulator, 1, 2, false),     ILL,
    op("JMP", Indirect, 3, 5, false),        op("ADC", Absolute, 3, 4, false),
    op("ROR", Absolute, 3, 6, false),        ILL,
    // 0x70
    op("BVS", Relative, 2, 2, false),        op("ADC", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("ADC", ZeroPageX, 2, 4, false),
    op("ROR", ZeroPageX, 2, 6, false),       ILL,
    op("SEI", Implied, 1, 2, false),         op("ADC", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("ADC", AbsoluteX, 3, 4, true),
    op("ROR", AbsoluteX, 3, 7, false),       ILL,
    // 0x80
    ILL,                                     op("STA", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    op("STY", ZeroPage, 2, 3, false),        op("STA", ZeroPage, 2, 3, false),
    op("STX", ZeroPage, 2, 3, false),        ILL,
    op("DEY", Implied, 1, 2, false),         ILL,
    op("TXA", Implied, 1, 2, false),         ILL,
    op("STY", Absolute, 3, 4, false),        op("STA", Absolute, 3, 4, false),
    op("STX", Absolute, 3, 4, false),        ILL,
    // 0x90
    op("BCC", Relative, 2, 2, false),        op("STA", IndirectIndexed, 2, 6, false),
    ILL,                                     ILL,
    op("STY", ZeroPageX, 2, 4, false),       op("STA", ZeroPageX, 2, 4, false),
    op("STX", ZeroPageY, 2, 4, false),       ILL,
    op("TYA", Implied, 1, 2, false),         op("STA", AbsoluteY, 3, 5, false),
    op("TXS", Implied, 1, 2, false),         ILL,
    ILL,                                     op("STA", AbsoluteX, 3, 5, false),
    ILL,                                     ILL,
    // 0xA0
    op("LDY", Immediate, 2, 2, false),       op("LDA", IndexedIndirect, 2, 6, false),
    op("LDX", Immediate, 2, 2, false),       ILL,
    op("LDY", ZeroPage, 2, 3, false),        op("LDA", ZeroPage, 2, 3, false),
    op("LDX", ZeroPage, 2, 3, false),        ILL,
    op("TAY", Implied, 1, 2, false),         op("LDA", Immediate, 2, 2, false),
    op("TAX", Implied, 1, 2, false),         ILL,
    op("LDY", Absolute, 3, 4, false),        op("LDA", Absolute, 3, 4, false),
    op("LDX", Absolute, 3, 4, false),        ILL,
    // 0xB0
    op("BCS", Relative, 2, 2, false),        op("LDA", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    op("LDY", ZeroPageX, 2, 4, false),       op("LDA", ZeroPageX, 2, 4, false),
    op("LDX", ZeroPageY, 2, 4, false),       ILL,
    op("CLV", Implied, 1, 2, false),         op("LDA", AbsoluteY, 3, 4, true),
    op("TSX", Implied, 1, 2, false),         ILL,
    op("LDY", AbsoluteX, 3, 4, true),        op("LDA", AbsoluteX, 3, 4, true),
    op("LDX", AbsoluteY, 3, 4, true),        ILL,
    // 0xC0
    op("CPY", Immediate, 2, 2, false),       op("CMP", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    op("CPY", ZeroPage, 2, 3, false),        op("CMP", ZeroPage, 2, 3, false),
    op("DEC", ZeroPage, 2, 5, false),        ILL,
    op("INY", Implied, 1, 2, false),         op("CMP", Immediate, 2, 2, false),
    op("DEX", Implied, 1, 2, false),         ILL,
    op("CPY", Absolute, 3, 4, false),        op("CMP", Absolute, 3, 4, false),
    op("DEC", Absolute, 3, 6, false),        ILL,
    // 0xD0
    op("BNE", Relative, 2, 2, false),        op("CMP", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("CMP", ZeroPageX, 2, 4, false),
    op("DEC", ZeroPageX, 2, 6, false),       ILL,
    op("CLD", Implied, 1, 2, false),         op("CMP", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("CMP", AbsoluteX, 3, 4, true),
    op("DEC", AbsoluteX, 3, 7, false),       ILL,
    // 0xE0
    op("CPX", Immediate, 2, 2, false),       op("SBC", IndexedIndirect, 2, 6, false),
    ILL,                                     ILL,
    op("CPX", ZeroPage, 2, 3, false),        op("SBC", ZeroPage, 2, 3, false),
    op("INC", ZeroPage, 2, 5, false),        ILL,
    op("INX", Implied, 1, 2, false),         op("SBC", Immediate, 2, 2, false),
    op("NOP", Implied, 1, 2, false),         ILL,
    op("CPX", Absolute, 3, 4, false),        op("SBC", Absolute, 3, 4, false),
    op("INC", Absolute, 3, 6, false),        ILL,
    // 0xF0
    op("BEQ", Relative, 2, 2, false),        op("SBC", IndirectIndexed, 2, 5, true),
    ILL,                                     ILL,
    ILL,                                     op("SBC", ZeroPageX, 2, 4, false),
    op("INC", ZeroPageX, 2, 6, false),       ILL,
    op("SED", Implied, 1, 2, false),         op("SBC", AbsoluteY, 3, 4, true),
    ILL,                                     ILL,
    ILL,                                     op("SBC", AbsoluteX, 3, 4, true),
    op("INC", AbsoluteX, 3, 7, false),       ILL,
];
