// Opcode metadata table for the 6502 instruction decoder.
//
// Each table entry gives the mnemonic, addressing mode, instruction length in
// bytes, base cycle count, and whether a page-boundary crossing during address
// calculation adds one cycle. Only the 56 official mnemonics are named; every
// other slot is an unofficial opcode and carries a `"JAM"` placeholder entry
// (1 byte, 2 cycles) so the table stays total over `u8`.

use crate::cpu::addressing::AddressingMode;

#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    pub page_cycle: bool,
}

const fn op(mnemonic: &'static str, mode: AddressingMode, bytes: u8, cycles: u8, page_cycle: bool) -> OpcodeInfo {
    OpcodeInfo { mnemonic, mode, bytes, cycles, page_cycle }
}

pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    op("BRK", AddressingMode::Implied, 1, 7, false), // 0x00
    op("ORA", AddressingMode::IndexedIndirect, 2, 6, false), // 0x01
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x02
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x03
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x04
    op("ORA", AddressingMode::ZeroPage, 2, 3, false), // 0x05
    op("ASL", AddressingMode::ZeroPage, 2, 5, false), // 0x06
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x07
    op("PHP", AddressingMode::Implied, 1, 3, false), // 0x08
    op("ORA", AddressingMode::Immediate, 2, 2, false), // 0x09
    op("ASL", AddressingMode::Accumulator, 1, 2, false), // 0x0A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x0B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x0C
    op("ORA", AddressingMode::Absolute, 3, 4, false), // 0x0D
    op("ASL", AddressingMode::Absolute, 3, 6, false), // 0x0E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x0F
    op("BPL", AddressingMode::Relative, 2, 2, false), // 0x10
    op("ORA", AddressingMode::IndirectIndexed, 2, 5, true), // 0x11
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x12
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x13
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x14
    op("ORA", AddressingMode::ZeroPageX, 2, 4, false), // 0x15
    op("ASL", AddressingMode::ZeroPageX, 2, 6, false), // 0x16
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x17
    op("CLC", AddressingMode::Implied, 1, 2, false), // 0x18
    op("ORA", AddressingMode::AbsoluteY, 3, 4, true), // 0x19
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x1A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x1B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x1C
    op("ORA", AddressingMode::AbsoluteX, 3, 4, true), // 0x1D
    op("ASL", AddressingMode::AbsoluteX, 3, 7, false), // 0x1E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x1F
    op("JSR", AddressingMode::Absolute, 3, 6, false), // 0x20
    op("AND", AddressingMode::IndexedIndirect, 2, 6, false), // 0x21
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x22
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x23
    op("BIT", AddressingMode::ZeroPage, 2, 3, false), // 0x24
    op("AND", AddressingMode::ZeroPage, 2, 3, false), // 0x25
    op("ROL", AddressingMode::ZeroPage, 2, 5, false), // 0x26
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x27
    op("PLP", AddressingMode::Implied, 1, 4, false), // 0x28
    op("AND", AddressingMode::Immediate, 2, 2, false), // 0x29
    op("ROL", AddressingMode::Accumulator, 1, 2, false), // 0x2A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x2B
    op("BIT", AddressingMode::Absolute, 3, 4, false), // 0x2C
    op("AND", AddressingMode::Absolute, 3, 4, false), // 0x2D
    op("ROL", AddressingMode::Absolute, 3, 6, false), // 0x2E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x2F
    op("BMI", AddressingMode::Relative, 2, 2, false), // 0x30
    op("AND", AddressingMode::IndirectIndexed, 2, 5, true), // 0x31
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x32
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x33
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x34
    op("AND", AddressingMode::ZeroPageX, 2, 4, false), // 0x35
    op("ROL", AddressingMode::ZeroPageX, 2, 6, false), // 0x36
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x37
    op("SEC", AddressingMode::Implied, 1, 2, false), // 0x38
    op("AND", AddressingMode::AbsoluteY, 3, 4, true), // 0x39
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x3A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x3B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x3C
    op("AND", AddressingMode::AbsoluteX, 3, 4, true), // 0x3D
    op("ROL", AddressingMode::AbsoluteX, 3, 7, false), // 0x3E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x3F
    op("RTI", AddressingMode::Implied, 1, 6, false), // 0x40
    op("EOR", AddressingMode::IndexedIndirect, 2, 6, false), // 0x41
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x42
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x43
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x44
    op("EOR", AddressingMode::ZeroPage, 2, 3, false), // 0x45
    op("LSR", AddressingMode::ZeroPage, 2, 5, false), // 0x46
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x47
    op("PHA", AddressingMode::Implied, 1, 3, false), // 0x48
    op("EOR", AddressingMode::Immediate, 2, 2, false), // 0x49
    op("LSR", AddressingMode::Accumulator, 1, 2, false), // 0x4A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x4B
    op("JMP", AddressingMode::Absolute, 3, 3, false), // 0x4C
    op("EOR", AddressingMode::Absolute, 3, 4, false), // 0x4D
    op("LSR", AddressingMode::Absolute, 3, 6, false), // 0x4E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x4F
    op("BVC", AddressingMode::Relative, 2, 2, false), // 0x50
    op("EOR", AddressingMode::IndirectIndexed, 2, 5, true), // 0x51
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x52
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x53
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x54
    op("EOR", AddressingMode::ZeroPageX, 2, 4, false), // 0x55
    op("LSR", AddressingMode::ZeroPageX, 2, 6, false), // 0x56
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x57
    op("CLI", AddressingMode::Implied, 1, 2, false), // 0x58
    op("EOR", AddressingMode::AbsoluteY, 3, 4, true), // 0x59
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x5A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x5B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x5C
    op("EOR", AddressingMode::AbsoluteX, 3, 4, true), // 0x5D
    op("LSR", AddressingMode::AbsoluteX, 3, 7, false), // 0x5E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x5F
    op("RTS", AddressingMode::Implied, 1, 6, false), // 0x60
    op("ADC", AddressingMode::IndexedIndirect, 2, 6, false), // 0x61
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x62
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x63
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x64
    op("ADC", AddressingMode::ZeroPage, 2, 3, false), // 0x65
    op("ROR", AddressingMode::ZeroPage, 2, 5, false), // 0x66
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x67
    op("PLA", AddressingMode::Implied, 1, 4, false), // 0x68
    op("ADC", AddressingMode::Immediate, 2, 2, false), // 0x69
    op("ROR", AddressingMode::Accumulator, 1, 2, false), // 0x6A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x6B
    op("JMP", AddressingMode::Indirect, 3, 5, false), // 0x6C
    op("ADC", AddressingMode::Absolute, 3, 4, false), // 0x6D
    op("ROR", AddressingMode::Absolute, 3, 6, false), // 0x6E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x6F
    op("BVS", AddressingMode::Relative, 2, 2, false), // 0x70
    op("ADC", AddressingMode::IndirectIndexed, 2, 5, true), // 0x71
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x72
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x73
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x74
    op("ADC", AddressingMode::ZeroPageX, 2, 4, false), // 0x75
    op("ROR", AddressingMode::ZeroPageX, 2, 6, false), // 0x76
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x77
    op("SEI", AddressingMode::Implied, 1, 2, false), // 0x78
    op("ADC", AddressingMode::AbsoluteY, 3, 4, true), // 0x79
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x7A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x7B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x7C
    op("ADC", AddressingMode::AbsoluteX, 3, 4, true), // 0x7D
    op("ROR", AddressingMode::AbsoluteX, 3, 7, false), // 0x7E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x7F
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x80
    op("STA", AddressingMode::IndexedIndirect, 2, 6, false), // 0x81
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x82
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x83
    op("STY", AddressingMode::ZeroPage, 2, 3, false), // 0x84
    op("STA", AddressingMode::ZeroPage, 2, 3, false), // 0x85
    op("STX", AddressingMode::ZeroPage, 2, 3, false), // 0x86
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x87
    op("DEY", AddressingMode::Implied, 1, 2, false), // 0x88
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x89
    op("TXA", AddressingMode::Implied, 1, 2, false), // 0x8A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x8B
    op("STY", AddressingMode::Absolute, 3, 4, false), // 0x8C
    op("STA", AddressingMode::Absolute, 3, 4, false), // 0x8D
    op("STX", AddressingMode::Absolute, 3, 4, false), // 0x8E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x8F
    op("BCC", AddressingMode::Relative, 2, 2, false), // 0x90
    op("STA", AddressingMode::IndirectIndexed, 2, 6, false), // 0x91
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x92
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x93
    op("STY", AddressingMode::ZeroPageX, 2, 4, false), // 0x94
    op("STA", AddressingMode::ZeroPageX, 2, 4, false), // 0x95
    op("STX", AddressingMode::ZeroPageY, 2, 4, false), // 0x96
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x97
    op("TYA", AddressingMode::Implied, 1, 2, false), // 0x98
    op("STA", AddressingMode::AbsoluteY, 3, 5, false), // 0x99
    op("TXS", AddressingMode::Implied, 1, 2, false), // 0x9A
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x9B
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x9C
    op("STA", AddressingMode::AbsoluteX, 3, 5, false), // 0x9D
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x9E
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0x9F
    op("LDY", AddressingMode::Immediate, 2, 2, false), // 0xA0
    op("LDA", AddressingMode::IndexedIndirect, 2, 6, false), // 0xA1
    op("LDX", AddressingMode::Immediate, 2, 2, false), // 0xA2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xA3
    op("LDY", AddressingMode::ZeroPage, 2, 3, false), // 0xA4
    op("LDA", AddressingMode::ZeroPage, 2, 3, false), // 0xA5
    op("LDX", AddressingMode::ZeroPage, 2, 3, false), // 0xA6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xA7
    op("TAY", AddressingMode::Implied, 1, 2, false), // 0xA8
    op("LDA", AddressingMode::Immediate, 2, 2, false), // 0xA9
    op("TAX", AddressingMode::Implied, 1, 2, false), // 0xAA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xAB
    op("LDY", AddressingMode::Absolute, 3, 4, false), // 0xAC
    op("LDA", AddressingMode::Absolute, 3, 4, false), // 0xAD
    op("LDX", AddressingMode::Absolute, 3, 4, false), // 0xAE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xAF
    op("BCS", AddressingMode::Relative, 2, 2, false), // 0xB0
    op("LDA", AddressingMode::IndirectIndexed, 2, 5, true), // 0xB1
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xB2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xB3
    op("LDY", AddressingMode::ZeroPageX, 2, 4, false), // 0xB4
    op("LDA", AddressingMode::ZeroPageX, 2, 4, false), // 0xB5
    op("LDX", AddressingMode::ZeroPageY, 2, 4, false), // 0xB6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xB7
    op("CLV", AddressingMode::Implied, 1, 2, false), // 0xB8
    op("LDA", AddressingMode::AbsoluteY, 3, 4, true), // 0xB9
    op("TSX", AddressingMode::Implied, 1, 2, false), // 0xBA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xBB
    op("LDY", AddressingMode::AbsoluteX, 3, 4, true), // 0xBC
    op("LDA", AddressingMode::AbsoluteX, 3, 4, true), // 0xBD
    op("LDX", AddressingMode::AbsoluteY, 3, 4, true), // 0xBE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xBF
    op("CPY", AddressingMode::Immediate, 2, 2, false), // 0xC0
    op("CMP", AddressingMode::IndexedIndirect, 2, 6, false), // 0xC1
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xC2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xC3
    op("CPY", AddressingMode::ZeroPage, 2, 3, false), // 0xC4
    op("CMP", AddressingMode::ZeroPage, 2, 3, false), // 0xC5
    op("DEC", AddressingMode::ZeroPage, 2, 5, false), // 0xC6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xC7
    op("INY", AddressingMode::Implied, 1, 2, false), // 0xC8
    op("CMP", AddressingMode::Immediate, 2, 2, false), // 0xC9
    op("DEX", AddressingMode::Implied, 1, 2, false), // 0xCA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xCB
    op("CPY", AddressingMode::Absolute, 3, 4, false), // 0xCC
    op("CMP", AddressingMode::Absolute, 3, 4, false), // 0xCD
    op("DEC", AddressingMode::Absolute, 3, 6, false), // 0xCE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xCF
    op("BNE", AddressingMode::Relative, 2, 2, false), // 0xD0
    op("CMP", AddressingMode::IndirectIndexed, 2, 5, true), // 0xD1
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xD2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xD3
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xD4
    op("CMP", AddressingMode::ZeroPageX, 2, 4, false), // 0xD5
    op("DEC", AddressingMode::ZeroPageX, 2, 6, false), // 0xD6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xD7
    op("CLD", AddressingMode::Implied, 1, 2, false), // 0xD8
    op("CMP", AddressingMode::AbsoluteY, 3, 4, true), // 0xD9
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xDA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xDB
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xDC
    op("CMP", AddressingMode::AbsoluteX, 3, 4, true), // 0xDD
    op("DEC", AddressingMode::AbsoluteX, 3, 7, false), // 0xDE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xDF
    op("CPX", AddressingMode::Immediate, 2, 2, false), // 0xE0
    op("SBC", AddressingMode::IndexedIndirect, 2, 6, false), // 0xE1
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xE2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xE3
    op("CPX", AddressingMode::ZeroPage, 2, 3, false), // 0xE4
    op("SBC", AddressingMode::ZeroPage, 2, 3, false), // 0xE5
    op("INC", AddressingMode::ZeroPage, 2, 5, false), // 0xE6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xE7
    op("INX", AddressingMode::Implied, 1, 2, false), // 0xE8
    op("SBC", AddressingMode::Immediate, 2, 2, false), // 0xE9
    op("NOP", AddressingMode::Implied, 1, 2, false), // 0xEA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xEB
    op("CPX", AddressingMode::Absolute, 3, 4, false), // 0xEC
    op("SBC", AddressingMode::Absolute, 3, 4, false), // 0xED
    op("INC", AddressingMode::Absolute, 3, 6, false), // 0xEE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xEF
    op("BEQ", AddressingMode::Relative, 2, 2, false), // 0xF0
    op("SBC", AddressingMode::IndirectIndexed, 2, 5, true), // 0xF1
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xF2
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xF3
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xF4
    op("SBC", AddressingMode::ZeroPageX, 2, 4, false), // 0xF5
    op("INC", AddressingMode::ZeroPageX, 2, 6, false), // 0xF6
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xF7
    op("SED", AddressingMode::Implied, 1, 2, false), // 0xF8
    op("SBC", AddressingMode::AbsoluteY, 3, 4, true), // 0xF9
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xFA
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xFB
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xFC
    op("SBC", AddressingMode::AbsoluteX, 3, 4, true), // 0xFD
    op("INC", AddressingMode::AbsoluteX, 3, 7, false), // 0xFE
    op("JAM", AddressingMode::Implied, 1, 2, false), // 0xFF
];
