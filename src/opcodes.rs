//! # Opcode Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction decode.
//!
//! The table covers the **151 documented NMOS 6502 opcodes**. Each entry maps
//! the opcode byte to:
//! - The operation to perform (one of 56 [`Operation`] variants)
//! - The addressing mode used to find its operand
//! - The base cycle cost (excluding page-crossing and branch penalties)
//!
//! The remaining 105 byte values have no entry. Fetching one of them is a
//! fatal decode error; undocumented opcodes are not emulated.

use crate::addressing::AddressingMode;
use crate::ExecutionError;

/// The 56 documented 6502 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Three-letter assembler mnemonic.
    ///
    /// ```
    /// use cpu6502::Operation;
    ///
    /// assert_eq!(Operation::Lda.mnemonic(), "LDA");
    /// ```
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }

    /// Whether an indexed operand that crosses a page costs one extra cycle.
    ///
    /// Only operations that read their operand pay the penalty. Stores and
    /// read-modify-write instructions always take their fixed cycle count,
    /// and branches account for their own penalties.
    pub fn has_page_penalty(self) -> bool {
        matches!(
            self,
            Operation::Lda
                | Operation::Ldx
                | Operation::Ldy
                | Operation::Adc
                | Operation::Sbc
                | Operation::And
                | Operation::Ora
                | Operation::Eor
                | Operation::Cmp
                | Operation::Cpx
                | Operation::Cpy
                | Operation::Bit
        )
    }

    /// Whether this is one of the eight conditional branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bne
                | Operation::Bmi
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Decode information for a single opcode byte.
///
/// # Examples
///
/// ```
/// use cpu6502::{lookup, AddressingMode, Operation};
///
/// let lda_imm = lookup(0xA9, 0x8000).unwrap();
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// What the instruction does.
    pub operation: Operation,

    /// How the operand is located.
    pub mode: AddressingMode,

    /// Cycle cost before page-crossing and branch penalties.
    pub base_cycles: u8,
}

impl Opcode {
    pub const fn new(operation: Operation, mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            operation,
            mode,
            base_cycles,
        }
    }

    /// Total instruction size: the opcode byte plus its operand bytes.
    pub fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

/// Looks up the opcode table entry for `opcode`, fetched from `address`.
///
/// Returns [`ExecutionError::UnmappedOpcode`] carrying `address` when the
/// byte is not a documented instruction.
///
/// ```
/// use cpu6502::{lookup, ExecutionError};
///
/// assert!(lookup(0xEA, 0x8000).is_ok());
/// assert_eq!(
///     lookup(0x02, 0x8001),
///     Err(ExecutionError::UnmappedOpcode { opcode: 0x02, address: 0x8001 })
/// );
/// ```
pub fn lookup(opcode: u8, address: u16) -> Result<Opcode, ExecutionError> {
    OPCODE_TABLE[opcode as usize].ok_or(ExecutionError::UnmappedOpcode { opcode, address })
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Base cycle counts follow the MOS programming manual. `None` marks the
/// undocumented opcodes.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = [
    Some(Opcode::new(Operation::Brk, AddressingMode::Implied, 7)), // 0x00
    Some(Opcode::new(Operation::Ora, AddressingMode::IndirectX, 6)), // 0x01
    None, // 0x02
    None, // 0x03
    None, // 0x04
    Some(Opcode::new(Operation::Ora, AddressingMode::ZeroPage, 3)), // 0x05
    Some(Opcode::new(Operation::Asl, AddressingMode::ZeroPage, 5)), // 0x06
    None, // 0x07
    Some(Opcode::new(Operation::Php, AddressingMode::Implied, 3)), // 0x08
    Some(Opcode::new(Operation::Ora, AddressingMode::Immediate, 2)), // 0x09
    Some(Opcode::new(Operation::Asl, AddressingMode::Accumulator, 2)), // 0x0A
    None, // 0x0B
    None, // 0x0C
    Some(Opcode::new(Operation::Ora, AddressingMode::Absolute, 4)), // 0x0D
    Some(Opcode::new(Operation::Asl, AddressingMode::Absolute, 6)), // 0x0E
    None, // 0x0F
    Some(Opcode::new(Operation::Bpl, AddressingMode::Relative, 2)), // 0x10
    Some(Opcode::new(Operation::Ora, AddressingMode::IndirectY, 5)), // 0x11
    None, // 0x12
    None, // 0x13
    None, // 0x14
    Some(Opcode::new(Operation::Ora, AddressingMode::ZeroPageX, 4)), // 0x15
    Some(Opcode::new(Operation::Asl, AddressingMode::ZeroPageX, 6)), // 0x16
    None, // 0x17
    Some(Opcode::new(Operation::Clc, AddressingMode::Implied, 2)), // 0x18
    Some(Opcode::new(Operation::Ora, AddressingMode::AbsoluteY, 4)), // 0x19
    None, // 0x1A
    None, // 0x1B
    None, // 0x1C
    Some(Opcode::new(Operation::Ora, AddressingMode::AbsoluteX, 4)), // 0x1D
    Some(Opcode::new(Operation::Asl, AddressingMode::AbsoluteX, 7)), // 0x1E
    None, // 0x1F
    Some(Opcode::new(Operation::Jsr, AddressingMode::Absolute, 6)), // 0x20
    Some(Opcode::new(Operation::And, AddressingMode::IndirectX, 6)), // 0x21
    None, // 0x22
    None, // 0x23
    Some(Opcode::new(Operation::Bit, AddressingMode::ZeroPage, 3)), // 0x24
    Some(Opcode::new(Operation::And, AddressingMode::ZeroPage, 3)), // 0x25
    Some(Opcode::new(Operation::Rol, AddressingMode::ZeroPage, 5)), // 0x26
    None, // 0x27
    Some(Opcode::new(Operation::Plp, AddressingMode::Implied, 4)), // 0x28
    Some(Opcode::new(Operation::And, AddressingMode::Immediate, 2)), // 0x29
    Some(Opcode::new(Operation::Rol, AddressingMode::Accumulator, 2)), // 0x2A
    None, // 0x2B
    Some(Opcode::new(Operation::Bit, AddressingMode::Absolute, 4)), // 0x2C
    Some(Opcode::new(Operation::And, AddressingMode::Absolute, 4)), // 0x2D
    Some(Opcode::new(Operation::Rol, AddressingMode::Absolute, 6)), // 0x2E
    None, // 0x2F
    Some(Opcode::new(Operation::Bmi, AddressingMode::Relative, 2)), // 0x30
    Some(Opcode::new(Operation::And, AddressingMode::IndirectY, 5)), // 0x31
    None, // 0x32
    None, // 0x33
    None, // 0x34
    Some(Opcode::new(Operation::And, AddressingMode::ZeroPageX, 4)), // 0x35
    Some(Opcode::new(Operation::Rol, AddressingMode::ZeroPageX, 6)), // 0x36
    None, // 0x37
    Some(Opcode::new(Operation::Sec, AddressingMode::Implied, 2)), // 0x38
    Some(Opcode::new(Operation::And, AddressingMode::AbsoluteY, 4)), // 0x39
    None, // 0x3A
    None, // 0x3B
    None, // 0x3C
    Some(Opcode::new(Operation::And, AddressingMode::AbsoluteX, 4)), // 0x3D
    Some(Opcode::new(Operation::Rol, AddressingMode::AbsoluteX, 7)), // 0x3E
    None, // 0x3F
    Some(Opcode::new(Operation::Rti, AddressingMode::Implied, 6)), // 0x40
    Some(Opcode::new(Operation::Eor, AddressingMode::IndirectX, 6)), // 0x41
    None, // 0x42
    None, // 0x43
    None, // 0x44
    Some(Opcode::new(Operation::Eor, AddressingMode::ZeroPage, 3)), // 0x45
    Some(Opcode::new(Operation::Lsr, AddressingMode::ZeroPage, 5)), // 0x46
    None, // 0x47
    Some(Opcode::new(Operation::Pha, AddressingMode::Implied, 3)), // 0x48
    Some(Opcode::new(Operation::Eor, AddressingMode::Immediate, 2)), // 0x49
    Some(Opcode::new(Operation::Lsr, AddressingMode::Accumulator, 2)), // 0x4A
    None, // 0x4B
    Some(Opcode::new(Operation::Jmp, AddressingMode::Absolute, 3)), // 0x4C
    Some(Opcode::new(Operation::Eor, AddressingMode::Absolute, 4)), // 0x4D
    Some(Opcode::new(Operation::Lsr, AddressingMode::Absolute, 6)), // 0x4E
    None, // 0x4F
    Some(Opcode::new(Operation::Bvc, AddressingMode::Relative, 2)), // 0x50
    Some(Opcode::new(Operation::Eor, AddressingMode::IndirectY, 5)), // 0x51
    None, // 0x52
    None, // 0x53
    None, // 0x54
    Some(Opcode::new(Operation::Eor, AddressingMode::ZeroPageX, 4)), // 0x55
    Some(Opcode::new(Operation::Lsr, AddressingMode::ZeroPageX, 6)), // 0x56
    None, // 0x57
    Some(Opcode::new(Operation::Cli, AddressingMode::Implied, 2)), // 0x58
    Some(Opcode::new(Operation::Eor, AddressingMode::AbsoluteY, 4)), // 0x59
    None, // 0x5A
    None, // 0x5B
    None, // 0x5C
    Some(Opcode::new(Operation::Eor, AddressingMode::AbsoluteX, 4)), // 0x5D
    Some(Opcode::new(Operation::Lsr, AddressingMode::AbsoluteX, 7)), // 0x5E
    None, // 0x5F
    Some(Opcode::new(Operation::Rts, AddressingMode::Implied, 6)), // 0x60
    Some(Opcode::new(Operation::Adc, AddressingMode::IndirectX, 6)), // 0x61
    None, // 0x62
    None, // 0x63
    None, // 0x64
    Some(Opcode::new(Operation::Adc, AddressingMode::ZeroPage, 3)), // 0x65
    Some(Opcode::new(Operation::Ror, AddressingMode::ZeroPage, 5)), // 0x66
    None, // 0x67
    Some(Opcode::new(Operation::Pla, AddressingMode::Implied, 4)), // 0x68
    Some(Opcode::new(Operation::Adc, AddressingMode::Immediate, 2)), // 0x69
    Some(Opcode::new(Operation::Ror, AddressingMode::Accumulator, 2)), // 0x6A
    None, // 0x6B
    Some(Opcode::new(Operation::Jmp, AddressingMode::Indirect, 5)), // 0x6C
    Some(Opcode::new(Operation::Adc, AddressingMode::Absolute, 4)), // 0x6D
    Some(Opcode::new(Operation::Ror, AddressingMode::Absolute, 6)), // 0x6E
    None, // 0x6F
    Some(Opcode::new(Operation::Bvs, AddressingMode::Relative, 2)), // 0x70
    Some(Opcode::new(Operation::Adc, AddressingMode::IndirectY, 5)), // 0x71
    None, // 0x72
    None, // 0x73
    None, // 0x74
    Some(Opcode::new(Operation::Adc, AddressingMode::ZeroPageX, 4)), // 0x75
    Some(Opcode::new(Operation::Ror, AddressingMode::ZeroPageX, 6)), // 0x76
    None, // 0x77
    Some(Opcode::new(Operation::Sei, AddressingMode::Implied, 2)), // 0x78
    Some(Opcode::new(Operation::Adc, AddressingMode::AbsoluteY, 4)), // 0x79
    None, // 0x7A
    None, // 0x7B
    None, // 0x7C
    Some(Opcode::new(Operation::Adc, AddressingMode::AbsoluteX, 4)), // 0x7D
    Some(Opcode::new(Operation::Ror, AddressingMode::AbsoluteX, 7)), // 0x7E
    None, // 0x7F
    None, // 0x80
    Some(Opcode::new(Operation::Sta, AddressingMode::IndirectX, 6)), // 0x81
    None, // 0x82
    None, // 0x83
    Some(Opcode::new(Operation::Sty, AddressingMode::ZeroPage, 3)), // 0x84
    Some(Opcode::new(Operation::Sta, AddressingMode::ZeroPage, 3)), // 0x85
    Some(Opcode::new(Operation::Stx, AddressingMode::ZeroPage, 3)), // 0x86
    None, // 0x87
    Some(Opcode::new(Operation::Dey, AddressingMode::Implied, 2)), // 0x88
    None, // 0x89
    Some(Opcode::new(Operation::Txa, AddressingMode::Implied, 2)), // 0x8A
    None, // 0x8B
    Some(Opcode::new(Operation::Sty, AddressingMode::Absolute, 4)), // 0x8C
    Some(Opcode::new(Operation::Sta, AddressingMode::Absolute, 4)), // 0x8D
    Some(Opcode::new(Operation::Stx, AddressingMode::Absolute, 4)), // 0x8E
    None, // 0x8F
    Some(Opcode::new(Operation::Bcc, AddressingMode::Relative, 2)), // 0x90
    Some(Opcode::new(Operation::Sta, AddressingMode::IndirectY, 6)), // 0x91
    None, // 0x92
    None, // 0x93
    Some(Opcode::new(Operation::Sty, AddressingMode::ZeroPageX, 4)), // 0x94
    Some(Opcode::new(Operation::Sta, AddressingMode::ZeroPageX, 4)), // 0x95
    Some(Opcode::new(Operation::Stx, AddressingMode::ZeroPageY, 4)), // 0x96
    None, // 0x97
    Some(Opcode::new(Operation::Tya, AddressingMode::Implied, 2)), // 0x98
    Some(Opcode::new(Operation::Sta, AddressingMode::AbsoluteY, 5)), // 0x99
    Some(Opcode::new(Operation::Txs, AddressingMode::Implied, 2)), // 0x9A
    None, // 0x9B
    None, // 0x9C
    Some(Opcode::new(Operation::Sta, AddressingMode::AbsoluteX, 5)), // 0x9D
    None, // 0x9E
    None, // 0x9F
    Some(Opcode::new(Operation::Ldy, AddressingMode::Immediate, 2)), // 0xA0
    Some(Opcode::new(Operation::Lda, AddressingMode::IndirectX, 6)), // 0xA1
    Some(Opcode::new(Operation::Ldx, AddressingMode::Immediate, 2)), // 0xA2
    None, // 0xA3
    Some(Opcode::new(Operation::Ldy, AddressingMode::ZeroPage, 3)), // 0xA4
    Some(Opcode::new(Operation::Lda, AddressingMode::ZeroPage, 3)), // 0xA5
    Some(Opcode::new(Operation::Ldx, AddressingMode::ZeroPage, 3)), // 0xA6
    None, // 0xA7
    Some(Opcode::new(Operation::Tay, AddressingMode::Implied, 2)), // 0xA8
    Some(Opcode::new(Operation::Lda, AddressingMode::Immediate, 2)), // 0xA9
    Some(Opcode::new(Operation::Tax, AddressingMode::Implied, 2)), // 0xAA
    None, // 0xAB
    Some(Opcode::new(Operation::Ldy, AddressingMode::Absolute, 4)), // 0xAC
    Some(Opcode::new(Operation::Lda, AddressingMode::Absolute, 4)), // 0xAD
    Some(Opcode::new(Operation::Ldx, AddressingMode::Absolute, 4)), // 0xAE
    None, // 0xAF
    Some(Opcode::new(Operation::Bcs, AddressingMode::Relative, 2)), // 0xB0
    Some(Opcode::new(Operation::Lda, AddressingMode::IndirectY, 5)), // 0xB1
    None, // 0xB2
    None, // 0xB3
    Some(Opcode::new(Operation::Ldy, AddressingMode::ZeroPageX, 4)), // 0xB4
    Some(Opcode::new(Operation::Lda, AddressingMode::ZeroPageX, 4)), // 0xB5
    Some(Opcode::new(Operation::Ldx, AddressingMode::ZeroPageY, 4)), // 0xB6
    None, // 0xB7
    Some(Opcode::new(Operation::Clv, AddressingMode::Implied, 2)), // 0xB8
    Some(Opcode::new(Operation::Lda, AddressingMode::AbsoluteY, 4)), // 0xB9
    Some(Opcode::new(Operation::Tsx, AddressingMode::Implied, 2)), // 0xBA
    None, // 0xBB
    Some(Opcode::new(Operation::Ldy, AddressingMode::AbsoluteX, 4)), // 0xBC
    Some(Opcode::new(Operation::Lda, AddressingMode::AbsoluteX, 4)), // 0xBD
    Some(Opcode::new(Operation::Ldx, AddressingMode::AbsoluteY, 4)), // 0xBE
    None, // 0xBF
    Some(Opcode::new(Operation::Cpy, AddressingMode::Immediate, 2)), // 0xC0
    Some(Opcode::new(Operation::Cmp, AddressingMode::IndirectX, 6)), // 0xC1
    None, // 0xC2
    None, // 0xC3
    Some(Opcode::new(Operation::Cpy, AddressingMode::ZeroPage, 3)), // 0xC4
    Some(Opcode::new(Operation::Cmp, AddressingMode::ZeroPage, 3)), // 0xC5
    Some(Opcode::new(Operation::Dec, AddressingMode::ZeroPage, 5)), // 0xC6
    None, // 0xC7
    Some(Opcode::new(Operation::Iny, AddressingMode::Implied, 2)), // 0xC8
    Some(Opcode::new(Operation::Cmp, AddressingMode::Immediate, 2)), // 0xC9
    Some(Opcode::new(Operation::Dex, AddressingMode::Implied, 2)), // 0xCA
    None, // 0xCB
    Some(Opcode::new(Operation::Cpy, AddressingMode::Absolute, 4)), // 0xCC
    Some(Opcode::new(Operation::Cmp, AddressingMode::Absolute, 4)), // 0xCD
    Some(Opcode::new(Operation::Dec, AddressingMode::Absolute, 6)), // 0xCE
    None, // 0xCF
    Some(Opcode::new(Operation::Bne, AddressingMode::Relative, 2)), // 0xD0
    Some(Opcode::new(Operation::Cmp, AddressingMode::IndirectY, 5)), // 0xD1
    None, // 0xD2
    None, // 0xD3
    None, // 0xD4
    Some(Opcode::new(Operation::Cmp, AddressingMode::ZeroPageX, 4)), // 0xD5
    Some(Opcode::new(Operation::Dec, AddressingMode::ZeroPageX, 6)), // 0xD6
    None, // 0xD7
    Some(Opcode::new(Operation::Cld, AddressingMode::Implied, 2)), // 0xD8
    Some(Opcode::new(Operation::Cmp, AddressingMode::AbsoluteY, 4)), // 0xD9
    None, // 0xDA
    None, // 0xDB
    None, // 0xDC
    Some(Opcode::new(Operation::Cmp, AddressingMode::AbsoluteX, 4)), // 0xDD
    Some(Opcode::new(Operation::Dec, AddressingMode::AbsoluteX, 7)), // 0xDE
    None, // 0xDF
    Some(Opcode::new(Operation::Cpx, AddressingMode::Immediate, 2)), // 0xE0
    Some(Opcode::new(Operation::Sbc, AddressingMode::IndirectX, 6)), // 0xE1
    None, // 0xE2
    None, // 0xE3
    Some(Opcode::new(Operation::Cpx, AddressingMode::ZeroPage, 3)), // 0xE4
    Some(Opcode::new(Operation::Sbc, AddressingMode::ZeroPage, 3)), // 0xE5
    Some(Opcode::new(Operation::Inc, AddressingMode::ZeroPage, 5)), // 0xE6
    None, // 0xE7
    Some(Opcode::new(Operation::Inx, AddressingMode::Implied, 2)), // 0xE8
    Some(Opcode::new(Operation::Sbc, AddressingMode::Immediate, 2)), // 0xE9
    Some(Opcode::new(Operation::Nop, AddressingMode::Implied, 2)), // 0xEA
    None, // 0xEB
    Some(Opcode::new(Operation::Cpx, AddressingMode::Absolute, 4)), // 0xEC
    Some(Opcode::new(Operation::Sbc, AddressingMode::Absolute, 4)), // 0xED
    Some(Opcode::new(Operation::Inc, AddressingMode::Absolute, 6)), // 0xEE
    None, // 0xEF
    Some(Opcode::new(Operation::Beq, AddressingMode::Relative, 2)), // 0xF0
    Some(Opcode::new(Operation::Sbc, AddressingMode::IndirectY, 5)), // 0xF1
    None, // 0xF2
    None, // 0xF3
    None, // 0xF4
    Some(Opcode::new(Operation::Sbc, AddressingMode::ZeroPageX, 4)), // 0xF5
    Some(Opcode::new(Operation::Inc, AddressingMode::ZeroPageX, 6)), // 0xF6
    None, // 0xF7
    Some(Opcode::new(Operation::Sed, AddressingMode::Implied, 2)), // 0xF8
    Some(Opcode::new(Operation::Sbc, AddressingMode::AbsoluteY, 4)), // 0xF9
    None, // 0xFA
    None, // 0xFB
    None, // 0xFC
    Some(Opcode::new(Operation::Sbc, AddressingMode::AbsoluteX, 4)), // 0xFD
    Some(Opcode::new(Operation::Inc, AddressingMode::AbsoluteX, 7)), // 0xFE
    None, // 0xFF
];
