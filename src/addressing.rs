//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns a mode plus the bytes following an opcode into
//! an effective address.
//!
//! Resolution consumes the operand bytes: when it returns, PC points at the
//! next instruction.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,

    /// The accumulator register.
    Accumulator,

    /// A memory location.
    ///
    /// For Relative mode `address` is the branch target.
    Memory {
        address: u16,
        /// Indexing or the branch displacement changed the high byte.
        page_crossed: bool,
    },
}

impl Operand {
    /// The effective address, if the operand refers to memory.
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Memory { address, .. } => Some(address),
            Operand::Implied | Operand::Accumulator => None,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by 2.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word from memory.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer stored in zero page. The high byte wraps to 0x00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Resolves the operand for `mode`, consuming the operand bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{AddressingMode, CPU, FlatMemory, MemoryBus, Operand};
    ///
    /// let mut mem = FlatMemory::new();
    /// // LDA $20FF,X with X = 1
    /// mem.write(0x8000, 0xBD);
    /// mem.write(0x8001, 0xFF);
    /// mem.write(0x8002, 0x20);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_pc(0x8001);
    /// cpu.set_x(1);
    ///
    /// let operand = cpu.resolve_operand(AddressingMode::AbsoluteX);
    /// assert_eq!(operand, Operand::Memory { address: 0x2100, page_crossed: true });
    /// assert_eq!(cpu.pc(), 0x8003);
    /// ```
    pub fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPage => {
                let address = self.fetch_byte() as u16;
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageX => {
                let address = self.fetch_byte().wrapping_add(self.x) as u16;
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageY => {
                let address = self.fetch_byte().wrapping_add(self.y) as u16;
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::Absolute => {
                let address = self.fetch_word();
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.x as u16);
                Operand::Memory {
                    address,
                    page_crossed: crosses_page(base, address),
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.y as u16);
                Operand::Memory {
                    address,
                    page_crossed: crosses_page(base, address),
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let address = if self.config.indirect_jump_page_wrap && (ptr & 0x00FF) == 0x00FF
                {
                    // NMOS bug: the high byte comes from the start of the same page
                    let lo = self.memory.read(ptr) as u16;
                    let hi = self.memory.read(ptr & 0xFF00) as u16;
                    (hi << 8) | lo
                } else {
                    self.read_word(ptr)
                };
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                let address = self.read_zero_page_word(ptr);
                Operand::Memory {
                    address,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_zero_page_word(ptr);
                let address = base.wrapping_add(self.y as u16);
                Operand::Memory {
                    address,
                    page_crossed: crosses_page(base, address),
                }
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let next = self.pc;
                let address = next.wrapping_add_signed(offset as i16);
                Operand::Memory {
                    address,
                    page_crossed: crosses_page(next, address),
                }
            }
        }
    }
}
