//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 emulator with per-step cycle accounting.
//!
//! The crate executes one instruction per [`CPU::step`], updating registers,
//! status flags, the stack pointer and the program counter the way the
//! physical chip does, including page-crossing and branch-taken cycle
//! penalties and IRQ/NMI servicing at instruction boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points at 0x8000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset();
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Architecture
//!
//! - **Memory is injected**: the CPU only talks to a [`MemoryBus`]. It can own
//!   the bus value or hold a `&mut` handle to one.
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps every opcode byte to an
//!   [`Operation`], an [`AddressingMode`] and a base cycle count. Bytes with no
//!   entry are a fatal [`ExecutionError::UnmappedOpcode`].
//! - **One routine per instruction family**: see the internal `instructions`
//!   module.
//! - **Interrupts are requested, not polled**: the host calls
//!   [`CPU::request_irq`] / [`CPU::request_nmi`] and the CPU services them at
//!   the start of the next step.
//!
//! Decimal (BCD) arithmetic is not emulated. The D flag is stored and can be
//! pushed/pulled, but ADC and SBC always operate in binary.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Operation enum and the opcode table
//! - `addressing` - Addressing modes and effective address resolution
//! - `interrupts` - IRQ/NMI request latch and service sequence
//! - `config` - Behavioral options (BRK return address, JMP indirect quirk)
//! - `loader` - Program image loading

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod loader;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{BrkReturn, CpuConfig};
pub use cpu::CPU;
pub use interrupts::Interrupt;
pub use loader::LoadError;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, Opcode, Operation, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    ///
    /// Execution cannot continue past this point: the program image is
    /// corrupt or uses an undocumented opcode. The CPU is left with PC
    /// pointing at the offending byte.
    UnmappedOpcode {
        /// The opcode byte that failed to decode
        opcode: u8,
        /// Address the opcode was fetched from
        address: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnmappedOpcode { opcode, address } => {
                write!(
                    f,
                    "Opcode 0x{:02X} at 0x{:04X} is not a documented 6502 instruction",
                    opcode, address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
