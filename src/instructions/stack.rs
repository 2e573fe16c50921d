//! # Stack Operations
//!
//! This module implements the stack primitives and the instructions built on
//! them:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.
//!
//! There is no overflow or underflow detection: SP wraps modulo 256 and the
//! stack silently overwrites itself, just like the hardware.

use crate::{MemoryBus, CPU};

/// Base address of the hard-wired stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Break bit (4) and the unused bit (5) as they appear in pushed status bytes.
pub(crate) const BREAK_FLAG: u8 = 0b0001_0000;
pub(crate) const UNUSED_FLAG: u8 = 0b0010_0000;

impl<M: MemoryBus> CPU<M> {
    /// Writes `value` at 0x0100 | SP, then decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads from 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    /// Pushes a word high byte first, so it reads back little-endian.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }
}

/// Executes the PHA (Push Accumulator) instruction. No flags change.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has the break bit and bit 5 set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status() | BREAK_FLAG | UNUSED_FLAG;
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores all six flags; the break and unused bits of the pulled byte are
/// discarded.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
}
