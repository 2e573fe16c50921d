//! # Register Transfer Instructions
//!
//! Copy one register into another. Every transfer except TXS updates Z and N
//! from the destination; TXS only moves X into the stack pointer.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer A to X) instruction.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
}

/// Executes the TAY (Transfer A to Y) instruction.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
}

/// Executes the TXA (Transfer X to A) instruction.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
}

/// Executes the TYA (Transfer Y to A) instruction.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction. No flags change.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
