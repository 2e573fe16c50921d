//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Read-modify-write on a memory location
//! - INX, INY, DEX, DEY: Adjust an index register
//!
//! All wrap modulo 256 and update Z and N. C and V are never touched.

use crate::{MemoryBus, Operand, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.set_zn(result);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
}
