//! # Load and Store Instructions
//!
//! Loads copy memory into a register and update Z/N. Stores copy a register
//! to memory and leave flags alone; they also never pay the page-crossing
//! penalty (the base cycle count already includes the fix-up cycle).

use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.x = value;
    cpu.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.y = value;
    cpu.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.a;
    cpu.write_operand(operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.x;
    cpu.write_operand(operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.y;
    cpu.write_operand(operand, value);
}
