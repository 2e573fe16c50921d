//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic with the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Test bits in memory against the accumulator
//!
//! Arithmetic is always binary. The D flag does not change ADC/SBC results.

use crate::{MemoryBus, Operand, CPU};

/// Adds `value` and the carry flag to the accumulator, updating C, Z, V and N.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;

    // Overflow when both inputs share a sign and the result's sign differs
    cpu.flag_v = (!(a ^ value) & (a ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. C is set when the unsigned sum exceeds 0xFF, V when the
/// signed result is out of range.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Implemented as A + !M + C, so C ends up set when no
/// borrow occurred and V follows the same two's-complement rule as ADC.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a & cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a | cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a ^ cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Shared compare: register - value without storing the difference.
///
/// - C: register >= value (unsigned)
/// - Z: register == value
/// - N: bit 7 of the 8-bit difference
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.a;
    let value = cpu.read_operand(operand);
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.x;
    let value = cpu.read_operand(operand);
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.y;
    let value = cpu.read_operand(operand);
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects A AND M, while N and V are copied from bits 7 and 6 of the
/// memory operand itself. A is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0x80 != 0;
    cpu.flag_v = value & 0x40 != 0;
}
