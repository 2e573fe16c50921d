//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator or on a memory location (read-modify-write).
//! The bit shifted out becomes the new carry; Z and N follow the result.

use crate::{MemoryBus, Operand, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value << 1;

    cpu.flag_c = value & 0x80 != 0;
    cpu.set_zn(result);
    cpu.write_operand(operand, result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value >> 1;

    cpu.flag_c = value & 0x01 != 0;
    cpu.set_zn(result);
    cpu.write_operand(operand, result);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old C enters bit 0, bit 7 goes to C.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = (value << 1) | cpu.flag_c as u8;

    cpu.flag_c = value & 0x80 != 0;
    cpu.set_zn(result);
    cpu.write_operand(operand, result);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old C enters bit 7, bit 0 goes to C.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = (value >> 1) | ((cpu.flag_c as u8) << 7);

    cpu.flag_c = value & 0x01 != 0;
    cpu.set_zn(result);
    cpu.write_operand(operand, result);
}
