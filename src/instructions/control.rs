//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt
//!
//! NOP is dispatched inline and has no routine here.

use crate::interrupts::IRQ_VECTOR;
use crate::{MemoryBus, Operand, CPU};

/// Target of a JMP or JSR. Both only decode with Absolute or Indirect mode.
fn jump_target(operand: Operand) -> u16 {
    match operand.address() {
        Some(target) => target,
        None => unreachable!("jump operands always resolve to a memory target"),
    }
}

/// Executes the JMP (Jump) instruction.
///
/// The operand has already been resolved, including the indirect pointer
/// fetch (and its page-wrap quirk) for `JMP ($nnnn)`.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.pc = jump_target(operand);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address - 1), high byte first, then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let target = jump_target(operand);
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR (low byte first) and resumes one byte
/// past it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then the return address. Unlike RTS there is
/// no +1 adjustment.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Pushes the return address (BRK + 2 by default, see [`crate::BrkReturn`])
/// 2. Pushes the status register with the break bit set
/// 3. Sets the I flag
/// 4. Loads PC from the IRQ/BRK vector at $FFFE/$FFFF
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC already points one past the BRK opcode
    let brk_address = cpu.pc.wrapping_sub(1);
    let return_address = brk_address.wrapping_add(cpu.config.brk_return.offset());
    cpu.enter_interrupt(return_address, IRQ_VECTOR, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, MemoryBus};

    fn target(address: u16) -> Operand {
        Operand::Memory {
            address,
            page_crossed: false,
        }
    }

    #[test]
    fn test_jmp_sets_pc() {
        let mut cpu = CPU::new(FlatMemory::new());
        jmp(&mut cpu, target(0x1234));
        assert_eq!(cpu.pc, 0x1234);
    }

    #[test]
    fn test_jsr_pushes_last_byte_of_instruction() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.sp = 0xFF;
        cpu.pc = 0x8003;

        jsr(&mut cpu, target(0x9000));

        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.memory.read(0x01FF), 0x80);
        assert_eq!(cpu.memory.read(0x01FE), 0x02);
    }

    #[test]
    #[should_panic(expected = "jump operands")]
    fn test_jsr_without_target_is_rejected() {
        let mut cpu = CPU::new(FlatMemory::new());
        jsr(&mut cpu, Operand::Accumulator);
    }
}
