//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page
//! boundary is crossed:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::{MemoryBus, Operand, CPU};

/// Executes a conditional branch and returns the extra cycles it costs.
///
/// `taken` is the branch condition evaluated against the current flags.
/// `operand` is the resolved Relative target. PC already points past the
/// displacement byte, which is where execution continues when the branch is
/// not taken.
pub(crate) fn branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool, operand: Operand) -> u8 {
    let Operand::Memory {
        address,
        page_crossed,
    } = operand
    else {
        unreachable!("relative mode always resolves to a memory target");
    };

    if !taken {
        return 0;
    }

    cpu.pc = address;
    if page_crossed {
        2
    } else {
        1
    }
}
