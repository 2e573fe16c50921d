//! # Status Flag Manipulation Instructions
//!
//! - CLC / SEC: Clear / set Carry
//! - CLI / SEI: Clear / set Interrupt Disable
//! - CLV: Clear Overflow
//! - CLD / SED: Clear / set Decimal mode
//!
//! These instructions use implied addressing, take 2 cycles and touch only
//! the named flag.

use crate::{MemoryBus, CPU};

pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = false;
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = true;
}

/// Clears I. A pending IRQ is taken at the start of the next step.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = false;
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = true;
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_v = false;
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = false;
}

/// Sets D. Arithmetic stays binary; the flag is only stored.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = true;
}
