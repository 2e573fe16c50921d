//! Interrupt handling.
//!
//! The host requests interrupts with [`CPU::request_irq`] and
//! [`CPU::request_nmi`]. Requests are latched and looked at exactly once, at
//! the start of the next `step()`:
//!
//! - **NMI** is never maskable and wins when both are pending. A latched IRQ
//!   stays latched while the NMI is serviced.
//! - **IRQ** is serviced only when the I flag is clear. A request that
//!   arrives while I is set is discarded.
//!
//! ## Interrupt Service Sequence
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push the status register with the break bit clear
//! 3. Set the I flag
//! 4. Load PC from the vector (0xFFFA for NMI, 0xFFFE for IRQ)
//!
//! **Total: 7 cycles**
//!
//! BRK runs the same sequence through the IRQ vector, but pushes the status
//! with the break bit set.
//!
//! # Example
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut mem = FlatMemory::new();
//! mem.write(0xFFFC, 0x00);
//! mem.write(0xFFFD, 0x80);
//! mem.write(0xFFFA, 0x00); // NMI handler at 0x9000
//! mem.write(0xFFFB, 0x90);
//!
//! let mut cpu = CPU::new(mem);
//! cpu.reset();
//! cpu.request_nmi();
//!
//! assert_eq!(cpu.step(), Ok(7));
//! assert_eq!(cpu.pc(), 0x9000);
//! assert!(cpu.flag_i());
//! ```

use crate::instructions::stack::{BREAK_FLAG, UNUSED_FLAG};
use crate::{MemoryBus, CPU};

/// NMI vector (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte at +1).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by the hardware interrupt sequence.
pub const INTERRUPT_CYCLES: u8 = 7;

/// A hardware interrupt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Maskable interrupt request
    Irq,
    /// Non-maskable interrupt
    Nmi,
}

impl Interrupt {
    /// Address of the vector the handler address is read from.
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Irq => IRQ_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Requests an IRQ at the next instruction boundary.
    pub fn request_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Requests an NMI at the next instruction boundary.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Returns true if an IRQ request is latched.
    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// Returns true if an NMI request is latched.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Consumes the latched request to service in this step, if any.
    pub(crate) fn take_pending_interrupt(&mut self) -> Option<Interrupt> {
        if self.nmi_pending {
            self.nmi_pending = false;
            return Some(Interrupt::Nmi);
        }

        if self.irq_pending {
            self.irq_pending = false;
            if !self.flag_i {
                return Some(Interrupt::Irq);
            }
            log::debug!("IRQ ignored: interrupts disabled at PC=${:04X}", self.pc);
        }

        None
    }

    /// Runs the hardware interrupt sequence and returns its cycle cost.
    pub(crate) fn service_interrupt(&mut self, interrupt: Interrupt) -> u8 {
        log::debug!("servicing {:?} at PC=${:04X}", interrupt, self.pc);
        self.enter_interrupt(self.pc, interrupt.vector(), false);
        INTERRUPT_CYCLES
    }

    /// Pushes `return_address` and the status register, sets I and jumps
    /// through `vector`.
    pub(crate) fn enter_interrupt(&mut self, return_address: u16, vector: u16, brk: bool) {
        self.push_word(return_address);

        let mut status = self.status() | UNUSED_FLAG;
        if brk {
            status |= BREAK_FLAG;
        } else {
            status &= !BREAK_FLAG;
        }
        self.push(status);

        self.flag_i = true;
        self.pc = self.read_word(vector);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        mem.write(0xFFFE, 0x00);
        mem.write(0xFFFF, 0xC0);
        mem.write(0xFFFA, 0x00);
        mem.write(0xFFFB, 0xD0);
        for addr in 0x8000..0x8010 {
            mem.write(addr, 0xEA);
        }
        let mut cpu = CPU::new(mem);
        cpu.reset();
        cpu
    }

    #[test]
    fn test_vectors() {
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
    }

    #[test]
    fn test_nmi_wins_and_irq_stays_latched() {
        let mut cpu = setup_cpu();
        cpu.request_irq();
        cpu.request_nmi();

        assert_eq!(cpu.take_pending_interrupt(), Some(Interrupt::Nmi));
        assert!(cpu.irq_pending());
        assert!(!cpu.nmi_pending());
    }

    #[test]
    fn test_masked_irq_is_discarded() {
        let mut cpu = setup_cpu();
        cpu.set_flag_i(true);
        cpu.request_irq();

        assert_eq!(cpu.take_pending_interrupt(), None);
        assert!(!cpu.irq_pending());
    }

    #[test]
    fn test_service_pushes_state_with_break_clear() {
        let mut cpu = setup_cpu();
        cpu.set_flag_c(true);
        cpu.set_pc(0x8005);

        let cycles = cpu.service_interrupt(Interrupt::Irq);

        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.sp(), 0xFC);
        assert!(cpu.flag_i());
        assert_eq!(cpu.memory().read(0x01FF), 0x80);
        assert_eq!(cpu.memory().read(0x01FE), 0x05);
        let pushed = cpu.memory().read(0x01FD);
        assert_eq!(pushed & BREAK_FLAG, 0);
        assert_eq!(pushed & UNUSED_FLAG, UNUSED_FLAG);
        assert_eq!(pushed & 0x01, 0x01);
    }
}
