//! Property-based tests for addressing mode calculations.
//!
//! These tests check effective addresses and page crossing penalties across
//! the whole operand space, including zero-page wraparound.

use cpu6502::{FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

/// Any operand base that keeps indexed accesses clear of the program and
/// the vectors.
fn data_address() -> impl Strategy<Value = u16> {
    0x0200u16..0x7F00u16
}

// ========== Zero Page ==========

proptest! {
    /// Property: Zero page,X wraps within page zero
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let effective = base.wrapping_add(x) as u16;
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xB5, base]); // LDA zp,X

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 4);
    }

    /// Property: Zero page,Y wraps within page zero (LDX)
    #[test]
    fn prop_zero_page_y_wraps(base in any::<u8>(), y in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        let effective = base.wrapping_add(y) as u16;
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xB6, base]); // LDX zp,Y

        cpu.step().unwrap();

        prop_assert_eq!(cpu.x(), value);
    }

    /// Property: (zp,X) reads its pointer from two zero-page bytes, wrapping
    #[test]
    fn prop_indexed_indirect(
        base in any::<u8>(),
        x in any::<u8>(),
        target in data_address(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let ptr = base.wrapping_add(x);
        cpu.memory_mut().write(ptr as u16, target as u8);
        cpu.memory_mut().write(ptr.wrapping_add(1) as u16, (target >> 8) as u8);
        cpu.memory_mut().write(target, value);
        cpu.memory_mut().load(0x8000, &[0xA1, base]); // LDA (zp,X)

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 6);
    }
}

// ========== Absolute Indexed ==========

proptest! {
    /// Property: Absolute,X pays one extra cycle exactly when the page changes
    #[test]
    fn prop_absolute_x_penalty(base in data_address(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let effective = base.wrapping_add(x as u16);
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xBD, base as u8, (base >> 8) as u8]);

        let cycles = cpu.step().unwrap();

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, if crossed { 5 } else { 4 });
    }

    /// Property: Absolute,Y stores never pay the penalty
    #[test]
    fn prop_absolute_y_store_fixed_cost(
        base in data_address(),
        y in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.set_a(value);
        cpu.memory_mut().load(0x8000, &[0x99, base as u8, (base >> 8) as u8]);

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.memory().read(base.wrapping_add(y as u16)), value);
        prop_assert_eq!(cycles, 5);
    }

    /// Property: (zp),Y adds Y to the pointer and pays for a page change
    #[test]
    fn prop_indirect_indexed_penalty(
        zp in 0x10u8..0xF0u8,
        target in data_address(),
        y in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().write(zp as u16, target as u8);
        cpu.memory_mut().write(zp as u16 + 1, (target >> 8) as u8);
        let effective = target.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xB1, zp]);

        let cycles = cpu.step().unwrap();

        let crossed = (target & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, if crossed { 6 } else { 5 });
    }
}

// ========== Relative ==========

proptest! {
    /// Property: a taken branch lands at next PC + signed offset
    #[test]
    fn prop_branch_target(offset in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_pc(0x4000);
        cpu.memory_mut().load(0x4000, &[0x90, offset]); // BCC, carry clear

        let cycles = cpu.step().unwrap();

        let next = 0x4002u16;
        let target = next.wrapping_add(offset as i8 as u16);
        let crossed = (next & 0xFF00) != (target & 0xFF00);
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, if crossed { 4 } else { 3 });
    }
}
