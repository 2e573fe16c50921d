//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! SBC computes A - M - (1 - C). Carry acts as an inverted borrow: it is set
//! after the operation when no borrow was needed.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

fn sbc_immediate(a: u8, value: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE9, value]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

#[test]
fn test_sbc_no_borrow() {
    let cpu = sbc_immediate(0x50, 0x20, true);

    assert_eq!(cpu.a(), 0x30);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_sbc_borrow_in() {
    // Carry clear means an extra 1 is subtracted
    let cpu = sbc_immediate(0x50, 0x20, false);
    assert_eq!(cpu.a(), 0x2F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_equal_values_give_zero() {
    let cpu = sbc_immediate(0x42, 0x42, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let cpu = sbc_immediate(0x10, 0x20, true);

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_positive_minus_negative_overflows() {
    // 0x50 - 0xB0 = 80 - (-80) = 160, out of signed range
    let cpu = sbc_immediate(0x50, 0xB0, true);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_negative_minus_positive_overflows() {
    // 0xD0 - 0x70 = -48 - 112 = -160
    let cpu = sbc_immediate(0xD0, 0x70, true);

    assert_eq!(cpu.a(), 0x60);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_zero_minus_one_with_borrow() {
    let cpu = sbc_immediate(0x00, 0x01, false);

    assert_eq!(cpu.a(), 0xFE);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xF9, 0xF0, 0x12]);
    cpu.memory_mut().write(0x1300, 0x01);
    cpu.set_y(0x10);
    cpu.set_a(0x05);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x04);
    assert_eq!(cpu.cycles(), 5);
}
