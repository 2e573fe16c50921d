//! Tests for the fetch-decode-execute loop: `step()`, `run_for_cycles()`,
//! cycle accounting and decode errors.

use cpu6502::{ExecutionError, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu
}

// ========== step() ==========

#[test]
fn test_step_returns_cycles_and_accumulates() {
    // LDA #$01 ; STA $0200 ; INC $0200
    let mut cpu = setup_cpu(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEE, 0x00, 0x02]);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.step(), Ok(6));

    assert_eq!(cpu.cycles(), 12);
    assert_eq!(cpu.pc(), 0x8008);
    assert_eq!(cpu.memory().read(0x0200), 0x02);
}

#[test]
fn test_decode_error_is_sticky() {
    let mut cpu = setup_cpu(&[0xEA, 0xFF]);

    cpu.step().unwrap();
    let expected = Err(ExecutionError::UnmappedOpcode {
        opcode: 0xFF,
        address: 0x8001,
    });

    assert_eq!(cpu.step(), expected);
    assert_eq!(cpu.step(), expected);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu(&[]);
    cpu.memory_mut().write(0xFFFF, 0xE8); // INX
    cpu.memory_mut().write(0x0000, 0xC8); // INY
    cpu.set_pc(0xFFFF);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0000);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0001);
    assert_eq!((cpu.x(), cpu.y()), (1, 1));
}

// ========== run_for_cycles() ==========

#[test]
fn test_run_exact_budget() {
    let mut cpu = setup_cpu(&[0xEA; 8]);

    assert_eq!(cpu.run_for_cycles(6), Ok(6));
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_run_overshoots_by_at_most_one_instruction() {
    // NOP (2) ; LDA $1234 (4)
    let mut cpu = setup_cpu(&[0xEA, 0xAD, 0x34, 0x12]);

    assert_eq!(cpu.run_for_cycles(3), Ok(6));
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_run_zero_budget_does_nothing() {
    let mut cpu = setup_cpu(&[0xFF]);

    assert_eq!(cpu.run_for_cycles(0), Ok(0));
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_run_stops_at_decode_error() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0x02]);

    let result = cpu.run_for_cycles(100);

    assert_eq!(
        result,
        Err(ExecutionError::UnmappedOpcode {
            opcode: 0x02,
            address: 0x8002,
        })
    );
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_run_services_pending_interrupt() {
    let mut cpu = setup_cpu(&[0xEA; 4]);
    cpu.memory_mut().write(0xFFFA, 0x00);
    cpu.memory_mut().write(0xFFFB, 0x90);
    cpu.memory_mut().write(0x9000, 0xEA);
    cpu.request_nmi();

    assert_eq!(cpu.run_for_cycles(8), Ok(9));
    assert_eq!(cpu.pc(), 0x9001);
}

// ========== Programs ==========

#[test]
fn test_countdown_loop() {
    // LDX #$05
    // loop: DEX ; BNE loop
    // STX $10
    let mut cpu = setup_cpu(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x86, 0x10]);

    // LDX (2) + 5 * DEX (2) + 4 taken BNE (3) + 1 untaken (2) + STX (3)
    let expected = 2 + 5 * 2 + 4 * 3 + 2 + 3;
    let mut total = 0u64;
    while cpu.pc() != 0x8007 {
        total += cpu.step().unwrap() as u64;
    }

    assert_eq!(total, expected);
    assert_eq!(cpu.x(), 0);
    assert!(cpu.flag_z());
}

#[test]
fn test_borrowed_memory_outlives_cpu() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xA9, 0x5A, 0x85, 0x00]); // LDA #$5A ; STA $00

    {
        let mut cpu = CPU::new(&mut memory);
        cpu.reset();
        cpu.run_for_cycles(5).unwrap();
        assert_eq!(cpu.a(), 0x5A);
    }

    assert_eq!(memory.read(0x0000), 0x5A);
}

#[test]
fn test_into_memory_returns_bus() {
    let mut cpu = setup_cpu(&[0xA9, 0x11, 0x85, 0x20]);
    cpu.run_for_cycles(5).unwrap();

    let memory = cpu.into_memory();

    assert_eq!(memory.read(0x0020), 0x11);
}
