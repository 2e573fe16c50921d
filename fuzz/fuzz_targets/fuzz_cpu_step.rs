//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, memory neighbourhood and interrupt
//! lines, then steps a few times. Decode errors are expected; panics and
//! broken step invariants are not.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{BrkReturn, CpuConfig, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte; bits 4 and 5 are ignored by the CPU
    status: u8,
    irq: bool,
    nmi: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    brk_next_byte: bool,
    indirect_jump_page_wrap: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (up to a few instructions)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
    /// NMI, reset and IRQ vectors
    vectors: [u8; 6],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    config: FuzzConfig,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(0xFFFA, &input.memory.vectors);
    memory.load(0x8000, &input.memory.program);

    let brk_return = if input.config.brk_next_byte {
        BrkReturn::NextByte
    } else {
        BrkReturn::SkipPadding
    };
    let config = CpuConfig::default()
        .with_brk_return(brk_return)
        .with_indirect_jump_page_wrap(input.config.indirect_jump_page_wrap);

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.irq {
        cpu.request_irq();
    }
    if input.cpu_state.nmi {
        cpu.request_nmi();
    }

    for _ in 0..(input.steps % 8) + 1 {
        let pc = cpu.pc();
        let before = cpu.cycles();

        match cpu.step() {
            Ok(cycles) => {
                assert!((2..=7).contains(&cycles), "step took {} cycles", cycles);
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(_) => {
                // A failed decode changes nothing
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.cycles(), before);
                break;
            }
        }

        assert_eq!(cpu.status() & 0b0011_0000, 0b0010_0000);
    }
});
