//! Klaus Dormann's 6502 Functional Test
//!
//! Runs the functional test suite from
//! https://github.com/Klaus2m5/6502_65C02_functional_tests against the CPU.
//! The image used is the build with decimal mode tests disabled, since BCD
//! arithmetic is not emulated.
//!
//! ## How the Test Works
//!
//! 1. Load the 64KB binary image at $0000 with the reset vector at $0400
//! 2. Reset the CPU
//! 3. Step until PC reaches the success address ($336D) or the program
//!    traps itself in a `JMP *` / branch-to-self loop somewhere else
//!
//! The fixture is not checked in. Place it at
//! `tests/fixtures/6502_functional_test_no_decimal.bin` and run with
//! `cargo test -- --ignored`. Without the fixture the test fails.

use cpu6502::{FlatMemory, MemoryBus, CPU};

const FIXTURE: &str = "tests/fixtures/6502_functional_test_no_decimal.bin";

/// PC value once every test in the suite has passed
const SUCCESS_ADDRESS: u16 = 0x336D;

/// Entry point for the functional test
const ENTRY_POINT: u16 = 0x0400;

/// Upper bound on executed instructions before the run is declared hung
const MAX_STEPS: u64 = 100_000_000;

/// Format CPU state for diagnostic output
fn format_cpu_state(cpu: &CPU<FlatMemory>) -> String {
    format!(
        "PC:${:04X} A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:[{}{}{}{}{}{}] Cycles:{}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        if cpu.flag_n() { 'N' } else { '-' },
        if cpu.flag_v() { 'V' } else { '-' },
        if cpu.flag_d() { 'D' } else { '-' },
        if cpu.flag_i() { 'I' } else { '-' },
        if cpu.flag_z() { 'Z' } else { '-' },
        if cpu.flag_c() { 'C' } else { '-' },
        cpu.cycles()
    )
}

/// Steps until success, a trap at some other address, or the step limit.
///
/// Returns the PC where execution settled.
fn run_until_trapped(cpu: &mut CPU<FlatMemory>) -> Result<u16, String> {
    for _ in 0..MAX_STEPS {
        let pc = cpu.pc();
        if pc == SUCCESS_ADDRESS {
            return Ok(pc);
        }

        cpu.step()
            .map_err(|e| format!("{} ({})", e, format_cpu_state(cpu)))?;

        if cpu.pc() == pc {
            return Ok(pc);
        }
    }

    Err(format!(
        "Timeout after {} steps ({})",
        MAX_STEPS,
        format_cpu_state(cpu)
    ))
}

/// Loads a functional test image at $0000 and resets into it.
fn load_fixture(path: &str) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    match cpu.load_image(path, 0x0000, ENTRY_POINT) {
        Ok(len) => assert_eq!(len, 0x10000, "fixture must be a full 64KB image"),
        Err(e) => panic!("functional test fixture missing: {}", e),
    }
    cpu
}

#[test]
#[should_panic(expected = "functional test fixture missing")]
fn missing_fixture_fails_loudly() {
    load_fixture("tests/fixtures/no_such_image.bin");
}

#[test]
#[ignore = "slow functional test, needs the fixture binary - run with --ignored"]
fn klaus_6502_functional_test() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut cpu = load_fixture(FIXTURE);

    assert_eq!(cpu.pc(), ENTRY_POINT);
    assert_eq!(cpu.memory().read(ENTRY_POINT), 0xD8, "entry should be CLD");

    let final_pc = run_until_trapped(&mut cpu).unwrap_or_else(|e| panic!("{}", e));

    if final_pc != SUCCESS_ADDRESS {
        for addr in final_pc.wrapping_sub(4)..=final_pc.wrapping_add(4) {
            let marker = if addr == final_pc { " <-- PC" } else { "" };
            eprintln!("  ${:04X}: ${:02X}{}", addr, cpu.memory().read(addr), marker);
        }
        panic!(
            "trapped at ${:04X} (expected ${:04X}): {}",
            final_pc,
            SUCCESS_ADDRESS,
            format_cpu_state(&cpu)
        );
    }
}
