//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields)
//! - **Pending interrupts**: IRQ and NMI request latches
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! Each call to `step()` runs through the same sequence:
//!
//! 1. Service a pending NMI, or a pending IRQ when I is clear (7 cycles)
//! 2. Fetch the opcode at PC and decode it through the opcode table
//! 3. Resolve the operand, consuming the operand bytes
//! 4. Execute the operation
//! 5. Charge base cycles plus page-crossing and branch penalties
//!
//! `run_for_cycles()` repeats `step()` until a cycle budget is used up.

use crate::addressing::Operand;
use crate::config::CpuConfig;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::interrupts::RESET_VECTOR;
use crate::opcodes::{lookup, Operation};
use crate::{ExecutionError, MemoryBus};

/// 6502 CPU state and execution context.
///
/// The CPU is generic over its memory via the `MemoryBus` trait. It holds the
/// bus for its whole lifetime but never assumes what backs it: `M` can be an
/// owned memory map or a `&mut` handle to one.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x0000); // zeroed until reset
///
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Decimal mode flag (stored only, arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow, clear on borrow)
    pub(crate) flag_c: bool,

    /// IRQ requested by the host, consumed at the next instruction boundary
    pub(crate) irq_pending: bool,

    /// NMI requested by the host, consumed at the next instruction boundary
    pub(crate) nmi_pending: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and default configuration.
    ///
    /// All registers, flags and the program counter start at zero. Call
    /// [`reset`](Self::reset) to load PC from the reset vector.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit configuration.
    ///
    /// ```
    /// use cpu6502::{BrkReturn, CpuConfig, CPU, FlatMemory};
    ///
    /// let config = CpuConfig::default().with_brk_return(BrkReturn::NextByte);
    /// let cpu = CPU::with_config(FlatMemory::new(), config);
    /// assert_eq!(cpu.config().brk_return, BrkReturn::NextByte);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            irq_pending: false,
            nmi_pending: false,
            cycles: 0,
            config,
            memory,
        }
    }

    /// Resets the processor.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFF
    /// - A, X, Y and all status flags are cleared
    /// - Pending interrupt requests are dropped
    ///
    /// The cycle counter keeps running across resets.
    pub fn reset(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        self.sp = 0xFF;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.irq_pending = false;
        self.nmi_pending = false;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Executes one instruction (or services one interrupt) and returns the
    /// number of cycles it took.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnmappedOpcode`] when the byte at PC is not a
    /// documented opcode. PC is left pointing at that byte and no cycles are
    /// charged; calling `step()` again fails the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnmappedOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if let Some(interrupt) = self.take_pending_interrupt() {
            let cycles = self.service_interrupt(interrupt);
            self.cycles += cycles as u64;
            return Ok(cycles);
        }

        let address = self.pc;
        let byte = self.memory.read(address);
        let opcode = match lookup(byte, address) {
            Ok(opcode) => opcode,
            Err(e) => {
                log::warn!("{}", e);
                return Err(e);
            }
        };
        self.pc = self.pc.wrapping_add(1);

        log::trace!(
            "{:04X}  {} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            address,
            opcode.operation,
            opcode.mode,
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp,
            self.cycles
        );

        let operand = self.resolve_operand(opcode.mode);
        let mut cycles = opcode.base_cycles + self.execute(opcode.operation, operand);

        if let Operand::Memory {
            page_crossed: true, ..
        } = operand
        {
            if opcode.operation.has_page_penalty() {
                cycles += 1;
            }
        }

        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Dispatches one decoded operation. Returns extra cycles beyond the base
    /// count that the operation itself determines (taken branches).
    fn execute(&mut self, operation: Operation, operand: Operand) -> u8 {
        match operation {
            // Load/store
            Operation::Lda => load_store::lda(self, operand),
            Operation::Ldx => load_store::ldx(self, operand),
            Operation::Ldy => load_store::ldy(self, operand),
            Operation::Sta => load_store::sta(self, operand),
            Operation::Stx => load_store::stx(self, operand),
            Operation::Sty => load_store::sty(self, operand),

            // Arithmetic and logic
            Operation::Adc => alu::adc(self, operand),
            Operation::Sbc => alu::sbc(self, operand),
            Operation::And => alu::and(self, operand),
            Operation::Ora => alu::ora(self, operand),
            Operation::Eor => alu::eor(self, operand),
            Operation::Cmp => alu::cmp(self, operand),
            Operation::Cpx => alu::cpx(self, operand),
            Operation::Cpy => alu::cpy(self, operand),
            Operation::Bit => alu::bit(self, operand),

            // Shifts and rotates
            Operation::Asl => shifts::asl(self, operand),
            Operation::Lsr => shifts::lsr(self, operand),
            Operation::Rol => shifts::rol(self, operand),
            Operation::Ror => shifts::ror(self, operand),

            // Increment/decrement
            Operation::Inc => inc_dec::inc(self, operand),
            Operation::Dec => inc_dec::dec(self, operand),
            Operation::Inx => inc_dec::inx(self),
            Operation::Iny => inc_dec::iny(self),
            Operation::Dex => inc_dec::dex(self),
            Operation::Dey => inc_dec::dey(self),

            // Register transfers
            Operation::Tax => transfer::tax(self),
            Operation::Tay => transfer::tay(self),
            Operation::Txa => transfer::txa(self),
            Operation::Tya => transfer::tya(self),
            Operation::Tsx => transfer::tsx(self),
            Operation::Txs => transfer::txs(self),

            // Flags
            Operation::Clc => flags::clc(self),
            Operation::Sec => flags::sec(self),
            Operation::Cli => flags::cli(self),
            Operation::Sei => flags::sei(self),
            Operation::Clv => flags::clv(self),
            Operation::Cld => flags::cld(self),
            Operation::Sed => flags::sed(self),

            // Stack
            Operation::Pha => stack::pha(self),
            Operation::Php => stack::php(self),
            Operation::Pla => stack::pla(self),
            Operation::Plp => stack::plp(self),

            // Control flow
            Operation::Jmp => control::jmp(self, operand),
            Operation::Jsr => control::jsr(self, operand),
            Operation::Rts => control::rts(self),
            Operation::Rti => control::rti(self),
            Operation::Brk => control::brk(self),
            Operation::Nop => {}

            // Branches report their own timing
            Operation::Bcc => return branches::branch(self, !self.flag_c, operand),
            Operation::Bcs => return branches::branch(self, self.flag_c, operand),
            Operation::Bne => return branches::branch(self, !self.flag_z, operand),
            Operation::Beq => return branches::branch(self, self.flag_z, operand),
            Operation::Bpl => return branches::branch(self, !self.flag_n, operand),
            Operation::Bmi => return branches::branch(self, self.flag_n, operand),
            Operation::Bvc => return branches::branch(self, !self.flag_v, operand),
            Operation::Bvs => return branches::branch(self, self.flag_v, operand),
        }
        0
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until at least `cycle_budget` cycles have been
    /// consumed. Instructions are never split, so the result may overshoot
    /// the budget by up to one instruction. A budget of 0 executes nothing.
    ///
    /// # Errors
    ///
    /// Stops at the first decode error and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.run_for_cycles(7), Ok(8));
    /// assert_eq!(cpu.pc(), 0x8004);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut consumed = 0u64;

        while consumed < cycle_budget {
            consumed += self.step()? as u64;
        }

        Ok(consumed)
    }

    // ========== Operand and Flag Helpers ==========

    /// Reads the value an operand refers to. Implied operands read as 0.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Memory { address, .. } => self.memory.read(address),
            Operand::Implied => 0,
        }
    }

    /// Writes back to the location an operand refers to.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory { address, .. } => self.memory.write(address, value),
            Operand::Implied => {}
        }
    }

    /// Updates Z and N from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break, always 0 here; only pushed copies carry it)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_flag_c(true);
    /// cpu.set_flag_n(true);
    /// assert_eq!(cpu.status(), 0b1010_0001);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration this CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loading programs and poking
    /// memory-mapped state between steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back the memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads all six flags from a packed status byte. Bits 4 and 5 are ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}
