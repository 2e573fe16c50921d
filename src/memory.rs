//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory backing it executes against. The CPU never owns raw bytes; it only
//! calls `read`/`write` on whatever bus it was given:
//!
//! - Flat 64KB RAM (`FlatMemory`, provided)
//! - Memory-mapped I/O supplied by the host
//! - Test doubles that record or script accesses
//!
//! Every 16-bit address is valid for reads and writes. The bus can be owned
//! by the CPU or lent to it as `&mut T`.

/// Byte-wide access to the 16-bit address space.
///
/// Both methods are total: there is no bus error on a 6502, so an
/// implementation answers every address.
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0200, 0x99);
/// assert_eq!(mem.read(0x0200), 0x99);
/// ```
///
/// ## Mapping a custom address space
///
/// A 2KB RAM mirrored four times below 0x2000, with an open bus that reads
/// back 0xFF elsewhere:
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             _ => 0xFF,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut bus = MirroredRam { ram: [0; 0x0800] };
/// bus.write(0x0801, 0x42);
/// assert_eq!(bus.read(0x0001), 0x42);
/// assert_eq!(bus.read(0x4000), 0xFF);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`. Unmapped addresses may return anything,
    /// but must not panic.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. Writes to ROM or unmapped space are dropped.
    fn write(&mut self, addr: u16, value: u8);
}

/// Lets a CPU borrow a bus instead of owning it.
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0xEA); // NOP
///
/// {
///     let mut cpu = CPU::new(&mut memory);
///     cpu.set_pc(0x8000);
///     cpu.step().unwrap();
/// }
///
/// // The host still owns the backing store
/// assert_eq!(memory.read(0x8000), 0xEA);
/// ```
impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// 64KB of plain RAM, zeroed on creation.
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` verbatim starting at `offset`, wrapping past 0xFFFF.
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, offset: u16, bytes: &[u8]) {
        let mut addr = offset;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
