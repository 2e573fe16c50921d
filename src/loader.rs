//! Program image loading.
//!
//! Copies a raw binary verbatim into memory at a chosen offset and points the
//! reset vector at the entry point. Loading is all-or-nothing: the file is
//! read and its size checked before the first byte is written.
//!
//! # Example
//!
//! ```
//! use cpu6502::{loader, CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! let program = [0xA9, 0x01, 0x69, 0x01]; // LDA #$01 ; ADC #$01
//! loader::load_bytes(&mut memory, &program, 0x0600, 0x0600).unwrap();
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset();
//! cpu.run_for_cycles(4).unwrap();
//! assert_eq!(cpu.a(), 0x02);
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::interrupts::RESET_VECTOR;
use crate::{MemoryBus, CPU};

/// Size of the 6502 address space.
pub const ADDRESS_SPACE: usize = 0x10000;

/// Errors raised while loading a program image.
#[derive(Debug)]
pub enum LoadError {
    /// The image file could not be read.
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The image does not fit between `offset` and the top of memory.
    ImageTooLarge { offset: u16, len: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read program image {}: {}", path.display(), source)
            }
            LoadError::ImageTooLarge { offset, len } => {
                write!(
                    f,
                    "Program image of {} bytes does not fit at offset 0x{:04X} \
                     ({} bytes available)",
                    len,
                    offset,
                    ADDRESS_SPACE - *offset as usize
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::ImageTooLarge { .. } => None,
        }
    }
}

/// Copies `bytes` to `offset` and writes `entry` into the reset vector.
///
/// Returns the number of bytes copied. The reset vector is written after the
/// image, so it wins over whatever the image holds at 0xFFFC/0xFFFD.
///
/// # Errors
///
/// [`LoadError::ImageTooLarge`] if the image would run past 0xFFFF. Memory is
/// untouched in that case.
pub fn load_bytes<M: MemoryBus + ?Sized>(
    memory: &mut M,
    bytes: &[u8],
    offset: u16,
    entry: u16,
) -> Result<usize, LoadError> {
    if bytes.len() > ADDRESS_SPACE - offset as usize {
        return Err(LoadError::ImageTooLarge {
            offset,
            len: bytes.len(),
        });
    }

    for (i, &byte) in bytes.iter().enumerate() {
        memory.write(offset.wrapping_add(i as u16), byte);
    }

    memory.write(RESET_VECTOR, entry as u8);
    memory.write(RESET_VECTOR.wrapping_add(1), (entry >> 8) as u8);

    log::debug!(
        "loaded {} bytes at ${:04X}, entry ${:04X}",
        bytes.len(),
        offset,
        entry
    );

    Ok(bytes.len())
}

/// Reads the file at `path` and loads it with [`load_bytes`].
///
/// # Errors
///
/// [`LoadError::Io`] if the file is missing or unreadable,
/// [`LoadError::ImageTooLarge`] if it does not fit. Memory is untouched on
/// either error.
pub fn load_image<M: MemoryBus + ?Sized>(
    memory: &mut M,
    path: impl AsRef<Path>,
    offset: u16,
    entry: u16,
) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(memory, &bytes, offset, entry)
}

impl<M: MemoryBus> CPU<M> {
    /// Loads an image file through this CPU's bus, then resets the CPU so it
    /// starts at `entry`.
    ///
    /// On error neither memory nor CPU state is modified.
    pub fn load_image(
        &mut self,
        path: impl AsRef<Path>,
        offset: u16,
        entry: u16,
    ) -> Result<usize, LoadError> {
        let len = load_image(&mut self.memory, path, offset, entry)?;
        self.reset();
        Ok(len)
    }

    /// Loads an in-memory image through this CPU's bus, then resets the CPU.
    pub fn load_program(
        &mut self,
        bytes: &[u8],
        offset: u16,
        entry: u16,
    ) -> Result<usize, LoadError> {
        let len = load_bytes(&mut self.memory, bytes, offset, entry)?;
        self.reset();
        Ok(len)
    }
}
