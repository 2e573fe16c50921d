//! Behavioral options for the CPU core.
//!
//! The defaults reproduce an NMOS 6502. The options exist for hosts that need
//! bit-exact compatibility with software or fixtures written against a
//! different convention.

/// Return address pushed by the BRK instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrkReturn {
    /// Push the address of BRK + 2, skipping the padding byte that follows
    /// the opcode. This is what the hardware does.
    #[default]
    SkipPadding,

    /// Push the address of BRK + 1, treating BRK as a one-byte instruction.
    NextByte,
}

impl BrkReturn {
    /// Number of bytes past the BRK opcode address that end up on the stack.
    pub(crate) fn offset(self) -> u16 {
        match self {
            BrkReturn::SkipPadding => 2,
            BrkReturn::NextByte => 1,
        }
    }
}

/// CPU configuration.
///
/// # Examples
///
/// ```
/// use cpu6502::{BrkReturn, CpuConfig};
///
/// let config = CpuConfig::default().with_brk_return(BrkReturn::NextByte);
/// assert_eq!(config.brk_return, BrkReturn::NextByte);
/// assert!(config.indirect_jump_page_wrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Address BRK pushes as its return address.
    pub brk_return: BrkReturn,

    /// Reproduce the NMOS `JMP ($xxFF)` bug: the pointer's high byte is read
    /// from `$xx00` instead of the next page.
    pub indirect_jump_page_wrap: bool,
}

impl CpuConfig {
    pub fn with_brk_return(mut self, brk_return: BrkReturn) -> Self {
        self.brk_return = brk_return;
        self
    }

    pub fn with_indirect_jump_page_wrap(mut self, enabled: bool) -> Self {
        self.indirect_jump_page_wrap = enabled;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            brk_return: BrkReturn::SkipPadding,
            indirect_jump_page_wrap: true,
        }
    }
}
