//! Instruction routines, one file per family.
//!
//! Every routine is a free function over `&mut CPU<M>`. Routines that use an
//! operand get it already resolved by `CPU::resolve_operand`; none of them
//! touch PC for operand fetches or count cycles. Branches are the exception
//! on timing: they report their own taken/page-cross penalty.

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
