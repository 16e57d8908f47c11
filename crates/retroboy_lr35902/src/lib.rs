//! Instruction-execution core for the Sharp LR35902, the CPU inside the
//! original Game Boy.
//!
//! The caller owns the fetch/decode loop: it reads an opcode and its
//! immediate bytes from memory, advances PC past them, and hands them to
//! [`Cpu::execute`]. The core mutates registers, flags and memory and
//! reports how many T-cycles the instruction took.

pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::{
    cb_mnemonic_of, immediate_len, is_implemented, list_implemented, mnemonic_of, Bus, Cpu,
    Flags, RegisterPair, Registers,
};
pub use error::CoreError;
pub use memory::FlatMemory;

/// Base address of the high I/O page targeted by the `LDH` instructions.
pub const IO_PAGE: u16 = 0xFF00;
