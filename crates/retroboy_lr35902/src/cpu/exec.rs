//! Instruction handlers for the primary opcode space, grouped by family.
//!
//! Every handler receives the opcode it was dispatched for so that one
//! function can serve a whole row of the opcode table, decoding register
//! and condition fields from the opcode bits. Immediates arrive already
//! decoded; PC has been advanced past them by the caller.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
