use thiserror::Error;

/// Errors reported by the dispatch engine.
///
/// Instruction semantics themselves are total; these only describe a
/// malformed invocation. Neither variant mutates CPU or memory state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unimplemented opcode: 0x{0:02X}")]
    UnimplementedOpcode(u8),
    #[error("opcode 0x{opcode:02X} takes {expected} immediate byte(s), got {got}")]
    InvalidImmediateCount {
        opcode: u8,
        expected: usize,
        got: usize,
    },
}
