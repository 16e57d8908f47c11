use lazy_static::lazy_static;

use super::{mnemonic_of, Bus, Cpu};
use crate::error::CoreError;

type Implied = fn(&mut Cpu, &mut dyn Bus, u8) -> u8;
type WithByte = fn(&mut Cpu, &mut dyn Bus, u8, u8) -> u8;
type WithWord = fn(&mut Cpu, &mut dyn Bus, u8, u16) -> u8;

/// One slot of the primary opcode table.
///
/// The variant fixes how many immediate bytes the instruction takes, so the
/// operand count is checked once in `execute` and handlers receive their
/// operand already decoded. Every handler also gets its own opcode, which
/// lets one function serve a whole row of the table.
#[derive(Clone, Copy)]
enum Handler {
    Implied(Implied),
    Byte(WithByte),
    /// Two-byte immediates arrive as `[low, high]`.
    Word(WithWord),
}

impl Handler {
    #[inline]
    fn immediate_len(self) -> usize {
        match self {
            Handler::Implied(_) => 0,
            Handler::Byte(_) => 1,
            Handler::Word(_) => 2,
        }
    }
}

lazy_static! {
    static ref PRIMARY: [Option<Handler>; 256] = std::array::from_fn(|i| primary_handler(i as u8));
    /// The CB space is dense: every opcode decodes to a valid instruction.
    static ref EXTENDED: [Implied; 256] = std::array::from_fn(|i| extended_handler(i as u8));
}

fn primary_handler(opcode: u8) -> Option<Handler> {
    use Handler::{Byte, Implied, Word};

    let handler = match opcode {
        0x00 => Implied(Cpu::exec_nop),
        0x10 => Byte(Cpu::exec_stop),
        0x76 => Implied(Cpu::exec_halt),
        0xF3 => Implied(Cpu::exec_di),
        0xFB => Implied(Cpu::exec_ei),

        // 8-bit loads.
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Byte(Cpu::exec_ld_r_d8),
        0x40..=0x7F => Implied(Cpu::exec_ld_r_r),
        0x02 | 0x12 | 0x22 | 0x32 => Implied(Cpu::exec_ld_indirect_a),
        0x0A | 0x1A | 0x2A | 0x3A => Implied(Cpu::exec_ld_a_indirect),
        0xE0 | 0xF0 => Byte(Cpu::exec_ldh_a8),
        0xE2 | 0xF2 => Implied(Cpu::exec_ldh_c),
        0xEA | 0xFA => Word(Cpu::exec_ld_a16_a),

        // 16-bit loads and stack.
        0x01 | 0x11 | 0x21 | 0x31 => Word(Cpu::exec_ld_rr_d16),
        0x08 => Word(Cpu::exec_ld_a16_sp),
        0xF8 => Byte(Cpu::exec_ld_hl_sp_e8),
        0xF9 => Implied(Cpu::exec_ld_sp_hl),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Implied(Cpu::exec_push_rr),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Implied(Cpu::exec_pop_rr),

        // 8-bit arithmetic and logic.
        0x80..=0xBF => Implied(Cpu::exec_alu_reg_group),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Byte(Cpu::exec_alu_imm),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Implied(Cpu::exec_inc8_reg),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Implied(Cpu::exec_dec8_reg),
        0x27 => Implied(Cpu::exec_daa),
        0x2F => Implied(Cpu::exec_cpl),
        0x37 => Implied(Cpu::exec_scf),
        0x3F => Implied(Cpu::exec_ccf),

        // 16-bit arithmetic.
        0x09 | 0x19 | 0x29 | 0x39 => Implied(Cpu::exec_add_hl_rr),
        0x03 | 0x13 | 0x23 | 0x33 => Implied(Cpu::exec_inc16_rr),
        0x0B | 0x1B | 0x2B | 0x3B => Implied(Cpu::exec_dec16_rr),
        0xE8 => Byte(Cpu::exec_add_sp_e8),

        // Rotates on A; everything else lives behind the CB prefix.
        0x07 | 0x0F | 0x17 | 0x1F => Implied(Cpu::exec_rotate_a),
        0xCB => Byte(Cpu::exec_prefixed),

        // Control flow.
        0x18 => Byte(Cpu::exec_jr),
        0x20 | 0x28 | 0x30 | 0x38 => Byte(Cpu::exec_jr_cc),
        0xC3 => Word(Cpu::exec_jp_a16),
        0xC2 | 0xCA | 0xD2 | 0xDA => Word(Cpu::exec_jp_cc),
        0xE9 => Implied(Cpu::exec_jp_hl),
        0xCD => Word(Cpu::exec_call_a16),
        0xC4 | 0xCC | 0xD4 | 0xDC => Word(Cpu::exec_call_cc),
        0xC9 => Implied(Cpu::exec_ret),
        0xC0 | 0xC8 | 0xD0 | 0xD8 => Implied(Cpu::exec_ret_cc),
        0xD9 => Implied(Cpu::exec_reti),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Implied(Cpu::exec_rst),

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        _ => return None,
    };
    Some(handler)
}

fn extended_handler(cb: u8) -> Implied {
    match cb >> 6 {
        0 => Cpu::exec_cb_shift,
        1 => Cpu::exec_cb_bit,
        2 => Cpu::exec_cb_res,
        _ => Cpu::exec_cb_set,
    }
}

impl Cpu {
    /// Execute one instruction from the primary opcode space.
    ///
    /// `immediates` are the operand bytes that followed the opcode in
    /// memory, and PC must already point past them. Returns the number of
    /// T-cycles consumed. On error nothing is mutated.
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        immediates: &[u8],
    ) -> Result<u8, CoreError> {
        let Some(handler) = PRIMARY[opcode as usize] else {
            log::debug!(
                "rejected unimplemented opcode 0x{opcode:02X} (PC=0x{pc:04X})",
                pc = self.regs.pc
            );
            return Err(CoreError::UnimplementedOpcode(opcode));
        };

        let cycles = match (handler, immediates) {
            (Handler::Implied(f), &[]) => f(self, bus, opcode),
            (Handler::Byte(f), &[n]) => f(self, bus, opcode, n),
            (Handler::Word(f), &[lo, hi]) => f(self, bus, opcode, u16::from_le_bytes([lo, hi])),
            _ => {
                let expected = handler.immediate_len();
                log::debug!(
                    "opcode 0x{opcode:02X} expects {expected} immediate byte(s), got {got}",
                    got = immediates.len()
                );
                return Err(CoreError::InvalidImmediateCount {
                    opcode,
                    expected,
                    got: immediates.len(),
                });
            }
        };

        self.apply_ime_delay();
        log::trace!(
            "{opcode:02X} {:<14} {cycles:>2} cycles",
            mnemonic_of(opcode).unwrap_or("?")
        );
        Ok(cycles)
    }

    /// Execute one instruction from the CB-prefixed space.
    ///
    /// Equivalent to `execute(bus, 0xCB, &[cb])`. The returned cycle count
    /// includes the prefix byte.
    pub fn execute_extended<B: Bus>(&mut self, bus: &mut B, cb: u8) -> Result<u8, CoreError> {
        self.execute(bus, 0xCB, &[cb])
    }

    pub(in crate::cpu) fn exec_prefixed(&mut self, bus: &mut dyn Bus, _opcode: u8, cb: u8) -> u8 {
        EXTENDED[cb as usize](self, bus, cb)
    }
}

/// Whether the primary opcode has a handler.
pub fn is_implemented(opcode: u8) -> bool {
    PRIMARY[opcode as usize].is_some()
}

/// All implemented primary opcodes in ascending order.
pub fn list_implemented() -> Vec<u8> {
    (0..=u8::MAX).filter(|&opcode| is_implemented(opcode)).collect()
}

/// Number of immediate bytes that follow `opcode`, or `None` for an empty
/// slot. Callers use this to size the slice passed to [`Cpu::execute`].
pub fn immediate_len(opcode: u8) -> Option<usize> {
    PRIMARY[opcode as usize].map(Handler::immediate_len)
}
