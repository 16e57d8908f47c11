use super::{Bus, Cpu, Flags};

/// CB-prefixed instructions (bit operations, shifts, and rotates).
///
/// Every CB opcode splits into `x = cb >> 6`, `y = (cb >> 3) & 7` and
/// `z = cb & 7`, where `z` selects the operand (6 = (HL)). Cycle counts
/// include the prefix byte.
impl Cpu {
    /// Rotates, shifts and SWAP (CB 0x00-0x3F).
    pub(in crate::cpu) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, cb: u8) -> u8 {
        debug_assert!(cb < 0x40);
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z);
        let carry_in = self.get_flag(Flags::CARRY);

        let (result, carry_out) = match y {
            // RLC r
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC r
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL r
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            // RR r
            3 => {
                let top = if carry_in { 0x80 } else { 0 };
                ((value >> 1) | top, value & 0x01 != 0)
            }
            // SLA r
            4 => (value << 1, value & 0x80 != 0),
            // SRA r: bit 7 is preserved.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP r
            6 => (value.rotate_left(4), false),
            // SRL r
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::CARRY, carry_out);
        self.write_reg8(bus, z, result);

        if z == 6 { 16 } else { 8 }
    }

    /// BIT b, r (CB 0x40-0x7F). C is preserved, H is set, N is cleared.
    pub(in crate::cpu) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, cb: u8) -> u8 {
        debug_assert!((0x40..=0x7F).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z);
        self.set_flag(Flags::ZERO, value & (1 << bit) == 0);
        self.set_flag(Flags::SUBTRACT, false);
        self.set_flag(Flags::HALF_CARRY, true);

        // Read-only access to (HL): one memory cycle fewer than RES/SET.
        if z == 6 { 12 } else { 8 }
    }

    /// RES b, r (CB 0x80-0xBF). No flags are affected.
    pub(in crate::cpu) fn exec_cb_res(&mut self, bus: &mut dyn Bus, cb: u8) -> u8 {
        debug_assert!((0x80..=0xBF).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z) & !(1 << bit);
        self.write_reg8(bus, z, value);

        if z == 6 { 16 } else { 8 }
    }

    /// SET b, r (CB 0xC0-0xFF). No flags are affected.
    pub(in crate::cpu) fn exec_cb_set(&mut self, bus: &mut dyn Bus, cb: u8) -> u8 {
        debug_assert!(cb >= 0xC0);
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z) | (1 << bit);
        self.write_reg8(bus, z, value);

        if z == 6 { 16 } else { 8 }
    }
}
