use crate::cpu::{Bus, Cpu, Flags};

impl Cpu {
    /// Dispatch on the ALU operation encoded in bits 3-5, shared by the
    /// register rows (0x80-0xBF) and the immediate column (0xC6-0xFE).
    fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    pub(in crate::cpu) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.alu_op(opcode >> 3, value);

        if src == 6 { 8 } else { 4 }
    }

    pub(in crate::cpu) fn exec_alu_imm(&mut self, _bus: &mut dyn Bus, opcode: u8, value: u8) -> u8 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        self.alu_op(opcode >> 3, value);
        8
    }

    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let (result, carry_out) = match opcode {
            // RLCA: bit 7 to carry and bit 0.
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            // RRCA: bit 0 to carry and bit 7.
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            // RLA: through carry.
            0x17 => {
                let carry_in = u8::from(self.get_flag(Flags::CARRY));
                ((a << 1) | carry_in, a & 0x80 != 0)
            }
            // RRA: through carry.
            _ => {
                let carry_in = if self.get_flag(Flags::CARRY) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, a & 0x01 != 0)
            }
        };

        self.regs.a = result;
        // Z is always cleared here, unlike the CB-prefixed forms.
        self.clear_flags();
        self.set_flag(Flags::CARRY, carry_out);
        4
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_rp(opcode >> 4);
        self.alu_add16_hl(value);
        8
    }

    pub(in crate::cpu) fn exec_add_sp_e8(&mut self, _bus: &mut dyn Bus, _opcode: u8, imm: u8) -> u8 {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_e8(&mut self, _bus: &mut dyn Bus, _opcode: u8, imm: u8) -> u8 {
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.alu_daa();
        4
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.alu_cpl();
        4
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.alu_scf();
        4
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.alu_ccf();
        4
    }
}
