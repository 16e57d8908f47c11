use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flags::CARRY));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::HALF_CARRY, half > 0x0F);
        self.set_flag(Flags::CARRY, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let carry_in = use_carry && self.get_flag(Flags::CARRY);
        self.regs.a = self.sub_flags(value, carry_in);
    }

    /// Compare A with `value`, setting flags as if `A - value` was
    /// performed. A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, carry_in: bool) -> u8 {
        let a = self.regs.a;
        let borrow = i16::from(carry_in);

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        let full = a as i16 - value as i16 - borrow;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACT, true);
        self.set_flag(Flags::HALF_CARRY, half < 0);
        self.set_flag(Flags::CARRY, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::HALF_CARRY, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// The correction is chosen from the N/H/C flags left by the previous
    /// instruction, not from A alone. N is preserved, H is cleared. After
    /// an addition C is the carry out of `A + correction`; after a
    /// subtraction C is left as it was.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let subtract = self.get_flag(Flags::SUBTRACT);
        let half_carry = self.get_flag(Flags::HALF_CARRY);
        let carry = self.get_flag(Flags::CARRY);

        let mut correction: u8 = 0;
        let result = if !subtract {
            if (a & 0x0F) > 0x09 || half_carry {
                correction |= 0x06;
            }
            if a > 0x99 || carry {
                correction |= 0x60;
            }
            let sum = a as u16 + correction as u16;
            self.set_flag(Flags::CARRY, sum > 0xFF);
            sum as u8
        } else {
            if half_carry {
                correction |= 0x06;
            }
            if carry {
                correction |= 0x60;
            }
            a.wrapping_sub(correction)
        };

        self.set_flag(Flags::HALF_CARRY, false);
        self.set_flag(Flags::ZERO, result == 0);
        self.regs.a = result;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACT, false);
        self.set_flag(Flags::HALF_CARRY, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACT, true);
        self.set_flag(Flags::HALF_CARRY, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C
    /// the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flags::SUBTRACT, false);
        self.set_flag(Flags::HALF_CARRY, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::CARRY, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Signed 8-bit offset added to a 16-bit base, shared by `ADD SP,e8`
    /// and `LD HL,SP+e8`.
    ///
    /// Z and N are cleared; H and C come from the unsigned add of the low
    /// byte (carry out of bit 3 and bit 7).
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flags::HALF_CARRY, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flags::CARRY, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    #[inline]
    pub(super) fn alu_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::SUBTRACT, true);
        self.set_flag(Flags::HALF_CARRY, true);
    }

    #[inline]
    pub(super) fn alu_scf(&mut self) {
        self.set_flag(Flags::CARRY, true);
        self.set_flag(Flags::SUBTRACT, false);
        self.set_flag(Flags::HALF_CARRY, false);
    }

    #[inline]
    pub(super) fn alu_ccf(&mut self) {
        let carry = self.get_flag(Flags::CARRY);
        self.set_flag(Flags::CARRY, !carry);
        self.set_flag(Flags::SUBTRACT, false);
        self.set_flag(Flags::HALF_CARRY, false);
    }
}
