use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Only the upper nibble exists; bits 0-3 of F always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0x80;
        const SUBTRACT = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY = 0x10;
    }
}

/// The four 16-bit views over pairs of 8-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterPair {
    AF,
    BC,
    DE,
    HL,
}

/// Registers for the Game Boy CPU (LR35902).
///
/// Pairs (AF, BC, DE, HL) have no storage of their own; the first-named
/// register is the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    pub fn pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::AF => self.af(),
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
        }
    }

    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        match pair {
            RegisterPair::AF => self.set_af(value),
            RegisterPair::BC => self.set_bc(value),
            RegisterPair::DE => self.set_de(value),
            RegisterPair::HL => self.set_hl(value),
        }
    }

    /// True if every bit in `mask` is set in F.
    #[inline]
    pub fn flag(&self, mask: Flags) -> bool {
        self.f.contains(mask)
    }

    #[inline]
    pub fn set_flag(&mut self, mask: Flags, value: bool) {
        self.f.set(mask, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_big_endian_views() {
        let mut regs = Registers::default();
        regs.set_pair(RegisterPair::DE, 0xABCD);
        assert_eq!(regs.d, 0xAB);
        assert_eq!(regs.e, 0xCD);

        regs.h = 0x12;
        regs.l = 0x34;
        assert_eq!(regs.pair(RegisterPair::HL), 0x1234);
    }

    #[test]
    fn af_drops_low_nibble_of_f() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f.bits(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn set_flag_leaves_other_flags_alone() {
        let mut regs = Registers {
            f: Flags::ZERO | Flags::CARRY,
            ..Registers::default()
        };
        regs.set_flag(Flags::HALF_CARRY, true);
        regs.set_flag(Flags::ZERO, false);
        assert_eq!(regs.f, Flags::HALF_CARRY | Flags::CARRY);
        assert!(regs.flag(Flags::CARRY));
        assert!(!regs.flag(Flags::SUBTRACT));
    }
}
