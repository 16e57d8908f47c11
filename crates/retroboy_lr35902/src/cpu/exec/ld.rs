use crate::cpu::{Bus, Cpu};
use crate::IO_PAGE;

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, _bus: &mut dyn Bus, opcode: u8, value: u16) -> u8 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        self.write_rp(opcode >> 4, value);
        12
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8, value: u8) -> u8 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let reg = (opcode >> 3) & 0x07;
        self.write_reg8(bus, reg, value);

        if reg == 6 { 12 } else { 8 }
    }

    /// LD r1, r2 for 0x40-0x7F, except 0x76 which is HALT.
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);

        if dst == 6 || src == 6 { 8 } else { 4 }
    }

    /// Address for the (BC)/(DE)/(HL+)/(HL-) column, with the HL
    /// post-adjustment applied after the address has been taken.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_add(1));
                addr
            }
            _ => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_sub(1));
                addr
            }
        }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        8
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        8
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8, addr: u16) -> u8 {
        bus.write16(addr, self.regs.sp);
        20
    }

    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8, offset: u8) -> u8 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let addr = IO_PAGE.wrapping_add(offset as u16);
        match opcode {
            0xE0 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        12
    }

    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = IO_PAGE.wrapping_add(self.regs.c as u16);
        match opcode {
            0xE2 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        8
    }

    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8, addr: u16) -> u8 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        match opcode {
            0xEA => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        16
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.regs.sp = self.regs.hl();
        8
    }
}
