use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Read the register pair selected for PUSH/POP: 0=BC, 1=DE, 2=HL, 3=AF.
    fn read_rp2(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        }
    }

    pub(in crate::cpu) fn exec_push_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.read_rp2(opcode >> 4);
        self.push_u16(bus, value);
        16
    }

    pub(in crate::cpu) fn exec_pop_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            // POP AF drops the low nibble of F.
            _ => self.regs.set_af(value),
        }
        12
    }
}
