use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_jr(&mut self, _bus: &mut dyn Bus, _opcode: u8, offset: u8) -> u8 {
        self.jr(offset, true)
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, _bus: &mut dyn Bus, opcode: u8, offset: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        self.jr(offset, self.cc_condition(cc))
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, _bus: &mut dyn Bus, _opcode: u8, addr: u16) -> u8 {
        self.jp_cond(addr, true)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, _bus: &mut dyn Bus, opcode: u8, addr: u16) -> u8 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        self.jp_cond(addr, self.cc_condition(cc))
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8, addr: u16) -> u8 {
        self.call_cond(bus, addr, true)
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8, addr: u16) -> u8 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.call_cond(bus, addr, cond)
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.regs.pc = self.pop_u16(bus);
        16
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.ret_cond(bus, cond)
    }

    /// RETI: return and enable interrupts without the EI delay.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u8 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        16
    }

    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u8 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        16
    }
}
