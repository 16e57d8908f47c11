use super::{Cpu, Flags, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            halted: false,
            stopped: false,
            ime: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Restore the post-boot-ROM state.
    pub fn reset(&mut self) {
        self.halted = false;
        self.stopped = false;
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100 (Pan Docs).
    fn apply_dmg_boot_state(&mut self) {
        self.regs = Registers {
            a: 0x01,
            // Z, H, C set (upper nibble 1011).
            f: Flags::from_bits_truncate(0xB0),
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        };
    }
}
