mod alu;
mod bus;
mod cb;
mod dispatch;
mod exec;
mod helpers;
mod init;
mod mnemonic;
mod regs;


pub use bus::Bus;
pub use dispatch::{immediate_len, is_implemented, list_implemented};
pub use mnemonic::{cb_mnemonic_of, mnemonic_of};
pub use regs::{Flags, RegisterPair, Registers};

/// LR35902 execution core.
///
/// Holds the register file plus the handful of control bits that
/// instructions can set (`HALT`, `STOP`, `DI`/`EI`/`RETI`). What those bits
/// mean for the rest of the machine is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
    halted: bool,
    stopped: bool,
    /// Interrupt master enable. Stored only; servicing lives outside.
    ime: bool,
    /// Set by EI; IME turns on once the instruction after EI completes.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Clear HALT/STOP so the caller can resume execution after whatever
    /// wake-up condition it models (interrupt, joypad press).
    pub fn resume(&mut self) {
        self.halted = false;
        self.stopped = false;
    }
}
