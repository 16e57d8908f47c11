use crate::cpu::Bus;

const ADDRESS_SPACE: usize = 0x10000;

/// Flat 64 KiB memory with no mapping or I/O side effects.
///
/// Real machines put cartridge banking and MMIO decoding behind [`Bus`];
/// this is the plain version used by the runner and by tests.
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self {
            bytes: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `data` into memory starting at `origin`, wrapping at 0xFFFF.
    pub fn load(&mut self, origin: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            let addr = origin.wrapping_add(offset as u16) as usize;
            self.bytes[addr] = byte;
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}
