use anyhow::{anyhow, Context, Result};
use typed_builder::TypedBuilder;

use retroboy_lr35902::{immediate_len, mnemonic_of, Bus, Cpu, FlatMemory};

/// Default load address: where cartridge code starts after the boot ROM.
pub const DEFAULT_ORIGIN: u16 = 0x0100;
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    pub program: Vec<u8>,
    #[builder(default = DEFAULT_ORIGIN)]
    pub origin: u16,
    #[builder(default = DEFAULT_MAX_STEPS)]
    pub max_steps: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Halted,
    Stopped,
    StepLimit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StopReason::Halted => "HALT",
            StopReason::Stopped => "STOP",
            StopReason::StepLimit => "step limit reached",
        };
        f.write_str(text)
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub steps: u64,
    pub cycles: u64,
    pub reason: StopReason,
    pub cpu: Cpu,
    pub memory: FlatMemory,
}

/// Load `config.program` into a flat memory image and execute it from
/// `config.origin` until HALT, STOP or the step limit.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let mut memory = FlatMemory::new();
    memory.load(config.origin, &config.program);

    let mut cpu = Cpu::new();
    cpu.regs.pc = config.origin;

    log::info!(
        "running {} byte(s) from 0x{:04X}, at most {} step(s)",
        config.program.len(),
        config.origin,
        config.max_steps
    );

    let mut steps = 0u64;
    let mut cycles = 0u64;
    let reason = loop {
        if cpu.halted() {
            break StopReason::Halted;
        }
        if cpu.stopped() {
            break StopReason::Stopped;
        }
        if steps >= config.max_steps {
            break StopReason::StepLimit;
        }

        cycles += u64::from(step(&mut cpu, &mut memory)?);
        steps += 1;
    };

    log::info!("{reason} after {steps} step(s), {cycles} cycle(s)");
    Ok(RunSummary {
        steps,
        cycles,
        reason,
        cpu,
        memory,
    })
}

/// Fetch, decode and execute the instruction at PC.
fn step(cpu: &mut Cpu, memory: &mut FlatMemory) -> Result<u8> {
    let pc = cpu.regs.pc;
    let opcode = memory.read8(pc);
    let len = immediate_len(opcode)
        .ok_or_else(|| anyhow!("no instruction for opcode 0x{opcode:02X} at 0x{pc:04X}"))?;

    let mut immediates = [0u8; 2];
    for (offset, slot) in immediates[..len].iter_mut().enumerate() {
        *slot = memory.read8(pc.wrapping_add(1 + offset as u16));
    }
    cpu.regs.pc = pc.wrapping_add(1 + len as u16);

    log::trace!(
        "0x{pc:04X}: {} {:02X?}",
        mnemonic_of(opcode).unwrap_or("?"),
        &immediates[..len]
    );
    let cycles = cpu
        .execute(memory, opcode, &immediates[..len])
        .with_context(|| format!("executing opcode 0x{opcode:02X} at 0x{pc:04X}"))?;
    Ok(cycles)
}

/// Multi-line register dump used by the binary.
pub fn format_registers(cpu: &Cpu) -> String {
    let r = &cpu.regs;
    format!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X}\nSP={:04X} PC={:04X} IME={}",
        r.af(),
        r.bc(),
        r.de(),
        r.hl(),
        r.sp,
        r.pc,
        u8::from(cpu.ime())
    )
}
