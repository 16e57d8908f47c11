use proptest::prelude::*;
use retroboy_lr35902::{
    immediate_len, is_implemented, list_implemented, Bus, CoreError, Cpu, Flags, FlatMemory,
};

fn set_r8(cpu: &mut Cpu, index: u8, value: u8) {
    match index {
        0 => cpu.regs.b = value,
        1 => cpu.regs.c = value,
        2 => cpu.regs.d = value,
        3 => cpu.regs.e = value,
        4 => cpu.regs.h = value,
        5 => cpu.regs.l = value,
        _ => cpu.regs.a = value,
    }
}

fn get_r8(cpu: &Cpu, index: u8) -> u8 {
    match index {
        0 => cpu.regs.b,
        1 => cpu.regs.c,
        2 => cpu.regs.d,
        3 => cpu.regs.e,
        4 => cpu.regs.h,
        5 => cpu.regs.l,
        _ => cpu.regs.a,
    }
}

fn register_index() -> impl Strategy<Value = u8> {
    prop_oneof![0u8..6, Just(7u8)]
}

fn opcode_hole() -> impl Strategy<Value = u8> {
    let holes: Vec<u8> = (0..=u8::MAX).filter(|&op| !is_implemented(op)).collect();
    prop::sample::select(holes)
}

fn arbitrary_cpu() -> impl Strategy<Value = Cpu> {
    (any::<[u8; 8]>(), any::<u16>(), any::<u16>()).prop_map(|(r, sp, pc)| {
        let mut cpu = Cpu::new();
        cpu.regs.a = r[0];
        cpu.regs.f = Flags::from_bits_truncate(r[1]);
        cpu.regs.b = r[2];
        cpu.regs.c = r[3];
        cpu.regs.d = r[4];
        cpu.regs.e = r[5];
        cpu.regs.h = r[6];
        cpu.regs.l = r[7];
        cpu.regs.sp = sp;
        cpu.regs.pc = pc;
        cpu
    })
}

proptest! {
    #[test]
    fn inc_r_wraps_and_keeps_carry(index in register_index(), value in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new();
        set_r8(&mut cpu, index, value);
        cpu.set_flag(Flags::CARRY, carry);

        let cycles = cpu.execute(&mut mem, 0x04 | (index << 3), &[]).unwrap();

        let result = value.wrapping_add(1);
        prop_assert_eq!(cycles, 4);
        prop_assert_eq!(get_r8(&cpu, index), result);
        prop_assert_eq!(cpu.get_flag(Flags::ZERO), result == 0);
        prop_assert!(!cpu.get_flag(Flags::SUBTRACT));
        prop_assert_eq!(cpu.get_flag(Flags::HALF_CARRY), value & 0x0F == 0x0F);
        prop_assert_eq!(cpu.get_flag(Flags::CARRY), carry);
    }

    #[test]
    fn add_a_b_matches_wide_arithmetic(a in any::<u8>(), b in any::<u8>()) {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new();
        cpu.regs.a = a;
        cpu.regs.b = b;

        cpu.execute(&mut mem, 0x80, &[]).unwrap();

        let wide = u16::from(a) + u16::from(b);
        prop_assert_eq!(cpu.regs.a, wide as u8);
        prop_assert_eq!(cpu.get_flag(Flags::ZERO), wide as u8 == 0);
        prop_assert!(!cpu.get_flag(Flags::SUBTRACT));
        prop_assert_eq!(cpu.get_flag(Flags::HALF_CARRY), (a & 0x0F) + (b & 0x0F) > 0x0F);
        prop_assert_eq!(cpu.get_flag(Flags::CARRY), wide > 0xFF);
    }

    #[test]
    fn sub_a_b_matches_wide_arithmetic(a in any::<u8>(), b in any::<u8>()) {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new();
        cpu.regs.a = a;
        cpu.regs.b = b;

        cpu.execute(&mut mem, 0x90, &[]).unwrap();

        prop_assert_eq!(cpu.regs.a, a.wrapping_sub(b));
        prop_assert!(cpu.get_flag(Flags::SUBTRACT));
        prop_assert_eq!(cpu.get_flag(Flags::HALF_CARRY), (a & 0x0F) < (b & 0x0F));
        prop_assert_eq!(cpu.get_flag(Flags::CARRY), a < b);
    }

    #[test]
    fn ld_a_hl_plus_and_minus_wrap(hl in any::<u16>(), byte in any::<u8>()) {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new();
        mem.write8(hl, byte);

        cpu.regs.set_hl(hl);
        cpu.execute(&mut mem, 0x2A, &[]).unwrap();
        prop_assert_eq!(cpu.regs.a, byte);
        prop_assert_eq!(cpu.regs.hl(), hl.wrapping_add(1));

        cpu.regs.set_hl(hl);
        cpu.execute(&mut mem, 0x3A, &[]).unwrap();
        prop_assert_eq!(cpu.regs.a, byte);
        prop_assert_eq!(cpu.regs.hl(), hl.wrapping_sub(1));
    }

    #[test]
    fn flag_ops_only_touch_their_flags(a in any::<u8>(), f in any::<u8>()) {
        let mut mem = FlatMemory::new();
        let flags = Flags::from_bits_truncate(f);
        let zero = flags & Flags::ZERO;
        let carry = flags & Flags::CARRY;

        let mut cpu = Cpu::new();
        cpu.regs.a = a;
        cpu.regs.f = flags;
        cpu.execute(&mut mem, 0x2F, &[]).unwrap();
        prop_assert_eq!(cpu.regs.a, !a);
        prop_assert_eq!(cpu.regs.f, zero | carry | Flags::SUBTRACT | Flags::HALF_CARRY);

        cpu.regs.f = flags;
        cpu.execute(&mut mem, 0x37, &[]).unwrap();
        prop_assert_eq!(cpu.regs.f, zero | Flags::CARRY);

        cpu.regs.f = flags;
        cpu.execute(&mut mem, 0x3F, &[]).unwrap();
        prop_assert_eq!(cpu.regs.f, zero | (carry ^ Flags::CARRY));
        prop_assert_eq!(cpu.regs.a, !a);
    }

    #[test]
    fn low_nibble_of_f_is_always_zero(cpu in arbitrary_cpu(), opcode in any::<u8>(), imm in any::<[u8; 2]>()) {
        let mut cpu = cpu;
        let mut mem = FlatMemory::new();
        if let Some(len) = immediate_len(opcode) {
            cpu.execute(&mut mem, opcode, &imm[..len]).unwrap();
        }
        prop_assert_eq!(cpu.regs.f.bits() & 0x0F, 0);
        prop_assert_eq!(cpu.regs.af() & 0x000F, 0);
    }

    #[test]
    fn cycles_are_whole_machine_cycles(
        cpu in arbitrary_cpu(),
        opcode in prop::sample::select(list_implemented()),
        imm in any::<[u8; 2]>()
    ) {
        let mut cpu = cpu;
        let mut mem = FlatMemory::new();
        let len = immediate_len(opcode).unwrap();

        let cycles = cpu.execute(&mut mem, opcode, &imm[..len]).unwrap();

        prop_assert!((4..=24).contains(&cycles), "opcode {:#04x} took {}", opcode, cycles);
        prop_assert_eq!(cycles % 4, 0);
    }

    #[test]
    fn rejected_opcodes_leave_state_untouched(cpu in arbitrary_cpu(), opcode in opcode_hole()) {
        let mut cpu = cpu;
        let before = cpu.clone();
        let mut mem = FlatMemory::new();

        prop_assert_eq!(cpu.execute(&mut mem, opcode, &[]), Err(CoreError::UnimplementedOpcode(opcode)));
        prop_assert_eq!(cpu, before);
        prop_assert!(mem.as_slice().iter().all(|&byte| byte == 0));
    }
}
