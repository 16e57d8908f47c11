//! Human-readable names for both opcode spaces. Debug/trace aid only.

/// Primary opcode names; `None` marks the opcode holes.
#[rustfmt::skip]
const PRIMARY_NAMES: [Option<&str>; 256] = [
    Some("NOP"), Some("LD BC,d16"), Some("LD (BC),A"), Some("INC BC"), // 00
    Some("INC B"), Some("DEC B"), Some("LD B,d8"), Some("RLCA"), // 04
    Some("LD (a16),SP"), Some("ADD HL,BC"), Some("LD A,(BC)"), Some("DEC BC"), // 08
    Some("INC C"), Some("DEC C"), Some("LD C,d8"), Some("RRCA"), // 0C
    Some("STOP"), Some("LD DE,d16"), Some("LD (DE),A"), Some("INC DE"), // 10
    Some("INC D"), Some("DEC D"), Some("LD D,d8"), Some("RLA"), // 14
    Some("JR r8"), Some("ADD HL,DE"), Some("LD A,(DE)"), Some("DEC DE"), // 18
    Some("INC E"), Some("DEC E"), Some("LD E,d8"), Some("RRA"), // 1C
    Some("JR NZ,r8"), Some("LD HL,d16"), Some("LD (HL+),A"), Some("INC HL"), // 20
    Some("INC H"), Some("DEC H"), Some("LD H,d8"), Some("DAA"), // 24
    Some("JR Z,r8"), Some("ADD HL,HL"), Some("LD A,(HL+)"), Some("DEC HL"), // 28
    Some("INC L"), Some("DEC L"), Some("LD L,d8"), Some("CPL"), // 2C
    Some("JR NC,r8"), Some("LD SP,d16"), Some("LD (HL-),A"), Some("INC SP"), // 30
    Some("INC (HL)"), Some("DEC (HL)"), Some("LD (HL),d8"), Some("SCF"), // 34
    Some("JR C,r8"), Some("ADD HL,SP"), Some("LD A,(HL-)"), Some("DEC SP"), // 38
    Some("INC A"), Some("DEC A"), Some("LD A,d8"), Some("CCF"), // 3C
    Some("LD B,B"), Some("LD B,C"), Some("LD B,D"), Some("LD B,E"), // 40
    Some("LD B,H"), Some("LD B,L"), Some("LD B,(HL)"), Some("LD B,A"), // 44
    Some("LD C,B"), Some("LD C,C"), Some("LD C,D"), Some("LD C,E"), // 48
    Some("LD C,H"), Some("LD C,L"), Some("LD C,(HL)"), Some("LD C,A"), // 4C
    Some("LD D,B"), Some("LD D,C"), Some("LD D,D"), Some("LD D,E"), // 50
    Some("LD D,H"), Some("LD D,L"), Some("LD D,(HL)"), Some("LD D,A"), // 54
    Some("LD E,B"), Some("LD E,C"), Some("LD E,D"), Some("LD E,E"), // 58
    Some("LD E,H"), Some("LD E,L"), Some("LD E,(HL)"), Some("LD E,A"), // 5C
    Some("LD H,B"), Some("LD H,C"), Some("LD H,D"), Some("LD H,E"), // 60
    Some("LD H,H"), Some("LD H,L"), Some("LD H,(HL)"), Some("LD H,A"), // 64
    Some("LD L,B"), Some("LD L,C"), Some("LD L,D"), Some("LD L,E"), // 68
    Some("LD L,H"), Some("LD L,L"), Some("LD L,(HL)"), Some("LD L,A"), // 6C
    Some("LD (HL),B"), Some("LD (HL),C"), Some("LD (HL),D"), Some("LD (HL),E"), // 70
    Some("LD (HL),H"), Some("LD (HL),L"), Some("HALT"), Some("LD (HL),A"), // 74
    Some("LD A,B"), Some("LD A,C"), Some("LD A,D"), Some("LD A,E"), // 78
    Some("LD A,H"), Some("LD A,L"), Some("LD A,(HL)"), Some("LD A,A"), // 7C
    Some("ADD A,B"), Some("ADD A,C"), Some("ADD A,D"), Some("ADD A,E"), // 80
    Some("ADD A,H"), Some("ADD A,L"), Some("ADD A,(HL)"), Some("ADD A,A"), // 84
    Some("ADC A,B"), Some("ADC A,C"), Some("ADC A,D"), Some("ADC A,E"), // 88
    Some("ADC A,H"), Some("ADC A,L"), Some("ADC A,(HL)"), Some("ADC A,A"), // 8C
    Some("SUB B"), Some("SUB C"), Some("SUB D"), Some("SUB E"), // 90
    Some("SUB H"), Some("SUB L"), Some("SUB (HL)"), Some("SUB A"), // 94
    Some("SBC A,B"), Some("SBC A,C"), Some("SBC A,D"), Some("SBC A,E"), // 98
    Some("SBC A,H"), Some("SBC A,L"), Some("SBC A,(HL)"), Some("SBC A,A"), // 9C
    Some("AND B"), Some("AND C"), Some("AND D"), Some("AND E"), // A0
    Some("AND H"), Some("AND L"), Some("AND (HL)"), Some("AND A"), // A4
    Some("XOR B"), Some("XOR C"), Some("XOR D"), Some("XOR E"), // A8
    Some("XOR H"), Some("XOR L"), Some("XOR (HL)"), Some("XOR A"), // AC
    Some("OR B"), Some("OR C"), Some("OR D"), Some("OR E"), // B0
    Some("OR H"), Some("OR L"), Some("OR (HL)"), Some("OR A"), // B4
    Some("CP B"), Some("CP C"), Some("CP D"), Some("CP E"), // B8
    Some("CP H"), Some("CP L"), Some("CP (HL)"), Some("CP A"), // BC
    Some("RET NZ"), Some("POP BC"), Some("JP NZ,a16"), Some("JP a16"), // C0
    Some("CALL NZ,a16"), Some("PUSH BC"), Some("ADD A,d8"), Some("RST 00H"), // C4
    Some("RET Z"), Some("RET"), Some("JP Z,a16"), Some("PREFIX CB"), // C8
    Some("CALL Z,a16"), Some("CALL a16"), Some("ADC A,d8"), Some("RST 08H"), // CC
    Some("RET NC"), Some("POP DE"), Some("JP NC,a16"), None, // D0
    Some("CALL NC,a16"), Some("PUSH DE"), Some("SUB d8"), Some("RST 10H"), // D4
    Some("RET C"), Some("RETI"), Some("JP C,a16"), None, // D8
    Some("CALL C,a16"), None, Some("SBC A,d8"), Some("RST 18H"), // DC
    Some("LDH (a8),A"), Some("POP HL"), Some("LD (C),A"), None, // E0
    None, Some("PUSH HL"), Some("AND d8"), Some("RST 20H"), // E4
    Some("ADD SP,r8"), Some("JP (HL)"), Some("LD (a16),A"), None, // E8
    None, None, Some("XOR d8"), Some("RST 28H"), // EC
    Some("LDH A,(a8)"), Some("POP AF"), Some("LD A,(C)"), Some("DI"), // F0
    None, Some("PUSH AF"), Some("OR d8"), Some("RST 30H"), // F4
    Some("LD HL,SP+r8"), Some("LD SP,HL"), Some("LD A,(a16)"), Some("EI"), // F8
    None, None, Some("CP d8"), Some("RST 38H"), // FC
];

#[rustfmt::skip]
const CB_NAMES: [&str; 256] = [
    "RLC B", "RLC C", "RLC D", "RLC E", // 00
    "RLC H", "RLC L", "RLC (HL)", "RLC A", // 04
    "RRC B", "RRC C", "RRC D", "RRC E", // 08
    "RRC H", "RRC L", "RRC (HL)", "RRC A", // 0C
    "RL B", "RL C", "RL D", "RL E", // 10
    "RL H", "RL L", "RL (HL)", "RL A", // 14
    "RR B", "RR C", "RR D", "RR E", // 18
    "RR H", "RR L", "RR (HL)", "RR A", // 1C
    "SLA B", "SLA C", "SLA D", "SLA E", // 20
    "SLA H", "SLA L", "SLA (HL)", "SLA A", // 24
    "SRA B", "SRA C", "SRA D", "SRA E", // 28
    "SRA H", "SRA L", "SRA (HL)", "SRA A", // 2C
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", // 30
    "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A", // 34
    "SRL B", "SRL C", "SRL D", "SRL E", // 38
    "SRL H", "SRL L", "SRL (HL)", "SRL A", // 3C
    "BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", // 40
    "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A", // 44
    "BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", // 48
    "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A", // 4C
    "BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", // 50
    "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A", // 54
    "BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", // 58
    "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A", // 5C
    "BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", // 60
    "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A", // 64
    "BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", // 68
    "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A", // 6C
    "BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", // 70
    "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A", // 74
    "BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", // 78
    "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A", // 7C
    "RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", // 80
    "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A", // 84
    "RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", // 88
    "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A", // 8C
    "RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", // 90
    "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A", // 94
    "RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", // 98
    "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A", // 9C
    "RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", // A0
    "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A", // A4
    "RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", // A8
    "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A", // AC
    "RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", // B0
    "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A", // B4
    "RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", // B8
    "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A", // BC
    "SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", // C0
    "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A", // C4
    "SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", // C8
    "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A", // CC
    "SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", // D0
    "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A", // D4
    "SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", // D8
    "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A", // DC
    "SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", // E0
    "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A", // E4
    "SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", // E8
    "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A", // EC
    "SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", // F0
    "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A", // F4
    "SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", // F8
    "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A", // FC
];

/// Mnemonic for a primary opcode, `None` for the opcode holes.
pub fn mnemonic_of(opcode: u8) -> Option<&'static str> {
    PRIMARY_NAMES[opcode as usize]
}

/// Mnemonic for a CB-prefixed opcode.
pub fn cb_mnemonic_of(cb: u8) -> &'static str {
    CB_NAMES[cb as usize]
}
