//! Tests for the ASL and LSR shift instructions.
//!
//! Tests cover:
//! - Carry out of bit 7 (ASL) and bit 0 (LSR)
//! - Z and N from the shifted result
//! - Write-back to the accumulator vs. memory by addressing mode

use core6502::{AddressingMode, Flag, Instruction, Register, ResolvedOperand, CPU};

// ========== ASL Tests ==========

#[test]
fn test_asl_accumulator_carry_out() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, 0x80);

    cpu.execute(Instruction::Asl, &ResolvedOperand::accumulator(0x80));

    assert_eq!(cpu.get_byte(Register::Accumulator), 0x00);
    assert!(cpu.get_flag(Flag::Carry));
    assert!(cpu.get_flag(Flag::Zero));
    assert!(!cpu.get_flag(Flag::Sign));
}

#[test]
fn test_asl_accumulator_sets_sign() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, 0x41);

    cpu.execute(Instruction::Asl, &ResolvedOperand::accumulator(0x41));

    assert_eq!(cpu.get_byte(Register::Accumulator), 0x82);
    assert!(!cpu.get_flag(Flag::Carry));
    assert!(cpu.get_flag(Flag::Sign));
    assert!(!cpu.get_flag(Flag::Zero));
}

#[test]
fn test_asl_memory_writes_back() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, 0x55);
    cpu.write(0x1234, 0xC1);

    let operand = ResolvedOperand::memory(0xC1, 0x1234, AddressingMode::Absolute);
    cpu.execute(Instruction::Asl, &operand);

    assert_eq!(cpu.read(0x1234), 0x82);
    assert_eq!(cpu.get_byte(Register::Accumulator), 0x55); // Untouched
    assert!(cpu.get_flag(Flag::Carry));
    assert!(cpu.get_flag(Flag::Sign));
}

#[test]
fn test_asl_every_memory_mode_writes_memory() {
    let modes = [
        AddressingMode::ZeroPageAbsolute,
        AddressingMode::ZeroPageIndexed,
        AddressingMode::Absolute,
        AddressingMode::Indexed,
    ];

    for mode in modes {
        let mut cpu = CPU::new();
        cpu.execute(Instruction::Asl, &ResolvedOperand::memory(0x01, 0x0080, mode));

        assert_eq!(cpu.read(0x0080), 0x02, "{:?}", mode);
        assert_eq!(cpu.get_byte(Register::Accumulator), 0x00, "{:?}", mode);
    }
}

// ========== LSR Tests ==========

#[test]
fn test_lsr_carry_out_to_zero() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, 0x01);

    cpu.execute(Instruction::Lsr, &ResolvedOperand::accumulator(0x01));

    assert_eq!(cpu.get_byte(Register::Accumulator), 0x00);
    assert!(cpu.get_flag(Flag::Carry));
    assert!(cpu.get_flag(Flag::Zero));
    assert!(!cpu.get_flag(Flag::Sign));
}

#[test]
fn test_lsr_clears_bit_7() {
    let mut cpu = CPU::new();
    cpu.set_flag(Flag::Sign, true);
    cpu.set_byte(Register::Accumulator, 0xFF);

    cpu.execute(Instruction::Lsr, &ResolvedOperand::accumulator(0xFF));

    assert_eq!(cpu.get_byte(Register::Accumulator), 0x7F);
    assert!(cpu.get_flag(Flag::Carry));
    assert!(!cpu.get_flag(Flag::Sign));
}

#[test]
fn test_lsr_memory_writes_back() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, 0xAA);
    cpu.write(0x0010, 0x84);

    let operand = ResolvedOperand::memory(0x84, 0x0010, AddressingMode::ZeroPageAbsolute);
    cpu.execute(Instruction::Lsr, &operand);

    assert_eq!(cpu.read(0x0010), 0x42);
    assert_eq!(cpu.get_byte(Register::Accumulator), 0xAA);
    assert!(!cpu.get_flag(Flag::Carry));
    assert!(!cpu.get_flag(Flag::Zero));
}
