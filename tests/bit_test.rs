//! Tests for the BIT (Bit Test) instruction.

use core6502::{AddressingMode, Flag, Instruction, Register, ResolvedOperand, CPU};

fn bit(a: u8, value: u8) -> CPU {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::Accumulator, a);
    cpu.write(0x0040, value);
    let operand = ResolvedOperand::memory(value, 0x0040, AddressingMode::ZeroPageAbsolute);
    cpu.execute(Instruction::Bit, &operand);
    cpu
}

#[test]
fn test_bit_copies_bits_6_and_7() {
    let cpu = bit(0xFF, 0xC0);

    assert!(cpu.get_flag(Flag::Overflow));
    assert!(cpu.get_flag(Flag::Sign));
    assert!(!cpu.get_flag(Flag::Zero));
}

#[test]
fn test_bit_zero_when_no_common_bits() {
    let cpu = bit(0x0F, 0xF0);

    assert!(cpu.get_flag(Flag::Zero));
    assert!(cpu.get_flag(Flag::Sign));
    assert!(cpu.get_flag(Flag::Overflow));
}

#[test]
fn test_bit_clears_flags_from_value() {
    let mut cpu = CPU::new();
    cpu.set_flag(Flag::Overflow, true);
    cpu.set_flag(Flag::Sign, true);
    cpu.set_byte(Register::Accumulator, 0x01);

    let operand = ResolvedOperand::memory(0x01, 0x2000, AddressingMode::Absolute);
    cpu.execute(Instruction::Bit, &operand);

    assert!(!cpu.get_flag(Flag::Overflow));
    assert!(!cpu.get_flag(Flag::Sign));
    assert!(!cpu.get_flag(Flag::Zero));
}

#[test]
fn test_bit_does_not_mutate() {
    let cpu = bit(0x3C, 0x81);

    assert_eq!(cpu.get_byte(Register::Accumulator), 0x3C);
    assert_eq!(cpu.read(0x0040), 0x81);
    assert!(!cpu.get_flag(Flag::Carry));
}
