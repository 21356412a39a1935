//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry (binary and decimal mode)
//! - AND: Logical AND
//! - BIT: Bit Test

use crate::{Flag, MemoryBus, Register, ResolvedOperand, CPU};

/// Returns true when adding `a` and `b` gave `result` a sign neither operand had.
///
/// Overflow occurs when both operands share a sign bit and the result's sign
/// bit differs from it.
fn signed_overflow(a: u8, b: u8, result: u8) -> bool {
    (a ^ b) & 0x80 == 0 && (a ^ result) & 0x80 != 0
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Binary mode
///
/// - Carry (C): Set if the sum exceeds 0xFF
/// - Zero (Z), Sign (N), Overflow (V): From the sum
///
/// # Decimal mode
///
/// Both operands are treated as packed BCD. A low-nibble sum above 9 gets +6;
/// N and V are taken at that point. A sum above 0x99 then gets +96 and sets C.
/// Z always reflects the plain binary sum, as on the NMOS part.
///
/// # Examples
///
/// ```
/// use core6502::{Flag, Register, ResolvedOperand, CPU};
/// use core6502::instructions::alu::execute_adc;
///
/// let mut cpu = CPU::new();
/// cpu.set_flag(Flag::Decimal, true);
/// cpu.set_byte(Register::Accumulator, 0x09);
///
/// execute_adc(&mut cpu, &ResolvedOperand::immediate(0x01));
///
/// assert_eq!(cpu.get_byte(Register::Accumulator), 0x10); // 9 + 1 = 10
/// assert!(!cpu.get_flag(Flag::Carry));
/// ```
pub fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let a = cpu.registers.get_byte(Register::Accumulator);
    let value = operand.operand_value;
    let carry_in = cpu.registers.get_flag(Flag::Carry) as u16;

    // 16-bit intermediate so the carry out survives
    let mut sum = a as u16 + value as u16 + carry_in;

    cpu.registers.update_zero(sum as u8);

    if cpu.registers.get_flag(Flag::Decimal) {
        if (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in > 9 {
            sum += 6;
        }

        cpu.registers.update_sign(sum as u8);
        cpu.registers
            .set_flag(Flag::Overflow, signed_overflow(a, value, sum as u8));

        if sum > 0x99 {
            sum += 96;
        }
        cpu.registers.set_flag(Flag::Carry, sum > 0x99);
    } else {
        cpu.registers.update_sign(sum as u8);
        cpu.registers
            .set_flag(Flag::Overflow, signed_overflow(a, value, sum as u8));
        cpu.registers.set_flag(Flag::Carry, sum > 0xFF);
    }

    cpu.registers.set_byte(Register::Accumulator, sum as u8);
}

/// Executes the AND (Logical AND) instruction.
///
/// `A = A & operand`. Updates Z and N.
pub fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let result = cpu.registers.get_byte(Register::Accumulator) & operand.operand_value;

    cpu.registers.update_sign(result);
    cpu.registers.update_zero(result);
    cpu.registers.set_byte(Register::Accumulator, result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests the operand (the byte at the effective address) against the
/// accumulator without changing either.
///
/// - Overflow (V): Bit 6 of the operand
/// - Sign (N): Bit 7 of the operand
/// - Zero (Z): Set if `operand & A == 0`
pub fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let value = operand.operand_value;
    let a = cpu.registers.get_byte(Register::Accumulator);

    cpu.registers.set_flag(Flag::Overflow, value & 0x40 != 0);
    cpu.registers.update_sign(value);
    cpu.registers.update_zero(value & a);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_overflow() {
        // positive + positive = negative
        assert!(signed_overflow(0x50, 0x50, 0xA0));
        // negative + negative = positive
        assert!(signed_overflow(0xD0, 0x90, 0x60));
        // mixed signs never overflow
        assert!(!signed_overflow(0x50, 0xD0, 0x20));
        assert!(!signed_overflow(0x01, 0x01, 0x02));
    }
}
