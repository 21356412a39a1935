//! # Shift Instructions
//!
//! This module implements bit shift operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//!
//! Both write their result back to the accumulator in Accumulator mode and to
//! `memory[effective_address]` in every other mode.

use crate::{AddressingMode, Flag, MemoryBus, Register, ResolvedOperand, CPU};

fn write_back<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand, result: u8) {
    if operand.addressing_mode == AddressingMode::Accumulator {
        cpu.registers.set_byte(Register::Accumulator, result);
    } else {
        cpu.memory.write(operand.effective_address, result);
    }
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Shifts the operand one bit left. Bit 0 becomes 0 and the old bit 7 moves
/// into the carry flag. Updates C, Z, and N.
///
/// # Examples
///
/// ```
/// use core6502::{Flag, Register, ResolvedOperand, CPU};
/// use core6502::instructions::shifts::execute_asl;
///
/// let mut cpu = CPU::new();
/// cpu.set_byte(Register::Accumulator, 0x80);
/// execute_asl(&mut cpu, &ResolvedOperand::accumulator(0x80));
///
/// assert_eq!(cpu.get_byte(Register::Accumulator), 0x00);
/// assert!(cpu.get_flag(Flag::Carry));
/// assert!(cpu.get_flag(Flag::Zero));
/// ```
pub fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let shifted = (operand.operand_value as u16) << 1;
    let result = shifted as u8;

    // Bit 8 of the wide result is the old bit 7
    cpu.registers.set_flag(Flag::Carry, shifted > 0xFF);
    cpu.registers.update_sign(result);
    cpu.registers.update_zero(result);

    write_back(cpu, operand, result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts the operand one bit right. Bit 7 becomes 0 and the old bit 0 moves
/// into the carry flag. Updates C, Z, and N (N is always cleared).
pub fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let value = operand.operand_value;
    let result = value >> 1;

    cpu.registers.set_flag(Flag::Carry, value & 0x01 != 0);
    cpu.registers.update_sign(result);
    cpu.registers.update_zero(result);

    write_back(cpu, operand, result);
}
