//! # Load Instructions
//!
//! This module implements register loads:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//!
//! Each copies the operand into its register and updates Z and N. No other
//! flags are affected.

use crate::{MemoryBus, Register, ResolvedOperand, CPU};

fn load<M: MemoryBus>(cpu: &mut CPU<M>, register: Register, value: u8) {
    cpu.registers.update_sign(value);
    cpu.registers.update_zero(value);
    cpu.registers.set_byte(register, value);
}

/// Executes the LDA (Load Accumulator) instruction.
///
/// ```
/// use core6502::{Flag, Register, ResolvedOperand, CPU};
/// use core6502::instructions::load::execute_lda;
///
/// let mut cpu = CPU::new();
/// execute_lda(&mut cpu, &ResolvedOperand::immediate(0x80));
///
/// assert_eq!(cpu.get_byte(Register::Accumulator), 0x80);
/// assert!(cpu.get_flag(Flag::Sign));
/// assert!(!cpu.get_flag(Flag::Zero));
/// ```
pub fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    load(cpu, Register::Accumulator, operand.operand_value);
}

/// Executes the LDX (Load X Register) instruction.
pub fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    load(cpu, Register::IndexX, operand.operand_value);
}

/// Executes the LDY (Load Y Register) instruction.
pub fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    load(cpu, Register::IndexY, operand.operand_value);
}
