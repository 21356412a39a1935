//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that clear a single status flag:
//! - CLC: Clear Carry Flag
//! - CLD: Clear Decimal Mode
//! - CLI: Clear Interrupt Disable
//! - CLV: Clear Overflow Flag
//!
//! These instructions use implied addressing and change nothing else.

use crate::{Flag, MemoryBus, ResolvedOperand, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// ```
/// use core6502::{Flag, ResolvedOperand, CPU};
/// use core6502::instructions::flags::execute_clc;
///
/// let mut cpu = CPU::new();
/// cpu.set_flag(Flag::Carry, true);
///
/// execute_clc(&mut cpu, &ResolvedOperand::implied());
/// assert!(!cpu.get_flag(Flag::Carry));
/// ```
pub fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &ResolvedOperand) {
    cpu.registers.set_flag(Flag::Carry, false);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &ResolvedOperand) {
    cpu.registers.set_flag(Flag::Decimal, false);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &ResolvedOperand) {
    cpu.registers.set_flag(Flag::InterruptDisable, false);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &ResolvedOperand) {
    cpu.registers.set_flag(Flag::Overflow, false);
}
