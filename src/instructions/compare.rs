//! # Compare Instructions
//!
//! - CMP: Compare Accumulator
//! - CPX: Compare X Register
//! - CPY: Compare Y Register
//!
//! All three subtract the operand from a register and keep only the flags.
//! No register is modified.

use crate::{Flag, MemoryBus, Register, ResolvedOperand, CPU};

/// Compares `register` against `value`.
///
/// - Carry (C): Set if register >= value (no borrow)
/// - Zero (Z): Set if register == value
/// - Sign (N): Bit 7 of `register - value` (wrapping)
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: Register, value: u8) {
    let lhs = cpu.registers.get_byte(register);
    let diff = lhs.wrapping_sub(value);

    cpu.registers.set_flag(Flag::Carry, lhs >= value);
    cpu.registers.update_sign(diff);
    cpu.registers.update_zero(diff);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// ```
/// use core6502::{Flag, Register, ResolvedOperand, CPU};
/// use core6502::instructions::compare::execute_cmp;
///
/// let mut cpu = CPU::new();
/// cpu.set_byte(Register::Accumulator, 0x10);
/// execute_cmp(&mut cpu, &ResolvedOperand::immediate(0x10));
///
/// assert!(cpu.get_flag(Flag::Zero));
/// assert!(cpu.get_flag(Flag::Carry));
/// ```
pub fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    compare(cpu, Register::Accumulator, operand.operand_value);
}

/// Executes the CPX (Compare X Register) instruction.
pub fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    compare(cpu, Register::IndexX, operand.operand_value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    compare(cpu, Register::IndexY, operand.operand_value);
}
