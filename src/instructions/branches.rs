//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BEQ / BNE: Branch if Zero Set / Clear
//! - BMI / BPL: Branch if Sign Set / Clear
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! The decoder resolves the relative offset, so the branch target arrives as
//! the operand's effective address. No flags are affected.

use crate::{Flag, MemoryBus, ResolvedOperand, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool, operand: &ResolvedOperand) {
    if taken {
        cpu.pc = operand.effective_address;
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// ```
/// use core6502::{ResolvedOperand, CPU};
/// use core6502::instructions::branches::execute_bcc;
///
/// let mut cpu = CPU::new();
/// cpu.set_pc(0x8002);
/// execute_bcc(&mut cpu, &ResolvedOperand::branch(0x8010));
/// assert_eq!(cpu.pc(), 0x8010);
/// ```
pub fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = !cpu.registers.get_flag(Flag::Carry);
    branch_if(cpu, taken, operand);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = cpu.registers.get_flag(Flag::Carry);
    branch_if(cpu, taken, operand);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = cpu.registers.get_flag(Flag::Zero);
    branch_if(cpu, taken, operand);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = !cpu.registers.get_flag(Flag::Zero);
    branch_if(cpu, taken, operand);
}

/// Executes the BMI (Branch if Minus) instruction.
pub fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = cpu.registers.get_flag(Flag::Sign);
    branch_if(cpu, taken, operand);
}

/// Executes the BPL (Branch if Plus) instruction.
pub fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = !cpu.registers.get_flag(Flag::Sign);
    branch_if(cpu, taken, operand);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = !cpu.registers.get_flag(Flag::Overflow);
    branch_if(cpu, taken, operand);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let taken = cpu.registers.get_flag(Flag::Overflow);
    branch_if(cpu, taken, operand);
}
