//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//!
//! Both take their target from the operand's effective address; for
//! `JMP ($xxxx)` the decoder has already followed the pointer. No flags are
//! affected.

use crate::{MemoryBus, ResolvedOperand, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Sets the program counter to the target address.
pub fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    cpu.pc = operand.effective_address;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Decrements PC by one (the return path adds it back)
/// 2. Pushes the high byte of PC to the stack
/// 3. Pushes the low byte of PC to the stack
/// 4. Sets PC to the target address
///
/// # Examples
///
/// ```
/// use core6502::{Register, ResolvedOperand, CPU};
/// use core6502::instructions::control::execute_jsr;
///
/// let mut cpu = CPU::new();
/// cpu.set_byte(Register::Stack, 0xFF);
/// cpu.set_pc(0x8003);
///
/// execute_jsr(&mut cpu, &ResolvedOperand::jump(0x9000));
///
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.read(0x01FF), 0x80); // high byte of 0x8002
/// assert_eq!(cpu.read(0x01FE), 0x02); // low byte of 0x8002
/// assert_eq!(cpu.get_byte(Register::Stack), 0xFD);
/// ```
pub fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &ResolvedOperand) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.pc = return_address;

    cpu.push((return_address >> 8) as u8);
    cpu.push((return_address & 0xFF) as u8);

    cpu.pc = operand.effective_address;
}
