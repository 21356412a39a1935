//! Fuzz target for the execution units.
//!
//! Builds an arbitrary register state and resolved operand, then runs the
//! instruction selected by an arbitrary opcode byte. Looks for panics and
//! broken register invariants.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{decode_opcode, Register, ResolvedOperand, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    pc: u16,
    status: u8,
    sp: u8,
    a: u8,
    x: u8,
    y: u8,
}

/// Operand fields the decoder would have produced
#[derive(Debug, Arbitrary)]
struct FuzzOperand {
    opcode: u8,
    operand_value: u8,
    effective_address: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    operand: FuzzOperand,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(meta) = decode_opcode(input.operand.opcode) else {
        return;
    };

    let mut cpu = CPU::new();
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_byte(Register::Status, input.cpu_state.status);
    cpu.set_byte(Register::Stack, input.cpu_state.sp);
    cpu.set_byte(Register::Accumulator, input.cpu_state.a);
    cpu.set_byte(Register::IndexX, input.cpu_state.x);
    cpu.set_byte(Register::IndexY, input.cpu_state.y);

    let operand = ResolvedOperand::new(
        input.operand.operand_value,
        input.operand.effective_address,
        meta.addressing_mode,
    );
    cpu.execute(meta.instruction, &operand);

    // Reserved bit must survive every instruction
    assert_eq!(cpu.status() & 0x20, 0x20);

    // Only JSR moves the stack pointer, by exactly two
    let expected_sp = if meta.instruction == core6502::Instruction::Jsr {
        input.cpu_state.sp.wrapping_sub(2)
    } else {
        input.cpu_state.sp
    };
    assert_eq!(cpu.get_byte(Register::Stack), expected_sp);
});
