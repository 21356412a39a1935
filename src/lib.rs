//! # 6502 Instruction-Execution Core
//!
//! The register/flag state model of an NMOS 6502 plus the opcode handlers that
//! mutate it: binary and decimal-mode addition, logic, shifts, compares,
//! branches, jumps and loads.
//!
//! Instruction fetch and addressing-mode resolution happen outside this crate.
//! A decoder hands each execution unit a [`ResolvedOperand`] describing the
//! operand value, the effective address and the addressing mode.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{Flag, Instruction, Register, ResolvedOperand, CPU};
//!
//! let mut cpu = CPU::new();
//! cpu.set_byte(Register::Accumulator, 0x50);
//!
//! // ADC #$50
//! let operand = ResolvedOperand::immediate(0x50);
//! cpu.execute(Instruction::Adc, &operand);
//!
//! assert_eq!(cpu.get_byte(Register::Accumulator), 0xA0);
//! assert!(cpu.get_flag(Flag::Overflow));
//! assert!(cpu.get_flag(Flag::Sign));
//! assert!(!cpu.get_flag(Flag::Carry));
//! ```
//!
//! ## Modules
//!
//! - `registers` - Register file and status flag accessor
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes and the resolved operand record
//! - `cpu` - CPU state, stack primitives and instruction dispatch
//! - `opcodes` - Instruction enumeration and opcode metadata

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod wasm;

// Execution units, grouped by instruction family
pub mod instructions;

pub use addressing::{AddressingMode, ResolvedOperand};
pub use cpu::{CPU, STACK_PAGE};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode_opcode, ExecutionUnit, Instruction, OpcodeMetadata, OPCODES};
pub use registers::{Flag, Register, RegisterFile};

/// Errors reported by the opcode metadata and dispatch helpers.
///
/// Execution units themselves never fail; broken invariants panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// Opcode byte is not one of the documented opcodes this core executes.
    #[error("Opcode 0x{0:02X} is not implemented")]
    UnknownOpcode(u8),

    /// Text does not name an instruction this core executes.
    #[error("Unknown instruction mnemonic '{0}'")]
    UnknownMnemonic(String),
}
