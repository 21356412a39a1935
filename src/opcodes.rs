//! # Instructions and Opcode Metadata
//!
//! This module names every instruction this core executes, maps each one to
//! its execution unit, and lists the documented NMOS opcode bytes that encode
//! them.
//!
//! The opcode list is the piece an external decoder needs: given an opcode
//! byte it yields the instruction, the addressing mode to resolve, and the
//! instruction size. Cycle timing is not tracked here.

use std::fmt;
use std::str::FromStr;

use crate::instructions::{alu, branches, compare, control, flags, load, shifts};
use crate::{AddressingMode, ExecutionError, MemoryBus, ResolvedOperand, CPU};

/// Signature shared by every execution unit.
pub type ExecutionUnit<M> = fn(&mut CPU<M>, &ResolvedOperand);

/// Instructions implemented by this core, one per execution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
}

impl Instruction {
    /// Every instruction, in mnemonic order.
    pub const ALL: [Instruction; 25] = [
        Instruction::Adc,
        Instruction::And,
        Instruction::Asl,
        Instruction::Bcc,
        Instruction::Bcs,
        Instruction::Beq,
        Instruction::Bit,
        Instruction::Bmi,
        Instruction::Bne,
        Instruction::Bpl,
        Instruction::Bvc,
        Instruction::Bvs,
        Instruction::Clc,
        Instruction::Cld,
        Instruction::Cli,
        Instruction::Clv,
        Instruction::Cmp,
        Instruction::Cpx,
        Instruction::Cpy,
        Instruction::Jmp,
        Instruction::Jsr,
        Instruction::Lda,
        Instruction::Ldx,
        Instruction::Ldy,
        Instruction::Lsr,
    ];

    /// Three-letter assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
        }
    }

    /// Returns the execution unit implementing this instruction.
    ///
    /// ```
    /// use core6502::{Instruction, Register, ResolvedOperand, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// let unit = Instruction::Ldy.unit();
    /// unit(&mut cpu, &ResolvedOperand::immediate(0x33));
    /// assert_eq!(cpu.get_byte(Register::IndexY), 0x33);
    /// ```
    pub fn unit<M: MemoryBus>(self) -> ExecutionUnit<M> {
        match self {
            Instruction::Adc => alu::execute_adc::<M>,
            Instruction::And => alu::execute_and::<M>,
            Instruction::Asl => shifts::execute_asl::<M>,
            Instruction::Bcc => branches::execute_bcc::<M>,
            Instruction::Bcs => branches::execute_bcs::<M>,
            Instruction::Beq => branches::execute_beq::<M>,
            Instruction::Bit => alu::execute_bit::<M>,
            Instruction::Bmi => branches::execute_bmi::<M>,
            Instruction::Bne => branches::execute_bne::<M>,
            Instruction::Bpl => branches::execute_bpl::<M>,
            Instruction::Bvc => branches::execute_bvc::<M>,
            Instruction::Bvs => branches::execute_bvs::<M>,
            Instruction::Clc => flags::execute_clc::<M>,
            Instruction::Cld => flags::execute_cld::<M>,
            Instruction::Cli => flags::execute_cli::<M>,
            Instruction::Clv => flags::execute_clv::<M>,
            Instruction::Cmp => compare::execute_cmp::<M>,
            Instruction::Cpx => compare::execute_cpx::<M>,
            Instruction::Cpy => compare::execute_cpy::<M>,
            Instruction::Jmp => control::execute_jmp::<M>,
            Instruction::Jsr => control::execute_jsr::<M>,
            Instruction::Lda => load::execute_lda::<M>,
            Instruction::Ldx => load::execute_ldx::<M>,
            Instruction::Ldy => load::execute_ldy::<M>,
            Instruction::Lsr => shifts::execute_lsr::<M>,
        }
    }

    /// True for the eight conditional branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bmi
                | Instruction::Bne
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Instruction {
    type Err = ExecutionError;

    /// Parses a mnemonic, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use core6502::{ExecutionError, Instruction};
    ///
    /// assert_eq!("lda".parse::<Instruction>(), Ok(Instruction::Lda));
    /// assert_eq!(
    ///     "STA".parse::<Instruction>(),
    ///     Err(ExecutionError::UnknownMnemonic("STA".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Instruction::ALL
            .iter()
            .copied()
            .find(|ins| ins.mnemonic().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExecutionError::UnknownMnemonic(wanted.to_string()))
    }
}

/// Metadata for a single documented opcode.
///
/// # Fields
///
/// - `opcode`: The opcode byte
/// - `instruction`: Which execution unit runs it
/// - `addressing_mode`: How the decoder resolves its operand
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    pub opcode: u8,
    pub instruction: Instruction,
    pub addressing_mode: AddressingMode,
    pub size_bytes: u8,
}

const fn entry(
    opcode: u8,
    instruction: Instruction,
    addressing_mode: AddressingMode,
) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        instruction,
        addressing_mode,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

/// Every documented opcode of the implemented instructions, sorted by byte.
///
/// Absolute,X and Absolute,Y both map to `Indexed`; zero page,X and zero
/// page,Y both map to `ZeroPageIndexed`.
pub static OPCODES: [OpcodeMetadata; 75] = [
    entry(0x06, Instruction::Asl, AddressingMode::ZeroPageAbsolute),
    entry(0x0A, Instruction::Asl, AddressingMode::Accumulator),
    entry(0x0E, Instruction::Asl, AddressingMode::Absolute),
    entry(0x10, Instruction::Bpl, AddressingMode::Relative),
    entry(0x16, Instruction::Asl, AddressingMode::ZeroPageIndexed),
    entry(0x18, Instruction::Clc, AddressingMode::Implied),
    entry(0x1E, Instruction::Asl, AddressingMode::Indexed),
    entry(0x20, Instruction::Jsr, AddressingMode::Absolute),
    entry(0x21, Instruction::And, AddressingMode::PreIndexedIndirect),
    entry(0x24, Instruction::Bit, AddressingMode::ZeroPageAbsolute),
    entry(0x25, Instruction::And, AddressingMode::ZeroPageAbsolute),
    entry(0x29, Instruction::And, AddressingMode::Immediate),
    entry(0x2C, Instruction::Bit, AddressingMode::Absolute),
    entry(0x2D, Instruction::And, AddressingMode::Absolute),
    entry(0x30, Instruction::Bmi, AddressingMode::Relative),
    entry(0x31, Instruction::And, AddressingMode::PostIndexedIndirect),
    entry(0x35, Instruction::And, AddressingMode::ZeroPageIndexed),
    entry(0x39, Instruction::And, AddressingMode::Indexed),
    entry(0x3D, Instruction::And, AddressingMode::Indexed),
    entry(0x46, Instruction::Lsr, AddressingMode::ZeroPageAbsolute),
    entry(0x4A, Instruction::Lsr, AddressingMode::Accumulator),
    entry(0x4C, Instruction::Jmp, AddressingMode::Absolute),
    entry(0x4E, Instruction::Lsr, AddressingMode::Absolute),
    entry(0x50, Instruction::Bvc, AddressingMode::Relative),
    entry(0x56, Instruction::Lsr, AddressingMode::ZeroPageIndexed),
    entry(0x58, Instruction::Cli, AddressingMode::Implied),
    entry(0x5E, Instruction::Lsr, AddressingMode::Indexed),
    entry(0x61, Instruction::Adc, AddressingMode::PreIndexedIndirect),
    entry(0x65, Instruction::Adc, AddressingMode::ZeroPageAbsolute),
    entry(0x69, Instruction::Adc, AddressingMode::Immediate),
    entry(0x6C, Instruction::Jmp, AddressingMode::Indirect),
    entry(0x6D, Instruction::Adc, AddressingMode::Absolute),
    entry(0x70, Instruction::Bvs, AddressingMode::Relative),
    entry(0x71, Instruction::Adc, AddressingMode::PostIndexedIndirect),
    entry(0x75, Instruction::Adc, AddressingMode::ZeroPageIndexed),
    entry(0x79, Instruction::Adc, AddressingMode::Indexed),
    entry(0x7D, Instruction::Adc, AddressingMode::Indexed),
    entry(0x90, Instruction::Bcc, AddressingMode::Relative),
    entry(0xA0, Instruction::Ldy, AddressingMode::Immediate),
    entry(0xA1, Instruction::Lda, AddressingMode::PreIndexedIndirect),
    entry(0xA2, Instruction::Ldx, AddressingMode::Immediate),
    entry(0xA4, Instruction::Ldy, AddressingMode::ZeroPageAbsolute),
    entry(0xA5, Instruction::Lda, AddressingMode::ZeroPageAbsolute),
    entry(0xA6, Instruction::Ldx, AddressingMode::ZeroPageAbsolute),
    entry(0xA9, Instruction::Lda, AddressingMode::Immediate),
    entry(0xAC, Instruction::Ldy, AddressingMode::Absolute),
    entry(0xAD, Instruction::Lda, AddressingMode::Absolute),
    entry(0xAE, Instruction::Ldx, AddressingMode::Absolute),
    entry(0xB0, Instruction::Bcs, AddressingMode::Relative),
    entry(0xB1, Instruction::Lda, AddressingMode::PostIndexedIndirect),
    entry(0xB4, Instruction::Ldy, AddressingMode::ZeroPageIndexed),
    entry(0xB5, Instruction::Lda, AddressingMode::ZeroPageIndexed),
    entry(0xB6, Instruction::Ldx, AddressingMode::ZeroPageIndexed),
    entry(0xB8, Instruction::Clv, AddressingMode::Implied),
    entry(0xB9, Instruction::Lda, AddressingMode::Indexed),
    entry(0xBC, Instruction::Ldy, AddressingMode::Indexed),
    entry(0xBD, Instruction::Lda, AddressingMode::Indexed),
    entry(0xBE, Instruction::Ldx, AddressingMode::Indexed),
    entry(0xC0, Instruction::Cpy, AddressingMode::Immediate),
    entry(0xC1, Instruction::Cmp, AddressingMode::PreIndexedIndirect),
    entry(0xC4, Instruction::Cpy, AddressingMode::ZeroPageAbsolute),
    entry(0xC5, Instruction::Cmp, AddressingMode::ZeroPageAbsolute),
    entry(0xC9, Instruction::Cmp, AddressingMode::Immediate),
    entry(0xCC, Instruction::Cpy, AddressingMode::Absolute),
    entry(0xCD, Instruction::Cmp, AddressingMode::Absolute),
    entry(0xD0, Instruction::Bne, AddressingMode::Relative),
    entry(0xD1, Instruction::Cmp, AddressingMode::PostIndexedIndirect),
    entry(0xD5, Instruction::Cmp, AddressingMode::ZeroPageIndexed),
    entry(0xD8, Instruction::Cld, AddressingMode::Implied),
    entry(0xD9, Instruction::Cmp, AddressingMode::Indexed),
    entry(0xDD, Instruction::Cmp, AddressingMode::Indexed),
    entry(0xE0, Instruction::Cpx, AddressingMode::Immediate),
    entry(0xE4, Instruction::Cpx, AddressingMode::ZeroPageAbsolute),
    entry(0xEC, Instruction::Cpx, AddressingMode::Absolute),
    entry(0xF0, Instruction::Beq, AddressingMode::Relative),
];

/// Looks up the metadata for an opcode byte.
///
/// # Examples
///
/// ```
/// use core6502::{decode_opcode, AddressingMode, ExecutionError, Instruction};
///
/// let lda = decode_opcode(0xA9).unwrap();
/// assert_eq!(lda.instruction, Instruction::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda.size_bytes, 2);
///
/// assert_eq!(decode_opcode(0xEA), Err(ExecutionError::UnknownOpcode(0xEA)));
/// ```
pub fn decode_opcode(opcode: u8) -> Result<&'static OpcodeMetadata, ExecutionError> {
    OPCODES
        .binary_search_by_key(&opcode, |meta| meta.opcode)
        .map(|index| &OPCODES[index])
        .map_err(|_| ExecutionError::UnknownOpcode(opcode))
}
