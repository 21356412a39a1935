//! # Addressing Modes
//!
//! This module defines the addressing modes a decoder can report and the
//! `ResolvedOperand` record it hands to every execution unit.

/// 6502 addressing mode enumeration.
///
/// The mode decides how a decoder derives the operand value and effective
/// address from the instruction stream. Execution units only look at it to
/// pick a write-back target: `Accumulator` writes the accumulator, every other
/// mode writes `memory[effective_address]`.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPageAbsolute, ZeroPageIndexed, PreIndexedIndirect, PostIndexedIndirect, Relative
/// - **2 bytes**: Absolute, Indexed, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPageAbsolute,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, CLV
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A
    Accumulator,

    /// 16-bit address indexed by X or Y.
    ///
    /// Example: LDA $1234,X
    Indexed,

    /// Zero page address indexed by X or Y, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageIndexed,

    /// Indirect jump through a 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    PreIndexedIndirect,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    PostIndexedIndirect,

    /// Signed 8-bit offset used by branches.
    ///
    /// Example: BEQ label
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode in this mode.
    ///
    /// ```
    /// use core6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
    /// assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
    /// assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    /// ```
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPageAbsolute
            | AddressingMode::ZeroPageIndexed
            | AddressingMode::PreIndexedIndirect
            | AddressingMode::PostIndexedIndirect
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute | AddressingMode::Indexed | AddressingMode::Indirect => 2,
        }
    }
}

/// Operand record produced by the external decoder for one instruction.
///
/// - `operand_value`: the byte the instruction consumes (the immediate byte,
///   the byte read from `effective_address`, or the accumulator in
///   `Accumulator` mode)
/// - `effective_address`: the write-back address for shifts, and the target
///   of every branch and jump
/// - `addressing_mode`: how the decoder resolved the two fields above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOperand {
    pub operand_value: u8,
    pub effective_address: u16,
    pub addressing_mode: AddressingMode,
}

impl ResolvedOperand {
    /// Creates an operand record from its three fields.
    pub const fn new(
        operand_value: u8,
        effective_address: u16,
        addressing_mode: AddressingMode,
    ) -> Self {
        Self {
            operand_value,
            effective_address,
            addressing_mode,
        }
    }

    /// Operand for an instruction with an immediate byte.
    pub const fn immediate(value: u8) -> Self {
        Self::new(value, 0, AddressingMode::Immediate)
    }

    /// Operand for an instruction acting on the accumulator, which currently
    /// holds `accumulator`.
    pub const fn accumulator(accumulator: u8) -> Self {
        Self::new(accumulator, 0, AddressingMode::Accumulator)
    }

    /// Operand for an instruction with no operand at all.
    pub const fn implied() -> Self {
        Self::new(0, 0, AddressingMode::Implied)
    }

    /// Operand for a value the decoder read from `address`.
    pub const fn memory(value: u8, address: u16, addressing_mode: AddressingMode) -> Self {
        Self::new(value, address, addressing_mode)
    }

    /// Operand for a branch whose resolved target is `target`.
    pub const fn branch(target: u16) -> Self {
        Self::new(0, target, AddressingMode::Relative)
    }

    /// Operand for JMP/JSR to the absolute address `target`.
    pub const fn jump(target: u16) -> Self {
        Self::new(0, target, AddressingMode::Absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_fill_fields() {
        let op = ResolvedOperand::memory(0x42, 0x1234, AddressingMode::Indexed);
        assert_eq!(op.operand_value, 0x42);
        assert_eq!(op.effective_address, 0x1234);
        assert_eq!(op.addressing_mode, AddressingMode::Indexed);

        assert_eq!(
            ResolvedOperand::branch(0x8010).addressing_mode,
            AddressingMode::Relative
        );
        assert_eq!(ResolvedOperand::jump(0xC000).effective_address, 0xC000);
        assert_eq!(
            ResolvedOperand::accumulator(0x80).addressing_mode,
            AddressingMode::Accumulator
        );
    }

    #[test]
    fn test_operand_bytes_range() {
        let modes = [
            AddressingMode::Immediate,
            AddressingMode::Absolute,
            AddressingMode::ZeroPageAbsolute,
            AddressingMode::Implied,
            AddressingMode::Accumulator,
            AddressingMode::Indexed,
            AddressingMode::ZeroPageIndexed,
            AddressingMode::Indirect,
            AddressingMode::PreIndexedIndirect,
            AddressingMode::PostIndexedIndirect,
            AddressingMode::Relative,
        ];
        for mode in modes {
            assert!(mode.operand_bytes() <= 2, "{:?}", mode);
        }
    }
}
