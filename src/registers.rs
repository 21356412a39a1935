//! # Register File and Status Flag Accessor
//!
//! The 6502 has five 8-bit registers besides the program counter. This module
//! owns them and is the only place that touches the raw bits of the status
//! register.
//!
//! Status register layout (NV-BDIZC):
//! - Bit 7: Sign (N)
//! - Bit 6: Overflow (V)
//! - Bit 5: reserved, always 1
//! - Bit 4: Break (B)
//! - Bit 3: Decimal (D)
//! - Bit 2: Interrupt Disable (I)
//! - Bit 1: Zero (Z)
//! - Bit 0: Carry (C)

use bitflags::bitflags;

bitflags! {
    /// Raw bit view of the status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct StatusBits: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const RESERVED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const SIGN = 1 << 7;
    }
}

/// The five 8-bit registers of the 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Processor status (P)
    Status,
    /// Stack pointer (S), offset into page 0x0100
    Stack,
    /// Accumulator (A)
    Accumulator,
    /// X index register
    IndexX,
    /// Y index register
    IndexY,
}

impl Register {
    /// Every register, in status-first order.
    pub const ALL: [Register; 5] = [
        Register::Status,
        Register::Stack,
        Register::Accumulator,
        Register::IndexX,
        Register::IndexY,
    ];
}

/// Individually addressable bits of the status register.
///
/// Bit 5 is reserved and permanently 1, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    BreakOnInterrupt,
    Overflow,
    Sign,
}

impl Flag {
    /// Every addressable flag, ordered by bit position.
    pub const ALL: [Flag; 7] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::BreakOnInterrupt,
        Flag::Overflow,
        Flag::Sign,
    ];

    /// Bit position of this flag inside the status register.
    ///
    /// ```
    /// use core6502::Flag;
    ///
    /// assert_eq!(Flag::Carry.bit(), 0);
    /// assert_eq!(Flag::Overflow.bit(), 6);
    /// assert_eq!(Flag::Sign.bit(), 7);
    /// ```
    pub fn bit(self) -> u8 {
        match self {
            Flag::Carry => 0,
            Flag::Zero => 1,
            Flag::InterruptDisable => 2,
            Flag::Decimal => 3,
            Flag::BreakOnInterrupt => 4,
            Flag::Overflow => 6,
            Flag::Sign => 7,
        }
    }

    /// Looks up the flag stored at a status register bit position.
    ///
    /// # Panics
    ///
    /// Panics if `bit` is the reserved bit 5 or lies outside 0..=7. Both are
    /// precondition violations, not recoverable errors.
    ///
    /// ```
    /// use core6502::Flag;
    ///
    /// assert_eq!(Flag::from_bit(1), Flag::Zero);
    /// ```
    ///
    /// ```should_panic
    /// use core6502::Flag;
    ///
    /// Flag::from_bit(5);
    /// ```
    pub fn from_bit(bit: u8) -> Flag {
        match bit {
            0 => Flag::Carry,
            1 => Flag::Zero,
            2 => Flag::InterruptDisable,
            3 => Flag::Decimal,
            4 => Flag::BreakOnInterrupt,
            5 => panic!("status bit 5 is reserved and cannot be addressed as a flag"),
            6 => Flag::Overflow,
            7 => Flag::Sign,
            _ => panic!("status bit {} out of range (must be 0-7)", bit),
        }
    }

    fn mask(self) -> StatusBits {
        match self {
            Flag::Carry => StatusBits::CARRY,
            Flag::Zero => StatusBits::ZERO,
            Flag::InterruptDisable => StatusBits::INTERRUPT_DISABLE,
            Flag::Decimal => StatusBits::DECIMAL,
            Flag::BreakOnInterrupt => StatusBits::BREAK,
            Flag::Overflow => StatusBits::OVERFLOW,
            Flag::Sign => StatusBits::SIGN,
        }
    }
}

/// Storage for the five 8-bit registers.
///
/// The reserved status bit is set on construction and no accessor can clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    status: StatusBits,
    stack: u8,
    accumulator: u8,
    index_x: u8,
    index_y: u8,
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except the reserved
    /// status bit.
    ///
    /// ```
    /// use core6502::{Register, RegisterFile};
    ///
    /// let regs = RegisterFile::new();
    /// assert_eq!(regs.get_byte(Register::Status), 0b0010_0000);
    /// assert_eq!(regs.get_byte(Register::Accumulator), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            status: StatusBits::RESERVED,
            stack: 0,
            accumulator: 0,
            index_x: 0,
            index_y: 0,
        }
    }

    /// Returns the value held in `register`.
    pub fn get_byte(&self, register: Register) -> u8 {
        match register {
            Register::Status => self.status.bits(),
            Register::Stack => self.stack,
            Register::Accumulator => self.accumulator,
            Register::IndexX => self.index_x,
            Register::IndexY => self.index_y,
        }
    }

    /// Stores `value` in `register`.
    ///
    /// Writing the status register keeps bit 5 at 1 whatever `value` says.
    pub fn set_byte(&mut self, register: Register, value: u8) {
        match register {
            Register::Status => {
                self.status = StatusBits::from_bits_retain(value) | StatusBits::RESERVED
            }
            Register::Stack => self.stack = value,
            Register::Accumulator => self.accumulator = value,
            Register::IndexX => self.index_x = value,
            Register::IndexY => self.index_y = value,
        }
    }

    /// Sets a single bit of `register` to `value`.
    ///
    /// # Panics
    ///
    /// - `bit` greater than 7
    /// - `value` other than 0 or 1
    /// - clearing the reserved status bit
    ///
    /// ```
    /// use core6502::{Register, RegisterFile};
    ///
    /// let mut regs = RegisterFile::new();
    /// regs.set_register_bit(Register::IndexX, 3, 1);
    /// assert_eq!(regs.get_byte(Register::IndexX), 0b0000_1000);
    /// ```
    pub fn set_register_bit(&mut self, register: Register, bit: u8, value: u8) {
        assert!(bit < 8, "register bit {} out of range (must be 0-7)", bit);
        assert!(value <= 1, "bit value {} out of range (must be 0 or 1)", value);
        assert!(
            !(register == Register::Status && bit == 5 && value == 0),
            "status bit 5 is reserved and must stay 1"
        );

        let current = self.get_byte(register);
        let updated = (current & !(1 << bit)) | (value << bit);
        self.set_byte(register, updated);
    }

    /// Returns true if `flag` is set.
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.status.contains(flag.mask())
    }

    /// Sets or clears `flag`, leaving every other status bit untouched.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.status.set(flag.mask(), value);
    }

    /// Sets the Sign flag from bit 7 of `value`.
    pub(crate) fn update_sign(&mut self, value: u8) {
        self.set_flag(Flag::Sign, value & 0x80 != 0);
    }

    /// Sets the Zero flag when `value` is exactly zero.
    pub(crate) fn update_zero(&mut self, value: u8) {
        self.set_flag(Flag::Zero, value == 0);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_register_file_has_reserved_bit() {
        let regs = RegisterFile::new();

        assert_eq!(regs.get_byte(Register::Status), 0b0010_0000);
        for flag in Flag::ALL {
            assert!(!regs.get_flag(flag), "{:?} should start clear", flag);
        }
    }

    #[test]
    fn test_flag_bits_match_status_layout() {
        for flag in Flag::ALL {
            assert_eq!(flag.mask().bits(), 1u8 << flag.bit());
            assert_eq!(Flag::from_bit(flag.bit()), flag);
        }
    }

    #[test]
    fn test_set_flag_touches_only_its_bit() {
        let mut regs = RegisterFile::new();

        regs.set_flag(Flag::Decimal, true);
        assert_eq!(regs.get_byte(Register::Status), 0b0010_1000);

        regs.set_flag(Flag::Sign, true);
        assert_eq!(regs.get_byte(Register::Status), 0b1010_1000);

        regs.set_flag(Flag::Decimal, false);
        assert_eq!(regs.get_byte(Register::Status), 0b1010_0000);
    }

    #[test]
    fn test_status_write_keeps_reserved_bit() {
        let mut regs = RegisterFile::new();

        regs.set_byte(Register::Status, 0x00);
        assert_eq!(regs.get_byte(Register::Status), 0x20);

        regs.set_byte(Register::Status, 0xFF);
        assert_eq!(regs.get_byte(Register::Status), 0xFF);
        assert!(regs.get_flag(Flag::Carry));
        assert!(regs.get_flag(Flag::Sign));
    }

    #[test]
    fn test_set_register_bit() {
        let mut regs = RegisterFile::new();
        regs.set_byte(Register::Accumulator, 0xFF);

        regs.set_register_bit(Register::Accumulator, 7, 0);
        assert_eq!(regs.get_byte(Register::Accumulator), 0x7F);

        regs.set_register_bit(Register::Accumulator, 7, 1);
        assert_eq!(regs.get_byte(Register::Accumulator), 0xFF);

        regs.set_register_bit(Register::Status, 0, 1);
        assert!(regs.get_flag(Flag::Carry));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_register_bit_rejects_bit_index() {
        let mut regs = RegisterFile::new();
        regs.set_register_bit(Register::IndexY, 8, 1);
    }

    #[test]
    #[should_panic(expected = "must be 0 or 1")]
    fn test_set_register_bit_rejects_value() {
        let mut regs = RegisterFile::new();
        regs.set_register_bit(Register::IndexY, 0, 2);
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn test_set_register_bit_rejects_clearing_reserved_bit() {
        let mut regs = RegisterFile::new();
        regs.set_register_bit(Register::Status, 5, 0);
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn test_reserved_flag_index_panics() {
        Flag::from_bit(5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_flag_index_out_of_range_panics() {
        Flag::from_bit(8);
    }

    #[test]
    fn test_sign_and_zero_helpers() {
        let mut regs = RegisterFile::new();

        regs.update_zero(0x00);
        regs.update_sign(0x00);
        assert!(regs.get_flag(Flag::Zero));
        assert!(!regs.get_flag(Flag::Sign));

        regs.update_zero(0x80);
        regs.update_sign(0x80);
        assert!(!regs.get_flag(Flag::Zero));
        assert!(regs.get_flag(Flag::Sign));
    }
}
