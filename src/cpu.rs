//! # CPU State and Dispatch
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! the stack primitives, and the entry point that hands a decoded instruction
//! to its execution unit.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Registers**: status, stack pointer, accumulator, X and Y (see [`RegisterFile`])
//! - **Memory**: a 64KB address space behind the [`MemoryBus`] trait
//!
//! ## Execution Model
//!
//! Fetch and decode live outside this crate. The caller resolves an
//! instruction's operand into a [`ResolvedOperand`] and calls
//! [`CPU::execute`], which runs exactly one execution unit to completion.

use crate::opcodes::Instruction;
use crate::registers::{Flag, Register, RegisterFile};
use crate::{FlatMemory, MemoryBus, ResolvedOperand};

/// Base address of the hardware stack page (0x0100-0x01FF).
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 CPU state.
///
/// Generic over the memory implementation via the `MemoryBus` trait; the
/// default is the flat 64KB [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use core6502::{Flag, Register, CPU};
///
/// let cpu = CPU::new();
///
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.get_byte(Register::Accumulator), 0x00);
/// assert_eq!(cpu.get_byte(Register::Status), 0b0010_0000);
/// assert!(!cpu.get_flag(Flag::Carry));
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Status, stack pointer, accumulator and index registers
    pub(crate) registers: RegisterFile,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU over zeroed 64KB memory.
    ///
    /// Registers and program counter are zero; the reserved status bit is 1.
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with zeroed registers over the given memory bus.
    ///
    /// The memory contents are left exactly as provided.
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0200, 0x42);
    ///
    /// let cpu = CPU::with_memory(mem);
    /// assert_eq!(cpu.read(0x0200), 0x42);
    /// ```
    pub fn with_memory(memory: M) -> Self {
        Self {
            pc: 0x0000,
            registers: RegisterFile::new(),
            memory,
        }
    }

    /// Zeroes the program counter and all registers, keeping the reserved
    /// status bit set. Memory is not touched.
    pub fn reset(&mut self) {
        log::debug!("CPU reset (pc was 0x{:04X})", self.pc);
        self.pc = 0x0000;
        self.registers = RegisterFile::new();
    }

    /// Runs `instruction` against `operand`.
    ///
    /// ```
    /// use core6502::{Instruction, Register, ResolvedOperand, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.execute(Instruction::Ldx, &ResolvedOperand::immediate(0x7F));
    /// assert_eq!(cpu.get_byte(Register::IndexX), 0x7F);
    /// ```
    pub fn execute(&mut self, instruction: Instruction, operand: &ResolvedOperand) {
        log::trace!(
            "{} {:?} value=0x{:02X} addr=0x{:04X} pc=0x{:04X}",
            instruction,
            operand.addressing_mode,
            operand.operand_value,
            operand.effective_address,
            self.pc
        );
        let unit = instruction.unit::<M>();
        unit(self, operand);
    }

    // ========== Stack Primitives ==========

    /// Pushes `value` onto the hardware stack.
    ///
    /// Writes to `0x0100 + SP`, then decrements SP (wrapping from 0x00 to 0xFF).
    ///
    /// ```
    /// use core6502::{Register, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.set_byte(Register::Stack, 0xFF);
    /// cpu.push(0x42);
    ///
    /// assert_eq!(cpu.read(0x01FF), 0x42);
    /// assert_eq!(cpu.get_byte(Register::Stack), 0xFE);
    /// ```
    pub fn push(&mut self, value: u8) {
        let sp = self.registers.get_byte(Register::Stack);
        let stack_addr = STACK_PAGE | sp as u16;
        log::trace!("push 0x{:02X} -> 0x{:04X}", value, stack_addr);

        self.memory.write(stack_addr, value);
        self.registers.set_byte(Register::Stack, sp.wrapping_sub(1));
    }

    /// Pops a value from the hardware stack.
    ///
    /// Increments SP (wrapping from 0xFF to 0x00), then reads `0x0100 + SP`.
    pub fn pop(&mut self) -> u8 {
        let sp = self.registers.get_byte(Register::Stack).wrapping_add(1);
        self.registers.set_byte(Register::Stack, sp);

        let stack_addr = STACK_PAGE | sp as u16;
        let value = self.memory.read(stack_addr);
        log::trace!("pop 0x{:02X} <- 0x{:04X}", value, stack_addr);
        value
    }

    // ========== Register and Flag Access ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Returns the value of an 8-bit register.
    pub fn get_byte(&self, register: Register) -> u8 {
        self.registers.get_byte(register)
    }

    /// Stores a value in an 8-bit register.
    pub fn set_byte(&mut self, register: Register, value: u8) {
        self.registers.set_byte(register, value);
    }

    /// Returns true if the status flag is set.
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.registers.get_flag(flag)
    }

    /// Sets or clears a status flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.registers.set_flag(flag, value);
    }

    /// Sets one bit of a register. See [`RegisterFile::set_register_bit`].
    pub fn set_register_bit(&mut self, register: Register, bit: u8, value: u8) {
        self.registers.set_register_bit(register, bit, value);
    }

    /// Returns the status register as a packed byte (bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.registers.get_byte(Register::Status)
    }

    /// Returns the register file for read-only inspection.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    // ========== Memory Access ==========

    /// Reads a byte through the memory bus.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte through the memory bus.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
