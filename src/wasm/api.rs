//! WASM API for the 6502 execution core.
//!
//! Provides JavaScript-callable interfaces for state inspection and for
//! executing an instruction the JavaScript side has already decoded.

use crate::{
    decode_opcode, Flag, FlatMemory, Instruction, Register, ResolvedOperand, CPU,
};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with zeroed registers and memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 { cpu: CPU::new() }
    }

    /// Reset registers and PC, keeping memory
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a decoded opcode.
    ///
    /// The opcode byte selects the instruction and addressing mode; the
    /// caller supplies the operand value and effective address it resolved.
    pub fn execute_opcode(
        &mut self,
        opcode: u8,
        operand_value: u8,
        effective_address: u16,
    ) -> Result<(), JsError> {
        let meta = decode_opcode(opcode).map_err(|e| JsError::new(&e.to_string()))?;
        let operand = ResolvedOperand::new(operand_value, effective_address, meta.addressing_mode);
        self.cpu.execute(meta.instruction, &operand);
        Ok(())
    }

    /// Execute an instruction by mnemonic, keeping the addressing mode of its
    /// first documented opcode.
    pub fn execute_mnemonic(
        &mut self,
        mnemonic: &str,
        operand_value: u8,
        effective_address: u16,
    ) -> Result<(), JsError> {
        let instruction: Instruction = mnemonic
            .parse()
            .map_err(|e: crate::ExecutionError| JsError::new(&e.to_string()))?;
        let meta = crate::OPCODES
            .iter()
            .find(|meta| meta.instruction == instruction)
            .ok_or_else(|| JsError::new(&format!("{} has no opcode", instruction)))?;
        let operand = ResolvedOperand::new(operand_value, effective_address, meta.addressing_mode);
        self.cpu.execute(instruction, &operand);
        Ok(())
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.get_byte(Register::Accumulator)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.get_byte(Register::IndexX)
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.get_byte(Register::IndexY)
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.get_byte(Register::Stack)
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.get_flag(Flag::Sign)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.get_flag(Flag::Overflow)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.get_flag(Flag::BreakOnInterrupt)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.get_flag(Flag::Decimal)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.get_flag(Flag::InterruptDisable)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.get_flag(Flag::Zero)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.get_flag(Flag::Carry)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as u16) << 8;
        let bytes: Vec<u8> = (0..256u16).map(|i| self.cpu.read(start + i)).collect();
        js_sys::Uint8Array::from(&bytes[..])
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
