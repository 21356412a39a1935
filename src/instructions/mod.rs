//! # 6502 Instruction Implementations
//!
//! One execution unit per opcode, organized by category. Every unit has the
//! same shape, [`ExecutionUnit`](crate::ExecutionUnit): it takes the CPU and
//! the decoder's [`ResolvedOperand`](crate::ResolvedOperand), and mutates
//! registers, flags and memory in place. Units never fail.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, AND, BIT)
//! - **compare**: Register comparisons (CMP, CPX, CPY)
//! - **shifts**: Shift operations (ASL, LSR)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **control**: Control flow instructions (JMP, JSR)
//! - **flags**: Status flag manipulation (CLC, CLD, CLI, CLV)
//! - **load**: Register loads (LDA, LDX, LDY)

pub mod alu;
pub mod branches;
pub mod compare;
pub mod control;
pub mod flags;
pub mod load;
pub mod shifts;
