//! WebAssembly bindings for the 6502 execution core.
//!
//! This module provides JavaScript-callable interfaces for inspecting CPU
//! state and running decoded instructions from a browser-side decoder.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
