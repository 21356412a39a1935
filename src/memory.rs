//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `FlatMemory`, the plain 64KB address
//! space the CPU uses by default.
//!
//! ## Design Principles
//!
//! - No bus errors: a 16-bit address always falls inside the 64KB space
//! - No memory-mapped I/O, banking or protection is modeled here
//! - Simple signatures for WASM compatibility

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use core6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use core6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Number of addressable bytes in the 6502 address space.
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Flat 64KB memory with every address mapped to RAM.
///
/// All 65536 addresses (0x0000-0xFFFF) start zeroed and are writable. Indexing
/// with a `u16` can never leave the buffer.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus};
///
/// let mem = FlatMemory::new();
/// assert_eq!(mem.read(0x0000), 0x00);
/// assert_eq!(mem.read(0xFFFF), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0xAA, 0xBB]);
    /// assert_eq!(mem.read(0xFFFF), 0xAA);
    /// assert_eq!(mem.read(0x0000), 0xBB);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &ADDRESS_SPACE_SIZE)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_load_copies_bytes() {
        let mut mem = FlatMemory::new();
        mem.load(0x0600, &[0xA9, 0x01, 0x69, 0x02]);

        assert_eq!(mem.read(0x0600), 0xA9);
        assert_eq!(mem.read(0x0603), 0x02);
        assert_eq!(mem.read(0x0604), 0x00);
    }
}
