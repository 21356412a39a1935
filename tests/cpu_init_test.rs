//! CPU construction, reset and register/flag accessor tests.

use core6502::{Flag, FlatMemory, MemoryBus, Register, CPU, STACK_PAGE};

#[test]
fn test_cpu_initial_values() {
    let cpu = CPU::new();

    assert_eq!(cpu.pc(), 0x0000, "PC should be 0x0000");
    for register in [
        Register::Stack,
        Register::Accumulator,
        Register::IndexX,
        Register::IndexY,
    ] {
        assert_eq!(cpu.get_byte(register), 0x00, "{:?} should be 0x00", register);
    }
    assert_eq!(cpu.status(), 0b0010_0000, "Only bit 5 should be set");

    for flag in Flag::ALL {
        assert!(!cpu.get_flag(flag), "{:?} should be clear", flag);
    }
}

#[test]
fn test_memory_zeroed() {
    let cpu = CPU::new();

    for addr in [0x0000, 0x00FF, STACK_PAGE, 0x01FF, 0x8000, 0xFFFC, 0xFFFF] {
        assert_eq!(cpu.read(addr), 0x00, "0x{:04X} should be zero", addr);
    }
}

#[test]
fn test_with_memory_keeps_contents() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let cpu = CPU::with_memory(memory);

    // No reset vector handling in this core
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.memory().read(0xFFFD), 0x80);
}

#[test]
fn test_memory_read_write_through_cpu() {
    let mut cpu = CPU::new();

    cpu.write(0xFFFF, 0xAB);
    cpu.memory_mut().write(0x0000, 0xCD);

    assert_eq!(cpu.read(0xFFFF), 0xAB);
    assert_eq!(cpu.read(0x0000), 0xCD);
}

#[test]
fn test_flag_round_trip_isolated() {
    for flag in Flag::ALL {
        let mut cpu = CPU::new();

        cpu.set_flag(flag, true);
        assert!(cpu.get_flag(flag));
        assert_eq!(cpu.status(), 0x20 | (1u8 << flag.bit()));

        cpu.set_flag(flag, false);
        assert!(!cpu.get_flag(flag));
        assert_eq!(cpu.status(), 0x20);
    }
}

#[test]
fn test_registers_snapshot_is_read_only_view() {
    let mut cpu = CPU::new();
    cpu.set_byte(Register::IndexY, 0x99);

    let snapshot = cpu.registers().clone();
    cpu.set_byte(Register::IndexY, 0x00);

    assert_eq!(snapshot.get_byte(Register::IndexY), 0x99);
    assert_eq!(cpu.get_byte(Register::IndexY), 0x00);
}

#[test]
#[should_panic(expected = "reserved")]
fn test_clearing_reserved_bit_panics() {
    let mut cpu = CPU::new();
    cpu.set_register_bit(Register::Status, 5, 0);
}
