//! Constant values of the Chip-8 architecture.

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 0x10; // 16

/// The lower memory space was historically reserved for the interpreter
/// itself, and now holds the builtin fontset.
pub const MEM_START: usize = 0x200; // 512
pub const MEM_SIZE: usize = 0x1000; // 4096

/// Mask for keeping computed addresses inside the memory bank.
///
/// Memory accesses wrap within the 4 KiB bank rather than fault.
pub const MEM_MASK: usize = MEM_SIZE - 1;

/// Largest program image that fits between the program origin and the end
/// of addressable memory.
pub const MAX_PROGRAM_SIZE: usize = 0xFFF - MEM_START;

/// Levels of nesting allowed in the call stack.
///
/// A call at full depth is refused outright, and a return on an empty
/// stack does nothing. Programs that misbehave this way keep running.
pub const STACK_SIZE: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;
pub const DISPLAY_WIDTH_MASK: usize = DISPLAY_WIDTH - 1;
pub const DISPLAY_HEIGHT_MASK: usize = DISPLAY_HEIGHT - 1;

/// Rate, in ticks per second, at which the host is expected to call
/// [`tick_timers`](crate::prelude::Chip8Vm::tick_timers).
pub const TIMER_FREQUENCY: u64 = 60;

/// Number of keys on the keypad (0x0-0xF)
pub const KEY_COUNT: u8 = 16;

/// Address where the builtin fontset is installed.
pub const FONTSET_START: usize = 0x000;

/// Height in bytes of one font glyph.
pub const FONTSET_HEIGHT: usize = 5;

/// Sixteen hexadecimal digit glyphs, 4x5 pixels each, packed one row per
/// byte in the high nibble.
#[rustfmt::skip]
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Type for storing the 12-bit memory addresses.
pub type Address = u16;
