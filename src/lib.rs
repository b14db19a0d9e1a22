mod bytecode;
pub mod constants;
mod cpu;
mod error;
mod vm;

use self::constants::DISPLAY_BUFFER_SIZE;

/// Read-only view of the monochrome display, one `bool` per pixel in
/// row-major order.
pub type Chip8DisplayBuffer<'a> = &'a [bool; DISPLAY_BUFFER_SIZE];

pub mod prelude {
    pub use super::{
        cpu::Chip8Cpu,
        error::{Chip8Error, Chip8Result},
        vm::{Chip8Conf, Chip8Vm, Flow},
    };
    pub use super::Chip8DisplayBuffer;
}
