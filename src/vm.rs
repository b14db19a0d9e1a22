//! Virtual machine.
use std::fmt::{self, Write};

use rand::prelude::*;

use crate::{
    bytecode::*,
    constants::*,
    cpu::Chip8Cpu,
    error::{Chip8Error, Chip8Result},
    Chip8DisplayBuffer,
};

pub struct Chip8Vm {
    cpu: Chip8Cpu,
    rng: StdRng,
    conf: Chip8Conf,
}

impl Chip8Vm {
    pub fn new(conf: Chip8Conf) -> Self {
        let rng = match conf.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut vm = Chip8Vm {
            cpu: Chip8Cpu::new(),
            rng,
            conf,
        };
        vm.reset();
        vm
    }

    /// Configuration that was used to instantiate the VM.
    pub fn config(&self) -> &Chip8Conf {
        &self.conf
    }

    /// Clear all machine state and reinstall the builtin fontset, leaving
    /// the VM as if freshly constructed.
    pub fn reset(&mut self) {
        self.cpu.clear_memory();
        self.cpu.registers = [0; REGISTER_COUNT];
        self.cpu.address = 0;
        self.cpu.pc = MEM_START;
        self.cpu.delay_timer = 0;
        self.cpu.sound_timer = 0;
        self.cpu.buzzer_state = false;
        self.cpu.key_wait = false;
        self.cpu.clear_keys();
        self.cpu.trap = false;
        self.cpu.error = None;

        self.cpu.ram[FONTSET_START..FONTSET_START + FONTSET.len()].copy_from_slice(&FONTSET);
    }

    /// Load a program image into memory at the program origin.
    ///
    /// Resets the machine first, so earlier state never leaks into the
    /// loaded program.
    pub fn load_program(&mut self, program: &[u8]) -> Chip8Result<()> {
        if !check_program_size(program) {
            return Err(Chip8Error::LargeProgram);
        }

        self.reset();

        // Load program into virtual RAM
        self.cpu.ram[MEM_START..MEM_START + program.len()].copy_from_slice(program);

        Ok(())
    }

    pub fn display_buffer(&self) -> Chip8DisplayBuffer {
        &self.cpu.display
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Flow {
    Ok,
    Error,
    Interrupt,
    /// Program counter has jumped to a new address.
    ///
    /// This is useful for the caller to avoid being
    /// blocked on infinite or long running loops.
    ///
    /// This is returned when the interpreter encounters:
    ///
    /// - 1nnn (`JP addr`)
    /// - 2nnn (`CALL addr`)
    /// - 00EE (`RET`)
    Jump,
    Draw,
    Sound,
    /// Wait for a keypress.
    ///
    /// This is triggered by the opcode `Fx0A` (`LD Vx, K`), which stops
    /// execution until a key is pressed, and loads the key value into `Vx`.
    KeyWait,
}

/// VM Configuration Parameters.
#[derive(Default, Clone)]
pub struct Chip8Conf {
    /// Seed for the random number generator owned by the VM.
    ///
    /// Fixing the seed makes `RND` output reproducible for tests.
    pub rng_seed: Option<u64>,
    /// Trap on unknown opcodes instead of silently skipping them.
    pub strict: bool,
}

/// Interpreter
impl Chip8Vm {
    /// Press a keypad key. Codes outside 0x0-0xF are ignored.
    ///
    /// If the VM is waiting for keyboard input, the `key_wait` flag will
    /// be cleared so it can be resumed.
    pub fn key_down(&mut self, key: u8) {
        self.cpu.set_key_state(key, true);
        self.cpu.key_wait = false;
    }

    /// Release a keypad key. Codes outside 0x0-0xF are ignored.
    pub fn key_up(&mut self, key: u8) {
        self.cpu.set_key_state(key, false);
    }

    /// Clear the keyboard input state, setting all keys to up.
    pub fn clear_keys(&mut self) {
        self.cpu.clear_keys()
    }

    /// Count down both timers, stopping at zero.
    ///
    /// The host must call this on its own steady clock
    /// ([`TIMER_FREQUENCY`] ticks per second), no matter how many
    /// instructions it steps in between. The VM holds no clock of its own.
    pub fn tick_timers(&mut self) {
        self.cpu.tick_delay();
        self.cpu.tick_sound();

        // Buzzer should be on while sound timer counts down,
        // then turned off when the timer reaches zero.
        if self.cpu.sound_timer > 0 && !self.cpu.buzzer_state {
            self.cpu.buzzer_state = true;
        } else if self.cpu.sound_timer == 0 && self.cpu.buzzer_state {
            self.cpu.buzzer_state = false;
        }
    }

    /// Signal the VM to stop at the next step.
    pub fn interrupt(&mut self) {
        self.cpu.interrupt();
    }

    /// Execute up to `step_count` instructions.
    ///
    /// Stops early when the VM is interrupted or traps on an error.
    pub fn run_steps(&mut self, step_count: usize) -> Chip8Result<Flow> {
        for _ in 0..step_count {
            match self.step() {
                Flow::Error => {
                    return match self.cpu.error {
                        Some(err) => Err(Chip8Error::Runtime(err)),
                        None => Ok(Flow::Error),
                    };
                }
                Flow::Interrupt => return Ok(Flow::Interrupt),
                _ => {}
            }
        }

        Ok(Flow::Ok)
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Flow {
        if self.cpu.trap {
            // Interrupt signal is set.
            return Flow::Interrupt;
        }

        // Each instruction is two bytes, with the opcode identity in the
        // first 4-bit nibble.
        let at = self.cpu.pc;
        let instr = self.cpu.instr();
        let code = op_code(&instr, 0);
        let (vx, nn) = op_xnn(&instr, 0);
        let (_, vy, n) = op_xyn(&instr, 0);
        let nnn = op_nnn(&instr, 0);

        self.cpu.pc += 2;

        let mut control_flow = Flow::Ok;

        match code {
            // 1NNN (JP addr)
            //
            // Jump to address.
            0x1 => {
                op_trace_nnn("JP", at, nnn);

                self.cpu.pc = nnn as usize;

                control_flow = Flow::Jump;
            }
            // 2NNN (CALL addr)
            //
            // Call subroutine at NNN.
            //
            // A call at full stack depth is refused outright: no frame is
            // pushed and the jump does not happen.
            0x2 => {
                op_trace_nnn("CALL", at, nnn);

                if self.cpu.push_return(self.cpu.pc as Address) {
                    self.cpu.pc = nnn as usize;
                    control_flow = Flow::Jump;
                } else {
                    log::debug!("call to {:03X} at {:03X} refused: stack full", nnn, at);
                }
            }
            // 3XNN (SE Vx, byte)
            //
            // Skip the next instruction if register VX equals value NN.
            0x3 => {
                op_trace_xnn("SE", at, vx, nn);

                if self.cpu.registers[vx as usize] == nn {
                    self.cpu.pc += 2;
                }
            }
            // 4XNN (SNE Vx, byte)
            //
            // Skip the next instruction if register VX does not equal value NN.
            0x4 => {
                op_trace_xnn("SNE", at, vx, nn);

                if self.cpu.registers[vx as usize] != nn {
                    self.cpu.pc += 2;
                }
            }
            // 5XY0 (SE Vx, Vy)
            //
            // Skip the next instruction if register VX equals value VY.
            0x5 => {
                op_trace_xy("SE", at, vx, vy);

                let x = self.cpu.registers[vx as usize];
                let y = self.cpu.registers[vy as usize];
                if x == y {
                    self.cpu.pc += 2;
                }
            }
            // 6XNN (LD Vx, byte)
            //
            // Set register VX to value NN.
            0x6 => {
                op_trace_xnn("LD", at, vx, nn);

                self.cpu.registers[vx as usize] = nn;
            }
            // 7XNN (ADD Vx, byte)
            //
            // Add value NN to register VX. Carry flag is not set.
            0x7 => {
                op_trace_xnn("ADD", at, vx, nn);

                let x = self.cpu.registers[vx as usize];
                self.cpu.registers[vx as usize] = x.wrapping_add(nn);
            }
            // Arithmetic instructions identified by n
            0x8 => control_flow = self.exec_math(vx, vy, n, at),
            // 9XY0 (SNE Vx, Vy)
            //
            // Skip the next instruction if register VX does not equal value VY.
            0x9 => {
                op_trace_xy("SNE", at, vx, vy);

                let x = self.cpu.registers[vx as usize];
                let y = self.cpu.registers[vy as usize];
                if x != y {
                    self.cpu.pc += 2;
                }
            }
            // ANNN (LD I, addr)
            //
            // Set address register I to value NNN.
            0xA => {
                op_trace_nnn("LD I", at, nnn);

                self.cpu.address = nnn;
            }
            // BNNN (JP V0, addr)
            //
            // Jump to address NNN plus register V0, masked to 12 bits.
            0xB => {
                op_trace_nnn("JP V0", at, nnn);

                let offset = self.cpu.registers[0] as u16;
                self.cpu.pc = ((nnn + offset) & 0xFFF) as usize;

                control_flow = Flow::Jump;
            }
            // CXNN (RND Vx, byte)
            //
            // Generate random number.
            // Set register VX to the result of bitwise AND between a random
            // number and NN.
            0xC => {
                op_trace_xnn("RND", at, vx, nn);

                self.cpu.registers[vx as usize] = nn & self.rng.gen::<u8>();
            }
            // DXYN (DRW Vx, Vy, nibble)
            //
            // Draw sprite to the display buffer, at coordinate as per registers
            // VX and VY. Sprite is encoded as 8 pixels wide, N pixels high,
            // stored in bits located in memory pointed to by address register I.
            //
            // The sprite origin wraps around to the opposite side of the
            // display; pixels overflowing the right or bottom edge are clipped.
            //
            // If the drawing operation erases existing pixels in the display
            // buffer, register VF is set to 1, and set to 0 if no display bits
            // are unset. This is used for collision detection.
            0xD => {
                op_trace_xyn("DRAW", at, vx, vy, n);

                let (x_origin, y_origin) = (
                    self.cpu.registers[vx as usize] as usize & DISPLAY_WIDTH_MASK,
                    self.cpu.registers[vy as usize] as usize & DISPLAY_HEIGHT_MASK,
                );
                let addr = self.cpu.address as usize;
                let mut is_erased = false;

                // Iteration from pointer in address register I to number of
                // rows specified by opcode value N.
                for r in 0..n as usize {
                    let y = y_origin + r;
                    if y >= DISPLAY_HEIGHT {
                        break;
                    }
                    let row = self.cpu.ram[(addr + r) & MEM_MASK];

                    // Each row is 8 bits representing the 8 pixels of the sprite.
                    for c in 0..8 {
                        let x = x_origin + c;
                        if x >= DISPLAY_WIDTH {
                            break;
                        }
                        let d = x + y * DISPLAY_WIDTH;

                        let old_px = self.cpu.display[d];
                        let new_px = (row >> (7 - c) & 1) != 0;

                        // XOR erases a pixel when the old and new values are both 1.
                        is_erased |= old_px && new_px;

                        // Write to display buffer
                        self.cpu.display[d] = old_px ^ new_px;
                    }
                }

                // If a pixel was erased, then a collision occurred.
                self.cpu.registers[0xF] = is_erased as u8;
                control_flow = Flow::Draw;
            }
            // Miscellaneous instructions (families 0x0, 0xE and 0xF),
            // identified by their low byte.
            _ => control_flow = self.exec_misc(code, vx, nn, at),
        }

        control_flow
    }

    /// Execute an arithmetic instruction
    #[inline]
    #[must_use]
    fn exec_math(&mut self, vx: u8, vy: u8, n: u8, at: usize) -> Flow {
        assert!((vx as usize) < self.cpu.registers.len());
        assert!((vy as usize) < self.cpu.registers.len());

        let mut control_flow = Flow::Ok;

        match n {
            // 8XY0 (LD Vx, Vy)
            //
            // Store the value of register VY in register VX.
            0x0 => {
                op_trace_xy_op("LD", at, vx, vy, n);

                self.cpu.registers[vx as usize] = self.cpu.registers[vy as usize];
            }
            // 8XY1 (OR Vx, Vy)
            //
            // Performs bitwise OR on VX and VY, and stores the result in VX.
            0x1 => {
                op_trace_xy_op("OR", at, vx, vy, n);

                self.cpu.registers[vx as usize] |= self.cpu.registers[vy as usize];
            }
            // 8XY2 (AND Vx, Vy)
            //
            // Performs bitwise AND on VX and VY, and stores the result in VX.
            0x2 => {
                op_trace_xy_op("AND", at, vx, vy, n);

                self.cpu.registers[vx as usize] &= self.cpu.registers[vy as usize];
            }
            // 8XY3 (XOR Vx, Vy)
            //
            // Performs bitwise XOR on VX and VY, and stores the result in VX.
            0x3 => {
                op_trace_xy_op("XOR", at, vx, vy, n);

                self.cpu.registers[vx as usize] ^= self.cpu.registers[vy as usize];
            }
            // 8XY4 (ADD Vx, Vy)
            //
            // Adds VY to VX, and stores the result in VX.
            // Overflow is wrapped.
            // If overflow, set VF to 1, else 0.
            0x4 => {
                op_trace_xy_op("ADD", at, vx, vy, n);

                let (x, y) = (
                    self.cpu.registers[vx as usize],
                    self.cpu.registers[vy as usize],
                );
                let result = x as u16 + y as u16;
                self.cpu.registers[vx as usize] = (result & 0xFF) as u8; // Overflow wrap
                self.cpu.registers[0xF] = (result > 0xFF) as u8;
            }
            // 8XY5 (SUB Vx, Vy)
            //
            // Subtracts VY from VX, and stores the result in VX.
            // VF is set to 0 when there is a borrow, set to 1 when there isn't.
            0x5 => {
                op_trace_xy_op("SUB", at, vx, vy, n);

                let (x, y) = (
                    self.cpu.registers[vx as usize],
                    self.cpu.registers[vy as usize],
                );
                self.cpu.registers[vx as usize] = x.wrapping_sub(y); // Underflow wrap
                self.cpu.registers[0xF] = (y <= x) as u8;
            }
            // 8XY6 (SHR Vx)
            //
            // If the least-significant bit of VX is 1, then VF is set to 1,
            // otherwise 0. Shift VX right by 1.
            // VY is unused.
            0x6 => {
                op_trace_xy_op("SHR", at, vx, vy, n);

                let x = self.cpu.registers[vx as usize];
                self.cpu.registers[0xF] = x & 1;
                self.cpu.registers[vx as usize] = x >> 1;
            }
            // 8XY7 (SUBN Vx, Vy)
            //
            // Subtracts VX from VY, and stores the result in VX.
            // VF is set to 0 when there is a borrow, set to 1 when there isn't.
            0x7 => {
                op_trace_xy_op("SUBN", at, vx, vy, n);

                let (x, y) = (
                    self.cpu.registers[vx as usize],
                    self.cpu.registers[vy as usize],
                );
                self.cpu.registers[vx as usize] = y.wrapping_sub(x); // Underflow wrap
                self.cpu.registers[0xF] = (x <= y) as u8;
            }
            // 8XYE (SHL Vx)
            //
            // If the most-significant bit of VX is 1, then VF is set to 1,
            // otherwise 0. Shift VX left by 1.
            // VY is unused.
            0xE => {
                op_trace_xy_op("SHL", at, vx, vy, n);

                let x = self.cpu.registers[vx as usize];
                self.cpu.registers[0xF] = (x >> 7) & 1;
                self.cpu.registers[vx as usize] = x << 1;
            }
            // ----------------------------------------------------------------
            // Unsupported operation.
            _ => {
                let word = 0x8000 | ((vx as u16) << 8) | ((vy as u16) << 4) | n as u16;
                control_flow = self.unknown_op(word, at);
            }
        }

        control_flow
    }

    /// Execute a miscellaneous instruction
    #[inline]
    #[must_use]
    fn exec_misc(&mut self, op: u8, vx: u8, nn: u8, at: usize) -> Flow {
        assert!((vx as usize) < self.cpu.registers.len());

        let mut control_flow = Flow::Ok;

        match (op, nn) {
            // ----------------------------------------------------------------
            // 00E0 (CLS)
            //
            // Clear display
            (0x0, 0xE0) => {
                op_trace("CLS", at);

                self.cpu.clear_display();
            }
            // 00EE (RET)
            //
            // Return from a subroutine.
            // Set the program counter to the return pointer at the top of the
            // stack. A return with no call in flight does nothing.
            (0x0, 0xEE) => {
                op_trace("RET", at);

                match self.cpu.pop_return() {
                    Some(address) => {
                        self.cpu.pc = address as usize;
                        control_flow = Flow::Jump;
                    }
                    None => {
                        log::debug!("return at {:03X} ignored: stack empty", at);
                    }
                }
            }
            // ----------------------------------------------------------------
            // EX9E (SKP Vx)
            //
            // Skip the next instruction if the key stored in VX is pressed.
            (0xE, 0x9E) => {
                op_trace("SKP", at);

                if self.cpu.key_state(self.cpu.registers[vx as usize]) {
                    self.cpu.pc += 2;
                }
            }
            // EXA1 (SKNP Vx)
            //
            // Skip the next instruction if the key stored in VX is not pressed.
            (0xE, 0xA1) => {
                op_trace("SKNP", at);

                if !self.cpu.key_state(self.cpu.registers[vx as usize]) {
                    self.cpu.pc += 2;
                }
            }
            // ----------------------------------------------------------------
            // FX07 (LD Vx, DT)
            //
            // Set Vx = delay timer value.
            (0xF, 0x07) => {
                op_trace_xk("LD", at, vx, "DT");

                self.cpu.registers[vx as usize] = self.cpu.delay_timer;
            }
            // FX0A (LD Vx, K)
            //
            // Wait for a key press, store the value of the key in Vx.
            //
            // Realized as a poll: while no key is down the program counter is
            // rewound so the same instruction re-executes on the next step.
            (0xF, 0x0A) => {
                op_trace_xk("LD", at, vx, "K");

                if let Some(k) = self.cpu.first_key() {
                    self.cpu.registers[vx as usize] = k;
                    self.cpu.key_wait = false;
                } else {
                    // rewind the program counter to stall the machine
                    self.cpu.pc -= 2;
                    self.cpu.key_wait = true;
                    control_flow = Flow::KeyWait;
                }
            }
            // FX15 (LD DT, Vx)
            //
            // Set delay timer = Vx.
            (0xF, 0x15) => {
                op_trace_kx("LD", at, vx, "DT");

                self.cpu.delay_timer = self.cpu.registers[vx as usize];
            }
            // FX18 (LD ST, Vx)
            //
            // Set sound timer = Vx.
            (0xF, 0x18) => {
                op_trace_kx("LD", at, vx, "ST");

                self.cpu.sound_timer = self.cpu.registers[vx as usize];
                self.cpu.buzzer_state = self.cpu.sound_timer > 0;
                control_flow = Flow::Sound;
            }
            // FX1E (ADD I, Vx)
            //
            // Add Vx to I. The address register keeps its full 16-bit value;
            // masking to 12 bits happens on memory access.
            (0xF, 0x1E) => {
                op_trace_kx("ADD", at, vx, "I");

                let x = self.cpu.registers[vx as usize] as u16;
                self.cpu.address = self.cpu.address.wrapping_add(x);
            }
            // FX29 (LD F, Vx)
            //
            // Set I = location of sprite for digit Vx.
            (0xF, 0x29) => {
                op_trace_kx("LD", at, vx, "F");

                let x = self.cpu.registers[vx as usize];
                self.cpu.address = FONTSET_START as u16 + (x as u16) * FONTSET_HEIGHT as u16;
            }
            // FX33 (LD B, Vx)
            //
            // Store the binary-coded decimal representation of Vx
            // in the memory locations I, I+1, and I+2.
            #[rustfmt::skip]
            (0xF, 0x33) => {
                op_trace_kx("LD", at, vx, "B");

                let addr = self.cpu.address as usize;
                let x = self.cpu.registers[vx as usize];
                self.cpu.ram[addr       & MEM_MASK] = x / 100 % 10;
                self.cpu.ram[(addr + 1) & MEM_MASK] = x / 10  % 10;
                self.cpu.ram[(addr + 2) & MEM_MASK] = x       % 10;
            }
            // FX55 (LD [I], Vx)
            //
            // Store registers V0 through VX in memory starting at location I.
            // I advances past the last byte written.
            (0xF, 0x55) => {
                op_trace_kx("LD", at, vx, "[I]");

                let addr = self.cpu.address as usize;
                for v in 0..=vx as usize {
                    self.cpu.ram[(addr + v) & MEM_MASK] = self.cpu.registers[v];
                }
                self.cpu.address = self.cpu.address.wrapping_add(vx as u16 + 1);
            }
            // FX65 (LD Vx, [I])
            //
            // Read registers V0 through VX from memory starting at location I.
            // I advances past the last byte read.
            (0xF, 0x65) => {
                op_trace_xk("LD", at, vx, "[I]");

                let addr = self.cpu.address as usize;
                for v in 0..=vx as usize {
                    self.cpu.registers[v] = self.cpu.ram[(addr + v) & MEM_MASK];
                }
                self.cpu.address = self.cpu.address.wrapping_add(vx as u16 + 1);
            }
            // ----------------------------------------------------------------
            // Unsupported operation.
            _ => {
                let word = ((op as u16) << 12) | ((vx as u16) << 8) | nn as u16;
                control_flow = self.unknown_op(word, at);
            }
        }

        control_flow
    }

    /// Handle an instruction word that matches no known pattern.
    ///
    /// The program counter has already moved past the word. By default the
    /// machine absorbs it and continues; in strict mode it traps.
    fn unknown_op(&mut self, word: u16, at: usize) -> Flow {
        log::debug!("unknown opcode {:04X} at {:03X}", word, at);

        if self.conf.strict {
            self.cpu.set_error("unknown opcode");
            Flow::Error
        } else {
            Flow::Ok
        }
    }
}

/// State introspection
impl Chip8Vm {
    /// Address of the next instruction to fetch.
    pub fn pc(&self) -> usize {
        self.cpu.pc
    }

    /// Current value of the address register I.
    pub fn address(&self) -> Address {
        self.cpu.address
    }

    /// The sixteen general purpose registers V0-VF.
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.cpu.registers
    }

    /// Return pointers currently on the call stack, bottom first.
    pub fn stack(&self) -> &[Address] {
        self.cpu.return_stack()
    }

    /// Current value of the delay timer.
    pub fn delay_timer(&self) -> u8 {
        self.cpu.delay_timer
    }

    /// Current value of the sound timer.
    pub fn sound_timer(&self) -> u8 {
        self.cpu.sound_timer
    }

    /// Whether the host should be playing its beep tone right now.
    pub fn sound_active(&self) -> bool {
        self.cpu.buzzer_state
    }

    /// Read-only view of the whole memory bank.
    pub fn memory(&self) -> &[u8] {
        &*self.cpu.ram
    }

    /// Error message if the VM has trapped on a runtime error.
    pub fn error(&self) -> Option<&str> {
        self.cpu.error()
    }
}

/// Troubleshooting
#[allow(dead_code)]
#[doc(hidden)]
impl Chip8Vm {
    /// Returns the contents of the memory as a human readable string.
    pub fn dump_ram(&self, count: usize) -> Result<String, fmt::Error> {
        let iter = self
            .cpu
            .ram
            .iter()
            .enumerate()
            .skip(MEM_START)
            .take(count)
            .step_by(2);
        let mut buf = String::new();

        for (i, op) in iter {
            writeln!(buf, "{:04X}: {:02X}{:02X}", i, op, self.cpu.ram[i + 1])?;
        }

        Ok(buf)
    }

    pub fn dump_display(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                if self.cpu.display[x + y * DISPLAY_WIDTH] {
                    write!(buf, "#")?;
                } else {
                    write!(buf, ".")?;
                }
            }
            writeln!(buf)?;
        }

        Ok(buf)
    }

    pub fn dump_keys(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        if self.cpu.any_key() {
            write!(buf, "keys: ")?;
            for i in 0..KEY_COUNT {
                if self.cpu.key_state(i) {
                    write!(buf, "k{:x}", i)?;
                }
            }
        }

        Ok(buf)
    }
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace(name: &str, at: usize) {
    log::trace!("{:04X}: {:4}", at, name);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_nnn(name: &str, at: usize, nnn: u16) {
    log::trace!("{:04X}: {:4} {:03X}", at, name, nnn);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_xnn(name: &str, at: usize, vx: u8, nn: u8) {
    log::trace!("{:04X}: {:4} V{:02X} {:02X}", at, name, vx, nn);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_xyn(name: &str, at: usize, vx: u8, vy: u8, n: u8) {
    log::trace!("{:04X}: {:4} V{:02X} V{:02X} {:01X}", at, name, vx, vy, n);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_xy(name: &str, at: usize, vx: u8, vy: u8) {
    log::trace!("{:04X}: {:4} V{:02X} V{:02X}", at, name, vx, vy);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_xk(name: &str, at: usize, vx: u8, k: &str) {
    log::trace!("{:04X}: {:4} V{:02X} {}", at, name, vx, k);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_kx(name: &str, at: usize, vx: u8, k: &str) {
    log::trace!("{:04X}: {:4} {} V{:02X}", at, name, k, vx);
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace_xy_op(name: &str, at: usize, vx: u8, vy: u8, n: u8) {
    log::trace!("{:04X}: {:4} V{:02X} V{:02X} {:02X}", at, name, vx, vy, n);
}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace(_: &str, _: usize) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_nnn(_: &str, _: usize, _: u16) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_xnn(_: &str, _: usize, _: u8, _: u8) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_xyn(_: &str, _: usize, _: u8, _: u8, _: u8) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_xy(_: &str, _: usize, _: u8, _: u8) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_xk(_: &str, _: usize, _: u8, _: &str) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_kx(_: &str, _: usize, _: u8, _: &str) {}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace_xy_op(_: &str, _: usize, _: u8, _: u8, _: u8) {}
