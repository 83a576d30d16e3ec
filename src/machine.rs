use std::io::{self, BufWriter, Read, Write};

use crate::error::UmError;
use crate::instruction::{Instruction, Opcode};
use crate::memory::Memory;
use crate::registers::Registers;

/// Run a UM program against the host's real stdin/stdout.
pub fn run(program: Vec<u32>) -> Result<(), UmError> {
    run_with_io(program, io::stdin(), io::stdout())
}

/// Run a UM program against arbitrary byte-stream I/O. Factored out of
/// [`run`] so tests (and anything else embedding the interpreter) can drive
/// it against in-memory buffers instead of the real host streams.
pub fn run_with_io<R: Read, W: Write>(
    program: Vec<u32>,
    mut stdin: R,
    stdout: W,
) -> Result<(), UmError> {
    // Takes an in-memory executable image and executes it.
    // It is a c.r.e. if an instruction word has
    // an invalid opcode (14 or 15).
    let mut segmap = Memory::new(program);
    // next, start calling decode() on each instruction
    // and dispatch it!
    let mut r = Registers::new();
    let mut pc = 0_u32;
    let mut inst_counter = 0_u64;
    let mut stdout = BufWriter::new(stdout);

    log::info!("starting execution, segment 0 has {} words", segmap.program_len());

    loop {
        let word = segmap.get_instruction(pc);
        let instr = match Instruction::decode(word) {
            Some(instr) => instr,
            None => panic!("illegal instruction {word:#010x} at pc={pc}"),
        };
        let op = instr.opcode;
        inst_counter += 1;
        pc += 1;
        match op {
            Opcode::CMov => {
                if r[instr.rc] != 0 {
                    r[instr.ra] = r[instr.rb]
                }
            }
            Opcode::Load => {
                r[instr.ra] = segmap.load(r[instr.rb], r[instr.rc]);
            }
            Opcode::Store => {
                segmap.store(r[instr.ra], r[instr.rb], r[instr.rc]);
            }
            Opcode::Add => {
                r[instr.ra] = r[instr.rb].wrapping_add(r[instr.rc]);
            }
            Opcode::Mul => {
                r[instr.ra] = r[instr.rb].wrapping_mul(r[instr.rc]);
            }
            Opcode::Div => {
                if r[instr.rc] == 0 {
                    return Err(UmError::DivisionByZero { pc: pc - 1 });
                }
                r[instr.ra] = r[instr.rb] / r[instr.rc];
            }
            Opcode::Nand => {
                r[instr.ra] = !(r[instr.rb] & r[instr.rc]);
            }
            Opcode::Halt => {
                stdout.flush().expect("failed to flush stdout");
                log::info!("{} instructions executed", inst_counter);
                return Ok(());
            }
            Opcode::MapSegment => {
                r[instr.rb] = segmap.allocate(r[instr.rc])?;
                log::trace!("mapped segment {} ({} words)", r[instr.rb], r[instr.rc]);
            }
            Opcode::UnmapSegment => {
                segmap.deallocate(r[instr.rc]);
                log::trace!("unmapped segment {}", r[instr.rc]);
            }
            Opcode::Output => {
                let value = r[instr.rc];
                if value > 0xFF {
                    return Err(UmError::OutputOutOfRange { value, pc: pc - 1 });
                }
                stdout.write_all(&[value as u8]).expect("failed to write stdout");
            }
            Opcode::Input => {
                let mut byte = [0_u8; 1];
                r[instr.rc] = match stdin.read(&mut byte) {
                    Ok(1) => byte[0] as u32,
                    Ok(_) => !0,
                    Err(e) => panic!("failed to read stdin: {e}"),
                };
            }
            Opcode::LoadProgram => {
                if r[instr.rb] != 0 {
                    segmap.load_segment(r[instr.rb]);
                }
                pc = r[instr.rc];
            }
            Opcode::LoadValue => {
                r[instr.ra] = instr.value;
            }
        }
    }
}
