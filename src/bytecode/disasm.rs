use crate::bytecode::{LoweredProgram, Op};

/// Print a disassembly of a lowered program.
pub fn print_program(program: &LoweredProgram) {
    println!("════════════════════════════════════════");
    println!(" lowered stdio calls");
    println!(" {} instructions", program.ops.len());
    println!("════════════════════════════════════════");
    disassemble_ops(&program.ops);
    println!();
}

/// Disassemble a slice of ops, one per line with its address.
pub fn disassemble_ops(ops: &[Op]) {
    for (ip, op) in ops.iter().enumerate() {
        print!("{:04}   ", ip);
        print_op(op);
    }
}

fn print_op(op: &Op) {
    match op {
        Op::LoadStr { slot, text } => println!("LOAD_STR    r{}, {:?}", slot, text),
        Op::LoadInt { slot, value } => println!("LOAD_INT    r{}, {}", slot, value),
        Op::LoadArg { slot, source } => println!("LOAD_ARG    r{}, [{}]", slot, source),
        Op::PrintStr { slot } => println!("PRINT_STR   r{}", slot),
        Op::PrintChar { slot } => println!("PRINT_CHAR  r{}", slot),
        Op::PrintNum { slot } => println!("PRINT_NUM   r{}", slot),
        Op::SetStream { handle } => println!("SET_STREAM  #{}", handle.0),
    }
}
