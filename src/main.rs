use std::env;

use simplec_stdio::bytecode::disasm::print_program;
use simplec_stdio::{Arg, CallSite, LibFn, Lowerer, SourceLoc};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage();
        return;
    }
    let show_bytes = args.contains(&"--bytes".to_string());

    // Demo: the call-sites a front end would hand over for a small program,
    // lowered and disassembled.
    let calls = vec![
        CallSite::new(
            LibFn::Printf,
            vec![Arg::ConstStr("Hello, world!\n".to_string())],
            SourceLoc::new(3, 5),
        ),
        CallSite::new(
            LibFn::Printf,
            vec![
                Arg::ConstStr("%d bottle(s) of %s\n".to_string()),
                Arg::ConstInt(99),
                Arg::Runtime("drink".to_string()),
            ],
            SourceLoc::new(4, 5),
        ),
        CallSite::new(LibFn::Putchar, vec![Arg::ConstInt(65)], SourceLoc::new(5, 5)),
        CallSite::with_stream(
            LibFn::Fprintf,
            "stderr",
            vec![Arg::ConstStr("done: 100%%\n".to_string())],
            SourceLoc::new(6, 5),
        ),
    ];

    let program = match Lowerer::new().lower_program(&calls) {
        Ok(program) => program,
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("error: {}", diagnostic);
            }
            std::process::exit(1);
        }
    };

    print_program(&program);

    if show_bytes {
        match program.to_bytes() {
            Ok(bytes) => println!("{} bytes encoded", bytes.len()),
            Err(e) => {
                eprintln!("encoding failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("simplec-stdio - stdio lowering demo");
    println!();
    println!("Usage:");
    println!("  simplec-stdio             Lower the demo call-sites and disassemble");
    println!("  simplec-stdio --bytes     Also show the encoded byte size");
    println!("  simplec-stdio --help, -h  Show this help");
}
