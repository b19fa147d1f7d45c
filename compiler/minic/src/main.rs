//! Mini CLI
//!
//! Runs Mini programs from files or from the bundled demos.

use minic::commands::{parse_run_args, run_demos, run_file, RunOptions};

fn main() {
    minic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (path, options) = match parse_run_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: mini run <file> [--echo] [--dump-symbols] [--verbose]");
                    std::process::exit(1);
                }
            };

            run_file(&path, &options);
        }
        "demo" => {
            let mut options = RunOptions::for_demo();
            let mut selected = Vec::new();

            for arg in args.iter().skip(2) {
                if options.apply_flag(arg) {
                    continue;
                }
                if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                }
                selected.push(arg.clone());
            }

            let handler = mini_eval::stdout_handler();
            if let Err(name) = run_demos(&selected, &options, &handler) {
                eprintln!("error: unknown demo '{name}'");
                eprintln!("Available demos: sum, reassign, literal-sum, syntax-error");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Mini {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Mini line interpreter");
    println!();
    println!("Usage: mini <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>          Run a Mini program");
    println!("  demo [names...]     Run the bundled demo programs (default: all)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --echo              Print the program before running it (default for demo)");
    println!("  --no-echo           Do not print the program");
    println!("  --dump-symbols      Print the symbol table after the run");
    println!("  --verbose, -v       Explain why a run failed");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Tracing filter, e.g. RUST_LOG=mini_eval=trace");
    println!();
    println!("Examples:");
    println!("  mini run program.mini");
    println!("  mini run program.mini --dump-symbols");
    println!("  mini demo sum syntax-error");
}
