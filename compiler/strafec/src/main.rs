//! strafe CLI
//!
//! Runs movement scripts against the tick-by-tick physics simulation.

use strafec::commands::{
    eval_script, find_strategy, format_strategy, lex_file, parse_file, run_demo, run_file,
};
use strafec::{init_tracing, parse_options, RunError, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let (options, positional) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(e) => fail(&RunError::from(e)),
    };

    let result = match command {
        "run" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: strafe run <file> [options]");
                std::process::exit(1);
            };
            run_file(path, &options)
        }
        "eval" => {
            let Some(script) = positional.first() else {
                eprintln!("Usage: strafe eval \"<script>\" [options]");
                std::process::exit(1);
            };
            eval_script(script, &options)
        }
        "demo" => run_demo(&options),
        "lex" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: strafe lex <file>");
                std::process::exit(1);
            };
            lex_file(path)
        }
        "parse" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: strafe parse <file>");
                std::process::exit(1);
            };
            parse_file(path)
        }
        "find" => {
            if options.size_z.is_none() {
                eprintln!("Usage: strafe find --size <z> [--right] [options]");
                std::process::exit(1);
            }
            find(&options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("strafe {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn find(options: &RunOptions) -> Result<(), RunError> {
    let strategy = find_strategy(options)?;
    print!("{}", format_strategy(&strategy, options.precision));
    Ok(())
}

fn fail(error: &RunError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("strafe: tick-by-tick movement simulator");
    println!();
    println!("Usage: strafe <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a movement script");
    println!("  eval \"<script>\"      Run a script given inline");
    println!("  demo                 Run the built-in demo script");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse and display the AST");
    println!("  find --size <z>      Find the facing that keeps a sprint inside <z>");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --slip=<f>           Default ground slipperiness (0.6)");
    println!("  --speed=<n>          Speed potion level");
    println!("  --slow=<n>           Slowness potion level");
    println!("  --precision=<n>      Significant digits in output (7)");
    println!("  --sneak-delay        Sneaking takes effect one tick late");
    println!("  --no-air-sprint-delay");
    println!("                       Air sprint follows the current tick");
    println!("  --reverse            Walk backwards");
    println!("  --right              Turn right in `find` (default left)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=strafe_eval=debug) for trace output.");
}
