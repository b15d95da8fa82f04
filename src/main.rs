// main.rs - Run Forth programs, or an interactive REPL on a tty

use ember::interpreter::Outcome;
use ember::machine::Machine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::fs;
use std::io::{IsTerminal, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut machine = match Machine::new() {
        Ok(machine) => machine,
        Err(fault) => {
            eprintln!("Boot error: {}", fault);
            return ExitCode::FAILURE;
        }
    };

    // Load files from command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        for file_path in args.iter().skip(1) {
            let contents = match fs::read_to_string(file_path) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", file_path, e);
                    return ExitCode::FAILURE;
                }
            };
            match machine.interpret(&contents) {
                Ok(Outcome::Eof) => {}
                Ok(Outcome::Bye) => return ExitCode::SUCCESS,
                Err(fault) => {
                    eprintln!("{}: {}", file_path, fault);
                    return ExitCode::FAILURE;
                }
            }
        }
        return ExitCode::SUCCESS;
    }

    // Piped input: the whole of stdin is the program
    if !std::io::stdin().is_terminal() {
        let mut program = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut program) {
            eprintln!("Failed to read stdin: {}", e);
            return ExitCode::FAILURE;
        }
        return match machine.interpret(&program) {
            Ok(_) => ExitCode::SUCCESS,
            Err(fault) => {
                eprintln!("{}", fault);
                ExitCode::FAILURE
            }
        };
    }

    repl(machine)
}

fn repl(mut machine: Machine) -> ExitCode {
    println!("ember v{}", env!("CARGO_PKG_VERSION"));
    println!("Type BYE to exit");
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let history_file = dirs::home_dir().map(|mut p| {
        p.push(".ember_history");
        p
    });

    // Load history if the file exists
    if let Some(ref path) = history_file {
        let _ = rl.load_history(path);
    }

    let code = loop {
        let prompt = if machine.compiling() { "... " } else { "> " };
        match rl.readline(prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                match machine.interpret(input) {
                    Ok(Outcome::Eof) => {
                        if !machine.compiling() {
                            println!(" ok");
                        }
                    }
                    Ok(Outcome::Bye) => break ExitCode::SUCCESS,
                    Err(fault) => {
                        // Fatal by design: no rollback, no recovery
                        eprintln!("{}", fault);
                        break ExitCode::FAILURE;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break ExitCode::FAILURE;
            }
        }
    };

    // Save history
    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }

    code
}
