//! REPL (Read-Eval-Print Loop) implementation

use crate::checker::Checker;
use crate::error::{CliError, CliResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use type_checks::NumericMode;

/// Run the interactive REPL
///
/// Each line is classified with [`Checker::report`]. Lines starting with `.`
/// are session commands.
pub fn run_repl(checker: &mut Checker) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("Failed to initialize editor: {}", e)))?;

    println!("typecheck {}", env!("CARGO_PKG_VERSION"));
    println!("Type a value to classify, '.help' for commands or 'exit' to quit.");
    println!();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == ".exit" || trimmed == "quit" {
                    break;
                }

                if trimmed.starts_with('.') {
                    handle_repl_command(trimmed, checker);
                    continue;
                }

                let _ = editor.add_history_entry(&line);

                match checker.report(&line) {
                    Ok(report) => println!("{}", report),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Press Ctrl-D or type 'exit' to quit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(CliError::ReplError(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, checker: &mut Checker) {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .strict   - Stop treating numeric text as numbers");
            println!("  .loose    - Treat numeric text as numbers");
            println!("  .mode     - Show the numeric mode");
            println!("  .exit     - Exit the REPL");
        }
        ".strict" => checker.set_mode(NumericMode::Strict),
        ".loose" => checker.set_mode(NumericMode::Loose),
        ".mode" => println!("{:?}", checker.mode()),
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}
