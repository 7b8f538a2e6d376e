//! Interactive REPL command

use lark_runtime::Lark;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

/// Run the interactive REPL
///
/// Variables persist across lines in one session. Errors are reported
/// and the session continues.
pub fn run() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Could not start line editor: {err}");
            return ExitCode::FAILURE;
        }
    };
    let runtime = Lark::new();

    println!("Lark v{} REPL", lark_runtime::VERSION);
    println!("Type statements, or press Ctrl-D to exit");
    println!();

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                if let Err(err) = runtime.run(&line) {
                    eprintln!("{err}");
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Input error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
