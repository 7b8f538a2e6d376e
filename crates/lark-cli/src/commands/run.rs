//! Script execution command

use lark_runtime::{AstPrinter, Lark, LarkError, Lexer, Program};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

// BSD sysexits codes, so scripts can tell error classes apart.
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

/// How to render the program instead of (or before) running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstMode {
    /// Execute the script normally
    Off,
    /// Print the parsed tree in parenthesized form and exit
    Text,
    /// Print the parsed tree as JSON and exit
    Json,
}

/// Run a Lark script from a file
pub fn run(path: &Path, mode: AstMode) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Could not read {}: {err}", path.display());
            return ExitCode::from(EX_IOERR);
        }
    };

    match mode {
        AstMode::Off => execute(&source),
        AstMode::Text | AstMode::Json => dump_ast(&source, mode),
    }
}

fn execute(source: &str) -> ExitCode {
    let runtime = Lark::new();
    match runtime.run(source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ LarkError::Syntax(_)) => {
            eprintln!("{err}");
            ExitCode::from(EX_DATAERR)
        }
        Err(err @ LarkError::Runtime(_)) => {
            eprintln!("{err}");
            ExitCode::from(EX_SOFTWARE)
        }
    }
}

fn dump_ast(source: &str, mode: AstMode) -> ExitCode {
    let program = match parse(source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(EX_DATAERR);
        }
    };

    match mode {
        AstMode::Json => match program.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Could not serialize syntax tree: {err}");
                return ExitCode::from(EX_SOFTWARE);
            }
        },
        _ => println!("{}", AstPrinter::new().print(&program)),
    }

    ExitCode::SUCCESS
}

fn parse(source: &str) -> Result<Program, lark_runtime::SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    lark_runtime::Parser::new(tokens).parse()
}
