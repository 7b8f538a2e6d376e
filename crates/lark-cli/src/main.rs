use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::run::AstMode;

/// Lark programming language interpreter.
///
/// Runs a Lark script, or starts an interactive REPL when no script is given.
///
/// EXAMPLES:
///     lark                      Start the interactive REPL
///     lark main.lark            Run a Lark script
///     lark main.lark --ast      Print the parsed syntax tree
#[derive(Parser)]
#[command(name = "lark")]
#[command(version)]
struct Cli {
    /// Path to the Lark script to run
    script: Option<PathBuf>,
    /// Print the parsed syntax tree instead of running the script
    #[arg(long, conflicts_with = "ast_json")]
    ast: bool,
    /// Print the parsed syntax tree as JSON instead of running the script
    #[arg(long)]
    ast_json: bool,
}

impl Cli {
    fn ast_mode(&self) -> AstMode {
        if self.ast {
            AstMode::Text
        } else if self.ast_json {
            AstMode::Json
        } else {
            AstMode::Off
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.script {
        Some(ref path) => commands::run::run(path, cli.ast_mode()),
        None => {
            if cli.ast || cli.ast_json {
                eprintln!("Usage: lark <script> [--ast | --ast-json]");
                // EX_USAGE
                return ExitCode::from(64);
            }
            commands::repl::run()
        }
    }
}
