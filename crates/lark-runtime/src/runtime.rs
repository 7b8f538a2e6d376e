//! Lark runtime API for embedding
//!
//! [`Lark`] wires the lexer, parser, and interpreter together behind one
//! call. Interpreter state persists across `run` calls, so a REPL session
//! keeps its variables; independent runs use independent `Lark` values.

use crate::diagnostic::{RuntimeError, SyntaxError};
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use std::cell::RefCell;
use std::io::Write;
use thiserror::Error;

/// Unified error for a full lex → parse → interpret pass
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LarkError {
    /// Lexical or parse error
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation error
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Lark runtime instance
///
/// # Examples
///
/// ```
/// use lark_runtime::Lark;
///
/// let runtime = Lark::new();
/// runtime.run("var x = 1 + 2; print x;").unwrap();
/// ```
pub struct Lark {
    /// Interpreter for executing code (using interior mutability)
    interpreter: RefCell<Interpreter>,
}

impl Lark {
    /// Create a new Lark runtime printing to standard output
    pub fn new() -> Self {
        Self {
            interpreter: RefCell::new(Interpreter::new()),
        }
    }

    /// Create a new Lark runtime printing to the given sink
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self {
            interpreter: RefCell::new(Interpreter::with_output(out)),
        }
    }

    /// Lex, parse, and interpret Lark source code
    ///
    /// Returns the first syntax or runtime error; earlier side effects
    /// (output, completed declarations) stand.
    pub fn run(&self, source: &str) -> Result<(), LarkError> {
        let tokens = Lexer::new(source).tokenize()?;
        let program = Parser::new(tokens).parse()?;
        self.interpreter.borrow_mut().interpret(&program)?;
        Ok(())
    }
}

impl Default for Lark {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::test_support::SharedBuffer;

    fn session() -> (Lark, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let runtime = Lark::with_output(Box::new(buffer.clone()));
        (runtime, buffer)
    }

    #[test]
    fn test_run_program() {
        let (runtime, buffer) = session();
        runtime.run("print \"hello\";").unwrap();
        assert_eq!(buffer.contents(), "hello\n");
    }

    #[test]
    fn test_state_persists_across_runs() {
        let (runtime, buffer) = session();
        runtime.run("var x = 1;").unwrap();
        runtime.run("x = x + 1;").unwrap();
        runtime.run("print x;").unwrap();
        assert_eq!(buffer.contents(), "2\n");
    }

    #[test]
    fn test_syntax_error_surfaces() {
        let (runtime, _) = session();
        let err = runtime.run("var x = ;").unwrap_err();
        assert!(matches!(err, LarkError::Syntax(_)));
        assert_eq!(
            err.to_string(),
            "[line 1] Error at ';': Expected expression."
        );
    }

    #[test]
    fn test_runtime_error_surfaces() {
        let (runtime, _) = session();
        let err = runtime.run("print missing;").unwrap_err();
        assert!(matches!(err, LarkError::Runtime(_)));
        assert_eq!(
            err.to_string(),
            "[line 1] Runtime error at 'missing': Undefined variable 'missing'."
        );
    }

    #[test]
    fn test_session_continues_after_error() {
        let (runtime, buffer) = session();
        runtime.run("var x = 10;").unwrap();
        assert!(runtime.run("print missing;").is_err());
        runtime.run("print x;").unwrap();
        assert_eq!(buffer.contents(), "10\n");
    }
}
