//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation with environment-based variable storage:
//! - Statement execution (declarations, print, blocks, conditionals)
//! - Expression evaluation (literals, unary/binary/logical ops, variables)
//! - Block scoping with shadowing via the environment chain
//!
//! Statements execute strictly in sequence; the first runtime error halts
//! execution and propagates to the caller. Side effects of statements that
//! already ran (prior `print` output, completed assignments) stand.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::diagnostic::RuntimeError;
use crate::environment::Environment;
use std::io::Write;

/// Interpreter state
pub struct Interpreter {
    /// Current innermost environment; the root lives for the whole run
    pub(super) environment: Environment,
    /// Output sink for `print` statements
    pub(super) out: Box<dyn Write>,
}

impl Interpreter {
    /// Create a new interpreter printing to standard output
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Create a new interpreter printing to the given sink
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self {
            environment: Environment::new(),
            out,
        }
    }

    /// Execute a program, halting at the first runtime error
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Define a variable in the current environment (for embedding/REPL)
    pub fn define_global(&mut self, name: impl Into<String>, value: crate::value::Value) {
        self.environment.define(name, value);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Shared in-memory sink so tests can read back interpreter output
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
