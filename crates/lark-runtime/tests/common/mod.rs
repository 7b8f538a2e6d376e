//! Shared test utilities following Rust best practices
//!
//! This module provides common helpers for Lark tests to reduce boilerplate
//! and make tests more readable and maintainable.

use lark_runtime::{Lark, LarkError};
use std::io::Write;
use std::sync::{Arc, Mutex};

// Re-export testing utilities
pub use pretty_assertions::assert_eq;

/// Cloneable in-memory sink for capturing program output
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("Output lock should not be poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("Output lock should not be poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Create a runtime wired to a capture buffer
pub fn session() -> (Lark, CapturedOutput) {
    let buffer = CapturedOutput::new();
    let runtime = Lark::with_output(Box::new(buffer.clone()));
    (runtime, buffer)
}

/// Run a program and return everything it printed
///
/// Panics if the program does not run cleanly.
pub fn run_program(source: &str) -> String {
    let (runtime, buffer) = session();
    if let Err(err) = runtime.run(source) {
        panic!("Program failed: {err}\nsource: {source}");
    }
    buffer.contents()
}

/// Run a program expected to fail, returning the error and any output
/// produced before the failure
pub fn run_expect_error(source: &str) -> (LarkError, String) {
    let (runtime, buffer) = session();
    let err = runtime
        .run(source)
        .expect_err("Program should have failed");
    (err, buffer.contents())
}
