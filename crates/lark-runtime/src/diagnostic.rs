//! Error reporting for the lexer, parser, and interpreter
//!
//! Both error kinds are plain values returned up the call chain and render
//! in the bracketed form drivers pattern-match on:
//!
//! ```text
//! [line 2] Error at 'foo': Expected ';' after expression.
//! [line 2] Error at end: Expected expression.
//! [line 2] Runtime error at '+': Operands must be two numbers or two strings.
//! ```

use crate::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// Token context attached to an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorContext {
    /// Character-level error with no token available (lexer)
    None,
    /// Error at the end-of-input sentinel
    AtEnd,
    /// Error at the token with this lexeme
    Lexeme(String),
}

impl ErrorContext {
    /// Capture the context of the offending token
    pub fn from_token(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            ErrorContext::AtEnd
        } else {
            ErrorContext::Lexeme(token.lexeme.clone())
        }
    }
}

fn fmt_error(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    line: u32,
    context: &ErrorContext,
    message: &str,
) -> fmt::Result {
    match context {
        ErrorContext::None => write!(f, "[line {line}] {kind}: {message}"),
        ErrorContext::AtEnd => write!(f, "[line {line}] {kind} at end: {message}"),
        ErrorContext::Lexeme(lexeme) => {
            write!(f, "[line {line}] {kind} at '{lexeme}': {message}")
        }
    }
}

/// Syntax error detected during lexing or parsing
///
/// The first syntax error aborts the pass; there is no resynchronization
/// or multi-error batching.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct SyntaxError {
    /// Source line of the offending token or character (1-indexed)
    pub line: u32,
    /// Offending token context, if a token was available
    pub context: ErrorContext,
    /// Human-readable description
    pub message: String,
}

impl SyntaxError {
    /// Syntax error at the given token
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        Self {
            line: token.line,
            context: ErrorContext::from_token(token),
            message: message.into(),
        }
    }

    /// Syntax error at a source line with no token context (lexer errors)
    pub fn at_line(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            context: ErrorContext::None,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_error(f, "Error", self.line, &self.context, &self.message)
    }
}

/// Runtime error detected during evaluation
///
/// Execution halts at the failing statement; side effects of earlier
/// statements stand.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct RuntimeError {
    /// Source line of the offending token (1-indexed)
    pub line: u32,
    /// Offending token context
    pub context: ErrorContext,
    /// Human-readable description
    pub message: String,
}

impl RuntimeError {
    /// Runtime error at the given token
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        Self {
            line: token.line,
            context: ErrorContext::from_token(token),
            message: message.into(),
        }
    }

    /// Undefined-variable error for a reference or assignment to `name`
    pub fn undefined_variable(name: &Token) -> Self {
        Self::at_token(name, format!("Undefined variable '{}'.", name.lexeme))
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_error(f, "Runtime error", self.line, &self.context, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_at_token() {
        let token = Token::new(TokenKind::Semicolon, ";", 2);
        let err = SyntaxError::at_token(&token, "Expected expression.");
        assert_eq!(err.to_string(), "[line 2] Error at ';': Expected expression.");
    }

    #[test]
    fn test_syntax_error_at_end() {
        let token = Token::new(TokenKind::Eof, "", 7);
        let err = SyntaxError::at_token(&token, "Expected '}' after block.");
        assert_eq!(
            err.to_string(),
            "[line 7] Error at end: Expected '}' after block."
        );
    }

    #[test]
    fn test_syntax_error_without_token() {
        let err = SyntaxError::at_line(4, "Unexpected character.");
        assert_eq!(err.to_string(), "[line 4] Error: Unexpected character.");
    }

    #[test]
    fn test_runtime_error_format() {
        let token = Token::new(TokenKind::Star, "*", 1);
        let err = RuntimeError::at_token(&token, "Operands must be numbers.");
        assert_eq!(
            err.to_string(),
            "[line 1] Runtime error at '*': Operands must be numbers."
        );
    }

    #[test]
    fn test_undefined_variable_message() {
        let name = Token::new(TokenKind::Identifier, "missing", 3);
        let err = RuntimeError::undefined_variable(&name);
        assert_eq!(
            err.to_string(),
            "[line 3] Runtime error at 'missing': Undefined variable 'missing'."
        );
    }
}
