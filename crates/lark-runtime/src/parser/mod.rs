//! Parsing (tokens to AST)
//!
//! Recursive-descent parser with single-token lookahead. Precedence is
//! encoded by call order: each grammar rule parses the next-tighter rule
//! before checking its own operators, building left-associative trees.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → "var" IDENTIFIER ("=" expression)? ";"  | statement
//! statement   → "if" "(" expression ")" statement ("else" statement)?
//!             | "print" expression ";"
//!             | "{" declaration* "}"
//!             | expression ";"
//! expression  → assignment
//! assignment  → IDENTIFIER "=" assignment | equality
//! equality    → comparison (("!="|"==") comparison)*
//! comparison  → term ((">"|">="|"<"|"<=") term)*
//! term        → factor (("-"|"+") factor)*
//! factor      → unary (("/"|"*") unary)*
//! unary       → ("!"|"-") unary | primary
//! primary     → NUMBER | STRING | "true" | "false" | "nil"
//!             | IDENTIFIER | "(" expression ")"
//! ```
//!
//! The first syntax error aborts the parse. There is no statement-boundary
//! resynchronization, so a single pass reports at most one error.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::diagnostic::SyntaxError;
use crate::token::{Token, TokenKind};

/// Parser state for building an AST from tokens
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Create a new parser for the given tokens
    ///
    /// The token stream must be terminated by an `Eof` token, as produced
    /// by [`Lexer::tokenize`](crate::lexer::Lexer::tokenize).
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse tokens into a program, stopping at the first syntax error
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        Ok(Program { statements })
    }

    // === Helper methods ===

    /// Advance to the next token and return the one just consumed
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Peek at the current token without consuming it
    pub(super) fn peek(&self) -> &Token {
        // The stream always ends with Eof, so current stays in bounds
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// The most recently consumed token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Check if the current token matches the given kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consume the current token if it matches the given kind
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches any of the given kinds
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consume a token of the given kind or fail with a syntax error
    pub(super) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.error(message))
        }
    }

    /// Check if the parser has reached the end-of-input sentinel
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Build a syntax error at the current token
    pub(super) fn error(&self, message: &str) -> SyntaxError {
        SyntaxError::at_token(self.peek(), message)
    }
}
