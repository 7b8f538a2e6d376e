//! Lark Runtime - Core language implementation
//!
//! This library provides the complete Lark language runtime including:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation
//! - AST printing and JSON serialization

/// Lark runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod runtime;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{Expr, Program, Stmt};
pub use diagnostic::{ErrorContext, RuntimeError, SyntaxError};
pub use environment::Environment;
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use printer::AstPrinter;
pub use runtime::{Lark, LarkError};
pub use token::{Token, TokenKind, TokenLiteral};
pub use value::Value;
