//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Lark lexer.

use serde::{Deserialize, Serialize};

/// Decoded literal payload attached to `Number` and `String` tokens.
///
/// The lexer strips string quotes and parses numbers, so downstream
/// consumers never re-decode lexemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenLiteral {
    /// Parsed number literal value
    Number(f64),
    /// String literal contents with surrounding quotes removed
    String(String),
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token
    pub lexeme: String,
    /// Decoded literal payload, present only for `Number` and `String`
    pub literal: Option<TokenLiteral>,
    /// Source line number (1-indexed)
    pub line: u32,
}

impl Token {
    /// Create a new token without a literal payload
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Create a new token carrying a decoded literal payload
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: TokenLiteral,
        line: u32,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character punctuation
    /// `(` (left parenthesis)
    LeftParen,
    /// `)` (right parenthesis)
    RightParen,
    /// `{` (left brace)
    LeftBrace,
    /// `}` (right brace)
    RightBrace,
    /// `,` (comma)
    Comma,
    /// `.` (dot)
    Dot,
    /// `;` (semicolon)
    Semicolon,

    // Operators
    /// `-` (subtraction or negation)
    Minus,
    /// `+` (addition or concatenation)
    Plus,
    /// `/` (division)
    Slash,
    /// `*` (multiplication)
    Star,
    /// `!` (logical not)
    Bang,
    /// `!=` (inequality)
    BangEqual,
    /// `=` (assignment)
    Equal,
    /// `==` (equality)
    EqualEqual,
    /// `>` (greater than)
    Greater,
    /// `>=` (greater than or equal)
    GreaterEqual,
    /// `<` (less than)
    Less,
    /// `<=` (less than or equal)
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal ("hello")
    String,
    /// Number literal (42, 3.14)
    Number,

    // Keywords
    /// `and` keyword (short-circuit conjunction)
    And,
    /// `class` keyword (reserved, no grammar production yet)
    Class,
    /// `else` keyword
    Else,
    /// `false` keyword
    False,
    /// `for` keyword (reserved, no grammar production yet)
    For,
    /// `fun` keyword (reserved, no grammar production yet)
    Fun,
    /// `if` keyword
    If,
    /// `nil` keyword
    Nil,
    /// `or` keyword (short-circuit disjunction)
    Or,
    /// `print` keyword
    Print,
    /// `return` keyword (reserved, no grammar production yet)
    Return,
    /// `super` keyword (reserved, no grammar production yet)
    Super,
    /// `this` keyword (reserved, no grammar production yet)
    This,
    /// `true` keyword
    True,
    /// `var` keyword
    Var,
    /// `while` keyword (reserved, no grammar production yet)
    While,

    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        match s {
            "and" => Some(TokenKind::And),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }
}
