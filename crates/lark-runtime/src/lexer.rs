//! Lexical analysis (tokenization)
//!
//! The lexer converts Lark source code into a stream of tokens with
//! 1-indexed line numbers. String and number literal payloads are decoded
//! here, so the parser never re-inspects lexemes. The stream always ends
//! with exactly one `Eof` token; the first lexical error aborts scanning.

use crate::diagnostic::SyntaxError;
use crate::token::{Token, TokenKind, TokenLiteral};

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    chars: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in chars
    current: usize,
    /// Current line number (1-indexed)
    line: u32,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Tokenize the source code
    ///
    /// Returns the full token stream terminated by `Eof`, or the first
    /// lexical error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace_and_comments();

        self.start = self.current;

        if self.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", self.line));
        }

        let c = self.advance();

        match c {
            '(' => Ok(self.make_token(TokenKind::LeftParen)),
            ')' => Ok(self.make_token(TokenKind::RightParen)),
            '{' => Ok(self.make_token(TokenKind::LeftBrace)),
            '}' => Ok(self.make_token(TokenKind::RightBrace)),
            ',' => Ok(self.make_token(TokenKind::Comma)),
            '.' => Ok(self.make_token(TokenKind::Dot)),
            ';' => Ok(self.make_token(TokenKind::Semicolon)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '+' => Ok(self.make_token(TokenKind::Plus)),
            '*' => Ok(self.make_token(TokenKind::Star)),
            '/' => Ok(self.make_token(TokenKind::Slash)),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                Ok(self.make_token(kind))
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                Ok(self.make_token(kind))
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                Ok(self.make_token(kind))
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                Ok(self.make_token(kind))
            }

            '"' => self.lex_string(),

            c if c.is_ascii_digit() => self.lex_number(),
            c if is_identifier_start(c) => Ok(self.lex_identifier()),

            _ => Err(SyntaxError::at_line(self.line, "Unexpected character.")),
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn lex_string(&mut self) -> Result<Token, SyntaxError> {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(SyntaxError::at_line(self.line, "Unterminated string."));
        }

        self.advance(); // the closing quote

        // Literal payload excludes the surrounding quotes
        let value: String = self.chars[self.start + 1..self.current - 1]
            .iter()
            .collect();
        Ok(Token::with_literal(
            TokenKind::String,
            self.current_lexeme(),
            TokenLiteral::String(value),
            self.line,
        ))
    }

    /// Scan a number literal; the first digit is already consumed
    fn lex_number(&mut self) -> Result<Token, SyntaxError> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Fractional part requires a digit after the dot
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.current_lexeme();
        let value: f64 = lexeme
            .parse()
            .map_err(|_| SyntaxError::at_line(self.line, "Invalid number literal."))?;
        Ok(Token::with_literal(
            TokenKind::Number,
            lexeme,
            TokenLiteral::Number(value),
            self.line,
        ))
    }

    /// Scan an identifier or keyword; the first character is already consumed
    fn lex_identifier(&mut self) -> Token {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }

        let lexeme = self.current_lexeme();
        let kind = TokenKind::is_keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, self.line)
    }

    /// Skip whitespace and `//` line comments, tracking line numbers
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                '/' if self.peek_next() == '/' => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // === Helper methods ===

    /// Source text of the token currently being scanned
    fn current_lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_lexeme(), self.line)
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
