//! Statement parsing

use crate::ast::{BlockStmt, ExprStmt, IfStmt, PrintStmt, Stmt, VarStmt};
use crate::diagnostic::SyntaxError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// declaration → "var" IDENTIFIER ("=" expression)? ";" | statement
    pub(super) fn declaration(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_token(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.consume(TokenKind::Identifier, "Expected variable name.")?;

        let initializer = if self.match_token(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration.",
        )?;
        Ok(Stmt::Var(VarStmt { name, initializer }))
    }

    /// statement → ifStmt | printStmt | block | exprStmt
    fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_token(TokenKind::If) {
            return self.if_statement();
        }
        if self.match_token(TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_token(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(BlockStmt {
                statements: self.block()?,
            }));
        }
        self.expression_statement()
    }

    fn if_statement(&mut self) -> Result<Stmt, SyntaxError> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // Greedy: an else binds to the nearest preceding unmatched if
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    /// block → "{" declaration* "}"
    fn block(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(TokenKind::RightBrace, "Expected '}' after block.")?;
        Ok(statements)
    }

    fn print_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after value.")?;
        Ok(Stmt::Print(PrintStmt { expr }))
    }

    fn expression_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Stmt::Expr(ExprStmt { expr }))
    }
}
