//! Expression parsing

use crate::ast::{
    AssignExpr, BinaryExpr, Expr, GroupingExpr, Literal, LiteralExpr, UnaryExpr, VariableExpr,
};
use crate::diagnostic::SyntaxError;
use crate::parser::Parser;
use crate::token::{TokenKind, TokenLiteral};

impl Parser {
    /// expression → assignment
    pub(super) fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.assignment()
    }

    /// assignment → IDENTIFIER "=" assignment | equality
    ///
    /// The left-hand side is parsed as a full equality expression first;
    /// only afterwards is the result checked to be a bare variable
    /// reference. Anything else is an invalid assignment target.
    fn assignment(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.equality()?;

        if self.match_token(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(variable) = expr {
                return Ok(Expr::Assign(AssignExpr {
                    name: variable.name,
                    value: Box::new(value),
                }));
            }
            return Err(SyntaxError::at_token(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }

    /// equality → comparison (("!="|"==") comparison)*
    fn equality(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.comparison()?;

        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// comparison → term ((">"|">="|"<"|"<=") term)*
    fn comparison(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.term()?;

        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// term → factor (("-"|"+") factor)*
    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.factor()?;

        while self.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// factor → unary (("/"|"*") unary)*
    fn factor(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.unary()?;

        while self.match_any(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// unary → ("!"|"-") unary | primary
    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let operand = self.unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                operator,
                operand: Box::new(operand),
            }));
        }
        self.primary()
    }

    /// primary → NUMBER | STRING | "true" | "false" | "nil"
    ///         | IDENTIFIER | "(" expression ")"
    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_token(TokenKind::False) {
            return Ok(literal(Literal::Bool(false)));
        }
        if self.match_token(TokenKind::True) {
            return Ok(literal(Literal::Bool(true)));
        }
        if self.match_token(TokenKind::Nil) {
            return Ok(literal(Literal::Nil));
        }

        if self.match_any(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();
            // The lexer pre-decodes literal payloads; a missing payload
            // means the token stream came from a non-conforming producer
            let value = match token.literal {
                Some(TokenLiteral::Number(n)) => Literal::Number(n),
                Some(TokenLiteral::String(s)) => Literal::String(s),
                None => {
                    return Err(SyntaxError::at_token(
                        self.previous(),
                        "Literal token is missing its value.",
                    ))
                }
            };
            return Ok(literal(value));
        }

        if self.match_token(TokenKind::Identifier) {
            return Ok(Expr::Variable(VariableExpr {
                name: self.previous().clone(),
            }));
        }

        if self.match_token(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
            return Ok(Expr::Grouping(GroupingExpr {
                expr: Box::new(expr),
            }));
        }

        Err(self.error("Expected expression."))
    }
}

fn literal(value: Literal) -> Expr {
    Expr::Literal(LiteralExpr { value })
}
