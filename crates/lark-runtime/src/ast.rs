//! Abstract Syntax Tree (AST) definitions
//!
//! Closed expression and statement sets built once by the parser and never
//! mutated afterward. Each tree-walking algorithm (interpreter, printer)
//! matches exhaustively over these variants, so adding an algorithm never
//! touches the node types.
//!
//! Operator and name tokens are kept in the nodes so evaluation errors can
//! cite the offending source line and lexeme.

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Top-level program: an ordered sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Serialize the program to pretty-printed JSON for tooling
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a program from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Expr(ExprStmt),
    Print(PrintStmt),
    Var(VarStmt),
    Block(BlockStmt),
    If(IfStmt),
}

/// Expression statement: evaluated for side effect, value discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
}

/// Print statement: the evaluated value is rendered to the output sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub expr: Expr,
}

/// Variable declaration, with optional initializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarStmt {
    pub name: Token,
    pub initializer: Option<Expr>,
}

/// Block: introduces a nested scope for its lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

/// If statement; `else` binds to the nearest preceding unmatched `if`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(LiteralExpr),
    Grouping(GroupingExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Variable(VariableExpr),
    Assign(AssignExpr),
}

/// Literal expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpr {
    pub value: Literal,
}

/// Literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

/// Grouped expression (parenthesized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingExpr {
    pub expr: Box<Expr>,
}

/// Unary expression; operator is `!` or `-`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

/// Binary expression over the arithmetic, comparison, and equality operators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Short-circuit logical expression (`and` / `or`)
///
/// Grammar hook: the current grammar does not yet produce this node, but
/// the evaluator and printer cover it so logical operators slot into the
/// existing precedence chain without touching the node set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Variable read reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpr {
    pub name: Token,
}

/// Assignment; evaluates to the assigned value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub name: Token,
    pub value: Box<Expr>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn number(n: f64) -> Expr {
        Expr::Literal(LiteralExpr {
            value: Literal::Number(n),
        })
    }

    #[test]
    fn test_json_round_trip() {
        let program = Program {
            statements: vec![Stmt::Print(PrintStmt {
                expr: Expr::Binary(BinaryExpr {
                    left: Box::new(number(1.0)),
                    operator: Token::new(TokenKind::Plus, "+", 1),
                    right: Box::new(number(2.0)),
                }),
            })],
        };

        let json = program.to_json().unwrap();
        let restored = Program::from_json(&json).unwrap();
        assert_eq!(program, restored);
    }

    #[test]
    fn test_nil_literal_serializes() {
        let program = Program {
            statements: vec![Stmt::Expr(ExprStmt {
                expr: Expr::Literal(LiteralExpr {
                    value: Literal::Nil,
                }),
            })],
        };
        let json = program.to_json().unwrap();
        assert!(json.contains("Nil"));
    }
}
