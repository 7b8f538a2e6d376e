//! AST debug printer
//!
//! Renders expressions in parenthesized prefix notation (`(+ 1 (* 2 3))`)
//! and statements in a matching s-expression form. A second tree-walking
//! algorithm over the closed AST, exercised by the CLI's `--ast` flag.

use crate::ast::{Expr, Literal, Program, Stmt};
use crate::value::Value;

/// Parenthesized prefix-notation printer for AST nodes
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    /// Print a whole program, one statement per line
    pub fn print(&self, program: &Program) -> String {
        program
            .statements
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Print a single statement
    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expr(expr_stmt) => self.parenthesize("expr", &[&expr_stmt.expr]),
            Stmt::Print(print_stmt) => self.parenthesize("print", &[&print_stmt.expr]),
            Stmt::Var(var_stmt) => match &var_stmt.initializer {
                Some(initializer) => format!(
                    "(var {} {})",
                    var_stmt.name.lexeme,
                    self.print_expr(initializer)
                ),
                None => format!("(var {})", var_stmt.name.lexeme),
            },
            Stmt::Block(block) => {
                let mut result = String::from("(block");
                for statement in &block.statements {
                    result.push(' ');
                    result.push_str(&self.print_stmt(statement));
                }
                result.push(')');
                result
            }
            Stmt::If(if_stmt) => {
                let condition = self.print_expr(&if_stmt.condition);
                let then_branch = self.print_stmt(&if_stmt.then_branch);
                match &if_stmt.else_branch {
                    Some(else_branch) => format!(
                        "(if-else {} {} {})",
                        condition,
                        then_branch,
                        self.print_stmt(else_branch)
                    ),
                    None => format!("(if {} {})", condition, then_branch),
                }
            }
        }
    }

    /// Print a single expression
    pub fn print_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => format_literal(&literal.value),
            Expr::Grouping(grouping) => self.parenthesize("group", &[&grouping.expr]),
            Expr::Unary(unary) => {
                self.parenthesize(&unary.operator.lexeme, &[&unary.operand])
            }
            Expr::Binary(binary) => {
                self.parenthesize(&binary.operator.lexeme, &[&binary.left, &binary.right])
            }
            Expr::Logical(logical) => self.parenthesize(
                &logical.operator.lexeme,
                &[&logical.left, &logical.right],
            ),
            Expr::Variable(variable) => variable.name.lexeme.clone(),
            Expr::Assign(assign) => {
                format!(
                    "(= {} {})",
                    assign.name.lexeme,
                    self.print_expr(&assign.value)
                )
            }
        }
    }

    fn parenthesize(&self, name: &str, exprs: &[&Expr]) -> String {
        let mut result = format!("({name}");
        for expr in exprs {
            result.push(' ');
            result.push_str(&self.print_expr(expr));
        }
        result.push(')');
        result
    }
}

fn format_literal(literal: &Literal) -> String {
    // Literals render the same way their runtime values do
    match literal {
        Literal::Number(n) => Value::Number(*n).to_string(),
        Literal::String(s) => s.clone(),
        Literal::Bool(b) => b.to_string(),
        Literal::Nil => "nil".to_string(),
    }
}
