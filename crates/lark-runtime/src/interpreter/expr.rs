//! Expression evaluation

use crate::ast::{
    AssignExpr, BinaryExpr, Expr, Literal, LogicalExpr, UnaryExpr,
};
use crate::diagnostic::RuntimeError;
use crate::interpreter::Interpreter;
use crate::token::{Token, TokenKind};
use crate::value::Value;

impl Interpreter {
    /// Evaluate an expression to a value
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(eval_literal(&literal.value)),
            Expr::Grouping(grouping) => self.eval_expr(&grouping.expr),
            Expr::Unary(unary) => self.eval_unary(unary),
            Expr::Binary(binary) => self.eval_binary(binary),
            Expr::Logical(logical) => self.eval_logical(logical),
            Expr::Variable(variable) => self.environment.get(&variable.name),
            Expr::Assign(assign) => self.eval_assign(assign),
        }
    }

    /// Assignment evaluates to the assigned value, so it is usable as an
    /// expression (`a = b = 1;`)
    fn eval_assign(&mut self, assign: &AssignExpr) -> Result<Value, RuntimeError> {
        let value = self.eval_expr(&assign.value)?;
        self.environment.assign(&assign.name, value.clone())?;
        Ok(value)
    }

    fn eval_unary(&mut self, unary: &UnaryExpr) -> Result<Value, RuntimeError> {
        let operand = self.eval_expr(&unary.operand)?;

        match unary.operator.kind {
            TokenKind::Minus => {
                let n = number_operand(&unary.operator, &operand)?;
                Ok(Value::Number(-n))
            }
            // `!` requires an actual boolean; it does not coerce via
            // truthiness the way `if` conditions do
            TokenKind::Bang => match operand {
                Value::Bool(b) => Ok(Value::Bool(!b)),
                _ => Err(RuntimeError::at_token(
                    &unary.operator,
                    "Operand must be a boolean.",
                )),
            },
            _ => Err(RuntimeError::at_token(
                &unary.operator,
                "Invalid unary operator.",
            )),
        }
    }

    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&binary.left)?;
        let right = self.eval_expr(&binary.right)?;
        let operator = &binary.operator;

        match operator.kind {
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => {
                    Ok(Value::string(format!("{a}{b}")))
                }
                _ => Err(RuntimeError::at_token(
                    operator,
                    "Operands must be two numbers or two strings.",
                )),
            },
            TokenKind::Minus => numeric_binary_op(operator, left, right, |a, b| a - b),
            TokenKind::Star => numeric_binary_op(operator, left, right, |a, b| a * b),
            // Division by zero follows IEEE 754 (yields infinity or NaN)
            TokenKind::Slash => numeric_binary_op(operator, left, right, |a, b| a / b),
            TokenKind::Greater => numeric_comparison(operator, left, right, |a, b| a > b),
            TokenKind::GreaterEqual => {
                numeric_comparison(operator, left, right, |a, b| a >= b)
            }
            TokenKind::Less => numeric_comparison(operator, left, right, |a, b| a < b),
            TokenKind::LessEqual => numeric_comparison(operator, left, right, |a, b| a <= b),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::at_token(operator, "Invalid binary operator.")),
        }
    }

    /// Short-circuit `and`/`or` over truthiness; the result is the operand
    /// value that decided the outcome, not a coerced boolean
    fn eval_logical(&mut self, logical: &LogicalExpr) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&logical.left)?;

        match logical.operator.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::And if !left.is_truthy() => Ok(left),
            TokenKind::Or | TokenKind::And => self.eval_expr(&logical.right),
            _ => Err(RuntimeError::at_token(
                &logical.operator,
                "Invalid logical operator.",
            )),
        }
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => Value::Number(*n),
        Literal::String(s) => Value::string(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Nil => Value::Nil,
    }
}

fn number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::at_token(operator, "Operand must be a number.")),
    }
}

fn number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::at_token(operator, "Operands must be numbers.")),
    }
}

fn numeric_binary_op<F>(
    operator: &Token,
    left: Value,
    right: Value,
    op: F,
) -> Result<Value, RuntimeError>
where
    F: FnOnce(f64, f64) -> f64,
{
    let (a, b) = number_operands(operator, &left, &right)?;
    Ok(Value::Number(op(a, b)))
}

fn numeric_comparison<F>(
    operator: &Token,
    left: Value,
    right: Value,
    op: F,
) -> Result<Value, RuntimeError>
where
    F: FnOnce(f64, f64) -> bool,
{
    let (a, b) = number_operands(operator, &left, &right)?;
    Ok(Value::Bool(op(a, b)))
}
