//! Statement execution

use crate::ast::{BlockStmt, IfStmt, PrintStmt, Stmt, VarStmt};
use crate::diagnostic::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::Value;
use std::io::Write;

impl Interpreter {
    /// Execute a statement for effect
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expr(expr_stmt) => {
                self.eval_expr(&expr_stmt.expr)?;
                Ok(())
            }
            Stmt::Print(print_stmt) => self.execute_print(print_stmt),
            Stmt::Var(var_stmt) => self.execute_var(var_stmt),
            Stmt::Block(block) => self.execute_block(block),
            Stmt::If(if_stmt) => self.execute_if(if_stmt),
        }
    }

    fn execute_print(&mut self, stmt: &PrintStmt) -> Result<(), RuntimeError> {
        let value = self.eval_expr(&stmt.expr)?;
        // A failed write (e.g. a closed pipe) is not a language error
        let _ = writeln!(self.out, "{value}");
        Ok(())
    }

    fn execute_var(&mut self, stmt: &VarStmt) -> Result<(), RuntimeError> {
        let value = match &stmt.initializer {
            Some(initializer) => self.eval_expr(initializer)?,
            None => Value::Nil,
        };
        self.environment.define(stmt.name.lexeme.clone(), value);
        Ok(())
    }

    fn execute_block(&mut self, block: &BlockStmt) -> Result<(), RuntimeError> {
        self.environment.push_scope();
        let result = block
            .statements
            .iter()
            .try_for_each(|statement| self.execute(statement));
        // The enclosing environment is restored on success and on error
        self.environment.pop_scope();
        result
    }

    fn execute_if(&mut self, stmt: &IfStmt) -> Result<(), RuntimeError> {
        if self.eval_expr(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.then_branch)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::test_support::SharedBuffer;
    use crate::interpreter::Interpreter;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run(source: &str) -> String {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse().expect("parsing failed");
        let buffer = SharedBuffer::new();
        let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));
        interpreter.interpret(&program).expect("runtime error");
        buffer.contents()
    }

    #[test]
    fn test_block_scoping_shadowing() {
        let out = run("var x = 1; { var x = 2; print x; } print x;");
        assert_eq!(out, "2\n1\n");
    }

    #[test]
    fn test_block_assignment_mutates_outer() {
        let out = run("var x = 1; { x = 2; } print x;");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_block_scope_restored_after_error() {
        let source = "var x = 1; { var x = 2; print missing; }";
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse().expect("parsing failed");
        let buffer = SharedBuffer::new();
        let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));
        assert!(interpreter.interpret(&program).is_err());

        // The failed block's scope was popped; a follow-up run sees the outer x
        let tokens = Lexer::new("print x;").tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse().expect("parsing failed");
        interpreter.interpret(&program).expect("runtime error");
        assert_eq!(buffer.contents(), "1\n");
    }

    #[test]
    fn test_if_truthy_condition() {
        assert_eq!(run("if (true) print \"a\"; else print \"b\";"), "a\n");
    }

    #[test]
    fn test_if_zero_is_truthy() {
        // 0 is truthy: only nil and false are falsy
        assert_eq!(run("if (0) print \"a\"; else print \"b\";"), "a\n");
    }

    #[test]
    fn test_if_nil_is_falsy() {
        assert_eq!(run("if (nil) print \"a\"; else print \"b\";"), "b\n");
    }

    #[test]
    fn test_if_without_else_is_noop_on_falsy() {
        assert_eq!(run("if (false) print \"a\"; print \"done\";"), "done\n");
    }

    struct ClosedSink;

    impl std::io::Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_print_to_closed_sink_is_not_an_error() {
        let tokens = Lexer::new("print 1; print 2;")
            .tokenize()
            .expect("lexing failed");
        let program = Parser::new(tokens).parse().expect("parsing failed");
        let mut interpreter = Interpreter::with_output(Box::new(ClosedSink));
        assert!(interpreter.interpret(&program).is_ok());
    }

    #[test]
    fn test_dangling_else_execution() {
        let out = run("var a = true; var b = false; if (a) if (b) print 1; else print 2;");
        assert_eq!(out, "2\n");
    }
}
