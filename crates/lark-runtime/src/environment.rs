//! Variable environments (lexical scoping)
//!
//! A chain of mutable name→value maps. Each block gets a fresh environment
//! whose `enclosing` link points at its parent; lookup and assignment walk
//! the chain outward, while `define` always writes the innermost scope.
//! The interpreter pushes a scope on block entry and pops it on every exit
//! path, including the error path.

use crate::diagnostic::RuntimeError;
use crate::token::Token;
use crate::value::Value;
use std::collections::HashMap;

/// Chained mutable scope mapping names to values
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Box<Environment>>,
}

impl Environment {
    /// Create a root environment with no enclosing parent
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a nested scope: the current environment becomes the enclosing
    /// parent of a fresh, empty one
    pub fn push_scope(&mut self) {
        let parent = std::mem::take(self);
        self.enclosing = Some(Box::new(parent));
    }

    /// Leave the innermost scope, restoring the enclosing environment
    ///
    /// Popping the root environment is a no-op.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.enclosing.take() {
            *self = *parent;
        }
    }

    /// Create or overwrite a binding in this environment
    ///
    /// Never touches outer scopes: redeclaring a name inside a block
    /// shadows the outer binding instead of overwriting it.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look up a variable, delegating to enclosing scopes on a miss
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        if let Some(enclosing) = &self.enclosing {
            return enclosing.get(name);
        }
        Err(RuntimeError::undefined_variable(name))
    }

    /// Mutate an existing binding wherever the chain defines it
    ///
    /// Assignment never declares: if no scope in the chain defines the
    /// name, this is an undefined-variable error.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        if let Some(enclosing) = &mut self.enclosing {
            return enclosing.assign(name, value);
        }
        Err(RuntimeError::undefined_variable(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn name(lexeme: &str) -> Token {
        Token::new(TokenKind::Identifier, lexeme, 1)
    }

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        assert_eq!(env.get(&name("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_get_undefined_is_error() {
        let env = Environment::new();
        let err = env.get(&name("missing")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1] Runtime error at 'missing': Undefined variable 'missing'."
        );
    }

    #[test]
    fn test_get_walks_enclosing_chain() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.push_scope();
        env.push_scope();
        assert_eq!(env.get(&name("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_define_shadows_without_overwriting() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.push_scope();
        env.define("x", Value::Number(2.0));
        assert_eq!(env.get(&name("x")).unwrap(), Value::Number(2.0));
        env.pop_scope();
        assert_eq!(env.get(&name("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_assign_mutates_outer_binding() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.push_scope();
        env.assign(&name("x"), Value::Number(5.0)).unwrap();
        env.pop_scope();
        assert_eq!(env.get(&name("x")).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_assign_undeclared_never_defines() {
        let mut env = Environment::new();
        let err = env.assign(&name("x"), Value::Number(1.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1] Runtime error at 'x': Undefined variable 'x'."
        );
        assert!(env.get(&name("x")).is_err());
    }

    #[test]
    fn test_inner_binding_dropped_on_pop() {
        let mut env = Environment::new();
        env.push_scope();
        env.define("local", Value::Bool(true));
        env.pop_scope();
        assert!(env.get(&name("local")).is_err());
    }

    #[test]
    fn test_pop_root_is_noop() {
        let mut env = Environment::new();
        env.define("x", Value::Nil);
        env.pop_scope();
        assert_eq!(env.get(&name("x")).unwrap(), Value::Nil);
    }
}
