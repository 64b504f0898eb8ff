//! Semantic analysis: a single left-to-right pass over the statement list
//! that builds and checks a flat, program-wide symbol table.
//!
//! The language has no blocks, so there is exactly one namespace: a name
//! declared anywhere is visible to every later statement. The analyzer
//! never rewrites the tree; the table is its only artifact.

use std::collections::HashMap;

use crate::error::{CompileError, CompileResult};
use crate::parser::{Expr, Program, Stmt};
use crate::tokenizer::Token;

/// A declared variable. `ty` is always `"int"` today; it is kept as data
/// because the table report prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
  pub name: String,
  pub ty: String,
}

/// Flat variable table. The map carries no order guarantee, so declaration
/// order is recorded separately for the reporting side.
#[derive(Debug, Clone)]
pub struct SymbolTable {
  symbols: HashMap<String, Symbol>,
  order: Vec<String>,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self {
      symbols: HashMap::new(),
      order: Vec::new(),
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.symbols.contains_key(name)
  }

  pub fn get(&self, name: &str) -> Option<&Symbol> {
    self.symbols.get(name)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Declared symbols in declaration order.
  pub fn in_declaration_order(&self) -> impl Iterator<Item = &Symbol> {
    self.order.iter().filter_map(|name| self.symbols.get(name))
  }

  fn declare(&mut self, name: &str) {
    self.symbols.insert(
      name.to_string(),
      Symbol {
        name: name.to_string(),
        ty: "int".to_string(),
      },
    );
    self.order.push(name.to_string());
  }
}

impl Default for SymbolTable {
  fn default() -> Self {
    Self::new()
  }
}

/// Validate the program and return its symbol table.
///
/// Fails on the first duplicate declaration or undeclared reference; the
/// tree itself is left untouched.
pub fn analyze(program: &Program) -> CompileResult<SymbolTable> {
  let mut table = SymbolTable::new();

  for stmt in &program.stmts {
    match stmt {
      Stmt::Decl { name } => {
        if table.contains(&name.text) {
          return Err(CompileError::DuplicateDeclaration {
            name: name.text.clone(),
            line: name.line,
            column: name.column,
          });
        }
        table.declare(&name.text);
      }
      Stmt::Assign { name, value } => {
        if !table.contains(&name.text) {
          return Err(undeclared(name));
        }
        check_expr(value, &table)?;
      }
      Stmt::Print { value, .. } => check_expr(value, &table)?,
    }
  }

  Ok(table)
}

/// Depth-first reference check; numbers are always valid.
fn check_expr(expr: &Expr, table: &SymbolTable) -> CompileResult<()> {
  match expr {
    Expr::Number { .. } => Ok(()),
    Expr::Var { token } => {
      if table.contains(&token.text) {
        Ok(())
      } else {
        Err(undeclared(token))
      }
    }
    Expr::Unary { operand, .. } => check_expr(operand, table),
    Expr::Binary { lhs, rhs, .. } => {
      check_expr(lhs, table)?;
      check_expr(rhs, table)
    }
  }
}

fn undeclared(token: &Token) -> CompileError {
  CompileError::UndeclaredVariable {
    name: token.text.clone(),
    line: token.line,
    column: token.column,
  }
}
